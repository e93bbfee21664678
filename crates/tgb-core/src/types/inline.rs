//! Inline-mode results and the message contents they can send.

use serde::{Deserialize, Serialize};

use super::{InlineKeyboardMarkup, ParseMode};

/// One result of `answer_inline_query`, tagged by `type` on the wire.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InlineQueryResult {
    Article(InlineQueryResultArticle),
    Photo(InlineQueryResultPhoto),
    Gif(InlineQueryResultGif),
    #[serde(rename = "mpeg4_gif")]
    Mpeg4Gif(InlineQueryResultMpeg4Gif),
    Video(InlineQueryResultVideo),
    Audio(InlineQueryResultAudio),
    Voice(InlineQueryResultVoice),
    Document(InlineQueryResultDocument),
    Location(InlineQueryResultLocation),
    Venue(InlineQueryResultVenue),
    Contact(InlineQueryResultContact),
    Game(InlineQueryResultGame),
}

macro_rules! impl_into_result {
    ($($variant:ident => $ty:ident),* $(,)?) => {
        $(
            impl From<$ty> for InlineQueryResult {
                fn from(r: $ty) -> Self {
                    InlineQueryResult::$variant(r)
                }
            }
        )*
    };
}

impl_into_result!(
    Article => InlineQueryResultArticle,
    Photo => InlineQueryResultPhoto,
    Gif => InlineQueryResultGif,
    Mpeg4Gif => InlineQueryResultMpeg4Gif,
    Video => InlineQueryResultVideo,
    Audio => InlineQueryResultAudio,
    Voice => InlineQueryResultVoice,
    Document => InlineQueryResultDocument,
    Location => InlineQueryResultLocation,
    Venue => InlineQueryResultVenue,
    Contact => InlineQueryResultContact,
    Game => InlineQueryResultGame,
);

impl InlineQueryResult {
    pub fn id(&self) -> &str {
        match self {
            InlineQueryResult::Article(r) => &r.id,
            InlineQueryResult::Photo(r) => &r.id,
            InlineQueryResult::Gif(r) => &r.id,
            InlineQueryResult::Mpeg4Gif(r) => &r.id,
            InlineQueryResult::Video(r) => &r.id,
            InlineQueryResult::Audio(r) => &r.id,
            InlineQueryResult::Voice(r) => &r.id,
            InlineQueryResult::Document(r) => &r.id,
            InlineQueryResult::Location(r) => &r.id,
            InlineQueryResult::Venue(r) => &r.id,
            InlineQueryResult::Contact(r) => &r.id,
            InlineQueryResult::Game(r) => &r.id,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InlineQueryResultArticle {
    pub id: String,
    pub title: String,
    pub input_message_content: InputMessageContent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_url: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb_height: Option<u32>,
}

impl InlineQueryResultArticle {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        input_message_content: impl Into<InputMessageContent>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            input_message_content: input_message_content.into(),
            reply_markup: None,
            url: None,
            hide_url: None,
            description: None,
            thumb_url: None,
            thumb_width: None,
            thumb_height: None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InlineQueryResultPhoto {
    pub id: String,
    /// JPEG only, at most 5 MB.
    pub photo_url: String,
    pub thumb_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
}

impl InlineQueryResultPhoto {
    pub fn new(
        id: impl Into<String>,
        photo_url: impl Into<String>,
        thumb_url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            photo_url: photo_url.into(),
            thumb_url: thumb_url.into(),
            ..Default::default()
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InlineQueryResultGif {
    pub id: String,
    pub gif_url: String,
    pub thumb_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gif_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gif_height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gif_duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
}

impl InlineQueryResultGif {
    pub fn new(id: impl Into<String>, gif_url: impl Into<String>, thumb_url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            gif_url: gif_url.into(),
            thumb_url: thumb_url.into(),
            ..Default::default()
        }
    }
}

/// Animation without sound (H.264/MPEG-4 AVC).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InlineQueryResultMpeg4Gif {
    pub id: String,
    pub mpeg4_url: String,
    pub thumb_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mpeg4_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mpeg4_height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mpeg4_duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
}

impl InlineQueryResultMpeg4Gif {
    pub fn new(
        id: impl Into<String>,
        mpeg4_url: impl Into<String>,
        thumb_url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            mpeg4_url: mpeg4_url.into(),
            thumb_url: thumb_url.into(),
            ..Default::default()
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InlineQueryResultVideo {
    pub id: String,
    pub video_url: String,
    /// "text/html" or "video/mp4".
    pub mime_type: String,
    pub thumb_url: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
}

impl InlineQueryResultVideo {
    pub fn new(
        id: impl Into<String>,
        video_url: impl Into<String>,
        mime_type: impl Into<String>,
        thumb_url: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            video_url: video_url.into(),
            mime_type: mime_type.into(),
            thumb_url: thumb_url.into(),
            title: title.into(),
            ..Default::default()
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InlineQueryResultAudio {
    pub id: String,
    pub audio_url: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
}

impl InlineQueryResultAudio {
    pub fn new(id: impl Into<String>, audio_url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            audio_url: audio_url.into(),
            title: title.into(),
            ..Default::default()
        }
    }
}

/// Voice recording in an .ogg container encoded with OPUS.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InlineQueryResultVoice {
    pub id: String,
    pub voice_url: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
}

impl InlineQueryResultVoice {
    pub fn new(id: impl Into<String>, voice_url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            voice_url: voice_url.into(),
            title: title.into(),
            ..Default::default()
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InlineQueryResultDocument {
    pub id: String,
    pub title: String,
    pub document_url: String,
    /// "application/pdf" or "application/zip".
    pub mime_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb_height: Option<u32>,
}

impl InlineQueryResultDocument {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        document_url: impl Into<String>,
        mime_type: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            document_url: document_url.into(),
            mime_type: mime_type.into(),
            ..Default::default()
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InlineQueryResultLocation {
    pub id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb_height: Option<u32>,
}

impl InlineQueryResultLocation {
    pub fn new(id: impl Into<String>, latitude: f64, longitude: f64, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            latitude,
            longitude,
            title: title.into(),
            ..Default::default()
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InlineQueryResultVenue {
    pub id: String,
    pub latitude: f64,
    pub longitude: f64,
    pub title: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foursquare_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb_height: Option<u32>,
}

impl InlineQueryResultVenue {
    pub fn new(
        id: impl Into<String>,
        latitude: f64,
        longitude: f64,
        title: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            latitude,
            longitude,
            title: title.into(),
            address: address.into(),
            ..Default::default()
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InlineQueryResultContact {
    pub id: String,
    pub phone_number: String,
    pub first_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_message_content: Option<InputMessageContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb_height: Option<u32>,
}

impl InlineQueryResultContact {
    pub fn new(
        id: impl Into<String>,
        phone_number: impl Into<String>,
        first_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            phone_number: phone_number.into(),
            first_name: first_name.into(),
            ..Default::default()
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InlineQueryResultGame {
    pub id: String,
    pub game_short_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl InlineQueryResultGame {
    pub fn new(id: impl Into<String>, game_short_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            game_short_name: game_short_name.into(),
            reply_markup: None,
        }
    }
}

/// Content of the message sent when an inline result is chosen.
///
/// Untagged on the wire: the variant is recognized by its required fields,
/// so venue (a superset of location) is tried before location.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InputMessageContent {
    Text(InputTextMessageContent),
    Venue(InputVenueMessageContent),
    Location(InputLocationMessageContent),
    Contact(InputContactMessageContent),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InputTextMessageContent {
    pub message_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<ParseMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_web_page_preview: Option<bool>,
}

impl InputTextMessageContent {
    pub fn new(message_text: impl Into<String>) -> Self {
        Self {
            message_text: message_text.into(),
            parse_mode: None,
            disable_web_page_preview: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InputLocationMessageContent {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InputVenueMessageContent {
    pub latitude: f64,
    pub longitude: f64,
    pub title: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foursquare_id: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InputContactMessageContent {
    pub phone_number: String,
    pub first_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

impl InputContactMessageContent {
    pub fn new(phone_number: impl Into<String>, first_name: impl Into<String>) -> Self {
        Self {
            phone_number: phone_number.into(),
            first_name: first_name.into(),
            last_name: None,
        }
    }
}

impl From<InputTextMessageContent> for InputMessageContent {
    fn from(c: InputTextMessageContent) -> Self {
        InputMessageContent::Text(c)
    }
}

impl From<InputLocationMessageContent> for InputMessageContent {
    fn from(c: InputLocationMessageContent) -> Self {
        InputMessageContent::Location(c)
    }
}

impl From<InputVenueMessageContent> for InputMessageContent {
    fn from(c: InputVenueMessageContent) -> Self {
        InputMessageContent::Venue(c)
    }
}

impl From<InputContactMessageContent> for InputMessageContent {
    fn from(c: InputContactMessageContent) -> Self {
        InputMessageContent::Contact(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn contact_content_is_recognized_from_json() {
        let v = json!({
            "first_name": "first name",
            "phone_number": "phone number",
            "last_name": "last name"
        });
        let content: InputMessageContent = serde_json::from_value(v).unwrap();
        match content {
            InputMessageContent::Contact(c) => {
                assert_eq!(c.first_name, "first name");
                assert_eq!(c.phone_number, "phone number");
                assert_eq!(c.last_name.as_deref(), Some("last name"));
            }
            other => panic!("expected contact content, got {other:?}"),
        }
    }

    #[test]
    fn content_without_required_fields_is_rejected() {
        let v = json!({"last_name": "last name"});
        assert!(serde_json::from_value::<InputMessageContent>(v).is_err());
    }

    #[test]
    fn venue_is_not_mistaken_for_location() {
        let v = json!({"latitude": 1.5, "longitude": 2.5, "title": "t", "address": "a"});
        let content: InputMessageContent = serde_json::from_value(v).unwrap();
        assert!(matches!(content, InputMessageContent::Venue(_)));

        let v = json!({"latitude": 1.5, "longitude": 2.5});
        let content: InputMessageContent = serde_json::from_value(v).unwrap();
        assert!(matches!(content, InputMessageContent::Location(_)));
    }

    #[test]
    fn voice_result_to_dict() {
        let mut voice = InlineQueryResultVoice::new("id", "voice url", "title");
        voice.voice_duration = Some(5);
        voice.caption = Some("caption".to_string());
        voice.parse_mode = Some(ParseMode::Html);
        voice.input_message_content =
            Some(InputTextMessageContent::new("input_message_content").into());

        let v = serde_json::to_value(InlineQueryResult::from(voice)).unwrap();
        assert_eq!(
            v,
            json!({
                "type": "voice",
                "id": "id",
                "voice_url": "voice url",
                "title": "title",
                "caption": "caption",
                "parse_mode": "HTML",
                "voice_duration": 5,
                "input_message_content": {"message_text": "input_message_content"}
            })
        );
    }

    #[test]
    fn mpeg4_gif_result_uses_snake_case_tag() {
        let mut gif = InlineQueryResultMpeg4Gif::new("id", "mpeg4 url", "thumb url");
        gif.mpeg4_width = Some(10);
        gif.reply_markup = Some(InlineKeyboardMarkup::from_button(
            super::super::InlineKeyboardButton::callback("reply_markup", "data"),
        ));

        let result = InlineQueryResult::from(gif);
        assert_eq!(result.id(), "id");
        let v = serde_json::to_value(&result).unwrap();
        assert_eq!(v["type"], "mpeg4_gif");
        assert_eq!(v["mpeg4_width"], 10);
        assert_eq!(v["reply_markup"]["inline_keyboard"][0][0]["text"], "reply_markup");
        assert!(v.get("caption").is_none());

        let back: InlineQueryResult = serde_json::from_value(v).unwrap();
        assert_eq!(back, result);
    }
}
