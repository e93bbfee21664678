use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{ChatId, MessageId, MessageTarget};

use super::{
    Audio, Chat, Contact, Document, Game, Invoice, Location, PhotoSize, Sticker,
    SuccessfulPayment, User, Venue, Video, VideoNote, Voice,
};

/// Formatting applied to `text`/`caption` by Telegram clients.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParseMode {
    Markdown,
    #[serde(rename = "HTML")]
    Html,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub message_id: MessageId,
    pub from: Option<User>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub date: DateTime<Utc>,
    pub chat: Chat,

    pub forward_from: Option<User>,
    pub forward_from_chat: Option<Chat>,
    pub forward_from_message_id: Option<MessageId>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub forward_date: Option<DateTime<Utc>>,
    pub reply_to_message: Option<Box<Message>>,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub edit_date: Option<DateTime<Utc>>,
    pub author_signature: Option<String>,

    pub text: Option<String>,
    #[serde(default)]
    pub entities: Vec<MessageEntity>,
    pub caption: Option<String>,

    pub audio: Option<Audio>,
    pub document: Option<Document>,
    pub game: Option<Game>,
    #[serde(default)]
    pub photo: Vec<PhotoSize>,
    pub sticker: Option<Sticker>,
    pub video: Option<Video>,
    pub voice: Option<Voice>,
    pub video_note: Option<VideoNote>,
    pub contact: Option<Contact>,
    pub location: Option<Location>,
    pub venue: Option<Venue>,

    // Service messages
    #[serde(default)]
    pub new_chat_members: Vec<User>,
    pub left_chat_member: Option<User>,
    pub new_chat_title: Option<String>,
    #[serde(default)]
    pub new_chat_photo: Vec<PhotoSize>,
    #[serde(default)]
    pub delete_chat_photo: bool,
    #[serde(default)]
    pub group_chat_created: bool,
    #[serde(default)]
    pub supergroup_chat_created: bool,
    #[serde(default)]
    pub channel_chat_created: bool,
    pub migrate_to_chat_id: Option<i64>,
    pub migrate_from_chat_id: Option<i64>,
    pub pinned_message: Option<Box<Message>>,

    // Payments
    pub invoice: Option<Invoice>,
    pub successful_payment: Option<SuccessfulPayment>,
}

impl Message {
    pub fn chat_id(&self) -> ChatId {
        self.chat.chat_id()
    }

    /// Address of this message for edit calls.
    pub fn target(&self) -> MessageTarget {
        MessageTarget::chat(self.chat_id(), self.message_id)
    }

    /// Largest size of an attached photo, if any.
    pub fn largest_photo(&self) -> Option<&PhotoSize> {
        self.photo.iter().max_by_key(|p| u64::from(p.width) * u64::from(p.height))
    }

    /// Text covered by `entity`, taken from `text` (or `caption` if there is no text).
    ///
    /// Entity offsets count UTF-16 code units.
    pub fn parse_entity(&self, entity: &MessageEntity) -> Option<String> {
        let source = self.text.as_deref().or(self.caption.as_deref())?;
        let units: Vec<u16> = source.encode_utf16().collect();
        let start = entity.offset;
        let end = start.checked_add(entity.length)?;
        let slice = units.get(start..end)?;
        Some(String::from_utf16_lossy(slice))
    }

    /// All entities of the given kinds with the text they cover.
    pub fn parse_entities(&self, kinds: &[MessageEntityKind]) -> Vec<(&MessageEntity, String)> {
        self.entities
            .iter()
            .filter(|e| kinds.is_empty() || kinds.contains(&e.kind))
            .filter_map(|e| self.parse_entity(e).map(|text| (e, text)))
            .collect()
    }

    /// `/command` at the start of the text, without the leading slash or `@botname`.
    pub fn command(&self) -> Option<String> {
        let entity = self
            .entities
            .iter()
            .find(|e| e.kind == MessageEntityKind::BotCommand && e.offset == 0)?;
        let raw = self.parse_entity(entity)?;
        let name = raw.trim_start_matches('/');
        let name = name.split('@').next().unwrap_or(name);
        Some(name.to_string())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageEntityKind {
    Mention,
    Hashtag,
    BotCommand,
    Url,
    Email,
    Bold,
    Italic,
    Code,
    Pre,
    TextLink,
    TextMention,
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MessageEntity {
    #[serde(rename = "type")]
    pub kind: MessageEntityKind,
    pub offset: usize,
    pub length: usize,
    pub url: Option<String>,
    pub user: Option<User>,
}

/// Result of edit-style calls: the edited message for chat messages, `true`
/// for inline messages.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EditedMessage {
    Message(Box<Message>),
    Inline(bool),
}

impl EditedMessage {
    pub fn message(&self) -> Option<&Message> {
        match self {
            EditedMessage::Message(m) => Some(m),
            EditedMessage::Inline(_) => None,
        }
    }

    pub fn into_message(self) -> Option<Message> {
        match self {
            EditedMessage::Message(m) => Some(*m),
            EditedMessage::Inline(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> serde_json::Value {
        json!({
            "message_id": 7,
            "from": {"id": 133505823, "is_bot": true, "first_name": "TgbTestBot", "username": "TgbTestBot"},
            "date": 1_500_000_000,
            "chat": {"id": 12173560, "type": "private", "first_name": "Leandro"},
            "forward_date": 1_500_000_100,
            "text": "/start@TgbTestBot Моё судно 🚀 #tag",
            "entities": [
                {"type": "bot_command", "offset": 0, "length": 17},
                {"type": "hashtag", "offset": 31, "length": 4},
                {"type": "spoiler", "offset": 0, "length": 1}
            ],
            "photo": [
                {"file_id": "small", "width": 90, "height": 90, "file_size": 1451},
                {"file_id": "big", "width": 320, "height": 320}
            ],
            "some_future_field": {"ignored": true}
        })
    }

    #[test]
    fn deserializes_message_with_dates_and_media() {
        let msg: Message = serde_json::from_value(sample()).unwrap();
        assert_eq!(msg.message_id, MessageId(7));
        assert_eq!(msg.date.timestamp(), 1_500_000_000);
        assert_eq!(msg.forward_date.map(|d| d.timestamp()), Some(1_500_000_100));
        assert!(msg.edit_date.is_none());
        assert_eq!(msg.chat_id(), ChatId::Id(12173560));
        assert_eq!(msg.photo[0].file_size, Some(1451));
        assert_eq!(msg.largest_photo().unwrap().file_id, "big");
        assert!(!msg.group_chat_created);
        assert_eq!(msg.entities[2].kind, MessageEntityKind::Unknown);
    }

    #[test]
    fn parse_entity_counts_utf16_units() {
        let msg: Message = serde_json::from_value(sample()).unwrap();
        // "🚀" is two UTF-16 units, so the hashtag sits at offset 31.
        let tags = msg.parse_entities(&[MessageEntityKind::Hashtag]);
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].1, "#tag");
        assert_eq!(msg.command().as_deref(), Some("start"));
    }

    #[test]
    fn parse_entity_out_of_range_is_none() {
        let msg: Message = serde_json::from_value(sample()).unwrap();
        let bogus = MessageEntity {
            kind: MessageEntityKind::Bold,
            offset: 1000,
            length: 2,
            url: None,
            user: None,
        };
        assert!(msg.parse_entity(&bogus).is_none());
    }

    #[test]
    fn largest_photo_handles_huge_dimensions() {
        let mut v = sample();
        v["photo"] = json!([
            {"file_id": "wide", "width": u32::MAX, "height": u32::MAX},
            {"file_id": "tall", "width": 2, "height": u32::MAX}
        ]);
        let msg: Message = serde_json::from_value(v).unwrap();
        assert_eq!(msg.largest_photo().unwrap().file_id, "wide");
    }

    #[test]
    fn edited_message_accepts_true_or_message() {
        let inline: EditedMessage = serde_json::from_value(json!(true)).unwrap();
        assert_eq!(inline, EditedMessage::Inline(true));
        assert!(inline.message().is_none());

        let edited: EditedMessage = serde_json::from_value(sample()).unwrap();
        assert_eq!(edited.message().unwrap().message_id, MessageId(7));
    }

    #[test]
    fn parse_mode_wire_names() {
        assert_eq!(serde_json::to_value(ParseMode::Html).unwrap(), json!("HTML"));
        assert_eq!(
            serde_json::to_value(ParseMode::Markdown).unwrap(),
            json!("Markdown")
        );
    }
}
