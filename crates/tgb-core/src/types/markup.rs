use serde::{Deserialize, Serialize};

use super::CallbackGame;

/// Any of the four keyboard/reply options a message can carry.
///
/// On the wire this is a JSON object (JSON bodies) or a JSON-encoded string
/// (multipart bodies); the parameter map takes care of the difference.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReplyMarkup {
    InlineKeyboard(InlineKeyboardMarkup),
    Keyboard(ReplyKeyboardMarkup),
    Remove(ReplyKeyboardRemove),
    ForceReply(ForceReply),
}

impl From<InlineKeyboardMarkup> for ReplyMarkup {
    fn from(m: InlineKeyboardMarkup) -> Self {
        ReplyMarkup::InlineKeyboard(m)
    }
}

impl From<ReplyKeyboardMarkup> for ReplyMarkup {
    fn from(m: ReplyKeyboardMarkup) -> Self {
        ReplyMarkup::Keyboard(m)
    }
}

impl From<ReplyKeyboardRemove> for ReplyMarkup {
    fn from(m: ReplyKeyboardRemove) -> Self {
        ReplyMarkup::Remove(m)
    }
}

impl From<ForceReply> for ReplyMarkup {
    fn from(m: ForceReply) -> Self {
        ReplyMarkup::ForceReply(m)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InlineKeyboardMarkup {
    pub inline_keyboard: Vec<Vec<InlineKeyboardButton>>,
}

impl InlineKeyboardMarkup {
    pub fn new(rows: Vec<Vec<InlineKeyboardButton>>) -> Self {
        Self {
            inline_keyboard: rows,
        }
    }

    pub fn from_button(button: InlineKeyboardButton) -> Self {
        Self::new(vec![vec![button]])
    }

    pub fn append_row(mut self, row: Vec<InlineKeyboardButton>) -> Self {
        self.inline_keyboard.push(row);
        self
    }
}

/// Exactly one of the optional fields must be set; the constructors do that.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InlineKeyboardButton {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub switch_inline_query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub switch_inline_query_current_chat: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_game: Option<CallbackGame>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pay: Option<bool>,
}

impl InlineKeyboardButton {
    fn bare(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: None,
            callback_data: None,
            switch_inline_query: None,
            switch_inline_query_current_chat: None,
            callback_game: None,
            pay: None,
        }
    }

    pub fn url(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::bare(text)
        }
    }

    /// `data` must be 1-64 bytes.
    pub fn callback(text: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            callback_data: Some(data.into()),
            ..Self::bare(text)
        }
    }

    pub fn switch_inline_query(text: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            switch_inline_query: Some(query.into()),
            ..Self::bare(text)
        }
    }

    pub fn switch_inline_query_current_chat(
        text: impl Into<String>,
        query: impl Into<String>,
    ) -> Self {
        Self {
            switch_inline_query_current_chat: Some(query.into()),
            ..Self::bare(text)
        }
    }

    /// Must be the first button of the first row.
    pub fn game(text: impl Into<String>) -> Self {
        Self {
            callback_game: Some(CallbackGame {}),
            ..Self::bare(text)
        }
    }

    /// Must be the first button of the first row, invoices only.
    pub fn pay(text: impl Into<String>) -> Self {
        Self {
            pay: Some(true),
            ..Self::bare(text)
        }
    }
}

/// Custom keyboard replacing the user's keyboard.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ReplyKeyboardMarkup {
    pub keyboard: Vec<Vec<KeyboardButton>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resize_keyboard: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub one_time_keyboard: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selective: Option<bool>,
}

impl ReplyKeyboardMarkup {
    pub fn new(rows: Vec<Vec<KeyboardButton>>) -> Self {
        Self {
            keyboard: rows,
            ..Default::default()
        }
    }

    pub fn resize(mut self) -> Self {
        self.resize_keyboard = Some(true);
        self
    }

    pub fn one_time(mut self) -> Self {
        self.one_time_keyboard = Some(true);
        self
    }

    pub fn selective(mut self) -> Self {
        self.selective = Some(true);
        self
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KeyboardButton {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_contact: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_location: Option<bool>,
}

impl KeyboardButton {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            request_contact: None,
            request_location: None,
        }
    }

    pub fn request_contact(mut self) -> Self {
        self.request_contact = Some(true);
        self
    }

    pub fn request_location(mut self) -> Self {
        self.request_location = Some(true);
        self
    }
}

impl From<&str> for KeyboardButton {
    fn from(text: &str) -> Self {
        KeyboardButton::new(text)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReplyKeyboardRemove {
    /// Always `true` on the wire.
    pub remove_keyboard: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selective: Option<bool>,
}

impl ReplyKeyboardRemove {
    pub fn new() -> Self {
        Self {
            remove_keyboard: true,
            selective: None,
        }
    }
}

impl Default for ReplyKeyboardRemove {
    fn default() -> Self {
        Self::new()
    }
}

/// Ask the client to show a reply interface to the user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ForceReply {
    /// Always `true` on the wire.
    pub force_reply: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selective: Option<bool>,
}

impl ForceReply {
    pub fn new() -> Self {
        Self {
            force_reply: true,
            selective: None,
        }
    }
}

impl Default for ForceReply {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn keyboard_button_to_dict() {
        let button = KeyboardButton::new("text")
            .request_location()
            .request_contact();
        let v = serde_json::to_value(&button).unwrap();
        assert_eq!(
            v,
            json!({"text": "text", "request_location": true, "request_contact": true})
        );
    }

    #[test]
    fn keyboard_button_list_round_trips() {
        let button = KeyboardButton::new("text").request_contact();
        let list = json!([button, button]);
        let parsed: Vec<KeyboardButton> = serde_json::from_value(list).unwrap();
        assert_eq!(parsed, vec![button.clone(), button]);
    }

    #[test]
    fn inline_button_only_serializes_its_action() {
        let v = serde_json::to_value(InlineKeyboardButton::callback("Yes", "vote:yes")).unwrap();
        assert_eq!(v, json!({"text": "Yes", "callback_data": "vote:yes"}));

        let v = serde_json::to_value(InlineKeyboardButton::game("Play")).unwrap();
        assert_eq!(v, json!({"text": "Play", "callback_game": {}}));
    }

    #[test]
    fn reply_markup_variants_are_distinguished() {
        let remove: ReplyMarkup =
            serde_json::from_value(json!({"remove_keyboard": true})).unwrap();
        assert!(matches!(remove, ReplyMarkup::Remove(_)));

        let force: ReplyMarkup =
            serde_json::from_value(json!({"force_reply": true, "selective": true})).unwrap();
        assert!(matches!(force, ReplyMarkup::ForceReply(_)));

        let inline: ReplyMarkup = serde_json::from_value(json!({
            "inline_keyboard": [[{"text": "a", "url": "https://t.me"}]]
        }))
        .unwrap();
        assert!(matches!(inline, ReplyMarkup::InlineKeyboard(_)));
    }
}
