use std::fmt;

use serde::{Deserialize, Serialize};

/// Telegram user id (numeric).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

/// Telegram message id, unique within a chat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(pub i32);

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        UserId(id)
    }
}

impl From<i32> for UserId {
    fn from(id: i32) -> Self {
        UserId(i64::from(id))
    }
}

impl From<i32> for MessageId {
    fn from(id: i32) -> Self {
        MessageId(id)
    }
}

/// Target chat of a call: a numeric chat id or the `@username` of a public
/// channel/supergroup.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChatId {
    Id(i64),
    Username(String),
}

impl From<i64> for ChatId {
    fn from(id: i64) -> Self {
        ChatId::Id(id)
    }
}

impl From<i32> for ChatId {
    fn from(id: i32) -> Self {
        ChatId::Id(i64::from(id))
    }
}

/// A private chat with a user has the user's id.
impl From<UserId> for ChatId {
    fn from(id: UserId) -> Self {
        ChatId::Id(id.0)
    }
}

impl From<&str> for ChatId {
    fn from(s: &str) -> Self {
        let s = s.trim();
        match s.parse::<i64>() {
            Ok(id) => ChatId::Id(id),
            Err(_) if s.starts_with('@') => ChatId::Username(s.to_string()),
            Err(_) => ChatId::Username(format!("@{s}")),
        }
    }
}

impl From<String> for ChatId {
    fn from(s: String) -> Self {
        ChatId::from(s.as_str())
    }
}

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatId::Id(id) => write!(f, "{id}"),
            ChatId::Username(name) => f.write_str(name),
        }
    }
}

/// The message an edit/game-score call applies to.
///
/// Messages sent by the bot are addressed by chat + message id; messages sent
/// via inline mode only have an inline message id.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum MessageTarget {
    Chat {
        chat_id: ChatId,
        message_id: MessageId,
    },
    Inline(String),
}

impl MessageTarget {
    pub fn chat(chat_id: impl Into<ChatId>, message_id: impl Into<MessageId>) -> Self {
        MessageTarget::Chat {
            chat_id: chat_id.into(),
            message_id: message_id.into(),
        }
    }

    pub fn inline(inline_message_id: impl Into<String>) -> Self {
        MessageTarget::Inline(inline_message_id.into())
    }

    /// Split into the three optional wire fields
    /// (`chat_id`, `message_id`, `inline_message_id`).
    pub fn into_parts(self) -> (Option<ChatId>, Option<MessageId>, Option<String>) {
        match self {
            MessageTarget::Chat {
                chat_id,
                message_id,
            } => (Some(chat_id), Some(message_id), None),
            MessageTarget::Inline(id) => (None, None, Some(id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_id_parses_numbers_and_usernames() {
        assert_eq!(ChatId::from("-1001234"), ChatId::Id(-1001234));
        assert_eq!(
            ChatId::from("@channel"),
            ChatId::Username("@channel".to_string())
        );
        assert_eq!(
            ChatId::from("channel"),
            ChatId::Username("@channel".to_string())
        );
    }

    #[test]
    fn chat_id_serializes_untagged() {
        assert_eq!(serde_json::to_string(&ChatId::Id(42)).unwrap(), "42");
        assert_eq!(
            serde_json::to_string(&ChatId::from("@news")).unwrap(),
            "\"@news\""
        );
    }
}
