use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Chat, Location, Message, PreCheckoutQuery, ShippingQuery, User};

/// One incoming update. At most one of the optional fields is present.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Update {
    pub update_id: i64,
    pub message: Option<Message>,
    pub edited_message: Option<Message>,
    pub channel_post: Option<Message>,
    pub edited_channel_post: Option<Message>,
    pub inline_query: Option<InlineQuery>,
    pub chosen_inline_result: Option<ChosenInlineResult>,
    pub callback_query: Option<CallbackQuery>,
    pub shipping_query: Option<ShippingQuery>,
    pub pre_checkout_query: Option<PreCheckoutQuery>,
}

/// Borrowed view of whichever payload an [`Update`] carries.
#[derive(Clone, Copy, Debug)]
pub enum UpdateKind<'a> {
    Message(&'a Message),
    EditedMessage(&'a Message),
    ChannelPost(&'a Message),
    EditedChannelPost(&'a Message),
    InlineQuery(&'a InlineQuery),
    ChosenInlineResult(&'a ChosenInlineResult),
    CallbackQuery(&'a CallbackQuery),
    ShippingQuery(&'a ShippingQuery),
    PreCheckoutQuery(&'a PreCheckoutQuery),
}

impl Update {
    pub fn kind(&self) -> Option<UpdateKind<'_>> {
        if let Some(m) = &self.message {
            return Some(UpdateKind::Message(m));
        }
        if let Some(m) = &self.edited_message {
            return Some(UpdateKind::EditedMessage(m));
        }
        if let Some(m) = &self.channel_post {
            return Some(UpdateKind::ChannelPost(m));
        }
        if let Some(m) = &self.edited_channel_post {
            return Some(UpdateKind::EditedChannelPost(m));
        }
        if let Some(q) = &self.inline_query {
            return Some(UpdateKind::InlineQuery(q));
        }
        if let Some(r) = &self.chosen_inline_result {
            return Some(UpdateKind::ChosenInlineResult(r));
        }
        if let Some(q) = &self.callback_query {
            return Some(UpdateKind::CallbackQuery(q));
        }
        if let Some(q) = &self.shipping_query {
            return Some(UpdateKind::ShippingQuery(q));
        }
        self.pre_checkout_query
            .as_ref()
            .map(UpdateKind::PreCheckoutQuery)
    }

    /// The message this update is about, including the message a callback
    /// button was attached to.
    pub fn effective_message(&self) -> Option<&Message> {
        match self.kind()? {
            UpdateKind::Message(m)
            | UpdateKind::EditedMessage(m)
            | UpdateKind::ChannelPost(m)
            | UpdateKind::EditedChannelPost(m) => Some(m),
            UpdateKind::CallbackQuery(q) => q.message.as_ref(),
            _ => None,
        }
    }

    pub fn effective_chat(&self) -> Option<&Chat> {
        self.effective_message().map(|m| &m.chat)
    }

    pub fn effective_user(&self) -> Option<&User> {
        match self.kind()? {
            UpdateKind::Message(m)
            | UpdateKind::EditedMessage(m)
            | UpdateKind::ChannelPost(m)
            | UpdateKind::EditedChannelPost(m) => m.from.as_ref(),
            UpdateKind::InlineQuery(q) => Some(&q.from),
            UpdateKind::ChosenInlineResult(r) => Some(&r.from),
            UpdateKind::CallbackQuery(q) => Some(&q.from),
            UpdateKind::ShippingQuery(q) => Some(&q.from),
            UpdateKind::PreCheckoutQuery(q) => Some(&q.from),
        }
    }
}

/// Press of an inline keyboard button.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CallbackQuery {
    pub id: String,
    pub from: User,
    pub message: Option<Message>,
    pub inline_message_id: Option<String>,
    pub chat_instance: Option<String>,
    pub data: Option<String>,
    pub game_short_name: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InlineQuery {
    pub id: String,
    pub from: User,
    pub location: Option<Location>,
    pub query: String,
    pub offset: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChosenInlineResult {
    pub result_id: String,
    pub from: User,
    pub location: Option<Location>,
    pub inline_message_id: Option<String>,
    pub query: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WebhookInfo {
    /// Empty when no webhook is set.
    pub url: String,
    pub has_custom_certificate: bool,
    pub pending_update_count: i64,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub last_error_date: Option<DateTime<Utc>>,
    pub last_error_message: Option<String>,
    pub max_connections: Option<u32>,
    pub allowed_updates: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ChatMember, ChatMemberStatus, ChatType};
    use serde_json::json;

    #[test]
    fn callback_update_exposes_effective_message_and_user() {
        let update: Update = serde_json::from_value(json!({
            "update_id": 10,
            "callback_query": {
                "id": "cb1",
                "from": {"id": 5, "first_name": "Ann"},
                "chat_instance": "ci",
                "data": "vote:yes",
                "message": {
                    "message_id": 3,
                    "date": 1_500_000_000,
                    "chat": {"id": -100, "type": "group", "title": "G"}
                }
            }
        }))
        .unwrap();

        assert!(matches!(update.kind(), Some(UpdateKind::CallbackQuery(_))));
        assert_eq!(update.effective_user().unwrap().first_name, "Ann");
        assert_eq!(update.effective_chat().unwrap().id, -100);
    }

    #[test]
    fn inline_query_has_no_effective_chat() {
        let update: Update = serde_json::from_value(json!({
            "update_id": 11,
            "inline_query": {
                "id": "q",
                "from": {"id": 5, "first_name": "Ann"},
                "query": "cats",
                "offset": ""
            }
        }))
        .unwrap();

        assert!(update.effective_chat().is_none());
        assert_eq!(update.effective_user().unwrap().id.0, 5);
    }

    #[test]
    fn unknown_enum_values_fall_back() {
        let update: Update = serde_json::from_value(json!({
            "update_id": 12,
            "channel_post": {
                "message_id": 4,
                "date": 1_500_000_000,
                "chat": {"id": -1001, "type": "sender", "title": "S"}
            }
        }))
        .unwrap();
        let chat = update.effective_chat().unwrap();
        assert_eq!(chat.kind, ChatType::Unknown);
        assert!(!chat.is_private());

        let member: ChatMember = serde_json::from_value(json!({
            "user": {"id": 5, "first_name": "Ann"},
            "status": "owner"
        }))
        .unwrap();
        assert_eq!(member.status, ChatMemberStatus::Unknown);
        assert!(!member.is_admin());
    }
}
