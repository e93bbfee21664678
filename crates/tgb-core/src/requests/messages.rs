use serde::Serialize;

use super::{check_target, Method, MessageOptions, Request};
use crate::{
    bot::Bot,
    domain::{ChatId, MessageId, MessageTarget},
    types::{ChatAction, EditedMessage, InlineKeyboardMarkup, Message, ParseMode},
    Result,
};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SendMessage {
    pub chat_id: ChatId,
    pub text: String,
    pub parse_mode: Option<ParseMode>,
    pub disable_web_page_preview: Option<bool>,
    #[serde(flatten)]
    pub options: MessageOptions,
}

impl Method for SendMessage {
    type Output = Message;
    const NAME: &'static str = "sendMessage";
}

setters!(SendMessage {
    parse_mode: ParseMode,
    disable_web_page_preview: bool,
});
message_options!(SendMessage);

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ForwardMessage {
    pub chat_id: ChatId,
    pub from_chat_id: ChatId,
    pub message_id: MessageId,
    pub disable_notification: Option<bool>,
}

impl Method for ForwardMessage {
    type Output = Message;
    const NAME: &'static str = "forwardMessage";
}

setters!(ForwardMessage {
    disable_notification: bool,
});

/// Only messages younger than 48 hours can be deleted.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DeleteMessage {
    pub chat_id: ChatId,
    pub message_id: MessageId,
}

impl Method for DeleteMessage {
    type Output = bool;
    const NAME: &'static str = "deleteMessage";
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SendLocation {
    pub chat_id: ChatId,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(flatten)]
    pub options: MessageOptions,
}

impl Method for SendLocation {
    type Output = Message;
    const NAME: &'static str = "sendLocation";
}

message_options!(SendLocation);

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SendVenue {
    pub chat_id: ChatId,
    pub latitude: f64,
    pub longitude: f64,
    pub title: String,
    pub address: String,
    pub foursquare_id: Option<String>,
    #[serde(flatten)]
    pub options: MessageOptions,
}

impl Method for SendVenue {
    type Output = Message;
    const NAME: &'static str = "sendVenue";
}

setters!(SendVenue {
    foursquare_id: String,
});
message_options!(SendVenue);

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SendContact {
    pub chat_id: ChatId,
    pub phone_number: String,
    pub first_name: String,
    pub last_name: Option<String>,
    #[serde(flatten)]
    pub options: MessageOptions,
}

impl Method for SendContact {
    type Output = Message;
    const NAME: &'static str = "sendContact";
}

setters!(SendContact {
    last_name: String,
});
message_options!(SendContact);

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SendChatAction {
    pub chat_id: ChatId,
    pub action: ChatAction,
}

impl Method for SendChatAction {
    type Output = bool;
    const NAME: &'static str = "sendChatAction";
}

/// Edit of a text message sent by the bot (or via inline mode).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EditMessageText {
    pub chat_id: Option<ChatId>,
    pub message_id: Option<MessageId>,
    pub inline_message_id: Option<String>,
    pub text: String,
    pub parse_mode: Option<ParseMode>,
    pub disable_web_page_preview: Option<bool>,
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl Method for EditMessageText {
    type Output = EditedMessage;
    const NAME: &'static str = "editMessageText";

    fn validate(&self) -> Result<()> {
        check_target(&self.chat_id, &self.message_id, &self.inline_message_id)
    }
}

setters!(EditMessageText {
    parse_mode: ParseMode,
    disable_web_page_preview: bool,
    reply_markup: InlineKeyboardMarkup,
});

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EditMessageCaption {
    pub chat_id: Option<ChatId>,
    pub message_id: Option<MessageId>,
    pub inline_message_id: Option<String>,
    pub caption: Option<String>,
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl Method for EditMessageCaption {
    type Output = EditedMessage;
    const NAME: &'static str = "editMessageCaption";

    fn validate(&self) -> Result<()> {
        check_target(&self.chat_id, &self.message_id, &self.inline_message_id)
    }
}

setters!(EditMessageCaption {
    caption: String,
    reply_markup: InlineKeyboardMarkup,
});

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EditMessageReplyMarkup {
    pub chat_id: Option<ChatId>,
    pub message_id: Option<MessageId>,
    pub inline_message_id: Option<String>,
    pub reply_markup: Option<InlineKeyboardMarkup>,
}

impl Method for EditMessageReplyMarkup {
    type Output = EditedMessage;
    const NAME: &'static str = "editMessageReplyMarkup";

    fn validate(&self) -> Result<()> {
        check_target(&self.chat_id, &self.message_id, &self.inline_message_id)
    }
}

setters!(EditMessageReplyMarkup {
    reply_markup: InlineKeyboardMarkup,
});

impl Bot {
    pub fn send_message(
        &self,
        chat_id: impl Into<ChatId>,
        text: impl Into<String>,
    ) -> Request<'_, SendMessage> {
        Request::new(
            self,
            SendMessage {
                chat_id: chat_id.into(),
                text: text.into(),
                parse_mode: None,
                disable_web_page_preview: None,
                options: MessageOptions::default(),
            },
        )
    }

    pub fn forward_message(
        &self,
        chat_id: impl Into<ChatId>,
        from_chat_id: impl Into<ChatId>,
        message_id: impl Into<MessageId>,
    ) -> Request<'_, ForwardMessage> {
        Request::new(
            self,
            ForwardMessage {
                chat_id: chat_id.into(),
                from_chat_id: from_chat_id.into(),
                message_id: message_id.into(),
                disable_notification: None,
            },
        )
    }

    pub fn delete_message(
        &self,
        chat_id: impl Into<ChatId>,
        message_id: impl Into<MessageId>,
    ) -> Request<'_, DeleteMessage> {
        Request::new(
            self,
            DeleteMessage {
                chat_id: chat_id.into(),
                message_id: message_id.into(),
            },
        )
    }

    pub fn send_location(
        &self,
        chat_id: impl Into<ChatId>,
        latitude: f64,
        longitude: f64,
    ) -> Request<'_, SendLocation> {
        Request::new(
            self,
            SendLocation {
                chat_id: chat_id.into(),
                latitude,
                longitude,
                options: MessageOptions::default(),
            },
        )
    }

    pub fn send_venue(
        &self,
        chat_id: impl Into<ChatId>,
        latitude: f64,
        longitude: f64,
        title: impl Into<String>,
        address: impl Into<String>,
    ) -> Request<'_, SendVenue> {
        Request::new(
            self,
            SendVenue {
                chat_id: chat_id.into(),
                latitude,
                longitude,
                title: title.into(),
                address: address.into(),
                foursquare_id: None,
                options: MessageOptions::default(),
            },
        )
    }

    pub fn send_contact(
        &self,
        chat_id: impl Into<ChatId>,
        phone_number: impl Into<String>,
        first_name: impl Into<String>,
    ) -> Request<'_, SendContact> {
        Request::new(
            self,
            SendContact {
                chat_id: chat_id.into(),
                phone_number: phone_number.into(),
                first_name: first_name.into(),
                last_name: None,
                options: MessageOptions::default(),
            },
        )
    }

    /// Show a status such as "typing…" for about 5 seconds.
    pub fn send_chat_action(
        &self,
        chat_id: impl Into<ChatId>,
        action: ChatAction,
    ) -> Request<'_, SendChatAction> {
        Request::new(
            self,
            SendChatAction {
                chat_id: chat_id.into(),
                action,
            },
        )
    }

    pub fn edit_message_text(
        &self,
        target: MessageTarget,
        text: impl Into<String>,
    ) -> Request<'_, EditMessageText> {
        let (chat_id, message_id, inline_message_id) = target.into_parts();
        Request::new(
            self,
            EditMessageText {
                chat_id,
                message_id,
                inline_message_id,
                text: text.into(),
                parse_mode: None,
                disable_web_page_preview: None,
                reply_markup: None,
            },
        )
    }

    pub fn edit_message_caption(&self, target: MessageTarget) -> Request<'_, EditMessageCaption> {
        let (chat_id, message_id, inline_message_id) = target.into_parts();
        Request::new(
            self,
            EditMessageCaption {
                chat_id,
                message_id,
                inline_message_id,
                caption: None,
                reply_markup: None,
            },
        )
    }

    pub fn edit_message_reply_markup(
        &self,
        target: MessageTarget,
    ) -> Request<'_, EditMessageReplyMarkup> {
        let (chat_id, message_id, inline_message_id) = target.into_parts();
        Request::new(
            self,
            EditMessageReplyMarkup {
                chat_id,
                message_id,
                inline_message_id,
                reply_markup: None,
            },
        )
    }
}
