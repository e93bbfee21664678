//! Request payloads, one per Bot API method, and the builder that sends them.
//!
//! `Bot::send_message(chat, text)` and friends return a [`Request`]; optional
//! parameters are builder setters and the request runs when awaited.

use std::{
    future::{Future, IntoFuture},
    pin::Pin,
    time::Duration,
};

use serde::{de::DeserializeOwned, Serialize};

use crate::{
    bot::Bot,
    domain::{ChatId, MessageId},
    errors::Error,
    input_file::InputFile,
    transport::HttpMethod,
    types::ReplyMarkup,
    Result,
};

/// Builder setters for optional payload fields.
macro_rules! setters {
    ($payload:ty { $($field:ident : $ty:ty),* $(,)? }) => {
        impl<'a> $crate::requests::Request<'a, $payload> {
            $(
                pub fn $field(mut self, value: impl Into<$ty>) -> Self {
                    self.payload.$field = Some(value.into());
                    self
                }
            )*
        }
    };
}

/// Setters for the fields every message-producing call shares.
macro_rules! message_options {
    ($($payload:ty),* $(,)?) => {
        $(
            impl<'a> $crate::requests::Request<'a, $payload> {
                pub fn disable_notification(mut self, value: bool) -> Self {
                    self.payload.options.disable_notification = Some(value);
                    self
                }

                pub fn reply_to_message_id(
                    mut self,
                    value: impl Into<$crate::domain::MessageId>,
                ) -> Self {
                    self.payload.options.reply_to_message_id = Some(value.into());
                    self
                }

                pub fn reply_markup(mut self, value: impl Into<$crate::types::ReplyMarkup>) -> Self {
                    self.payload.options.reply_markup = Some(value.into());
                    self
                }
            }
        )*
    };
}

pub mod chats;
pub mod files;
pub mod games;
pub mod media;
pub mod messages;
pub mod passport;
pub mod payments;
pub mod queries;
pub mod updates;

pub use chats::*;
pub use files::*;
pub use games::*;
pub use media::*;
pub use messages::*;
pub use passport::*;
pub use payments::*;
pub use queries::*;
pub use updates::*;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// One Bot API method: its wire name, parameters and result type.
pub trait Method: Serialize + Send + Sync {
    type Output: DeserializeOwned + Send;

    /// camelCase name used in the URL.
    const NAME: &'static str;

    /// Local checks run before anything goes on the wire.
    fn validate(&self) -> Result<()> {
        Ok(())
    }

    /// File fields of the payload, by wire name.
    fn uploads(&self) -> Vec<(&'static str, &InputFile)> {
        Vec::new()
    }

    /// Read timeout used when the caller does not set one.
    fn default_timeout(&self) -> Option<Duration> {
        None
    }

    fn http_method(&self) -> HttpMethod {
        HttpMethod::Post
    }

    /// Post-process the decoded result.
    fn shape(&self, _bot: &Bot, output: Self::Output) -> Self::Output {
        output
    }
}

/// `disable_notification`, `reply_to_message_id` and `reply_markup`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct MessageOptions {
    pub disable_notification: Option<bool>,
    pub reply_to_message_id: Option<MessageId>,
    pub reply_markup: Option<ReplyMarkup>,
}

/// A payload bound to a bot, ready to be sent.
#[must_use = "requests do nothing until awaited"]
pub struct Request<'a, M> {
    bot: &'a Bot,
    payload: M,
    timeout: Option<Duration>,
}

impl<'a, M: Method> Request<'a, M> {
    pub(crate) fn new(bot: &'a Bot, payload: M) -> Self {
        Self {
            bot,
            payload,
            timeout: None,
        }
    }

    /// Read timeout for this call only.
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn payload(&self) -> &M {
        &self.payload
    }

    pub fn payload_mut(&mut self) -> &mut M {
        &mut self.payload
    }

    pub fn into_payload(self) -> M {
        self.payload
    }

    pub async fn send(self) -> Result<M::Output> {
        self.bot
            .execute_with_timeout(&self.payload, self.timeout)
            .await
    }
}

impl<'a, M: Method + 'a> IntoFuture for Request<'a, M> {
    type Output = Result<M::Output>;
    type IntoFuture = BoxFuture<'a, Self::Output>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(self.send())
    }
}

/// Edit and game-score calls address a message either by chat + message id
/// or by inline message id, never both.
pub(crate) fn check_target(
    chat_id: &Option<ChatId>,
    message_id: &Option<MessageId>,
    inline_message_id: &Option<String>,
) -> Result<()> {
    match (chat_id.is_some(), message_id.is_some(), inline_message_id.is_some()) {
        (true, true, false) | (false, false, true) => Ok(()),
        (_, _, true) => Err(Error::precondition(
            "inline_message_id cannot be combined with chat_id or message_id",
        )),
        _ => Err(Error::precondition(
            "both chat_id and message_id are required when inline_message_id is not specified",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_forms() {
        let chat = Some(ChatId::Id(1));
        let msg = Some(MessageId(2));
        let inline = Some("abc".to_string());

        assert!(check_target(&chat, &msg, &None).is_ok());
        assert!(check_target(&None, &None, &inline).is_ok());
        assert!(check_target(&chat, &None, &None).is_err());
        assert!(check_target(&None, &msg, &None).is_err());
        assert!(check_target(&None, &None, &None).is_err());
        assert!(check_target(&chat, &msg, &inline).is_err());
    }
}
