//! Bot identity, long polling and webhook management.

use std::time::Duration;

use serde::Serialize;
use tracing::debug;

use super::{Method, Request};
use crate::{
    bot::Bot,
    input_file::InputFile,
    transport::HttpMethod,
    types::{Update, User, WebhookInfo},
};

/// Extra read time granted on top of the long-poll timeout.
pub const DEFAULT_READ_LATENCY: Duration = Duration::from_secs(2);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct GetMe;

impl Method for GetMe {
    type Output = User;
    const NAME: &'static str = "getMe";

    fn http_method(&self) -> HttpMethod {
        HttpMethod::Get
    }

    fn shape(&self, bot: &Bot, me: User) -> User {
        bot.remember_me(me.clone());
        me
    }
}

/// Long polling. Has no effect while a webhook is set.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GetUpdates {
    /// First update to return; acknowledges everything before it.
    pub offset: Option<i64>,
    pub limit: Option<u32>,
    /// Long-poll timeout in seconds.
    pub timeout: u32,
    pub allowed_updates: Option<Vec<String>>,
    #[serde(skip)]
    pub read_latency: Duration,
}

impl Default for GetUpdates {
    fn default() -> Self {
        Self {
            offset: None,
            limit: Some(100),
            timeout: 0,
            allowed_updates: None,
            read_latency: DEFAULT_READ_LATENCY,
        }
    }
}

impl Method for GetUpdates {
    type Output = Vec<Update>;
    const NAME: &'static str = "getUpdates";

    fn default_timeout(&self) -> Option<Duration> {
        Some(self.read_latency + Duration::from_secs(u64::from(self.timeout)))
    }

    fn shape(&self, _bot: &Bot, updates: Vec<Update>) -> Vec<Update> {
        if updates.is_empty() {
            debug!("no new updates found");
        } else {
            let ids: Vec<i64> = updates.iter().map(|u| u.update_id).collect();
            debug!(?ids, "getting updates");
        }
        updates
    }
}

setters!(GetUpdates {
    offset: i64,
    limit: u32,
    allowed_updates: Vec<String>,
});

impl<'a> Request<'a, GetUpdates> {
    /// Long-poll timeout in seconds; `0` is short polling.
    pub fn timeout(mut self, seconds: u32) -> Self {
        self.payload.timeout = seconds;
        self
    }

    pub fn read_latency(mut self, latency: Duration) -> Self {
        self.payload.read_latency = latency;
        self
    }
}

/// An empty `url` removes the webhook.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SetWebhook {
    pub url: String,
    /// Public key certificate for self-signed setups.
    pub certificate: Option<InputFile>,
    pub max_connections: Option<u32>,
    pub allowed_updates: Option<Vec<String>>,
}

impl Method for SetWebhook {
    type Output = bool;
    const NAME: &'static str = "setWebhook";

    fn uploads(&self) -> Vec<(&'static str, &InputFile)> {
        self.certificate
            .iter()
            .map(|c| ("certificate", c))
            .collect()
    }
}

setters!(SetWebhook {
    certificate: InputFile,
    max_connections: u32,
    allowed_updates: Vec<String>,
});

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DeleteWebhook;

impl Method for DeleteWebhook {
    type Output = bool;
    const NAME: &'static str = "deleteWebhook";
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct GetWebhookInfo;

impl Method for GetWebhookInfo {
    type Output = WebhookInfo;
    const NAME: &'static str = "getWebhookInfo";
}

impl Bot {
    pub fn get_me(&self) -> Request<'_, GetMe> {
        Request::new(self, GetMe)
    }

    pub fn get_updates(&self) -> Request<'_, GetUpdates> {
        Request::new(self, GetUpdates::default())
    }

    pub fn set_webhook(&self, url: impl Into<String>) -> Request<'_, SetWebhook> {
        Request::new(
            self,
            SetWebhook {
                url: url.into(),
                certificate: None,
                max_connections: Some(40),
                allowed_updates: None,
            },
        )
    }

    pub fn delete_webhook(&self) -> Request<'_, DeleteWebhook> {
        Request::new(self, DeleteWebhook)
    }

    pub fn get_webhook_info(&self) -> Request<'_, GetWebhookInfo> {
        Request::new(self, GetWebhookInfo)
    }
}
