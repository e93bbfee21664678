//! In-memory [`Transport`] for unit tests.

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
    time::Duration,
};

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::{
    errors::Error,
    params::Params,
    transport::{HttpMethod, RawResponse, Transport},
    Bot, Result,
};

pub(crate) const TOKEN: &str = "123456:TEST-token";

#[derive(Clone, Debug)]
pub(crate) struct Call {
    pub method: HttpMethod,
    pub url: String,
    pub params: Params,
    pub timeout: Option<Duration>,
}

#[derive(Default)]
pub(crate) struct FakeTransport {
    pub calls: Mutex<Vec<Call>>,
    responses: Mutex<VecDeque<RawResponse>>,
    downloads: Mutex<VecDeque<Vec<u8>>>,
}

impl FakeTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push_ok(&self, result: Value) {
        self.push_raw(200, json!({"ok": true, "result": result}));
    }

    pub fn push_raw(&self, status: u16, body: Value) {
        self.responses.lock().unwrap().push_back(RawResponse {
            status,
            body: body.to_string().into_bytes(),
        });
    }

    pub fn push_download(&self, bytes: Vec<u8>) {
        self.downloads.lock().unwrap().push_back(bytes);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last(&self) -> Call {
        self.calls().pop().expect("no calls recorded")
    }

    fn record(&self, method: HttpMethod, url: &str, params: Params, timeout: Option<Duration>) {
        self.calls.lock().unwrap().push(Call {
            method,
            url: url.to_string(),
            params,
            timeout,
        });
    }

    fn next(&self) -> Result<RawResponse> {
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| Error::Network("no response queued".to_string()))
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn get(&self, url: &str, timeout: Option<Duration>) -> Result<RawResponse> {
        self.record(HttpMethod::Get, url, Params::new(), timeout);
        self.next()
    }

    async fn post(
        &self,
        url: &str,
        params: Params,
        timeout: Option<Duration>,
    ) -> Result<RawResponse> {
        self.record(HttpMethod::Post, url, params, timeout);
        self.next()
    }

    async fn download(&self, url: &str, timeout: Option<Duration>) -> Result<Vec<u8>> {
        self.record(HttpMethod::Get, url, Params::new(), timeout);
        self.downloads
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| Error::Network("no download queued".to_string()))
    }
}

pub(crate) fn bot(transport: &Arc<FakeTransport>) -> Bot {
    Bot::new(TOKEN, transport.clone()).unwrap()
}

pub(crate) fn user_json() -> Value {
    json!({
        "id": 133505823,
        "is_bot": true,
        "first_name": "TgbTestBot",
        "username": "TgbTestBot"
    })
}

pub(crate) fn message_json(chat_id: i64, text: &str) -> Value {
    json!({
        "message_id": 7,
        "date": 1_500_000_000,
        "chat": {"id": chat_id, "type": "private", "first_name": "Ann"},
        "text": text
    })
}
