use std::time::Duration;

use async_trait::async_trait;

use crate::{params::Params, Result};

/// Status and body of one HTTP exchange, before envelope parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// HTTP port used by [`crate::Bot`].
///
/// `tgb-http` provides the `reqwest` implementation. `timeout` is the read
/// timeout for this call; `None` means the implementation's default.
/// Connection failures map to [`crate::Error::Network`], timeouts to
/// [`crate::Error::TimedOut`].
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str, timeout: Option<Duration>) -> Result<RawResponse>;

    /// JSON body without uploads, `multipart/form-data` with them.
    async fn post(&self, url: &str, params: Params, timeout: Option<Duration>)
        -> Result<RawResponse>;

    async fn download(&self, url: &str, timeout: Option<Duration>) -> Result<Vec<u8>>;
}
