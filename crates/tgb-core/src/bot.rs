use std::{
    fmt,
    path::Path,
    sync::{Arc, OnceLock, PoisonError, RwLock},
    time::Duration,
};

use regex::Regex;
use serde_json::Value;
use tracing::{debug, warn};

use crate::{
    config::{Config, DEFAULT_BASE_FILE_URL, DEFAULT_BASE_URL},
    domain::UserId,
    envelope,
    errors::Error,
    params::Params,
    requests::Method,
    transport::{HttpMethod, Transport},
    types::{File, User},
    Result,
};

/// Client for one bot token.
///
/// Cloning is cheap: clones share the transport and the cached identity.
#[derive(Clone)]
pub struct Bot {
    api_url: String,
    file_api_url: String,
    transport: Arc<dyn Transport>,
    me: Arc<RwLock<Option<User>>>,
}

fn token_prefix_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9]{3,}:").expect("valid regex"))
}

/// A token is `<bot id>:<secret>`: no whitespace and at least three digits
/// before the colon.
pub fn validate_token(token: &str) -> Result<()> {
    if token.chars().any(char::is_whitespace) || !token_prefix_re().is_match(token) {
        return Err(Error::InvalidToken);
    }
    Ok(())
}

impl Bot {
    pub fn new(token: impl Into<String>, transport: Arc<dyn Transport>) -> Result<Self> {
        Self::with_urls(token, DEFAULT_BASE_URL, DEFAULT_BASE_FILE_URL, transport)
    }

    /// `base_url` and `base_file_url` are prefixes the token is appended to,
    /// e.g. `https://api.telegram.org/bot`.
    pub fn with_urls(
        token: impl Into<String>,
        base_url: &str,
        base_file_url: &str,
        transport: Arc<dyn Transport>,
    ) -> Result<Self> {
        let token = token.into();
        validate_token(&token)?;
        Ok(Self {
            api_url: format!("{base_url}{token}"),
            file_api_url: format!("{base_file_url}{token}"),
            transport,
            me: Arc::new(RwLock::new(None)),
        })
    }

    pub fn from_config(cfg: &Config, transport: Arc<dyn Transport>) -> Result<Self> {
        Self::with_urls(&cfg.bot_token, &cfg.base_url, &cfg.base_file_url, transport)
    }

    pub fn method_url(&self, method: &str) -> String {
        format!("{}/{method}", self.api_url)
    }

    /// Download URL for a `file_path` returned by `getFile`.
    pub fn file_url(&self, file_path: &str) -> String {
        if file_path.starts_with("http://") || file_path.starts_with("https://") {
            return file_path.to_string();
        }
        format!("{}/{}", self.file_api_url, file_path.trim_start_matches('/'))
    }

    /// Identity from the last successful `getMe`, if any.
    pub fn cached_me(&self) -> Option<User> {
        self.me
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub(crate) fn remember_me(&self, me: User) {
        *self.me.write().unwrap_or_else(PoisonError::into_inner) = Some(me);
    }

    async fn me(&self) -> Result<User> {
        match self.cached_me() {
            Some(me) => Ok(me),
            None => self.get_me().await,
        }
    }

    pub async fn id(&self) -> Result<UserId> {
        Ok(self.me().await?.id)
    }

    pub async fn first_name(&self) -> Result<String> {
        Ok(self.me().await?.first_name)
    }

    pub async fn last_name(&self) -> Result<Option<String>> {
        Ok(self.me().await?.last_name)
    }

    pub async fn username(&self) -> Result<Option<String>> {
        Ok(self.me().await?.username)
    }

    /// `@username`, or the full name for an identity without a username.
    pub async fn name(&self) -> Result<String> {
        Ok(self.me().await?.name())
    }

    pub async fn execute<M: Method>(&self, payload: &M) -> Result<M::Output> {
        self.execute_with_timeout(payload, None).await
    }

    /// Validate, serialize, send, unwrap the envelope, decode and shape.
    pub async fn execute_with_timeout<M: Method>(
        &self,
        payload: &M,
        timeout: Option<Duration>,
    ) -> Result<M::Output> {
        debug!(method = M::NAME, "entering");

        payload.validate()?;
        let timeout = timeout.or_else(|| payload.default_timeout());
        let url = self.method_url(M::NAME);

        let raw = match payload.http_method() {
            HttpMethod::Get => self.transport.get(&url, timeout).await,
            HttpMethod::Post => {
                let params = Params::from_method(payload)?;
                self.transport.post(&url, params, timeout).await
            }
        };

        let value = match raw.and_then(|raw| envelope::parse(&raw)) {
            Ok(v) => v,
            Err(e) => {
                warn!(method = M::NAME, error = %e, "bot api call failed");
                return Err(e);
            }
        };
        debug!(method = M::NAME, result = %value, "result");

        let output: M::Output = serde_json::from_value(value)?;
        let output = payload.shape(self, output);

        debug!(method = M::NAME, "exiting");
        Ok(output)
    }

    /// Call a method by its wire name with hand-built parameters.
    pub async fn execute_raw(
        &self,
        method: &str,
        params: Params,
        timeout: Option<Duration>,
    ) -> Result<Value> {
        debug!(method, "entering");
        let raw = self
            .transport
            .post(&self.method_url(method), params, timeout)
            .await?;
        let value = envelope::parse(&raw).inspect_err(|e| {
            warn!(method, error = %e, "bot api call failed");
        })?;
        debug!(method, "exiting");
        Ok(value)
    }

    /// Fetch the content of a file returned by [`Bot::get_file`].
    pub async fn download_file(&self, file: &File) -> Result<Vec<u8>> {
        let path = file
            .file_path
            .as_deref()
            .ok_or_else(|| Error::precondition("file has no file_path; call get_file first"))?;
        self.transport.download(&self.file_url(path), None).await
    }

    pub async fn download_file_to(&self, file: &File, dest: &Path) -> Result<()> {
        let bytes = self.download_file(file).await?;
        tokio::fs::write(dest, bytes).await?;
        Ok(())
    }
}

impl fmt::Debug for Bot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bot")
            .field("token", &"<redacted>")
            .field("me", &self.cached_me().map(|u| u.id))
            .finish()
    }
}
