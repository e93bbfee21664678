/// Error type for every Bot API call.
///
/// Local precondition failures are raised before any network traffic. Remote
/// failures are mapped from the response envelope (see [`crate::envelope`]) or
/// from the transport, and surfaced as-is: nothing in this crate retries.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid bot token")]
    InvalidToken,

    /// A request was rejected locally (mutually exclusive or missing parameters).
    #[error("{0}")]
    Precondition(String),

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("group migrated to supergroup, new chat id: {new_chat_id}")]
    ChatMigrated { new_chat_id: i64 },

    #[error("flood control exceeded, retry in {seconds} seconds")]
    RetryAfter { seconds: u64 },

    #[error("timed out")]
    TimedOut,

    #[error("network error: {0}")]
    Network(String),

    #[error("api error {code}: {description}")]
    Api { code: u16, description: String },

    #[error("invalid server response: {0}")]
    InvalidResponse(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn precondition(msg: impl Into<String>) -> Self {
        Error::Precondition(msg.into())
    }

    /// Whether the same call may succeed if simply issued again later.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Error::TimedOut | Error::Network(_) | Error::RetryAfter { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
