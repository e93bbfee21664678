//! Typed client for the Telegram Bot HTTP API.
//!
//! [`Bot`] exposes one builder per remote method; awaiting a builder
//! validates it, serializes the payload into [`Params`], hands it to a
//! [`Transport`] and decodes the `{"ok": .., "result": ..}` envelope into the
//! method's typed result. This crate has no HTTP client of its own: the
//! `reqwest` transport lives in `tgb-http`.
//!
//! ```ignore
//! let bot = tgb_http::bot_from_config(&Config::load()?)?;
//! let me = bot.get_me().await?;
//! bot.send_message(chat_id, "hello")
//!     .parse_mode(ParseMode::Html)
//!     .await?;
//! ```

pub mod bot;
pub mod config;
pub mod domain;
pub mod envelope;
pub mod errors;
pub mod input_file;
pub mod logging;
pub mod params;
pub mod requests;
pub mod transport;
pub mod types;

#[cfg(test)]
mod testing;

pub use bot::Bot;
pub use config::Config;
pub use domain::{ChatId, MessageId, MessageTarget, UserId};
pub use errors::{Error, Result};
pub use input_file::InputFile;
pub use params::Params;
pub use requests::{Method, Request};
pub use transport::{HttpMethod, RawResponse, Transport};
