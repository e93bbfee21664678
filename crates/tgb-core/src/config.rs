use std::{collections::HashMap, env, fmt, fs, path::Path, time::Duration};

use crate::{domain::ChatId, errors::Error, Result};

pub const DEFAULT_BASE_URL: &str = "https://api.telegram.org/bot";
pub const DEFAULT_BASE_FILE_URL: &str = "https://api.telegram.org/file/bot";

/// Client configuration.
///
/// `Config::load()` reads the process environment (plus an optional `.env`);
/// `Config::new()` gives the defaults for a token supplied in code.
#[derive(Clone)]
pub struct Config {
    pub bot_token: String,
    pub base_url: String,
    pub base_file_url: String,

    // HTTP
    pub connect_timeout: Duration,
    pub read_timeout: Duration,

    // Long polling
    pub poll_timeout: Duration,
    pub allowed_updates: Option<Vec<String>>,

    pub default_chat_id: Option<ChatId>,
}

impl Config {
    pub fn new(bot_token: impl Into<String>) -> Self {
        Self {
            bot_token: bot_token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            base_file_url: DEFAULT_BASE_FILE_URL.to_string(),
            connect_timeout: Duration::from_millis(5_000),
            read_timeout: Duration::from_millis(5_000),
            poll_timeout: Duration::from_secs(30),
            allowed_updates: None,
            default_chat_id: None,
        }
    }

    pub fn load() -> Result<Self> {
        Self::load_with_dotenv(Path::new(".env"))
    }

    /// Like [`Config::load`] with an explicit dotenv file. Variables already in
    /// the environment take precedence over the file.
    pub fn load_with_dotenv(dotenv: &Path) -> Result<Self> {
        let file = read_dotenv(dotenv);
        Self::from_lookup(|key| env::var(key).ok().or_else(|| file.get(key).cloned()))
    }

    /// Build from an arbitrary key lookup (the environment in `load()`).
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let bot_token = get("TELEGRAM_BOT_TOKEN")
            .and_then(non_empty)
            .ok_or_else(|| {
                Error::Config("TELEGRAM_BOT_TOKEN environment variable is required".to_string())
            })?;

        let mut cfg = Self::new(bot_token.trim());

        if let Some(url) = get("TELEGRAM_API_URL").and_then(non_empty) {
            cfg.base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(url) = get("TELEGRAM_FILE_URL").and_then(non_empty) {
            cfg.base_file_url = url.trim_end_matches('/').to_string();
        }

        if let Some(ms) = parse_u64(get("TELEGRAM_CONNECT_TIMEOUT_MS")) {
            cfg.connect_timeout = Duration::from_millis(ms);
        }
        if let Some(ms) = parse_u64(get("TELEGRAM_READ_TIMEOUT_MS")) {
            cfg.read_timeout = Duration::from_millis(ms);
        }
        if let Some(secs) = parse_u64(get("TELEGRAM_POLL_TIMEOUT_SECS")) {
            cfg.poll_timeout = Duration::from_secs(secs);
        }

        cfg.allowed_updates = parse_csv_lower(get("TELEGRAM_ALLOWED_UPDATES"));
        cfg.default_chat_id = get("TELEGRAM_DEFAULT_CHAT_ID")
            .and_then(non_empty)
            .map(ChatId::from);

        Ok(cfg)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("bot_token", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("base_file_url", &self.base_file_url)
            .field("connect_timeout", &self.connect_timeout)
            .field("read_timeout", &self.read_timeout)
            .field("poll_timeout", &self.poll_timeout)
            .field("allowed_updates", &self.allowed_updates)
            .field("default_chat_id", &self.default_chat_id)
            .finish()
    }
}

/// `KEY=value` pairs of a dotenv file; a missing file has none.
fn read_dotenv(path: &Path) -> HashMap<String, String> {
    fs::read_to_string(path)
        .map(|contents| parse_dotenv(&contents))
        .unwrap_or_default()
}

fn parse_dotenv(contents: &str) -> HashMap<String, String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let line = line.strip_prefix("export ").unwrap_or(line);
            let (key, value) = line.split_once('=')?;
            let key = key.trim();
            if key.is_empty() {
                return None;
            }
            Some((key.to_string(), unquote(value.trim()).to_string()))
        })
        .collect()
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value.strip_prefix(quote).and_then(|v| v.strip_suffix(quote)) {
            return inner;
        }
    }
    value
}

fn parse_u64(v: Option<String>) -> Option<u64> {
    v.and_then(|s| s.trim().parse::<u64>().ok())
}

fn parse_csv_lower(v: Option<String>) -> Option<Vec<String>> {
    let out = v?
        .split(',')
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>();
    if out.is_empty() {
        None
    } else {
        Some(out)
    }
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn token_is_required() {
        let err = Config::from_lookup(lookup(&[("TELEGRAM_BOT_TOKEN", "  ")])).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn defaults_apply_when_unset() {
        let cfg = Config::from_lookup(lookup(&[("TELEGRAM_BOT_TOKEN", "123456:abc")])).unwrap();
        assert_eq!(cfg.bot_token, "123456:abc");
        assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
        assert_eq!(cfg.base_file_url, DEFAULT_BASE_FILE_URL);
        assert_eq!(cfg.poll_timeout, Duration::from_secs(30));
        assert!(cfg.allowed_updates.is_none());
        assert!(cfg.default_chat_id.is_none());
    }

    #[test]
    fn overrides_are_parsed() {
        let cfg = Config::from_lookup(lookup(&[
            ("TELEGRAM_BOT_TOKEN", "123456:abc"),
            ("TELEGRAM_API_URL", "http://localhost:8081/bot/"),
            ("TELEGRAM_READ_TIMEOUT_MS", "1500"),
            ("TELEGRAM_ALLOWED_UPDATES", "Message, callback_query,,"),
            ("TELEGRAM_DEFAULT_CHAT_ID", "-100200"),
        ]))
        .unwrap();
        assert_eq!(cfg.base_url, "http://localhost:8081/bot");
        assert_eq!(cfg.read_timeout, Duration::from_millis(1500));
        assert_eq!(
            cfg.allowed_updates,
            Some(vec!["message".to_string(), "callback_query".to_string()])
        );
        assert_eq!(cfg.default_chat_id, Some(ChatId::Id(-100200)));
    }

    #[test]
    fn debug_redacts_token() {
        let cfg = Config::new("123456:secret");
        assert!(!format!("{cfg:?}").contains("secret"));
    }

    #[test]
    fn dotenv_lines_are_parsed() {
        let vars = parse_dotenv(
            "# local settings\n\
             TELEGRAM_BOT_TOKEN = \"123456:abc\"\n\
             export TELEGRAM_DEFAULT_CHAT_ID='@news'\n\
             =orphan\n\
             no equals sign\n\
             TELEGRAM_API_URL=\"\n",
        );
        assert_eq!(vars.len(), 3);
        assert_eq!(vars["TELEGRAM_BOT_TOKEN"], "123456:abc");
        assert_eq!(vars["TELEGRAM_DEFAULT_CHAT_ID"], "@news");
        assert_eq!(vars["TELEGRAM_API_URL"], "\"");

        assert!(read_dotenv(Path::new("/nonexistent/.env")).is_empty());
    }
}
