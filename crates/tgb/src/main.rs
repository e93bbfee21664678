use anyhow::{bail, Context};
use tgb_core::{config::Config, ChatId};
use tokio_util::sync::CancellationToken;

mod poll;

const USAGE: &str = "usage: tgb <me | send [--to <chat>] <text...> | poll>";

/// Chat and text of `tgb send`. With `TELEGRAM_DEFAULT_CHAT_ID` set, every
/// argument is text unless `--to` names the chat; without it the first
/// argument is the chat.
fn send_args(args: &[String], default_chat: Option<&ChatId>) -> Option<(ChatId, String)> {
    let (chat, text) = match (args, default_chat) {
        ([flag, chat, text @ ..], _) if flag == "--to" => (ChatId::from(chat.as_str()), text),
        (text, Some(default)) => (default.clone(), text),
        ([chat, text @ ..], None) => (ChatId::from(chat.as_str()), text),
        ([], None) => return None,
    };
    if text.is_empty() {
        return None;
    }
    Some((chat, text.join(" ")))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tgb_core::logging::init("tgb")?;

    let cfg = Config::load()?;
    let bot = tgb_http::bot_from_config(&cfg).context("failed to create bot")?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("me") => {
            let me = bot.get_me().await.context("getMe failed")?;
            println!("{} (id {})", me.name(), me.id.0);
        }
        Some("send") => {
            let Some((chat_id, text)) = send_args(&args[1..], cfg.default_chat_id.as_ref())
            else {
                bail!("{USAGE}");
            };
            let msg = bot
                .send_message(chat_id.clone(), text)
                .await
                .with_context(|| format!("sendMessage to {chat_id} failed"))?;
            println!("sent message {} to {chat_id}", msg.message_id.0);
        }
        Some("poll") => {
            let cancel = CancellationToken::new();
            let on_signal = cancel.clone();
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    tracing::info!("shutdown requested");
                    on_signal.cancel();
                }
            });

            if let Ok(me) = bot.get_me().await {
                tracing::info!(bot = %me.name(), "polling started");
            }
            poll::run(&bot, &cfg, cancel).await?;
        }
        _ => bail!("{USAGE}"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(s: &str) -> Vec<String> {
        s.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn default_chat_takes_the_whole_text() {
        let default = ChatId::Id(-100);
        assert_eq!(
            send_args(&args("hello world"), Some(&default)),
            Some((ChatId::Id(-100), "hello world".to_string()))
        );
        assert_eq!(
            send_args(&args("--to @news hello world"), Some(&default)),
            Some((ChatId::from("@news"), "hello world".to_string()))
        );
        assert_eq!(send_args(&args(""), Some(&default)), None);
    }

    #[test]
    fn first_argument_is_the_chat_without_a_default() {
        assert_eq!(
            send_args(&args("42 hi there"), None),
            Some((ChatId::Id(42), "hi there".to_string()))
        );
        assert_eq!(send_args(&args("42"), None), None);
        assert_eq!(send_args(&args("--to 42"), None), None);
        assert_eq!(send_args(&args(""), None), None);
    }
}
