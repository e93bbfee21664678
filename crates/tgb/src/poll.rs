//! Long-polling echo loop.

use std::time::Duration;

use serde_json::Value;
use tgb_core::{
    config::Config,
    types::{Update, UpdateKind},
    Bot, ChatId, Error, MessageId, Params,
};
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// What the loop does with one update.
#[derive(Debug, PartialEq)]
enum Action {
    Echo {
        chat_id: ChatId,
        reply_to: MessageId,
        text: String,
    },
    AnswerCallback {
        id: String,
        text: Option<String>,
    },
    Ignore,
}

fn plan(update: &Update) -> Action {
    match update.kind() {
        Some(UpdateKind::Message(msg)) => match &msg.text {
            Some(text) => Action::Echo {
                chat_id: msg.chat_id(),
                reply_to: msg.message_id,
                text: text.clone(),
            },
            None => Action::Ignore,
        },
        Some(UpdateKind::CallbackQuery(q)) => Action::AnswerCallback {
            id: q.id.clone(),
            text: q.data.clone(),
        },
        _ => Action::Ignore,
    }
}

async fn handle(bot: &Bot, update: &Update) -> tgb_core::Result<()> {
    match plan(update) {
        Action::Echo {
            chat_id,
            reply_to,
            text,
        } => {
            bot.send_message(chat_id, text)
                .reply_to_message_id(reply_to)
                .await?;
        }
        Action::AnswerCallback { id, text } => {
            let mut req = bot.answer_callback_query(id);
            if let Some(text) = text {
                req = req.text(text);
            }
            req.await?;
        }
        Action::Ignore => debug!(update_id = update.update_id, "ignoring update"),
    }
    Ok(())
}

/// Backoff before the next `getUpdates` after a transient failure.
fn backoff(err: &Error) -> Duration {
    match err {
        Error::RetryAfter { seconds } => Duration::from_secs(*seconds),
        _ => Duration::from_secs(1),
    }
}

/// Decodes a raw `getUpdates` result one update at a time, skipping the ones
/// that fail. Returns the decoded updates and the offset past the whole batch.
fn decode_each(raw: &Value) -> (Vec<Update>, Option<i64>) {
    let mut updates = Vec::new();
    let mut next: Option<i64> = None;
    for item in raw.as_array().into_iter().flatten() {
        if let Some(id) = item.get("update_id").and_then(Value::as_i64) {
            next = Some(next.map_or(id + 1, |n| n.max(id + 1)));
        }
        match serde_json::from_value::<Update>(item.clone()) {
            Ok(update) => updates.push(update),
            Err(e) => warn!(error = %e, update = %item, "skipping undecodable update"),
        }
    }
    (updates, next)
}

/// Re-reads the pending batch without long polling and decodes it leniently.
async fn fetch_lenient(
    bot: &Bot,
    cfg: &Config,
    offset: Option<i64>,
) -> tgb_core::Result<(Vec<Update>, Option<i64>)> {
    let mut params = Params::new();
    params.insert("timeout", 0);
    if let Some(o) = offset {
        params.insert("offset", o);
    }
    if let Some(allowed) = &cfg.allowed_updates {
        params.insert("allowed_updates", allowed.clone());
    }
    let raw = bot.execute_raw("getUpdates", params, None).await?;
    Ok(decode_each(&raw))
}

async fn dispatch(bot: &Bot, updates: &[Update]) {
    for update in updates {
        if let Err(e) = handle(bot, update).await {
            warn!(update_id = update.update_id, error = %e, "failed to handle update");
        }
    }
}

pub async fn run(bot: &Bot, cfg: &Config, cancel: CancellationToken) -> anyhow::Result<()> {
    let poll_secs = u32::try_from(cfg.poll_timeout.as_secs()).unwrap_or(u32::MAX);
    let mut offset: Option<i64> = None;

    loop {
        let mut req = bot.get_updates().timeout(poll_secs);
        if let Some(o) = offset {
            req = req.offset(o);
        }
        if let Some(allowed) = &cfg.allowed_updates {
            req = req.allowed_updates(allowed.clone());
        }

        let result = tokio::select! {
            _ = cancel.cancelled() => break,
            res = req.send() => res,
        };

        match result {
            Ok(updates) => {
                dispatch(bot, &updates).await;
                if let Some(last) = updates.iter().map(|u| u.update_id).max() {
                    offset = Some(last + 1);
                }
            }
            Err(Error::Json(e)) => {
                warn!(error = %e, "getUpdates batch did not decode; decoding updates one by one");
                match fetch_lenient(bot, cfg, offset).await {
                    Ok((updates, next)) => {
                        dispatch(bot, &updates).await;
                        offset = next.or(offset);
                    }
                    Err(e) => {
                        warn!(error = %e, "lenient getUpdates failed");
                        tokio::select! {
                            _ = cancel.cancelled() => break,
                            _ = sleep(backoff(&e)) => {}
                        }
                    }
                }
            }
            Err(e) if e.is_transient() => {
                let wait = backoff(&e);
                warn!(error = %e, wait_secs = wait.as_secs(), "getUpdates failed; retrying");
                tokio::select! {
                    _ = cancel.cancelled() => break,
                    _ = sleep(wait) => {}
                }
            }
            Err(e) => return Err(e.into()),
        }
    }

    info!("polling stopped");
    Ok(())
}
