use serde::Serialize;

use super::{Method, Request};
use crate::{bot::Bot, types::InlineQueryResult};

/// Answer to an inline keyboard button press: a notification, an alert or
/// a game URL.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnswerCallbackQuery {
    pub callback_query_id: String,
    pub text: Option<String>,
    pub show_alert: Option<bool>,
    pub url: Option<String>,
    pub cache_time: Option<u32>,
}

impl Method for AnswerCallbackQuery {
    type Output = bool;
    const NAME: &'static str = "answerCallbackQuery";
}

setters!(AnswerCallbackQuery {
    text: String,
    show_alert: bool,
    url: String,
    cache_time: u32,
});

/// At most 50 results per query.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnswerInlineQuery {
    pub inline_query_id: String,
    pub results: Vec<InlineQueryResult>,
    /// Seconds the result may be cached server-side.
    pub cache_time: Option<u32>,
    pub is_personal: Option<bool>,
    pub next_offset: Option<String>,
    pub switch_pm_text: Option<String>,
    pub switch_pm_parameter: Option<String>,
}

impl Method for AnswerInlineQuery {
    type Output = bool;
    const NAME: &'static str = "answerInlineQuery";
}

setters!(AnswerInlineQuery {
    cache_time: u32,
    is_personal: bool,
    next_offset: String,
    switch_pm_text: String,
    switch_pm_parameter: String,
});

impl Bot {
    pub fn answer_callback_query(
        &self,
        callback_query_id: impl Into<String>,
    ) -> Request<'_, AnswerCallbackQuery> {
        Request::new(
            self,
            AnswerCallbackQuery {
                callback_query_id: callback_query_id.into(),
                text: None,
                show_alert: None,
                url: None,
                cache_time: None,
            },
        )
    }

    pub fn answer_inline_query(
        &self,
        inline_query_id: impl Into<String>,
        results: impl IntoIterator<Item = impl Into<InlineQueryResult>>,
    ) -> Request<'_, AnswerInlineQuery> {
        Request::new(
            self,
            AnswerInlineQuery {
                inline_query_id: inline_query_id.into(),
                results: results.into_iter().map(Into::into).collect(),
                cache_time: Some(300),
                is_personal: None,
                next_offset: None,
                switch_pm_text: None,
                switch_pm_parameter: None,
            },
        )
    }
}
