use serde::Serialize;

use super::{check_target, Method, MessageOptions, Request};
use crate::{
    bot::Bot,
    domain::{ChatId, MessageId, MessageTarget, UserId},
    types::{EditedMessage, GameHighScore, Message},
    Result,
};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SendGame {
    pub chat_id: ChatId,
    /// Short name registered with BotFather.
    pub game_short_name: String,
    #[serde(flatten)]
    pub options: MessageOptions,
}

impl Method for SendGame {
    type Output = Message;
    const NAME: &'static str = "sendGame";
}

message_options!(SendGame);

/// Fails if the new score is not greater than the current one unless
/// `force` is set.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SetGameScore {
    pub user_id: UserId,
    pub score: i64,
    pub chat_id: Option<ChatId>,
    pub message_id: Option<MessageId>,
    pub inline_message_id: Option<String>,
    pub force: Option<bool>,
    pub disable_edit_message: Option<bool>,
}

impl Method for SetGameScore {
    type Output = EditedMessage;
    const NAME: &'static str = "setGameScore";

    fn validate(&self) -> Result<()> {
        check_target(&self.chat_id, &self.message_id, &self.inline_message_id)
    }
}

setters!(SetGameScore {
    force: bool,
    disable_edit_message: bool,
});

/// Score of the user and several neighbors.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GetGameHighScores {
    pub user_id: UserId,
    pub chat_id: Option<ChatId>,
    pub message_id: Option<MessageId>,
    pub inline_message_id: Option<String>,
}

impl Method for GetGameHighScores {
    type Output = Vec<GameHighScore>;
    const NAME: &'static str = "getGameHighScores";

    fn validate(&self) -> Result<()> {
        check_target(&self.chat_id, &self.message_id, &self.inline_message_id)
    }
}

impl Bot {
    pub fn send_game(
        &self,
        chat_id: impl Into<ChatId>,
        game_short_name: impl Into<String>,
    ) -> Request<'_, SendGame> {
        Request::new(
            self,
            SendGame {
                chat_id: chat_id.into(),
                game_short_name: game_short_name.into(),
                options: MessageOptions::default(),
            },
        )
    }

    pub fn set_game_score(
        &self,
        user_id: impl Into<UserId>,
        score: i64,
        target: MessageTarget,
    ) -> Request<'_, SetGameScore> {
        let (chat_id, message_id, inline_message_id) = target.into_parts();
        Request::new(
            self,
            SetGameScore {
                user_id: user_id.into(),
                score,
                chat_id,
                message_id,
                inline_message_id,
                force: None,
                disable_edit_message: None,
            },
        )
    }

    pub fn get_game_high_scores(
        &self,
        user_id: impl Into<UserId>,
        target: MessageTarget,
    ) -> Request<'_, GetGameHighScores> {
        let (chat_id, message_id, inline_message_id) = target.into_parts();
        Request::new(
            self,
            GetGameHighScores {
                user_id: user_id.into(),
                chat_id,
                message_id,
                inline_message_id,
            },
        )
    }
}
