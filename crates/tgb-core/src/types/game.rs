use serde::{Deserialize, Serialize};

use super::{Animation, MessageEntity, PhotoSize, User};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub photo: Vec<PhotoSize>,
    pub text: Option<String>,
    #[serde(default)]
    pub text_entities: Vec<MessageEntity>,
    pub animation: Option<Animation>,
}

/// Placeholder carried by the "play" button; holds no information.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallbackGame {}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameHighScore {
    pub position: u32,
    pub user: User,
    pub score: i64,
}
