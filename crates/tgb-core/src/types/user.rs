use serde::{Deserialize, Serialize};

use crate::domain::UserId;

use super::PhotoSize;

/// A Telegram user or bot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    #[serde(default)]
    pub is_bot: bool,
    pub first_name: String,
    pub last_name: Option<String>,
    pub username: Option<String>,
    pub language_code: Option<String>,
}

impl User {
    pub fn full_name(&self) -> String {
        match &self.last_name {
            Some(last) if !last.is_empty() => format!("{} {last}", self.first_name),
            _ => self.first_name.clone(),
        }
    }

    /// `@username` if the user has one, otherwise the full name.
    pub fn name(&self) -> String {
        match &self.username {
            Some(u) => format!("@{u}"),
            None => self.full_name(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserProfilePhotos {
    pub total_count: i64,
    /// Up to 4 sizes per photo.
    #[serde(default)]
    pub photos: Vec<Vec<PhotoSize>>,
}
