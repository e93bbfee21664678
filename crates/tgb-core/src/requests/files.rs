use serde::Serialize;

use super::{Method, Request};
use crate::{
    bot::Bot,
    domain::UserId,
    types::{File, UserProfilePhotos},
};

/// Prepare a file (up to 20 MB) for download.
///
/// The returned [`File::file_path`] is rewritten to the absolute download
/// URL; it stays valid for at least an hour.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GetFile {
    pub file_id: String,
}

impl Method for GetFile {
    type Output = File;
    const NAME: &'static str = "getFile";

    fn shape(&self, bot: &Bot, mut file: File) -> File {
        if let Some(path) = file.file_path.take() {
            file.file_path = Some(bot.file_url(&path));
        }
        file
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GetUserProfilePhotos {
    pub user_id: UserId,
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}

impl Method for GetUserProfilePhotos {
    type Output = UserProfilePhotos;
    const NAME: &'static str = "getUserProfilePhotos";
}

setters!(GetUserProfilePhotos {
    offset: u32,
    limit: u32,
});

impl Bot {
    pub fn get_file(&self, file_id: impl Into<String>) -> Request<'_, GetFile> {
        Request::new(
            self,
            GetFile {
                file_id: file_id.into(),
            },
        )
    }

    pub fn get_user_profile_photos(
        &self,
        user_id: impl Into<UserId>,
    ) -> Request<'_, GetUserProfilePhotos> {
        Request::new(
            self,
            GetUserProfilePhotos {
                user_id: user_id.into(),
                offset: None,
                limit: Some(100),
            },
        )
    }
}
