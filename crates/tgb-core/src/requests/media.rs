//! Calls that send a file: by file id, by URL, or as an upload.

use std::time::Duration;

use serde::Serialize;

use super::{Method, MessageOptions, Request};
use crate::{bot::Bot, domain::ChatId, input_file::InputFile, types::Message};

/// Read timeout for file-sending calls unless the caller sets one.
pub const UPLOAD_TIMEOUT: Duration = Duration::from_secs(20);

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SendPhoto {
    pub chat_id: ChatId,
    pub photo: InputFile,
    pub caption: Option<String>,
    #[serde(flatten)]
    pub options: MessageOptions,
}

impl Method for SendPhoto {
    type Output = Message;
    const NAME: &'static str = "sendPhoto";

    fn uploads(&self) -> Vec<(&'static str, &InputFile)> {
        vec![("photo", &self.photo)]
    }

    fn default_timeout(&self) -> Option<Duration> {
        Some(UPLOAD_TIMEOUT)
    }
}

setters!(SendPhoto { caption: String });
message_options!(SendPhoto);

/// Audio shown in the music player; .mp3 only. Use [`SendVoice`] for voice notes.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SendAudio {
    pub chat_id: ChatId,
    pub audio: InputFile,
    pub duration: Option<u32>,
    pub performer: Option<String>,
    pub title: Option<String>,
    pub caption: Option<String>,
    #[serde(flatten)]
    pub options: MessageOptions,
}

impl Method for SendAudio {
    type Output = Message;
    const NAME: &'static str = "sendAudio";

    fn uploads(&self) -> Vec<(&'static str, &InputFile)> {
        vec![("audio", &self.audio)]
    }

    fn default_timeout(&self) -> Option<Duration> {
        Some(UPLOAD_TIMEOUT)
    }
}

setters!(SendAudio {
    duration: u32,
    performer: String,
    title: String,
    caption: String,
});
message_options!(SendAudio);

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SendDocument {
    pub chat_id: ChatId,
    pub document: InputFile,
    pub caption: Option<String>,
    #[serde(flatten)]
    pub options: MessageOptions,
}

impl Method for SendDocument {
    type Output = Message;
    const NAME: &'static str = "sendDocument";

    fn uploads(&self) -> Vec<(&'static str, &InputFile)> {
        vec![("document", &self.document)]
    }

    fn default_timeout(&self) -> Option<Duration> {
        Some(UPLOAD_TIMEOUT)
    }
}

setters!(SendDocument { caption: String });
message_options!(SendDocument);

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SendSticker {
    pub chat_id: ChatId,
    pub sticker: InputFile,
    #[serde(flatten)]
    pub options: MessageOptions,
}

impl Method for SendSticker {
    type Output = Message;
    const NAME: &'static str = "sendSticker";

    fn uploads(&self) -> Vec<(&'static str, &InputFile)> {
        vec![("sticker", &self.sticker)]
    }
}

message_options!(SendSticker);

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SendVideo {
    pub chat_id: ChatId,
    pub video: InputFile,
    pub duration: Option<u32>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub caption: Option<String>,
    #[serde(flatten)]
    pub options: MessageOptions,
}

impl Method for SendVideo {
    type Output = Message;
    const NAME: &'static str = "sendVideo";

    fn uploads(&self) -> Vec<(&'static str, &InputFile)> {
        vec![("video", &self.video)]
    }

    fn default_timeout(&self) -> Option<Duration> {
        Some(UPLOAD_TIMEOUT)
    }
}

setters!(SendVideo {
    duration: u32,
    width: u32,
    height: u32,
    caption: String,
});
message_options!(SendVideo);

/// Voice note; .ogg encoded with OPUS.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SendVoice {
    pub chat_id: ChatId,
    pub voice: InputFile,
    pub duration: Option<u32>,
    pub caption: Option<String>,
    #[serde(flatten)]
    pub options: MessageOptions,
}

impl Method for SendVoice {
    type Output = Message;
    const NAME: &'static str = "sendVoice";

    fn uploads(&self) -> Vec<(&'static str, &InputFile)> {
        vec![("voice", &self.voice)]
    }

    fn default_timeout(&self) -> Option<Duration> {
        Some(UPLOAD_TIMEOUT)
    }
}

setters!(SendVoice {
    duration: u32,
    caption: String,
});
message_options!(SendVoice);

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SendVideoNote {
    pub chat_id: ChatId,
    pub video_note: InputFile,
    pub duration: Option<u32>,
    /// Diameter of the round video.
    pub length: Option<u32>,
    #[serde(flatten)]
    pub options: MessageOptions,
}

impl Method for SendVideoNote {
    type Output = Message;
    const NAME: &'static str = "sendVideoNote";

    fn uploads(&self) -> Vec<(&'static str, &InputFile)> {
        vec![("video_note", &self.video_note)]
    }

    fn default_timeout(&self) -> Option<Duration> {
        Some(UPLOAD_TIMEOUT)
    }
}

setters!(SendVideoNote {
    duration: u32,
    length: u32,
});
message_options!(SendVideoNote);

impl Bot {
    pub fn send_photo(
        &self,
        chat_id: impl Into<ChatId>,
        photo: impl Into<InputFile>,
    ) -> Request<'_, SendPhoto> {
        Request::new(
            self,
            SendPhoto {
                chat_id: chat_id.into(),
                photo: photo.into(),
                caption: None,
                options: MessageOptions::default(),
            },
        )
    }

    pub fn send_audio(
        &self,
        chat_id: impl Into<ChatId>,
        audio: impl Into<InputFile>,
    ) -> Request<'_, SendAudio> {
        Request::new(
            self,
            SendAudio {
                chat_id: chat_id.into(),
                audio: audio.into(),
                duration: None,
                performer: None,
                title: None,
                caption: None,
                options: MessageOptions::default(),
            },
        )
    }

    pub fn send_document(
        &self,
        chat_id: impl Into<ChatId>,
        document: impl Into<InputFile>,
    ) -> Request<'_, SendDocument> {
        Request::new(
            self,
            SendDocument {
                chat_id: chat_id.into(),
                document: document.into(),
                caption: None,
                options: MessageOptions::default(),
            },
        )
    }

    pub fn send_sticker(
        &self,
        chat_id: impl Into<ChatId>,
        sticker: impl Into<InputFile>,
    ) -> Request<'_, SendSticker> {
        Request::new(
            self,
            SendSticker {
                chat_id: chat_id.into(),
                sticker: sticker.into(),
                options: MessageOptions::default(),
            },
        )
    }

    pub fn send_video(
        &self,
        chat_id: impl Into<ChatId>,
        video: impl Into<InputFile>,
    ) -> Request<'_, SendVideo> {
        Request::new(
            self,
            SendVideo {
                chat_id: chat_id.into(),
                video: video.into(),
                duration: None,
                width: None,
                height: None,
                caption: None,
                options: MessageOptions::default(),
            },
        )
    }

    pub fn send_voice(
        &self,
        chat_id: impl Into<ChatId>,
        voice: impl Into<InputFile>,
    ) -> Request<'_, SendVoice> {
        Request::new(
            self,
            SendVoice {
                chat_id: chat_id.into(),
                voice: voice.into(),
                duration: None,
                caption: None,
                options: MessageOptions::default(),
            },
        )
    }

    pub fn send_video_note(
        &self,
        chat_id: impl Into<ChatId>,
        video_note: impl Into<InputFile>,
    ) -> Request<'_, SendVideoNote> {
        Request::new(
            self,
            SendVideoNote {
                chat_id: chat_id.into(),
                video_note: video_note.into(),
                duration: None,
                length: None,
                options: MessageOptions::default(),
            },
        )
    }
}
