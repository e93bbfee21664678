use std::path::{Path, PathBuf};

use serde::{Serialize, Serializer};

use crate::{errors::Error, Result};

/// A file argument of a send/upload call.
///
/// `FileId` and `Url` reference something Telegram can fetch itself and are
/// sent as plain string fields. `Path` and `Memory` are uploaded as
/// multipart parts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputFile {
    FileId(String),
    Url(String),
    Path(PathBuf),
    Memory { file_name: String, data: Vec<u8> },
}

impl InputFile {
    pub fn file_id(id: impl Into<String>) -> Self {
        InputFile::FileId(id.into())
    }

    pub fn url(url: impl Into<String>) -> Self {
        InputFile::Url(url.into())
    }

    pub fn path(path: impl Into<PathBuf>) -> Self {
        InputFile::Path(path.into())
    }

    pub fn memory(file_name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        InputFile::Memory {
            file_name: file_name.into(),
            data: data.into(),
        }
    }

    /// Whether the file must travel as a multipart part.
    pub fn is_upload(&self) -> bool {
        matches!(self, InputFile::Path(_) | InputFile::Memory { .. })
    }

    /// Name reported in the multipart `Content-Disposition`.
    pub fn file_name(&self) -> Option<String> {
        match self {
            InputFile::Path(p) => Some(
                p.file_name()
                    .and_then(|s| s.to_str())
                    .unwrap_or("file")
                    .to_string(),
            ),
            InputFile::Memory { file_name, .. } => Some(file_name.clone()),
            InputFile::FileId(_) | InputFile::Url(_) => None,
        }
    }

    pub fn mime_type(&self) -> &'static str {
        let name = self.file_name().unwrap_or_default().to_ascii_lowercase();
        let ext = Path::new(&name)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("");
        match ext {
            "jpg" | "jpeg" => "image/jpeg",
            "png" => "image/png",
            "gif" => "image/gif",
            "webp" => "image/webp",
            "mp4" => "video/mp4",
            "mp3" => "audio/mpeg",
            "ogg" | "oga" => "audio/ogg",
            "pdf" => "application/pdf",
            "zip" => "application/zip",
            "txt" => "text/plain",
            "pem" | "crt" => "application/x-pem-file",
            _ => "application/octet-stream",
        }
    }

    /// Bytes of an upload. Reference variants have no local content.
    pub async fn read(&self) -> Result<Vec<u8>> {
        match self {
            InputFile::Path(p) => Ok(tokio::fs::read(p).await?),
            InputFile::Memory { data, .. } => Ok(data.clone()),
            InputFile::FileId(_) | InputFile::Url(_) => Err(Error::precondition(
                "file ids and URLs are not uploaded",
            )),
        }
    }
}

/// References serialize as their string. Uploads serialize as `null` and are
/// moved out of the field map by [`crate::params::Params::from_method`].
impl Serialize for InputFile {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            InputFile::FileId(s) | InputFile::Url(s) => serializer.serialize_str(s),
            InputFile::Path(_) | InputFile::Memory { .. } => serializer.serialize_none(),
        }
    }
}

impl From<&str> for InputFile {
    fn from(s: &str) -> Self {
        InputFile::from(s.to_string())
    }
}

impl From<String> for InputFile {
    fn from(s: String) -> Self {
        if s.starts_with("http://") || s.starts_with("https://") {
            InputFile::Url(s)
        } else {
            InputFile::FileId(s)
        }
    }
}

impl From<PathBuf> for InputFile {
    fn from(p: PathBuf) -> Self {
        InputFile::Path(p)
    }
}

impl From<&Path> for InputFile {
    fn from(p: &Path) -> Self {
        InputFile::Path(p.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strings_become_references() {
        assert_eq!(
            InputFile::from("https://example.com/a.png"),
            InputFile::Url("https://example.com/a.png".to_string())
        );
        assert_eq!(
            InputFile::from("AgADBAAD"),
            InputFile::FileId("AgADBAAD".to_string())
        );
        assert!(!InputFile::from("AgADBAAD").is_upload());
    }

    #[test]
    fn uploads_know_name_and_mime() {
        let f = InputFile::path("/tmp/photos/cat.JPG");
        assert!(f.is_upload());
        assert_eq!(f.file_name().as_deref(), Some("cat.JPG"));
        assert_eq!(f.mime_type(), "image/jpeg");

        let m = InputFile::memory("note.bin", vec![1u8, 2, 3]);
        assert_eq!(m.mime_type(), "application/octet-stream");
    }

    #[tokio::test]
    async fn memory_upload_reads_its_bytes() {
        let m = InputFile::memory("a.txt", b"hello".to_vec());
        assert_eq!(m.read().await.unwrap(), b"hello".to_vec());
        assert!(InputFile::file_id("x").read().await.is_err());
    }
}
