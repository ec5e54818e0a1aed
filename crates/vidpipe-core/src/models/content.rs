//! Ingestion payloads: a local video file or a remote YouTube URL.

use anyhow::{Context, Result};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::path::Path;

/// A locally selected video file with its declared metadata.
///
/// Validation only looks at `declared_size` and `declared_mime_type`; the
/// bytes are carried through untouched to the store.
#[derive(Clone, Debug)]
pub struct FileContent {
    pub bytes: Bytes,
    pub filename: String,
    pub declared_size: u64,
    pub declared_mime_type: String,
}

impl FileContent {
    pub fn new(
        bytes: impl Into<Bytes>,
        filename: impl Into<String>,
        declared_mime_type: impl Into<String>,
    ) -> Self {
        let bytes = bytes.into();
        Self {
            declared_size: bytes.len() as u64,
            bytes,
            filename: filename.into(),
            declared_mime_type: declared_mime_type.into(),
        }
    }

    /// Read a file from disk, declaring its size from the byte length and its
    /// MIME type from the extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("video.mp4")
            .to_string();

        let mime = mime_guess::from_path(path)
            .first_or_octet_stream()
            .essence_str()
            .to_string();

        Ok(Self::new(data, filename, mime))
    }

    /// Size in MiB, as shown in user-facing messages.
    pub fn size_mib(&self) -> f64 {
        self.declared_size as f64 / (1024.0 * 1024.0)
    }
}

/// Exactly one ingestion source.
#[derive(Clone, Debug)]
pub enum ContentPayload {
    File(FileContent),
    RemoteUrl(String),
}

impl ContentPayload {
    pub fn kind(&self) -> ContentKind {
        match self {
            ContentPayload::File(_) => ContentKind::Upload,
            ContentPayload::RemoteUrl(_) => ContentKind::Youtube,
        }
    }
}

/// Caller-supplied content that may carry neither source, one, or (wrongly) both.
#[derive(Clone, Debug, Default)]
pub struct ContentInput {
    pub file: Option<FileContent>,
    pub youtube_url: Option<String>,
}

impl ContentInput {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn file(file: FileContent) -> Self {
        Self {
            file: Some(file),
            youtube_url: None,
        }
    }

    pub fn youtube_url(url: impl Into<String>) -> Self {
        Self {
            file: None,
            youtube_url: Some(url.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.file.is_none() && self.youtube_url.is_none()
    }

    /// Discriminator for create-with-content requests. A file wins over a URL.
    pub fn kind(&self) -> ContentKind {
        match (&self.file, &self.youtube_url) {
            (Some(_), _) => ContentKind::Upload,
            (None, Some(_)) => ContentKind::Youtube,
            (None, None) => ContentKind::Basic,
        }
    }

    /// The single payload this input describes, if it describes exactly one.
    pub fn into_payload(self) -> Option<ContentPayload> {
        match (self.file, self.youtube_url) {
            (Some(file), None) => Some(ContentPayload::File(file)),
            (None, Some(url)) => Some(ContentPayload::RemoteUrl(url)),
            _ => None,
        }
    }
}

impl From<ContentPayload> for ContentInput {
    fn from(payload: ContentPayload) -> Self {
        match payload {
            ContentPayload::File(file) => ContentInput::file(file),
            ContentPayload::RemoteUrl(url) => ContentInput::youtube_url(url),
        }
    }
}

/// Which kind of content a project is created with.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Upload,
    Youtube,
    Basic,
}

impl Display for ContentKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            ContentKind::Upload => write!(f, "upload"),
            ContentKind::Youtube => write!(f, "youtube"),
            ContentKind::Basic => write!(f, "basic"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_kind_from_input() {
        let file = FileContent::new(vec![0u8; 4], "a.mp4", "video/mp4");
        assert_eq!(ContentInput::file(file).kind(), ContentKind::Upload);
        assert_eq!(
            ContentInput::youtube_url("https://youtu.be/x").kind(),
            ContentKind::Youtube
        );
        assert_eq!(ContentInput::empty().kind(), ContentKind::Basic);
    }

    #[test]
    fn test_into_payload_requires_exactly_one_source() {
        assert!(ContentInput::empty().into_payload().is_none());

        let both = ContentInput {
            file: Some(FileContent::new(vec![1u8], "a.mp4", "video/mp4")),
            youtube_url: Some("https://youtu.be/x".to_string()),
        };
        assert!(both.into_payload().is_none());

        match ContentInput::youtube_url("https://youtu.be/x").into_payload() {
            Some(ContentPayload::RemoteUrl(url)) => assert_eq!(url, "https://youtu.be/x"),
            other => panic!("unexpected payload: {:?}", other),
        }
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ContentKind::Youtube).unwrap(),
            "\"youtube\""
        );
        assert_eq!(ContentKind::Basic.to_string(), "basic");
    }

    #[test]
    fn test_from_path_declares_size_and_mime() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clip.webm");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(&[0u8; 2048]).unwrap();

        let file = FileContent::from_path(&path).unwrap();
        assert_eq!(file.filename, "clip.webm");
        assert_eq!(file.declared_size, 2048);
        assert_eq!(file.declared_mime_type, "video/webm");
    }

    #[test]
    fn test_from_path_accepts_parent_dir_components() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        std::fs::write(dir.path().join("clip.mp4"), [0u8; 512]).unwrap();

        let path = dir.path().join("sub").join("..").join("clip.mp4");
        let file = FileContent::from_path(&path).unwrap();
        assert_eq!(file.filename, "clip.mp4");
        assert_eq!(file.declared_size, 512);
        assert_eq!(file.declared_mime_type, "video/mp4");
    }

    #[test]
    fn test_size_mib_and_payload_kind() {
        let mut file = FileContent::new(vec![0u8; 4], "a.mp4", "video/mp4");
        file.declared_size = 3 * 1024 * 1024 / 2;
        assert_eq!(file.size_mib(), 1.5);
        assert_eq!(ContentPayload::File(file).kind(), ContentKind::Upload);
        assert_eq!(
            ContentPayload::RemoteUrl("https://youtu.be/x".to_string()).kind(),
            ContentKind::Youtube
        );
    }
}
