use regex::Regex;
use std::sync::LazyLock;

use vidpipe_core::models::{ContentInput, FileContent};

/// Largest accepted video file (500 MiB).
pub const MAX_VIDEO_SIZE_BYTES: u64 = 500 * 1024 * 1024;

/// MIME types accepted for uploaded videos.
pub const ALLOWED_VIDEO_MIME_TYPES: &[&str] = &[
    "video/mp4",
    "video/webm",
    "video/avi",
    "video/mov",
    "video/quicktime",
    "video/x-msvideo",
];

static YOUTUBE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(https?://)?(www\.)?(youtube\.com/|youtu\.be/).+")
        .expect("YouTube URL pattern is a valid regex")
});

/// Common validation errors for ingestion payloads
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("File size ({size_mib:.2}MB) exceeds maximum allowed size ({max_mib}MB)")]
    FileTooLarge { size_mib: f64, max_mib: u64 },

    #[error("Invalid file type: {0}. Allowed types: MP4, WebM, AVI, MOV")]
    InvalidContentType(String),

    #[error("Invalid file")]
    InvalidFile,

    #[error("Invalid YouTube URL")]
    InvalidUrl,

    #[error("Please enter a valid YouTube URL")]
    MalformedUrl,

    #[error("No content provided")]
    NoContent,

    #[error("Provide either a file or a YouTube URL, not both")]
    AmbiguousContent,
}

/// Outcome of a pre-flight check. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn invalid(error: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(error.into()),
        }
    }

    /// `Ok(())` when valid, the error message otherwise.
    pub fn into_result(self) -> Result<(), String> {
        match self.error {
            None if self.is_valid => Ok(()),
            Some(error) => Err(error),
            None => Err(ValidationError::NoContent.to_string()),
        }
    }
}

impl From<Result<(), ValidationError>> for ValidationResult {
    fn from(result: Result<(), ValidationError>) -> Self {
        match result {
            Ok(()) => ValidationResult::ok(),
            Err(e) => ValidationResult::invalid(e.to_string()),
        }
    }
}

/// Video file validator
///
/// Checks declared size and MIME type only; the bytes are never inspected.
pub struct MediaValidator {
    max_file_size: u64,
    allowed_content_types: Vec<String>,
}

impl Default for MediaValidator {
    fn default() -> Self {
        Self::new(
            MAX_VIDEO_SIZE_BYTES,
            ALLOWED_VIDEO_MIME_TYPES
                .iter()
                .map(|t| t.to_string())
                .collect(),
        )
    }
}

impl MediaValidator {
    pub fn new(max_file_size: u64, allowed_content_types: Vec<String>) -> Self {
        Self {
            max_file_size,
            allowed_content_types,
        }
    }

    /// Validate declared file size
    pub fn validate_file_size(&self, file: &FileContent) -> Result<(), ValidationError> {
        if file.declared_size > self.max_file_size {
            return Err(ValidationError::FileTooLarge {
                size_mib: file.size_mib(),
                max_mib: self.max_file_size / (1024 * 1024),
            });
        }

        Ok(())
    }

    /// Validate declared content type. Exact match against the allow-list.
    pub fn validate_content_type(&self, content_type: &str) -> Result<(), ValidationError> {
        if !self
            .allowed_content_types
            .iter()
            .any(|ct| ct == content_type)
        {
            return Err(ValidationError::InvalidContentType(
                content_type.to_string(),
            ));
        }

        Ok(())
    }

    /// Validate a file: presence, then size, then type.
    pub fn validate_file(&self, file: Option<&FileContent>) -> Result<(), ValidationError> {
        let file = file.ok_or(ValidationError::InvalidFile)?;
        self.validate_file_size(file)?;
        self.validate_content_type(&file.declared_mime_type)?;
        Ok(())
    }
}

/// Validate a YouTube URL: presence, then shape.
pub fn check_youtube_url(url: Option<&str>) -> Result<(), ValidationError> {
    let url = url.ok_or(ValidationError::InvalidUrl)?;
    if !YOUTUBE_URL.is_match(url) {
        return Err(ValidationError::MalformedUrl);
    }
    Ok(())
}

/// Validate content, dispatching on which source is present.
pub fn check_content(content: &ContentInput) -> Result<(), ValidationError> {
    match (&content.file, &content.youtube_url) {
        (Some(file), None) => MediaValidator::default().validate_file(Some(file)),
        (None, Some(url)) => check_youtube_url(Some(url)),
        (Some(_), Some(_)) => Err(ValidationError::AmbiguousContent),
        (None, None) => Err(ValidationError::NoContent),
    }
}

pub fn validate_file(file: Option<&FileContent>) -> ValidationResult {
    MediaValidator::default().validate_file(file).into()
}

pub fn validate_youtube_url(url: Option<&str>) -> ValidationResult {
    check_youtube_url(url).into()
}

/// Pre-flight check of caller content. Pure and deterministic.
pub fn validate(content: &ContentInput) -> ValidationResult {
    check_content(content).into()
}
