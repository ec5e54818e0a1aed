//! Error types module
//!
//! `IngestError` is the outcome of a failed ingestion call. `AppError` covers
//! everything around it (configuration, local I/O, HTTP plumbing).
//!
//! Transfer failures are classified by keyword, in a fixed priority order, into
//! a small set of user-facing messages. See [`normalize_error_message`].

use std::io;

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for recoverable issues
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata describing how an error should be presented to a user.
pub trait ErrorMetadata {
    /// Machine-readable error code (e.g., "TRANSFER_ERROR")
    fn error_code(&self) -> &'static str;

    /// Whether the caller may reasonably try again
    fn is_recoverable(&self) -> bool;

    /// Suggested action for the user
    fn suggested_action(&self) -> Option<&'static str>;

    /// User-facing message (may differ from the internal error message)
    fn client_message(&self) -> String;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

pub const UNSUPPORTED_CONTENT_MESSAGE: &str =
    "Invalid content type. Must provide either file or youtubeUrl.";

pub const GENERIC_ERROR_MESSAGE: &str = "An unexpected error occurred. Please try again.";

/// Keyword → message table. Checked top to bottom; the first hit wins.
const ERROR_CATEGORIES: &[(&str, &str)] = &[
    ("authentication", "Authentication required. Please log in."),
    ("network", "Network error. Please check your connection."),
    ("file", "File upload failed. Please try again."),
    ("YouTube", "Invalid YouTube URL or video not accessible."),
    ("size", "File too large. Maximum size is 500MB."),
    (
        "format",
        "Unsupported file format. Please use MP4, WebM, AVI, or MOV.",
    ),
];

/// Map a raw failure message onto a user-facing category.
///
/// Matching is case-sensitive substring search in the order of
/// `ERROR_CATEGORIES`. A message matching nothing is returned verbatim; an
/// empty one becomes a generic fallback.
pub fn normalize_error_message(raw: &str) -> String {
    // TODO: switch to structured error codes once the project API returns them.
    if raw.trim().is_empty() {
        return GENERIC_ERROR_MESSAGE.to_string();
    }

    ERROR_CATEGORIES
        .iter()
        .find(|(keyword, _)| raw.contains(keyword))
        .map(|(_, message)| (*message).to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// Failure of a single ingestion call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IngestError {
    /// Input rejected by the validator before any transfer started.
    #[error("{0}")]
    Validation(String),

    /// Neither (or both) of file and YouTube URL were supplied.
    #[error("Invalid content type. Must provide either file or youtubeUrl.")]
    UnsupportedContent,

    /// The store rejected the operation. `message` is already normalized.
    #[error("{message}")]
    Transfer {
        message: String,
        source_message: String,
    },
}

impl IngestError {
    /// Build a transfer failure from a raw store message.
    pub fn transfer(raw: impl Into<String>) -> Self {
        let source_message = raw.into();
        IngestError::Transfer {
            message: normalize_error_message(&source_message),
            source_message,
        }
    }

    /// Message before normalization, when there was one.
    pub fn source_message(&self) -> Option<&str> {
        match self {
            IngestError::Transfer { source_message, .. } => Some(source_message),
            _ => None,
        }
    }
}

impl ErrorMetadata for IngestError {
    fn error_code(&self) -> &'static str {
        match self {
            IngestError::Validation(_) => "VALIDATION_ERROR",
            IngestError::UnsupportedContent => "UNSUPPORTED_CONTENT",
            IngestError::Transfer { .. } => "TRANSFER_ERROR",
        }
    }

    fn is_recoverable(&self) -> bool {
        matches!(self, IngestError::Transfer { .. })
    }

    fn suggested_action(&self) -> Option<&'static str> {
        match self {
            IngestError::Validation(_) => Some("Check the file or URL and try again"),
            IngestError::UnsupportedContent => Some("Provide either a video file or a YouTube URL"),
            IngestError::Transfer { .. } => Some("Retry the upload"),
        }
    }

    fn client_message(&self) -> String {
        self.to_string()
    }

    fn log_level(&self) -> LogLevel {
        match self {
            IngestError::Validation(_) | IngestError::UnsupportedContent => LogLevel::Debug,
            IngestError::Transfer { .. } => LogLevel::Warn,
        }
    }
}

/// Errors outside an ingestion call: configuration, local files, HTTP.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Internal error with source")]
    InternalWithSource {
        message: String,
        #[source]
        source: anyhow::Error,
    },
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::InternalWithSource {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        AppError::Internal(format!("IO error: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidInput(format!("JSON parsing error: {}", err))
    }
}

impl From<envy::Error> for AppError {
    fn from(err: envy::Error) -> Self {
        AppError::Config(err.to_string())
    }
}

impl ErrorMetadata for AppError {
    fn error_code(&self) -> &'static str {
        match self {
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::InvalidInput(_) => "INVALID_INPUT",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Unauthorized(_) => "UNAUTHORIZED",
            AppError::Network(_) => "NETWORK_ERROR",
            AppError::Internal(_) | AppError::InternalWithSource { .. } => "INTERNAL_ERROR",
        }
    }

    fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AppError::Network(_) | AppError::Internal(_) | AppError::InternalWithSource { .. }
        )
    }

    fn suggested_action(&self) -> Option<&'static str> {
        match self {
            AppError::Config(_) => Some("Check VIDPIPE_* environment variables"),
            AppError::InvalidInput(_) => Some("Check parameters and try again"),
            AppError::NotFound(_) => Some("Verify the project ID exists"),
            AppError::Unauthorized(_) => Some("Check the API key"),
            AppError::Network(_) => Some("Check your connection and retry"),
            AppError::Internal(_) | AppError::InternalWithSource { .. } => {
                Some("Retry after a short delay")
            }
        }
    }

    fn client_message(&self) -> String {
        match self {
            AppError::Unauthorized(_) => "Authentication required. Please log in.".to_string(),
            AppError::Network(_) => "Network error. Please check your connection.".to_string(),
            AppError::Internal(_) | AppError::InternalWithSource { .. } => {
                GENERIC_ERROR_MESSAGE.to_string()
            }
            other => other.to_string(),
        }
    }

    fn log_level(&self) -> LogLevel {
        match self {
            AppError::Config(_) | AppError::InvalidInput(_) | AppError::NotFound(_) => {
                LogLevel::Debug
            }
            AppError::Unauthorized(_) | AppError::Network(_) => LogLevel::Warn,
            AppError::Internal(_) | AppError::InternalWithSource { .. } => LogLevel::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_categories() {
        assert_eq!(
            normalize_error_message("authentication token expired"),
            "Authentication required. Please log in."
        );
        assert_eq!(
            normalize_error_message("network unreachable"),
            "Network error. Please check your connection."
        );
        assert_eq!(
            normalize_error_message("file chunk rejected"),
            "File upload failed. Please try again."
        );
        assert_eq!(
            normalize_error_message("YouTube returned 404"),
            "Invalid YouTube URL or video not accessible."
        );
        assert_eq!(
            normalize_error_message("payload size exceeded"),
            "File too large. Maximum size is 500MB."
        );
        assert_eq!(
            normalize_error_message("bad container format"),
            "Unsupported file format. Please use MP4, WebM, AVI, or MOV."
        );
    }

    #[test]
    fn test_normalize_priority_order() {
        // "authentication" outranks "network"
        assert_eq!(
            normalize_error_message("network authentication failed"),
            "Authentication required. Please log in."
        );
        // "file" outranks "size"
        assert_eq!(
            normalize_error_message("file size too big"),
            "File upload failed. Please try again."
        );
        // "YouTube" outranks "format"
        assert_eq!(
            normalize_error_message("YouTube format unavailable"),
            "Invalid YouTube URL or video not accessible."
        );
    }

    #[test]
    fn test_normalize_is_case_sensitive() {
        assert_eq!(normalize_error_message("Network down"), "Network down");
        assert_eq!(normalize_error_message("youtube down"), "youtube down");
    }

    #[test]
    fn test_normalize_passthrough_and_fallback() {
        assert_eq!(normalize_error_message("quota exceeded"), "quota exceeded");
        assert_eq!(normalize_error_message(""), GENERIC_ERROR_MESSAGE);
        assert_eq!(normalize_error_message("   "), GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn test_unsupported_content_message() {
        assert_eq!(
            IngestError::UnsupportedContent.to_string(),
            UNSUPPORTED_CONTENT_MESSAGE
        );
    }

    #[test]
    fn test_transfer_keeps_source_message() {
        let err = IngestError::transfer("network timeout after 30s");
        assert_eq!(err.to_string(), "Network error. Please check your connection.");
        assert_eq!(err.source_message(), Some("network timeout after 30s"));
        assert_eq!(err.error_code(), "TRANSFER_ERROR");
        assert!(err.is_recoverable());
        assert_eq!(err.log_level(), LogLevel::Warn);
    }

    #[test]
    fn test_validation_metadata() {
        let err = IngestError::Validation("Please enter a valid YouTube URL".to_string());
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
        assert!(!err.is_recoverable());
        assert_eq!(err.client_message(), "Please enter a valid YouTube URL");
        assert!(err.source_message().is_none());
    }

    #[test]
    fn test_app_error_metadata() {
        let err = AppError::Unauthorized("401".to_string());
        assert_eq!(err.error_code(), "UNAUTHORIZED");
        assert_eq!(err.client_message(), "Authentication required. Please log in.");
        assert_eq!(err.suggested_action(), Some("Check the API key"));

        let err = AppError::from(anyhow::anyhow!("boom"));
        assert_eq!(err.error_code(), "INTERNAL_ERROR");
        assert!(err.is_recoverable());
        assert_eq!(err.log_level(), LogLevel::Error);
    }
}
