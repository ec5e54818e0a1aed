//! vidpipe ingestion pipeline
//!
//! Validates content, hands it to a [`ProjectStore`](vidpipe_core::ProjectStore)
//! and reports progress and the outcome through an [`IngestionNotifier`].

pub mod messages;
pub mod notifier;
pub mod orchestrator;
pub mod validator;

pub use messages::{failure_message, success_message, PhaseLabels};
pub use notifier::{IngestionNotifier, NoopNotifier, Notifier};
pub use orchestrator::IngestionOrchestrator;
pub use validator::{
    validate, validate_file, validate_youtube_url, MediaValidator, ValidationError,
    ValidationResult, ALLOWED_VIDEO_MIME_TYPES, MAX_VIDEO_SIZE_BYTES,
};
