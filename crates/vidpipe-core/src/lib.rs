//! vidpipe core library
//!
//! Domain models, the project store collaborator trait, error types and
//! configuration shared by every vidpipe component.

pub mod config;
pub mod error;
pub mod models;
pub mod store;

pub use config::ClientConfig;
pub use error::{normalize_error_message, AppError, ErrorMetadata, IngestError, LogLevel};
pub use models::{
    ContentInput, ContentKind, ContentPayload, CreateProjectRequest, FileContent, IngestionResult,
    ProcessingState, Project, TaggedProjectRequest, Video,
};
pub use store::{ProgressFn, ProjectStore, StoreError};
