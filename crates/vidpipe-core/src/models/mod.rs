pub mod content;
pub mod processing;
pub mod project;

pub use content::{ContentInput, ContentKind, ContentPayload, FileContent};
pub use processing::ProcessingState;
pub use project::{
    CreateProjectRequest, IngestionResult, Project, ProjectListResponse, TaggedProjectRequest,
    Video, VideoSource,
};
