use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use uuid::Uuid;

use super::content::{ContentInput, ContentKind, FileContent};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VideoSource {
    Upload,
    Youtube,
}

impl Display for VideoSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            VideoSource::Upload => write!(f, "upload"),
            VideoSource::Youtube => write!(f, "youtube"),
        }
    }
}

/// A video record attached to a project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Video {
    pub id: Uuid,
    pub project_id: Uuid,
    pub source: VideoSource,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde(default)]
    pub file_size: Option<i64>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: ContentKind,
    #[serde(default)]
    pub videos: Vec<Video>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectListResponse {
    pub projects: Vec<Project>,
    pub count: usize,
}

/// Request to create a project, optionally with content attached.
#[derive(Debug, Clone)]
pub struct CreateProjectRequest {
    pub name: String,
    pub description: Option<String>,
    pub content: ContentInput,
}

impl CreateProjectRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            content: ContentInput::empty(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_content(mut self, content: ContentInput) -> Self {
        self.content = content;
        self
    }

    /// Tag the request with its content discriminator.
    pub fn into_tagged(self) -> TaggedProjectRequest {
        let kind = self.content.kind();
        let (file, youtube_url) = match kind {
            ContentKind::Upload => (self.content.file, None),
            ContentKind::Youtube => (None, self.content.youtube_url),
            ContentKind::Basic => (None, None),
        };
        TaggedProjectRequest {
            name: self.name,
            description: self.description,
            kind,
            youtube_url,
            file,
        }
    }
}

/// Wire form of a create-with-content request. The file travels as a
/// multipart part, never inside the JSON body.
#[derive(Debug, Clone, Serialize)]
pub struct TaggedProjectRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: ContentKind,
    #[serde(rename = "youtubeUrl", skip_serializing_if = "Option::is_none")]
    pub youtube_url: Option<String>,
    #[serde(skip)]
    pub file: Option<FileContent>,
}

/// Opaque success payload of an ingestion entry point.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IngestionResult {
    Project(Project),
    Video(Video),
}

impl From<Project> for IngestionResult {
    fn from(project: Project) -> Self {
        IngestionResult::Project(project)
    }
}

impl From<Video> for IngestionResult {
    fn from(video: Video) -> Self {
        IngestionResult::Video(video)
    }
}

impl IngestionResult {
    pub fn id(&self) -> Uuid {
        match self {
            IngestionResult::Project(p) => p.id,
            IngestionResult::Video(v) => v.id,
        }
    }

    /// Kind of content that was ingested.
    pub fn kind(&self) -> ContentKind {
        match self {
            IngestionResult::Project(p) => p.kind,
            IngestionResult::Video(v) => match v.source {
                VideoSource::Upload => ContentKind::Upload,
                VideoSource::Youtube => ContentKind::Youtube,
            },
        }
    }
}
