//! Test helpers: an in-memory project store and a notifier that records events.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use vidpipe_core::models::{
    ContentKind, FileContent, IngestionResult, ProcessingState, Project, TaggedProjectRequest,
    Video, VideoSource,
};
use vidpipe_core::store::{ProgressFn, ProjectStore, StoreError};
use vidpipe_core::IngestError;
use vidpipe_processing::IngestionNotifier;

/// A call received by the mock store.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreCall {
    TransferFile { project_id: String, filename: String },
    TransferRemoteUrl { project_id: String, url: String },
    CreateProject { name: String, kind: ContentKind, youtube_url: Option<String>, has_file: bool },
}

/// Mock project store for testing without a server
#[derive(Clone, Default)]
pub struct MockProjectStore {
    progress: Arc<Mutex<Vec<u8>>>,
    failure: Arc<Mutex<Option<String>>>,
    calls: Arc<Mutex<Vec<StoreCall>>>,
}

impl MockProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Progress values reported during `transfer_file`, in order.
    pub fn with_progress(self, steps: &[u8]) -> Self {
        *self.progress.lock().unwrap() = steps.to_vec();
        self
    }

    /// Make every operation reject with `message`.
    pub fn failing_with(self, message: &str) -> Self {
        *self.failure.lock().unwrap() = Some(message.to_string());
        self
    }

    pub fn calls(&self) -> Vec<StoreCall> {
        self.calls.lock().unwrap().clone()
    }

    fn outcome(&self) -> Result<(), StoreError> {
        match self.failure.lock().unwrap().clone() {
            Some(message) => Err(StoreError::new(message)),
            None => Ok(()),
        }
    }
}

pub fn sample_video(project_id: &str, source: VideoSource) -> Video {
    Video {
        id: Uuid::new_v4(),
        project_id: Uuid::parse_str(project_id).unwrap_or_else(|_| Uuid::new_v4()),
        source,
        filename: None,
        url: None,
        content_type: None,
        file_size: None,
        created_at: Utc::now(),
    }
}

#[async_trait]
impl ProjectStore for MockProjectStore {
    async fn transfer_file(
        &self,
        project_id: &str,
        file: &FileContent,
        on_progress: ProgressFn<'_>,
    ) -> Result<Video, StoreError> {
        self.calls.lock().unwrap().push(StoreCall::TransferFile {
            project_id: project_id.to_string(),
            filename: file.filename.clone(),
        });

        let steps = self.progress.lock().unwrap().clone();
        for step in steps {
            tokio::task::yield_now().await;
            on_progress(step);
        }
        self.outcome()?;

        let mut video = sample_video(project_id, VideoSource::Upload);
        video.filename = Some(file.filename.clone());
        video.content_type = Some(file.declared_mime_type.clone());
        video.file_size = Some(file.declared_size as i64);
        Ok(video)
    }

    async fn transfer_remote_url(
        &self,
        project_id: &str,
        url: &str,
    ) -> Result<Video, StoreError> {
        self.calls.lock().unwrap().push(StoreCall::TransferRemoteUrl {
            project_id: project_id.to_string(),
            url: url.to_string(),
        });
        self.outcome()?;

        let mut video = sample_video(project_id, VideoSource::Youtube);
        video.url = Some(url.to_string());
        Ok(video)
    }

    async fn create_project_with_attachment(
        &self,
        request: TaggedProjectRequest,
    ) -> Result<Project, StoreError> {
        self.calls.lock().unwrap().push(StoreCall::CreateProject {
            name: request.name.clone(),
            kind: request.kind,
            youtube_url: request.youtube_url.clone(),
            has_file: request.file.is_some(),
        });
        self.outcome()?;

        let now = Utc::now();
        Ok(Project {
            id: Uuid::new_v4(),
            name: request.name,
            description: request.description,
            kind: request.kind,
            videos: Vec::new(),
            created_at: now,
            updated_at: now,
        })
    }
}

/// A notifier event, in the order received.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Progress(u8),
    State(ProcessingState),
    Success,
    Error(IngestError),
}

#[derive(Clone, Default)]
pub struct RecordingNotifier {
    events: Arc<Mutex<Vec<Event>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    pub fn states(&self) -> Vec<ProcessingState> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::State(s) => Some(s),
                _ => None,
            })
            .collect()
    }

    pub fn count_success(&self) -> usize {
        self.events()
            .iter()
            .filter(|e| matches!(e, Event::Success))
            .count()
    }

    pub fn count_errors(&self) -> usize {
        self.events()
            .iter()
            .filter(|e| matches!(e, Event::Error(_)))
            .count()
    }
}

impl IngestionNotifier for RecordingNotifier {
    fn on_progress(&self, percent: u8) {
        self.events.lock().unwrap().push(Event::Progress(percent));
    }

    fn on_state_change(&self, state: &ProcessingState) {
        self.events.lock().unwrap().push(Event::State(state.clone()));
    }

    fn on_success(&self, _result: &IngestionResult) {
        self.events.lock().unwrap().push(Event::Success);
    }

    fn on_error(&self, error: &IngestError) {
        self.events.lock().unwrap().push(Event::Error(error.clone()));
    }
}

pub const PROJECT_ID: &str = "6f1c2a9e-3b7d-4c1e-9a52-0d8e4f7b6a31";

pub fn mp4(size: u64) -> FileContent {
    let mut file = FileContent::new(vec![0u8; 64], "clip.mp4", "video/mp4");
    file.declared_size = size;
    file
}
