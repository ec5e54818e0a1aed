//! Ingestion orchestration: validate → transfer → register, with progress.
//!
//! Each entry point is one sequential task that suspends only while awaiting
//! the store. Progress from the store is relayed synchronously, in arrival
//! order, without clamping or coalescing. Every call that reaches the state
//! machine ends with exactly one terminal pair: a terminal state followed by
//! `on_success`, or a terminal state followed by `on_error`.

use std::sync::Arc;

use vidpipe_core::models::{
    ContentInput, ContentKind, ContentPayload, CreateProjectRequest, FileContent, IngestionResult,
    ProcessingState, Project, TaggedProjectRequest, Video,
};
use vidpipe_core::{IngestError, ProjectStore};

use crate::messages::{
    PhaseLabels, CREATE_PROJECT_PHASE, DISPATCH_STARTING, FILE_PHASE, YOUTUBE_PHASE,
};
use crate::notifier::{IngestionNotifier, NoopNotifier};
use crate::validator::{self, check_youtube_url, MediaValidator, ValidationResult};

/// Drives ingestion calls against an injected [`ProjectStore`].
///
/// Holds no per-call state; concurrent calls are independent and nothing
/// prevents two calls targeting the same project.
#[derive(Clone)]
pub struct IngestionOrchestrator {
    store: Arc<dyn ProjectStore>,
}

impl IngestionOrchestrator {
    pub fn new(store: Arc<dyn ProjectStore>) -> Self {
        Self { store }
    }

    /// Pre-flight check. Pure; never touches the store or a notifier.
    pub fn validate(&self, content: &ContentInput) -> ValidationResult {
        validator::validate(content)
    }

    /// Ingest whichever source `content` carries.
    ///
    /// Content with neither (or both) sources is rejected before any state is
    /// emitted; the notifier hears nothing in that case.
    pub async fn process_content(
        &self,
        project_id: &str,
        content: ContentInput,
        notifier: Option<&dyn IngestionNotifier>,
    ) -> Result<IngestionResult, IngestError> {
        let notifier = notifier.unwrap_or(&NoopNotifier);

        let Some(payload) = content.into_payload() else {
            tracing::warn!(project_id = %project_id, "Rejected content without a single source");
            return Err(IngestError::UnsupportedContent);
        };

        tracing::debug!(project_id = %project_id, kind = %payload.kind(), "Dispatching content");
        emit(notifier, ProcessingState::started(DISPATCH_STARTING));

        match payload {
            ContentPayload::File(file) => self
                .process_file(project_id, file, Some(notifier))
                .await
                .map(IngestionResult::from),
            ContentPayload::RemoteUrl(url) => self
                .process_youtube_url(project_id, &url, Some(notifier))
                .await
                .map(IngestionResult::from),
        }
    }

    /// Upload a local video file into a project.
    pub async fn process_file(
        &self,
        project_id: &str,
        file: FileContent,
        notifier: Option<&dyn IngestionNotifier>,
    ) -> Result<Video, IngestError> {
        let notifier = notifier.unwrap_or(&NoopNotifier);
        let labels = FILE_PHASE;

        tracing::info!(
            project_id = %project_id,
            filename = %file.filename,
            size_bytes = file.declared_size,
            content_type = %file.declared_mime_type,
            "Starting video upload"
        );
        emit(notifier, ProcessingState::started(labels.starting));

        let outcome = self.transfer_file(project_id, &file, notifier, labels).await;
        settle(outcome, labels, notifier)
    }

    /// Ingest a YouTube video into a project.
    pub async fn process_youtube_url(
        &self,
        project_id: &str,
        url: &str,
        notifier: Option<&dyn IngestionNotifier>,
    ) -> Result<Video, IngestError> {
        let notifier = notifier.unwrap_or(&NoopNotifier);
        let labels = YOUTUBE_PHASE;

        tracing::info!(project_id = %project_id, url = %url, "Starting YouTube ingestion");
        emit(notifier, ProcessingState::started(labels.starting));

        let outcome = self.transfer_remote_url(project_id, url).await;
        settle(outcome, labels, notifier)
    }

    /// Create a project, attaching content in the same store operation.
    pub async fn create_project_with_content(
        &self,
        request: CreateProjectRequest,
        notifier: Option<&dyn IngestionNotifier>,
    ) -> Result<Project, IngestError> {
        let notifier = notifier.unwrap_or(&NoopNotifier);
        let labels = CREATE_PROJECT_PHASE;

        let tagged = request.into_tagged();
        tracing::info!(name = %tagged.name, kind = %tagged.kind, "Creating project");
        emit(notifier, ProcessingState::started(labels.starting));

        let outcome = self.create_project(tagged).await;
        settle(outcome, labels, notifier)
    }

    async fn transfer_file(
        &self,
        project_id: &str,
        file: &FileContent,
        notifier: &dyn IngestionNotifier,
        labels: PhaseLabels,
    ) -> Result<Video, IngestError> {
        MediaValidator::default()
            .validate_file(Some(file))
            .map_err(|e| IngestError::transfer(e.to_string()))?;

        let relay = |percent: u8| {
            notifier.on_progress(percent);
            emit(
                notifier,
                ProcessingState::in_progress(percent, labels.for_progress(percent)),
            );
        };

        self.store
            .transfer_file(project_id, file, &relay)
            .await
            .map_err(|e| IngestError::transfer(e.message))
    }

    async fn transfer_remote_url(&self, project_id: &str, url: &str) -> Result<Video, IngestError> {
        check_youtube_url(Some(url)).map_err(|e| IngestError::transfer(e.to_string()))?;

        self.store
            .transfer_remote_url(project_id, url)
            .await
            .map_err(|e| IngestError::transfer(e.message))
    }

    async fn create_project(&self, tagged: TaggedProjectRequest) -> Result<Project, IngestError> {
        match tagged.kind {
            ContentKind::Upload => MediaValidator::default().validate_file(tagged.file.as_ref()),
            ContentKind::Youtube => check_youtube_url(tagged.youtube_url.as_deref()),
            ContentKind::Basic => Ok(()),
        }
        .map_err(|e| IngestError::transfer(e.to_string()))?;

        self.store
            .create_project_with_attachment(tagged)
            .await
            .map_err(|e| IngestError::transfer(e.message))
    }
}

fn emit(notifier: &dyn IngestionNotifier, state: ProcessingState) {
    tracing::debug!(
        is_processing = state.is_processing,
        progress = state.progress,
        status = %state.status,
        "Ingestion state changed"
    );
    notifier.on_state_change(&state);
}

/// Emit the terminal pair for `outcome` and hand it back to the caller.
fn settle<T>(
    outcome: Result<T, IngestError>,
    labels: PhaseLabels,
    notifier: &dyn IngestionNotifier,
) -> Result<T, IngestError>
where
    T: Clone + Into<IngestionResult>,
{
    match outcome {
        Ok(value) => {
            let result: IngestionResult = value.clone().into();
            tracing::info!(id = %result.id(), status = labels.success, "Ingestion succeeded");
            emit(notifier, ProcessingState::completed(labels.success));
            notifier.on_success(&result);
            Ok(value)
        }
        Err(err) => {
            tracing::warn!(
                error = %err,
                source_message = err.source_message().unwrap_or_default(),
                status = labels.failure,
                "Ingestion failed"
            );
            emit(notifier, ProcessingState::failed(labels.failure));
            notifier.on_error(&err);
            Err(err)
        }
    }
}
