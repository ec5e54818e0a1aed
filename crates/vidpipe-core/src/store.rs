//! Project store collaborator
//!
//! The orchestrator never moves bytes or persists records itself. It drives
//! this trait, which the HTTP client (or a test double) implements.

use async_trait::async_trait;

use crate::models::{FileContent, Project, TaggedProjectRequest, Video};

/// Progress callback handed to [`ProjectStore::transfer_file`], called with a
/// percentage in `0..=100`.
pub type ProgressFn<'a> = &'a (dyn Fn(u8) + Send + Sync);

/// Failure reported by the store. Only the message is inspected downstream.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct StoreError {
    pub message: String,
}

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<anyhow::Error> for StoreError {
    fn from(err: anyhow::Error) -> Self {
        // Keep the whole context chain; classification looks for keywords anywhere in it.
        StoreError::new(format!("{:#}", err))
    }
}

/// Persistent project store performing transfers and record creation.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// Transfer file bytes into a project. May call `on_progress` zero or more
    /// times before settling.
    async fn transfer_file(
        &self,
        project_id: &str,
        file: &FileContent,
        on_progress: ProgressFn<'_>,
    ) -> Result<Video, StoreError>;

    /// Ingest a remote video URL into a project. No intermediate progress.
    async fn transfer_remote_url(&self, project_id: &str, url: &str)
        -> Result<Video, StoreError>;

    /// Create a project and attach its content in one operation.
    async fn create_project_with_attachment(
        &self,
        request: TaggedProjectRequest,
    ) -> Result<Project, StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_from_anyhow_keeps_chain() {
        let err = anyhow::anyhow!("connection reset").context("network request failed");
        let store_err = StoreError::from(err);
        assert!(store_err.message.contains("network request failed"));
        assert!(store_err.message.contains("connection reset"));
    }
}
