use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use vidpipe_core::models::{ContentInput, FileContent, IngestionResult, ProcessingState};
use vidpipe_core::{ErrorMetadata, IngestError};
use vidpipe_processing::{failure_message, success_message, IngestionNotifier};

/// Initialize tracing for CLI binaries.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}

/// Renders ingestion events as log lines.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl IngestionNotifier for TracingNotifier {
    fn on_progress(&self, percent: u8) {
        tracing::debug!(percent, "Transfer progress");
    }

    fn on_state_change(&self, state: &ProcessingState) {
        if state.is_processing {
            tracing::info!(progress = state.progress, "{}", state.status);
        } else {
            tracing::info!(done = state.is_terminal(), "{}", state.status);
        }
    }

    fn on_success(&self, result: &IngestionResult) {
        let kind = result.kind();
        tracing::info!(id = %result.id(), kind = %kind, "{}", success_message(kind));
    }

    fn on_error(&self, error: &IngestError) {
        tracing::warn!(
            code = error.error_code(),
            recoverable = error.is_recoverable(),
            "{}",
            failure_message(error)
        );
    }
}

/// Build content from the `--file` / `--url` flags.
///
/// Neither flag yields empty content so the orchestrator reports it; both is
/// rejected here since clap cannot express "at most one" across optional args
/// shared by several subcommands.
pub fn content_from_args(file: Option<PathBuf>, url: Option<String>) -> Result<ContentInput> {
    match (file, url) {
        (Some(_), Some(_)) => bail!("Provide either a file or a YouTube URL, not both"),
        (Some(path), None) => {
            let file = FileContent::from_path(&path)
                .with_context(|| format!("Failed to load {}", path.display()))?;
            Ok(ContentInput::file(file))
        }
        (None, Some(url)) => Ok(ContentInput::youtube_url(url)),
        (None, None) => Ok(ContentInput::empty()),
    }
}
