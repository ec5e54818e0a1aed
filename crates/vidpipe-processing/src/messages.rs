//! Status labels and user-facing outcome messages.

use vidpipe_core::models::ContentKind;
use vidpipe_core::{ErrorMetadata, IngestError};

/// Status labels for one entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseLabels {
    pub starting: &'static str,
    /// Used while the store reports less than 100%.
    pub transferring: &'static str,
    /// Used once the store reports 100%, until it settles.
    pub finishing: &'static str,
    pub success: &'static str,
    pub failure: &'static str,
}

pub const DISPATCH_STARTING: &str = "Starting...";

pub const FILE_PHASE: PhaseLabels = PhaseLabels {
    starting: "Uploading video...",
    transferring: "Uploading video...",
    finishing: "Processing video...",
    success: "Upload complete!",
    failure: "Upload failed",
};

pub const YOUTUBE_PHASE: PhaseLabels = PhaseLabels {
    starting: "Processing YouTube URL...",
    transferring: "Processing YouTube URL...",
    finishing: "Processing YouTube URL...",
    success: "YouTube video processed!",
    failure: "Processing failed",
};

pub const CREATE_PROJECT_PHASE: PhaseLabels = PhaseLabels {
    starting: "Creating project...",
    transferring: "Creating project...",
    finishing: "Creating project...",
    success: "Project created successfully!",
    failure: "Project creation failed",
};

impl PhaseLabels {
    /// Label for a relayed progress value.
    pub fn for_progress(&self, percent: u8) -> &'static str {
        if percent < 100 {
            self.transferring
        } else {
            self.finishing
        }
    }
}

/// Message to show once content of `kind` has been ingested.
pub fn success_message(kind: ContentKind) -> &'static str {
    match kind {
        ContentKind::Upload => "Video uploaded successfully!",
        ContentKind::Youtube => "YouTube video added successfully!",
        ContentKind::Basic => "Project created successfully!",
    }
}

/// Message to show for a failed ingestion call.
pub fn failure_message(error: &IngestError) -> String {
    error.client_message()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_progress_labels() {
        assert_eq!(FILE_PHASE.for_progress(0), "Uploading video...");
        assert_eq!(FILE_PHASE.for_progress(99), "Uploading video...");
        assert_eq!(FILE_PHASE.for_progress(100), "Processing video...");
    }

    #[test]
    fn test_youtube_label_does_not_change() {
        assert_eq!(YOUTUBE_PHASE.for_progress(10), YOUTUBE_PHASE.starting);
        assert_eq!(YOUTUBE_PHASE.for_progress(100), YOUTUBE_PHASE.starting);
    }

    #[test]
    fn test_success_messages() {
        assert_eq!(
            success_message(ContentKind::Upload),
            "Video uploaded successfully!"
        );
        assert_eq!(
            success_message(ContentKind::Youtube),
            "YouTube video added successfully!"
        );
        assert_eq!(
            success_message(ContentKind::Basic),
            "Project created successfully!"
        );
    }

    #[test]
    fn test_failure_message_is_normalized() {
        let err = IngestError::transfer("authentication header missing");
        assert_eq!(failure_message(&err), "Authentication required. Please log in.");
        assert_eq!(
            failure_message(&IngestError::UnsupportedContent),
            "Invalid content type. Must provide either file or youtubeUrl."
        );
    }
}
