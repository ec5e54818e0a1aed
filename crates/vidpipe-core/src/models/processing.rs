use serde::{Deserialize, Serialize};

/// Snapshot of an ingestion call, emitted fresh at every transition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingState {
    pub is_processing: bool,
    pub progress: u8,
    pub status: String,
}

impl ProcessingState {
    pub fn started(status: impl Into<String>) -> Self {
        Self {
            is_processing: true,
            progress: 0,
            status: status.into(),
        }
    }

    /// Mid-transfer snapshot. `progress` is relayed as received.
    pub fn in_progress(progress: u8, status: impl Into<String>) -> Self {
        Self {
            is_processing: true,
            progress,
            status: status.into(),
        }
    }

    pub fn completed(status: impl Into<String>) -> Self {
        Self {
            is_processing: false,
            progress: 100,
            status: status.into(),
        }
    }

    pub fn failed(status: impl Into<String>) -> Self {
        Self {
            is_processing: false,
            progress: 0,
            status: status.into(),
        }
    }

    pub fn is_terminal(&self) -> bool {
        !self.is_processing
    }
}
