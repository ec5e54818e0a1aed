//! Notification seam between the orchestrator and its caller.
//!
//! Every method has an empty default body, so an implementor only overrides
//! the events it cares about. [`Notifier`] offers the same thing with
//! closures.

use vidpipe_core::models::{IngestionResult, ProcessingState};
use vidpipe_core::IngestError;

/// Observer of a single ingestion call. Invoked synchronously, in order.
pub trait IngestionNotifier: Send + Sync {
    /// Progress percentage relayed from the store, as received.
    fn on_progress(&self, _percent: u8) {}

    /// A fresh state snapshot at every transition.
    fn on_state_change(&self, _state: &ProcessingState) {}

    /// Called once when the call succeeds.
    fn on_success(&self, _result: &IngestionResult) {}

    /// Called once when the call fails.
    fn on_error(&self, _error: &IngestError) {}
}

/// Notifier that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNotifier;

impl IngestionNotifier for NoopNotifier {}

type ProgressCallback = Box<dyn Fn(u8) + Send + Sync>;
type StateCallback = Box<dyn Fn(&ProcessingState) + Send + Sync>;
type SuccessCallback = Box<dyn Fn(&IngestionResult) + Send + Sync>;
type ErrorCallback = Box<dyn Fn(&IngestError) + Send + Sync>;

/// Closure-backed notifier. Any subset of slots may be filled.
///
/// ```
/// use vidpipe_processing::Notifier;
///
/// let notifier = Notifier::new()
///     .with_progress(|p| println!("{}%", p))
///     .with_error(|e| eprintln!("{}", e));
/// ```
#[derive(Default)]
pub struct Notifier {
    progress: Option<ProgressCallback>,
    state_change: Option<StateCallback>,
    success: Option<SuccessCallback>,
    error: Option<ErrorCallback>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_progress(mut self, f: impl Fn(u8) + Send + Sync + 'static) -> Self {
        self.progress = Some(Box::new(f));
        self
    }

    pub fn with_state_change(
        mut self,
        f: impl Fn(&ProcessingState) + Send + Sync + 'static,
    ) -> Self {
        self.state_change = Some(Box::new(f));
        self
    }

    pub fn with_success(mut self, f: impl Fn(&IngestionResult) + Send + Sync + 'static) -> Self {
        self.success = Some(Box::new(f));
        self
    }

    pub fn with_error(mut self, f: impl Fn(&IngestError) + Send + Sync + 'static) -> Self {
        self.error = Some(Box::new(f));
        self
    }
}

impl IngestionNotifier for Notifier {
    fn on_progress(&self, percent: u8) {
        if let Some(f) = &self.progress {
            f(percent);
        }
    }

    fn on_state_change(&self, state: &ProcessingState) {
        if let Some(f) = &self.state_change {
            f(state);
        }
    }

    fn on_success(&self, result: &IngestionResult) {
        if let Some(f) = &self.success {
            f(result);
        }
    }

    fn on_error(&self, error: &IngestError) {
        if let Some(f) = &self.error {
            f(error);
        }
    }
}

impl std::fmt::Debug for Notifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Notifier")
            .field("progress", &self.progress.is_some())
            .field("state_change", &self.state_change.is_some())
            .field("success", &self.success.is_some())
            .field("error", &self.error.is_some())
            .finish()
    }
}
