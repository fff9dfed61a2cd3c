//! Dispatch observer trait for logging and data collection.

use crate::engine::{DispatchRecord, RunSummary};

/// Callbacks invoked by [`DispatchEngine::run`][crate::DispatchEngine::run].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Hooks return `()`; an observer that
/// can fail (e.g. a file-backed log) stores its first error internally and
/// exposes it after the run.
pub trait DispatchObserver {
    /// Called once per processed call, dispatched or not, in processing
    /// order.
    fn on_call_resolved(&mut self, _record: &DispatchRecord) {}

    /// Called once after the last call with the aggregate metrics.
    fn on_run_end(&mut self, _summary: &RunSummary) {}
}

/// A [`DispatchObserver`] that does nothing.  Use when you need to call
/// `run` but don't want callbacks.
pub struct NoopObserver;

impl DispatchObserver for NoopObserver {}
