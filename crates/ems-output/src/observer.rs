//! `CallLogObserver<W>` — bridges `DispatchObserver` to a `CallLogWriter`.

use std::io::Write;

use ems_dispatch::{DispatchObserver, DispatchRecord, RunSummary};
use ems_graph::RoadGraph;

use crate::log::CallLogWriter;
use crate::{OutputError, OutputResult};

/// A [`DispatchObserver`] that appends one log line per resolved call and
/// the summary line at the end of the run.
///
/// Errors from the writer are stored internally because observer hooks have
/// no return value.  After `engine.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct CallLogObserver<'g, W: Write> {
    writer: CallLogWriter<W>,
    graph: &'g RoadGraph,
    last_error: Option<OutputError>,
}

impl<'g, W: Write> CallLogObserver<'g, W> {
    /// Create an observer backed by `writer`, using `graph` to render
    /// location names.
    pub fn new(writer: CallLogWriter<W>, graph: &'g RoadGraph) -> Self {
        Self {
            writer,
            graph,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after the run.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect the log after the run).
    pub fn into_writer(self) -> CallLogWriter<W> {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: Write> DispatchObserver for CallLogObserver<'_, W> {
    fn on_call_resolved(&mut self, record: &DispatchRecord) {
        let result = self.writer.write_record(self.graph, record);
        self.store_err(result);
    }

    fn on_run_end(&mut self, summary: &RunSummary) {
        let result = self
            .writer
            .write_summary(summary.mean_solver_ms)
            .and_then(|()| self.writer.finish());
        self.store_err(result);
    }
}
