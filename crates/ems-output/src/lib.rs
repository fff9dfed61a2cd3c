//! `ems-output` — dispatch log writing and performance reporting.
//!
//! The call log is the system's external interface: one `key=value` line per
//! processed call plus a trailing summary line, in a fixed field order.  The
//! console report is a human-readable digest of the run's solver latencies.
//!
//! # Crate layout
//!
//! | Module       | Contents                                          |
//! |--------------|---------------------------------------------------|
//! | [`log`]      | `CallLogWriter` — append-only key=value call log  |
//! | [`observer`] | `CallLogObserver` — bridges `DispatchObserver` to the writer |
//! | [`report`]   | console performance summary                       |
//! | [`error`]    | `OutputError`, `OutputResult<T>`                  |
//!
//! # Usage
//!
//! ```rust,ignore
//! use ems_output::{CallLogObserver, CallLogWriter};
//!
//! let writer = CallLogWriter::create(Path::new("ambulance_call_log.csv"))?;
//! let mut obs = CallLogObserver::new(writer, &graph);
//! let summary = engine.run(&queue, &mut obs)?;
//! obs.take_error().map(|e| eprintln!("log error: {e}"));
//! ems_output::report::print_performance_summary(&summary);
//! ```

pub mod error;
pub mod log;
pub mod observer;
pub mod report;

#[cfg(test)]
mod tests;

pub use error::{OutputError, OutputResult};
pub use log::CallLogWriter;
pub use observer::CallLogObserver;
