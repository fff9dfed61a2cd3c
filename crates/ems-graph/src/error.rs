//! Graph-subsystem error type.

use thiserror::Error;

/// Errors produced by `ems-graph`.
///
/// Routing failures are *not* errors: an unreachable goal is reported as a
/// [`SolvedPath`](crate::SolvedPath) with infinite cost so the dispatch loop
/// can degrade gracefully instead of aborting.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("road segment parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type GraphResult<T> = Result<T, GraphError>;
