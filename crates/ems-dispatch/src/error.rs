//! Dispatch-subsystem error type.

use thiserror::Error;

use ems_core::VehicleId;

/// Errors produced by `ems-dispatch`.
///
/// Per-call degradations (no available vehicle, unreachable call location)
/// are *not* errors — they surface as `Outcome::Unassigned` records so the
/// run keeps going.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("vehicle {0} is not available for assignment")]
    VehicleUnavailable(VehicleId),

    #[error("input parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type DispatchResult<T> = Result<T, DispatchError>;
