//! `ems-dispatch` — call prioritization, fleet state, and the greedy
//! dispatch engine.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                |
//! |--------------|---------------------------------------------------------|
//! | [`fleet`]    | `Vehicle`, `Fleet` registry with assign/release         |
//! | [`call`]     | `Call`, `CallQueue`, `PriorityTable`                    |
//! | [`engine`]   | `DispatchEngine`, `DispatchRecord`, `RunSummary`        |
//! | [`observer`] | `DispatchObserver` trait, `NoopObserver`                |
//! | [`loader`]   | CSV loaders for vehicles, calls, and the priority table |
//! | [`error`]    | `DispatchError`, `DispatchResult<T>`                    |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                    |
//! |------------|-----------------------------------------------------------|
//! | `parallel` | Rayon-parallel inner solve loop (one call at a time; the  |
//! |            | calls themselves always stay strictly sequential).        |

pub mod call;
pub mod engine;
pub mod error;
pub mod fleet;
pub mod loader;
pub mod observer;


pub use call::{Call, CallQueue, PriorityTable, FALLBACK_PRIORITY};
pub use engine::{DispatchEngine, DispatchRecord, Outcome, RunSummary};
pub use error::{DispatchError, DispatchResult};
pub use fleet::{Fleet, Vehicle};
pub use loader::{
    load_calls_csv, load_calls_reader, load_fleet_csv, load_fleet_reader,
    load_priorities_csv, load_priorities_reader,
};
pub use observer::{DispatchObserver, NoopObserver};
