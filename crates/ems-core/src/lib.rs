//! `ems-core` — foundational types for the `ems_dispatch` simulation.
//!
//! This crate is a dependency of every other `ems-*` crate.  It intentionally
//! has no `ems-*` dependencies and no required external ones (only optional
//! `serde`).  Error enums live in the sub-crates that produce them.
//!
//! # What lives here
//!
//! | Module    | Contents                                   |
//! |-----------|--------------------------------------------|
//! | [`ids`]   | `NodeId`, `VehicleId`                      |
//! | [`coord`] | `Coord`, Euclidean distance                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod coord;
pub mod ids;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use coord::Coord;
pub use ids::{NodeId, VehicleId};
