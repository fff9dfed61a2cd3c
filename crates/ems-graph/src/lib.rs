//! `ems-graph` — road network graph and shortest-path solvers.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`graph`]  | `RoadGraph` (CSR adjacency), `RoadGraphBuilder`, `RoadSegment` |
//! | [`solver`] | `PathSolver` trait, `SolvedPath`, `UniformCostSolver`, `AStarSolver` |
//! | [`loader`] | `load_segments_csv` / `load_segments_reader`              |
//! | [`error`]  | `GraphError`, `GraphResult<T>`                            |

pub mod error;
pub mod graph;
pub mod loader;
pub mod solver;


pub use error::{GraphError, GraphResult};
pub use graph::{RoadGraph, RoadGraphBuilder, RoadSegment, DEFAULT_SPEED_LIMIT};
pub use loader::{load_segments_csv, load_segments_reader};
pub use solver::{AStarSolver, PathSolver, SolvedPath, UniformCostSolver};
