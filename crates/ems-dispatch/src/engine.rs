//! The greedy dispatch engine.
//!
//! # Per-call state machine
//!
//! Every call terminates in exactly one of two states:
//!
//! 1. **Dispatched** — at least one available vehicle had a finite-cost path
//!    to the call location.  The cheapest one (first wins on exact ties, in
//!    ascending `VehicleId` order) is assigned, then immediately released
//!    back to its staging location (instantaneous service).
//! 2. **Unassigned** — the available pool was empty, or no vehicle in it
//!    could reach the call.  The call is still recorded; it is never
//!    silently dropped.
//!
//! A candidate whose best path has infinite cost is never dispatched — the
//! infinity sentinel from the solver is handled explicitly here, not
//! compared as if it were a price.
//!
//! # Sequencing
//!
//! Calls are processed strictly sequentially in queue order; the fleet
//! mutation of call *N* is visible to the availability snapshot of call
//! *N + 1*.  Only the inner per-vehicle solve loop may run in parallel
//! (`parallel` feature); its results are collected positionally so the
//! selection is identical to the sequential build.

use ems_core::{NodeId, VehicleId};
use ems_graph::{PathSolver, RoadGraph, SolvedPath};

use crate::call::{Call, CallQueue};
use crate::fleet::Fleet;
use crate::observer::DispatchObserver;
use crate::DispatchResult;

// ── DispatchRecord ────────────────────────────────────────────────────────────

/// Terminal state of one processed call.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Dispatched {
        vehicle: VehicleId,
        /// The vehicle's external identifier, for log rendering.
        label: String,
        /// Travel time of the chosen route, in minutes.
        cost: f64,
        /// Route from the vehicle's position to the call location.
        path: Vec<NodeId>,
    },
    Unassigned,
}

/// One log record per processed call.
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchRecord {
    pub call_id: String,
    pub call_type: String,
    pub call_location: NodeId,
    pub outcome: Outcome,
    /// Solver latency attributed to this call, in milliseconds: the chosen
    /// vehicle's solve time when dispatched, the summed pool solve time when
    /// unassigned (0.0 for an empty pool).
    pub solver_ms: f64,
}

impl DispatchRecord {
    pub fn is_dispatched(&self) -> bool {
        matches!(self.outcome, Outcome::Dispatched { .. })
    }
}

/// Aggregate metrics for one engine run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub calls_processed: usize,
    pub dispatched: usize,
    pub unassigned: usize,
    /// Sum of `solver_ms` over dispatched calls.
    pub total_solver_ms: f64,
    /// Mean `solver_ms` over dispatched calls; 0.0 when none were dispatched.
    pub mean_solver_ms: f64,
}

// ── DispatchEngine ────────────────────────────────────────────────────────────

/// Greedy nearest-vehicle dispatcher over an immutable [`RoadGraph`].
///
/// Owns the [`Fleet`] for the duration of a run; the graph is shared
/// read-only and may serve any number of concurrent solver queries.
pub struct DispatchEngine<'g, S: PathSolver> {
    graph: &'g RoadGraph,
    solver: S,
    fleet: Fleet,
}

impl<'g, S: PathSolver> DispatchEngine<'g, S> {
    pub fn new(graph: &'g RoadGraph, solver: S, fleet: Fleet) -> Self {
        Self { graph, solver, fleet }
    }

    /// Read-only view of the fleet (e.g. to inspect post-run vehicle state).
    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// Consume the engine and return the fleet.
    pub fn into_fleet(self) -> Fleet {
        self.fleet
    }

    /// Process every call in queue order, emitting one record per call
    /// through `observer`, then the run summary.
    pub fn run<O: DispatchObserver>(
        &mut self,
        queue: &CallQueue,
        observer: &mut O,
    ) -> DispatchResult<RunSummary> {
        let mut dispatched = 0usize;
        let mut unassigned = 0usize;
        let mut total_solver_ms = 0.0f64;

        for call in queue.iter() {
            let record = self.process_call(call)?;
            if record.is_dispatched() {
                dispatched += 1;
                total_solver_ms += record.solver_ms;
            } else {
                unassigned += 1;
            }
            observer.on_call_resolved(&record);
        }

        let summary = RunSummary {
            calls_processed: queue.len(),
            dispatched,
            unassigned,
            total_solver_ms,
            mean_solver_ms: if dispatched > 0 {
                total_solver_ms / dispatched as f64
            } else {
                0.0
            },
        };
        observer.on_run_end(&summary);
        Ok(summary)
    }

    // ── Per-call processing ───────────────────────────────────────────────

    fn process_call(&mut self, call: &Call) -> DispatchResult<DispatchRecord> {
        let pool = self.fleet.available_pool();
        let solved = self.solve_pool(&pool, call.location);

        // Lowest finite cost wins; the first candidate in pool order wins
        // exact ties (strict `<` never replaces an equal-cost earlier one).
        let mut best: Option<usize> = None;
        for (i, s) in solved.iter().enumerate() {
            if !s.reachable() {
                continue;
            }
            if best.is_none_or(|b| s.cost < solved[b].cost) {
                best = Some(i);
            }
        }

        let record = match best {
            Some(i) => {
                let vehicle = pool[i];
                let label = self.fleet.get(vehicle).label.clone();
                self.fleet.assign(vehicle)?;
                // Instantaneous service: the vehicle is back at staging and
                // available again before the next call is processed.
                self.fleet.release(vehicle);

                let SolvedPath { cost, path, elapsed } = solved[i].clone();
                DispatchRecord {
                    call_id: call.id.clone(),
                    call_type: call.call_type.clone(),
                    call_location: call.location,
                    outcome: Outcome::Dispatched { vehicle, label, cost, path },
                    solver_ms: elapsed.as_secs_f64() * 1_000.0,
                }
            }
            None => DispatchRecord {
                call_id: call.id.clone(),
                call_type: call.call_type.clone(),
                call_location: call.location,
                outcome: Outcome::Unassigned,
                solver_ms: solved.iter().map(SolvedPath::elapsed_ms).sum(),
            },
        };
        Ok(record)
    }

    /// Solve every pool vehicle's path to `goal`, positionally aligned with
    /// `pool`.
    fn solve_pool(&self, pool: &[VehicleId], goal: NodeId) -> Vec<SolvedPath> {
        #[cfg(not(feature = "parallel"))]
        {
            pool.iter()
                .map(|&id| self.solver.solve(self.graph, self.fleet.get(id).current, goal))
                .collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            // Snapshot the start nodes first so the parallel closure only
            // reads immutable data.
            let starts: Vec<NodeId> =
                pool.iter().map(|&id| self.fleet.get(id).current).collect();
            starts
                .par_iter()
                .map(|&from| self.solver.solve(self.graph, from, goal))
                .collect()
        }
    }
}
