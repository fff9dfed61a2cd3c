//! Shortest-path solver trait and its two strategies.
//!
//! # Pluggability
//!
//! The dispatch engine calls routing via the [`PathSolver`] trait, so either
//! strategy (or a custom one) can be swapped in without touching the engine.
//! Both built-in strategies run the same best-first search, parameterized by
//! a heuristic:
//!
//! - [`UniformCostSolver`] — `h = 0` everywhere (Dijkstra).
//! - [`AStarSolver`] — `h` = straight-line distance between node and goal
//!   coordinates; `h = 0` whenever either endpoint lacks coordinates, so it
//!   degrades to uniform-cost behavior on coordinate-free data.
//!
//! # Determinism
//!
//! Queue entries carry an explicit insertion sequence number as the secondary
//! sort key, so equal-`f` ties always pop in discovery order and repeated
//! runs produce identical paths.
//!
//! # Latency
//!
//! Every `solve` call measures its own wall-clock time end to end, whatever
//! the outcome — an unreachable goal still reports the time actually spent
//! searching.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::time::{Duration, Instant};

use ems_core::NodeId;

use crate::graph::RoadGraph;

// ── SolvedPath ────────────────────────────────────────────────────────────────

/// The result of one shortest-path query.
///
/// An unreachable goal is *not* an error: `cost` is `f64::INFINITY` and
/// `path` is empty.  Callers must check [`reachable`](Self::reachable) before
/// treating the result as a usable route.
#[derive(Debug, Clone, PartialEq)]
pub struct SolvedPath {
    /// Accumulated travel time in minutes; `f64::INFINITY` when no path
    /// exists.
    pub cost: f64,
    /// Nodes from source to goal inclusive; `[source]` when source == goal;
    /// empty when the goal is unreachable.
    pub path: Vec<NodeId>,
    /// Wall-clock time spent inside the solver for this query.
    pub elapsed: Duration,
}

impl SolvedPath {
    /// `true` when a path was found (finite cost).
    #[inline]
    pub fn reachable(&self) -> bool {
        self.cost.is_finite()
    }

    /// Solver latency in fractional milliseconds.
    #[inline]
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1_000.0
    }

    fn unreachable(started: Instant) -> Self {
        Self {
            cost: f64::INFINITY,
            path: Vec::new(),
            elapsed: started.elapsed(),
        }
    }
}

// ── PathSolver trait ──────────────────────────────────────────────────────────

/// Pluggable shortest-path engine.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so one solver instance can serve
/// concurrent queries against the shared read-only graph (the dispatch
/// engine's optional parallel inner loop relies on this).  No solver-owned
/// mutable state may survive a call.
pub trait PathSolver: Send + Sync {
    /// Compute the minimum-cost path from `source` to `goal`.
    fn solve(&self, graph: &RoadGraph, source: NodeId, goal: NodeId) -> SolvedPath;
}

/// Uniform-cost (Dijkstra) search: explores strictly by accumulated cost.
/// Guarantees the lowest-cost path under non-negative weights.
pub struct UniformCostSolver;

impl PathSolver for UniformCostSolver {
    fn solve(&self, graph: &RoadGraph, source: NodeId, goal: NodeId) -> SolvedPath {
        best_first_search(graph, source, goal, |_| 0.0)
    }
}

/// Heuristic-guided (A*) search ordered by `f = g + h`, with `h` the
/// Euclidean distance between node and goal coordinates.
///
/// The input data does not pin the coordinate unit to the travel-time unit,
/// so `h` is not guaranteed admissible for arbitrary speed limits; with the
/// closed-set search this can cost exactness on adversarial data.  On
/// coordinate-free nodes `h` falls back to 0 and the search behaves exactly
/// like [`UniformCostSolver`].
pub struct AStarSolver;

impl PathSolver for AStarSolver {
    fn solve(&self, graph: &RoadGraph, source: NodeId, goal: NodeId) -> SolvedPath {
        let goal_pos = if goal.index() < graph.node_count() {
            graph.node_coords(goal)
        } else {
            None
        };
        best_first_search(graph, source, goal, |node| {
            match (graph.node_coords(node), goal_pos) {
                (Some(a), Some(b)) => a.distance_to(b),
                _ => 0.0,
            }
        })
    }
}

// ── Search internals ──────────────────────────────────────────────────────────

/// Priority-queue entry.  Ordered by `f`, then by insertion sequence so ties
/// resolve in discovery order.
struct QueueEntry {
    f:    f64,
    g:    f64,
    seq:  u64,
    node: NodeId,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f
            .total_cmp(&other.f)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Best-first search shared by both strategies; `h` is the heuristic.
///
/// Closed-set semantics: a node popped a second time is skipped.  The goal
/// test happens on pop, so `source == goal` terminates immediately with the
/// trivial single-node path at cost 0.
fn best_first_search(
    graph:  &RoadGraph,
    source: NodeId,
    goal:   NodeId,
    h:      impl Fn(NodeId) -> f64,
) -> SolvedPath {
    let started = Instant::now();

    let n = graph.node_count();
    if source.index() >= n || goal.index() >= n {
        return SolvedPath::unreachable(started);
    }

    // best_g[v] = best known accumulated cost to reach v.
    let mut best_g  = vec![f64::INFINITY; n];
    // prev[v] = node that reached v; NodeId::INVALID for unreached nodes.
    let mut prev    = vec![NodeId::INVALID; n];
    let mut visited = vec![false; n];

    best_g[source.index()] = 0.0;

    // Reverse makes BinaryHeap (max) behave as a min-heap on (f, seq).
    let mut heap: BinaryHeap<Reverse<QueueEntry>> = BinaryHeap::new();
    let mut seq = 0u64;
    heap.push(Reverse(QueueEntry { f: h(source), g: 0.0, seq, node: source }));

    while let Some(Reverse(entry)) = heap.pop() {
        let node = entry.node;
        if visited[node.index()] {
            continue;
        }
        visited[node.index()] = true;

        if node == goal {
            return SolvedPath {
                cost: entry.g,
                path: reconstruct(&prev, goal),
                elapsed: started.elapsed(),
            };
        }

        for (neighbor, weight) in graph.neighbors(node) {
            if visited[neighbor.index()] {
                continue;
            }
            let g = entry.g + weight;
            if g < best_g[neighbor.index()] {
                best_g[neighbor.index()] = g;
                prev[neighbor.index()] = node;
                seq += 1;
                heap.push(Reverse(QueueEntry {
                    f: g + h(neighbor),
                    g,
                    seq,
                    node: neighbor,
                }));
            }
        }
    }

    SolvedPath::unreachable(started)
}

fn reconstruct(prev: &[NodeId], goal: NodeId) -> Vec<NodeId> {
    let mut path = vec![goal];
    let mut cur = goal;
    while prev[cur.index()] != NodeId::INVALID {
        cur = prev[cur.index()];
        path.push(cur);
    }
    path.reverse();
    path
}
