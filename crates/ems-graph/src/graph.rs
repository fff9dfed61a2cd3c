//! Road network representation and builder.
//!
//! # Data layout
//!
//! The graph uses **Compressed Sparse Row (CSR)** format for outgoing edges.
//! Given a `NodeId n`, its neighbors occupy the slice:
//!
//! ```text
//! edge_to[ node_out_start[n] .. node_out_start[n+1] ]
//! ```
//!
//! `edge_to` and `edge_weight` are sorted by source node; within one source
//! node the segment insertion order is preserved (the sort in `build()` is
//! stable), so neighbor enumeration order is deterministic across runs.
//!
//! # Node interning
//!
//! Location keys are free-form strings in the input data ("Hospital_North",
//! "N3", …).  The builder interns each distinct name into a sequential
//! [`NodeId`] on first sight; the graph keeps the name table for rendering
//! routes and a reverse map for lookups.
//!
//! # Undirected edges
//!
//! A segment and its reverse are the same edge.  The builder keys every
//! segment by its unordered node pair and keeps only the first occurrence;
//! later duplicates are silently dropped, whatever their weight.

use rustc_hash::{FxHashMap, FxHashSet};

use ems_core::{Coord, NodeId};

/// Speed limit (distance units per hour) substituted when a road segment
/// omits the `Speed Limit` column.
pub const DEFAULT_SPEED_LIMIT: f64 = 40.0;

// ── RoadSegment ───────────────────────────────────────────────────────────────

/// One raw road-segment record, as loaded from the input table.
///
/// `start`/`end` are an unordered pair: the segment is bidirectional and the
/// reversed record denotes the same edge.
#[derive(Debug, Clone, PartialEq)]
pub struct RoadSegment {
    pub start: String,
    pub end: String,
    /// Physical length, in the same distance unit as the speed limit.
    pub distance: f64,
    /// Additive traffic delay in minutes.
    pub traffic_delay: f64,
    /// `None` → [`DEFAULT_SPEED_LIMIT`].
    pub speed_limit: Option<f64>,
    /// Planar coordinates of each endpoint, when the data provides them.
    /// Only the heuristic solver consumes these.
    pub start_coords: Option<Coord>,
    pub end_coords: Option<Coord>,
}

impl RoadSegment {
    /// Traffic-adjusted travel time in minutes: `(distance / speed) * 60 + delay`.
    ///
    /// No validation is applied: a zero speed limit produces an infinite
    /// weight under IEEE-754 division, which the solvers already treat as
    /// an unusable edge.
    pub fn travel_time_mins(&self) -> f64 {
        let speed = self.speed_limit.unwrap_or(DEFAULT_SPEED_LIMIT);
        (self.distance / speed) * 60.0 + self.traffic_delay
    }
}

// ── RoadGraph ─────────────────────────────────────────────────────────────────

/// Undirected weighted road graph in CSR format, immutable after `build()`.
///
/// Invariants (upheld by [`RoadGraphBuilder`]):
/// - symmetric: every edge is present in both directions with equal weight;
/// - duplicate-free: one weight per unordered node pair, first record wins.
///
/// CSR fields are `pub` for direct indexed access on the solver hot path.
/// Do not construct directly; use [`RoadGraphBuilder`].
pub struct RoadGraph {
    /// Location name of each node.  Indexed by `NodeId`.
    node_name: Vec<String>,

    /// Planar position of each node; `None` when the input data never
    /// supplied coordinates for it.  Indexed by `NodeId`.
    pub node_pos: Vec<Option<Coord>>,

    /// CSR row pointer.  Neighbors of node `n` are at positions
    /// `node_out_start[n] .. node_out_start[n+1]`.  Length = node count + 1.
    pub node_out_start: Vec<u32>,

    /// Neighbor node of each directed adjacency entry.
    pub edge_to: Vec<NodeId>,

    /// Travel time in minutes of each directed adjacency entry.
    pub edge_weight: Vec<f64>,

    /// Reverse lookup: location name → `NodeId`.
    name_to_id: FxHashMap<String, NodeId>,
}

impl RoadGraph {
    /// Construct an empty graph with no nodes or edges.
    ///
    /// Any routing request against an empty graph reports the goal
    /// unreachable.
    pub fn empty() -> Self {
        RoadGraphBuilder::new().build()
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.node_name.len()
    }

    /// Number of *directed* adjacency entries (twice the segment count).
    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_name.is_empty()
    }

    // ── Node lookups ──────────────────────────────────────────────────────

    /// Location name of `node`.
    #[inline]
    pub fn node_name(&self, node: NodeId) -> &str {
        &self.node_name[node.index()]
    }

    /// Resolve a location name to its `NodeId`, if it was ever interned.
    pub fn node_by_name(&self, name: &str) -> Option<NodeId> {
        self.name_to_id.get(name).copied()
    }

    /// Planar coordinates of `node`, when the input data supplied them.
    #[inline]
    pub fn node_coords(&self, node: NodeId) -> Option<Coord> {
        self.node_pos[node.index()]
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Iterator over `(neighbor, weight)` pairs of all edges leaving `node`,
    /// in segment insertion order.
    ///
    /// This is a contiguous index range — no heap allocation.
    #[inline]
    pub fn neighbors(&self, node: NodeId) -> impl Iterator<Item = (NodeId, f64)> + '_ {
        let start = self.node_out_start[node.index()] as usize;
        let end   = self.node_out_start[node.index() + 1] as usize;
        (start..end).map(|i| (self.edge_to[i], self.edge_weight[i]))
    }

    /// Degree of `node` (number of adjacency entries leaving it).
    #[inline]
    pub fn degree(&self, node: NodeId) -> usize {
        let start = self.node_out_start[node.index()] as usize;
        let end   = self.node_out_start[node.index() + 1] as usize;
        end - start
    }

    /// Render a node path as `A->B->C` using location names.
    pub fn render_path(&self, path: &[NodeId]) -> String {
        path.iter()
            .map(|&n| self.node_name(n))
            .collect::<Vec<_>>()
            .join("->")
    }
}

// ── RoadGraphBuilder ──────────────────────────────────────────────────────────

/// Construct a [`RoadGraph`] incrementally, then call [`build`](Self::build).
///
/// The builder interns location names, deduplicates unordered segment pairs,
/// and records endpoint coordinates the first time each name is seen.
/// `build()` sorts the adjacency entries by source node (stable, so insertion
/// order within a node survives) and constructs the CSR arrays.
///
/// # Example
///
/// ```
/// use ems_graph::{RoadGraphBuilder, RoadSegment};
///
/// let mut b = RoadGraphBuilder::new();
/// b.add_segment(&RoadSegment {
///     start: "N1".into(),
///     end: "N2".into(),
///     distance: 20.0,
///     traffic_delay: 3.0,
///     speed_limit: None, // default 40
///     start_coords: None,
///     end_coords: None,
/// });
/// let graph = b.build();
/// assert_eq!(graph.node_count(), 2);
/// assert_eq!(graph.edge_count(), 2); // bidirectional
/// ```
pub struct RoadGraphBuilder {
    names:      Vec<String>,
    coords:     Vec<Option<Coord>>,
    name_to_id: FxHashMap<String, NodeId>,
    raw_edges:  Vec<RawEdge>,
    seen_pairs: FxHashSet<(NodeId, NodeId)>,
}

struct RawEdge {
    from:   NodeId,
    to:     NodeId,
    weight: f64,
}

impl RoadGraphBuilder {
    pub fn new() -> Self {
        Self {
            names:      Vec::new(),
            coords:     Vec::new(),
            name_to_id: FxHashMap::default(),
            raw_edges:  Vec::new(),
            seen_pairs: FxHashSet::default(),
        }
    }

    /// Intern `name`, creating a coordinate-less node on first sight, and
    /// return its `NodeId` (sequential from 0 in first-appearance order).
    ///
    /// Vehicle and call loaders use this to resolve staging and call
    /// locations; a location that never appears in a road segment becomes an
    /// isolated node, which the solvers report as unreachable.
    pub fn node(&mut self, name: &str) -> NodeId {
        if let Some(&id) = self.name_to_id.get(name) {
            return id;
        }
        let id = NodeId(self.names.len() as u32);
        self.names.push(name.to_owned());
        self.coords.push(None);
        self.name_to_id.insert(name.to_owned(), id);
        id
    }

    /// Record `coord` for `node` unless an earlier segment already did.
    /// The first coordinates seen for a location win.
    pub fn set_coords(&mut self, node: NodeId, coord: Coord) {
        let slot = &mut self.coords[node.index()];
        if slot.is_none() {
            *slot = Some(coord);
        }
    }

    /// Add an undirected road segment.
    ///
    /// Returns `false` (and changes nothing beyond interning) if a segment
    /// for the same unordered node pair was added before — duplicates are
    /// silently idempotent, whatever weight they carry.  Otherwise inserts
    /// both directed adjacency entries with the segment's
    /// [`travel_time_mins`](RoadSegment::travel_time_mins) and returns `true`.
    pub fn add_segment(&mut self, segment: &RoadSegment) -> bool {
        let from = self.node(&segment.start);
        let to   = self.node(&segment.end);

        let pair = if from <= to { (from, to) } else { (to, from) };
        if !self.seen_pairs.insert(pair) {
            return false;
        }

        let weight = segment.travel_time_mins();
        self.raw_edges.push(RawEdge { from, to, weight });
        self.raw_edges.push(RawEdge { from: to, to: from, weight });

        if let Some(c) = segment.start_coords {
            self.set_coords(from, c);
        }
        if let Some(c) = segment.end_coords {
            self.set_coords(to, c);
        }
        true
    }

    pub fn node_count(&self) -> usize {
        self.names.len()
    }

    /// Number of directed adjacency entries queued so far.
    pub fn edge_count(&self) -> usize {
        self.raw_edges.len()
    }

    /// Consume the builder and produce a [`RoadGraph`].
    ///
    /// Time complexity: O(E log E) for the edge sort, where E = entries.
    pub fn build(self) -> RoadGraph {
        let node_count = self.names.len();

        // Stable sort by source node keeps insertion order within a node,
        // which fixes the neighbor enumeration order the solvers see.
        let mut raw = self.raw_edges;
        raw.sort_by_key(|e| e.from.0);

        let edge_to:     Vec<NodeId> = raw.iter().map(|e| e.to).collect();
        let edge_weight: Vec<f64>    = raw.iter().map(|e| e.weight).collect();

        // Build CSR row pointer (node_out_start).
        let mut node_out_start = vec![0u32; node_count + 1];
        for e in &raw {
            node_out_start[e.from.index() + 1] += 1;
        }
        for i in 1..=node_count {
            node_out_start[i] += node_out_start[i - 1];
        }
        debug_assert_eq!(node_out_start[node_count] as usize, edge_to.len());

        RoadGraph {
            node_name: self.names,
            node_pos: self.coords,
            node_out_start,
            edge_to,
            edge_weight,
            name_to_id: self.name_to_id,
        }
    }
}

impl Default for RoadGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
