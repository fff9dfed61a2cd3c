//! Emergency calls and their priority ordering.

use rustc_hash::FxHashMap;

use ems_core::NodeId;

/// Priority assigned to call types missing from the priority table.
///
/// Lower values are more urgent, so unknown types sort last instead of
/// carrying an undefined priority into the sort.
pub const FALLBACK_PRIORITY: u32 = u32::MAX;

// ── PriorityTable ─────────────────────────────────────────────────────────────

/// Call type → numeric priority lookup (lower = more urgent).
#[derive(Debug, Default, Clone)]
pub struct PriorityTable {
    map: FxHashMap<String, u32>,
}

impl PriorityTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, call_type: impl Into<String>, priority: u32) {
        self.map.insert(call_type.into(), priority);
    }

    /// Priority of `call_type`, or [`FALLBACK_PRIORITY`] when the type is
    /// not in the table.
    pub fn priority_of(&self, call_type: &str) -> u32 {
        self.map.get(call_type).copied().unwrap_or(FALLBACK_PRIORITY)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

// ── Call ──────────────────────────────────────────────────────────────────────

/// One emergency call, immutable after priority assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    /// External identifier from the input data (e.g. `"C7"`).
    pub id: String,
    pub call_type: String,
    /// Where the emergency is.
    pub location: NodeId,
    /// Derived urgency rank; lower is dispatched first.
    pub priority: u32,
    /// Position in the arrival (file) order — the stable tie-break for
    /// equal priorities.
    pub arrival_idx: u32,
}

// ── CallQueue ─────────────────────────────────────────────────────────────────

/// All calls of one simulation run, sorted into processing order.
///
/// Processing order is ascending `(priority, arrival_idx)`: a more urgent
/// call is handled first even when it arrived later, and equal priorities
/// keep their arrival order.
#[derive(Debug, Default)]
pub struct CallQueue {
    calls: Vec<Call>,
}

impl CallQueue {
    /// Build the queue from `(id, call_type, location)` triples in arrival
    /// order, assigning each call its priority from `table`.
    pub fn assemble(
        arrivals: impl IntoIterator<Item = (String, String, NodeId)>,
        table: &PriorityTable,
    ) -> Self {
        let mut calls: Vec<Call> = arrivals
            .into_iter()
            .enumerate()
            .map(|(i, (id, call_type, location))| Call {
                priority: table.priority_of(&call_type),
                arrival_idx: i as u32,
                id,
                call_type,
                location,
            })
            .collect();
        calls.sort_by_key(|c| (c.priority, c.arrival_idx));
        Self { calls }
    }

    /// Calls in processing order.
    pub fn iter(&self) -> impl Iterator<Item = &Call> {
        self.calls.iter()
    }

    pub fn as_slice(&self) -> &[Call] {
        &self.calls
    }

    pub fn len(&self) -> usize {
        self.calls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }
}
