//! CSV loaders for vehicles, calls, and the call-type priority table.
//!
//! # CSV formats
//!
//! Headers match the shipped data files:
//!
//! ```csv
//! Ambulance Number,Staging Location
//! A1,Station_North
//! ```
//!
//! ```csv
//! Call ID,Call Type,Location
//! C1,Cardiac,Oak_St
//! ```
//!
//! ```csv
//! Call Type,Priority
//! Cardiac,1
//! ```
//!
//! Vehicle and call locations are resolved through the
//! [`RoadGraphBuilder`]'s interner *before* the graph is built.  A location
//! that never appears in any road segment therefore becomes an isolated
//! node, and the solvers report it unreachable — the run degrades instead of
//! failing to load.
//!
//! Call file order is preserved as the arrival order, which is the stable
//! tie-break between equal-priority calls.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use ems_graph::RoadGraphBuilder;

use crate::call::{CallQueue, PriorityTable};
use crate::fleet::Fleet;
use crate::{DispatchError, DispatchResult};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct VehicleRecord {
    #[serde(rename = "Ambulance Number")]
    id: String,
    #[serde(rename = "Staging Location")]
    staging: String,
}

#[derive(Deserialize)]
struct CallRecord {
    #[serde(rename = "Call ID")]
    id: String,
    #[serde(rename = "Call Type")]
    call_type: String,
    #[serde(rename = "Location")]
    location: String,
}

#[derive(Deserialize)]
struct PriorityRecord {
    #[serde(rename = "Call Type")]
    call_type: String,
    #[serde(rename = "Priority")]
    priority: u32,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load the fleet from a CSV file.  Every vehicle starts available at its
/// staging location.
pub fn load_fleet_csv(path: &Path, builder: &mut RoadGraphBuilder) -> DispatchResult<Fleet> {
    let file = std::fs::File::open(path).map_err(DispatchError::Io)?;
    load_fleet_reader(file, builder)
}

/// Like [`load_fleet_csv`] but accepts any `Read` source.
pub fn load_fleet_reader<R: Read>(
    reader: R,
    builder: &mut RoadGraphBuilder,
) -> DispatchResult<Fleet> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut fleet = Fleet::new();

    for result in csv_reader.deserialize::<VehicleRecord>() {
        let row = result.map_err(|e| DispatchError::Parse(e.to_string()))?;
        let staging = builder.node(&row.staging);
        fleet.register(row.id, staging);
    }

    Ok(fleet)
}

/// Load calls from a CSV file and assemble them into processing order using
/// `table` for priorities.
pub fn load_calls_csv(
    path: &Path,
    builder: &mut RoadGraphBuilder,
    table: &PriorityTable,
) -> DispatchResult<CallQueue> {
    let file = std::fs::File::open(path).map_err(DispatchError::Io)?;
    load_calls_reader(file, builder, table)
}

/// Like [`load_calls_csv`] but accepts any `Read` source.
pub fn load_calls_reader<R: Read>(
    reader: R,
    builder: &mut RoadGraphBuilder,
    table: &PriorityTable,
) -> DispatchResult<CallQueue> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut arrivals = Vec::new();

    for result in csv_reader.deserialize::<CallRecord>() {
        let row = result.map_err(|e| DispatchError::Parse(e.to_string()))?;
        let location = builder.node(&row.location);
        arrivals.push((row.id, row.call_type, location));
    }

    Ok(CallQueue::assemble(arrivals, table))
}

/// Load the call-type priority table from a CSV file.
pub fn load_priorities_csv(path: &Path) -> DispatchResult<PriorityTable> {
    let file = std::fs::File::open(path).map_err(DispatchError::Io)?;
    load_priorities_reader(file)
}

/// Like [`load_priorities_csv`] but accepts any `Read` source.
pub fn load_priorities_reader<R: Read>(reader: R) -> DispatchResult<PriorityTable> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut table = PriorityTable::new();

    for result in csv_reader.deserialize::<PriorityRecord>() {
        let row = result.map_err(|e| DispatchError::Parse(e.to_string()))?;
        table.insert(row.call_type, row.priority);
    }

    Ok(table)
}
