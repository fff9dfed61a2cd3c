//! Append-only call log writer.
//!
//! # Line format
//!
//! One line per processed call, fields as `key=value` pairs joined by commas
//! in a fixed order, numeric fields with six fixed decimals:
//!
//! ```text
//! CallID=C1,CallType=Cardiac,CallLocation=N3,SelectedAmbulance=A2,Route=N2->N3,TimeToLocation=4.000000,RouteExecutionTime(ms)=0.031200
//! ```
//!
//! Unassigned calls keep the schema with placeholder fields:
//!
//! ```text
//! CallID=C9,CallType=Cardiac,CallLocation=Island,SelectedAmbulance=UNASSIGNED,Route=-,TimeToLocation=-,RouteExecutionTime(ms)=0.018400
//! ```
//!
//! The trailing summary line carries the mean solver latency across all
//! dispatched calls:
//!
//! ```text
//! CallID=SUMMARY,CallType=-,CallLocation=-,SelectedAmbulance=-,Route=-,TimeToLocation=-,RouteExecutionTime(ms)=0.024800
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use ems_dispatch::{DispatchRecord, Outcome};
use ems_graph::RoadGraph;

use crate::{OutputError, OutputResult};

/// Writes the append-only dispatch log to any `Write` sink.
pub struct CallLogWriter<W: Write> {
    out: BufWriter<W>,
    finished: bool,
}

impl CallLogWriter<File> {
    /// Create (truncating) the log file at `path`.
    pub fn create(path: &Path) -> OutputResult<Self> {
        Ok(Self::new(File::create(path)?))
    }
}

impl<W: Write> CallLogWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            out: BufWriter::new(sink),
            finished: false,
        }
    }

    /// Append one record line.  `graph` supplies location names for the
    /// `CallLocation` and `Route` fields.
    pub fn write_record(
        &mut self,
        graph: &RoadGraph,
        record: &DispatchRecord,
    ) -> OutputResult<()> {
        let location = graph.node_name(record.call_location);
        match &record.outcome {
            Outcome::Dispatched { label, cost, path, .. } => {
                writeln!(
                    self.out,
                    "CallID={},CallType={},CallLocation={},SelectedAmbulance={},\
                     Route={},TimeToLocation={:.6},RouteExecutionTime(ms)={:.6}",
                    record.call_id,
                    record.call_type,
                    location,
                    label,
                    graph.render_path(path),
                    cost,
                    record.solver_ms,
                )?;
            }
            Outcome::Unassigned => {
                writeln!(
                    self.out,
                    "CallID={},CallType={},CallLocation={},SelectedAmbulance=UNASSIGNED,\
                     Route=-,TimeToLocation=-,RouteExecutionTime(ms)={:.6}",
                    record.call_id, record.call_type, location, record.solver_ms,
                )?;
            }
        }
        Ok(())
    }

    /// Append the trailing summary line.
    pub fn write_summary(&mut self, mean_solver_ms: f64) -> OutputResult<()> {
        writeln!(
            self.out,
            "CallID=SUMMARY,CallType=-,CallLocation=-,SelectedAmbulance=-,\
             Route=-,TimeToLocation=-,RouteExecutionTime(ms)={:.6}",
            mean_solver_ms,
        )?;
        Ok(())
    }

    /// Flush the underlying sink.
    ///
    /// Idempotent — safe to call more than once.
    pub fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.out.flush()?;
        Ok(())
    }

    /// Unwrap the inner sink (e.g. to inspect an in-memory log in tests).
    pub fn into_inner(self) -> OutputResult<W> {
        self.out
            .into_inner()
            .map_err(|e| OutputError::Io(e.into_error()))
    }
}
