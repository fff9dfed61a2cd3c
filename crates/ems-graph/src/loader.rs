//! CSV road-segment loader.
//!
//! # CSV format
//!
//! One row per road segment.  Headers match the published network data files;
//! the `Speed Limit` and coordinate columns are optional (individually blank
//! cells or entirely absent columns both work).
//!
//! ```csv
//! Start,End,Distance,Traffic Delay,Speed Limit,Start_X,Start_Y,End_X,End_Y
//! N1,N2,20,3,40,0,0,10,0
//! N2,N3,8,1,,10,0,10,6
//! ```
//!
//! Rows feed into a [`RoadGraphBuilder`], which interns locations, drops
//! duplicated unordered pairs, and records the first coordinates seen per
//! endpoint.  A coordinate is only recorded when both `X` and `Y` of an
//! endpoint are present.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use ems_core::Coord;

use crate::graph::{RoadGraphBuilder, RoadSegment};
use crate::{GraphError, GraphResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct SegmentRecord {
    #[serde(rename = "Start")]
    start: String,
    #[serde(rename = "End")]
    end: String,
    #[serde(rename = "Distance")]
    distance: f64,
    #[serde(rename = "Traffic Delay")]
    traffic_delay: f64,
    #[serde(rename = "Speed Limit", default)]
    speed_limit: Option<f64>,
    #[serde(rename = "Start_X", default)]
    start_x: Option<f64>,
    #[serde(rename = "Start_Y", default)]
    start_y: Option<f64>,
    #[serde(rename = "End_X", default)]
    end_x: Option<f64>,
    #[serde(rename = "End_Y", default)]
    end_y: Option<f64>,
}

impl SegmentRecord {
    fn into_segment(self) -> RoadSegment {
        RoadSegment {
            start:         self.start,
            end:           self.end,
            distance:      self.distance,
            traffic_delay: self.traffic_delay,
            speed_limit:   self.speed_limit,
            start_coords:  coord_from(self.start_x, self.start_y),
            end_coords:    coord_from(self.end_x, self.end_y),
        }
    }
}

fn coord_from(x: Option<f64>, y: Option<f64>) -> Option<Coord> {
    match (x, y) {
        (Some(x), Some(y)) => Some(Coord::new(x, y)),
        _ => None,
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load road segments from a CSV file into `builder`.
///
/// Returns the number of segments actually inserted (duplicated unordered
/// pairs are skipped and not counted).
pub fn load_segments_csv(
    path: &Path,
    builder: &mut RoadGraphBuilder,
) -> GraphResult<usize> {
    let file = std::fs::File::open(path).map_err(GraphError::Io)?;
    load_segments_reader(file, builder)
}

/// Like [`load_segments_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded data.
pub fn load_segments_reader<R: Read>(
    reader: R,
    builder: &mut RoadGraphBuilder,
) -> GraphResult<usize> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut inserted = 0;

    for result in csv_reader.deserialize::<SegmentRecord>() {
        let row = result.map_err(|e| GraphError::Parse(e.to_string()))?;
        if builder.add_segment(&row.into_segment()) {
            inserted += 1;
        }
    }

    Ok(inserted)
}
