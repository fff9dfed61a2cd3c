//! Planar coordinate type.
//!
//! The road data ships optional `X`/`Y` columns in an unspecified planar unit
//! system.  Coordinates are used only by the heuristic-guided solver, which
//! degrades to uniform-cost search when they are absent, so the unit never
//! needs to be resolved against the travel-time weights.

/// A 2-D planar coordinate.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: f64,
    pub y: f64,
}

impl Coord {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Straight-line (Euclidean) distance to `other`.
    #[inline]
    pub fn distance_to(self, other: Coord) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}
