//! Data model for the measurement document

use serde::{Deserialize, Serialize};

mod packing;
mod polygon;
mod scale;

pub use packing::{PackingResult, PanelKind, PlacedPanel};
pub use polygon::{ColorTag, Polygon};
pub use scale::{PanelSpec, ScaleArtifact};

/// A point in image-pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}
