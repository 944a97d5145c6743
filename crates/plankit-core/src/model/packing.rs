use serde::{Deserialize, Serialize};

use super::Point;

/// Classification of a placed panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelKind {
    /// Entirely contained in the target polygon.
    Full,
    /// Clipped against the polygon boundary.
    Cut,
}

/// One panel placed by the packer.
///
/// For a full panel `outline` is the four rectangle corners; for a cut
/// panel it is the clipped intersection shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacedPanel {
    pub kind: PanelKind,
    pub outline: Vec<Point>,
    /// Covered area in pixel units.
    pub area_px: f64,
    /// Grid position as (row, column) from the bounding-box top-left.
    pub row: usize,
    pub col: usize,
}

/// Result of one packing request, recomputed whole every time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackingResult {
    /// Placed panels in row-major placement order.
    pub panels: Vec<PlacedPanel>,
    pub full_panel_count: usize,
    pub cut_panel_count: usize,
    /// Polygon area not covered by any placed panel, in pixel units.
    pub waste_area_px: f64,
}

impl PackingResult {
    /// Total covered area in pixel units.
    pub fn covered_area_px(&self) -> f64 {
        self.panels.iter().map(|p| p.area_px).sum()
    }
}
