//! Rectangle panel packing over a traced polygon.
//!
//! Deterministic greedy grid fill: candidate panels of a fixed pixel
//! size are laid out row-major from the top-left corner of the
//! polygon's bounding box, with no gaps or overlaps. Each candidate is
//! classified by its clipped intersection with the polygon: a full
//! panel covers its whole rectangle, a cut panel keeps only the
//! clipped shape, and a candidate without interior overlap is
//! discarded. Grid origin is fixed at the bounding-box corner; offset
//! and rotation search are out of scope.

use tracing::debug;

use plankit_core::error::{GeometryError, Result};
use plankit_core::geometry::{clip_polygon_to_rect, shoelace_area, EPSILON};
use plankit_core::model::{PackingResult, PanelKind, PlacedPanel, Point, Polygon};

/// Ceiling on candidate grid cells per packing request. A panel size
/// tiny relative to the polygon bounding box fails with
/// `PackingTooLarge` instead of stalling the caller.
pub const MAX_GRID_CELLS: usize = 1_000_000;

/// Relative slack when deciding a clipped cell covers its entire
/// rectangle.
const FULL_COVER_TOLERANCE: f64 = 1e-6;

/// Packs axis-aligned panels of the given pixel size into the polygon.
///
/// Output panels are ordered row-major in placement order, so
/// identical inputs reproduce identical results. Self-intersecting
/// polygons are accepted; classification follows the even-odd
/// interior.
pub fn pack(polygon: &Polygon, panel_width_px: f64, panel_height_px: f64) -> Result<PackingResult> {
    if !panel_width_px.is_finite()
        || !panel_height_px.is_finite()
        || panel_width_px <= 0.0
        || panel_height_px <= 0.0
    {
        return Err(GeometryError::InvalidPanelDimension {
            width: panel_width_px,
            height: panel_height_px,
        }
        .into());
    }
    if polygon.points.len() < 3 || polygon.area_px <= EPSILON {
        return Err(GeometryError::DegeneratePolygon {
            point_count: polygon.points.len(),
        }
        .into());
    }

    let (min_x, min_y, max_x, max_y) = polygon.bounds();
    let cols = ((max_x - min_x) / panel_width_px).ceil().max(1.0) as usize;
    let rows = ((max_y - min_y) / panel_height_px).ceil().max(1.0) as usize;
    let cells = rows.saturating_mul(cols);
    if cells > MAX_GRID_CELLS {
        return Err(GeometryError::PackingTooLarge {
            cells,
            limit: MAX_GRID_CELLS,
        }
        .into());
    }

    let rect_area = panel_width_px * panel_height_px;
    let mut panels: Vec<PlacedPanel> = Vec::new();
    let mut full_count = 0usize;
    let mut cut_count = 0usize;
    let mut covered = 0.0f64;

    for row in 0..rows {
        let ry = min_y + row as f64 * panel_height_px;
        for col in 0..cols {
            let rx = min_x + col as f64 * panel_width_px;
            let clipped =
                clip_polygon_to_rect(&polygon.points, rx, ry, rx + panel_width_px, ry + panel_height_px);
            if clipped.len() < 3 {
                continue;
            }
            let clipped_area = shoelace_area(&clipped);
            if clipped_area <= EPSILON {
                continue;
            }
            if (rect_area - clipped_area).abs() <= rect_area * FULL_COVER_TOLERANCE {
                // Entire rectangle inside the polygon.
                full_count += 1;
                covered += rect_area;
                panels.push(PlacedPanel {
                    kind: PanelKind::Full,
                    outline: vec![
                        Point::new(rx, ry),
                        Point::new(rx + panel_width_px, ry),
                        Point::new(rx + panel_width_px, ry + panel_height_px),
                        Point::new(rx, ry + panel_height_px),
                    ],
                    area_px: rect_area,
                    row,
                    col,
                });
            } else {
                cut_count += 1;
                covered += clipped_area;
                panels.push(PlacedPanel {
                    kind: PanelKind::Cut,
                    outline: clipped,
                    area_px: clipped_area,
                    row,
                    col,
                });
            }
        }
    }

    // Placed panels are clipped to the polygon, so coverage cannot
    // exceed its area beyond floating-point noise.
    let waste_area_px = (polygon.area_px - covered).max(0.0);
    debug!(
        polygon = %polygon.id,
        full = full_count,
        cut = cut_count,
        waste_px = waste_area_px,
        "panel packing complete"
    );

    Ok(PackingResult {
        panels,
        full_panel_count: full_count,
        cut_panel_count: cut_count,
        waste_area_px,
    })
}
