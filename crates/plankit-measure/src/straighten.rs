//! Straighten a traced polygon onto its bounding rectangle.
//!
//! Each vertex is moved to the point on the bounding-box outline at
//! the same perimeter fraction it occupied on the original polygon,
//! walking the rectangle from the top-left corner along the top edge
//! first. Rooms traced with slightly wobbly walls become exact
//! rectangles while keeping their vertex count.

use plankit_core::geometry::{bounding_box, EPSILON};
use plankit_core::model::{Point, Polygon};

/// Computes the straightened vertex list, or `None` when the polygon
/// cannot be straightened (fewer than 4 vertices, or a degenerate
/// bounding box or perimeter).
pub fn rectangle_map(points: &[Point]) -> Option<Vec<Point>> {
    if points.len() < 4 {
        return None;
    }
    let (min_x, min_y, max_x, max_y) = bounding_box(points)?;
    let width = max_x - min_x;
    let height = max_y - min_y;
    if width < EPSILON || height < EPSILON {
        return None;
    }
    let rect_perimeter = 2.0 * (width + height);

    // Cumulative length along the original outline.
    let n = points.len();
    let mut cumulative = vec![0.0f64];
    let mut total = 0.0;
    for i in 0..n {
        total += points[i].distance_to(&points[(i + 1) % n]);
        cumulative.push(total);
    }
    if total < EPSILON {
        return None;
    }

    let mapped = (0..n)
        .map(|i| {
            let dist = (cumulative[i] / total * rect_perimeter) % rect_perimeter;
            if dist <= width {
                Point::new(min_x + dist, min_y)
            } else if dist <= width + height {
                Point::new(max_x, min_y + (dist - width))
            } else if dist <= 2.0 * width + height {
                Point::new(max_x - (dist - (width + height)), max_y)
            } else {
                Point::new(min_x, max_y - (dist - (2.0 * width + height)))
            }
        })
        .collect();
    Some(mapped)
}

/// One-slot undo for the straighten operation, independent of the
/// vertex-move undo.
#[derive(Debug, Clone, Default)]
pub struct Straightener {
    backup: Option<(String, Vec<Point>)>,
}

impl Straightener {
    pub fn new() -> Self {
        Self::default()
    }

    /// Straightens the polygon in place, keeping a backup of the prior
    /// outline. Returns false when the polygon is left unchanged.
    pub fn straighten(&mut self, polygon: &mut Polygon) -> bool {
        let Some(mapped) = rectangle_map(&polygon.points) else {
            return false;
        };
        if mapped == polygon.points {
            return false;
        }
        self.backup = Some((polygon.id.clone(), polygon.points.clone()));
        polygon.points = mapped;
        polygon.compute_metrics();
        true
    }

    /// Restores the outline captured by the last straighten, if it
    /// belongs to the given polygon. Silent no-op otherwise.
    pub fn undo(&mut self, polygon: &mut Polygon) -> bool {
        if !self
            .backup
            .as_ref()
            .is_some_and(|(id, _)| *id == polygon.id)
        {
            return false;
        }
        if let Some((_, points)) = self.backup.take() {
            polygon.points = points;
            polygon.compute_metrics();
            true
        } else {
            false
        }
    }

    /// Whether an undo is available.
    pub fn can_undo(&self) -> bool {
        self.backup.is_some()
    }
}
