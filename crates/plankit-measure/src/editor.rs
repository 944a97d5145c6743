//! Interactive vertex editing with angle snap.
//!
//! One vertex of one polygon is dragged per session. While dragging,
//! the candidate position is checked against the interior angle formed
//! with the two neighbor vertices; within the snap tolerance of 180°
//! the candidate is projected onto the line through the neighbors,
//! leaving the vertex in place but functionally collinear. A committed
//! drag records a single-level undo entry.

use tracing::debug;

use plankit_core::error::{GeometryError, Result};
use plankit_core::geometry::EPSILON;
use plankit_core::model::{Point, Polygon};

/// Hit-test radius around a vertex handle, in device pixels.
pub const DEFAULT_HIT_RADIUS_PX: f64 = 8.0;

/// Default snap tolerance in degrees.
pub const DEFAULT_SNAP_TOLERANCE_DEG: f64 = 3.0;

const SNAP_TOLERANCE_MAX_DEG: f64 = 30.0;

/// Transient state of one vertex-drag interaction.
#[derive(Debug, Clone)]
pub struct DragSession {
    pub polygon_id: String,
    pub vertex_index: usize,
    pub original_point: Point,
    pub snap_tolerance_deg: f64,
    /// Latest (possibly snapped) candidate position.
    current: Point,
}

/// Feedback for one pointer move during a drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragFeedback {
    /// Candidate vertex position after snapping.
    pub position: Point,
    /// Interior angle at the candidate vertex, in degrees.
    pub angle_deg: f64,
    /// Whether the candidate was snapped collinear.
    pub snapped: bool,
}

/// Prior vertex position captured by a committed drag.
#[derive(Debug, Clone, PartialEq)]
pub struct UndoEntry {
    pub polygon_id: String,
    pub vertex_index: usize,
    pub point: Point,
}

/// Vertex drag state machine with a one-slot undo.
#[derive(Debug, Clone, Default)]
pub struct VertexEditor {
    session: Option<DragSession>,
    undo_slot: Option<UndoEntry>,
}

/// Interior angle at `b` formed by `a` and `c`, in absolute degrees.
pub fn angle_at(a: Point, b: Point, c: Point) -> f64 {
    let v1 = (a.x - b.x, a.y - b.y);
    let v2 = (c.x - b.x, c.y - b.y);
    let dot = v1.0 * v2.0 + v1.1 * v2.1;
    let det = v1.0 * v2.1 - v1.1 * v2.0;
    det.atan2(dot).to_degrees().abs()
}

/// Projects `p` onto the infinite line through `a` and `c`.
///
/// Returns `p` unchanged when the line is degenerate.
fn project_onto_line(p: Point, a: Point, c: Point) -> Point {
    let acx = c.x - a.x;
    let acy = c.y - a.y;
    let len2 = acx * acx + acy * acy;
    if len2 <= EPSILON {
        return p;
    }
    let t = ((p.x - a.x) * acx + (p.y - a.y) * acy) / len2;
    Point::new(a.x + t * acx, a.y + t * acy)
}

impl VertexEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// The active session, if any.
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// The captured undo entry, if any.
    pub fn undo_entry(&self) -> Option<&UndoEntry> {
        self.undo_slot.as_ref()
    }

    /// Opens a drag session on one vertex of the given polygon.
    ///
    /// `snap_tolerance_deg` must lie in [0, 30].
    pub fn begin(
        &mut self,
        polygon: &Polygon,
        vertex_index: usize,
        snap_tolerance_deg: f64,
    ) -> Result<()> {
        if !(0.0..=SNAP_TOLERANCE_MAX_DEG).contains(&snap_tolerance_deg) {
            return Err(GeometryError::InvalidTolerance {
                degrees: snap_tolerance_deg,
            }
            .into());
        }
        let Some(original) = polygon.points.get(vertex_index) else {
            return Err(GeometryError::VertexOutOfBounds {
                index: vertex_index,
                len: polygon.points.len(),
            }
            .into());
        };
        self.session = Some(DragSession {
            polygon_id: polygon.id.clone(),
            vertex_index,
            original_point: *original,
            snap_tolerance_deg,
            current: *original,
        });
        debug!(polygon = %polygon.id, vertex = vertex_index, "vertex drag started");
        Ok(())
    }

    /// Processes a pointer move with the candidate already mapped to
    /// image space. The polygon itself is not mutated until commit.
    pub fn update(&mut self, polygon: &Polygon, candidate: Point) -> Result<DragFeedback> {
        let session = self.session.as_mut().ok_or_else(|| GeometryError::InvalidState {
            reason: "no drag in progress".to_string(),
        })?;
        if session.polygon_id != polygon.id {
            return Err(GeometryError::UnknownPolygon {
                id: polygon.id.clone(),
            }
            .into());
        }
        let n = polygon.points.len();
        let idx = session.vertex_index;
        let prev = polygon.points[(idx + n - 1) % n];
        let next = polygon.points[(idx + 1) % n];

        let angle = angle_at(prev, candidate, next);
        let snapped = (angle - 180.0).abs() <= session.snap_tolerance_deg;
        let position = if snapped {
            project_onto_line(candidate, prev, next)
        } else {
            candidate
        };
        if snapped {
            debug!(polygon = %polygon.id, vertex = idx, angle, "vertex snapped to straight");
        }
        session.current = position;
        Ok(DragFeedback {
            position,
            angle_deg: angle,
            snapped,
        })
    }

    /// Commits the drag: writes the candidate into the polygon,
    /// recomputes its metrics, and overwrites the undo slot with the
    /// prior point.
    pub fn commit(&mut self, polygon: &mut Polygon) -> Result<Point> {
        let session = self.session.take().ok_or_else(|| GeometryError::InvalidState {
            reason: "no drag in progress".to_string(),
        })?;
        if session.polygon_id != polygon.id {
            self.session = Some(session);
            return Err(GeometryError::UnknownPolygon {
                id: polygon.id.clone(),
            }
            .into());
        }
        polygon.points[session.vertex_index] = session.current;
        polygon.compute_metrics();
        self.undo_slot = Some(UndoEntry {
            polygon_id: session.polygon_id,
            vertex_index: session.vertex_index,
            point: session.original_point,
        });
        Ok(session.current)
    }

    /// Aborts the drag with zero mutation and no undo entry.
    pub fn cancel(&mut self) {
        if self.session.take().is_some() {
            debug!("vertex drag cancelled");
        }
    }

    /// Takes the undo entry if it references the given polygon.
    ///
    /// Returns the restored point after writing it back and
    /// recomputing metrics; `None` when the slot is empty (silent
    /// no-op) or references another polygon.
    pub fn undo(&mut self, polygon: &mut Polygon) -> Option<Point> {
        let entry = self.undo_slot.as_ref()?;
        if entry.polygon_id != polygon.id || entry.vertex_index >= polygon.points.len() {
            return None;
        }
        let entry = self.undo_slot.take()?;
        polygon.points[entry.vertex_index] = entry.point;
        polygon.compute_metrics();
        debug!(polygon = %polygon.id, vertex = entry.vertex_index, "vertex move undone");
        Some(entry.point)
    }
}

/// Finds the topmost vertex handle within the hit radius of a device
/// point. Distance is checked per-axis, matching the square handle
/// glyphs.
pub fn hit_test_vertex(
    polygons: &[Polygon],
    device_point: Point,
    image_to_device: impl Fn(Point) -> Point,
    hit_radius_px: f64,
) -> Option<(String, usize)> {
    for polygon in polygons {
        for (i, p) in polygon.points.iter().enumerate() {
            let d = image_to_device(*p);
            if (device_point.x - d.x).abs() <= hit_radius_px
                && (device_point.y - d.y).abs() <= hit_radius_px
            {
                return Some((polygon.id.clone(), i));
            }
        }
    }
    None
}
