//! Document state and the engine facade.
//!
//! Owns the polygon collection, the selection slot, and the
//! interactive sub-machines (calibration, vertex editing,
//! straightening). All state is explicit and passed by reference; the
//! engine holds no globals and no event loop — UI collaborators invoke
//! these operations synchronously.

use serde::{Deserialize, Serialize};
use tracing::debug;

use plankit_core::error::{GeometryError, Result};
use plankit_core::model::{
    ColorTag, PackingResult, PanelSpec, Point, Polygon, ScaleArtifact,
};
use plankit_core::units::Unit;

use crate::calibration::{CalibrationState, Calibrator};
use crate::editor::{self, DragFeedback, VertexEditor, DEFAULT_HIT_RADIUS_PX};
use crate::metrics::{self, PixelMetrics, RealMetrics};
use crate::packer;
use crate::straighten::Straightener;
use crate::viewport::{self, Viewport};

/// Persistable snapshot of the document: the polygon collection and
/// the confirmed scale artifact, keyed to the active document by an
/// external store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentSnapshot {
    pub polygons: Vec<Polygon>,
    pub scale_artifact: Option<ScaleArtifact>,
}

/// The measurement document and its interactive state.
#[derive(Debug, Clone, Default)]
pub struct PlanDocument {
    polygons: Vec<Polygon>,
    created_count: usize,
    selected_id: Option<String>,
    calibrator: Calibrator,
    editor: VertexEditor,
    straightener: Straightener,
    pub viewport: Viewport,
}

impl PlanDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores polygons and scale from a persisted snapshot,
    /// replacing all current state.
    pub fn from_snapshot(snapshot: DocumentSnapshot) -> Self {
        let mut doc = Self::new();
        doc.created_count = snapshot.polygons.len();
        doc.polygons = snapshot.polygons;
        if let Some(artifact) = snapshot.scale_artifact {
            doc.calibrator.restore_artifact(artifact);
        }
        doc
    }

    /// Serializable snapshot of the persistable state.
    pub fn snapshot(&self) -> DocumentSnapshot {
        DocumentSnapshot {
            polygons: self.polygons.clone(),
            scale_artifact: self.calibrator.artifact().cloned(),
        }
    }

    // --- Coordinate mapping -------------------------------------------------

    /// Maps a raw device pointer position into image space.
    pub fn map_pointer(&self, device: Point, pan_offset: Point, zoom: f64) -> Result<Point> {
        viewport::to_image_space(device, pan_offset, zoom)
    }

    // --- Polygons and selection ---------------------------------------------

    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    pub fn polygon(&self, id: &str) -> Option<&Polygon> {
        self.polygons.iter().find(|p| p.id == id)
    }

    /// Currently selected polygon, if any.
    pub fn selected(&self) -> Option<&Polygon> {
        let id = self.selected_id.as_deref()?;
        self.polygon(id)
    }

    /// Selects a polygon by id.
    pub fn select(&mut self, id: &str) -> Result<()> {
        if self.polygon(id).is_none() {
            return Err(GeometryError::UnknownPolygon { id: id.to_string() }.into());
        }
        self.selected_id = Some(id.to_string());
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selected_id = None;
    }

    /// Creates a polygon from a completed trace and selects it.
    ///
    /// The color tag cycles through the palette by creation count.
    /// Fails with `DegeneratePolygon` for fewer than 3 distinct points.
    pub fn finalize_polygon(&mut self, points: Vec<Point>) -> Result<&Polygon> {
        let color = ColorTag::for_index(self.created_count);
        let polygon = Polygon::new(points, color)?;
        debug!(polygon = %polygon.id, area_px = polygon.area_px, "polygon finalized");
        self.created_count += 1;
        self.selected_id = Some(polygon.id.clone());
        self.polygons.push(polygon);
        let last = self.polygons.len() - 1;
        Ok(&self.polygons[last])
    }

    /// Deletes a polygon, clearing the selection slot if it pointed at
    /// it.
    pub fn delete_polygon(&mut self, id: &str) -> Result<()> {
        let before = self.polygons.len();
        self.polygons.retain(|p| p.id != id);
        if self.polygons.len() == before {
            return Err(GeometryError::UnknownPolygon { id: id.to_string() }.into());
        }
        if self.selected_id.as_deref() == Some(id) {
            self.selected_id = None;
        }
        Ok(())
    }

    /// Replaces the room metadata of the selected polygon.
    pub fn set_selected_metadata(&mut self, room_id: &str, room_name: &str) -> Result<()> {
        let id = self.selected_id.clone().ok_or_else(|| GeometryError::InvalidState {
            reason: "no polygon selected".to_string(),
        })?;
        let idx = self
            .polygon_index(&id)
            .ok_or(GeometryError::UnknownPolygon { id })?;
        let polygon = &mut self.polygons[idx];
        polygon.metadata.insert("id".to_string(), room_id.trim().to_string());
        polygon
            .metadata
            .insert("name".to_string(), room_name.trim().to_string());
        Ok(())
    }

    // --- Calibration --------------------------------------------------------

    pub fn calibration_state(&self) -> CalibrationState {
        self.calibrator.state()
    }

    pub fn scale_artifact(&self) -> Option<&ScaleArtifact> {
        self.calibrator.artifact()
    }

    pub fn begin_calibration(&mut self) {
        self.calibrator.begin();
    }

    pub fn submit_calibration_point(&mut self, point: Point) -> Result<CalibrationState> {
        self.calibrator.submit_point(point)
    }

    pub fn submit_calibration_length(&mut self, unit: Unit, value: f64) -> Result<ScaleArtifact> {
        self.calibrator.submit_length(unit, value)
    }

    pub fn cancel_calibration(&mut self) {
        self.calibrator.cancel();
    }

    /// Rubber-band preview for the calibration line, if one is armed.
    pub fn calibration_preview(&self, pointer: Point) -> Option<(Point, Point)> {
        self.calibrator.preview_segment(pointer)
    }

    // --- Metrics ------------------------------------------------------------

    /// Pixel-space metrics for a polygon in the document.
    pub fn compute_metrics(&self, id: &str) -> Result<PixelMetrics> {
        let polygon = self
            .polygon(id)
            .ok_or_else(|| GeometryError::UnknownPolygon { id: id.to_string() })?;
        metrics::compute_metrics(&polygon.points)
    }

    /// Metrics converted to real units through the current scale.
    ///
    /// Fails when no calibration has been confirmed.
    pub fn compute_real_metrics(&self, id: &str) -> Result<RealMetrics> {
        let scale = self.calibrator.artifact().ok_or_else(|| GeometryError::InvalidState {
            reason: "no scale calibration confirmed".to_string(),
        })?;
        Ok(metrics::to_real(self.compute_metrics(id)?, scale))
    }

    // --- Vertex editing -----------------------------------------------------

    /// Finds a vertex handle under a device point using the current
    /// viewport transform.
    pub fn hit_test_vertex(&self, device_point: Point) -> Option<(String, usize)> {
        editor::hit_test_vertex(
            &self.polygons,
            device_point,
            |p| self.viewport.image_to_device(p),
            DEFAULT_HIT_RADIUS_PX,
        )
    }

    fn polygon_index(&self, id: &str) -> Option<usize> {
        self.polygons.iter().position(|p| p.id == id)
    }

    /// Starts dragging a vertex of the given polygon, selecting it.
    pub fn begin_vertex_drag(
        &mut self,
        polygon_id: &str,
        vertex_index: usize,
        snap_tolerance_deg: f64,
    ) -> Result<()> {
        let idx = self.polygon_index(polygon_id).ok_or_else(|| {
            GeometryError::UnknownPolygon {
                id: polygon_id.to_string(),
            }
        })?;
        self.editor
            .begin(&self.polygons[idx], vertex_index, snap_tolerance_deg)?;
        self.selected_id = Some(polygon_id.to_string());
        Ok(())
    }

    /// Feeds a pointer move (image space) into the active drag.
    pub fn update_vertex_drag(&mut self, candidate: Point) -> Result<DragFeedback> {
        let id = self
            .editor
            .session()
            .map(|s| s.polygon_id.clone())
            .ok_or_else(|| GeometryError::InvalidState {
                reason: "no drag in progress".to_string(),
            })?;
        let idx = self
            .polygon_index(&id)
            .ok_or(GeometryError::UnknownPolygon { id })?;
        self.editor.update(&self.polygons[idx], candidate)
    }

    /// Commits the active drag into the polygon.
    pub fn commit_vertex_drag(&mut self) -> Result<Point> {
        let id = self
            .editor
            .session()
            .map(|s| s.polygon_id.clone())
            .ok_or_else(|| GeometryError::InvalidState {
                reason: "no drag in progress".to_string(),
            })?;
        let idx = self
            .polygon_index(&id)
            .ok_or(GeometryError::UnknownPolygon { id })?;
        self.editor.commit(&mut self.polygons[idx])
    }

    /// Aborts the active drag with zero mutation.
    pub fn cancel_vertex_drag(&mut self) {
        self.editor.cancel();
    }

    /// Restores the last committed vertex move. Silent no-op when the
    /// undo slot is empty or its polygon is gone.
    pub fn undo_last_vertex_move(&mut self) -> Option<Point> {
        let id = self.editor.undo_entry()?.polygon_id.clone();
        let idx = self.polygon_index(&id)?;
        self.editor.undo(&mut self.polygons[idx])
    }

    // --- Straightening ------------------------------------------------------

    /// Straightens the selected polygon onto its bounding rectangle.
    pub fn straighten_selected(&mut self) -> Result<bool> {
        let id = self.selected_id.clone().ok_or_else(|| GeometryError::InvalidState {
            reason: "no polygon selected".to_string(),
        })?;
        let idx = self
            .polygon_index(&id)
            .ok_or(GeometryError::UnknownPolygon { id })?;
        Ok(self.straightener.straighten(&mut self.polygons[idx]))
    }

    /// Undoes the last straighten. Silent no-op without a backup.
    pub fn undo_straighten(&mut self) -> bool {
        let Some(id) = self.selected_id.clone() else {
            return false;
        };
        let Some(idx) = self.polygon_index(&id) else {
            return false;
        };
        self.straightener.undo(&mut self.polygons[idx])
    }

    // --- Panel packing ------------------------------------------------------

    /// Packs panels of a real-world size into a polygon, converting
    /// the panel dimensions to pixels through the confirmed scale.
    pub fn pack_panels(&self, id: &str, spec: PanelSpec) -> Result<PackingResult> {
        let scale = self.calibrator.artifact().ok_or_else(|| GeometryError::InvalidState {
            reason: "no scale calibration confirmed".to_string(),
        })?;
        let polygon = self
            .polygon(id)
            .ok_or_else(|| GeometryError::UnknownPolygon { id: id.to_string() })?;
        let (w_px, h_px) = spec.to_pixels(scale);
        packer::pack(polygon, w_px, h_px)
    }
}
