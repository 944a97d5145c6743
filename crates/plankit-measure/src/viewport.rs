//! Viewport and coordinate transformation for the plan canvas.
//!
//! Handles conversion between device coordinates (raw pointer events)
//! and image coordinates (the loaded page, independent of pan/zoom).
//! Image space is Y-down, matching the raster page.

use std::fmt;

use plankit_core::error::{GeometryError, Result};
use plankit_core::model::Point;

const ZOOM_MIN: f64 = 0.01;
const ZOOM_MAX: f64 = 64.0;
const ZOOM_STEP: f64 = 1.25;

/// Maps a raw device point into image space.
///
/// Formula: `(device - pan_offset) / zoom`. Pure; used on every pointer
/// event. Fails with `InvalidZoom` on a non-positive zoom factor.
pub fn to_image_space(device: Point, pan_offset: Point, zoom: f64) -> Result<Point> {
    if zoom <= 0.0 {
        return Err(GeometryError::InvalidZoom { zoom }.into());
    }
    Ok(Point::new(
        (device.x - pan_offset.x) / zoom,
        (device.y - pan_offset.y) / zoom,
    ))
}

/// Maps an image-space point back to device space; exact inverse of
/// [`to_image_space`].
pub fn to_device_space(image: Point, pan_offset: Point, zoom: f64) -> Result<Point> {
    if zoom <= 0.0 {
        return Err(GeometryError::InvalidZoom { zoom }.into());
    }
    Ok(Point::new(
        image.x * zoom + pan_offset.x,
        image.y * zoom + pan_offset.y,
    ))
}

/// Represents the viewport transformation state (zoom and pan).
#[derive(Debug, Clone)]
pub struct Viewport {
    zoom: f64,
    pan_x: f64,
    pan_y: f64,
}

impl Viewport {
    /// Creates a new viewport at 1:1 zoom with no pan.
    pub fn new() -> Self {
        Self {
            zoom: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
        }
    }

    /// Gets the current zoom level (1.0 = 100%).
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Sets the zoom level, clamped to [0.01, 64.0].
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(ZOOM_MIN, ZOOM_MAX);
    }

    /// Zooms in by one step (x1.25).
    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom * ZOOM_STEP);
    }

    /// Zooms out by one step.
    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom / ZOOM_STEP);
    }

    /// Gets the pan offset (X coordinate).
    pub fn pan_x(&self) -> f64 {
        self.pan_x
    }

    /// Gets the pan offset (Y coordinate).
    pub fn pan_y(&self) -> f64 {
        self.pan_y
    }

    /// Current pan offset as a point.
    pub fn pan_offset(&self) -> Point {
        Point::new(self.pan_x, self.pan_y)
    }

    /// Sets the pan offset.
    pub fn set_pan(&mut self, x: f64, y: f64) {
        self.pan_x = x;
        self.pan_y = y;
    }

    /// Pans by a delta amount.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// Converts a device point into image space under the current
    /// transform.
    pub fn device_to_image(&self, device: Point) -> Point {
        // Invariant: zoom stays within the clamped positive range.
        Point::new(
            (device.x - self.pan_x) / self.zoom,
            (device.y - self.pan_y) / self.zoom,
        )
    }

    /// Converts an image-space point into device space.
    pub fn image_to_device(&self, image: Point) -> Point {
        Point::new(
            image.x * self.zoom + self.pan_x,
            image.y * self.zoom + self.pan_y,
        )
    }

    /// Zooms to a new level while keeping the image point under the
    /// given device point stationary on screen.
    pub fn zoom_at(&mut self, device_anchor: Point, new_zoom: f64) {
        let anchor_image = self.device_to_image(device_anchor);
        self.set_zoom(new_zoom);
        self.pan_x = device_anchor.x - anchor_image.x * self.zoom;
        self.pan_y = device_anchor.y - anchor_image.y * self.zoom;
    }

    /// Zooms in one step anchored at a device point.
    pub fn zoom_in_at(&mut self, device_anchor: Point) {
        self.zoom_at(device_anchor, self.zoom * ZOOM_STEP);
    }

    /// Zooms out one step anchored at a device point.
    pub fn zoom_out_at(&mut self, device_anchor: Point) {
        self.zoom_at(device_anchor, self.zoom / ZOOM_STEP);
    }

    /// Resets viewport to default state (1:1 zoom, no pan).
    pub fn reset(&mut self) {
        self.zoom = 1.0;
        self.pan_x = 0.0;
        self.pan_y = 0.0;
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Zoom: {:.2}x | Pan: ({:.1}, {:.1})",
            self.zoom, self.pan_x, self.pan_y
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}
