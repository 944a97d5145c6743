use serde::{Deserialize, Serialize};

use crate::error::{GeometryError, Result};
use crate::units::Unit;

use super::Point;

/// A confirmed scale calibration.
///
/// Created whole on successful calibration and replaced whole by the
/// next one; fields are never updated individually. `scale_factor` is
/// real-world units per image pixel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleArtifact {
    pub point_a: Point,
    pub point_b: Point,
    pub pixel_length: f64,
    pub real_length: f64,
    pub unit: Unit,
    pub scale_factor: f64,
}

impl ScaleArtifact {
    /// Builds an artifact from two calibration points and the entered
    /// real-world length.
    pub fn new(point_a: Point, point_b: Point, real_length: f64, unit: Unit) -> Result<Self> {
        let pixel_length = point_a.distance_to(&point_b);
        if pixel_length <= 0.0 {
            return Err(GeometryError::ZeroLength.into());
        }
        if !real_length.is_finite() || real_length <= 0.0 {
            return Err(GeometryError::InvalidLength { value: real_length }.into());
        }
        Ok(Self {
            point_a,
            point_b,
            pixel_length,
            real_length,
            unit,
            scale_factor: real_length / pixel_length,
        })
    }

    /// Converts a pixel length to real-world units.
    pub fn length_to_real(&self, pixels: f64) -> f64 {
        pixels * self.scale_factor
    }

    /// Converts a pixel area to real-world square units.
    pub fn area_to_real(&self, pixel_area: f64) -> f64 {
        pixel_area * self.scale_factor * self.scale_factor
    }
}

/// Panel dimensions in real-world units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelSpec {
    pub width_real: f64,
    pub height_real: f64,
}

impl PanelSpec {
    pub fn new(width_real: f64, height_real: f64) -> Self {
        Self {
            width_real,
            height_real,
        }
    }

    /// Panel size in image pixels under the given scale.
    pub fn to_pixels(&self, scale: &ScaleArtifact) -> (f64, f64) {
        (
            self.width_real / scale.scale_factor,
            self.height_real / scale.scale_factor,
        )
    }
}
