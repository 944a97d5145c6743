//! Polygon metrics and real-unit conversion.

use plankit_core::error::{GeometryError, Result};
use plankit_core::geometry::{self, EPSILON};
use plankit_core::model::{Point, ScaleArtifact};
use plankit_core::units::Unit;

/// Pixel-space area and perimeter of a vertex list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelMetrics {
    pub area_px: f64,
    pub perimeter_px: f64,
}

/// Metrics converted to real-world units via a scale artifact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RealMetrics {
    pub area: f64,
    pub perimeter: f64,
    pub unit: Unit,
}

/// Computes area (shoelace) and perimeter for an ordered vertex list.
///
/// Fails with `DegeneratePolygon` for fewer than 3 distinct points.
/// Pure and deterministic; never cached.
pub fn compute_metrics(points: &[Point]) -> Result<PixelMetrics> {
    let mut distinct: Vec<Point> = Vec::with_capacity(points.len());
    for p in points {
        if !distinct.iter().any(|q| q.distance_to(p) <= EPSILON) {
            distinct.push(*p);
        }
    }
    if distinct.len() < 3 {
        return Err(GeometryError::DegeneratePolygon {
            point_count: points.len(),
        }
        .into());
    }
    Ok(PixelMetrics {
        area_px: geometry::shoelace_area(points),
        perimeter_px: geometry::polygon_perimeter(points),
    })
}

/// Converts pixel metrics to real-world units.
///
/// Area scales by the square of the factor, perimeter linearly.
pub fn to_real(metrics: PixelMetrics, scale: &ScaleArtifact) -> RealMetrics {
    RealMetrics {
        area: scale.area_to_real(metrics.area_px),
        perimeter: scale.length_to_real(metrics.perimeter_px),
        unit: scale.unit,
    }
}
