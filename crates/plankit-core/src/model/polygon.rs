use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{GeometryError, Result};
use crate::geometry;

use super::Point;

/// Fill color assigned to a completed polygon overlay.
///
/// New polygons cycle through the palette in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorTag {
    PaleBlue,
    PaleGreen,
    PaleOrange,
    PaleViolet,
}

impl ColorTag {
    /// The palette in assignment order.
    pub fn palette() -> &'static [ColorTag] {
        &[
            ColorTag::PaleBlue,
            ColorTag::PaleGreen,
            ColorTag::PaleOrange,
            ColorTag::PaleViolet,
        ]
    }

    /// Palette entry for the nth created polygon.
    pub fn for_index(index: usize) -> ColorTag {
        let palette = Self::palette();
        palette[index % palette.len()]
    }

    /// Hex fill color for rendering collaborators.
    pub fn hex(&self) -> &'static str {
        match self {
            ColorTag::PaleBlue => "#9bd6ff",
            ColorTag::PaleGreen => "#c5f5c9",
            ColorTag::PaleOrange => "#ffe0b3",
            ColorTag::PaleViolet => "#f7c6ff",
        }
    }
}

/// A traced room boundary.
///
/// Points are an open ring in image-pixel space (the first point is not
/// repeated at the end). Cached area and perimeter are pixel-space and
/// are recomputed whenever the point list changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Polygon {
    pub id: String,
    pub points: Vec<Point>,
    pub area_px: f64,
    pub perimeter_px: f64,
    pub metadata: HashMap<String, String>,
    pub color_tag: ColorTag,
}

impl Polygon {
    /// Creates a polygon from a finalized vertex list.
    ///
    /// Requires at least 3 distinct points; consecutive coincident
    /// points are dropped before validation.
    pub fn new(points: Vec<Point>, color_tag: ColorTag) -> Result<Self> {
        let original_count = points.len();
        let mut cleaned: Vec<Point> = Vec::with_capacity(points.len());
        for p in points {
            if cleaned
                .last()
                .is_none_or(|last: &Point| last.distance_to(&p) > geometry::EPSILON)
            {
                cleaned.push(p);
            }
        }
        // The ring is open, so the last point may still coincide with
        // the first.
        if cleaned
            .last()
            .is_some_and(|last| cleaned.len() > 1 && cleaned[0].distance_to(last) <= geometry::EPSILON)
        {
            cleaned.pop();
        }
        if cleaned.len() < 3 {
            return Err(GeometryError::DegeneratePolygon {
                point_count: original_count,
            }
            .into());
        }
        let mut polygon = Self {
            id: Uuid::new_v4().to_string(),
            points: cleaned,
            area_px: 0.0,
            perimeter_px: 0.0,
            metadata: HashMap::new(),
            color_tag,
        };
        polygon.compute_metrics();
        Ok(polygon)
    }

    /// Recomputes cached area and perimeter in pixel units.
    pub fn compute_metrics(&mut self) {
        self.area_px = geometry::shoelace_area(&self.points);
        self.perimeter_px = geometry::polygon_perimeter(&self.points);
    }

    /// Bounding box as `(min_x, min_y, max_x, max_y)`.
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        // Constructor guarantees a non-empty point list.
        geometry::bounding_box(&self.points).unwrap_or((0.0, 0.0, 0.0, 0.0))
    }

    /// Whether an image-space point lies inside the polygon.
    pub fn contains_point(&self, p: Point) -> bool {
        geometry::point_in_polygon(p, &self.points)
    }
}
