//! # PlanKit Core
//!
//! Core types for the floor-plan measurement engine: geometric
//! primitives, the polygon/scale data model, units, and errors.

pub mod error;
pub mod geometry;
pub mod model;
pub mod units;

pub use error::{Error, GeometryError, Result};
pub use model::{
    ColorTag, PackingResult, PanelKind, PanelSpec, PlacedPanel, Point, Polygon, ScaleArtifact,
};
pub use units::Unit;
