//! Error handling for PlanKit
//!
//! Provides error types for the geometry and panel-packing engine.
//! All conditions are local and recoverable: a failing operation returns
//! the error to the caller and leaves persisted state (scale artifact,
//! polygon collection) untouched.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Geometry engine error type
///
/// Represents errors raised by coordinate mapping, scale calibration,
/// polygon metrics, vertex editing, and panel packing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Zoom factor must be strictly positive
    #[error("Invalid zoom factor: {zoom}")]
    InvalidZoom {
        /// The offending zoom factor.
        zoom: f64,
    },

    /// The two calibration points are coincident
    #[error("Calibration points are coincident; select two distinct points")]
    ZeroLength,

    /// The entered real-world length is not a finite positive number
    #[error("Invalid calibration length: {value}")]
    InvalidLength {
        /// The rejected length value.
        value: f64,
    },

    /// A polygon operation requires at least 3 distinct points
    #[error("Degenerate polygon: {point_count} point(s), need at least 3 distinct")]
    DegeneratePolygon {
        /// Number of points supplied.
        point_count: usize,
    },

    /// Snap tolerance outside the accepted range
    #[error("Snap tolerance {degrees}° out of range [0, 30]")]
    InvalidTolerance {
        /// The rejected tolerance in degrees.
        degrees: f64,
    },

    /// Panel dimensions must be strictly positive
    #[error("Invalid panel dimensions: {width} x {height}")]
    InvalidPanelDimension {
        /// Panel width in pixels.
        width: f64,
        /// Panel height in pixels.
        height: f64,
    },

    /// The packing grid would exceed the cell ceiling
    #[error("Packing grid of {cells} cells exceeds the limit of {limit}")]
    PackingTooLarge {
        /// Number of candidate cells the request would scan.
        cells: usize,
        /// The configured ceiling.
        limit: usize,
    },

    /// A referenced polygon does not exist in the document
    #[error("Unknown polygon id: {id}")]
    UnknownPolygon {
        /// The id that was not found.
        id: String,
    },

    /// A vertex index is out of bounds for the referenced polygon
    #[error("Vertex index {index} out of bounds (polygon has {len} points)")]
    VertexOutOfBounds {
        /// The requested vertex index.
        index: usize,
        /// The polygon's point count.
        len: usize,
    },

    /// An operation was invoked in the wrong state
    #[error("Invalid state transition: {reason}")]
    InvalidState {
        /// Why the transition was rejected.
        reason: String,
    },
}

/// Main error type for PlanKit
#[derive(Error, Debug)]
pub enum Error {
    /// Geometry engine error
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a geometry error
    pub fn is_geometry_error(&self) -> bool {
        matches!(self, Error::Geometry(_))
    }

    /// Check if this error signals the packer request should be rejected
    /// outright rather than retried unmodified
    pub fn is_too_large(&self) -> bool {
        matches!(self, Error::Geometry(GeometryError::PackingTooLarge { .. }))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
