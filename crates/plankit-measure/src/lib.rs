//! # PlanKit Measure
//!
//! The interactive geometry engine: coordinate mapping, scale
//! calibration, polygon metrics, vertex editing with angle snap, and
//! the rectangular panel packer. UI collaborators call these
//! operations synchronously; the engine keeps no event loop and no
//! global state.

pub mod calibration;
pub mod document;
pub mod editor;
pub mod metrics;
pub mod packer;
pub mod straighten;
pub mod viewport;

pub use calibration::{CalibrationState, Calibrator};
pub use document::{DocumentSnapshot, PlanDocument};
pub use editor::{DragFeedback, DragSession, VertexEditor, DEFAULT_SNAP_TOLERANCE_DEG};
pub use metrics::{compute_metrics, to_real, PixelMetrics, RealMetrics};
pub use packer::{pack, MAX_GRID_CELLS};
pub use straighten::{rectangle_map, Straightener};
pub use viewport::{to_device_space, to_image_space, Viewport};
