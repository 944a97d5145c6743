//! Scale calibration state machine.
//!
//! The user clicks two points on a known distance, then enters the
//! real-world length and unit. A confirmed calibration is stored as a
//! [`ScaleArtifact`]; cancelling at any step leaves the previous
//! artifact untouched.

use tracing::debug;

use plankit_core::error::{GeometryError, Result};
use plankit_core::model::{Point, ScaleArtifact};
use plankit_core::units::Unit;

/// Calibration progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalibrationState {
    /// Not calibrating.
    Idle,
    /// Waiting for the first click.
    AwaitingPointA,
    /// First point recorded; waiting for the second click.
    AwaitingPointB,
    /// Both points recorded; waiting for the length entry.
    AwaitingLengthInput,
}

/// Interactive scale calibrator.
///
/// Holds the last confirmed [`ScaleArtifact`] and the transient points
/// of an in-progress calibration. The artifact is only ever replaced
/// whole, on a successful length submission.
#[derive(Debug, Clone, Default)]
pub struct Calibrator {
    state_points: Vec<Point>,
    active: bool,
    artifact: Option<ScaleArtifact>,
}

impl Calibrator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state of the calibration machine.
    pub fn state(&self) -> CalibrationState {
        if !self.active {
            CalibrationState::Idle
        } else {
            match self.state_points.len() {
                0 => CalibrationState::AwaitingPointA,
                1 => CalibrationState::AwaitingPointB,
                _ => CalibrationState::AwaitingLengthInput,
            }
        }
    }

    /// The last confirmed calibration, if any.
    pub fn artifact(&self) -> Option<&ScaleArtifact> {
        self.artifact.as_ref()
    }

    /// Restores a previously persisted artifact (document load).
    pub fn restore_artifact(&mut self, artifact: ScaleArtifact) {
        self.artifact = Some(artifact);
    }

    /// Enters calibration mode, clearing any in-progress points.
    /// A previously confirmed artifact stays readable.
    pub fn begin(&mut self) {
        self.state_points.clear();
        self.active = true;
        debug!("calibration started");
    }

    /// Records a calibration click, already mapped to image space.
    ///
    /// The second click computes the pixel distance; coincident points
    /// fail with `ZeroLength` and return the machine to the first-point
    /// state.
    pub fn submit_point(&mut self, point: Point) -> Result<CalibrationState> {
        match self.state() {
            CalibrationState::AwaitingPointA => {
                self.state_points.push(point);
                Ok(CalibrationState::AwaitingPointB)
            }
            CalibrationState::AwaitingPointB => {
                let a = self.state_points[0];
                if a.distance_to(&point) <= 0.0 {
                    self.state_points.clear();
                    return Err(GeometryError::ZeroLength.into());
                }
                self.state_points.push(point);
                Ok(CalibrationState::AwaitingLengthInput)
            }
            state => Err(GeometryError::InvalidState {
                reason: format!("cannot submit a calibration point in {:?}", state),
            }
            .into()),
        }
    }

    /// Rubber-band preview segment: the first recorded point paired
    /// with the live pointer position. Output only, nothing is stored.
    pub fn preview_segment(&self, pointer: Point) -> Option<(Point, Point)> {
        if self.state() == CalibrationState::AwaitingPointB {
            Some((self.state_points[0], pointer))
        } else {
            None
        }
    }

    /// Submits the entered real-world length, confirming the
    /// calibration.
    ///
    /// On success the stored artifact is replaced atomically and the
    /// machine returns to idle. An invalid length leaves the machine
    /// awaiting input and the previous artifact unchanged.
    pub fn submit_length(&mut self, unit: Unit, real_length: f64) -> Result<ScaleArtifact> {
        if self.state() != CalibrationState::AwaitingLengthInput {
            return Err(GeometryError::InvalidState {
                reason: format!("cannot submit a length in {:?}", self.state()),
            }
            .into());
        }
        if !real_length.is_finite() || real_length <= 0.0 {
            return Err(GeometryError::InvalidLength { value: real_length }.into());
        }
        let artifact =
            ScaleArtifact::new(self.state_points[0], self.state_points[1], real_length, unit)?;
        debug!(
            scale_factor = artifact.scale_factor,
            unit = %artifact.unit,
            "scale calibrated"
        );
        self.artifact = Some(artifact.clone());
        self.state_points.clear();
        self.active = false;
        Ok(artifact)
    }

    /// Cancels an in-progress calibration from any state, discarding
    /// transient points and never touching the confirmed artifact.
    pub fn cancel(&mut self) {
        if self.active {
            debug!("calibration cancelled");
        }
        self.state_points.clear();
        self.active = false;
    }
}
