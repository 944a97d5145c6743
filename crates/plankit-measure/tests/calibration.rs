use plankit_core::model::Point;
use plankit_core::units::Unit;
use plankit_core::{Error, GeometryError};
use plankit_measure::calibration::{CalibrationState, Calibrator};

fn confirmed_calibrator() -> Calibrator {
    let mut cal = Calibrator::new();
    cal.begin();
    cal.submit_point(Point::new(0.0, 0.0)).unwrap();
    cal.submit_point(Point::new(50.0, 0.0)).unwrap();
    cal.submit_length(Unit::M, 5.0).unwrap();
    cal
}

#[test]
fn test_full_calibration_flow() {
    let mut cal = Calibrator::new();
    assert_eq!(cal.state(), CalibrationState::Idle);

    cal.begin();
    assert_eq!(cal.state(), CalibrationState::AwaitingPointA);

    let state = cal.submit_point(Point::new(0.0, 0.0)).unwrap();
    assert_eq!(state, CalibrationState::AwaitingPointB);

    let state = cal.submit_point(Point::new(30.0, 40.0)).unwrap();
    assert_eq!(state, CalibrationState::AwaitingLengthInput);

    let artifact = cal.submit_length(Unit::M, 10.0).unwrap();
    assert_eq!(cal.state(), CalibrationState::Idle);
    assert!((artifact.pixel_length - 50.0).abs() < 1e-9);
    assert!((artifact.scale_factor - 0.2).abs() < 1e-12);
    assert_eq!(artifact.unit, Unit::M);
    assert_eq!(cal.artifact(), Some(&artifact));
}

#[test]
fn test_scale_factor_roundtrip() {
    let cal = confirmed_calibrator();
    let artifact = cal.artifact().unwrap();
    assert!((artifact.scale_factor - 0.1).abs() < 1e-12);
    // 100 px^2 at 0.1 m/px is exactly 1 m^2.
    assert!((artifact.area_to_real(100.0) - 1.0).abs() < 1e-12);
}

#[test]
fn test_zero_length_returns_to_first_point() {
    let mut cal = Calibrator::new();
    cal.begin();
    cal.submit_point(Point::new(7.0, 7.0)).unwrap();
    let result = cal.submit_point(Point::new(7.0, 7.0));
    assert!(matches!(
        result,
        Err(Error::Geometry(GeometryError::ZeroLength))
    ));
    assert_eq!(cal.state(), CalibrationState::AwaitingPointA);
    assert!(cal.artifact().is_none());
}

#[test]
fn test_distinct_points_never_zero_length() {
    let mut cal = Calibrator::new();
    cal.begin();
    cal.submit_point(Point::new(0.0, 0.0)).unwrap();
    // Even a sub-pixel separation is a valid distance.
    let result = cal.submit_point(Point::new(1e-6, 0.0));
    assert!(result.is_ok());
}

#[test]
fn test_invalid_length_keeps_state_and_artifact() {
    let mut cal = confirmed_calibrator();
    let before = cal.artifact().cloned().unwrap();

    cal.begin();
    cal.submit_point(Point::new(0.0, 0.0)).unwrap();
    cal.submit_point(Point::new(10.0, 0.0)).unwrap();

    for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let result = cal.submit_length(Unit::Ft, bad);
        assert!(matches!(
            result,
            Err(Error::Geometry(GeometryError::InvalidLength { .. }))
        ));
        assert_eq!(cal.state(), CalibrationState::AwaitingLengthInput);
        assert_eq!(cal.artifact(), Some(&before));
    }

    // A corrected entry still succeeds from the same state.
    let artifact = cal.submit_length(Unit::Ft, 2.0).unwrap();
    assert!((artifact.scale_factor - 0.2).abs() < 1e-12);
}

#[test]
fn test_cancel_preserves_previous_artifact() {
    let mut cal = confirmed_calibrator();
    let before = cal.artifact().cloned().unwrap();

    // Cancel from every non-idle sub-state.
    cal.begin();
    cal.cancel();
    assert_eq!(cal.state(), CalibrationState::Idle);
    assert_eq!(cal.artifact(), Some(&before));

    cal.begin();
    cal.submit_point(Point::new(1.0, 1.0)).unwrap();
    cal.cancel();
    assert_eq!(cal.artifact(), Some(&before));

    cal.begin();
    cal.submit_point(Point::new(1.0, 1.0)).unwrap();
    cal.submit_point(Point::new(9.0, 1.0)).unwrap();
    cal.cancel();
    assert_eq!(cal.state(), CalibrationState::Idle);
    assert_eq!(cal.artifact(), Some(&before));
}

#[test]
fn test_reentering_calibration_keeps_artifact_readable() {
    let mut cal = confirmed_calibrator();
    let before = cal.artifact().cloned().unwrap();
    cal.begin();
    assert_eq!(cal.state(), CalibrationState::AwaitingPointA);
    assert_eq!(cal.artifact(), Some(&before));
}

#[test]
fn test_artifact_replaced_wholesale() {
    let mut cal = confirmed_calibrator();
    cal.begin();
    cal.submit_point(Point::new(0.0, 0.0)).unwrap();
    cal.submit_point(Point::new(0.0, 20.0)).unwrap();
    let artifact = cal.submit_length(Unit::Cm, 40.0).unwrap();
    assert_eq!(artifact.unit, Unit::Cm);
    assert!((artifact.pixel_length - 20.0).abs() < 1e-9);
    assert!((artifact.scale_factor - 2.0).abs() < 1e-12);
    assert_eq!(cal.artifact(), Some(&artifact));
}

#[test]
fn test_preview_segment_only_while_armed() {
    let mut cal = Calibrator::new();
    assert!(cal.preview_segment(Point::new(1.0, 1.0)).is_none());
    cal.begin();
    assert!(cal.preview_segment(Point::new(1.0, 1.0)).is_none());
    cal.submit_point(Point::new(2.0, 3.0)).unwrap();
    let (a, pointer) = cal.preview_segment(Point::new(8.0, 9.0)).unwrap();
    assert_eq!(a, Point::new(2.0, 3.0));
    assert_eq!(pointer, Point::new(8.0, 9.0));
}

#[test]
fn test_point_submission_outside_calibration_fails() {
    let mut cal = Calibrator::new();
    let result = cal.submit_point(Point::new(0.0, 0.0));
    assert!(matches!(
        result,
        Err(Error::Geometry(GeometryError::InvalidState { .. }))
    ));
}
