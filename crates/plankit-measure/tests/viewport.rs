use plankit_core::model::Point;
use plankit_core::{Error, GeometryError};
use plankit_measure::viewport::{to_device_space, to_image_space, Viewport};

#[test]
fn test_to_image_space_formula() {
    let image = to_image_space(Point::new(210.0, 110.0), Point::new(10.0, 10.0), 2.0).unwrap();
    assert!((image.x - 100.0).abs() < 1e-9);
    assert!((image.y - 50.0).abs() < 1e-9);
}

#[test]
fn test_device_image_roundtrip() {
    let pan = Point::new(-37.5, 12.25);
    let zoom = 1.75;
    let original = Point::new(123.45, 456.78);
    let device = to_device_space(original, pan, zoom).unwrap();
    let roundtrip = to_image_space(device, pan, zoom).unwrap();
    assert!((roundtrip.x - original.x).abs() < 1e-9);
    assert!((roundtrip.y - original.y).abs() < 1e-9);
}

#[test]
fn test_invalid_zoom_rejected() {
    for zoom in [0.0, -1.0] {
        let result = to_image_space(Point::new(1.0, 1.0), Point::new(0.0, 0.0), zoom);
        assert!(matches!(
            result,
            Err(Error::Geometry(GeometryError::InvalidZoom { .. }))
        ));
        let result = to_device_space(Point::new(1.0, 1.0), Point::new(0.0, 0.0), zoom);
        assert!(matches!(
            result,
            Err(Error::Geometry(GeometryError::InvalidZoom { .. }))
        ));
    }
}

#[test]
fn test_viewport_zoom_clamped() {
    let mut vp = Viewport::new();
    vp.set_zoom(0.001);
    assert!((vp.zoom() - 0.01).abs() < 1e-12);
    vp.set_zoom(100.0);
    assert!((vp.zoom() - 64.0).abs() < 1e-12);
}

#[test]
fn test_viewport_zoom_step() {
    let mut vp = Viewport::new();
    vp.zoom_in();
    assert!((vp.zoom() - 1.25).abs() < 1e-12);
    vp.zoom_out();
    assert!((vp.zoom() - 1.0).abs() < 1e-12);
}

#[test]
fn test_viewport_transform_roundtrip() {
    let mut vp = Viewport::new();
    vp.set_zoom(2.5);
    vp.set_pan(75.0, 125.0);
    let original = Point::new(40.0, -12.0);
    let device = vp.image_to_device(original);
    let roundtrip = vp.device_to_image(device);
    assert!((roundtrip.x - original.x).abs() < 1e-9);
    assert!((roundtrip.y - original.y).abs() < 1e-9);
}

#[test]
fn test_zoom_at_keeps_anchor_fixed() {
    let mut vp = Viewport::new();
    vp.set_pan(20.0, 30.0);
    let anchor = Point::new(400.0, 300.0);
    let image_before = vp.device_to_image(anchor);
    vp.zoom_at(anchor, 4.0);
    let image_after = vp.device_to_image(anchor);
    assert!((image_before.x - image_after.x).abs() < 1e-9);
    assert!((image_before.y - image_after.y).abs() < 1e-9);
}

#[test]
fn test_viewport_reset() {
    let mut vp = Viewport::new();
    vp.set_zoom(3.0);
    vp.pan_by(10.0, -5.0);
    vp.reset();
    assert_eq!(vp.zoom(), 1.0);
    assert_eq!(vp.pan_x(), 0.0);
    assert_eq!(vp.pan_y(), 0.0);
}
