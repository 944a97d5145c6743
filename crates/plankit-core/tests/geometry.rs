use plankit_core::geometry::{
    bounding_box, clip_polygon_to_rect, point_in_polygon, point_in_polygon_inclusive,
    polygon_perimeter, segments_intersect, shoelace_area,
};
use plankit_core::model::Point;

fn square(side: f64) -> Vec<Point> {
    vec![
        Point::new(0.0, 0.0),
        Point::new(side, 0.0),
        Point::new(side, side),
        Point::new(0.0, side),
    ]
}

#[test]
fn test_shoelace_area_unit_square() {
    assert!((shoelace_area(&square(10.0)) - 100.0).abs() < 1e-9);
}

#[test]
fn test_shoelace_area_triangle() {
    let tri = vec![
        Point::new(0.0, 0.0),
        Point::new(4.0, 0.0),
        Point::new(0.0, 3.0),
    ];
    assert!((shoelace_area(&tri) - 6.0).abs() < 1e-9);
}

#[test]
fn test_shoelace_area_orientation_independent() {
    let mut sq = square(10.0);
    sq.reverse();
    assert!((shoelace_area(&sq) - 100.0).abs() < 1e-9);
}

#[test]
fn test_area_degenerate_inputs() {
    assert_eq!(shoelace_area(&[]), 0.0);
    assert_eq!(shoelace_area(&[Point::new(1.0, 1.0)]), 0.0);
    assert_eq!(
        shoelace_area(&[Point::new(0.0, 0.0), Point::new(5.0, 5.0)]),
        0.0
    );
}

#[test]
fn test_perimeter_square() {
    assert!((polygon_perimeter(&square(10.0)) - 40.0).abs() < 1e-9);
}

#[test]
fn test_bounding_box() {
    let pts = vec![
        Point::new(3.0, -1.0),
        Point::new(-2.0, 4.0),
        Point::new(7.0, 2.0),
    ];
    let (min_x, min_y, max_x, max_y) = bounding_box(&pts).unwrap();
    assert_eq!((min_x, min_y, max_x, max_y), (-2.0, -1.0, 7.0, 4.0));
    assert!(bounding_box(&[]).is_none());
}

#[test]
fn test_point_in_polygon_square() {
    let sq = square(10.0);
    assert!(point_in_polygon(Point::new(5.0, 5.0), &sq));
    assert!(!point_in_polygon(Point::new(15.0, 5.0), &sq));
    assert!(!point_in_polygon(Point::new(-0.1, 5.0), &sq));
}

#[test]
fn test_point_in_polygon_concave() {
    // L-shape: the notch at the top-right is outside.
    let l_shape = vec![
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(10.0, 5.0),
        Point::new(5.0, 5.0),
        Point::new(5.0, 10.0),
        Point::new(0.0, 10.0),
    ];
    assert!(point_in_polygon(Point::new(2.0, 8.0), &l_shape));
    assert!(point_in_polygon(Point::new(8.0, 2.0), &l_shape));
    assert!(!point_in_polygon(Point::new(8.0, 8.0), &l_shape));
}

#[test]
fn test_point_on_boundary_inclusive() {
    let sq = square(10.0);
    assert!(point_in_polygon_inclusive(Point::new(0.0, 5.0), &sq));
    assert!(point_in_polygon_inclusive(Point::new(10.0, 10.0), &sq));
    assert!(!point_in_polygon_inclusive(Point::new(10.1, 5.0), &sq));
}

#[test]
fn test_segments_intersect_crossing() {
    assert!(segments_intersect(
        Point::new(0.0, 0.0),
        Point::new(10.0, 10.0),
        Point::new(0.0, 10.0),
        Point::new(10.0, 0.0),
    ));
}

#[test]
fn test_segments_intersect_disjoint() {
    assert!(!segments_intersect(
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(0.0, 1.0),
        Point::new(1.0, 1.0),
    ));
}

#[test]
fn test_segments_intersect_touching_endpoint() {
    assert!(segments_intersect(
        Point::new(0.0, 0.0),
        Point::new(5.0, 0.0),
        Point::new(5.0, 0.0),
        Point::new(5.0, 5.0),
    ));
}

#[test]
fn test_clip_fully_inside() {
    let sq = square(4.0);
    let clipped = clip_polygon_to_rect(&sq, -10.0, -10.0, 10.0, 10.0);
    assert!((shoelace_area(&clipped) - 16.0).abs() < 1e-9);
}

#[test]
fn test_clip_fully_outside() {
    let sq = square(4.0);
    let clipped = clip_polygon_to_rect(&sq, 100.0, 100.0, 200.0, 200.0);
    assert!(clipped.is_empty());
}

#[test]
fn test_clip_half_overlap() {
    // Square [0,10]^2 clipped to x in [5,20] leaves a 5x10 strip.
    let sq = square(10.0);
    let clipped = clip_polygon_to_rect(&sq, 5.0, 0.0, 20.0, 10.0);
    assert!((shoelace_area(&clipped) - 50.0).abs() < 1e-9);
}

#[test]
fn test_clip_triangle_corner() {
    let tri = vec![
        Point::new(0.0, 0.0),
        Point::new(8.0, 0.0),
        Point::new(0.0, 8.0),
    ];
    // Clip to the unit square at the right-angle corner.
    let clipped = clip_polygon_to_rect(&tri, 0.0, 0.0, 1.0, 1.0);
    assert!((shoelace_area(&clipped) - 1.0).abs() < 1e-9);
}
