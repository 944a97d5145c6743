//! Planar geometry primitives
//!
//! Shoelace area, perimeter, ray-cast point-in-polygon, segment
//! intersection, bounding boxes, and clipping of a polygon against an
//! axis-aligned rectangle. All functions are pure and operate on open
//! vertex lists (the closing edge from last back to first is implied).

use crate::model::Point;

/// Tolerance for degenerate-geometry comparisons.
pub const EPSILON: f64 = 1e-9;

/// Absolute polygon area via the shoelace formula.
///
/// Returns 0.0 for fewer than 3 points.
pub fn shoelace_area(points: &[Point]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let n = points.len();
    let mut area = 0.0;
    for i in 0..n {
        let p1 = points[i];
        let p2 = points[(i + 1) % n];
        area += p1.x * p2.y - p2.x * p1.y;
    }
    area.abs() / 2.0
}

/// Closed perimeter length of a polygon.
///
/// Returns 0.0 for fewer than 2 points.
pub fn polygon_perimeter(points: &[Point]) -> f64 {
    if points.len() < 2 {
        return 0.0;
    }
    let n = points.len();
    let mut perimeter = 0.0;
    for i in 0..n {
        perimeter += points[i].distance_to(&points[(i + 1) % n]);
    }
    perimeter
}

/// Axis-aligned bounding box as `(min_x, min_y, max_x, max_y)`.
///
/// Returns `None` for an empty point list.
pub fn bounding_box(points: &[Point]) -> Option<(f64, f64, f64, f64)> {
    let first = points.first()?;
    let mut min_x = first.x;
    let mut min_y = first.y;
    let mut max_x = first.x;
    let mut max_y = first.y;
    for p in &points[1..] {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }
    Some((min_x, min_y, max_x, max_y))
}

/// Ray casting test for a point inside a polygon (even-odd rule).
pub fn point_in_polygon(pt: Point, polygon: &[Point]) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }
    let (x, y) = (pt.x, pt.y);
    let mut inside = false;
    let mut p1 = polygon[0];
    for i in 1..=n {
        let p2 = polygon[i % n];
        if y > p1.y.min(p2.y) && y <= p1.y.max(p2.y) && x <= p1.x.max(p2.x) {
            let x_intersect = if (p1.y - p2.y).abs() > EPSILON {
                (y - p1.y) * (p2.x - p1.x) / (p2.y - p1.y) + p1.x
            } else {
                p1.x
            };
            if (p1.x - p2.x).abs() < EPSILON || x <= x_intersect {
                inside = !inside;
            }
        }
        p1 = p2;
    }
    inside
}

/// Like [`point_in_polygon`], but treats points within `EPSILON` of the
/// boundary as inside. Used when classifying panel corners that may sit
/// exactly on a polygon edge.
pub fn point_in_polygon_inclusive(pt: Point, polygon: &[Point]) -> bool {
    if point_in_polygon(pt, polygon) {
        return true;
    }
    let n = polygon.len();
    if n < 2 {
        return false;
    }
    for i in 0..n {
        if distance_to_segment(pt, polygon[i], polygon[(i + 1) % n]) < 1e-6 {
            return true;
        }
    }
    false
}

/// Distance from a point to a line segment.
pub fn distance_to_segment(pt: Point, a: Point, b: Point) -> f64 {
    let abx = b.x - a.x;
    let aby = b.y - a.y;
    let len2 = abx * abx + aby * aby;
    if len2 < EPSILON {
        return pt.distance_to(&a);
    }
    let t = (((pt.x - a.x) * abx + (pt.y - a.y) * aby) / len2).clamp(0.0, 1.0);
    let proj = Point::new(a.x + t * abx, a.y + t * aby);
    pt.distance_to(&proj)
}

fn orientation(p: Point, q: Point, r: Point) -> i8 {
    let val = (q.y - p.y) * (r.x - q.x) - (q.x - p.x) * (r.y - q.y);
    if val.abs() < EPSILON {
        0
    } else if val > 0.0 {
        1
    } else {
        2
    }
}

fn on_segment(p: Point, q: Point, r: Point) -> bool {
    q.x >= p.x.min(r.x) - EPSILON
        && q.x <= p.x.max(r.x) + EPSILON
        && q.y >= p.y.min(r.y) - EPSILON
        && q.y <= p.y.max(r.y) + EPSILON
}

/// Whether two closed segments intersect (including collinear overlap).
pub fn segments_intersect(a1: Point, a2: Point, b1: Point, b2: Point) -> bool {
    let o1 = orientation(a1, a2, b1);
    let o2 = orientation(a1, a2, b2);
    let o3 = orientation(b1, b2, a1);
    let o4 = orientation(b1, b2, a2);

    if o1 != o2 && o3 != o4 {
        return true;
    }
    (o1 == 0 && on_segment(a1, b1, a2))
        || (o2 == 0 && on_segment(a1, b2, a2))
        || (o3 == 0 && on_segment(b1, a1, b2))
        || (o4 == 0 && on_segment(b1, a2, b2))
}

/// Clips a polygon against an axis-aligned rectangle
/// (Sutherland–Hodgman).
///
/// Returns the clipped vertex list, which is empty when the polygon
/// does not reach into the rectangle. The result is only meaningful for
/// even-odd-simple input; self-intersecting polygons produce an
/// even-odd interpretation without failing.
pub fn clip_polygon_to_rect(
    polygon: &[Point],
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
) -> Vec<Point> {
    // Inside tests and segment intersections for each of the four
    // rectangle half-planes in turn.
    let edges: [(bool, bool, f64); 4] = [
        (true, true, min_x),  // x >= min_x
        (true, false, max_x), // x <= max_x
        (false, true, min_y), // y >= min_y
        (false, false, max_y), // y <= max_y
    ];

    let mut output: Vec<Point> = polygon.to_vec();
    for &(is_x, keep_greater, bound) in &edges {
        if output.is_empty() {
            break;
        }
        let input = std::mem::take(&mut output);
        let inside = |p: &Point| {
            let v = if is_x { p.x } else { p.y };
            if keep_greater {
                v >= bound - EPSILON
            } else {
                v <= bound + EPSILON
            }
        };
        let intersect = |a: &Point, b: &Point| -> Point {
            if is_x {
                let t = (bound - a.x) / (b.x - a.x);
                Point::new(bound, a.y + t * (b.y - a.y))
            } else {
                let t = (bound - a.y) / (b.y - a.y);
                Point::new(a.x + t * (b.x - a.x), bound)
            }
        };
        let n = input.len();
        for i in 0..n {
            let current = input[i];
            let prev = input[(i + n - 1) % n];
            match (inside(&prev), inside(&current)) {
                (true, true) => output.push(current),
                (true, false) => output.push(intersect(&prev, &current)),
                (false, true) => {
                    output.push(intersect(&prev, &current));
                    output.push(current);
                }
                (false, false) => {}
            }
        }
    }

    // Drop consecutive duplicates introduced by corner clips.
    let mut cleaned: Vec<Point> = Vec::with_capacity(output.len());
    for p in output {
        if cleaned
            .last()
            .is_none_or(|last: &Point| last.distance_to(&p) > EPSILON)
        {
            cleaned.push(p);
        }
    }
    if cleaned
        .last()
        .is_some_and(|last| cleaned.len() > 1 && cleaned[0].distance_to(last) < EPSILON)
    {
        cleaned.pop();
    }
    cleaned
}
