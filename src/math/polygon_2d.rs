use super::{Point2, Segment2};

/// Computes the signed area of a closed polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[cfg(test)]
#[must_use]
pub(crate) fn signed_area(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Point-in-polygon test using the winding number.
///
/// Points within `tolerance` of the boundary count as inside.
#[must_use]
pub fn point_in_polygon(point: &Point2, polygon: &[Point2], tolerance: f64) -> bool {
    if polygon.len() < 3 {
        return false;
    }
    if point_on_loop(point, polygon, tolerance) {
        return true;
    }
    winding_number(point, polygon) != 0
}

/// Winding number of `p` with respect to the closed loop `verts`.
fn winding_number(p: &Point2, verts: &[Point2]) -> i32 {
    let n = verts.len();
    let mut winding = 0i32;
    for i in 0..n {
        let a = verts[i];
        let b = verts[(i + 1) % n];
        let cross = (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x);
        if a.y <= p.y {
            if b.y > p.y && cross > 0.0 {
                winding += 1;
            }
        } else if b.y <= p.y && cross < 0.0 {
            winding -= 1;
        }
    }
    winding
}

/// Iterates the edges of a closed loop, including the closing edge.
fn loop_edges(points: &[Point2]) -> impl Iterator<Item = Segment2> + '_ {
    (0..points.len()).map(move |i| loop_edge(points, i))
}

/// Returns `true` if `p` lies on any edge of the closed loop.
#[must_use]
pub fn point_on_loop(p: &Point2, points: &[Point2], tolerance: f64) -> bool {
    points.len() >= 2 && loop_edges(points).any(|e| e.contains_point(p, tolerance))
}

/// Returns `true` if the segment `a`–`b` lies along the closed loop.
///
/// The segment may span several consecutive edges as long as every loop
/// vertex between its endpoints lies on the segment, so a straight side
/// split by extra vertices still counts.
#[must_use]
pub fn segment_on_loop(a: &Point2, b: &Point2, points: &[Point2], tolerance: f64) -> bool {
    let n = points.len();
    if n < 2 {
        return false;
    }
    let seg = Segment2::new(*a, *b);
    (0..n)
        .filter(|&i| loop_edge(points, i).contains_point(a, tolerance))
        .any(|i| {
            run_reaches(points, &seg, i, true, tolerance)
                || run_reaches(points, &seg, i, false, tolerance)
        })
}

fn loop_edge(points: &[Point2], i: usize) -> Segment2 {
    let n = points.len();
    Segment2::new(points[i % n], points[(i + 1) % n])
}

/// Walks the loop from edge `first` (which holds `seg.start`) until an edge
/// holds `seg.end`. Each step crosses a loop vertex, which must itself lie
/// on `seg`.
fn run_reaches(
    points: &[Point2],
    seg: &Segment2,
    first: usize,
    forward: bool,
    tolerance: f64,
) -> bool {
    let n = points.len();
    for k in 0..n {
        let i = if forward { first + k } else { first + n - k };
        if loop_edge(points, i).contains_point(&seg.end, tolerance) {
            return true;
        }
        let joint = if forward { (i + 1) % n } else { i % n };
        if !seg.contains_point(&points[joint], tolerance) {
            return false;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn unit_square() -> Vec<Point2> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ]
    }

    #[test]
    fn signed_area_orientation() {
        let mut sq = unit_square();
        assert_relative_eq!(signed_area(&sq), 1.0);
        sq.reverse();
        assert_relative_eq!(signed_area(&sq), -1.0);
        assert_relative_eq!(signed_area(&sq[..2]), 0.0);
    }

    #[test]
    fn point_in_polygon_inside_outside_boundary() {
        let sq = unit_square();
        assert!(point_in_polygon(&Point2::new(0.5, 0.5), &sq, 1e-9));
        assert!(!point_in_polygon(&Point2::new(1.5, 0.5), &sq, 1e-9));
        assert!(point_in_polygon(&Point2::new(1.0, 0.5), &sq, 1e-9));
    }

    #[test]
    fn point_in_concave_polygon() {
        // L-shape: the notch at (1.5, 1.5) is outside.
        let l = vec![
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(2.0, 1.0),
            Point2::new(1.0, 1.0),
            Point2::new(1.0, 2.0),
            Point2::new(0.0, 2.0),
        ];
        assert!(point_in_polygon(&Point2::new(0.5, 1.5), &l, 1e-9));
        assert!(!point_in_polygon(&Point2::new(1.5, 1.5), &l, 1e-9));
    }

    #[test]
    fn segment_on_loop_matches_partial_edge() {
        let sq = unit_square();
        let a = Point2::new(0.2, 0.0);
        let b = Point2::new(0.8, 0.0);
        assert!(segment_on_loop(&a, &b, &sq, 1e-9));
        // Closing edge (0,1) -> (0,0).
        assert!(segment_on_loop(&Point2::new(0.0, 0.7), &Point2::new(0.0, 0.1), &sq, 1e-9));
    }

    #[test]
    fn segment_across_loop_is_not_on_it() {
        let sq = unit_square();
        // Endpoints on two different edges.
        assert!(!segment_on_loop(&Point2::new(0.0, 0.5), &Point2::new(0.5, 0.0), &sq, 1e-9));
        assert!(!segment_on_loop(&Point2::new(0.2, 0.2), &Point2::new(0.8, 0.2), &sq, 1e-9));
    }

    #[test]
    fn boundary_tolerance_is_caller_supplied() {
        let sq = unit_square();
        let near = Point2::new(1.0 + 1e-7, 0.5);
        assert!(!point_in_polygon(&near, &sq, 1e-9));
        assert!(point_in_polygon(&near, &sq, 1e-6));
    }

    #[test]
    fn segment_on_loop_spans_split_vertices() {
        // Bottom side traced with an extra vertex at (5, 4).
        let traced = vec![
            Point2::new(4.0, 4.0),
            Point2::new(5.0, 4.0),
            Point2::new(6.0, 4.0),
            Point2::new(6.0, 6.0),
            Point2::new(4.0, 6.0),
        ];
        let a = Point2::new(4.0, 4.0);
        let b = Point2::new(6.0, 4.0);
        assert!(segment_on_loop(&a, &b, &traced, 1e-9));
        assert!(segment_on_loop(&b, &a, &traced, 1e-9));
        assert!(segment_on_loop(&Point2::new(4.5, 4.0), &Point2::new(5.5, 4.0), &traced, 1e-9));
        // Runs past the split side onto the closing edge (4,6) -> (4,4).
        assert!(segment_on_loop(&Point2::new(4.0, 5.0), &Point2::new(4.0, 4.0), &traced, 1e-9));
    }

    #[test]
    fn segment_around_a_corner_is_not_on_loop() {
        let traced = vec![
            Point2::new(4.0, 4.0),
            Point2::new(5.0, 4.0),
            Point2::new(6.0, 4.0),
            Point2::new(6.0, 6.0),
            Point2::new(4.0, 6.0),
        ];
        // Both endpoints on the loop, but the path between them turns a corner.
        assert!(!segment_on_loop(&Point2::new(5.0, 4.0), &Point2::new(6.0, 5.0), &traced, 1e-9));
        // Chord across the interior.
        assert!(!segment_on_loop(&Point2::new(4.0, 5.0), &Point2::new(6.0, 5.0), &traced, 1e-9));
    }
}
