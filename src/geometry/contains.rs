use geo::{Coord, LineString, MultiPolygon, Polygon};

/// Where a point sits relative to a closed ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingPosition {
    Inside,
    OnBoundary,
    Outside,
}

/// Classify `point` against a closed ring by even-odd ray casting.
///
/// The ray runs toward +x. A point exactly on a ring segment (vertices
/// included) reports `OnBoundary` regardless of the crossing count, which
/// is what makes every downstream containment test boundary-inclusive.
/// Rings must carry an explicit closing point (`geo::Polygon` guarantees
/// this for its rings); anything shorter than a closed triangle is treated
/// as containing nothing.
pub fn ring_position(ring: &LineString<f64>, point: Coord<f64>) -> RingPosition {
    let coords = &ring.0;
    // 3 distinct vertices + closing point
    if coords.len() < 4 {
        return RingPosition::Outside;
    }

    let mut inside = false;
    for edge in coords.windows(2) {
        let (a, b) = (edge[0], edge[1]);
        if on_segment(a, b, point) {
            return RingPosition::OnBoundary;
        }
        // Even-odd rule: count edges crossing the horizontal ray. The
        // half-open y test keeps a vertex shared by two edges from being
        // counted twice.
        if (a.y > point.y) != (b.y > point.y) {
            let x_at = a.x + (point.y - a.y) / (b.y - a.y) * (b.x - a.x);
            if point.x < x_at {
                inside = !inside;
            }
        }
    }

    if inside { RingPosition::Inside } else { RingPosition::Outside }
}

/// Boundary-inclusive polygon containment: inside or on the shell, and not
/// strictly inside any hole. A point on a hole's ring is still contained.
pub fn polygon_contains(polygon: &Polygon<f64>, point: Coord<f64>) -> bool {
    match ring_position(polygon.exterior(), point) {
        RingPosition::Outside => false,
        RingPosition::OnBoundary => true,
        RingPosition::Inside => polygon
            .interiors()
            .iter()
            .all(|hole| ring_position(hole, point) != RingPosition::Inside),
    }
}

/// True if any polygon of `shape` contains `point`.
pub fn multi_polygon_contains(shape: &MultiPolygon<f64>, point: Coord<f64>) -> bool {
    shape.0.iter().any(|polygon| polygon_contains(polygon, point))
}

/// True if `p` lies on the closed segment `ab`.
fn on_segment(a: Coord<f64>, b: Coord<f64>, p: Coord<f64>) -> bool {
    let cross = (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x);
    if cross != 0.0 {
        return false;
    }
    let len2 = (b.x - a.x).powi(2) + (b.y - a.y).powi(2);
    if len2 == 0.0 {
        // Degenerate zero-length edge
        return p == a;
    }
    let dot = (p.x - a.x) * (b.x - a.x) + (p.y - a.y) * (b.y - a.y);
    (0.0..=len2).contains(&dot)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(coords: &[(f64, f64)]) -> LineString<f64> {
        LineString::from(coords.to_vec())
    }

    fn unit_square() -> LineString<f64> {
        ring(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0), (0.0, 0.0)])
    }

    #[test]
    fn ring_classifies_inside_outside_boundary() {
        let square = unit_square();

        assert_eq!(ring_position(&square, Coord { x: 5.0, y: 5.0 }), RingPosition::Inside);
        assert_eq!(ring_position(&square, Coord { x: 15.0, y: 5.0 }), RingPosition::Outside);
        assert_eq!(ring_position(&square, Coord { x: -1.0, y: 5.0 }), RingPosition::Outside);

        // Edge midpoint and corner vertex both count as boundary
        assert_eq!(ring_position(&square, Coord { x: 10.0, y: 5.0 }), RingPosition::OnBoundary);
        assert_eq!(ring_position(&square, Coord { x: 0.0, y: 0.0 }), RingPosition::OnBoundary);
    }

    #[test]
    fn ray_through_a_shared_vertex_counts_once() {
        // Diamond whose left and right vertices sit exactly at the probe's y
        let diamond = ring(&[(0.0, 5.0), (5.0, 0.0), (10.0, 5.0), (5.0, 10.0), (0.0, 5.0)]);

        assert_eq!(ring_position(&diamond, Coord { x: 5.0, y: 5.0 }), RingPosition::Inside);
        assert_eq!(ring_position(&diamond, Coord { x: -3.0, y: 5.0 }), RingPosition::Outside);
        assert_eq!(ring_position(&diamond, Coord { x: 12.0, y: 5.0 }), RingPosition::Outside);
    }

    #[test]
    fn degenerate_rings_contain_nothing() {
        let too_small = ring(&[(0.0, 0.0), (1.0, 1.0), (0.0, 0.0)]);
        assert_eq!(ring_position(&too_small, Coord { x: 0.0, y: 0.0 }), RingPosition::Outside);
        assert_eq!(ring_position(&ring(&[]), Coord { x: 0.0, y: 0.0 }), RingPosition::Outside);
    }

    #[test]
    fn hole_excludes_interior_but_not_its_boundary() {
        let polygon = Polygon::new(
            unit_square(),
            vec![ring(&[(4.0, 4.0), (6.0, 4.0), (6.0, 6.0), (4.0, 6.0), (4.0, 4.0)])],
        );

        // Inside shell, outside hole
        assert!(polygon_contains(&polygon, Coord { x: 2.0, y: 2.0 }));
        // Strictly inside the hole: excluded even though inside the shell
        assert!(!polygon_contains(&polygon, Coord { x: 5.0, y: 5.0 }));
        // On the hole's ring: still contained (boundary-inclusive)
        assert!(polygon_contains(&polygon, Coord { x: 4.0, y: 5.0 }));
        // On the shell: contained
        assert!(polygon_contains(&polygon, Coord { x: 0.0, y: 5.0 }));
    }

    #[test]
    fn multi_polygon_tests_every_disjoint_part() {
        let shape = MultiPolygon(vec![
            Polygon::new(unit_square(), vec![]),
            Polygon::new(
                ring(&[(100.0, 100.0), (110.0, 100.0), (110.0, 110.0), (100.0, 110.0), (100.0, 100.0)]),
                vec![],
            ),
        ]);

        assert!(multi_polygon_contains(&shape, Coord { x: 5.0, y: 5.0 }));
        assert!(multi_polygon_contains(&shape, Coord { x: 105.0, y: 105.0 }));
        assert!(!multi_polygon_contains(&shape, Coord { x: 50.0, y: 50.0 }));
        assert!(!multi_polygon_contains(&MultiPolygon(vec![]), Coord { x: 5.0, y: 5.0 }));
    }

    #[test]
    fn concave_ring_handles_multiple_crossings() {
        // U-shaped ring: the notch between the arms is outside
        let u_shape = ring(&[
            (0.0, 0.0),
            (10.0, 0.0),
            (10.0, 10.0),
            (7.0, 10.0),
            (7.0, 3.0),
            (3.0, 3.0),
            (3.0, 10.0),
            (0.0, 10.0),
            (0.0, 0.0),
        ]);

        assert_eq!(ring_position(&u_shape, Coord { x: 1.5, y: 8.0 }), RingPosition::Inside);
        assert_eq!(ring_position(&u_shape, Coord { x: 8.5, y: 8.0 }), RingPosition::Inside);
        assert_eq!(ring_position(&u_shape, Coord { x: 5.0, y: 8.0 }), RingPosition::Outside);
        assert_eq!(ring_position(&u_shape, Coord { x: 5.0, y: 1.5 }), RingPosition::Inside);
    }
}
