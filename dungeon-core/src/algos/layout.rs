use crate::{
    constants::{CANDIDATE_EDGES, CENTER_INDEX, LAYOUT_RADIUS_FACTOR, POINT_COUNT, RING_POINT_COUNT},
    types::{Edge, Point, Vector2},
};

use std::f64::consts::{FRAC_PI_2, FRAC_PI_3};

pub(crate) struct Layout;

impl Layout {
    /// Places six points on a ring starting at the top and walking
    /// clockwise (y grows downwards), plus one point at the centre.
    pub fn compute(width: f64, height: f64) -> [Point; POINT_COUNT] {
        let center = Self::center_of(width, height);
        let radius = LAYOUT_RADIUS_FACTOR * width.min(height);

        let mut points = [Point::new(0, center.x, center.y); POINT_COUNT];

        for (idx, point) in points.iter_mut().take(RING_POINT_COUNT).enumerate() {
            let angle = -FRAC_PI_2 + idx as f64 * FRAC_PI_3;

            *point = Point::new(
                idx as u8 + 1,
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            );
        }

        points[CENTER_INDEX] = Point::new(CENTER_INDEX as u8 + 1, center.x, center.y);

        points
    }

    pub fn center_of(width: f64, height: f64) -> Vector2 {
        Vector2::new(width / 2.0, height / 2.0)
    }

    pub fn candidate_edges() -> impl Iterator<Item = Edge> {
        CANDIDATE_EDGES
            .iter()
            .map(|(from, to)| Edge::new(*from, *to))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_layout_ids_and_center() {
        let points = Layout::compute(800.0, 600.0);

        let ids = points.iter().map(|point| point.id).collect::<Vec<_>>();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7]);

        assert_eq!(points[CENTER_INDEX].position, Vector2::new(400.0, 300.0));
    }

    #[test]
    fn test_layout_ring_radius_uses_smaller_side() {
        let points = Layout::compute(800.0, 600.0);
        let center = points[CENTER_INDEX].position;

        for point in points.iter().take(RING_POINT_COUNT) {
            let radius = point.position.distance(&center);
            assert!(
                (radius - 216.0).abs() < EPSILON,
                "point {} has radius {}",
                point,
                radius
            );
        }
    }

    #[test]
    fn test_layout_starts_at_top_and_goes_clockwise() {
        let points = Layout::compute(100.0, 100.0);

        // First point straight above the centre.
        assert!((points[0].position.x - 50.0).abs() < EPSILON);
        assert!((points[0].position.y - 14.0).abs() < EPSILON);

        // Second point is to the right of the first on a y-down canvas.
        assert!(points[1].position.x > points[0].position.x);
        assert!(points[1].position.y > points[0].position.y);

        // Fourth point straight below the centre.
        assert!((points[3].position.x - 50.0).abs() < EPSILON);
        assert!((points[3].position.y - 86.0).abs() < EPSILON);
    }

    #[test]
    fn test_layout_is_pure() {
        assert_eq!(Layout::compute(320.0, 240.0), Layout::compute(320.0, 240.0));
    }

    #[test]
    fn test_candidate_edges_never_cross() {
        let points = Layout::compute(500.0, 500.0);
        let edges = Layout::candidate_edges().collect::<Vec<_>>();

        assert_eq!(edges.len(), 12);

        for (i, edge) in edges.iter().enumerate() {
            for other in edges.iter().skip(i + 1) {
                assert!(!edge.crosses_with(other, &points), "{} crosses {}", edge, other);
            }
        }
    }
}
