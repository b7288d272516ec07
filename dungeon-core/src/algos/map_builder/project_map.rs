use super::{LayoutState, MapBuilder};
use crate::{
    algos::layout::Layout,
    constants::POINT_COUNT,
    types::{Badge, DrawOptions, DungeonMap, MapEdge, MapPoint, Point, Vector2},
};

impl MapBuilder<'_> {
    pub(super) fn project_map(
        points: &[Point; POINT_COUNT],
        width: f64,
        height: f64,
        state: &LayoutState,
        edges: Vec<MapEdge>,
        options: &DrawOptions,
    ) -> DungeonMap {
        let roles = state.roles;
        let center = Layout::center_of(width, height);

        let map_points = points
            .iter()
            .enumerate()
            .map(|(idx, point)| MapPoint {
                id: point.id,
                position: point.position,
                kind: state.types[idx],
                label: state.labels[idx],
                is_key: roles.is_key(idx),
                is_locked_goal: options.use_keys && roles.goal == Some(idx),
            })
            .collect();

        let badge_at = |idx: usize| Badge {
            index: idx,
            direction: Self::direction_from_center(&center, &points[idx].position),
        };

        let entrance = if options.use_egress {
            roles.start.map(badge_at)
        } else {
            None
        };

        DungeonMap {
            width,
            height,
            center,
            points: map_points,
            edges,
            roles,
            entrance,
            exit: roles.exit.map(badge_at),
            stairs: roles.stairs.map(badge_at),
        }
    }

    // The centre point has no outward direction; its badges point up.
    fn direction_from_center(center: &Vector2, position: &Vector2) -> Vector2 {
        position.sub(center).normalized().unwrap_or(Vector2::UP)
    }
}
