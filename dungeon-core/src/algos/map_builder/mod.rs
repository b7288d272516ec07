use super::rng::Mulberry32;
use crate::{
    constants::POINT_COUNT,
    types::{DrawOptions, DungeonMap, Label, Point, PointType, RoleIndices},
};

use tracing::event;

mod add_egress;
mod add_keys;
mod add_stairs;
mod assign_roles;
mod assign_types;
mod choose_edges;
mod decorate_edges;
mod project_map;

/// Per-point assignment produced by the labelling stages. Each stage takes
/// the previous state by reference and hands back a new one.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct LayoutState {
    pub types: [PointType; POINT_COUNT],
    pub labels: [Option<Label>; POINT_COUNT],
    pub roles: RoleIndices,
}

impl LayoutState {
    pub fn non_blank(&self) -> Vec<usize> {
        (0..POINT_COUNT)
            .filter(|idx| !self.types[*idx].is_blank())
            .collect()
    }

    pub fn is_labelled_start(&self, idx: usize) -> bool {
        self.labels[idx] == Some(Label::Start)
    }
}

pub(crate) struct MapBuilder<'a> {
    points: &'a [Point; POINT_COUNT],
    width: f64,
    height: f64,
}

impl<'a> MapBuilder<'a> {
    pub fn new(points: &'a [Point; POINT_COUNT], width: f64, height: f64) -> Self {
        MapBuilder {
            points,
            width,
            height,
        }
    }

    pub fn build(&self, options: &DrawOptions, rng: &mut Mulberry32) -> DungeonMap {
        let build_start = std::time::Instant::now();

        let types = Self::assign_types(rng);
        let state = Self::assign_roles(&types, rng);

        event!(
            tracing::Level::DEBUG,
            "Assigned roles start={:?} two={:?} three={:?} goal={:?}",
            state.roles.start,
            state.roles.two,
            state.roles.three,
            state.roles.goal
        );

        let state = if options.use_keys {
            Self::add_keys(&state, rng)
        } else {
            state
        };

        let state = if options.use_egress {
            Self::add_egress(&state, rng)
        } else {
            state
        };

        let state = if options.use_stairs {
            Self::add_stairs(&state, rng)
        } else {
            state
        };

        let roles_time = std::time::Instant::now();

        let edges = Self::choose_edges(self.points, &state, rng);

        let edges_time = std::time::Instant::now();
        event!(
            tracing::Level::DEBUG,
            "Chose {} edges in {}us",
            edges.len(),
            edges_time.duration_since(roles_time).as_micros()
        );

        let decorated_edges = Self::decorate_edges(&edges, options, rng);

        let map = Self::project_map(
            self.points,
            self.width,
            self.height,
            &state,
            decorated_edges,
            options,
        );

        event!(
            tracing::Level::DEBUG,
            "Built dungeon with {} edges in {}us total",
            map.edges.len(),
            std::time::Instant::now()
                .duration_since(build_start)
                .as_micros()
        );

        map
    }
}
