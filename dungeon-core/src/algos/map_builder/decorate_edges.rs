use super::MapBuilder;
use crate::{
    algos::rng::Mulberry32,
    constants::{MAX_DOOR_EDGES, MAX_PATROL_EDGES, MAX_TRAP_EDGES, MIN_PATROL_EDGES, MIN_TRAP_EDGES},
    types::{DrawOptions, Edge, MapEdge},
};

impl MapBuilder<'_> {
    /// Tags the chosen edges. One edge is always secret (even when it is
    /// the only one), up to two more are doors, the rest stay open.
    /// Patrols walk open edges and traps sit on doors, so the two never
    /// share an edge.
    pub(super) fn decorate_edges(
        edges: &[Edge],
        options: &DrawOptions,
        rng: &mut Mulberry32,
    ) -> Vec<MapEdge> {
        let mut decorated = edges.iter().copied().map(MapEdge::new).collect::<Vec<_>>();

        let mut order = (0..decorated.len()).collect::<Vec<_>>();
        rng.shuffle(&mut order);

        let Some((secret, rest)) = order.split_first() else {
            return decorated;
        };

        let door_count = MAX_DOOR_EDGES.min(rest.len());
        let (doors, open) = rest.split_at(door_count);

        decorated[*secret].is_secret = true;

        for idx in doors {
            decorated[*idx].is_door = true;
        }

        if options.use_patrols {
            for idx in Self::pick_several(open, MIN_PATROL_EDGES, MAX_PATROL_EDGES, rng) {
                decorated[idx].is_patrol = true;
            }
        }

        if options.use_traps {
            for idx in Self::pick_several(doors, MIN_TRAP_EDGES, MAX_TRAP_EDGES, rng) {
                decorated[idx].is_trap = true;
            }
        }

        decorated
    }

    fn pick_several(pool: &[usize], min: usize, max: usize, rng: &mut Mulberry32) -> Vec<usize> {
        if pool.is_empty() {
            return Vec::new();
        }

        let count = rng.range_inclusive(min, max).min(pool.len());

        let mut picked = pool.to_vec();
        rng.shuffle(&mut picked);
        picked.truncate(count);

        picked
    }
}
