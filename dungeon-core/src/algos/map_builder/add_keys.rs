use super::{LayoutState, MapBuilder};
use crate::{algos::rng::Mulberry32, constants::TWO_KEY_PROB, types::RoleIndices};

impl MapBuilder<'_> {
    /// Hides one or two keys that open the goal. Keys never land on the
    /// goal itself, and two keys never share a point.
    pub(super) fn add_keys(state: &LayoutState, rng: &mut Mulberry32) -> LayoutState {
        let (key1, key2) = Self::pick_key_points(state, rng);

        LayoutState {
            roles: RoleIndices {
                key1,
                key2,
                ..state.roles
            },
            ..state.clone()
        }
    }

    fn pick_key_points(
        state: &LayoutState,
        rng: &mut Mulberry32,
    ) -> (Option<usize>, Option<usize>) {
        let roles = &state.roles;

        let Some(goal) = roles.goal else {
            return (None, None);
        };

        if rng.chance(TWO_KEY_PROB) {
            let early_pool = [roles.two, roles.three]
                .into_iter()
                .flatten()
                .collect::<Vec<_>>();
            let late_pool = [roles.four, roles.five]
                .into_iter()
                .flatten()
                .collect::<Vec<_>>();

            if !early_pool.is_empty() && !late_pool.is_empty() {
                let key1 = rng.pick(&early_pool).copied();
                let key2 = rng.pick(&late_pool).copied();
                return (key1, key2);
            }
        }

        let single_pool = [roles.three, roles.four, roles.five]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>();

        if let Some(key) = rng.pick(&single_pool) {
            return (Some(*key), None);
        }

        let fallback_pool = state
            .non_blank()
            .into_iter()
            .filter(|idx| Some(*idx) != roles.start && *idx != goal)
            .collect::<Vec<_>>();

        (rng.pick(&fallback_pool).copied(), None)
    }
}
