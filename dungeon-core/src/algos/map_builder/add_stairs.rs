use super::{LayoutState, MapBuilder};
use crate::{algos::rng::Mulberry32, types::RoleIndices};

impl MapBuilder<'_> {
    // Only the "S" label excludes a point here, unlike the exit pick which
    // also checks the Start index.
    pub(super) fn add_stairs(state: &LayoutState, rng: &mut Mulberry32) -> LayoutState {
        let candidates = state
            .non_blank()
            .into_iter()
            .filter(|idx| !state.is_labelled_start(*idx))
            .collect::<Vec<_>>();

        let stairs = rng.pick(&candidates).copied();

        LayoutState {
            roles: RoleIndices {
                stairs,
                ..state.roles
            },
            ..state.clone()
        }
    }
}
