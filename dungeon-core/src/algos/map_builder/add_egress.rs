use super::{LayoutState, MapBuilder};
use crate::{algos::rng::Mulberry32, types::RoleIndices};

impl MapBuilder<'_> {
    /// The entrance is always Start; the exit is any other non-blank point.
    pub(super) fn add_egress(state: &LayoutState, rng: &mut Mulberry32) -> LayoutState {
        let exit = state.roles.start.and_then(|start| {
            let candidates = state
                .non_blank()
                .into_iter()
                .filter(|idx| *idx != start && !state.is_labelled_start(*idx))
                .collect::<Vec<_>>();
            rng.pick(&candidates).copied()
        });

        LayoutState {
            roles: RoleIndices {
                exit,
                ..state.roles
            },
            ..state.clone()
        }
    }
}
