use super::{LayoutState, MapBuilder};
use crate::{
    algos::{layout::Layout, rng::Mulberry32},
    constants::POINT_COUNT,
    types::{Label, PointType, RoleIndices},
};

use tinyset::SetUsize;

pub(super) type NeighbourLists = [Vec<usize>; POINT_COUNT];

impl MapBuilder<'_> {
    /// Neighbour lists over every candidate edge whose endpoints are both
    /// non-blank, in candidate edge order.
    pub(super) fn neighbour_lists(types: &[PointType; POINT_COUNT]) -> NeighbourLists {
        let mut neighbours: NeighbourLists = Default::default();

        for edge in Layout::candidate_edges() {
            if types[edge.from].is_blank() || types[edge.to].is_blank() {
                continue;
            }

            neighbours[edge.from].push(edge.to);
            neighbours[edge.to].push(edge.from);
        }

        neighbours
    }

    pub(super) fn assign_roles(
        types: &[PointType; POINT_COUNT],
        rng: &mut Mulberry32,
    ) -> LayoutState {
        let non_blank = (0..POINT_COUNT)
            .filter(|idx| !types[*idx].is_blank())
            .collect::<Vec<_>>();
        let neighbours = Self::neighbour_lists(types);

        let mut assigned = SetUsize::new();

        // The first non-blank point that can reach someone, or any non-blank
        // point at all when the graph has no usable edge.
        let start = non_blank
            .iter()
            .copied()
            .find(|idx| !neighbours[*idx].is_empty())
            .or_else(|| non_blank.first().copied());

        if let Some(start) = start {
            assigned.insert(start);
        }

        let two = start.and_then(|start| {
            let candidates = neighbours[start]
                .iter()
                .copied()
                .filter(|idx| *idx != start)
                .collect::<Vec<_>>();
            rng.pick(&candidates).copied()
        });

        if let Some(two) = two {
            assigned.insert(two);
        }

        let three = {
            let remaining = non_blank
                .iter()
                .copied()
                .filter(|idx| !assigned.contains(*idx))
                .collect::<Vec<_>>();

            let is_adjacent = |anchor: Option<usize>, idx: usize| {
                anchor.is_some_and(|anchor| neighbours[anchor].contains(&idx))
            };

            let candidates = remaining
                .iter()
                .copied()
                .filter(|idx| is_adjacent(start, *idx) || is_adjacent(two, *idx))
                .collect::<Vec<_>>();

            // Falling back to the first remaining point is not random.
            rng.pick(&candidates)
                .copied()
                .or_else(|| remaining.first().copied())
        };

        if let Some(three) = three {
            assigned.insert(three);
        }

        let mut remaining = non_blank
            .iter()
            .copied()
            .filter(|idx| !assigned.contains(*idx))
            .collect::<Vec<_>>();

        // The goal is always the last remaining point, not a random one.
        let goal = remaining.pop();

        rng.shuffle(&mut remaining);
        let four = remaining.first().copied();
        let five = remaining.get(1).copied();

        let mut labels = [None; POINT_COUNT];
        for (role, label) in [
            (start, Label::Start),
            (two, Label::Number(2)),
            (three, Label::Number(3)),
            (four, Label::Number(4)),
            (five, Label::Number(5)),
            (goal, Label::Goal),
        ] {
            if let Some(idx) = role {
                labels[idx] = Some(label);
            }
        }

        LayoutState {
            types: *types,
            labels,
            roles: RoleIndices {
                start,
                two,
                three,
                four,
                five,
                goal,
                ..RoleIndices::default()
            },
        }
    }
}
