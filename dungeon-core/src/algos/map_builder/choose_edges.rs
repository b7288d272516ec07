use super::{LayoutState, MapBuilder};
use crate::{
    algos::{layout::Layout, rng::Mulberry32},
    constants::{MAX_EDGE_TARGET, POINT_COUNT},
    types::{Edge, Point},
};

use tinyset::SetUsize;
use tracing::event;

impl MapBuilder<'_> {
    /// Picks the passages of the dungeon: the largest set of at most six
    /// candidate edges (required edges included) that does not cross
    /// itself, touches every non-blank point and keeps them all connected.
    /// The first valid combination in shuffled order wins, so the result
    /// is fully determined by the RNG stream.
    pub(super) fn choose_edges(
        points: &[Point; POINT_COUNT],
        state: &LayoutState,
        rng: &mut Mulberry32,
    ) -> Vec<Edge> {
        let non_blank = state.non_blank();

        let valid_edges = Layout::candidate_edges()
            .filter(|edge| !state.types[edge.from].is_blank() && !state.types[edge.to].is_blank())
            .collect::<Vec<_>>();

        let required = Self::required_edges(state, &valid_edges);

        let mut pool = valid_edges
            .iter()
            .copied()
            .filter(|edge| !required.contains(edge))
            .collect::<Vec<_>>();
        rng.shuffle(&mut pool);

        let search = EdgeSearch {
            points,
            non_blank: &non_blank,
            pool: &pool,
        };

        let max_target = MAX_EDGE_TARGET.min(valid_edges.len());

        for target in (1..=max_target).rev() {
            if target < required.len() {
                continue;
            }

            let needed = target - required.len();
            if needed > pool.len() {
                continue;
            }

            let mut chosen = required.clone();
            if search.complete(0, needed, &mut chosen) {
                event!(
                    tracing::Level::DEBUG,
                    "Found {} edges ({} required)",
                    chosen.len(),
                    required.len()
                );
                return chosen;
            }
        }

        if non_blank.len() > 1 {
            event!(
                tracing::Level::WARN,
                "No valid edge set for {} non-blank points",
                non_blank.len()
            );
        }

        Vec::new()
    }

    /// Start-"2" is mandatory, and "3" must hang off Start when it can or
    /// off "2" otherwise.
    fn required_edges(state: &LayoutState, valid_edges: &[Edge]) -> Vec<Edge> {
        let roles = &state.roles;
        let mut required = Vec::with_capacity(2);

        if let (Some(start), Some(two)) = (roles.start, roles.two) {
            let edge = Edge::new(start, two);
            if valid_edges.contains(&edge) {
                required.push(edge);
            }
        }

        if let Some(three) = roles.three {
            let anchored = [roles.start, roles.two]
                .into_iter()
                .flatten()
                .map(|anchor| Edge::new(anchor, three))
                .find(|edge| valid_edges.contains(edge));

            if let Some(edge) = anchored {
                required.push(edge);
            }
        }

        required
    }
}

struct EdgeSearch<'a> {
    points: &'a [Point; POINT_COUNT],
    non_blank: &'a [usize],
    pool: &'a [Edge],
}

impl EdgeSearch<'_> {
    // Standard choose-without-replacement over the pool in index order.
    // A branch stops as soon as its newest edge crosses an earlier one,
    // which cannot change the first valid combination found.
    fn complete(&self, from: usize, needed: usize, chosen: &mut Vec<Edge>) -> bool {
        if needed == 0 {
            return self.is_valid(chosen);
        }

        for idx in from..self.pool.len() {
            if self.pool.len() - idx < needed {
                break;
            }

            let edge = self.pool[idx];

            if chosen
                .iter()
                .any(|other| edge.crosses_with(other, self.points))
            {
                continue;
            }

            chosen.push(edge);

            if self.complete(idx + 1, needed - 1, chosen) {
                return true;
            }

            chosen.pop();
        }

        false
    }

    fn is_valid(&self, edges: &[Edge]) -> bool {
        is_planar(edges, self.points)
            && self
                .non_blank
                .iter()
                .all(|idx| edges.iter().any(|edge| edge.touches(*idx)))
            && is_connected(edges, self.non_blank)
    }
}

pub(crate) fn is_planar(edges: &[Edge], points: &[Point]) -> bool {
    edges.iter().enumerate().all(|(i, edge)| {
        edges
            .iter()
            .skip(i + 1)
            .all(|other| !edge.crosses_with(other, points))
    })
}

/// Whether every point in `nodes` can be reached from the first one
/// walking along `edges`.
pub(crate) fn is_connected(edges: &[Edge], nodes: &[usize]) -> bool {
    let Some(first) = nodes.first().copied() else {
        return true;
    };

    let mut visited = SetUsize::new();
    visited.insert(first);

    let mut stack = vec![first];

    while let Some(node) = stack.pop() {
        for edge in edges {
            let other = if edge.from == node {
                edge.to
            } else if edge.to == node {
                edge.from
            } else {
                continue;
            };

            if visited.insert(other) {
                stack.push(other);
            }
        }
    }

    nodes.iter().all(|node| visited.contains(*node))
}
