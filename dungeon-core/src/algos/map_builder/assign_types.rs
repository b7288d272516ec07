use super::MapBuilder;
use crate::{
    algos::rng::Mulberry32,
    constants::{POINT_COUNT, POINT_TYPES},
    types::PointType,
};

impl MapBuilder<'_> {
    // The shuffled types are handed out in point index order.
    pub(super) fn assign_types(rng: &mut Mulberry32) -> [PointType; POINT_COUNT] {
        let mut types = POINT_TYPES;
        rng.shuffle(&mut types);
        types
    }
}
