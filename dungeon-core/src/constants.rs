use crate::types::PointType;

pub(crate) const POINT_COUNT: usize = 7;
pub(crate) const RING_POINT_COUNT: usize = 6;
pub(crate) const CENTER_INDEX: usize = 6;

// Radius of the outer ring relative to the smaller canvas dimension.
pub(crate) const LAYOUT_RADIUS_FACTOR: f64 = 0.36;

pub(crate) const POINT_TYPES: [PointType; POINT_COUNT] = [
    PointType::Feature,
    PointType::Feature,
    PointType::Feature,
    PointType::Danger,
    PointType::Danger,
    PointType::Treasure,
    PointType::Blank,
];

// Ring edges first, then the spokes to the centre. The order is part of
// the generator output and must stay fixed.
pub(crate) const CANDIDATE_EDGES: [(usize, usize); 12] = [
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 4),
    (4, 5),
    (5, 0),
    (0, CENTER_INDEX),
    (1, CENTER_INDEX),
    (2, CENTER_INDEX),
    (3, CENTER_INDEX),
    (4, CENTER_INDEX),
    (5, CENTER_INDEX),
];

pub(crate) const MAX_EDGE_TARGET: usize = 6;
pub(crate) const MAX_DOOR_EDGES: usize = 2;

pub(crate) const MIN_PATROL_EDGES: usize = 1;
pub(crate) const MAX_PATROL_EDGES: usize = 2;
pub(crate) const MIN_TRAP_EDGES: usize = 1;
pub(crate) const MAX_TRAP_EDGES: usize = 2;

pub(crate) const TWO_KEY_PROB: f64 = 0.5;
