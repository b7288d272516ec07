use std::{
    fmt::{Display, Formatter},
    hash::Hash,
};

use serde::{Deserialize, Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const ZERO: Vector2 = Vector2::new(0.0, 0.0);
    pub const UP: Vector2 = Vector2::new(0.0, -1.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Vector2 { x, y }
    }

    // Computes the euclidean distance between two vectors
    pub fn distance(&self, other: &Vector2) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    pub fn length(&self) -> f64 {
        self.distance(&Vector2::ZERO)
    }

    pub fn add(&self, other: &Vector2) -> Vector2 {
        Vector2::new(self.x + other.x, self.y + other.y)
    }

    pub fn sub(&self, other: &Vector2) -> Vector2 {
        Vector2::new(self.x - other.x, self.y - other.y)
    }

    pub fn scaled_by(&self, factor: f64) -> Vector2 {
        Vector2::new(self.x * factor, self.y * factor)
    }

    pub fn midpoint(&self, other: &Vector2) -> Vector2 {
        Vector2::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// Rotates the vector a quarter turn, keeping its length.
    pub fn perpendicular(&self) -> Vector2 {
        Vector2::new(-self.y, self.x)
    }

    /// Returns the unit vector pointing the same way, or `None` for a
    /// zero-length vector.
    pub fn normalized(&self) -> Option<Vector2> {
        let length = self.length();

        if length == 0.0 || !length.is_finite() {
            return None;
        }

        Some(Vector2::new(self.x / length, self.y / length))
    }

    // Sign of the cross product (b - a) x (c - a): positive when `c` lies
    // counter-clockwise of the directed line a -> b.
    pub fn orientation(a: &Vector2, b: &Vector2, c: &Vector2) -> f64 {
        (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
    }
}

impl Display for Vector2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PointType {
    Feature,
    Danger,
    Treasure,
    Blank,
}

impl PointType {
    pub fn is_blank(&self) -> bool {
        matches!(self, PointType::Blank)
    }
}

impl Display for PointType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PointType::Feature => write!(f, "feature"),
            PointType::Danger => write!(f, "danger"),
            PointType::Treasure => write!(f, "treasure"),
            PointType::Blank => write!(f, "blank"),
        }
    }
}

/// The text drawn inside a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    Start,
    Goal,
    Number(u8),
}

impl Display for Label {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Label::Start => write!(f, "S"),
            Label::Goal => write!(f, "G"),
            Label::Number(number) => write!(f, "{}", number),
        }
    }
}

impl Serialize for Label {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One of the seven fixed layout locations. `id` runs 1-6 clockwise around
/// the ring starting at the top, 7 is the centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub id: u8,
    pub position: Vector2,
}

impl Point {
    pub const fn new(id: u8, x: f64, y: f64) -> Self {
        Point {
            id,
            position: Vector2::new(x, y),
        }
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} {}", self.id, self.position)
    }
}

/// An undirected connection between two point indices.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
}

impl Edge {
    pub const fn new(from: usize, to: usize) -> Self {
        Edge { from, to }
    }

    pub fn touches(&self, index: usize) -> bool {
        self.from == index || self.to == index
    }

    pub fn shares_endpoint_with(&self, other: &Edge) -> bool {
        self.touches(other.from) || self.touches(other.to)
    }

    /// Whether the two edges properly cross when drawn over `points`.
    /// Edges sharing an endpoint never cross, and collinear or touching
    /// configurations are not counted as crossings.
    pub fn crosses_with(&self, other: &Edge, points: &[Point]) -> bool {
        if self.shares_endpoint_with(other) {
            return false;
        }

        let a = &points[self.from].position;
        let b = &points[self.to].position;
        let c = &points[other.from].position;
        let d = &points[other.to].position;

        let o1 = Vector2::orientation(a, b, c);
        let o2 = Vector2::orientation(a, b, d);
        let o3 = Vector2::orientation(c, d, a);
        let o4 = Vector2::orientation(c, d, b);

        o1 * o2 < 0.0 && o3 * o4 < 0.0
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        (self.from == other.from && self.to == other.to)
            || (self.from == other.to && self.to == other.from)
    }
}

impl Eq for Edge {}

impl Display for Edge {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -- {}", self.from, self.to)
    }
}

// Since we consider edges to be undirected, we need to implement a custom hash function
// to ensure that the hash is the same regardless of the order of the points
impl Hash for Edge {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.from.min(self.to).hash(state);
        self.from.max(self.to).hash(state);
    }
}

/// Named slots holding point indices. A `None` slot means the feature is
/// absent from this generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RoleIndices {
    pub start: Option<usize>,
    pub two: Option<usize>,
    pub three: Option<usize>,
    pub four: Option<usize>,
    pub five: Option<usize>,
    pub goal: Option<usize>,
    pub key1: Option<usize>,
    pub key2: Option<usize>,
    pub exit: Option<usize>,
    pub stairs: Option<usize>,
}

impl RoleIndices {
    pub fn is_key(&self, index: usize) -> bool {
        self.key1 == Some(index) || self.key2 == Some(index)
    }

    pub fn has_keys(&self) -> bool {
        self.key1.is_some() || self.key2.is_some()
    }
}

#[cfg_attr(feature = "cli", derive(clap::Args))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawOptions {
    /// Lock the goal and hide one or two keys in the dungeon
    #[cfg_attr(feature = "cli", arg(long))]
    pub use_keys: bool,

    /// Place patrols on open passages
    #[cfg_attr(feature = "cli", arg(long))]
    pub use_patrols: bool,

    /// Trap some of the doors
    #[cfg_attr(feature = "cli", arg(long))]
    pub use_traps: bool,

    /// Mark the entrance and pick an exit
    #[cfg_attr(feature = "cli", arg(long))]
    pub use_egress: bool,

    /// Place stairs leading to another level
    #[cfg_attr(feature = "cli", arg(long))]
    pub use_stairs: bool,
}

/// Everything needed to regenerate a map: replaying `options` on a
/// generator freshly seeded with `seed` gives back the same dungeon.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MapSession {
    pub seed: u32,
    #[serde(default)]
    pub options: DrawOptions,
}

impl MapSession {
    pub fn new(seed: u32, options: DrawOptions) -> Self {
        MapSession { seed, options }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapPoint {
    pub id: u8,
    pub position: Vector2,
    pub kind: PointType,
    pub label: Option<Label>,
    pub is_key: bool,
    pub is_locked_goal: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MapEdge {
    pub from: usize,
    pub to: usize,
    pub is_secret: bool,
    pub is_door: bool,
    pub is_patrol: bool,
    pub is_trap: bool,
}

impl MapEdge {
    pub fn new(edge: Edge) -> Self {
        MapEdge {
            from: edge.from,
            to: edge.to,
            is_secret: false,
            is_door: false,
            is_patrol: false,
            is_trap: false,
        }
    }

    pub fn edge(&self) -> Edge {
        Edge::new(self.from, self.to)
    }
}

/// A glyph anchored on a point, pushed outwards along `direction`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Badge {
    pub index: usize,
    pub direction: Vector2,
}

/// The finished output of one `draw` call, ready for a renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DungeonMap {
    pub width: f64,
    pub height: f64,
    pub center: Vector2,
    pub points: Vec<MapPoint>,
    pub edges: Vec<MapEdge>,
    pub roles: RoleIndices,
    pub entrance: Option<Badge>,
    pub exit: Option<Badge>,
    pub stairs: Option<Badge>,
}

impl DungeonMap {
    pub fn non_blank_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.points
            .iter()
            .enumerate()
            .filter(|(_, point)| !point.kind.is_blank())
            .map(|(idx, _)| idx)
    }

    pub fn degree_of(&self, index: usize) -> usize {
        self.edges
            .iter()
            .filter(|edge| edge.edge().touches(index))
            .count()
    }
}

#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapStyle {
    #[default]
    Ink,
    Blueprint,
}
