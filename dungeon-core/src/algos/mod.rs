mod layout;
mod map_builder;
mod map_drawer;
mod rng;

pub(crate) use layout::Layout;
pub(crate) use map_builder::MapBuilder;
pub(crate) use map_drawer::{DrawConfig, MapDrawer, MapDrawerFactory};
pub use rng::Mulberry32;
pub(crate) use rng::entropy_seed;
