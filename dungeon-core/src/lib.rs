mod algos;
mod constants;
mod error;
mod generator;
mod types;

use algos::{DrawConfig, MapDrawer, MapDrawerFactory};
use tracing::{Level, span};

pub use algos::Mulberry32;
pub use error::GeneratorError;
pub use generator::{DungeonGenerator, generate_batch};
pub use types::{
    Badge, DrawOptions, DungeonMap, Edge, Label, MapEdge, MapPoint, MapSession, MapStyle, Point,
    PointType, RoleIndices, Vector2,
};

/// Projects a finished map onto an SVG document in the given style.
pub fn render_map(map: &DungeonMap, style: MapStyle) -> svg::Document {
    let draw_config = DrawConfig::for_canvas(map.width, map.height);
    let drawer = MapDrawerFactory::create_drawer(style);

    drawer.draw(map, &draw_config)
}

/// Regenerates the map stored in `session` and draws it.
pub fn create_map(
    width: f64,
    height: f64,
    session: &MapSession,
    style: MapStyle,
) -> Result<svg::Document, GeneratorError> {
    let span = span!(Level::DEBUG, "create_map");
    let _guard = span.enter();

    let mut generator = DungeonGenerator::new(width, height, Some(session.seed))?;
    let map = generator.draw(session.options);

    Ok(render_map(map, style))
}
