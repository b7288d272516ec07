use crate::types::{DungeonMap, MapStyle};

use svg::Document;

mod sketch;

pub(crate) const STROKE_FACTOR: f64 = 0.006;
pub(crate) const NODE_RADIUS_FACTOR: f64 = 0.055;

pub(crate) struct DrawConfig {
    pub(crate) stroke_width: f64,
    pub(crate) node_radius: f64,
}

impl DrawConfig {
    /// Sizes strokes and nodes relative to the smaller canvas side.
    pub(crate) fn for_canvas(width: f64, height: f64) -> Self {
        let side = width.min(height);

        DrawConfig {
            stroke_width: (side * STROKE_FACTOR).max(1.0),
            node_radius: side * NODE_RADIUS_FACTOR,
        }
    }
}

pub(crate) trait MapDrawer {
    fn draw(&self, map: &DungeonMap, config: &DrawConfig) -> Document;
}

pub(crate) struct MapDrawerFactory;

impl MapDrawerFactory {
    pub(crate) fn create_drawer(style: MapStyle) -> Box<dyn MapDrawer> {
        match style {
            MapStyle::Ink => Box::new(sketch::SketchMapDrawer::INK),
            MapStyle::Blueprint => Box::new(sketch::SketchMapDrawer::BLUEPRINT),
        }
    }
}
