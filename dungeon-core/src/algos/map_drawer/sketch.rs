use super::{DrawConfig, MapDrawer};
use crate::types::{Badge, DungeonMap, MapEdge, MapPoint, PointType, Vector2};

use svg::{
    Document,
    node::element::{Circle, Line, Polygon, Rectangle, Text},
};
use tracing::event;

const LOCK_GLYPH: &str = "\u{1F512}";
const KEY_GLYPH: &str = "\u{1F5DD}";
const SKULL_GLYPH: &str = "\u{2620}";
const MINE_GLYPH: &str = "\u{2739}";
const STAIRS_GLYPH: &str = "\u{21C5}";
const ENTRANCE_TEXT: &str = "IN";
const EXIT_TEXT: &str = "OUT";

const FONT_FAMILY: &str = "serif";
const SECRET_DASH: &str = "8 6";

// Offsets below are multiples of the node radius.
const DOOR_TICK_LENGTH: f64 = 0.45;
const TRAP_OFFSET: f64 = 0.6;
const BADGE_OFFSET: f64 = 1.9;
const KEY_OFFSET: f64 = 0.9;

pub(super) struct SketchMapDrawer {
    background: &'static str,
    line: &'static str,
    feature: &'static str,
    danger: &'static str,
    treasure: &'static str,
    text: &'static str,
    accent: &'static str,
}

impl SketchMapDrawer {
    pub(super) const INK: SketchMapDrawer = SketchMapDrawer {
        background: "#f4ecd8",
        line: "#2b2118",
        feature: "#fdfaf2",
        danger: "#c8553d",
        treasure: "#e0b73a",
        text: "#2b2118",
        accent: "#7a1f1f",
    };

    pub(super) const BLUEPRINT: SketchMapDrawer = SketchMapDrawer {
        background: "#123a66",
        line: "#e6f0ff",
        feature: "#1d4f86",
        danger: "#b84a62",
        treasure: "#d9b44a",
        text: "#e6f0ff",
        accent: "#ffd166",
    };
}

impl MapDrawer for SketchMapDrawer {
    fn draw(&self, map: &DungeonMap, config: &DrawConfig) -> Document {
        let mut document = Document::new()
            .set("width", map.width)
            .set("height", map.height)
            .set("viewBox", format!("0 0 {} {}", map.width, map.height));

        document = document.add(
            Rectangle::new()
                .set("x", 0)
                .set("y", 0)
                .set("width", map.width)
                .set("height", map.height)
                .set("fill", self.background),
        );

        for edge in map.edges.iter() {
            let (Some(from), Some(to)) = (map.points.get(edge.from), map.points.get(edge.to))
            else {
                event!(
                    tracing::Level::ERROR,
                    "Edge {} -- {} points outside the layout!",
                    edge.from,
                    edge.to
                );
                continue;
            };

            document = self.draw_edge(document, edge, &from.position, &to.position, config);
        }

        // Nodes go on top so edges end at their outline.
        for point in map.points.iter().filter(|point| !point.kind.is_blank()) {
            document = self.draw_point(document, point, config);
        }

        let badges = [
            (map.entrance, ENTRANCE_TEXT),
            (map.exit, EXIT_TEXT),
            (map.stairs, STAIRS_GLYPH),
        ];

        for (badge, glyph) in badges
            .into_iter()
            .filter_map(|(badge, glyph)| badge.map(|badge| (badge, glyph)))
        {
            document = self.draw_badge(document, map, &badge, glyph, config);
        }

        document
    }
}

impl SketchMapDrawer {
    fn draw_edge(
        &self,
        mut document: Document,
        edge: &MapEdge,
        from: &Vector2,
        to: &Vector2,
        config: &DrawConfig,
    ) -> Document {
        let mut line = Line::new()
            .set("x1", from.x)
            .set("y1", from.y)
            .set("x2", to.x)
            .set("y2", to.y)
            .set("stroke", self.line)
            .set("stroke-width", config.stroke_width);

        if edge.is_secret {
            line = line.set("stroke-dasharray", SECRET_DASH);
        }

        document = document.add(line);

        let midpoint = from.midpoint(to);
        let normal = to
            .sub(from)
            .normalized()
            .map(|direction| direction.perpendicular())
            .unwrap_or(Vector2::UP);

        if edge.is_door {
            let half_tick = normal.scaled_by(config.node_radius * DOOR_TICK_LENGTH);
            let tick_from = midpoint.sub(&half_tick);
            let tick_to = midpoint.add(&half_tick);

            document = document.add(
                Line::new()
                    .set("x1", tick_from.x)
                    .set("y1", tick_from.y)
                    .set("x2", tick_to.x)
                    .set("y2", tick_to.y)
                    .set("stroke", self.line)
                    .set("stroke-width", config.stroke_width * 2.0),
            );
        }

        if edge.is_patrol {
            document = document.add(self.glyph(SKULL_GLYPH, &midpoint, config, self.accent));
        }

        if edge.is_trap {
            let anchor = midpoint.add(&normal.scaled_by(config.node_radius * TRAP_OFFSET));
            document = document.add(self.glyph(MINE_GLYPH, &anchor, config, self.accent));
        }

        document
    }

    fn draw_point(
        &self,
        mut document: Document,
        point: &MapPoint,
        config: &DrawConfig,
    ) -> Document {
        let Vector2 { x, y } = point.position;
        let radius = config.node_radius;

        match point.kind {
            PointType::Feature => {
                document = document.add(
                    Circle::new()
                        .set("cx", x)
                        .set("cy", y)
                        .set("r", radius)
                        .set("fill", self.feature)
                        .set("stroke", self.line)
                        .set("stroke-width", config.stroke_width),
                );
            }
            PointType::Danger => {
                let half_base = radius * 3_f64.sqrt() / 2.0;
                let corners = [
                    Vector2::new(x, y - radius),
                    Vector2::new(x + half_base, y + radius / 2.0),
                    Vector2::new(x - half_base, y + radius / 2.0),
                ];
                document = document.add(self.polygon(&corners, self.danger, config));
            }
            PointType::Treasure => {
                let corners = [
                    Vector2::new(x, y - radius),
                    Vector2::new(x + radius, y),
                    Vector2::new(x, y + radius),
                    Vector2::new(x - radius, y),
                ];
                document = document.add(self.polygon(&corners, self.treasure, config));
            }
            PointType::Blank => return document,
        }

        let label = if point.is_locked_goal {
            Some(LOCK_GLYPH.to_string())
        } else {
            point.label.map(|label| label.to_string())
        };

        if let Some(label) = label {
            document = document.add(self.glyph(&label, &point.position, config, self.text));
        }

        if point.is_key {
            let anchor = point
                .position
                .add(&Vector2::new(radius * KEY_OFFSET, radius * KEY_OFFSET));
            document = document.add(self.glyph(KEY_GLYPH, &anchor, config, self.accent));
        }

        document
    }

    fn draw_badge(
        &self,
        document: Document,
        map: &DungeonMap,
        badge: &Badge,
        glyph: &str,
        config: &DrawConfig,
    ) -> Document {
        let Some(point) = map.points.get(badge.index) else {
            event!(
                tracing::Level::ERROR,
                "Badge {} anchored outside the layout!",
                badge.index
            );
            return document;
        };

        let anchor = point
            .position
            .add(&badge.direction.scaled_by(config.node_radius * BADGE_OFFSET));

        document.add(self.glyph(glyph, &anchor, config, self.accent))
    }

    fn polygon(&self, corners: &[Vector2], fill: &str, config: &DrawConfig) -> Polygon {
        let points = corners
            .iter()
            .map(|corner| format!("{:.2},{:.2}", corner.x, corner.y))
            .collect::<Vec<_>>()
            .join(" ");

        Polygon::new()
            .set("points", points)
            .set("fill", fill)
            .set("stroke", self.line)
            .set("stroke-width", config.stroke_width)
    }

    fn glyph(&self, content: &str, anchor: &Vector2, config: &DrawConfig, fill: &str) -> Text {
        Text::new(content)
            .set("x", anchor.x)
            .set("y", anchor.y)
            .set("fill", fill)
            .set("font-family", FONT_FAMILY)
            .set("font-size", config.node_radius * 0.9)
            .set("text-anchor", "middle")
            .set("dominant-baseline", "central")
    }
}
