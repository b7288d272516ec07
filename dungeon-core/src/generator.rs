use crate::{
    algos::{Layout, MapBuilder, Mulberry32, entropy_seed},
    constants::POINT_COUNT,
    error::GeneratorError,
    types::{DrawOptions, DungeonMap, MapSession, Point},
};

use rayon::prelude::*;
use tracing::{Level, event, span};

/// Owns the fixed seven-point layout and the random stream. Each `draw`
/// recomputes the whole dungeon from the current stream position; the
/// stream itself only restarts through `set_seed`.
#[derive(Debug, Clone)]
pub struct DungeonGenerator {
    width: f64,
    height: f64,
    points: [Point; POINT_COUNT],
    seed: u32,
    rng: Mulberry32,
    // Stream position the current map was drawn from.
    draw_state: u32,
    options: DrawOptions,
    map: Option<DungeonMap>,
}

impl DungeonGenerator {
    /// Creates a generator for a `width` x `height` canvas. Without a seed
    /// one is derived from the clock and thread-local entropy.
    ///
    /// # Errors
    ///
    /// - [GeneratorError::InvalidDimensions] if either side is not a finite
    ///   positive number.
    pub fn new(width: f64, height: f64, seed: Option<u32>) -> Result<Self, GeneratorError> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(GeneratorError::InvalidDimensions { width, height });
        }

        let seed = seed.unwrap_or_else(entropy_seed);

        event!(
            Level::DEBUG,
            "New generator for {}x{} canvas with seed {}",
            width,
            height,
            seed
        );

        Ok(DungeonGenerator {
            width,
            height,
            points: Layout::compute(width, height),
            seed,
            rng: Mulberry32::new(seed),
            draw_state: seed,
            options: DrawOptions::default(),
            map: None,
        })
    }

    /// Restores a previously generated map from its session and draws it.
    pub fn from_session(
        width: f64,
        height: f64,
        session: &MapSession,
    ) -> Result<Self, GeneratorError> {
        let mut generator = Self::new(width, height, Some(session.seed))?;
        generator.draw(session.options);

        Ok(generator)
    }

    /// Restarts the random stream. The current map is kept until the next
    /// `draw`.
    pub fn set_seed(&mut self, seed: u32) {
        self.seed = seed;
        self.rng.reseed(seed);
    }

    pub fn draw(&mut self, options: DrawOptions) -> &DungeonMap {
        let span = span!(Level::DEBUG, "draw", seed = self.seed);
        let _guard = span.enter();

        let draw_state = self.rng.state();
        let map =
            MapBuilder::new(&self.points, self.width, self.height).build(&options, &mut self.rng);

        self.draw_state = draw_state;
        self.options = options;
        self.map.insert(map)
    }

    pub fn map(&self) -> Option<&DungeonMap> {
        self.map.as_ref()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// The stream position and options of the last `draw`. Replaying it
    /// with `from_session` reproduces the current map.
    pub fn session(&self) -> MapSession {
        MapSession::new(self.draw_state, self.options)
    }
}

/// Generates one map per seed, each from a freshly seeded generator. Maps
/// are built in parallel and returned in seed order.
pub fn generate_batch(
    width: f64,
    height: f64,
    seeds: &[u32],
    options: DrawOptions,
) -> Result<Vec<DungeonMap>, GeneratorError> {
    let batch_start = std::time::Instant::now();

    let maps = seeds
        .par_iter()
        .map(|seed| {
            let mut generator = DungeonGenerator::new(width, height, Some(*seed))?;
            generator.draw(options);
            Ok(generator.map.take())
        })
        .collect::<Result<Vec<_>, GeneratorError>>()?
        .into_iter()
        .flatten()
        .collect::<Vec<_>>();

    event!(
        Level::DEBUG,
        "Generated {} maps in {}ms",
        maps.len(),
        batch_start.elapsed().as_millis()
    );

    Ok(maps)
}
