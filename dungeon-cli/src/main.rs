use dungeon_core::{DrawOptions, DungeonMap, MapSession, MapStyle, generate_batch, render_map};

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, bail};
use clap::Parser;
use svg::save as save_as_svg;
use tracing::{Level, event};

#[derive(Parser, Debug)]
#[command(version, long_about = None)]
struct Args {
    /// Canvas width in pixels
    #[arg(long, default_value_t = 600.0)]
    width: f64,

    /// Canvas height in pixels
    #[arg(long, default_value_t = 600.0)]
    height: f64,

    /// Seed of the first map, random when omitted
    #[arg(long)]
    seed: Option<u32>,

    /// Number of maps to generate from consecutive seeds
    #[arg(short, long, default_value_t = 1)]
    count: u32,

    #[arg(short, long, default_value_t, value_enum)]
    style: MapStyle,

    #[command(flatten)]
    options: DrawOptions,

    /// Regenerate the map stored in a session file instead
    #[arg(
        long,
        value_name = "FILE",
        conflicts_with_all = [
            "seed",
            "count",
            "use_keys",
            "use_patrols",
            "use_traps",
            "use_egress",
            "use_stairs",
        ]
    )]
    restore: Option<PathBuf>,

    /// Write a session file next to every generated map
    #[arg(long)]
    save_session: bool,

    #[arg(short, long)]
    verbose: bool,

    #[arg(short, long, default_value = "generated")]
    output_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            Level::DEBUG
        } else {
            Level::INFO
        })
        .init();

    if args.count == 0 {
        bail!("--count must be at least 1");
    }

    let (first_seed, options) = match &args.restore {
        Some(path) => {
            let session = read_session(path)?;
            event!(
                Level::INFO,
                "Restoring seed {} from {}",
                session.seed,
                path.display()
            );
            (session.seed, session.options)
        }
        None => (
            args.seed.unwrap_or_else(rand::random),
            args.options,
        ),
    };

    let seeds = (0..args.count)
        .map(|offset| first_seed.wrapping_add(offset))
        .collect::<Vec<_>>();

    let maps = generate_batch(args.width, args.height, &seeds, options)
        .context("Failed to generate maps")?;

    ensure_output_dir(&args.output_dir)?;

    for (seed, map) in seeds.iter().zip(maps.iter()) {
        save_map(&args, *seed, map)?;

        if args.save_session {
            save_session(&args.output_dir, &MapSession::new(*seed, options))?;
        }
    }

    Ok(())
}

fn read_session(path: &Path) -> anyhow::Result<MapSession> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read session file {}", path.display()))?;

    serde_json::from_str(&contents)
        .with_context(|| format!("Malformed session file {}", path.display()))
}

fn ensure_output_dir(dir: &Path) -> anyhow::Result<()> {
    let exists = dir
        .try_exists()
        .with_context(|| format!("Error checking for '{}' directory", dir.display()))?;

    if !exists {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create '{}' directory", dir.display()))?;
        event!(Level::INFO, "Directory '{}' created.", dir.display());
    }

    Ok(())
}

fn save_map(args: &Args, seed: u32, map: &DungeonMap) -> anyhow::Result<()> {
    let map_filename = args.output_dir.join(format!("{}-dungeon.svg", seed));
    let document = render_map(map, args.style);

    event!(
        Level::INFO,
        "Saving map as SVG to: {}",
        map_filename.display()
    );

    save_as_svg(&map_filename, &document)
        .with_context(|| format!("Failed to save {}", map_filename.display()))
}

fn save_session(dir: &Path, session: &MapSession) -> anyhow::Result<()> {
    let session_filename = dir.join(format!("{}-session.json", session.seed));
    let contents = serde_json::to_string_pretty(session)?;

    fs::write(&session_filename, contents)
        .with_context(|| format!("Failed to save {}", session_filename.display()))?;

    event!(
        Level::DEBUG,
        "Session written to {}",
        session_filename.display()
    );

    Ok(())
}
