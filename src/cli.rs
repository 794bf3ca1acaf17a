//! Command-line and environment configuration.

use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use clap::{Parser, ValueEnum};

use crate::core::{MapSource, SessionSettings};
use crate::types::{DEFAULT_FPS, MAX_MAZE_SIZE};

/// Which map source to start from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MapKind {
    /// Built-in 11x11 pillar map
    Default,
    /// JSON map file (see --map-file)
    File,
    /// Random perfect maze (see --maze-size, --seed)
    Generated,
}

#[derive(Debug, Parser)]
#[command(
    name = "tui-raycaster",
    version,
    about = "First-person raycasting maze walker for the terminal"
)]
pub struct Cli {
    /// Map source
    #[arg(long, value_enum, default_value_t = MapKind::Default, env = "RAYCASTER_MAP")]
    pub map: MapKind,

    /// Map file used with --map file
    #[arg(long, default_value = "maze.json", env = "RAYCASTER_MAP_FILE")]
    pub map_file: PathBuf,

    /// Rooms per side of a generated maze
    #[arg(
        long,
        default_value_t = 7,
        value_parser = clap::value_parser!(u32).range(1..=MAX_MAZE_SIZE as i64),
        env = "RAYCASTER_MAZE_SIZE"
    )]
    pub maze_size: u32,

    /// Seed for maze generation (defaults to the current time)
    #[arg(long, env = "RAYCASTER_SEED")]
    pub seed: Option<u32>,

    /// Percentage of screen columns that get their own ray
    #[arg(
        long,
        default_value_t = 100,
        value_parser = clap::value_parser!(u32).range(1..=100),
        env = "RAYCASTER_RESOLUTION"
    )]
    pub resolution: u32,

    /// Target frames per second
    #[arg(
        long,
        default_value_t = DEFAULT_FPS,
        value_parser = clap::value_parser!(u32).range(1..=240),
        env = "RAYCASTER_FPS"
    )]
    pub fps: u32,

    /// Log file (defaults to tui-raycaster.log in the temp directory)
    #[arg(long, env = "RAYCASTER_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn map_source(&self, seed: u32) -> MapSource {
        match self.map {
            MapKind::Default => MapSource::StaticDefault,
            MapKind::File => MapSource::FileBacked(self.map_file.clone()),
            MapKind::Generated => MapSource::Generated {
                size: self.maze_size,
                seed,
            },
        }
    }

    pub fn settings(&self) -> SessionSettings {
        SessionSettings {
            resolution_pct: self.resolution,
            ..SessionSettings::default()
        }
    }

    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("tui-raycaster.log"))
    }

    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs(1) / self.fps.max(1)
    }
}

/// Seed derived from the wall clock, for unseeded maze generation.
pub fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as u32 ^ d.subsec_nanos())
        .unwrap_or(1)
}
