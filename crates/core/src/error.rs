//! Error types for setup-time failures.
//!
//! Every error here is a configuration error: it is raised while a session is
//! being assembled and is never produced by a per-frame operation.

use std::path::PathBuf;

/// Malformed tile data.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid has no rows")]
    Empty,
    #[error("grid row {row} is empty")]
    EmptyRow { row: usize },
    #[error("grid row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("cell ({col}, {row}) has value {value}, expected 0 or 1")]
    InvalidCell { row: usize, col: usize, value: u8 },
    #[error("grid has no open cell")]
    NoOpenCell,
    #[error("tile size must be positive")]
    ZeroTileSize,
}

/// Invalid raycasting or session parameters.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("ray count must be positive")]
    ZeroRayCount,
    #[error("max depth must be positive, got {0}")]
    NonPositiveMaxDepth(f64),
    #[error("field of view must lie in (0, pi), got {0}")]
    InvalidFieldOfView(f64),
    #[error("resolution must be within 1..=100 percent, got {0}")]
    ResolutionOutOfRange(u32),
    #[error("viewport {width}x{height} is empty")]
    EmptyViewport { width: u32, height: u32 },
    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Failure to obtain tile data from a map source.
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("map file not found: {0:?}")]
    NotFound(PathBuf),
    #[error("failed to read map file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse map file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("maze size must be within 1..={max}, got {size}")]
    MazeSizeOutOfRange { size: u32, max: u32 },
    #[error(transparent)]
    Grid(#[from] GridError),
}
