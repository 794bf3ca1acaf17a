//! Map sources - where the tile grid comes from.
//!
//! Selection happens once at configuration time. A missing optional source
//! degrades to the built-in map; malformed data is a hard error.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::MapError;
use crate::grid::Grid;
use crate::maze;

/// Built-in 11x11 map: a border with a lattice of pillars.
pub const DEFAULT_MAP: [[u8; 11]; 11] = [
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapSource {
    StaticDefault,
    /// JSON array of rows, optionally prefixed by `game_map =`.
    FileBacked(PathBuf),
    Generated {
        size: u32,
        seed: u32,
    },
}

impl MapSource {
    /// Short label for logs and the HUD.
    pub fn label(&self) -> &'static str {
        match self {
            MapSource::StaticDefault => "default",
            MapSource::FileBacked(_) => "file",
            MapSource::Generated { .. } => "generated",
        }
    }

    /// Produce raw rows of 0/1 values.
    pub fn load(&self) -> Result<Vec<Vec<u8>>, MapError> {
        match self {
            MapSource::StaticDefault => Ok(DEFAULT_MAP.iter().map(|row| row.to_vec()).collect()),
            MapSource::FileBacked(path) => load_file(path),
            MapSource::Generated { size, seed } => maze::generate(*size, *seed),
        }
    }

    /// Load and validate into a [`Grid`].
    pub fn into_grid(&self, tile_size: u32) -> Result<Grid, MapError> {
        let rows = self.load()?;
        Ok(Grid::new(&rows, tile_size)?)
    }

    /// Like [`MapSource::into_grid`], but an unavailable source falls back to
    /// the built-in map.
    ///
    /// Only absence counts as unavailable (missing file, generator size out of
    /// range); unreadable or malformed data is still returned as an error.
    pub fn load_or_default(&self, tile_size: u32) -> Result<(Grid, MapSource), MapError> {
        match self.into_grid(tile_size) {
            Ok(grid) => Ok((grid, self.clone())),
            Err(err @ (MapError::NotFound(_) | MapError::MazeSizeOutOfRange { .. })) => {
                tracing::warn!(source = self.label(), error = %err, "map source unavailable, using default map");
                let grid = MapSource::StaticDefault.into_grid(tile_size)?;
                Ok((grid, MapSource::StaticDefault))
            }
            Err(err) => Err(err),
        }
    }
}

fn load_file(path: &Path) -> Result<Vec<Vec<u8>>, MapError> {
    let text = fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => MapError::NotFound(path.to_path_buf()),
        _ => MapError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    parse_rows(&text).map_err(|source| MapError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse map text: a JSON array of rows, with an optional `name =` prefix.
pub fn parse_rows(text: &str) -> Result<Vec<Vec<u8>>, serde_json::Error> {
    let body = match text.find('[') {
        Some(start) if text[..start].trim_end().ends_with('=') => &text[start..],
        _ => text,
    };
    serde_json::from_str(body.trim())
}
