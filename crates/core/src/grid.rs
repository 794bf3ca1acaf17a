//! Grid module - the static tile map
//!
//! The grid is an immutable rectangle of [`Tile`]s stored row-major in a flat
//! vector. Tile coordinates are `(tx, ty)` with `tx` in `0..width` (left to
//! right) and `ty` in `0..height` (top to bottom). World coordinates map onto
//! tiles by floor division against `tile_size`.

use crate::error::GridError;
use crate::types::Tile;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    tile_size: u32,
    /// Flat array of tiles, row-major order (ty * width + tx)
    tiles: Vec<Tile>,
}

impl Grid {
    /// Build a grid from rows of 0/1 values.
    ///
    /// Rejects empty or ragged input, values other than 0/1, grids without a
    /// single open cell and a zero tile size.
    pub fn new<R: AsRef<[u8]>>(rows: &[R], tile_size: u32) -> Result<Self, GridError> {
        if tile_size == 0 {
            return Err(GridError::ZeroTileSize);
        }
        let first = rows.first().ok_or(GridError::Empty)?;
        let width = first.as_ref().len();

        let mut tiles = Vec::with_capacity(width * rows.len());
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.is_empty() {
                return Err(GridError::EmptyRow { row });
            }
            if values.len() != width {
                return Err(GridError::Ragged {
                    row,
                    expected: width,
                    found: values.len(),
                });
            }
            for (col, &value) in values.iter().enumerate() {
                let tile = Tile::from_value(value)
                    .ok_or(GridError::InvalidCell { row, col, value })?;
                tiles.push(tile);
            }
        }

        if !tiles.iter().any(|t| t.is_open()) {
            return Err(GridError::NoOpenCell);
        }

        Ok(Self {
            width,
            height: rows.len(),
            tile_size,
            tiles,
        })
    }

    /// Width in tiles.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in tiles.
    pub fn height(&self) -> usize {
        self.height
    }

    /// World pixels per tile edge.
    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// The smaller of width and height, in tiles.
    pub fn min_dimension(&self) -> usize {
        self.width.min(self.height)
    }

    /// The larger of width and height, in tiles.
    pub fn max_dimension(&self) -> usize {
        self.width.max(self.height)
    }

    #[inline(always)]
    fn index(&self, tx: i32, ty: i32) -> Option<usize> {
        if tx < 0 || ty < 0 || tx as usize >= self.width || ty as usize >= self.height {
            return None;
        }
        Some((ty as usize) * self.width + (tx as usize))
    }

    /// Tile at `(tx, ty)`, or None when out of bounds.
    #[inline]
    pub fn get(&self, tx: i32, ty: i32) -> Option<Tile> {
        self.index(tx, ty).map(|i| self.tiles[i])
    }

    /// True iff `(tx, ty)` is inside the grid and open.
    #[inline]
    pub fn is_walkable(&self, tx: i32, ty: i32) -> bool {
        matches!(self.get(tx, ty), Some(Tile::Open))
    }

    /// Tile coordinate containing world coordinate `world`.
    #[inline]
    pub fn tile_of(&self, world: f64) -> i32 {
        (world / self.tile_size as f64).floor() as i32
    }

    /// World position of the centre of tile `(tx, ty)`.
    pub fn tile_center(&self, tx: usize, ty: usize) -> (f64, f64) {
        let size = self.tile_size as f64;
        ((tx as f64 + 0.5) * size, (ty as f64 + 0.5) * size)
    }

    /// Iterate rows as tile slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.tiles.chunks_exact(self.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_of_floors_negative_coordinates() {
        let grid = Grid::new(&[[0u8, 0], [0, 0]], 64).unwrap();
        assert_eq!(grid.tile_of(-0.5), -1);
        assert_eq!(grid.tile_of(0.0), 0);
        assert_eq!(grid.tile_of(63.9), 0);
        assert_eq!(grid.tile_of(64.0), 1);
    }

    #[test]
    fn rows_iterate_in_order() {
        let grid = Grid::new(&[vec![1u8, 0, 1], vec![0, 0, 0]], 8).unwrap();
        let rows: Vec<&[Tile]> = grid.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], &[Tile::Wall, Tile::Open, Tile::Wall]);
        assert_eq!(rows[1], &[Tile::Open; 3]);
    }
}
