//! Perfect-maze generator.
//!
//! Rooms sit on odd tile coordinates of a `(2n + 1) x (2n + 1)` grid of walls;
//! an iterative recursive-backtracker knocks out the wall tile between
//! neighbouring rooms. Every room is reachable and the outer ring stays solid.

use crate::error::MapError;
use crate::rng::SimpleRng;
use crate::types::{Tile, MAX_MAZE_SIZE};

const DIRECTIONS: [(i32, i32); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

/// Generate a maze of `size x size` rooms as rows of 0/1 values.
pub fn generate(size: u32, seed: u32) -> Result<Vec<Vec<u8>>, MapError> {
    if !(1..=MAX_MAZE_SIZE).contains(&size) {
        return Err(MapError::MazeSizeOutOfRange {
            size,
            max: MAX_MAZE_SIZE,
        });
    }

    let rooms = size as usize;
    let side = 2 * rooms + 1;
    let mut rows = vec![vec![Tile::Wall.value(); side]; side];
    let mut visited = vec![false; rooms * rooms];
    let mut rng = SimpleRng::new(seed);

    let mut stack = vec![(0usize, 0usize)];
    visited[0] = true;
    rows[1][1] = Tile::Open.value();

    while let Some(&(rx, ry)) = stack.last() {
        let mut order = DIRECTIONS;
        rng.shuffle(&mut order);

        let next = order.iter().find_map(|&(dx, dy)| {
            let nx = rx as i32 + dx;
            let ny = ry as i32 + dy;
            if nx < 0 || ny < 0 || nx as usize >= rooms || ny as usize >= rooms {
                return None;
            }
            let (nx, ny) = (nx as usize, ny as usize);
            (!visited[ny * rooms + nx]).then_some((nx, ny))
        });

        match next {
            Some((nx, ny)) => {
                visited[ny * rooms + nx] = true;
                rows[ry + ny + 1][rx + nx + 1] = Tile::Open.value();
                rows[2 * ny + 1][2 * nx + 1] = Tile::Open.value();
                stack.push((nx, ny));
            }
            None => {
                stack.pop();
            }
        }
    }

    Ok(rows)
}
