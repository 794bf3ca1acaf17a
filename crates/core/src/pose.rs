//! Viewer pose and spawn placement.

use crate::grid::Grid;
use crate::types::{COLLISION_RADIUS, MOVE_SPEED, TURN_SPEED};

/// Viewer state in world space.
///
/// `angle` is in radians, 0 along +x and increasing clockwise on screen
/// (y grows downwards).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub x: f64,
    pub y: f64,
    pub angle: f64,
    pub move_speed: f64,
    pub turn_speed: f64,
    pub collision_radius: f64,
}

impl Pose {
    pub fn new(x: f64, y: f64, angle: f64) -> Self {
        Self {
            x,
            y,
            angle,
            move_speed: MOVE_SPEED,
            turn_speed: TURN_SPEED,
            collision_radius: COLLISION_RADIUS,
        }
    }

    pub fn with_move_speed(mut self, move_speed: f64) -> Self {
        self.move_speed = move_speed;
        self
    }

    pub fn with_turn_speed(mut self, turn_speed: f64) -> Self {
        self.turn_speed = turn_speed;
        self
    }

    pub fn with_collision_radius(mut self, radius: f64) -> Self {
        self.collision_radius = radius;
        self
    }

    /// A pose at the spawn point of `grid`, facing +x.
    pub fn spawn(grid: &Grid) -> Self {
        let (x, y) = spawn_point(grid);
        Self::new(x, y, 0.0)
    }

    /// Unit heading vector `(cos(angle), sin(angle))`.
    pub fn heading(&self) -> (f64, f64) {
        (self.angle.cos(), self.angle.sin())
    }
}

/// Centre of the first open interior tile, scanning row-major.
///
/// The outermost ring is skipped so the viewer never starts against the map
/// edge. Falls back to the centre tile of the map when no interior tile is
/// open.
pub fn spawn_point(grid: &Grid) -> (f64, f64) {
    for ty in 1..grid.height().saturating_sub(1) {
        for tx in 1..grid.width().saturating_sub(1) {
            if grid.is_walkable(tx as i32, ty as i32) {
                return grid.tile_center(tx, ty);
            }
        }
    }

    tracing::warn!(
        width = grid.width(),
        height = grid.height(),
        "no open interior tile, spawning at map centre"
    );
    grid.tile_center(grid.width() / 2, grid.height() / 2)
}
