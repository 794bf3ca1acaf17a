//! Mover - resolves viewer movement against the grid.
//!
//! The viewer is a circle of radius `collision_radius`. Collision only samples
//! the four corners of the circle's bounding square, which can let the viewer
//! graze a wall corner diagonally; this approximation is intentional.

use crate::grid::Grid;
use crate::pose::Pose;
use crate::types::MoveInput;

/// Corner offsets of the footprint's bounding square, in units of radius.
const CORNERS: [(f64, f64); 4] = [(-1.0, -1.0), (-1.0, 1.0), (1.0, -1.0), (1.0, 1.0)];

/// Whether a footprint of `radius` centred at `(x, y)` fits in open tiles.
pub fn can_occupy(x: f64, y: f64, radius: f64, grid: &Grid) -> bool {
    CORNERS.iter().all(|&(sx, sy)| {
        let tx = grid.tile_of(x + sx * radius);
        let ty = grid.tile_of(y + sy * radius);
        grid.is_walkable(tx, ty)
    })
}

/// Move `pose` towards `(x, y)`, one axis at a time.
///
/// X is tested first with the old Y, then Y with the resulting X, so the
/// viewer slides along a wall instead of sticking to it. Returns true when
/// at least one axis was accepted, even if the target equals the current
/// position; false means both were rejected and the pose is unchanged.
pub fn try_move(pose: &mut Pose, x: f64, y: f64, grid: &Grid) -> bool {
    let mut accepted = false;

    if can_occupy(x, pose.y, pose.collision_radius, grid) {
        pose.x = x;
        accepted = true;
    }
    if can_occupy(pose.x, y, pose.collision_radius, grid) {
        pose.y = y;
        accepted = true;
    }

    accepted
}

/// Apply one tick of input: translate along the heading, then turn.
///
/// Turning never collides. Returns whether the position changed.
pub fn advance(pose: &mut Pose, input: MoveInput, grid: &Grid) -> bool {
    let (cos, sin) = pose.heading();
    let dx = cos * pose.move_speed;
    let dy = sin * pose.move_speed;

    let mut new_x = pose.x;
    let mut new_y = pose.y;
    if input.forward {
        new_x += dx;
        new_y += dy;
    }
    if input.backward {
        new_x -= dx;
        new_y -= dy;
    }

    let (old_x, old_y) = (pose.x, pose.y);
    if new_x != old_x || new_y != old_y {
        try_move(pose, new_x, new_y, grid);
    }
    let moved = pose.x != old_x || pose.y != old_y;

    if input.turn_left {
        pose.angle -= pose.turn_speed;
    }
    if input.turn_right {
        pose.angle += pose.turn_speed;
    }

    moved
}
