//! Mover tests - collision against the built-in map

use tui_raycaster::core::mover::{advance, can_occupy, try_move};
use tui_raycaster::core::{Grid, Pose, DEFAULT_MAP};
use tui_raycaster::types::{MoveInput, TILE_SIZE, TURN_SPEED};

fn default_grid() -> Grid {
    Grid::new(&DEFAULT_MAP, TILE_SIZE).unwrap()
}

fn forward() -> MoveInput {
    MoveInput {
        forward: true,
        ..MoveInput::default()
    }
}

#[test]
fn test_move_into_border_is_rejected() {
    let grid = default_grid();
    let mut pose = Pose::new(96.0, 96.0, 0.0);

    assert!(!try_move(&mut pose, 5.0, 5.0, &grid));
    assert_eq!((pose.x, pose.y), (96.0, 96.0));
}

#[test]
fn test_move_to_spawn_tile_centre_is_accepted() {
    let grid = default_grid();
    let mut pose = Pose::spawn(&grid);
    assert_eq!((pose.x, pose.y), (96.0, 96.0));

    // Legal target equal to the current position still counts as accepted.
    assert!(try_move(&mut pose, 96.0, 96.0, &grid));
    assert_eq!((pose.x, pose.y), (96.0, 96.0));
}

#[test]
fn test_move_within_open_tile_is_accepted() {
    let grid = default_grid();
    let mut pose = Pose::new(96.0, 96.0, 0.0);

    assert!(try_move(&mut pose, 100.0, 100.0, &grid));
    assert_eq!((pose.x, pose.y), (100.0, 100.0));
}

#[test]
fn test_footprint_never_overlaps_walls() {
    let grid = default_grid();
    let mut pose = Pose::new(96.0, 96.0, 0.0);

    // Walk east along row 1 until the far border stops us.
    for _ in 0..300 {
        advance(&mut pose, forward(), &grid);
        assert!(can_occupy(pose.x, pose.y, pose.collision_radius, &grid));
    }
    assert!(pose.x + pose.collision_radius < 640.0);
    assert!(pose.x > 600.0);
    assert_eq!(pose.y, 96.0);

    // Pinned against the wall, further input reports no movement.
    assert!(!advance(&mut pose, forward(), &grid));
}

#[test]
fn test_forward_then_backward_returns_home() {
    let grid = default_grid();
    let mut pose = Pose::new(96.0, 96.0, 0.0);

    assert!(advance(&mut pose, forward(), &grid));
    assert_eq!(pose.x, 99.0);

    let back = MoveInput {
        backward: true,
        ..MoveInput::default()
    };
    assert!(advance(&mut pose, back, &grid));
    assert!((pose.x - 96.0).abs() < 1e-9);
}

#[test]
fn test_turning_never_collides() {
    let grid = default_grid();
    let mut pose = Pose::new(96.0, 96.0, 0.0);
    let left = MoveInput {
        turn_left: true,
        ..MoveInput::default()
    };

    assert!(!advance(&mut pose, left, &grid));
    assert!((pose.angle + TURN_SPEED).abs() < 1e-12);
    assert_eq!((pose.x, pose.y), (96.0, 96.0));
}
