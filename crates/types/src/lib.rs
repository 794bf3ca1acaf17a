//! Shared types module - plain data structures and constants
//!
//! This crate defines the small vocabulary shared by the raycasting core, the
//! input layer and the terminal host. Everything here is plain data with no
//! external dependencies.
//!
//! # World Scale
//!
//! World space is measured in continuous "world pixels". One tile edge spans
//! [`TILE_SIZE`] world pixels, so tile `(tx, ty)` covers
//! `[tx * 64, (tx + 1) * 64) x [ty * 64, (ty + 1) * 64)`.
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TILE_SIZE` | 64 | World pixels per tile edge |
//! | `FIELD_OF_VIEW` | π / 2.8 | Horizontal field of view (~64°) |
//! | `MOVE_SPEED` | 3.0 | World pixels per tick |
//! | `TURN_SPEED` | 0.05 | Radians per tick |
//! | `COLLISION_RADIUS` | 10.0 | Viewer footprint radius |
//! | `WALL_END_SHADE` | 255 | Brightest wall shade (distance 0) |
//! | `FLOOR_START_SHADE` | 85 | Floor shade at the horizon |
//! | `FLOOR_END_SHADE` | 170 | Floor shade gain towards the bottom edge |
//! | `DEFAULT_FPS` | 60 | Frame pump target |
//!
//! # Examples
//!
//! ```
//! use raycaster_types::{Action, MoveInput, Tile};
//!
//! assert_eq!(Tile::from_value(1), Some(Tile::Wall));
//! assert_eq!(Tile::from_value(7), None);
//!
//! let mut input = MoveInput::default();
//! input.press(Action::MoveForward);
//! assert!(input.forward);
//! assert!(!input.is_idle());
//! ```

/// World pixels per tile edge.
pub const TILE_SIZE: u32 = 64;

/// Horizontal field of view in radians.
pub const FIELD_OF_VIEW: f64 = std::f64::consts::PI / 2.8;

/// Viewer linear speed in world pixels per tick.
pub const MOVE_SPEED: f64 = 3.0;

/// Viewer angular speed in radians per tick.
pub const TURN_SPEED: f64 = 0.05;

/// Radius of the viewer's collision footprint in world pixels.
pub const COLLISION_RADIUS: f64 = 10.0;

/// Wall shade at distance zero; shades fall linearly to 0 at max depth.
pub const WALL_END_SHADE: u8 = 255;

/// Floor shade on the horizon row.
pub const FLOOR_START_SHADE: u8 = 85;

/// Floor shade added across the lower half of the screen.
pub const FLOOR_END_SHADE: u8 = 170;

/// Guards the wall-height division when a distance approaches zero.
pub const DISTANCE_EPSILON: f64 = 1e-4;

/// Target frame rate of the host frame pump.
pub const DEFAULT_FPS: u32 = 60;

/// Largest generated maze, in rooms per side.
pub const MAX_MAZE_SIZE: u32 = 100;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const GRAY: Rgb = Rgb::new(75, 75, 75);
    pub const LIGHT_GRAY: Rgb = Rgb::new(200, 200, 200);
    pub const DARK_GRAY: Rgb = Rgb::new(50, 50, 50);
    pub const YELLOW: Rgb = Rgb::new(255, 255, 0);
    pub const GREEN: Rgb = Rgb::new(0, 255, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Grayscale color with all channels set to `shade`.
    pub const fn gray(shade: u8) -> Self {
        Self::new(shade, shade, shade)
    }
}

/// State of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    Open,
    Wall,
}

impl Tile {
    /// Decode the integer encoding used by map sources (0 = open, 1 = wall).
    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            0 => Some(Tile::Open),
            1 => Some(Tile::Wall),
            _ => None,
        }
    }

    pub fn value(self) -> u8 {
        match self {
            Tile::Open => 0,
            Tile::Wall => 1,
        }
    }

    pub fn is_open(self) -> bool {
        self == Tile::Open
    }
}

/// Viewer actions produced by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveForward,
    MoveBackward,
    TurnLeft,
    TurnRight,
}

impl Action {
    pub const ALL: [Action; 4] = [
        Action::MoveForward,
        Action::MoveBackward,
        Action::TurnLeft,
        Action::TurnRight,
    ];
}

/// Movement keys held during one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveInput {
    pub forward: bool,
    pub backward: bool,
    pub turn_left: bool,
    pub turn_right: bool,
}

impl MoveInput {
    pub fn press(&mut self, action: Action) {
        match action {
            Action::MoveForward => self.forward = true,
            Action::MoveBackward => self.backward = true,
            Action::TurnLeft => self.turn_left = true,
            Action::TurnRight => self.turn_right = true,
        }
    }

    pub fn is_idle(&self) -> bool {
        !(self.forward || self.backward || self.turn_left || self.turn_right)
    }
}

impl FromIterator<Action> for MoveInput {
    fn from_iter<I: IntoIterator<Item = Action>>(iter: I) -> Self {
        let mut input = MoveInput::default();
        for action in iter {
            input.press(action);
        }
        input
    }
}
