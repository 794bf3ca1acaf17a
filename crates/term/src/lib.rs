//! Terminal host for the raycasting engine.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay. It
//! avoids widget toolkits and instead:
//!
//! - rasterizes core draw commands into an RGB [`PixelBuffer`]
//! - packs pixel pairs into half-block cells of a [`FrameBuffer`]
//! - flushes that framebuffer to the terminal with run-length diffing
//!
//! The core stays deterministic and headless; everything terminal-specific
//! lives here.

pub mod fb;
pub mod game_view;
pub mod pixels;
pub mod renderer;

pub use raycaster_core as core;
pub use raycaster_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer};
pub use game_view::{pixel_viewport, GameView, Hud};
pub use pixels::PixelBuffer;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
