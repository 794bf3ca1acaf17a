//! Terminal input module (engine-facing).
//!
//! This crate is independent of the rendering layer. It maps `crossterm` key
//! events onto [`crate::types::Action`]s and tracks which movement keys are
//! held, producing one [`crate::types::MoveInput`] per tick. Terminals that
//! never report key releases are handled with an auto-release timeout.

pub mod held;
pub mod map;

pub use raycaster_types as types;

pub use held::HeldKeys;
pub use map::{key_action, should_quit};
