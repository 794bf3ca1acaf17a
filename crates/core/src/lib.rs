//! Core raycasting engine - pure, deterministic, and testable
//!
//! This crate contains the grid model, viewer movement, ray marching and the
//! projection of ray distances into drawing commands. It has **no dependencies**
//! on a terminal or any other host surface: drawing goes through the
//! [`Canvas`] trait, so the engine runs the same headless, in tests, or
//! behind a real screen.
//!
//! # Module Structure
//!
//! - [`grid`]: immutable tile map with bounds-checked occupancy queries
//! - [`pose`] / [`mover`]: viewer state and corner-sampled collision
//! - [`caster`]: fixed-step ray marching with fish-eye correction
//! - [`projector`]: wall strips, distance shading and floor gradient
//! - [`minimap`]: cached top-down image plus per-frame viewer marker
//! - [`session`]: the per-tick frame controller tying it all together
//! - [`map_source`] / [`maze`]: where grids come from
//!
//! # Example
//!
//! ```
//! use raycaster_core::{cast_rays, MapSource, Pose, RaycastConfig};
//!
//! let grid = MapSource::StaticDefault.into_grid(64).unwrap();
//! let pose = Pose::spawn(&grid);
//! let config = RaycastConfig::derive(320, 50, &grid).unwrap();
//!
//! let hits = cast_rays(&pose, &grid, &config);
//! assert_eq!(hits.len(), 160);
//! assert!(hits.iter().all(|h| h.distance > 0.0 && h.distance <= config.max_depth()));
//! ```

pub mod canvas;
pub mod caster;
pub mod error;
pub mod grid;
pub mod map_source;
pub mod maze;
pub mod minimap;
pub mod mover;
pub mod pose;
pub mod projector;
pub mod rng;
pub mod session;

pub use raycaster_types as types;

// Re-export commonly used types for convenience
pub use canvas::{Canvas, DrawCommand, Image, Point, Rect, Viewport};
pub use caster::{cast_ray, cast_rays, RayHit, RaycastConfig};
pub use error::{ConfigError, GridError, MapError};
pub use grid::Grid;
pub use map_source::{MapSource, DEFAULT_MAP};
pub use minimap::{build_static_image, project_marker, Marker, Minimap, MinimapLayout};
pub use pose::Pose;
pub use projector::{project, ShadeRange};
pub use rng::SimpleRng;
pub use session::{FrameStats, Session, SessionSettings};
