//! TUI Raycaster (workspace facade crate).
//!
//! The implementation lives in dedicated crates under `crates/`; this package
//! re-exports them as `tui_raycaster::{core,input,term,types}` and owns the
//! binary's configuration and logging setup.

pub mod cli;
pub mod logging;

pub use raycaster_core as core;
pub use raycaster_input as input;
pub use raycaster_term as term;
pub use raycaster_types as types;
