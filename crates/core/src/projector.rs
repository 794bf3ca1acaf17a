//! Projector - turns ray distances into a column-strip drawing plan.
//!
//! Output order is back to front: ceiling fill, floor gradient lines, then
//! one wall strip per ray.

use crate::canvas::{DrawCommand, Rect, Viewport};
use crate::caster::{RayHit, RaycastConfig};
use crate::grid::Grid;
use crate::types::{Rgb, DISTANCE_EPSILON, FLOOR_END_SHADE, FLOOR_START_SHADE, WALL_END_SHADE};

/// Ceiling color above the horizon.
pub const CEILING_COLOR: Rgb = Rgb::GRAY;

/// Strip color for rays that found no wall within range.
pub const NO_WALL_COLOR: Rgb = Rgb::BLACK;

/// Brightness parameters for distance shading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShadeRange {
    /// Wall shade at distance zero; falls to 0 at max depth.
    pub wall_end: u8,
    /// Floor shade on the horizon row.
    pub floor_start: u8,
    /// Shade added between the horizon and the bottom row.
    pub floor_end: u8,
}

impl Default for ShadeRange {
    fn default() -> Self {
        Self {
            wall_end: WALL_END_SHADE,
            floor_start: FLOOR_START_SHADE,
            floor_end: FLOOR_END_SHADE,
        }
    }
}

impl ShadeRange {
    /// Wall brightness for a corrected distance, in `0..=wall_end`.
    pub fn wall_shade(&self, distance: f64, max_depth: f64) -> u8 {
        let end = self.wall_end as f64;
        let falloff = (distance / max_depth * end).round();
        (end - falloff).clamp(0.0, end) as u8
    }

    /// Floor brightness for screen row `row` (at or below the horizon).
    pub fn floor_shade(&self, row: u32, viewport_height: u32) -> u8 {
        let horizon = viewport_height / 2;
        let half = horizon.max(1) as f64;
        let depth = row.saturating_sub(horizon) as f64;
        let gain = (depth / half * self.floor_end as f64).round();
        (self.floor_start as f64 + gain).min(255.0) as u8
    }
}

/// On-screen height of a wall at `distance`.
#[inline]
pub fn wall_height(distance: f64, tile_size: u32, viewport_height: u32) -> f64 {
    tile_size as f64 * viewport_height as f64 / (distance + DISTANCE_EPSILON)
}

/// Width of one strip; leftover columns on the right stay uncovered.
pub fn strip_width(viewport: Viewport, config: &RaycastConfig) -> u32 {
    viewport.width / config.ray_count() as u32
}

/// Build the full drawing plan for one frame.
pub fn project(
    hits: &[RayHit],
    grid: &Grid,
    config: &RaycastConfig,
    shades: &ShadeRange,
    viewport: Viewport,
) -> Vec<DrawCommand> {
    let mut commands = Vec::with_capacity(1 + viewport.height as usize / 2 + hits.len());
    project_into(hits, grid, config, shades, viewport, &mut commands);
    commands
}

/// Allocation-reusing variant of [`project`]; `out` is cleared first.
pub fn project_into(
    hits: &[RayHit],
    grid: &Grid,
    config: &RaycastConfig,
    shades: &ShadeRange,
    viewport: Viewport,
    out: &mut Vec<DrawCommand>,
) {
    out.clear();
    project_background(shades, viewport, out);
    project_walls(hits, grid, config, shades, viewport, out);
}

/// Ceiling fill plus one gradient line per floor row.
pub fn project_background(shades: &ShadeRange, viewport: Viewport, out: &mut Vec<DrawCommand>) {
    let horizon = viewport.height / 2;
    out.push(DrawCommand::FillRect {
        rect: Rect::new(0.0, 0.0, viewport.width as f64, horizon as f64),
        color: CEILING_COLOR,
    });

    for row in horizon..viewport.height {
        out.push(DrawCommand::HLine {
            y: row as i32,
            color: Rgb::gray(shades.floor_shade(row, viewport.height)),
        });
    }
}

/// One vertically centred strip per ray, left to right.
pub fn project_walls(
    hits: &[RayHit],
    grid: &Grid,
    config: &RaycastConfig,
    shades: &ShadeRange,
    viewport: Viewport,
    out: &mut Vec<DrawCommand>,
) {
    let strip_w = strip_width(viewport, config) as f64;
    let horizon = (viewport.height / 2) as f64;

    for (i, hit) in hits.iter().enumerate() {
        let height = wall_height(hit.distance, grid.tile_size(), viewport.height);
        let color = if hit.hit_wall {
            Rgb::gray(shades.wall_shade(hit.distance, config.max_depth()))
        } else {
            NO_WALL_COLOR
        };

        out.push(DrawCommand::FillRect {
            rect: Rect::new(i as f64 * strip_w, horizon - height / 2.0, strip_w, height),
            color,
        });
    }
}
