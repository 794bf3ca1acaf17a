//! RayCaster - marches a fan of rays through the grid.
//!
//! Rays advance in fixed one-world-pixel steps, so a hit distance is accurate
//! to within one world pixel and the work per ray is bounded by
//! `floor(max_depth)` steps. No sub-step refinement is attempted.

use std::f64::consts::PI;

use crate::error::ConfigError;
use crate::grid::Grid;
use crate::pose::Pose;
use crate::types::{Tile, FIELD_OF_VIEW};

/// Result of one ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Distance to the view plane (fish-eye corrected), in world pixels.
    /// Equals `max_depth` when no wall was found.
    pub distance: f64,
    pub hit_wall: bool,
}

impl RayHit {
    fn miss(max_depth: f64) -> Self {
        Self {
            distance: max_depth,
            hit_wall: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaycastConfig {
    fov: f64,
    ray_count: usize,
    max_depth: f64,
}

impl RaycastConfig {
    pub fn new(fov: f64, ray_count: usize, max_depth: f64) -> Result<Self, ConfigError> {
        if !(fov > 0.0 && fov < PI) {
            return Err(ConfigError::InvalidFieldOfView(fov));
        }
        if ray_count == 0 {
            return Err(ConfigError::ZeroRayCount);
        }
        if !(max_depth > 0.0) {
            return Err(ConfigError::NonPositiveMaxDepth(max_depth));
        }
        Ok(Self {
            fov,
            ray_count,
            max_depth,
        })
    }

    /// Derive the configuration from screen width and grid shape.
    ///
    /// One ray per `100 / resolution_pct` screen columns. Short maps (fewer
    /// than 10 rows) get a depth proportional to their height; everything else
    /// sees ten "tile depths" deep.
    pub fn derive(
        screen_width: u32,
        resolution_pct: u32,
        grid: &Grid,
    ) -> Result<Self, ConfigError> {
        Self::derive_with_fov(FIELD_OF_VIEW, screen_width, resolution_pct, grid)
    }

    pub fn derive_with_fov(
        fov: f64,
        screen_width: u32,
        resolution_pct: u32,
        grid: &Grid,
    ) -> Result<Self, ConfigError> {
        if !(1..=100).contains(&resolution_pct) {
            return Err(ConfigError::ResolutionOutOfRange(resolution_pct));
        }
        // Narrow screens at low resolution still get one ray; only a zero
        // width is rejected.
        let ray_count = match (screen_width as u64 * resolution_pct as u64 / 100) as usize {
            0 if screen_width > 0 => 1,
            n => n,
        };

        let tile_depth = grid.tile_size() as f64 / 1.2;
        let max_depth = if grid.height() < 10 {
            tile_depth * grid.height() as f64 / 1.5
        } else {
            tile_depth * 10.0
        };

        Self::new(fov, ray_count, max_depth)
    }

    pub fn fov(&self) -> f64 {
        self.fov
    }

    pub fn ray_count(&self) -> usize {
        self.ray_count
    }

    pub fn max_depth(&self) -> f64 {
        self.max_depth
    }

    /// Angle of ray `index`, sweeping left to right across the field of view.
    #[inline]
    pub fn ray_angle(&self, view_angle: f64, index: usize) -> f64 {
        view_angle - self.fov / 2.0 + index as f64 * (self.fov / self.ray_count as f64)
    }
}

/// Cast `config.ray_count()` rays from `pose`, left to right.
pub fn cast_rays(pose: &Pose, grid: &Grid, config: &RaycastConfig) -> Vec<RayHit> {
    let mut hits = Vec::with_capacity(config.ray_count());
    cast_rays_into(pose, grid, config, &mut hits);
    hits
}

/// Allocation-reusing variant of [`cast_rays`]; `out` is cleared first.
pub fn cast_rays_into(pose: &Pose, grid: &Grid, config: &RaycastConfig, out: &mut Vec<RayHit>) {
    out.clear();
    out.extend((0..config.ray_count()).map(|i| {
        let ray_angle = config.ray_angle(pose.angle, i);
        cast_ray(pose, ray_angle, grid, config.max_depth())
    }));
}

/// March a single ray at `ray_angle`.
pub fn cast_ray(pose: &Pose, ray_angle: f64, grid: &Grid, max_depth: f64) -> RayHit {
    let (sin, cos) = ray_angle.sin_cos();
    let steps = max_depth.floor() as u32;

    for depth in 1..=steps {
        let depth = depth as f64;
        let tx = grid.tile_of(pose.x + cos * depth);
        let ty = grid.tile_of(pose.y + sin * depth);

        match grid.get(tx, ty) {
            None => return RayHit::miss(max_depth),
            Some(Tile::Wall) => {
                return RayHit {
                    distance: depth * (pose.angle - ray_angle).cos(),
                    hit_wall: true,
                };
            }
            Some(Tile::Open) => {}
        }
    }

    RayHit::miss(max_depth)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_room() -> Grid {
        Grid::new(&[[0u8; 4]; 4], 64).unwrap()
    }

    #[test]
    fn derive_uses_short_map_depth_rule() {
        let grid = open_room();
        let config = RaycastConfig::derive(200, 50, &grid).unwrap();
        assert_eq!(config.ray_count(), 100);
        let expected = 64.0 / 1.2 * 4.0 / 1.5;
        assert!((config.max_depth() - expected).abs() < 1e-9);
    }

    #[test]
    fn derive_caps_depth_for_tall_maps() {
        let grid = Grid::new(&vec![vec![0u8; 3]; 12], 64).unwrap();
        let config = RaycastConfig::derive(100, 100, &grid).unwrap();
        assert!((config.max_depth() - 64.0 / 1.2 * 10.0).abs() < 1e-9);
    }

    #[test]
    fn narrow_screen_keeps_one_ray() {
        let grid = open_room();
        assert_eq!(RaycastConfig::derive(1, 50, &grid).unwrap().ray_count(), 1);
        assert_eq!(RaycastConfig::derive(9, 10, &grid).unwrap().ray_count(), 1);
    }

    #[test]
    fn invalid_parameters_are_rejected() {
        let grid = open_room();
        assert_eq!(
            RaycastConfig::derive(0, 50, &grid),
            Err(ConfigError::ZeroRayCount)
        );
        assert_eq!(
            RaycastConfig::derive(100, 0, &grid),
            Err(ConfigError::ResolutionOutOfRange(0))
        );
        assert_eq!(
            RaycastConfig::new(1.0, 10, 0.0),
            Err(ConfigError::NonPositiveMaxDepth(0.0))
        );
        assert_eq!(
            RaycastConfig::new(PI, 10, 10.0),
            Err(ConfigError::InvalidFieldOfView(PI))
        );
    }

    #[test]
    fn ray_leaving_the_grid_is_a_miss() {
        let grid = open_room();
        let pose = Pose::new(128.0, 128.0, 0.0);
        let hit = cast_ray(&pose, 0.0, &grid, 500.0);
        assert_eq!(hit, RayHit::miss(500.0));
    }

    #[test]
    fn ray_angles_span_the_field_of_view() {
        let config = RaycastConfig::new(1.0, 4, 10.0).unwrap();
        assert!((config.ray_angle(2.0, 0) - 1.5).abs() < 1e-12);
        assert!((config.ray_angle(2.0, 2) - 2.0).abs() < 1e-12);
        assert!((config.ray_angle(2.0, 3) - 2.25).abs() < 1e-12);
    }
}
