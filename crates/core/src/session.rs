//! FrameController - owns one playing session and runs its ticks.
//!
//! All state that changes during play lives here and is passed explicitly to
//! the pure components: input -> mover -> caster -> projector + minimap ->
//! canvas. The grid and raycast configuration only change on [`Session::resize`].

use crate::canvas::{apply_all, Canvas, DrawCommand, Viewport};
use crate::caster::{cast_rays_into, RayHit, RaycastConfig};
use crate::error::ConfigError;
use crate::grid::Grid;
use crate::minimap::Minimap;
use crate::mover;
use crate::pose::Pose;
use crate::projector::{project_into, ShadeRange};
use crate::types::{MoveInput, COLLISION_RADIUS, FIELD_OF_VIEW, MOVE_SPEED, TURN_SPEED};

/// Tunables fixed for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionSettings {
    /// Percentage of screen columns that get their own ray (1..=100).
    pub resolution_pct: u32,
    pub fov: f64,
    pub shades: ShadeRange,
    pub move_speed: f64,
    pub turn_speed: f64,
    pub collision_radius: f64,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            resolution_pct: 100,
            fov: FIELD_OF_VIEW,
            shades: ShadeRange::default(),
            move_speed: MOVE_SPEED,
            turn_speed: TURN_SPEED,
            collision_radius: COLLISION_RADIUS,
        }
    }
}

/// Summary of one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStats {
    pub pose: Pose,
    pub moved: bool,
    pub wall_hits: usize,
}

pub struct Session {
    grid: Grid,
    pose: Pose,
    settings: SessionSettings,
    viewport: Viewport,
    config: RaycastConfig,
    minimap: Minimap,
    hits: Vec<RayHit>,
    commands: Vec<DrawCommand>,
}

impl Session {
    /// Set up a session: derive the raycast config, spawn the viewer and build
    /// the minimap image.
    pub fn new(grid: Grid, viewport: Viewport, settings: SessionSettings) -> Result<Self, ConfigError> {
        let config = derive_config(&grid, viewport, &settings)?;
        let pose = Pose::spawn(&grid)
            .with_move_speed(settings.move_speed)
            .with_turn_speed(settings.turn_speed)
            .with_collision_radius(settings.collision_radius);
        let minimap = Minimap::new(viewport, &grid);

        tracing::info!(
            grid_width = grid.width(),
            grid_height = grid.height(),
            tile_size = grid.tile_size(),
            ray_count = config.ray_count(),
            max_depth = config.max_depth(),
            minimap_tile = minimap.layout().tile_size,
            spawn_x = pose.x,
            spawn_y = pose.y,
            "session ready"
        );

        Ok(Self {
            hits: Vec::with_capacity(config.ray_count()),
            commands: Vec::new(),
            grid,
            pose,
            settings,
            viewport,
            config,
            minimap,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn raycast_config(&self) -> &RaycastConfig {
        &self.config
    }

    pub fn minimap(&self) -> &Minimap {
        &self.minimap
    }

    /// Hits from the most recent tick, left to right.
    pub fn last_hits(&self) -> &[RayHit] {
        &self.hits
    }

    /// Adopt a new screen size.
    ///
    /// Ray count and minimap geometry depend on the viewport, so both are
    /// re-derived and the minimap image is rebuilt. A no-op when the size is
    /// unchanged. On error the previous layout is left untouched.
    pub fn resize(&mut self, viewport: Viewport) -> Result<(), ConfigError> {
        if viewport == self.viewport {
            return Ok(());
        }
        self.config = derive_config(&self.grid, viewport, &self.settings)?;
        self.minimap = Minimap::new(viewport, &self.grid);
        self.viewport = viewport;
        tracing::debug!(
            width = viewport.width,
            height = viewport.height,
            ray_count = self.config.ray_count(),
            "viewport resized"
        );
        Ok(())
    }

    /// Run one simulation + render tick against `canvas`.
    pub fn tick<C: Canvas + ?Sized>(&mut self, input: MoveInput, canvas: &mut C) -> FrameStats {
        let moved = mover::advance(&mut self.pose, input, &self.grid);
        tracing::trace!(x = self.pose.x, y = self.pose.y, angle = self.pose.angle, "tick");

        cast_rays_into(&self.pose, &self.grid, &self.config, &mut self.hits);
        project_into(
            &self.hits,
            &self.grid,
            &self.config,
            &self.settings.shades,
            self.viewport,
            &mut self.commands,
        );

        apply_all(&self.commands, canvas);
        self.minimap.draw(&self.pose, &self.grid, canvas);

        FrameStats {
            pose: self.pose,
            moved,
            wall_hits: self.hits.iter().filter(|h| h.hit_wall).count(),
        }
    }
}

fn derive_config(
    grid: &Grid,
    viewport: Viewport,
    settings: &SessionSettings,
) -> Result<RaycastConfig, ConfigError> {
    if viewport.is_empty() {
        return Err(ConfigError::EmptyViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }
    RaycastConfig::derive_with_fov(settings.fov, viewport.width, settings.resolution_pct, grid)
}
