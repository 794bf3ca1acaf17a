//! MinimapProjector - top-down overview anchored to the top-right corner.
//!
//! The tile image is rendered once per layout and cached; per frame only the
//! viewer marker (a dot plus a heading line) is recomputed.

use crate::canvas::{Canvas, DrawCommand, Image, Point, Viewport};
use crate::grid::Grid;
use crate::pose::Pose;
use crate::types::{Rgb, Tile};

pub const WALL_COLOR: Rgb = Rgb::DARK_GRAY;
pub const OPEN_COLOR: Rgb = Rgb::WHITE;
pub const MARKER_COLOR: Rgb = Rgb::GREEN;
pub const HEADING_COLOR: Rgb = Rgb::YELLOW;

/// Heading line length, in minimap tiles.
const HEADING_LENGTH_TILES: f64 = 1.5;
/// Marker dot radius, in minimap tiles.
const MARKER_RADIUS_TILES: f64 = 0.5;
const HEADING_WIDTH: u32 = 2;
/// Grids whose smaller side exceeds this many tiles get a doubled minimap.
const LARGE_GRID_TILES: usize = 30;

/// Minimap geometry in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinimapLayout {
    /// Minimap pixels per grid tile.
    pub tile_size: u32,
    pub width: u32,
    pub height: u32,
    /// Screen position of the image's top-left corner.
    pub origin_x: u32,
    pub origin_y: u32,
}

impl MinimapLayout {
    /// Size the minimap from the viewport's smaller side.
    ///
    /// The base edge is a quarter of the smaller screen dimension, doubled for
    /// large mazes; tiles are square and at least one pixel. The doubling is
    /// applied before the tile size is derived, so it always enlarges the map.
    pub fn new(viewport: Viewport, grid: &Grid) -> Self {
        let mut base = viewport.min_dimension() / 4;
        if grid.min_dimension() > LARGE_GRID_TILES {
            base *= 2;
        }
        let tile_size = (base / grid.max_dimension() as u32).max(1);
        let width = tile_size * grid.width() as u32;
        let height = tile_size * grid.height() as u32;

        Self {
            tile_size,
            width,
            height,
            origin_x: viewport.width.saturating_sub(width),
            origin_y: 0,
        }
    }
}

/// Viewer marker in minimap-local pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub position: Point,
    pub heading_end: Point,
}

/// Render every tile as a `tile_size` square block.
pub fn build_static_image(grid: &Grid, tile_size: u32) -> Image {
    let mut image = Image::new(
        tile_size * grid.width() as u32,
        tile_size * grid.height() as u32,
        Rgb::BLACK,
    );
    for (ty, row) in grid.rows().enumerate() {
        for (tx, tile) in row.iter().enumerate() {
            let color = match tile {
                Tile::Wall => WALL_COLOR,
                Tile::Open => OPEN_COLOR,
            };
            image.fill_block(
                tx as u32 * tile_size,
                ty as u32 * tile_size,
                tile_size,
                tile_size,
                color,
            );
        }
    }
    image
}

/// Map the viewer pose into minimap-local pixels.
pub fn project_marker(pose: &Pose, grid: &Grid, tile_size: u32) -> Marker {
    let scale = tile_size as f64 / grid.tile_size() as f64;
    let position = Point::new(pose.x * scale, pose.y * scale);
    let (cos, sin) = pose.heading();
    let length = tile_size as f64 * HEADING_LENGTH_TILES;

    Marker {
        position,
        heading_end: position.offset(cos * length, sin * length),
    }
}

/// Cached minimap for one grid and viewport.
#[derive(Debug, Clone)]
pub struct Minimap {
    layout: MinimapLayout,
    image: Image,
}

impl Minimap {
    pub fn new(viewport: Viewport, grid: &Grid) -> Self {
        let layout = MinimapLayout::new(viewport, grid);
        let image = build_static_image(grid, layout.tile_size);
        tracing::debug!(
            tile_size = layout.tile_size,
            width = layout.width,
            height = layout.height,
            "built minimap image"
        );
        Self { layout, image }
    }

    pub fn layout(&self) -> MinimapLayout {
        self.layout
    }

    pub fn image(&self) -> &Image {
        &self.image
    }

    pub fn marker(&self, pose: &Pose, grid: &Grid) -> Marker {
        project_marker(pose, grid, self.layout.tile_size)
    }

    /// Marker dot and heading line in screen space.
    pub fn marker_commands(&self, pose: &Pose, grid: &Grid) -> [DrawCommand; 2] {
        let marker = self.marker(pose, grid);
        let (ox, oy) = (self.layout.origin_x as f64, self.layout.origin_y as f64);
        let position = marker.position.offset(ox, oy);

        [
            DrawCommand::FillCircle {
                center: position,
                radius: self.layout.tile_size as f64 * MARKER_RADIUS_TILES,
                color: MARKER_COLOR,
            },
            DrawCommand::Line {
                from: position,
                to: marker.heading_end.offset(ox, oy),
                color: HEADING_COLOR,
                width: HEADING_WIDTH,
            },
        ]
    }

    /// Blit the cached image and draw the marker over it.
    pub fn draw<C: Canvas + ?Sized>(&self, pose: &Pose, grid: &Grid, canvas: &mut C) {
        canvas.blit(
            &self.image,
            self.layout.origin_x as i32,
            self.layout.origin_y as i32,
        );
        for command in self.marker_commands(pose, grid) {
            command.apply(canvas);
        }
    }
}
