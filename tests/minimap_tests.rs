//! Minimap tests - layout, cached image and marker placement

use tui_raycaster::core::minimap::{OPEN_COLOR, WALL_COLOR};
use tui_raycaster::core::{
    build_static_image, project_marker, Grid, Minimap, MinimapLayout, Pose, Viewport, DEFAULT_MAP,
};
use tui_raycaster::term::PixelBuffer;
use tui_raycaster::types::TILE_SIZE;

fn default_grid() -> Grid {
    Grid::new(&DEFAULT_MAP, TILE_SIZE).unwrap()
}

#[test]
fn test_layout_anchors_top_right() {
    let grid = default_grid();
    let layout = MinimapLayout::new(Viewport::new(200, 120), &grid);

    // min(200, 120) / 4 = 30, 30 / 11 = 2
    assert_eq!(layout.tile_size, 2);
    assert_eq!((layout.width, layout.height), (22, 22));
    assert_eq!((layout.origin_x, layout.origin_y), (178, 0));
}

#[test]
fn test_marker_at_tile_centre() {
    let grid = default_grid();
    let (x, y) = grid.tile_center(3, 4);
    let pose = Pose::new(x, y, 0.0);

    let marker = project_marker(&pose, &grid, 5);
    assert!((marker.position.x - 3.5 * 5.0).abs() < 1e-9);
    assert!((marker.position.y - 4.5 * 5.0).abs() < 1e-9);
    assert!((marker.heading_end.x - (marker.position.x + 7.5)).abs() < 1e-9);
    assert!((marker.heading_end.y - marker.position.y).abs() < 1e-9);
}

#[test]
fn test_static_image_is_stable() {
    let grid = default_grid();
    let first = build_static_image(&grid, 3);
    let second = build_static_image(&grid, 3);
    assert_eq!(first, second);
    assert_eq!((first.width(), first.height()), (33, 33));
    assert_eq!(first.get(0, 0), Some(WALL_COLOR));
    assert_eq!(first.get(4, 4), Some(OPEN_COLOR));
}

#[test]
fn test_draw_blits_image_at_origin() {
    let grid = default_grid();
    let viewport = Viewport::new(200, 120);
    let minimap = Minimap::new(viewport, &grid);
    let mut pixels = PixelBuffer::new(viewport.width, viewport.height);

    minimap.draw(&Pose::spawn(&grid), &grid, &mut pixels);

    assert_eq!(pixels.get(178, 0), Some(WALL_COLOR));
    // Tile (5, 1) is open and far from the spawn marker.
    assert_eq!(pixels.get(188, 2), Some(OPEN_COLOR));
    // Left of the minimap is untouched.
    assert_eq!(pixels.get(177, 0), Some(tui_raycaster::types::Rgb::BLACK));
}
