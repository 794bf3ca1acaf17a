//! Session tests - full ticks against a pixel buffer

use tui_raycaster::core::{ConfigError, Grid, Session, SessionSettings, Viewport, DEFAULT_MAP};
use tui_raycaster::term::PixelBuffer;
use tui_raycaster::types::{MoveInput, Rgb, TILE_SIZE};

fn session(viewport: Viewport) -> Session {
    let grid = Grid::new(&DEFAULT_MAP, TILE_SIZE).unwrap();
    Session::new(grid, viewport, SessionSettings::default()).unwrap()
}

#[test]
fn test_new_session_spawns_in_first_open_tile() {
    let session = session(Viewport::new(320, 200));
    assert_eq!((session.pose().x, session.pose().y), (96.0, 96.0));
    assert_eq!(session.pose().angle, 0.0);
    assert_eq!(session.raycast_config().ray_count(), 320);
}

#[test]
fn test_idle_tick_renders_without_moving() {
    let viewport = Viewport::new(320, 200);
    let mut session = session(viewport);
    let mut pixels = PixelBuffer::new(viewport.width, viewport.height);
    let sentinel = Rgb::new(1, 2, 3);
    pixels.fill(sentinel);

    let stats = session.tick(MoveInput::default(), &mut pixels);
    assert!(!stats.moved);
    assert_eq!(session.last_hits().len(), 320);
    assert_eq!(
        stats.wall_hits,
        session.last_hits().iter().filter(|h| h.hit_wall).count()
    );
    assert!(stats.wall_hits > 0);

    // Minimap corner tile is a wall.
    let layout = session.minimap().layout();
    assert_eq!(
        pixels.get(layout.origin_x, 0),
        Some(tui_raycaster::core::minimap::WALL_COLOR)
    );
    // Ceiling and floor cover the whole frame.
    for y in 0..viewport.height {
        for x in 0..viewport.width {
            assert_ne!(pixels.get(x, y), Some(sentinel), "pixel ({x}, {y}) unpainted");
        }
    }
}

#[test]
fn test_forward_tick_moves_viewer() {
    let viewport = Viewport::new(160, 100);
    let mut session = session(viewport);
    let mut pixels = PixelBuffer::new(viewport.width, viewport.height);
    let input = MoveInput {
        forward: true,
        ..MoveInput::default()
    };

    let stats = session.tick(input, &mut pixels);
    assert!(stats.moved);
    assert_eq!(stats.pose.x, 99.0);
    assert_eq!(session.pose().x, 99.0);
}

#[test]
fn test_resize_rederives_config_and_minimap() {
    let mut session = session(Viewport::new(320, 200));
    let before = session.minimap().layout();

    session.resize(Viewport::new(160, 400)).unwrap();
    assert_eq!(session.viewport(), Viewport::new(160, 400));
    assert_eq!(session.raycast_config().ray_count(), 160);
    assert_ne!(session.minimap().layout(), before);
    assert_eq!(session.minimap().layout().origin_x + session.minimap().layout().width, 160);
}

#[test]
fn test_empty_viewport_is_rejected() {
    let grid = Grid::new(&DEFAULT_MAP, TILE_SIZE).unwrap();
    assert!(matches!(
        Session::new(grid, Viewport::new(0, 10), SessionSettings::default()),
        Err(ConfigError::EmptyViewport { width: 0, height: 10 })
    ));

    let mut session = session(Viewport::new(320, 200));
    assert_eq!(
        session.resize(Viewport::new(320, 0)),
        Err(ConfigError::EmptyViewport {
            width: 320,
            height: 0
        })
    );
    assert_eq!(session.viewport(), Viewport::new(320, 200));
}

#[test]
fn test_low_resolution_uses_fewer_rays() {
    let grid = Grid::new(&DEFAULT_MAP, TILE_SIZE).unwrap();
    let settings = SessionSettings {
        resolution_pct: 25,
        ..SessionSettings::default()
    };
    let session = Session::new(grid, Viewport::new(320, 200), settings).unwrap();
    assert_eq!(session.raycast_config().ray_count(), 80);
}

#[test]
fn test_narrow_resize_at_low_resolution_keeps_running() {
    let grid = Grid::new(&DEFAULT_MAP, TILE_SIZE).unwrap();
    let settings = SessionSettings {
        resolution_pct: 10,
        ..SessionSettings::default()
    };
    let mut session = Session::new(grid, Viewport::new(80, 48), settings).unwrap();
    assert_eq!(session.raycast_config().ray_count(), 8);

    // 9 * 10 / 100 rounds down to zero rays.
    session.resize(Viewport::new(9, 48)).unwrap();
    assert_eq!(session.viewport(), Viewport::new(9, 48));
    assert_eq!(session.raycast_config().ray_count(), 1);

    let mut pixels = PixelBuffer::new(9, 48);
    session.tick(MoveInput::default(), &mut pixels);
    assert_eq!(session.last_hits().len(), 1);
}

#[test]
fn test_failed_resize_keeps_previous_layout() {
    let mut session = session(Viewport::new(320, 200));
    let layout = session.minimap().layout();

    assert!(session.resize(Viewport::new(0, 0)).is_err());
    assert_eq!(session.viewport(), Viewport::new(320, 200));
    assert_eq!(session.raycast_config().ray_count(), 320);
    assert_eq!(session.minimap().layout(), layout);
}
