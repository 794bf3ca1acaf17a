//! Projector tests - shading curves and strip geometry

use tui_raycaster::core::projector::{wall_height, CEILING_COLOR, NO_WALL_COLOR};
use tui_raycaster::core::{project, DrawCommand, Grid, RayHit, RaycastConfig, ShadeRange, Viewport, DEFAULT_MAP};
use tui_raycaster::types::{Rgb, FIELD_OF_VIEW, TILE_SIZE};

#[test]
fn test_wall_shade_darkens_with_distance() {
    let shades = ShadeRange::default();
    let max_depth = 500.0;

    assert_eq!(shades.wall_shade(0.0, max_depth), 255);
    let mut previous = u8::MAX;
    for step in 0..=50 {
        let shade = shades.wall_shade(step as f64 * 10.0, max_depth);
        assert!(shade <= previous, "shade rose at distance {}", step * 10);
        previous = shade;
    }
    assert_eq!(shades.wall_shade(max_depth, max_depth), 0);
    assert_eq!(shades.wall_shade(max_depth * 3.0, max_depth), 0);
}

#[test]
fn test_floor_shade_brightens_towards_bottom() {
    let shades = ShadeRange::default();
    let height = 200;

    assert_eq!(shades.floor_shade(height / 2, height), 85);
    let mut previous = 0;
    for row in height / 2..height {
        let shade = shades.floor_shade(row, height);
        assert!((85..=255).contains(&shade));
        assert!(shade >= previous);
        previous = shade;
    }
}

#[test]
fn test_plan_layout_and_strip_geometry() {
    let grid = Grid::new(&DEFAULT_MAP, TILE_SIZE).unwrap();
    let config = RaycastConfig::new(FIELD_OF_VIEW, 160, 500.0).unwrap();
    let viewport = Viewport::new(320, 200);
    let hits: Vec<RayHit> = (0..160)
        .map(|i| RayHit {
            distance: 20.0 + i as f64 * 3.0,
            hit_wall: true,
        })
        .collect();

    let plan = project(&hits, &grid, &config, &ShadeRange::default(), viewport);
    assert_eq!(plan.len(), 1 + 100 + 160);

    assert_eq!(
        plan[0],
        DrawCommand::FillRect {
            rect: tui_raycaster::core::Rect::new(0.0, 0.0, 320.0, 100.0),
            color: CEILING_COLOR,
        }
    );
    assert!(matches!(plan[1], DrawCommand::HLine { y: 100, .. }));
    assert!(matches!(plan[100], DrawCommand::HLine { y: 199, .. }));

    for (i, (command, hit)) in plan[101..].iter().zip(&hits).enumerate() {
        let DrawCommand::FillRect { rect, .. } = command else {
            panic!("strip {i} is not a rectangle");
        };
        let height = wall_height(hit.distance, TILE_SIZE, 200);
        assert_eq!(rect.x, i as f64 * 2.0);
        assert_eq!(rect.w, 2.0);
        assert!((rect.h - height).abs() < 1e-9);
        assert!((rect.y - (100.0 - height / 2.0)).abs() < 1e-9);
    }
}

#[test]
fn test_missed_rays_draw_black_strips() {
    let grid = Grid::new(&DEFAULT_MAP, TILE_SIZE).unwrap();
    let config = RaycastConfig::new(FIELD_OF_VIEW, 2, 300.0).unwrap();
    let hits = [
        RayHit {
            distance: 300.0,
            hit_wall: false,
        },
        RayHit {
            distance: 150.0,
            hit_wall: true,
        },
    ];

    let plan = project(&hits, &grid, &config, &ShadeRange::default(), Viewport::new(10, 4));
    let strips = &plan[plan.len() - 2..];
    assert_eq!(strips[0].color(), NO_WALL_COLOR);
    // 255 - round(150 / 300 * 255) = 127
    assert_eq!(strips[1].color(), Rgb::gray(127));
}
