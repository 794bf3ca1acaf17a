use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_raycaster::core::{
    cast_rays, project, Grid, MapSource, Pose, RaycastConfig, Session, SessionSettings, ShadeRange,
    Viewport, DEFAULT_MAP,
};
use tui_raycaster::term::PixelBuffer;
use tui_raycaster::types::{MoveInput, TILE_SIZE};

fn bench_cast_rays(c: &mut Criterion) {
    let grid = Grid::new(&DEFAULT_MAP, TILE_SIZE).unwrap();
    let config = RaycastConfig::derive(320, 100, &grid).unwrap();
    let pose = Pose::new(352.0, 352.0, 0.4);

    c.bench_function("cast_rays_320", |b| {
        b.iter(|| cast_rays(black_box(&pose), &grid, &config))
    });
}

fn bench_cast_rays_maze(c: &mut Criterion) {
    let grid = MapSource::Generated { size: 40, seed: 7 }
        .into_grid(TILE_SIZE)
        .unwrap();
    let config = RaycastConfig::derive(320, 100, &grid).unwrap();
    let pose = Pose::spawn(&grid);

    c.bench_function("cast_rays_320_maze40", |b| {
        b.iter(|| cast_rays(black_box(&pose), &grid, &config))
    });
}

fn bench_project(c: &mut Criterion) {
    let grid = Grid::new(&DEFAULT_MAP, TILE_SIZE).unwrap();
    let config = RaycastConfig::derive(320, 100, &grid).unwrap();
    let hits = cast_rays(&Pose::new(352.0, 352.0, 0.4), &grid, &config);
    let shades = ShadeRange::default();
    let viewport = Viewport::new(320, 200);

    c.bench_function("project_320x200", |b| {
        b.iter(|| project(black_box(&hits), &grid, &config, &shades, viewport))
    });
}

fn bench_session_tick(c: &mut Criterion) {
    let grid = Grid::new(&DEFAULT_MAP, TILE_SIZE).unwrap();
    let viewport = Viewport::new(320, 200);
    let mut session = Session::new(grid, viewport, SessionSettings::default()).unwrap();
    let mut pixels = PixelBuffer::new(viewport.width, viewport.height);
    let input = MoveInput {
        turn_right: true,
        ..MoveInput::default()
    };

    c.bench_function("session_tick_320x200", |b| {
        b.iter(|| session.tick(black_box(input), &mut pixels))
    });
}

criterion_group!(
    benches,
    bench_cast_rays,
    bench_cast_rays_maze,
    bench_project,
    bench_session_tick
);
criterion_main!(benches);
