use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mazecull::prelude::*;

fn cone() -> (LineSeg, LineSeg) {
    let viewer = Viewer::new(Vec2::new(0.5, 0.5), 30.0, 60.0);
    viewer.frustum_rays(1000.0)
}

fn benchmark_clip_edge(c: &mut Criterion) {
    let mut group = c.benchmark_group("clip_edge");
    let (left, right) = cone();
    let frustum = Frustum::new(&left, &right);

    for (name, edge) in [
        ("spanning", LineSeg::from_coords(3.0, -2.0, 3.0, 9.0)),
        ("one_side", LineSeg::from_coords(1.0, 0.0, 4.0, 0.9)),
        ("behind", LineSeg::from_coords(-3.0, -2.0, -3.0, 4.0)),
        ("parallel", LineSeg::from_coords(0.0, 0.0, 9.0, 0.0)),
    ] {
        group.bench_with_input(BenchmarkId::new("exact", name), &edge, |b, edge| {
            b.iter(|| frustum.clip_edge(black_box(edge)));
        });
    }

    group.finish();
}

fn benchmark_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("traversal");

    for size in [8usize, 32] {
        let mut maze = Maze::grid(size, size, 1.0, 1.0).expect("grid");
        maze.open_interior();
        let view = ViewConfig {
            dir_degrees: 45.0,
            ..ViewConfig::default()
        };
        let viewer = Viewer::from_config(&view);
        let config = RenderConfig::default().with_max_depth(2 * size);

        group.bench_with_input(BenchmarkId::new("open_grid", size), &maze, |b, maze| {
            b.iter(|| VisibleWalls::collect(black_box(maze), &viewer, &config));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_clip_edge, benchmark_traversal);
criterion_main!(benches);
