use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec3;
use lorenz_flight::{Camera, LorenzParams, Scenario};

/// Benchmark: full Lorenz regeneration at the viewer's default resolution
fn bench_lorenz_regeneration(c: &mut Criterion) {
    let params = LorenzParams::default();
    let scenario = Scenario::default();

    let mut group = c.benchmark_group("lorenz_regeneration");
    group.sample_size(10);
    group.bench_function("default_scenario", |b| {
        b.iter(|| black_box(scenario.run(black_box(&params))))
    });
    group.finish();
}

/// Benchmark: regeneration cost against horizon length
fn bench_horizon_scaling(c: &mut Criterion) {
    let params = LorenzParams::default();
    let mut group = c.benchmark_group("horizon_scaling");

    for horizon in [1.0, 5.0, 25.0] {
        let scenario = Scenario {
            end_time: horizon,
            ..Scenario::default()
        };
        group.bench_with_input(BenchmarkId::from_parameter(horizon), &scenario, |b, s| {
            b.iter(|| black_box(s.run(black_box(&params))))
        });
    }

    group.finish();
}

/// Benchmark: one frame of mouse-look plus the view transform
fn bench_camera_frame(c: &mut Criterion) {
    let mut camera = Camera::at(Vec3::new(0.0, 0.0, 10.0));

    c.bench_function("camera_look_and_apply", |b| {
        b.iter(|| {
            camera.rotate_global(black_box(0.01), Vec3::Y);
            camera.rotate_local(black_box(-0.005), Vec3::X);
            black_box(camera.apply())
        })
    });
}

criterion_group!(
    benches,
    bench_lorenz_regeneration,
    bench_horizon_scaling,
    bench_camera_frame
);
criterion_main!(benches);
