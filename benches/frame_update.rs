use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec3;
use std::sync::Arc;

use monkey_viewer::config::ViewerConfig;
use monkey_viewer::loaders::{compute_normals, MeshAsset};
use monkey_viewer::{advance, Orientation, ViewportScene};

/// Flat grid of `n` x `n` quads in the XZ plane
fn grid(n: u32) -> (Vec<Vec3>, Vec<u32>) {
    let mut positions = Vec::with_capacity(((n + 1) * (n + 1)) as usize);
    for z in 0..=n {
        for x in 0..=n {
            positions.push(Vec3::new(x as f32, 0.0, z as f32));
        }
    }

    let mut indices = Vec::with_capacity((n * n * 6) as usize);
    for z in 0..n {
        for x in 0..n {
            let i = z * (n + 1) + x;
            indices.extend_from_slice(&[i, i + n + 1, i + 1, i + 1, i + n + 1, i + n + 2]);
        }
    }
    (positions, indices)
}

fn bench_advance(c: &mut Criterion) {
    c.bench_function("advance_1000_ticks", |b| {
        b.iter(|| {
            let mut orientation = Orientation::ZERO;
            for _ in 0..1000 {
                orientation = advance(orientation, black_box(0.016), true);
            }
            orientation
        })
    });
}

fn bench_scene_frame(c: &mut Criterion) {
    let mut scene = ViewportScene::new(&ViewerConfig::default(), Some(Arc::new(MeshAsset::default())));
    scene.mark_created();

    c.bench_function("scene_tick_and_uniform", |b| {
        b.iter(|| {
            scene.tick(black_box(0.016));
            scene.uniform(black_box(16.0 / 9.0))
        })
    });
}

fn bench_compute_normals(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_normals");
    for size in [16u32, 64, 256] {
        let (positions, indices) = grid(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| compute_normals(black_box(&positions), black_box(&indices)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_advance, bench_scene_frame, bench_compute_normals);
criterion_main!(benches);
