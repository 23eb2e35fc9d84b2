//! Benchmarks for drape cloth simulation.

use criterion::{criterion_group, criterion_main, Criterion};
use drape::*;

fn bench_sheet_simulation(c: &mut Criterion) {
    c.bench_function("sheet_30x25_60_steps", |b| {
        b.iter(|| {
            let mut cloth: ClothMesh<f32> =
                ClothMesh::from_preset(ClothPreset::Sheet, ClothConfig::new()).unwrap();
            for _ in 0..60 {
                cloth.step(&mut NoOpStepObserver);
            }
            cloth.positions()
        });
    });
}

fn bench_tearing(c: &mut Criterion) {
    c.bench_function("sheet_cut_sweep", |b| {
        b.iter(|| {
            let mut cloth: ClothMesh<f32> =
                ClothMesh::from_preset(ClothPreset::Sheet, ClothConfig::new()).unwrap();
            for i in 0..40 {
                let x = 230.0 + i as f32 * 8.5;
                cloth.sever_links_near(Vec2::new(x, 200.0), 20.0);
                cloth.step(&mut NoOpStepObserver);
            }
            cloth.link_count()
        });
    });
}

fn bench_shading(c: &mut Criterion) {
    let mut cloth: ClothMesh<f32> =
        ClothMesh::from_preset(ClothPreset::Sheet, ClothConfig::new()).unwrap();
    for _ in 0..120 {
        cloth.step(&mut NoOpStepObserver);
    }
    let renderer = MeshRenderer::default();
    c.bench_function("sheet_shade_triangles", |b| {
        b.iter(|| renderer.triangles(&cloth).map(|t| t.color.r as u32).sum::<u32>());
    });
}

criterion_group!(benches, bench_sheet_simulation, bench_tearing, bench_shading);
criterion_main!(benches);
