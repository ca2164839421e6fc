//! Per-frame cost of the particle field using Criterion.rs.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use particle_field::core::{links, FieldConfig, FieldRenderer, ParticleField, RecordingSurface};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_links(c: &mut Criterion) {
    let config = FieldConfig::default();
    let mut group = c.benchmark_group("proximity_links");
    for count in [60, 120, 500] {
        let config = FieldConfig {
            desktop_count: count,
            ..config.clone()
        };
        let field = ParticleField::random(&mut StdRng::seed_from_u64(42), 1920.0, 1080.0, &config);
        group.bench_with_input(BenchmarkId::from_parameter(count), &field, |b, field| {
            b.iter(|| black_box(links(field.particles(), config.link_distance).count()));
        });
    }
    group.finish();
}

fn bench_tick(c: &mut Criterion) {
    let mut renderer = FieldRenderer::new(FieldConfig::default(), StdRng::seed_from_u64(7));
    let mut surface = RecordingSurface::new();
    renderer.resize(&mut surface, 1920.0, 1080.0);

    c.bench_function("tick_desktop", |b| {
        b.iter(|| black_box(renderer.tick(&mut surface)));
    });
}

criterion_group!(benches, bench_links, bench_tick);
criterion_main!(benches);
