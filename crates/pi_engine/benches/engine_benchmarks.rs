//! Criterion benchmarks for history construction and playback.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pi_engine::config::SimulationConfig;
use pi_engine::estimator::compute_history;
use pi_engine::frames::FrameStore;
use pi_engine::playback::Playback;
use pi_engine::render::TextRenderer;
use pi_engine::rng::SampleRng;
use pi_engine::source::{PseudoRandomSource, QuasiRandomSource, SobolOrder, SourceKind};
use std::io;

fn bench_sources(c: &mut Criterion) {
    let mut group = c.benchmark_group("history");
    for pow in [10u32, 14, 18] {
        let n = 1usize << pow;
        group.bench_with_input(BenchmarkId::new("pseudorandom", n), &n, |b, &n| {
            b.iter(|| {
                let mut source = PseudoRandomSource::new(n, SampleRng::from_seed(42));
                black_box(FrameStore::from_source(&mut source).unwrap())
            })
        });
        group.bench_with_input(BenchmarkId::new("quasirandom", n), &n, |b, &n| {
            b.iter(|| {
                let mut source = QuasiRandomSource::new(n, SobolOrder::Reverse).unwrap();
                black_box(FrameStore::from_source(&mut source).unwrap())
            })
        });
    }
    group.finish();
}

fn bench_estimator(c: &mut Criterion) {
    let mut source = QuasiRandomSource::new(1 << 16, SobolOrder::Forward).unwrap();
    let points = pi_engine::source::PointSource::drain(&mut source).unwrap();
    c.bench_function("compute_history_65536", |b| {
        b.iter(|| black_box(compute_history(black_box(&points))))
    });
}

fn bench_playback(c: &mut Criterion) {
    let config = SimulationConfig::builder()
        .n_points(1 << 14)
        .points_per_frame(1 << 4)
        .seed(42)
        .build()
        .unwrap();
    let playback = Playback::from_config(
        &config,
        &[SourceKind::Pseudorandom, SourceKind::Quasirandom],
    )
    .unwrap();

    c.bench_function("compare_playback_text", |b| {
        b.iter(|| {
            let mut renderer = TextRenderer::new(io::sink());
            black_box(playback.run(&mut renderer).unwrap())
        })
    });
}

criterion_group!(benches, bench_sources, bench_estimator, bench_playback);
criterion_main!(benches);
