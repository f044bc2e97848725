//! Full-frame render benchmarks.
//! Run: cargo bench

use ascii_donut::{AppConfig, RenderContext};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_render_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_frame");
    group.sample_size(50);

    let mut ctx = RenderContext::from_config(&AppConfig::default()).expect("default config");
    group.bench_function("default_80x22", |b| {
        b.iter(|| {
            ctx.advance(0.04, 0.02);
            black_box(ctx.render_frame())
        });
    });

    let mut config = AppConfig::default();
    config.screen.width = 200;
    config.screen.height = 60;
    let mut large = RenderContext::from_config(&config).expect("large config");
    group.bench_function("large_200x60", |b| {
        b.iter(|| {
            large.advance(0.04, 0.02);
            black_box(large.render_frame())
        });
    });

    group.finish();
}

criterion_group!(benches, bench_render_frame);
criterion_main!(benches);
