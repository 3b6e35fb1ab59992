//! Criterion benchmarks for the hot paths: timer map operations, scope
//! timing, and channel emission (suppressed and formatted).
//!
//! Run with: cargo bench

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use chassis::logging::{LogConfig, LogRegistry, LogSink, Severity, CORE_CHANNEL};
use chassis::profiling::Profiler;
use chassis::ScopedTimer;

/// Sink that formats lines into the void.
struct NullSink;

impl LogSink for NullSink {
    fn write_line(&self, line: &str) {
        black_box(line);
    }

    fn flush(&self) {}
}

fn bench_timer_start_end(c: &mut Criterion) {
    let profiler = Profiler::new();
    c.bench_function("timer_start_end", |b| {
        b.iter(|| {
            profiler.start(black_box("bench"));
            profiler.end(black_box("bench")).unwrap()
        });
    });
}

fn bench_timer_elapsed_probe(c: &mut Criterion) {
    let profiler = Profiler::new();
    profiler.start("bench");
    c.bench_function("timer_elapsed_probe", |b| {
        b.iter(|| profiler.elapsed_us(black_box("bench")));
    });
}

fn bench_scoped_timer_drop(c: &mut Criterion) {
    c.bench_function("scoped_timer_drop", |b| {
        b.iter(|| ScopedTimer::new(black_box("bench")));
    });
}

fn bench_suppressed_emission(c: &mut Criterion) {
    let registry = LogRegistry::with_sink(&LogConfig::default(), Arc::new(NullSink)).unwrap();
    registry.set_level_all(Severity::Error);
    let core = registry.get(CORE_CHANNEL).unwrap();
    c.bench_function("suppressed_emission", |b| {
        b.iter(|| core.debug(format_args!("value = {}", black_box(42))));
    });
}

fn bench_formatted_emission(c: &mut Criterion) {
    let config = LogConfig {
        ansi_colors: false,
        ..LogConfig::default()
    };
    let registry = LogRegistry::with_sink(&config, Arc::new(NullSink)).unwrap();
    let core = registry.get(CORE_CHANNEL).unwrap();
    c.bench_function("formatted_emission", |b| {
        b.iter(|| core.info(format_args!("value = {}", black_box(42))));
    });
}

criterion_group!(
    benches,
    bench_timer_start_end,
    bench_timer_elapsed_probe,
    bench_scoped_timer_drop,
    bench_suppressed_emission,
    bench_formatted_emission
);
criterion_main!(benches);
