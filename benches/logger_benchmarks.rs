//! Criterion benchmarks for leveled_log

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use leveled_log::core::encoder::{escape_json_string, write_uint};
use leveled_log::core::frame;
use leveled_log::prelude::*;
use leveled_log::sinks::WriterSink;
use leveled_log::Record;
use std::sync::Arc;

fn null_logger(mode: Mode, config: FormatConfig) -> Logger {
    Logger::builder()
        .mode(mode)
        .format_config(config)
        .sink(WriterSink::new(std::io::sink()))
        .build()
}

// ============================================================================
// Encoder Benchmarks
// ============================================================================

fn bench_encoder(c: &mut Criterion) {
    let mut group = c.benchmark_group("encoder");
    group.throughput(Throughput::Elements(1));

    let mut buf = Vec::with_capacity(64);

    group.bench_function("write_uint_padded", |b| {
        b.iter(|| {
            buf.clear();
            write_uint(&mut buf, black_box(42), black_box(6));
            black_box(&buf);
        });
    });

    group.bench_function("escape_clean", |b| {
        b.iter(|| black_box(escape_json_string(black_box("request completed in 12ms"))));
    });

    group.bench_function("escape_dirty", |b| {
        b.iter(|| black_box(escape_json_string(black_box("said \"hi\"\nand left"))));
    });

    group.finish();
}

// ============================================================================
// Formatter Benchmarks
// ============================================================================

fn bench_formatter(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatter");
    group.throughput(Throughput::Elements(1));

    let formatter = StandardFormatter::default();
    let record = Record::new(
        Severity::Error,
        "connection reset by peer",
        leveled_log::Frame::new("/srv/app/src/net/client.rs", 214, "send_request"),
    );
    let mut buf = Vec::with_capacity(256);

    group.bench_function("terminal", |b| {
        b.iter(|| {
            buf.clear();
            formatter.render(&mut buf, black_box(&record), Mode::Development);
            black_box(&buf);
        });
    });

    group.bench_function("json", |b| {
        b.iter(|| {
            buf.clear();
            formatter.render(&mut buf, black_box(&record), Mode::Production);
            black_box(&buf);
        });
    });

    group.finish();
}

// ============================================================================
// Frame Resolution Benchmarks
// ============================================================================

fn bench_frame_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame_resolution");
    group.throughput(Throughput::Elements(1));

    group.bench_function("caller", |b| {
        b.iter(|| black_box(frame::resolve_caller(black_box(0))));
    });

    group.bench_function("stack_10", |b| {
        b.iter(|| black_box(frame::resolve_stack(0, frame::DEFAULT_STACK_DEPTH)));
    });

    group.finish();
}

// ============================================================================
// Logging Performance Benchmarks
// ============================================================================

fn bench_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("logging");
    group.throughput(Throughput::Elements(1));

    let dev = null_logger(Mode::Development, FormatConfig::default());
    let prod = null_logger(Mode::Production, FormatConfig::default());

    group.bench_function("dev_warn", |b| {
        b.iter(|| dev.warn(&[&black_box("Warn message")]));
    });

    group.bench_function("dev_debug_with_stack", |b| {
        b.iter(|| dev.debug(&[&black_box("Debug message")]));
    });

    group.bench_function("prod_error_fmt", |b| {
        b.iter(|| prod.error_fmt(format_args!("code={}", black_box(500))));
    });

    group.finish();
}

// ============================================================================
// Filtering Benchmarks
// ============================================================================

fn bench_production_filtering(c: &mut Criterion) {
    let mut group = c.benchmark_group("production_filtering");
    group.throughput(Throughput::Elements(1));

    let logger = null_logger(Mode::Production, FormatConfig::default());

    group.bench_function("debug_suppressed", |b| {
        b.iter(|| logger.debug(&[&black_box("This should be filtered")]));
    });

    group.bench_function("error_written", |b| {
        b.iter(|| logger.error(&[&black_box("This should be logged")]));
    });

    group.finish();
}

// ============================================================================
// Concurrent Logging Benchmarks
// ============================================================================

fn bench_concurrent_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent_logging");

    let logger = Arc::new(null_logger(Mode::Production, FormatConfig::default()));

    group.bench_function("multi_thread_4", |b| {
        b.iter(|| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    let logger = Arc::clone(&logger);
                    std::thread::spawn(move || {
                        for _ in 0..100 {
                            let _ = logger.warn(&[&black_box("Concurrent message")]);
                        }
                    })
                })
                .collect();

            for handle in handles {
                let _ = handle.join();
            }
        });
    });

    group.finish();
}

// ============================================================================
// Criterion Configuration
// ============================================================================

criterion_group!(
    benches,
    bench_encoder,
    bench_formatter,
    bench_frame_resolution,
    bench_logging,
    bench_production_filtering,
    bench_concurrent_logging
);

criterion_main!(benches);
