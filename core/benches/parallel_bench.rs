//! Runner overhead and picker throughput.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sift_core::api::{run_parallel, task, BoxTask, ParallelOptions, Picker, RunContext};

fn bench_run_parallel(c: &mut Criterion) {
    let mut group = c.benchmark_group("run_parallel");
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let ctx = RunContext::new();

    for concurrency in [0usize, 1, 8] {
        group.bench_with_input(
            BenchmarkId::new("noop_x256", concurrency),
            &concurrency,
            |b, &concurrency| {
                b.iter(|| {
                    let tasks: Vec<BoxTask> =
                        (0..256).map(|_| task(|_ctx| async { Ok(()) })).collect();
                    let opts = ParallelOptions::unlimited().with_concurrency(concurrency);
                    runtime.block_on(async { black_box(run_parallel(&ctx, opts, tasks).await) })
                })
            },
        );
    }

    group.finish();
}

fn bench_picker(c: &mut Criterion) {
    let mut group = c.benchmark_group("picker");
    let items: Vec<u64> = (0..10_000).collect();

    group.bench_function("drain_10k", |b| {
        b.iter(|| Picker::new(black_box(&items)).fold(0u64, |acc, v| acc ^ v))
    });

    group.finish();
}

criterion_group!(benches, bench_run_parallel, bench_picker);
criterion_main!(benches);
