//! Benchmark for full response construction

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use filter_workbench::catalog::{moving_average, supersmoother};
use filter_workbench::TransferFunction;

fn bench_response(c: &mut Criterion) {
    c.bench_function("moving_average_10", |b| {
        b.iter(|| moving_average(black_box(10)).unwrap())
    });

    c.bench_function("supersmoother_10", |b| {
        b.iter(|| supersmoother(black_box(10.0), 1.0).unwrap())
    });

    c.bench_function("direct_iir_2048_points", |b| {
        b.iter(|| {
            TransferFunction::with_sample_count(
                "bench",
                black_box(vec![1.0, 2.0, 1.0]),
                black_box(vec![4.0, -1.0, 0.25]),
                1.0,
                "",
                2048,
            )
            .unwrap()
        })
    });
}

criterion_group!(benches, bench_response);
criterion_main!(benches);
