//! Overhead of composed and erased operations against direct calls
//!
//! Run with: cargo bench -p fnx-core --bench composition

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fnx_core::functional::prelude::*;
use fnx_core::functional::LongUnaryOperator;
use fnx_core::{chain, Error};

fn step(n: i64) -> Result<i64, Error> {
    n.checked_mul(3)
        .and_then(|n| n.checked_add(1))
        .ok_or_else(|| Error::operation("overflow"))
}

fn bench_pipeline_depth(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline_depth");

    for depth in [1_usize, 4, 16] {
        group.bench_with_input(BenchmarkId::new("direct", depth), &depth, |b, &depth| {
            b.iter(|| {
                let mut value = black_box(1_i64);
                for _ in 0..depth {
                    value = step(value).unwrap_or(0);
                }
                value
            })
        });

        let erased: Vec<LongUnaryOperator> = (0..depth).map(|_| step.shared()).collect();
        group.bench_with_input(BenchmarkId::new("shared", depth), &erased, |b, steps| {
            b.iter(|| {
                let mut value = black_box(1_i64);
                for op in steps {
                    value = op.invoke((value,)).unwrap_or(0);
                }
                value
            })
        });
    }

    group.finish();
}

fn bench_static_chain(c: &mut Criterion) {
    let op = chain!(step, step, step, step);
    c.bench_function("static_chain_4", |b| {
        b.iter(|| op.invoke((black_box(1_i64),)))
    });

    let handled = op.handle(|_: Error, n: i64| n);
    c.bench_function("handled_chain_4", |b| {
        b.iter(|| handled.apply((black_box(i64::MAX),)))
    });
}

fn bench_predicates(c: &mut Criterion) {
    let in_range = total(|n: i32| n >= 0).and(total(|n: i32| n < 1_000));
    let odd = total(|n: i32| n % 2 != 0);
    let predicate = in_range.sub(odd);
    c.bench_function("predicate_algebra", |b| {
        b.iter(|| predicate.apply((black_box(512),)))
    });
}

criterion_group!(
    benches,
    bench_pipeline_depth,
    bench_static_chain,
    bench_predicates
);
criterion_main!(benches);
