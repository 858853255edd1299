//! Combinator benchmarks
//!
//! Measures the cost of sequential chains, accumulating zips and type
//! erasure on the same field validator.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use nebula_validated::prelude::*;
use std::hint::black_box;

fn username() -> impl Validator<Input = Option<String>, Output = String, Error = Violation> {
    non_blank_string(Violation::required)
        .trim()
        .to_lowercase()
        .min_len(3, |_| Violation::min_length(3))
        .max_len(16, |_| Violation::max_length(16))
}

/// Sequential chain, accepted and rejected early
fn bench_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("chain");
    let v = username();

    for (name, input) in [
        ("accepted", Some("  Ada_Lovelace ".to_string())),
        ("blank", Some("   ".to_string())),
        ("null", None),
    ] {
        group.bench_with_input(BenchmarkId::new("username", name), &input, |b, input| {
            b.iter(|| black_box(v.parse(black_box(input.clone()))));
        });
    }

    group.finish();
}

/// Accumulating composition by arity
fn bench_zip(c: &mut Criterion) {
    let mut group = c.benchmark_group("zip");
    let input = Some("grace".to_string());

    group.bench_function("zip2", |b| {
        let v = zip(username(), username());
        b.iter(|| black_box(v.parse(black_box(input.clone()))));
    });

    group.bench_function("zip6", |b| {
        let v = zip6(username(), username(), username(), username(), username(), username());
        b.iter(|| black_box(v.parse(black_box(input.clone()))));
    });

    group.bench_function("zip6_all_fail", |b| {
        let v = zip6(username(), username(), username(), username(), username(), username());
        b.iter(|| black_box(v.parse(black_box(None))));
    });

    group.finish();
}

/// Static dispatch vs `BoxValidator`
fn bench_boxed(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");
    let input = Some("  Ada ".to_string());

    let concrete = username();
    group.bench_function("concrete", |b| {
        b.iter(|| black_box(concrete.parse(black_box(input.clone()))));
    });

    let boxed = username().boxed();
    group.bench_function("boxed", |b| {
        b.iter(|| black_box(boxed.parse(black_box(input.clone()))));
    });

    group.finish();
}

criterion_group!(benches, bench_chain, bench_zip, bench_boxed);
criterion_main!(benches);
