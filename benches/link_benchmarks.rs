//! Benchmarks for phone normalization and link building.
//!
//! These run once per page load, so the numbers mostly guard against
//! accidental regressions such as recompiling the digit regex per call.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use site_links::content::{course_message, COURSES};
use site_links::domain::normalize;
use site_links::{build_chat_link, build_messaging_link};
use std::hint::black_box;

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    for raw in ["091-18-24-47-94", "1234567", "+234 (911) 824-4794"] {
        group.bench_with_input(BenchmarkId::from_parameter(raw), raw, |b, raw| {
            b.iter(|| normalize(black_box(raw)))
        });
    }

    group.finish();
}

fn bench_links(c: &mut Criterion) {
    let number = normalize("091-18-24-47-94");

    c.bench_function("messaging_link_all_courses", |b| {
        b.iter(|| {
            for (_, course) in COURSES {
                black_box(build_messaging_link(&number, &course_message(course)));
            }
        })
    });

    c.bench_function("chat_link", |b| {
        b.iter(|| build_chat_link(black_box("realuser")))
    });
}

criterion_group!(benches, bench_normalize, bench_links);
criterion_main!(benches);
