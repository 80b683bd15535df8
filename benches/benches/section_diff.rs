//! Benchmarks for the section diff engine
//!
//! Performance-critical paths:
//! - full-window scan for the longest common run
//! - first-section latency when the caller stops early
//! - line diffs of source-like text

#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use section_diff::{DefaultEquality, diff, diff_lines, diff_slices};

fn source_text(lines: usize, edit_every: usize) -> String {
    (0..lines)
        .map(|i| {
            if edit_every > 0 && i % edit_every == 0 {
                format!("    let changed_{i} = compute({i});\n")
            } else {
                format!("    let value_{i} = compute({i});\n")
            }
        })
        .collect()
}

fn bench_slices(c: &mut Criterion) {
    let mut group = c.benchmark_group("section_diff/slices");

    for size in [64usize, 256, 1024] {
        let old: Vec<u32> = (0..size as u32).collect();
        let new: Vec<u32> = old.iter().map(|v| if v % 17 == 0 { v + 1_000_000 } else { *v }).collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| diff_slices(black_box(&old), black_box(&new)).count());
        });
    }

    group.finish();
}

fn bench_disjoint(c: &mut Criterion) {
    let mut group = c.benchmark_group("section_diff/disjoint");

    // No common element: one full scan, then Delete + Insert.
    for size in [64usize, 256, 1024] {
        let old = vec![0u8; size];
        let new = vec![1u8; size];
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| diff_slices(black_box(&old), black_box(&new)).count());
        });
    }

    group.finish();
}

fn bench_first_section(c: &mut Criterion) {
    let mut group = c.benchmark_group("section_diff/first_section");

    let old: Vec<u32> = (0..512).collect();
    let new: Vec<u32> = (0..512).rev().collect();
    group.bench_function("reversed_512", |b| {
        b.iter(|| {
            diff(black_box(&old), 0..512, black_box(&new), 0..512, DefaultEquality)
                .map(|mut sections| sections.next())
        });
    });

    group.finish();
}

fn bench_lines(c: &mut Criterion) {
    let mut group = c.benchmark_group("section_diff/lines");

    for lines in [50usize, 200, 800] {
        let old = source_text(lines, 0);
        let new = source_text(lines, 25);
        group.throughput(Throughput::Bytes(old.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(format!("{lines}_lines")), &lines, |b, _| {
            b.iter(|| diff_lines(black_box(&old), black_box(&new)).count());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_slices,
    bench_disjoint,
    bench_first_section,
    bench_lines
);
criterion_main!(benches);
