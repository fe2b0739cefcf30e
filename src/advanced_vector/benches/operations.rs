/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

use std::hint::black_box;

use advanced_vector::Vector;
use criterion::{BatchSize, BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

const SIZES: &[usize] = &[16, 1_000, 100_000];

fn bench_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("push");
    for &n in SIZES {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("Vector", n), &n, |b, &n| {
            b.iter(|| {
                let mut v = Vector::new();
                for i in 0..n {
                    v.push(black_box(i));
                }
                v
            });
        });
        group.bench_with_input(BenchmarkId::new("Vec", n), &n, |b, &n| {
            b.iter(|| {
                let mut v = Vec::new();
                for i in 0..n {
                    v.push(black_box(i));
                }
                v
            });
        });
    }
    group.finish();
}

fn bench_emplace_back_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("emplace_back_strings");
    group.throughput(Throughput::Elements(1_000));
    group.bench_function("Vector", |b| {
        b.iter(|| {
            let mut v = Vector::new();
            for i in 0..1_000 {
                v.emplace_back(|| black_box(i).to_string());
            }
            v
        });
    });
    group.finish();
}

fn bench_insert_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_front");
    // Inserting at the front shifts every element, so keep the sizes small.
    for &n in &SIZES[..2] {
        group.bench_with_input(BenchmarkId::new("Vector", n), &n, |b, &n| {
            b.iter_batched(
                || (0..n).collect::<Vector<usize>>(),
                |mut v| {
                    v.insert(0, black_box(usize::MAX));
                    v
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_erase_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("erase_front");
    for &n in &SIZES[..2] {
        group.bench_with_input(BenchmarkId::new("Vector", n), &n, |b, &n| {
            b.iter_batched(
                || (0..n).collect::<Vector<usize>>(),
                |mut v| {
                    black_box(v.erase(0));
                    v
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_clone(c: &mut Criterion) {
    let mut group = c.benchmark_group("clone");
    let source: Vector<String> = (0..1_000).map(|i| i.to_string()).collect();
    group.bench_function("clone", |b| b.iter(|| black_box(&source).clone()));
    group.bench_function("clone_from", |b| {
        let mut dst = source.clone();
        b.iter(|| dst.clone_from(black_box(&source)));
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_push,
    bench_emplace_back_strings,
    bench_insert_front,
    bench_erase_front,
    bench_clone
);
criterion_main!(benches);
