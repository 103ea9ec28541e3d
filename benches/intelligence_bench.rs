// ABOUTME: Criterion benchmarks for the split calculator and recommendation service
// ABOUTME: Measures single-request latency and parallel batch throughput
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the recommendation path.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

mod common;

use common::fixtures::{generate_requests, BatchSize};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fitsplit::intelligence::config::intelligence::RecommendationEngineConfig;
use fitsplit::intelligence::{calculate_split, RecommendationEngine};
use fitsplit::models::Goal;
use fitsplit::services::RecommendationService;

fn bench_split_calculation(c: &mut Criterion) {
    let mut group = c.benchmark_group("split_calculation");

    for (label, minutes) in [("low", 90_i64), ("moderate", 250), ("high", 600)] {
        group.bench_with_input(BenchmarkId::from_parameter(label), &minutes, |b, &minutes| {
            b.iter(|| {
                for goal in Goal::ALL {
                    black_box(calculate_split(black_box(goal), black_box(minutes)));
                }
            });
        });
    }

    group.finish();
}

fn bench_engine_recommend(c: &mut Criterion) {
    let engine = RecommendationEngine::with_config(RecommendationEngineConfig::default());

    c.bench_function("engine_recommend", |b| {
        b.iter(|| black_box(engine.recommend(black_box(Goal::MuscleGain), black_box(300))));
    });
}

fn bench_service_handle(c: &mut Criterion) {
    let service = RecommendationService::with_config(RecommendationEngineConfig::default());
    let body = generate_requests(1).remove(0);

    c.bench_function("service_handle_single", |b| {
        b.iter(|| black_box(service.handle(black_box(&body))));
    });
}

fn bench_service_batch(c: &mut Criterion) {
    let service = RecommendationService::with_config(RecommendationEngineConfig::default());
    let mut group = c.benchmark_group("service_batch");

    for size in [BatchSize::Small, BatchSize::Medium, BatchSize::Large] {
        let count = size.count();
        let bodies = generate_requests(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &bodies, |b, bodies| {
            b.iter(|| black_box(service.handle_batch(bodies)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_split_calculation,
    bench_engine_recommend,
    bench_service_handle,
    bench_service_batch
);
criterion_main!(benches);
