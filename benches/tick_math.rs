use alloy_primitives::{U160, U256};
use clamm_math::prelude::*;
use core::{hint::black_box, ops::Shl};
use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use uniswap_v3_math::tick_math;

fn generate_tick_inputs() -> Vec<i32> {
    let mut inputs = (-128..=128).collect::<Vec<_>>();

    // Add edge cases
    inputs.extend([MIN_TICK, MAX_TICK, 0, 1000, -1000, 74959, -276225]);

    inputs
}

fn generate_sqrt_ratio_inputs() -> Vec<U160> {
    let mut inputs = (33u8..=159)
        .map(|i| U160::from(1).shl(i))
        .collect::<Vec<_>>();

    // Add edge cases
    inputs.extend([MIN_SQRT_RATIO, MAX_SQRT_RATIO, U160::from(Q96)]);

    inputs
}

fn get_sqrt_ratio_at_tick_comparison(c: &mut Criterion) {
    let inputs = generate_tick_inputs();
    let mut group = c.benchmark_group("get_sqrt_ratio_at_tick");
    group.throughput(Throughput::Elements(inputs.len() as u64));

    group.bench_function("clamm", |b| {
        b.iter(|| {
            for tick in &inputs {
                let _ = black_box(get_sqrt_ratio_at_tick(*tick));
            }
        })
    });

    group.bench_function("reference", |b| {
        b.iter(|| {
            for tick in &inputs {
                let _ = black_box(tick_math::get_sqrt_ratio_at_tick(*tick));
            }
        })
    });

    group.finish();
}

fn get_tick_at_sqrt_ratio_comparison(c: &mut Criterion) {
    let inputs = generate_sqrt_ratio_inputs();
    let ref_inputs = inputs.iter().map(|&x| U256::from(x)).collect::<Vec<_>>();
    let mut group = c.benchmark_group("get_tick_at_sqrt_ratio");
    group.throughput(Throughput::Elements(inputs.len() as u64));

    group.bench_function("clamm", |b| {
        b.iter(|| {
            for sqrt_ratio in &inputs {
                let _ = black_box(get_tick_at_sqrt_ratio(*sqrt_ratio));
            }
        })
    });

    group.bench_function("reference", |b| {
        b.iter(|| {
            for sqrt_ratio in &ref_inputs {
                let _ = black_box(tick_math::get_tick_at_sqrt_ratio(*sqrt_ratio));
            }
        })
    });

    group.finish();
}

fn nearest_usable_tick_benchmark(c: &mut Criterion) {
    let inputs = generate_tick_inputs();
    let mut group = c.benchmark_group("nearest_usable_tick");
    group.throughput(Throughput::Elements(inputs.len() as u64));

    group.bench_function("clamm", |b| {
        b.iter(|| {
            for tick in &inputs {
                let _ = black_box(nearest_usable_tick(*tick, FeeAmount::MEDIUM.tick_spacing()));
            }
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    get_sqrt_ratio_at_tick_comparison,
    get_tick_at_sqrt_ratio_comparison,
    nearest_usable_tick_benchmark
);
criterion_main!(benches);
