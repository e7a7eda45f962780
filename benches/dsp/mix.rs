//! Benchmarks for dry/wet mixing.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use saavy_fx::dsp::mix;
use saavy_fx::Gains;

use crate::BLOCK_SIZES;

pub fn bench_mix(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/mix");
    let gains = Gains::new(0.7, 0.5);

    for &size in BLOCK_SIZES {
        // Generate test signals
        let dry_f32: Vec<f32> = (0..size).map(|i| (i as f32 * 0.1).sin()).collect();
        let wet_f32: Vec<f32> = (0..size).map(|i| (i as f32 * 0.15).cos()).collect();
        let mut out_f32 = vec![0.0f32; size];

        let dry_i16: Vec<i16> = dry_f32.iter().map(|&x| (x * 16_000.0) as i16).collect();
        let wet_i16: Vec<i16> = wet_f32.iter().map(|&x| (x * 16_000.0) as i16).collect();
        let mut out_i16 = vec![0i16; size];

        // Float mix (no casts)
        group.bench_with_input(BenchmarkId::new("f32", size), &size, |b, _| {
            b.iter(|| {
                mix::mix(
                    black_box(&dry_f32),
                    black_box(&wet_f32),
                    black_box(gains),
                    black_box(&mut out_f32),
                );
            })
        });

        // Integer mix (f64 multiply and cast per term)
        group.bench_with_input(BenchmarkId::new("i16", size), &size, |b, _| {
            b.iter(|| {
                mix::mix(
                    black_box(&dry_i16),
                    black_box(&wet_i16),
                    black_box(gains),
                    black_box(&mut out_i16),
                );
            })
        });

        // Unweighted sum
        group.bench_with_input(BenchmarkId::new("sum_i16", size), &size, |b, _| {
            b.iter(|| {
                mix::sum(black_box(&dry_i16), black_box(&wet_i16), black_box(&mut out_i16));
            })
        });
    }

    group.finish();
}
