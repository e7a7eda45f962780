//! Benchmarks for comb filter processing.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use saavy_fx::config::CombParams;
use saavy_fx::{CombFilter, Effect, SampleBlock, StreamFormat};

use crate::{BLOCK_SIZES, CHANNELS};

pub fn bench_comb(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/comb");
    let format = StreamFormat::new(44_100, CHANNELS);

    for &size in BLOCK_SIZES {
        let input: Vec<f32> = (0..size * CHANNELS)
            .map(|i| (i as f32 * 0.05).sin() * 0.5)
            .collect();
        let block = SampleBlock::from_interleaved(CHANNELS, input).unwrap();

        // Short loop (bright, metallic)
        let params = CombParams {
            delay_time_ms: 5,
            ..CombParams::default()
        };
        let mut comb = CombFilter::<f32>::new(format, params).unwrap();
        group.bench_with_input(BenchmarkId::new("short_loop", size), &size, |b, _| {
            b.iter(|| {
                comb.push(black_box(block.clone())).unwrap();
                comb.get()
            })
        });

        // Default loop (100ms)
        let mut comb = CombFilter::<f32>::new(format, CombParams::default()).unwrap();
        group.bench_with_input(BenchmarkId::new("default", size), &size, |b, _| {
            b.iter(|| {
                comb.push(black_box(block.clone())).unwrap();
                comb.get()
            })
        });
    }

    group.finish();
}
