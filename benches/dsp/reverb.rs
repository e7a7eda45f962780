//! Benchmarks for reverb processing.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use saavy_fx::config::ReverbParams;
use saavy_fx::{Effect, ReverbEffect, SampleBlock, StreamFormat};

use crate::{BLOCK_SIZES, CHANNELS};

pub fn bench_reverb(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/reverb");
    let format = StreamFormat::new(44_100, CHANNELS);

    for &size in BLOCK_SIZES {
        // Generate a test signal (impulse-like with some content)
        let input: Vec<i16> = (0..size * CHANNELS)
            .map(|i| {
                if i < 10 {
                    (16_000.0 * (1.0 - i as f32 / 10.0)) as i16 // Initial impulse
                } else {
                    ((i as f32 * 0.05).sin() * 1_000.0) as i16 // Quiet tail
                }
            })
            .collect();
        let block = SampleBlock::from_interleaved(CHANNELS, input).unwrap();

        // Default early reflections
        let mut reverb = ReverbEffect::<i16>::new(format, ReverbParams::default()).unwrap();
        group.bench_with_input(BenchmarkId::new("default", size), &size, |b, _| {
            b.iter(|| {
                reverb.push(black_box(block.clone())).unwrap();
                reverb.get()
            })
        });

        // Unrounded delay lengths
        let params = ReverbParams {
            primes: false,
            ..ReverbParams::default()
        };
        let mut reverb = ReverbEffect::<i16>::new(format, params).unwrap();
        group.bench_with_input(BenchmarkId::new("no_primes", size), &size, |b, _| {
            b.iter(|| {
                reverb.push(black_box(block.clone())).unwrap();
                reverb.get()
            })
        });
    }

    group.finish();
}
