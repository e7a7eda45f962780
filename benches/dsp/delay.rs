//! Benchmarks for delay line operations.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use saavy_fx::config::DelayParams;
use saavy_fx::dsp::delay::{samples_for_ms, DelayLine};
use saavy_fx::{DelayEffect, Effect, SampleBlock, StreamFormat};

use crate::{BLOCK_SIZES, CHANNELS};

pub fn bench_delay(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/delay");

    // Delay lengths in milliseconds at 44.1kHz
    let delay_times: &[u32] = &[10, 250, 1000];

    for &size in BLOCK_SIZES {
        // Generate a test signal
        let input: Vec<i16> = (0..size * CHANNELS)
            .map(|i| ((i as f32 * 0.1).sin() * 16_000.0) as i16)
            .collect();

        for &delay_ms in delay_times {
            // Raw delay line render
            let capacity = samples_for_ms(delay_ms, 44_100);
            let mut line = DelayLine::<i16>::new(CHANNELS, capacity).unwrap();
            let mut out = vec![0i16; input.len()];
            group.bench_with_input(
                BenchmarkId::new(format!("line_{delay_ms}ms"), size),
                &size,
                |b, _| {
                    b.iter(|| {
                        line.render(black_box(&input), black_box(&mut out));
                    })
                },
            );

            // Full effect: validation, delay, mix, queue round trip
            let params = DelayParams {
                delay_time_ms: delay_ms,
                ..DelayParams::default()
            };
            let mut delay = DelayEffect::<i16>::new(StreamFormat::new(44_100, CHANNELS), params).unwrap();
            let block = SampleBlock::from_interleaved(CHANNELS, input.clone()).unwrap();
            group.bench_with_input(
                BenchmarkId::new(format!("effect_{delay_ms}ms"), size),
                &size,
                |b, _| {
                    b.iter(|| {
                        delay.push(black_box(block.clone())).unwrap();
                        delay.get()
                    })
                },
            );
        }
    }

    group.finish();
}
