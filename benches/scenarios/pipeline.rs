//! Benchmarks for complete effect pipelines.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use saavy_fx::config::{CombParams, DelayParams, ReverbParams};
use saavy_fx::{Effect, EffectKind, PipelineConfig, SampleBlock, SampleType, StreamFormat};

use crate::{BLOCK_SIZES, CHANNELS};

pub fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/pipeline");
    let format = StreamFormat::new(44_100, CHANNELS);

    for &size in BLOCK_SIZES {
        let input: Vec<i16> = (0..size * CHANNELS)
            .map(|i| ((i as f32 * 0.02).sin() * 12_000.0) as i16)
            .collect();
        let block = SampleBlock::from_interleaved(CHANNELS, input).unwrap();

        // === SLAPBACK: delay into reverb ===
        let mut slapback = PipelineConfig {
            sample_type: SampleType::I16,
            format,
            effects: vec![
                EffectKind::Delay(DelayParams {
                    delay_time_ms: 120,
                    ..DelayParams::default()
                }),
                EffectKind::Reverb(ReverbParams::default()),
            ],
        }
        .build()
        .unwrap();

        group.bench_with_input(BenchmarkId::new("delay_reverb", size), &size, |b, _| {
            b.iter(|| {
                slapback.push(black_box(block.clone())).unwrap();
                slapback.get()
            })
        });

        // === FULL: every effect in series ===
        let mut full = PipelineConfig {
            sample_type: SampleType::I16,
            format,
            effects: vec![
                EffectKind::Delay(DelayParams::default()),
                EffectKind::Comb(CombParams::default()),
                EffectKind::Reverb(ReverbParams::default()),
            ],
        }
        .build()
        .unwrap();

        group.bench_with_input(BenchmarkId::new("delay_comb_reverb", size), &size, |b, _| {
            b.iter(|| {
                full.push(black_box(block.clone())).unwrap();
                full.get()
            })
        });
    }

    group.finish();
}
