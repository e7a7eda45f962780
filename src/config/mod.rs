//! Construction parameters for effects and pipelines.
//!
//! Every descriptor is a plain data struct with defaults matching the stock
//! effects. With the `serde` feature enabled they (de)serialize, and missing
//! fields fall back to those defaults, so a patch file only has to name what
//! it changes:
//!
//! ```text
//! { "sample_type": "int16",
//!   "effects": [ { "kind": "delay", "delay_time_ms": 320 },
//!                { "kind": "reverb", "primes": false } ] }
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dsp::mix::Gains;
use crate::dsp::sample::{Sample, SampleType};
use crate::effects::{CombFilter, DelayEffect, Effect, ReverbEffect};
use crate::error::ConfigError;
use crate::pipeline::Pipeline;
use crate::{DEFAULT_CHANNELS, DEFAULT_SAMPLE_RATE};

/// Sample rate and channel count shared by an effect's input and output.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamFormat {
    pub sample_rate: u32,
    pub channels: usize,
}

impl StreamFormat {
    pub const fn new(sample_rate: u32, channels: usize) -> Self {
        Self {
            sample_rate,
            channels,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sample_rate == 0 {
            return Err(ConfigError::ZeroSampleRate);
        }
        if self.channels == 0 {
            return Err(ConfigError::ZeroChannels);
        }
        Ok(())
    }
}

impl Default for StreamFormat {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_RATE, DEFAULT_CHANNELS)
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
#[derive(Debug, Clone, PartialEq)]
pub struct DelayParams {
    pub gains: Gains,
    pub delay_time_ms: u32,
}

impl Default for DelayParams {
    fn default() -> Self {
        Self {
            gains: Gains::new(0.7, 0.5),
            delay_time_ms: 250,
        }
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
#[derive(Debug, Clone, PartialEq)]
pub struct CombParams {
    pub gains: Gains,
    /// Feedback ratio applied to the input before it enters the delay line.
    pub decay: f32,
    pub delay_time_ms: u32,
}

impl Default for CombParams {
    fn default() -> Self {
        Self {
            gains: Gains::new(0.7, 0.7),
            decay: 0.9,
            delay_time_ms: 100,
        }
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
#[derive(Debug, Clone, PartialEq)]
pub struct ReverbParams {
    pub gains: Gains,
    /// Early-reflection delay times in milliseconds, one per comb filter.
    pub delays: [u32; 4],
    /// Round each delay length up to the next `6k + 1` sample count.
    pub primes: bool,
}

impl Default for ReverbParams {
    fn default() -> Self {
        Self {
            gains: Gains::new(0.7, 0.7),
            delays: [43, 53, 61, 71],
            primes: true,
        }
    }
}

/// Which effect to build, with its parameters.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(tag = "kind", rename_all = "snake_case")
)]
#[derive(Debug, Clone, PartialEq)]
pub enum EffectKind {
    Delay(DelayParams),
    Comb(CombParams),
    Reverb(ReverbParams),
}

impl EffectKind {
    fn build<T: Sample>(&self, format: StreamFormat) -> Result<Box<dyn Effect>, ConfigError> {
        Ok(match self {
            EffectKind::Delay(params) => Box::new(DelayEffect::<T>::new(format, params.clone())?),
            EffectKind::Comb(params) => Box::new(CombFilter::<T>::new(format, params.clone())?),
            EffectKind::Reverb(params) => Box::new(ReverbEffect::<T>::new(format, params.clone())?),
        })
    }

    /// Build for a sample kind only known at runtime.
    pub fn build_dyn(&self, sample_type: SampleType, format: StreamFormat) -> Result<Box<dyn Effect>, ConfigError> {
        match sample_type {
            SampleType::I16 => self.build::<i16>(format),
            SampleType::I32 => self.build::<i32>(format),
            SampleType::F32 => self.build::<f32>(format),
        }
    }
}

/// A single effect with its stream settings.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EffectConfig {
    #[cfg_attr(feature = "serde", serde(default))]
    pub sample_type: SampleType,
    #[cfg_attr(feature = "serde", serde(default))]
    pub format: StreamFormat,
    pub effect: EffectKind,
}

impl EffectConfig {
    pub fn build(&self) -> Result<Box<dyn Effect>, ConfigError> {
        self.effect.build_dyn(self.sample_type, self.format)
    }
}

/// An ordered chain of effects sharing one stream format.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PipelineConfig {
    pub sample_type: SampleType,
    pub format: StreamFormat,
    pub effects: Vec<EffectKind>,
}

impl PipelineConfig {
    pub fn build(&self) -> Result<Pipeline, ConfigError> {
        let mut pipeline = Pipeline::new(self.sample_type, self.format)?;
        for effect in &self.effects {
            pipeline.append_effect(effect.build_dyn(self.sample_type, self.format)?)?;
        }
        Ok(pipeline)
    }
}
