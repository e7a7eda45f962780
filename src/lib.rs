pub mod config; // Effect and pipeline descriptors
pub mod dsp;
pub mod effects; // Block-level effects behind the `Effect` contract
pub mod error;
pub mod io;
pub mod pipeline; // Serial effect chains

pub use config::{EffectConfig, EffectKind, PipelineConfig, StreamFormat};
pub use dsp::{Gains, Sample, SampleType};
pub use effects::{CombFilter, DelayEffect, Effect, ReverbEffect};
pub use error::{BlockError, ConfigError, Error, Mismatch, Result};
pub use io::SampleBlock;
pub use pipeline::Pipeline;

pub const DEFAULT_SAMPLE_RATE: u32 = 44_100;
pub const DEFAULT_CHANNELS: usize = 2;
