//! Low-level DSP primitives used by the effects.
//!
//! These pieces stay focused on the signal-processing math: sample kinds and
//! their cast rules, the per-channel delay line, and dry/wet mixing. The
//! effects in [`crate::effects`] compose them behind the block-level contract.

/// Fixed-depth per-channel delay line.
pub mod delay;
/// Dry/wet gain mixing and summing.
pub mod mix;
/// Sample kinds (`i16`, `i32`, `f32`) and their arithmetic.
pub mod sample;

pub use delay::DelayLine;
pub use mix::Gains;
pub use sample::{Sample, SampleType};
