//! Block-level effects.
//!
//! Each effect wraps the DSP primitives from [`crate::dsp`] behind the
//! [`Effect`] contract: validated `push`, FIFO `get`, `clear`. Effects are
//! generic over the sample kind, so a `DelayEffect<i16>` can only ever process
//! int16 blocks; use [`crate::config::EffectKind::build_dyn`] when the kind is
//! only known at runtime.

/// Feedback comb filter.
pub mod comb;
/// Per-sample feedforward delay.
pub mod delay;
/// Core trait shared by all effects.
pub mod effect;
/// Four-comb early-reflection reverb.
pub mod reverb;

pub use comb::CombFilter;
pub use delay::DelayEffect;
pub use effect::Effect;
pub use reverb::ReverbEffect;
