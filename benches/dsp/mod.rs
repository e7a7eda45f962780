//! Benchmarks for low-level DSP primitives and single effects.

mod comb;
mod delay;
mod mix;
mod reverb;

pub use comb::bench_comb;
pub use delay::bench_delay;
pub use mix::bench_mix;
pub use reverb::bench_reverb;
