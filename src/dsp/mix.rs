//! Dry/wet gain mixing.

/*
Dry/Wet Mixing
==============

Every effect produces two signal paths and blends them back together:

  dry   the block as it came in (unprocessed)
  wet   what the effect made of it (delayed, fed back, summed reflections)

The blend is a plain weighted sum with two independent gains:

    output = (dry × dry_gain) + (wet × wet_gain)

Unlike a crossfade the two gains do not have to add up to 1.0. The defaults
(0.7 dry / 0.5 wet for a delay) sum to 1.2, which is a small level boost.
Gains outside [0.0, 1.0] are allowed on purpose: 1.5 amplifies, -1.0 inverts
the path. Nothing is clamped.


Per-Term Casting
----------------

Each product is cast back to the sample kind before the addition:

    int16, dry = 3, wet = 3, gains 0.5 / 0.5

      3 × 0.5 = 1.5 → 1
      3 × 0.5 = 1.5 → 1
      1 + 1   = 2            (a final-sum cast would give 3)

See `dsp::sample` for the exact cast and overflow rules.


Clipping Risk
-------------

There is no clipping or saturation stage. Integer sums wrap on overflow:

    int16:  30000 + 30000 = -5536

Keep dry_gain + wet_gain at or below 1.0 for full-scale integer material, or
attenuate upstream. Limiting is a separate concern for the caller.
*/

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dsp::sample::Sample;

/// Dry and wet gain ratios for an effect.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gains {
    pub dry: f32,
    pub wet: f32,
}

impl Gains {
    pub const fn new(dry: f32, wet: f32) -> Self {
        Self { dry, wet }
    }

    /// Dry path only: output equals input.
    pub const fn dry_only() -> Self {
        Self::new(1.0, 0.0)
    }

    /// Wet path only.
    pub const fn wet_only() -> Self {
        Self::new(0.0, 1.0)
    }
}

impl Default for Gains {
    fn default() -> Self {
        Self::new(0.7, 0.3)
    }
}

/// Mix one dry and one wet sample.
///
/// output = cast(dry × gains.dry) + cast(wet × gains.wet)
#[inline]
pub fn mix_sample<T: Sample>(dry: T, wet: T, gains: Gains) -> T {
    dry.scale(gains.dry).add(wet.scale(gains.wet))
}

/// Mix a dry and a wet buffer into `out`.
#[inline]
pub fn mix<T: Sample>(dry: &[T], wet: &[T], gains: Gains, out: &mut [T]) {
    debug_assert_eq!(dry.len(), wet.len());
    debug_assert_eq!(dry.len(), out.len());

    for ((&d, &w), o) in dry.iter().zip(wet.iter()).zip(out.iter_mut()) {
        *o = mix_sample(d, w, gains);
    }
}

/// Mix a dry buffer into the wet buffer in place.
///
/// wet[i] = cast(dry[i] × gains.dry) + cast(wet[i] × gains.wet)
#[inline]
pub fn mix_in_place<T: Sample>(dry: &[T], wet: &mut [T], gains: Gains) {
    debug_assert_eq!(dry.len(), wet.len());

    for (w, &d) in wet.iter_mut().zip(dry.iter()) {
        *w = mix_sample(d, *w, gains);
    }
}

/// Sum two buffers without weighting.
///
/// ⚠️ Integer sums wrap on overflow.
#[inline]
pub fn sum<T: Sample>(a: &[T], b: &[T], out: &mut [T]) {
    debug_assert_eq!(a.len(), b.len());
    debug_assert_eq!(a.len(), out.len());

    for ((&sa, &sb), o) in a.iter().zip(b.iter()).zip(out.iter_mut()) {
        *o = sa.add(sb);
    }
}

/// Add buffer B into buffer A in place.
#[inline]
pub fn sum_in_place<T: Sample>(a: &mut [T], b: &[T]) {
    debug_assert_eq!(a.len(), b.len());

    for (sa, &sb) in a.iter_mut().zip(b.iter()) {
        *sa = (*sa).add(sb);
    }
}
