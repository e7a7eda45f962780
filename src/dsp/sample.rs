//! Sample kinds accepted by the effects.

/*
Sample Kinds
============

Every effect is fixed to exactly one numeric sample kind for its whole life:

  int16    16-bit signed PCM (the usual capture format)
  int32    32-bit signed PCM
  float32  32-bit float, nominally in [-1.0, +1.0]

There is no implicit conversion anywhere. A block of int16 samples pushed into
a float32 effect is rejected, not converted.


Gain Arithmetic
---------------

Effects scale samples by float gains and then add the results:

    out = scale(dry, dry_gain) + scale(wet, wet_gain)

Each product is cast back to the sample kind BEFORE the addition, so rounding
happens per term, not on the final sum:

    int16:  x = 101, gain = 0.5

      scale(101, 0.5)  = 50.5  → 50      (truncate toward zero)
      50 + 50          = 100             (not 101)

Integer kinds multiply in f64 (exact for every i32 value) and cast back with
Rust's float→int `as` cast, which truncates toward zero and saturates at the
type's bounds. Integer addition wraps on overflow. Nothing clips: a hot mix of
two near-full-scale int16 signals wraps around, exactly like the native
arithmetic of the type would.

float32 stays in f32 for both steps.
*/

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::io::SampleData;

/// Runtime tag for the sample kind of a block or effect.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SampleType {
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "int16", alias = "i16"))]
    I16,
    #[cfg_attr(feature = "serde", serde(rename = "int32", alias = "i32"))]
    I32,
    #[cfg_attr(feature = "serde", serde(rename = "float32", alias = "f32"))]
    F32,
}

impl SampleType {
    pub const ALL: [SampleType; 3] = [SampleType::I16, SampleType::I32, SampleType::F32];

    pub fn name(self) -> &'static str {
        match self {
            SampleType::I16 => "int16",
            SampleType::I32 => "int32",
            SampleType::F32 => "float32",
        }
    }
}

impl fmt::Display for SampleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SampleType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "int16" | "i16" => Ok(SampleType::I16),
            "int32" | "i32" => Ok(SampleType::I32),
            "float32" | "f32" => Ok(SampleType::F32),
            _ => Err(ConfigError::UnsupportedSampleType(s.to_string())),
        }
    }
}

/// A numeric sample kind the effects can be instantiated with.
///
/// Implemented for `i16`, `i32` and `f32`.
pub trait Sample: Copy + PartialEq + fmt::Debug + Send + 'static {
    const TYPE: SampleType;
    const SILENCE: Self;

    /// Multiply by `gain` and cast back to `Self`.
    fn scale(self, gain: f32) -> Self;

    /// Native addition for the kind (wrapping for integers).
    fn add(self, other: Self) -> Self;

    /// Widen to f64, for measurements and tests.
    fn to_f64(self) -> f64;

    #[doc(hidden)]
    fn wrap(samples: Vec<Self>) -> SampleData;

    #[doc(hidden)]
    fn view(data: &SampleData) -> Option<&[Self]>;

    #[doc(hidden)]
    fn unwrap(data: SampleData) -> Option<Vec<Self>>;
}

macro_rules! impl_block_access {
    ($variant:ident) => {
        #[inline]
        fn wrap(samples: Vec<Self>) -> SampleData {
            SampleData::$variant(samples)
        }

        #[inline]
        fn view(data: &SampleData) -> Option<&[Self]> {
            match data {
                SampleData::$variant(samples) => Some(samples),
                _ => None,
            }
        }

        #[inline]
        fn unwrap(data: SampleData) -> Option<Vec<Self>> {
            match data {
                SampleData::$variant(samples) => Some(samples),
                _ => None,
            }
        }
    };
}

impl Sample for i16 {
    const TYPE: SampleType = SampleType::I16;
    const SILENCE: Self = 0;

    impl_block_access!(I16);

    #[inline]
    fn scale(self, gain: f32) -> Self {
        (f64::from(self) * f64::from(gain)) as i16
    }

    #[inline]
    fn add(self, other: Self) -> Self {
        self.wrapping_add(other)
    }

    #[inline]
    fn to_f64(self) -> f64 {
        f64::from(self)
    }
}

impl Sample for i32 {
    const TYPE: SampleType = SampleType::I32;
    const SILENCE: Self = 0;

    impl_block_access!(I32);

    #[inline]
    fn scale(self, gain: f32) -> Self {
        (f64::from(self) * f64::from(gain)) as i32
    }

    #[inline]
    fn add(self, other: Self) -> Self {
        self.wrapping_add(other)
    }

    #[inline]
    fn to_f64(self) -> f64 {
        f64::from(self)
    }
}

impl Sample for f32 {
    const TYPE: SampleType = SampleType::F32;
    const SILENCE: Self = 0.0;

    impl_block_access!(F32);

    #[inline]
    fn scale(self, gain: f32) -> Self {
        self * gain
    }

    #[inline]
    fn add(self, other: Self) -> Self {
        self + other
    }

    #[inline]
    fn to_f64(self) -> f64 {
        f64::from(self)
    }
}
