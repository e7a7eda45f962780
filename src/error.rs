use crate::dsp::sample::SampleType;

/// Errors returned when pushing blocks into effects.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The block's sample kind or channel count differs from the effect's.
    #[error("block does not fit the effect: {0}")]
    TypeMismatch(#[from] Mismatch),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Block(#[from] BlockError),
}

/// Which part of a block's layout was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Mismatch {
    #[error("sample type {found}, expected {expected}")]
    SampleType { expected: SampleType, found: SampleType },

    #[error("{found} channels, expected {expected}")]
    Channels { expected: usize, found: usize },
}

/// Errors raised while constructing effects and pipelines.
///
/// No instance is created when one of these is returned.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("unsupported sample type `{0}` (expected int16, int32 or float32)")]
    UnsupportedSampleType(String),

    #[error("channel count must be at least 1")]
    ZeroChannels,

    #[error("sample rate must be non-zero")]
    ZeroSampleRate,

    #[error("delay resolves to zero samples; a feedback path needs at least one")]
    ZeroLengthDelay,

    #[error("delay of {capacity} samples x{channels} exceeds the {max}-sample limit")]
    DelayTooLong {
        channels: usize,
        capacity: usize,
        max: usize,
    },

    #[error(
        "stage expects {found_type} x{found_channels} @ {found_rate} Hz, \
         pipeline carries {expected_type} x{expected_channels} @ {expected_rate} Hz"
    )]
    IncompatibleStage {
        expected_type: SampleType,
        expected_channels: usize,
        expected_rate: u32,
        found_type: SampleType,
        found_channels: usize,
        found_rate: u32,
    },
}

/// Errors raised when building a [`SampleBlock`](crate::io::SampleBlock) from raw samples.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BlockError {
    #[error("a block needs at least one channel")]
    ZeroChannels,

    #[error("{len} samples do not divide into whole frames of {channels} channels")]
    Ragged { len: usize, channels: usize },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
