use crate::dsp::sample::{Sample, SampleType};
use crate::error::BlockError;

/// Interleaved sample storage, tagged with its kind.
#[derive(Debug, Clone, PartialEq)]
pub enum SampleData {
    I16(Vec<i16>),
    I32(Vec<i32>),
    F32(Vec<f32>),
}

impl SampleData {
    pub fn sample_type(&self) -> SampleType {
        match self {
            SampleData::I16(_) => SampleType::I16,
            SampleData::I32(_) => SampleType::I32,
            SampleData::F32(_) => SampleType::F32,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            SampleData::I16(s) => s.len(),
            SampleData::I32(s) => s.len(),
            SampleData::F32(s) => s.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A block of interleaved multichannel audio: `frames × channels` samples of one kind.
///
/// Frame `i`, channel `c` lives at index `i * channels + c`. The frame count may
/// differ from block to block; the channel count and sample kind must match the
/// effect the block is pushed into.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleBlock {
    channels: usize,
    data: SampleData,
}

impl SampleBlock {
    /// Build a block from interleaved samples.
    pub fn from_interleaved<T: Sample>(channels: usize, samples: Vec<T>) -> Result<Self, BlockError> {
        if channels == 0 {
            return Err(BlockError::ZeroChannels);
        }
        if samples.len() % channels != 0 {
            return Err(BlockError::Ragged {
                len: samples.len(),
                channels,
            });
        }
        Ok(Self::from_parts(channels, samples))
    }

    /// Build a block from per-frame arrays, e.g. `[[l, r], [l, r]]`.
    pub fn from_frames<T: Sample, const C: usize>(frames: &[[T; C]]) -> Result<Self, BlockError> {
        let samples = frames.iter().flatten().copied().collect();
        Self::from_interleaved(C, samples)
    }

    /// A block of silence in the given kind.
    pub fn silence(sample_type: SampleType, frames: usize, channels: usize) -> Result<Self, BlockError> {
        let len = frames * channels;
        match sample_type {
            SampleType::I16 => Self::from_interleaved(channels, vec![0i16; len]),
            SampleType::I32 => Self::from_interleaved(channels, vec![0i32; len]),
            SampleType::F32 => Self::from_interleaved(channels, vec![0.0f32; len]),
        }
    }

    /// Shape is known valid: the caller produced `samples` from a block of `channels`.
    pub(crate) fn from_parts<T: Sample>(channels: usize, samples: Vec<T>) -> Self {
        debug_assert!(channels > 0 && samples.len() % channels == 0);
        Self {
            channels,
            data: T::wrap(samples),
        }
    }

    pub fn sample_type(&self) -> SampleType {
        self.data.sample_type()
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    pub fn frames(&self) -> usize {
        self.data.len() / self.channels
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn data(&self) -> &SampleData {
        &self.data
    }

    /// Interleaved samples, if the block holds kind `T`.
    pub fn samples<T: Sample>(&self) -> Option<&[T]> {
        T::view(&self.data)
    }

    /// Take the interleaved samples out, if the block holds kind `T`.
    pub fn into_samples<T: Sample>(self) -> Option<Vec<T>> {
        T::unwrap(self.data)
    }

    /// One frame (all channels), if the block holds kind `T` and `index` is in range.
    pub fn frame<T: Sample>(&self, index: usize) -> Option<&[T]> {
        let samples = self.samples::<T>()?;
        let start = index.checked_mul(self.channels)?;
        let end = start.checked_add(self.channels)?;
        samples.get(start..end)
    }

    /// True when every sample equals the kind's silence value.
    pub fn is_silent(&self) -> bool {
        match &self.data {
            SampleData::I16(s) => s.iter().all(|&x| x == 0),
            SampleData::I32(s) => s.iter().all(|&x| x == 0),
            SampleData::F32(s) => s.iter().all(|&x| x == 0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_from_interleaved() {
        let block = SampleBlock::from_interleaved(2, vec![1i16, 2, 3, 4, 5, 6]).unwrap();

        assert_eq!(block.channels(), 2);
        assert_eq!(block.frames(), 3);
        assert_eq!(block.sample_type(), SampleType::I16);
        assert_eq!(block.frame::<i16>(1), Some(&[3i16, 4][..]));
        assert_eq!(block.frame::<i16>(3), None);
        assert_eq!(block.frame::<i16>(usize::MAX / 2), None);
        assert_eq!(block.frame::<i16>(usize::MAX), None);
    }

    #[test]
    fn test_from_frames_interleaves() {
        let block = SampleBlock::from_frames(&[[0.1f32, 0.2], [0.3, 0.4]]).unwrap();
        assert_eq!(block.samples::<f32>(), Some(&[0.1f32, 0.2, 0.3, 0.4][..]));
    }

    #[test]
    fn test_rejects_ragged_and_channelless_blocks() {
        assert_eq!(
            SampleBlock::from_interleaved(2, vec![1i32, 2, 3]),
            Err(BlockError::Ragged { len: 3, channels: 2 })
        );
        assert_eq!(
            SampleBlock::from_interleaved::<i32>(0, vec![]),
            Err(BlockError::ZeroChannels)
        );
    }

    #[test]
    fn test_typed_access_checks_kind() {
        let block = SampleBlock::from_interleaved(1, vec![0.5f32]).unwrap();
        assert!(block.samples::<i16>().is_none());
        assert!(block.clone().into_samples::<i32>().is_none());
        assert_eq!(block.into_samples::<f32>(), Some(vec![0.5]));
    }

    #[test]
    fn test_silence() {
        for ty in SampleType::ALL {
            let block = SampleBlock::silence(ty, 64, 2).unwrap();
            assert_eq!(block.sample_type(), ty);
            assert_eq!(block.frames(), 64);
            assert!(block.is_silent());
        }
    }

    #[test]
    fn test_empty_block_is_valid() {
        let block = SampleBlock::from_interleaved::<i16>(2, vec![]).unwrap();
        assert_eq!(block.frames(), 0);
        assert!(block.is_empty());
    }
}
