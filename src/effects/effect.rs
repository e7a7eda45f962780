use std::collections::VecDeque;

use crate::config::StreamFormat;
use crate::dsp::sample::{Sample, SampleType};
use crate::error::{Mismatch, Result};
use crate::io::SampleBlock;

/// Core trait for block-processing effects.
///
/// An effect is configured once at construction. Blocks go in through
/// [`push`](Effect::push) and processed blocks come out of
/// [`get`](Effect::get) in the same order. `get` returning `None` is the
/// normal "nothing ready yet" state, not a failure.
pub trait Effect: Send {
    /// Sample kind every pushed block must carry.
    fn sample_type(&self) -> SampleType;

    /// Sample rate and channel count the effect was built for.
    fn format(&self) -> StreamFormat;

    /// Process a block and queue the result.
    ///
    /// Fails with [`Error::TypeMismatch`](crate::Error::TypeMismatch) when the
    /// block's sample kind or channel count does not fit the effect. A failed
    /// push leaves the effect untouched.
    ///
    /// Implementations must not fail on a block whose layout matches
    /// [`sample_type`](Effect::sample_type) and [`format`](Effect::format); a
    /// [`Pipeline`](crate::Pipeline) relies on that when it moves blocks
    /// between stages.
    fn push(&mut self, block: SampleBlock) -> Result<()>;

    /// Oldest processed block, if any.
    fn get(&mut self) -> Option<SampleBlock>;

    /// Drop queued output. Delay memory and timing are kept.
    fn clear(&mut self);
}

/// Allow boxed effects to be used as effects (for dynamic dispatch)
impl Effect for Box<dyn Effect> {
    fn sample_type(&self) -> SampleType {
        (**self).sample_type()
    }

    fn format(&self) -> StreamFormat {
        (**self).format()
    }

    fn push(&mut self, block: SampleBlock) -> Result<()> {
        (**self).push(block)
    }

    fn get(&mut self) -> Option<SampleBlock> {
        (**self).get()
    }

    fn clear(&mut self) {
        (**self).clear()
    }
}

/// Check that `block` fits an effect of kind `T` with `format`, and borrow its samples.
pub(crate) fn accept<'a, T: Sample>(format: &StreamFormat, block: &'a SampleBlock) -> Result<&'a [T]> {
    let samples = block.samples::<T>().ok_or(Mismatch::SampleType {
        expected: T::TYPE,
        found: block.sample_type(),
    })?;

    if block.channels() != format.channels {
        return Err(Mismatch::Channels {
            expected: format.channels,
            found: block.channels(),
        }
        .into());
    }

    Ok(samples)
}

/// FIFO of processed blocks waiting for `get`.
#[derive(Debug, Default)]
pub(crate) struct OutputQueue {
    blocks: VecDeque<SampleBlock>,
}

impl OutputQueue {
    pub fn push(&mut self, block: SampleBlock) {
        self.blocks.push_back(block);
    }

    pub fn pop(&mut self) -> Option<SampleBlock> {
        self.blocks.pop_front()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn clear(&mut self) {
        self.blocks.clear();
    }
}
