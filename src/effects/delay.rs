use crate::config::{DelayParams, StreamFormat};
use crate::dsp::delay::{samples_for_ms, DelayLine};
use crate::dsp::mix::{self, Gains};
use crate::dsp::sample::{Sample, SampleType};
use crate::effects::effect::{accept, Effect, OutputQueue};
use crate::error::{ConfigError, Result};
use crate::io::SampleBlock;

/*
Delay Effect
============

Plays every sample back a fixed time later, blended with the original.

    wet[n]    = x[n - D]            D = delay_time_ms × sample_rate / 1000
    output[n] = x[n] × dry_gain + wet[n] × wet_gain

The delay runs sample by sample through a per-channel FIFO, so timing is exact
across block boundaries and blocks of any length can be pushed. For the first
D samples the wet path is silence.

Example (mono, D = 2, gains 1.0 / 1.0, two pushes):

  push [1, 2, 3]   wet [0, 0, 1]   output [1, 2, 4]
  push [4, 5]      wet [2, 3]      output [6, 8]
*/

/// Per-sample feedforward delay.
pub struct DelayEffect<T: Sample> {
    format: StreamFormat,
    gains: Gains,
    line: DelayLine<T>,
    queue: OutputQueue,
}

impl<T: Sample> DelayEffect<T> {
    pub fn new(format: StreamFormat, params: DelayParams) -> Result<Self, ConfigError> {
        format.validate()?;

        let capacity = samples_for_ms(params.delay_time_ms, format.sample_rate);
        let line = DelayLine::new(format.channels, capacity)?;
        tracing::debug!(
            sample_type = %T::TYPE,
            sample_rate = format.sample_rate,
            channels = format.channels,
            delay_ms = params.delay_time_ms,
            capacity,
            "delay effect created"
        );

        Ok(Self {
            format,
            gains: params.gains,
            line,
            queue: OutputQueue::default(),
        })
    }

    pub fn gains(&self) -> Gains {
        self.gains
    }

    /// Delay length in samples.
    pub fn capacity(&self) -> usize {
        self.line.capacity()
    }

    /// Number of processed blocks waiting for `get`.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Drop queued output and forget the delayed samples.
    pub fn reset(&mut self) {
        self.queue.clear();
        self.line.reset();
    }

    pub(crate) fn render(&mut self, input: &[T]) -> Vec<T> {
        let mut out = vec![T::SILENCE; input.len()];
        self.line.render(input, &mut out);
        mix::mix_in_place(input, &mut out, self.gains);
        out
    }
}

impl<T: Sample> Effect for DelayEffect<T> {
    fn sample_type(&self) -> SampleType {
        T::TYPE
    }

    fn format(&self) -> StreamFormat {
        self.format
    }

    fn push(&mut self, block: SampleBlock) -> Result<()> {
        let input = accept::<T>(&self.format, &block).inspect_err(|err| {
            tracing::debug!(%err, "delay rejected block");
        })?;

        tracing::trace!(frames = block.frames(), "delay push");
        let out = self.render(input);
        self.queue.push(SampleBlock::from_parts(self.format.channels, out));
        Ok(())
    }

    fn get(&mut self) -> Option<SampleBlock> {
        self.queue.pop()
    }

    fn clear(&mut self) {
        self.queue.clear();
    }
}
