use crate::config::{CombParams, StreamFormat};
use crate::dsp::delay::{samples_for_ms, DelayLine};
use crate::dsp::mix::{self, Gains};
use crate::dsp::sample::{Sample, SampleType};
use crate::effects::effect::{accept, Effect, OutputQueue};
use crate::error::{ConfigError, Result};
use crate::io::SampleBlock;

/*
Comb Filter
===========

A delay line whose output is fed back into its own input. Each pass around the
loop comes out again D samples later, quieter, producing a train of evenly
spaced echoes and the matching comb of resonant peaks in the spectrum.

    wet[n]    = line[n - D]
    line[n]   = x[n] × decay + wet[n] × wet_gain        (written back)
    output[n] = x[n] × dry_gain + wet[n] × wet_gain

Both terms of the feedback write are cast to the sample kind before they are
added, like every other mix in the crate.

Impulse Response
----------------

An impulse of height A pushed into a fresh filter reappears every D samples:

    n = D     A × decay × wet_gain
    n = 2D    A × decay × wet_gain²
    n = 3D    A × decay × wet_gain³
    ...

so the echo train decays geometrically by `wet_gain` per period. With
|wet_gain| >= 1.0 the loop never dies down (integers will wrap).
*/

/// Feedback comb filter.
pub struct CombFilter<T: Sample> {
    format: StreamFormat,
    gains: Gains,
    decay: f32,
    line: DelayLine<T>,
    queue: OutputQueue,
}

impl<T: Sample> CombFilter<T> {
    pub fn new(format: StreamFormat, params: CombParams) -> Result<Self, ConfigError> {
        format.validate()?;
        let capacity = samples_for_ms(params.delay_time_ms, format.sample_rate);
        Self::with_capacity(format, params.gains, params.decay, capacity)
    }

    /// Build with a delay length given directly in samples.
    pub fn with_capacity(format: StreamFormat, gains: Gains, decay: f32, capacity: usize) -> Result<Self, ConfigError> {
        format.validate()?;
        if capacity == 0 {
            return Err(ConfigError::ZeroLengthDelay);
        }

        let line = DelayLine::new(format.channels, capacity)?;
        tracing::debug!(
            sample_type = %T::TYPE,
            sample_rate = format.sample_rate,
            channels = format.channels,
            capacity,
            decay,
            "comb filter created"
        );

        Ok(Self {
            format,
            gains,
            decay,
            line,
            queue: OutputQueue::default(),
        })
    }

    pub fn gains(&self) -> Gains {
        self.gains
    }

    pub fn decay(&self) -> f32 {
        self.decay
    }

    /// Loop length in samples.
    pub fn capacity(&self) -> usize {
        self.line.capacity()
    }

    /// Number of processed blocks waiting for `get`.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Drop queued output and silence the feedback loop.
    pub fn reset(&mut self) {
        self.queue.clear();
        self.line.reset();
    }

    /// Process one interleaved block synchronously, bypassing the output queue.
    pub(crate) fn render(&mut self, input: &[T]) -> Vec<T> {
        let channels = self.format.channels;
        let mut out = vec![T::SILENCE; input.len()];

        for (frame_in, frame_out) in input.chunks_exact(channels).zip(out.chunks_exact_mut(channels)) {
            for (channel, (&x, wet)) in frame_in.iter().zip(frame_out.iter_mut()).enumerate() {
                // Capacity is at least one, so there is always a sample to read back.
                let readback = self.line.oldest(channel).unwrap_or(T::SILENCE);
                let feed = x.scale(self.decay).add(readback.scale(self.gains.wet));
                *wet = self.line.push_sample(channel, feed);
            }
        }

        mix::mix_in_place(input, &mut out, self.gains);
        out
    }
}

impl<T: Sample> Effect for CombFilter<T> {
    fn sample_type(&self) -> SampleType {
        T::TYPE
    }

    fn format(&self) -> StreamFormat {
        self.format
    }

    fn push(&mut self, block: SampleBlock) -> Result<()> {
        let input = accept::<T>(&self.format, &block).inspect_err(|err| {
            tracing::debug!(%err, "comb filter rejected block");
        })?;

        tracing::trace!(frames = block.frames(), "comb push");
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
