use crate::dsp::sample::Sample;
use crate::error::ConfigError;

/// Largest number of samples (all channels together) one delay line may hold.
pub const MAX_DELAY_LINE_SAMPLES: usize = 1 << 27;

/// Number of samples covered by `delay_ms` at `sample_rate`.
#[inline]
pub fn samples_for_ms(delay_ms: u32, sample_rate: u32) -> usize {
    usize::try_from(u64::from(delay_ms) * u64::from(sample_rate) / 1000).unwrap_or(usize::MAX)
}

/// Round `samples` up to the next value of the form `6k + 1`.
///
/// Every prime above 3 has that form, so delay lengths picked this way rarely
/// share small factors and their comb resonances don't stack.
#[inline]
pub fn next_prime_like(samples: usize) -> usize {
    if samples <= 1 {
        return 1;
    }
    (samples - 1).div_ceil(6).saturating_mul(6).saturating_add(1)
}

/// Fixed-depth FIFO per channel.
///
/// Each channel is a ring of `capacity` samples stored in one flat buffer.
/// The ring is always full: pushing a sample evicts and returns the oldest one,
/// so a value comes back out exactly `capacity` pushes later.
pub struct DelayLine<T: Sample> {
    buffer: Vec<T>,
    heads: Vec<usize>,
    capacity: usize,
}

impl<T: Sample> DelayLine<T> {
    /// Allocate `channels` rings of `capacity` samples, pre-filled with silence.
    ///
    /// Fails with [`ConfigError::DelayTooLong`] when the rings together would
    /// exceed [`MAX_DELAY_LINE_SAMPLES`].
    pub fn new(channels: usize, capacity: usize) -> Result<Self, ConfigError> {
        let len = channels
            .checked_mul(capacity)
            .filter(|&len| len <= MAX_DELAY_LINE_SAMPLES)
            .ok_or(ConfigError::DelayTooLong {
                channels,
                capacity,
                max: MAX_DELAY_LINE_SAMPLES,
            })?;

        tracing::debug!(channels, capacity, sample_type = %T::TYPE, "delay line allocated");
        Ok(Self {
            buffer: vec![T::SILENCE; len],
            heads: vec![0; channels],
            capacity,
        })
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn channels(&self) -> usize {
        self.heads.len()
    }

    /// Append `sample` to `channel` and return the sample evicted from its head.
    ///
    /// With a capacity of zero the line is a pass-through.
    #[inline]
    pub fn push_sample(&mut self, channel: usize, sample: T) -> T {
        debug_assert!(channel < self.channels());

        if self.capacity == 0 {
            return sample;
        }

        let head = self.heads[channel];
        let oldest = std::mem::replace(&mut self.buffer[channel * self.capacity + head], sample);
        self.heads[channel] = if head + 1 == self.capacity { 0 } else { head + 1 };
        oldest
    }

    /// The sample the next `push_sample` on `channel` will return.
    #[inline]
    pub fn oldest(&self, channel: usize) -> Option<T> {
        debug_assert!(channel < self.channels());

        if self.capacity == 0 {
            return None;
        }
        Some(self.buffer[channel * self.capacity + self.heads[channel]])
    }

    /// Run an interleaved block through the line, writing the delayed samples to `out`.
    pub fn render(&mut self, input: &[T], out: &mut [T]) {
        debug_assert_eq!(input.len(), out.len());

        let channels = self.channels();
        for (frame_in, frame_out) in input.chunks_exact(channels).zip(out.chunks_exact_mut(channels)) {
            for (channel, (&x, y)) in frame_in.iter().zip(frame_out.iter_mut()).enumerate() {
                *y = self.push_sample(channel, x);
            }
        }
    }

    /// Forget the remembered samples: refill with silence and rewind.
    pub fn reset(&mut self) {
        self.buffer.fill(T::SILENCE);
        self.heads.fill(0);
    }
}
