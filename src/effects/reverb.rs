use crate::config::{ReverbParams, StreamFormat};
use crate::dsp::delay::{next_prime_like, samples_for_ms};
use crate::dsp::mix::{self, Gains};
use crate::dsp::sample::{Sample, SampleType};
use crate::effects::comb::CombFilter;
use crate::effects::effect::{accept, Effect, OutputQueue};
use crate::error::{ConfigError, Result};
use crate::io::SampleBlock;

/*
Reverb Effect
=============

Simulates the early reflections of a room with four comb filters running in
parallel on the same input. Their delay times are deliberately unrelated
(43, 53, 61, 71 ms by default) so the resonances of one filter land between
the peaks of the others instead of piling up into a metallic ring.

Architecture
------------

  Input ──┬──→ [Comb 0] ──┐
          │               (+)──┐
          ├──→ [Comb 1] ──┘    │ wet_gain
          │                    (mix)──→ combined ──┐ 0.9
          ├──→ [Comb 2] ──┐    │ wet_gain          (mix)──→ Output
          │               (+)──┘                   │ 0.7
          ├──→ [Comb 3] ──┘                        │
          └────────────────────── dry ─────────────┘

Each comb uses fixed internal gains (0.7 / 0.7) and decay 0.9, independent of
the reverb's own settings. The reverb's wet gain weighs the two pair sums
against each other; the final stage blends the dry input and the combined
reflections with fixed ratios 0.7 and 0.9.

Delay Lengths
-------------

With `primes` set, every delay length in samples is rounded up to the next
6k + 1 value. That is a cheap stand-in for "next prime": it keeps the four
lengths from sharing small common factors.

  43 ms @ 44.1 kHz = 1896 samples → 1897
*/

/// Internal gains of each reflection comb.
const COMB_GAINS: Gains = Gains::new(0.7, 0.7);
/// Feedback of each reflection comb.
const COMB_DECAY: f32 = 0.9;
/// Output-stage ratios: dry input vs. combined reflections.
const OUTPUT_GAINS: Gains = Gains::new(0.7, 0.9);

/// Early-reflection reverb built from four parallel comb filters.
pub struct ReverbEffect<T: Sample> {
    format: StreamFormat,
    gains: Gains,
    combs: [CombFilter<T>; 4],
    queue: OutputQueue,
}

impl<T: Sample> ReverbEffect<T> {
    pub fn new(format: StreamFormat, params: ReverbParams) -> Result<Self, ConfigError> {
        format.validate()?;

        let comb = |delay_ms: u32| {
            let mut capacity = samples_for_ms(delay_ms, format.sample_rate);
            if params.primes {
                capacity = next_prime_like(capacity);
            }
            CombFilter::<T>::with_capacity(format, COMB_GAINS, COMB_DECAY, capacity)
        };

        let [d0, d1, d2, d3] = params.delays;
        let reverb = Self {
            format,
            gains: params.gains,
            combs: [comb(d0)?, comb(d1)?, comb(d2)?, comb(d3)?],
            queue: OutputQueue::default(),
        };

        tracing::debug!(
            sample_type = %T::TYPE,
            sample_rate = format.sample_rate,
            channels = format.channels,
            capacities = ?reverb.capacities(),
            "reverb created"
        );
        Ok(reverb)
    }

    pub fn gains(&self) -> Gains {
        self.gains
    }

    /// Delay length in samples of each reflection comb.
    pub fn capacities(&self) -> [usize; 4] {
        let [c0, c1, c2, c3] = &self.combs;
        [c0.capacity(), c1.capacity(), c2.capacity(), c3.capacity()]
    }

    /// Number of processed blocks waiting for `get`.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Drop queued output and silence every reflection.
    pub fn reset(&mut self) {
        self.queue.clear();
        for comb in &mut self.combs {
            comb.reset();
        }
    }

    fn render(&mut self, input: &[T]) -> Vec<T> {
        // Each comb renders synchronously: one block in, exactly one block out.
        let [c0, c1, c2, c3] = &mut self.combs;
        let (r0, r1, r2, r3) = (c0.render(input), c1.render(input), c2.render(input), c3.render(input));

        let len = input.len();
        let mut pair_a = vec![T::SILENCE; len];
        let mut pair_b = vec![T::SILENCE; len];
        mix::sum(&r0, &r1, &mut pair_a);
        mix::sum(&r2, &r3, &mut pair_b);

        let mut combined = vec![T::SILENCE; len];
        mix::mix(&pair_a, &pair_b, Gains::new(self.gains.wet, self.gains.wet), &mut combined);

        mix::mix_in_place(input, &mut combined, OUTPUT_GAINS);
        combined
    }
}

impl<T: Sample> Effect for ReverbEffect<T> {
    fn sample_type(&self) -> SampleType {
        T::TYPE
    }

    fn format(&self) -> StreamFormat {
        self.format
    }

    fn push(&mut self, block: SampleBlock) -> Result<()> {
        let input = accept::<T>(&self.format, &block).inspect_err(|err| {
            tracing::debug!(%err, "reverb rejected block");
        })?;

        tracing::trace!(frames = block.frames(), "reverb push");
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
