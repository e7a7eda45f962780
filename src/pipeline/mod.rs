use std::collections::VecDeque;

use crate::config::StreamFormat;
use crate::dsp::sample::SampleType;
use crate::effects::effect::Effect;
use crate::error::{ConfigError, Mismatch, Result};
use crate::io::SampleBlock;

/*
Serial Effect Chain (Pipeline)
==============================

A pipeline runs blocks through its effects in order: the output of stage 0 is
the input of stage 1, and so on. The caller pushes into the head and pulls
from the tail.

  push ──→ [Stage 0] ──→ [Stage 1] ──→ ... ──→ [Stage N] ──→ get

How It Works:
-------------
1. The block is validated against the pipeline's sample kind and channels.
2. It is pushed into stage 0.
3. For each stage in order, every block that stage has ready is pulled and
   pushed into the next stage.
4. `get` pops the oldest block ready at the last stage.

Stages are free to hold output back. If stage i has nothing ready, the cascade
simply stops there for this push; whatever it releases later moves on during
a later push. The stock effects always release one block per push, so with
them a push is followed by exactly one block at the tail.

Every stage must share the pipeline's sample kind, sample rate and channel
count. That is checked when the stage is appended, so a stage that keeps the
`Effect::push` contract never fails between stages. A stage that refuses a
well-formed block anyway breaks the chain: the refused block is dropped, the
cascade stops at that stage, and the error is returned from `push` with the
upstream stages already advanced.

A pipeline with no stages passes blocks straight through.

Pipelines are effects themselves and can be nested:

  let mut pipeline = Pipeline::new(SampleType::I16, format)?
      .with_effect(Box::new(DelayEffect::<i16>::new(format, delay)?))?
      .with_effect(Box::new(ReverbEffect::<i16>::new(format, reverb)?))?;
*/

/// An ordered chain of effects.
pub struct Pipeline {
    sample_type: SampleType,
    format: StreamFormat,
    stages: Vec<Box<dyn Effect>>,
    passthrough: VecDeque<SampleBlock>,
}

impl Pipeline {
    pub fn new(sample_type: SampleType, format: StreamFormat) -> Result<Self, ConfigError> {
        format.validate()?;
        tracing::debug!(
            %sample_type,
            sample_rate = format.sample_rate,
            channels = format.channels,
            "pipeline created"
        );

        Ok(Self {
            sample_type,
            format,
            stages: Vec::new(),
            passthrough: VecDeque::new(),
        })
    }

    /// Add an effect at the tail.
    pub fn append_effect(&mut self, effect: Box<dyn Effect>) -> Result<(), ConfigError> {
        if effect.sample_type() != self.sample_type || effect.format() != self.format {
            let found = effect.format();
            let err = ConfigError::IncompatibleStage {
                expected_type: self.sample_type,
                expected_channels: self.format.channels,
                expected_rate: self.format.sample_rate,
                found_type: effect.sample_type(),
                found_channels: found.channels,
                found_rate: found.sample_rate,
            };
            tracing::debug!(%err, "pipeline rejected stage");
            return Err(err);
        }

        self.stages.push(effect);
        tracing::debug!(stages = self.stages.len(), "pipeline stage appended");
        Ok(())
    }

    /// Builder form of [`append_effect`](Self::append_effect).
    pub fn with_effect(mut self, effect: Box<dyn Effect>) -> Result<Self, ConfigError> {
        self.append_effect(effect)?;
        Ok(self)
    }

    /// Number of stages.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Move every ready block one stage further down the chain.
    fn propagate(&mut self) -> Result<()> {
        for i in 1..self.stages.len() {
            let (upstream, downstream) = self.stages.split_at_mut(i);
            let (from, to) = (&mut upstream[i - 1], &mut downstream[0]);
            while let Some(block) = from.get() {
                to.push(block).inspect_err(|err| {
                    tracing::error!(stage = i, %err, "pipeline stage refused a block; block dropped");
                })?;
            }
        }
        Ok(())
    }
}

impl Effect for Pipeline {
    fn sample_type(&self) -> SampleType {
        self.sample_type
    }

    fn format(&self) -> StreamFormat {
        self.format
    }

    fn push(&mut self, block: SampleBlock) -> Result<()> {
        if block.sample_type() != self.sample_type {
            return Err(Mismatch::SampleType {
                expected: self.sample_type,
                found: block.sample_type(),
            }
            .into());
        }
        if block.channels() != self.format.channels {
            return Err(Mismatch::Channels {
                expected: self.format.channels,
                found: block.channels(),
            }
            .into());
        }

        match self.stages.first_mut() {
            Some(head) => {
                head.push(block)?;
                self.propagate()
            }
            None => {
                self.passthrough.push_back(block);
                Ok(())
            }
        }
    }

    fn get(&mut self) -> Option<SampleBlock> {
        match self.stages.last_mut() {
            Some(tail) => tail.get(),
            None => self.passthrough.pop_front(),
        }
    }

    fn clear(&mut self) {
        for stage in &mut self.stages {
            stage.clear();
        }
        self.passthrough.clear();
    }
}
