//! Real-world scenario benchmarks.
//!
//! These model effect chains the way a caller assembles them: a block pushed
//! into the head of a pipeline and pulled from the tail.

mod pipeline;

pub use pipeline::bench_pipeline;
