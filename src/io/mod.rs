// Purpose - the data exchanged at the edges of the effects

pub mod block;

pub use block::{SampleBlock, SampleData};
