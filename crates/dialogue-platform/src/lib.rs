//! Native platform adapters for the Dialogue Engine.
//!
//! - [`model`]: loads a seq2seq checkpoint from disk (tokenizers + candle)
//! - [`storage`]: the JSON chat file behind Save / Load

pub mod model;
pub mod storage;
