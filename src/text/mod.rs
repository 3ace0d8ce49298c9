//! Text processing module for normalization and chunking.

mod chunker;
mod normalizer;

pub use chunker::{ChunkSet, Chunker};
pub use normalizer::Normalizer;
