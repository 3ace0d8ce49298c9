//! # Veilmark - Invisible Watermarking & Document Similarity
//!
//! Veilmark hides an authorship marker inside a text document using
//! zero-width Unicode characters, recovers that marker from possibly-copied
//! text, and estimates how similar a document is to a corpus of reference
//! documents.
//!
//! ## Overview
//!
//! The crate consists of two independent engines:
//!
//! - A **zero-width steganographic codec**: a reversible mapping between a
//!   marker string and a run of invisible characters embedded in host text.
//!   The visible rendering of the host is unchanged, and the marker is
//!   recovered byte-for-byte from the embedded text alone.
//! - A **chunk-based similarity scorer**: documents are canonicalized into
//!   sets of overlapping word chunks and compared with normalized set
//!   overlap, producing a deterministic ranked match list.
//!
//! The two engines never call each other. Storage, transport, and
//! rendering are the calling application's concern: the engines take plain
//! text in and hand freshly allocated results back.
//!
//! ## Quick Start
//!
//! Watermarking:
//!
//! ```rust
//! use veilmark::{embed, extract, strip};
//!
//! let host = "First paragraph.\n\nSecond paragraph.";
//! let marked = embed(host, "Author: Jane Doe").unwrap();
//!
//! // The marker is invisible but recoverable.
//! assert_eq!(extract(&marked).as_deref(), Some("Author: Jane Doe"));
//!
//! // Stripping the invisible characters reproduces the host exactly.
//! assert_eq!(strip(&marked), host);
//! ```
//!
//! Similarity scoring:
//!
//! ```rust
//! use veilmark::{Reference, Scorer};
//!
//! let scorer = Scorer::default_config();
//! let results = scorer.score(
//!     "the quick brown fox jumps",
//!     &[
//!         Reference::new("d1", "the quick brown fox jumps"),
//!         Reference::new("d2", "totally unrelated text here now"),
//!     ],
//! );
//!
//! assert_eq!(results[0].id, "d1");
//! assert_eq!(results[0].score, 1.0);
//! ```
//!
//! ## Architecture
//!
//! - [`codec`] - Invisible alphabet, bit conversions, embed/extract
//! - [`text`] - Normalization and chunking
//! - [`similarity`] - Similarity measures and the ranked scorer
//! - [`config`] - Engine configuration
//! - [`error`] - Error types

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codec;
pub mod config;
pub mod error;
pub mod similarity;
pub mod text;

// Re-export commonly used types
pub use codec::{embed, extract, is_invisible, strip, verify, BitSequence, InvisibleChar};
pub use config::{Config, SimilarityConfig, TextConfig};
pub use error::{Result, VeilmarkError};
pub use similarity::{
    JaccardSimilarity, MatchResult, OverlapSimilarity, Reference, Scorer, SimilarityMeasure,
    SimilarityType,
};
pub use text::{ChunkSet, Chunker, Normalizer};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default number of tokens per chunk.
pub const DEFAULT_CHUNK_SIZE: usize = 5;

/// Default maximum number of evidence chunks per match.
pub const DEFAULT_MAX_EVIDENCE: usize = 5;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_constants() {
        assert_eq!(DEFAULT_CHUNK_SIZE, 5);
        assert_eq!(DEFAULT_MAX_EVIDENCE, 5);
    }
}
