//! Configuration for the Veilmark engine.

use crate::similarity::SimilarityType;
use serde::{Deserialize, Serialize};

/// Main configuration for the Veilmark engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Text normalization configuration.
    pub text: TextConfig,

    /// Similarity scoring configuration.
    pub similarity: SimilarityConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            text: TextConfig::default(),
            similarity: SimilarityConfig::default(),
        }
    }
}

/// Text normalization configuration.
///
/// The watermark codec never consults this: normalization is applied only
/// on the similarity path, so case and punctuation folding cannot interact
/// with the invisible-character encoding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextConfig {
    /// Convert all text to lowercase.
    /// Default: true.
    pub lowercase: bool,

    /// Apply Unicode normalization (NFD) before filtering, so that
    /// precomposed and decomposed accented forms compare equal.
    /// Default: true.
    pub unicode_normalize: bool,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            lowercase: true,
            unicode_normalize: true,
        }
    }
}

/// Similarity scoring configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarityConfig {
    /// Number of tokens per chunk (the sliding-window width).
    /// Default: 5.
    pub chunk_size: usize,

    /// Maximum number of overlapping chunks returned as match evidence.
    /// Default: 5.
    pub max_evidence: usize,

    /// Similarity measure used for ranking.
    /// Default: Jaccard.
    pub measure: SimilarityType,
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            chunk_size: crate::DEFAULT_CHUNK_SIZE,
            max_evidence: crate::DEFAULT_MAX_EVIDENCE,
            measure: SimilarityType::Jaccard,
        }
    }
}
