//! Similarity measures and ranking for comparing chunk sets.

mod jaccard;
mod overlap;
mod scorer;

pub use jaccard::JaccardSimilarity;
pub use overlap::OverlapSimilarity;
pub use scorer::{MatchResult, Reference, Scorer};

use crate::text::ChunkSet;
use serde::{Deserialize, Serialize};

/// Trait for similarity measures between chunk sets.
pub trait SimilarityMeasure {
    /// Computes the similarity between two chunk sets.
    ///
    /// Returns a value between 0.0 (no shared chunks) and 1.0 (identical).
    fn similarity(&self, a: &ChunkSet, b: &ChunkSet) -> f64;

    /// Computes the distance between two chunk sets.
    ///
    /// Default implementation: 1.0 - similarity.
    fn distance(&self, a: &ChunkSet, b: &ChunkSet) -> f64 {
        1.0 - self.similarity(a, b)
    }
}

/// Enum for the available similarity measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SimilarityType {
    /// Jaccard similarity (union-denominator).
    Jaccard,
    /// Overlap similarity (min-denominator).
    Overlap,
}

impl SimilarityType {
    /// Computes similarity using this measure.
    pub fn compute(&self, a: &ChunkSet, b: &ChunkSet) -> f64 {
        match self {
            SimilarityType::Jaccard => JaccardSimilarity.similarity(a, b),
            SimilarityType::Overlap => OverlapSimilarity.similarity(a, b),
        }
    }
}

impl std::str::FromStr for SimilarityType {
    type Err = crate::error::VeilmarkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "jaccard" => Ok(SimilarityType::Jaccard),
            "overlap" => Ok(SimilarityType::Overlap),
            other => Err(crate::error::VeilmarkError::Config(format!(
                "unknown similarity measure '{other}' (expected 'jaccard' or 'overlap')"
            ))),
        }
    }
}
