//! Overlap similarity for chunk sets.

use crate::similarity::SimilarityMeasure;
use crate::text::ChunkSet;

/// Overlap similarity measure (Szymkiewicz-Simpson coefficient).
///
/// |A ∩ B| / min(|A|, |B|)
///
/// Useful when comparing documents of very different lengths, as it
/// measures how much the smaller document is contained in the larger.
/// Defined as 0.0 when either set is empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct OverlapSimilarity;

impl SimilarityMeasure for OverlapSimilarity {
    fn similarity(&self, a: &ChunkSet, b: &ChunkSet) -> f64 {
        let denominator = a.len().min(b.len());
        if denominator == 0 {
            return 0.0;
        }
        a.intersection_count(b) as f64 / denominator as f64
    }
}
