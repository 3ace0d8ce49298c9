//! Jaccard similarity for chunk sets.

use crate::similarity::SimilarityMeasure;
use crate::text::ChunkSet;

/// Jaccard similarity measure.
///
/// |A ∩ B| / |A ∪ B|
///
/// Defined as 0.0 when the union is empty: two documents with no
/// comparable content have no similarity, not an undefined one.
#[derive(Debug, Clone, Copy, Default)]
pub struct JaccardSimilarity;

impl SimilarityMeasure for JaccardSimilarity {
    fn similarity(&self, a: &ChunkSet, b: &ChunkSet) -> f64 {
        let union = a.union_count(b);
        if union == 0 {
            return 0.0;
        }
        a.intersection_count(b) as f64 / union as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::Chunker;

    fn chunks(text: &str) -> ChunkSet {
        Chunker::default_config().chunks(text, 2)
    }

    #[test]
    fn test_identical() {
        let a = chunks("one two three four");
        let sim = JaccardSimilarity.similarity(&a, &a);
        assert!((sim - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_no_overlap() {
        let a = chunks("one two three");
        let b = chunks("four five six");
        let sim = JaccardSimilarity.similarity(&a, &b);
        assert!(sim.abs() < 1e-10);
    }

    #[test]
    fn test_partial_overlap() {
        let a = chunks("a b c d");
        let b = chunks("b c d e");
        // Intersection = {b c, c d}, union = {a b, b c, c d, d e}
        let sim = JaccardSimilarity.similarity(&a, &b);
        assert!((sim - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_bounds() {
        let pairs = [
            ("a b c d", "a b c d"),
            ("a b c d", "c d e f"),
            ("a b", "x y"),
            ("", ""),
        ];
        for (x, y) in pairs {
            let sim = JaccardSimilarity.similarity(&chunks(x), &chunks(y));
            assert!((0.0..=1.0).contains(&sim));
        }
    }

    #[test]
    fn test_both_empty() {
        let a = chunks("");
        let b = chunks("");
        let sim = JaccardSimilarity.similarity(&a, &b);
        assert!(sim.abs() < 1e-10);
    }

    #[test]
    fn test_distance() {
        let a = chunks("a b c d");
        let b = chunks("b c d e");
        let d = JaccardSimilarity.distance(&a, &b);
        assert!((d - 0.5).abs() < 1e-10);
    }
}
