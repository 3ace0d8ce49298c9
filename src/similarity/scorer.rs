//! Ranked scoring of a query document against a reference corpus.

use crate::config::Config;
use crate::similarity::SimilarityType;
use crate::text::{ChunkSet, Chunker};
use log::debug;
use rayon::prelude::*;
use serde::Serialize;

/// One reference document to score against.
#[derive(Debug, Clone)]
pub struct Reference {
    /// Caller-chosen identifier, carried through to the match result.
    pub id: String,
    /// The document text.
    pub text: String,
}

impl Reference {
    /// Creates a new reference document.
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// One entry of a scoring operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    /// Identifier of the reference document.
    pub id: String,
    /// Similarity score in `[0, 1]`.
    pub score: f64,
    /// A bounded sample of overlapping chunks, in the order they occur in
    /// the query document.
    pub evidence: Vec<String>,
}

/// Ranks reference documents by chunk-level overlap with a query document.
///
/// Scoring is pure and synchronous; the per-reference comparisons are
/// independent and run on the rayon thread pool. The final ranking is a
/// stable descending sort, so ties keep the original reference order and
/// identical inputs always produce identical output.
#[derive(Debug, Clone)]
pub struct Scorer {
    chunker: Chunker,
    chunk_size: usize,
    max_evidence: usize,
    measure: SimilarityType,
}

impl Scorer {
    /// Creates a new scorer from a configuration.
    pub fn new(config: Config) -> Self {
        Self {
            chunker: Chunker::new(config.text),
            chunk_size: config.similarity.chunk_size,
            max_evidence: config.similarity.max_evidence,
            measure: config.similarity.measure,
        }
    }

    /// Creates a scorer with default configuration.
    pub fn default_config() -> Self {
        Self::new(Config::default())
    }

    /// Chunks a document with this scorer's window size.
    pub fn chunks(&self, text: &str) -> ChunkSet {
        self.chunker.chunks(text, self.chunk_size)
    }

    /// Scores `query` against every reference and returns the ranked list.
    ///
    /// One [`MatchResult`] per reference, sorted descending by score with
    /// ties in the original reference order. The caller applies any
    /// threshold; the full list is always returned. This operation cannot
    /// fail, even on empty input.
    pub fn score(&self, query: &str, references: &[Reference]) -> Vec<MatchResult> {
        let query_chunks = self.chunks(query);
        debug!(
            "scoring {} query chunk(s) against {} reference(s)",
            query_chunks.len(),
            references.len()
        );

        let mut results: Vec<MatchResult> = references
            .par_iter()
            .map(|reference| self.score_one(&query_chunks, reference))
            .collect();

        // Stable sort keeps the original reference order on ties.
        results.sort_by(|a, b| b.score.total_cmp(&a.score));
        results
    }

    /// Scores a single query/reference pair, returning just the similarity.
    pub fn score_pair(&self, query: &str, reference: &str) -> f64 {
        self.measure
            .compute(&self.chunks(query), &self.chunks(reference))
    }

    fn score_one(&self, query_chunks: &ChunkSet, reference: &Reference) -> MatchResult {
        let ref_chunks = self.chunks(&reference.text);
        let score = self.measure.compute(query_chunks, &ref_chunks);

        let evidence: Vec<String> = query_chunks
            .intersection(&ref_chunks)
            .take(self.max_evidence)
            .map(str::to_string)
            .collect();

        MatchResult {
            id: reference.id.clone(),
            score,
            evidence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimilarityConfig;

    fn scorer() -> Scorer {
        Scorer::default_config()
    }

    #[test]
    fn test_identical_document_scores_one() {
        let references = vec![
            Reference::new("d1", "the quick brown fox jumps"),
            Reference::new("d2", "totally unrelated text here now"),
        ];
        let results = scorer().score("the quick brown fox jumps", &references);

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].id, "d1");
        assert!((results[0].score - 1.0).abs() < 1e-10);
        assert_eq!(results[1].id, "d2");
        assert!(results[1].score.abs() < 1e-10);
    }

    #[test]
    fn test_one_result_per_reference() {
        let references = vec![
            Reference::new("a", "x y z w v"),
            Reference::new("b", ""),
            Reference::new("c", "x y z w v u"),
        ];
        let results = scorer().score("x y z w v", &references);
        assert_eq!(results.len(), 3);
    }

    #[test]
    fn test_ties_keep_reference_order() {
        let references = vec![
            Reference::new("first", "alpha beta gamma delta epsilon"),
            Reference::new("second", "alpha beta gamma delta epsilon"),
            Reference::new("third", "unrelated words entirely different topic"),
        ];
        let results = scorer().score("alpha beta gamma delta epsilon", &references);

        assert_eq!(results[0].id, "first");
        assert_eq!(results[1].id, "second");
        assert_eq!(results[2].id, "third");
    }

    #[test]
    fn test_evidence_bounded_and_ordered() {
        let text = "a b c d e f g h i j k l";
        let references = vec![Reference::new("self", text)];
        let results = scorer().score(text, &references);

        // 8 overlapping chunks exist, evidence is capped at 5.
        assert_eq!(results[0].evidence.len(), 5);
        assert_eq!(results[0].evidence[0], "a b c d e");
        assert_eq!(results[0].evidence[4], "e f g h i");
    }

    #[test]
    fn test_empty_query_scores_zero() {
        let references = vec![Reference::new("d", "some reference document text here")];
        let results = scorer().score("", &references);
        assert!(results[0].score.abs() < 1e-10);
        assert!(results[0].evidence.is_empty());
    }

    #[test]
    fn test_empty_references() {
        let results = scorer().score("anything at all", &[]);
        assert!(results.is_empty());
    }

    #[test]
    fn test_deterministic_output() {
        let query = "the quick brown fox jumps over the lazy dog again";
        let references: Vec<Reference> = (0..20)
            .map(|i| {
                Reference::new(
                    format!("doc-{i}"),
                    format!("the quick brown fox jumps over dog number {i}"),
                )
            })
            .collect();

        let first = scorer().score(query, &references);
        let second = scorer().score(query, &references);
        assert_eq!(first, second);

        let first_json = serde_json::to_string(&first).unwrap();
        let second_json = serde_json::to_string(&second).unwrap();
        assert_eq!(first_json, second_json);
    }

    #[test]
    fn test_custom_chunk_size() {
        let config = Config {
            similarity: SimilarityConfig {
                chunk_size: 2,
                ..SimilarityConfig::default()
            },
            ..Config::default()
        };
        let scorer = Scorer::new(config);
        let references = vec![Reference::new("d", "b c")];
        let results = scorer.score("a b c", &references);
        // Query {a b, b c} vs reference {b c}: one of two shared.
        assert!((results[0].score - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_score_pair() {
        let s = scorer();
        let sim = s.score_pair("the quick brown fox jumps", "the quick brown fox jumps");
        assert!((sim - 1.0).abs() < 1e-10);
        assert!(s.score_pair("", "").abs() < 1e-10);
    }
}
