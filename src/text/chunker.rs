//! Chunking of documents into canonical sets of overlapping word windows.

use crate::config::TextConfig;
use crate::text::Normalizer;
use indexmap::IndexSet;

/// The set of unique chunks produced by sliding a fixed-width window over
/// a document's normalized token stream.
///
/// Duplicate windows collapse: repeated passages count once, so the
/// similarity math is over sets, not multisets. Iteration order is the
/// order of first occurrence in the document, which keeps evidence
/// selection deterministic. A `ChunkSet` is never mutated after
/// construction.
#[derive(Debug, Clone, Default)]
pub struct ChunkSet {
    chunks: IndexSet<String>,
}

impl ChunkSet {
    /// Returns the number of unique chunks.
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// Returns true if the set holds no chunks.
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Returns true if the set contains the given chunk.
    pub fn contains(&self, chunk: &str) -> bool {
        self.chunks.contains(chunk)
    }

    /// Iterates over chunks in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.chunks.iter().map(String::as_str)
    }

    /// Returns the number of chunks present in both sets.
    pub fn intersection_count(&self, other: &ChunkSet) -> usize {
        // Iterate the smaller set against the larger.
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small.iter().filter(|&chunk| large.contains(chunk)).count()
    }

    /// Returns the number of chunks present in either set.
    pub fn union_count(&self, other: &ChunkSet) -> usize {
        self.len() + other.len() - self.intersection_count(other)
    }

    /// Iterates over this set's chunks that are also in `other`, in this
    /// set's first-occurrence order.
    pub fn intersection<'a>(&'a self, other: &'a ChunkSet) -> impl Iterator<Item = &'a str> {
        self.iter().filter(|&chunk| other.contains(chunk))
    }
}

/// Converts documents into [`ChunkSet`]s of overlapping word windows.
#[derive(Debug, Clone)]
pub struct Chunker {
    normalizer: Normalizer,
}

impl Chunker {
    /// Creates a new chunker with the given text configuration.
    pub fn new(config: TextConfig) -> Self {
        Self {
            normalizer: Normalizer::new(config),
        }
    }

    /// Creates a chunker with default configuration.
    pub fn default_config() -> Self {
        Self::new(TextConfig::default())
    }

    /// Chunks a document with a window of `chunk_size` tokens.
    ///
    /// Every window of `chunk_size` consecutive normalized tokens becomes
    /// one chunk (tokens joined by single spaces). A document with fewer
    /// tokens than `chunk_size` produces an empty set; so does a
    /// `chunk_size` of zero. This operation cannot fail.
    pub fn chunks(&self, text: &str, chunk_size: usize) -> ChunkSet {
        let tokens = self.normalizer.tokens(text);

        let mut chunks = IndexSet::new();
        if chunk_size > 0 && tokens.len() >= chunk_size {
            for window in tokens.windows(chunk_size) {
                chunks.insert(window.join(" "));
            }
        }

        ChunkSet { chunks }
    }
}
