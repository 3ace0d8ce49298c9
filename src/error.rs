//! Error types for the Veilmark watermarking and similarity engine.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for Veilmark operations.
#[derive(Error, Debug)]
pub enum VeilmarkError {
    /// A marker character cannot be represented in the 8-bit-per-character
    /// encoding. Markers must consist of code points in `U+0000..=U+00FF`.
    #[error("Unsupported marker character {ch:?} at index {index}: code point exceeds one byte")]
    UnsupportedMarkerCharacter {
        /// The offending character.
        ch: char,
        /// Its position within the marker string.
        index: usize,
    },

    /// An invisible-character run does not decode to a valid bit or byte
    /// sequence. Extraction catches this internally and reports "no marker".
    #[error("Malformed invisible encoding: {0}")]
    MalformedEncoding(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A corpus directory contained no readable documents.
    #[error("No readable documents in corpus directory: {0}")]
    EmptyCorpus(PathBuf),
}

/// Result type alias for Veilmark operations.
pub type Result<T> = std::result::Result<T, VeilmarkError>;

impl From<serde_json::Error> for VeilmarkError {
    fn from(err: serde_json::Error) -> Self {
        VeilmarkError::Serialization(err.to_string())
    }
}
