//! Text normalization for similarity comparison.
//!
//! Normalization is used only on the similarity path, never by the
//! watermark codec, so case and punctuation folding cannot interact with
//! the invisible-character encoding. Note that the invisible alphabet
//! consists of format characters, which are neither alphanumeric nor
//! whitespace: normalizing watermarked text therefore yields the same
//! token stream as normalizing the original host.

use crate::config::TextConfig;
use unicode_normalization::UnicodeNormalization;

/// Text normalizer that canonicalizes raw text into a comparable form.
#[derive(Debug, Clone)]
pub struct Normalizer {
    config: TextConfig,
}

impl Normalizer {
    /// Creates a new normalizer with the given configuration.
    pub fn new(config: TextConfig) -> Self {
        Self { config }
    }

    /// Creates a normalizer with default configuration.
    pub fn default_config() -> Self {
        Self::new(TextConfig::default())
    }

    /// Normalizes text: lowercases, deletes every character that is
    /// neither alphanumeric nor whitespace, collapses whitespace runs to a
    /// single space, and trims. Idempotent.
    pub fn normalize(&self, text: &str) -> String {
        let mut source = if self.config.unicode_normalize {
            // NFD so that precomposed and decomposed accents compare equal;
            // the combining marks are dropped by the filter below.
            text.nfd().collect::<String>()
        } else {
            text.to_string()
        };

        if self.config.lowercase {
            source = source.to_lowercase();
        }

        let kept: String = source
            .chars()
            .filter(|c| c.is_alphanumeric() || c.is_whitespace())
            .collect();

        kept.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    /// Normalizes text and splits it into tokens.
    pub fn tokens(&self, text: &str) -> Vec<String> {
        self.normalize(text)
            .split(' ')
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase() {
        let normalizer = Normalizer::default_config();
        assert_eq!(normalizer.normalize("HELLO World"), "hello world");
    }

    #[test]
    fn test_punctuation_removed() {
        let normalizer = Normalizer::default_config();
        assert_eq!(
            normalizer.normalize("Hello, world! (Again.)"),
            "hello world again"
        );
    }

    #[test]
    fn test_whitespace_collapsed_and_trimmed() {
        let normalizer = Normalizer::default_config();
        assert_eq!(normalizer.normalize("  a\t\tb \n c  "), "a b c");
    }

    #[test]
    fn test_digits_kept() {
        let normalizer = Normalizer::default_config();
        assert_eq!(normalizer.normalize("Chapter 12, page 3."), "chapter 12 page 3");
    }

    #[test]
    fn test_idempotent() {
        let normalizer = Normalizer::default_config();
        for text in [
            "Hello, World! This is a test.",
            "  MIXED   case\twith\n\npunctuation?!  ",
            "déjà vu — naïve café",
            "",
        ] {
            let once = normalizer.normalize(text);
            assert_eq!(normalizer.normalize(&once), once);
        }
    }

    #[test]
    fn test_accents_fold_consistently() {
        let normalizer = Normalizer::default_config();
        // Precomposed and decomposed forms normalize identically.
        let precomposed = "caf\u{E9}";
        let decomposed = "cafe\u{301}";
        assert_eq!(
            normalizer.normalize(precomposed),
            normalizer.normalize(decomposed)
        );
    }

    #[test]
    fn test_invisible_characters_removed() {
        let normalizer = Normalizer::default_config();
        let marked = crate::codec::embed("The quick brown fox", "owner").unwrap();
        assert_eq!(
            normalizer.normalize(&marked),
            normalizer.normalize("The quick brown fox")
        );
    }

    #[test]
    fn test_tokens() {
        let normalizer = Normalizer::default_config();
        assert_eq!(
            normalizer.tokens("The quick, brown fox!"),
            vec!["the", "quick", "brown", "fox"]
        );
        assert!(normalizer.tokens("").is_empty());
        assert!(normalizer.tokens("   ...   ").is_empty());
    }

    #[test]
    fn test_non_latin_text() {
        let normalizer = Normalizer::default_config();
        assert_eq!(normalizer.normalize("Привет, мир!"), "привет мир");
    }
}
