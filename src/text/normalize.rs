// The token pipeline: raw section text to normalized noun tokens.
//
// Deterministic and pure: the same text and stopword set always produce
// the same token sequence. The filter order matters and is fixed: strip
// non-letters, lowercase, tokenize, keep nouns, drop stopwords and short
// tokens, lemmatize, stem, and re-check the stemmed form against the
// stopword set.

use std::collections::HashSet;

use regex_lite::Regex;
use rust_stemmers::{Algorithm, Stemmer};
use unicode_segmentation::UnicodeSegmentation;

use super::lemma;
use super::pos::{self, PosTag};
use super::stopwords;

/// Normalizes filing text into noun tokens for the corpus.
pub struct Normalizer {
    stopwords: HashSet<String>,
    stemmer: Stemmer,
    strip: Regex,
}

impl Normalizer {
    /// Build a normalizer around the given stopword set.
    pub fn new(stopwords: HashSet<String>) -> Self {
        Self {
            stopwords,
            stemmer: Stemmer::create(Algorithm::English),
            strip: Regex::new(r"[^a-zA-Z]+").unwrap(),
        }
    }

    /// Build a normalizer with the standard filing stopword set.
    pub fn with_default_stopwords() -> Self {
        Self::new(stopwords::filing_stopwords())
    }

    /// Normalize one document's text into its token sequence.
    pub fn normalize(&self, text: &str) -> Vec<String> {
        let cleaned = self.strip.replace_all(text, " ").to_lowercase();

        let mut tokens = Vec::new();
        for word in cleaned.unicode_words() {
            if pos::tag(word) != PosTag::Noun {
                continue;
            }
            if word.len() <= 3 || self.stopwords.contains(word) {
                continue;
            }

            let lemma = lemma::lemmatize_noun(word);
            let stemmed = self.stemmer.stem(&lemma).to_string();

            if self.stopwords.contains(&stemmed) {
                continue;
            }
            tokens.push(stemmed);
        }

        tokens
    }

    /// Normalize a batch of documents.
    pub fn normalize_documents(&self, texts: &[String]) -> Vec<Vec<String>> {
        texts.iter().map(|t| self.normalize(t)).collect()
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::with_default_stopwords()
    }
}
