// Corpus-level bigram detection.
//
// Two passes: count unigrams and adjacent pairs across every document, then
// score each pair with the phrase formula
//
//   score(a, b) = (count(a, b) - min_count) * vocab / (count(a) * count(b))
//
// Pairs scoring above the threshold are phrases. Each phrase occurrence is
// appended to its document as a single `a_b` compound token, leaving the
// original unigrams in place.

use std::collections::{HashMap, HashSet};

use tracing::debug;

/// Frequency-based phrase detector over a tokenized corpus.
#[derive(Debug, Clone)]
pub struct BigramDetector {
    /// Minimum adjacent-pair count before a pair can score at all.
    pub min_count: u32,
    /// Score threshold above which a pair becomes a phrase.
    pub threshold: f64,
}

impl Default for BigramDetector {
    fn default() -> Self {
        Self {
            min_count: 20,
            threshold: 10.0,
        }
    }
}

impl BigramDetector {
    pub fn new(min_count: u32, threshold: f64) -> Self {
        Self {
            min_count,
            threshold,
        }
    }

    /// Detect phrases across the corpus.
    ///
    /// Returns the set of (first, second) token pairs that qualify.
    pub fn detect(&self, docs: &[Vec<String>]) -> HashSet<(String, String)> {
        let mut unigrams: HashMap<&str, u32> = HashMap::new();
        let mut pairs: HashMap<(&str, &str), u32> = HashMap::new();

        for doc in docs {
            for token in doc {
                *unigrams.entry(token.as_str()).or_insert(0) += 1;
            }
            for window in doc.windows(2) {
                *pairs
                    .entry((window[0].as_str(), window[1].as_str()))
                    .or_insert(0) += 1;
            }
        }

        let vocab = unigrams.len() as f64;
        let mut phrases = HashSet::new();

        for ((a, b), &count) in &pairs {
            if count < self.min_count {
                continue;
            }
            let count_a = unigrams[a] as f64;
            let count_b = unigrams[b] as f64;
            let score = (count as f64 - self.min_count as f64) * vocab / (count_a * count_b);
            if score > self.threshold {
                phrases.insert(((*a).to_string(), (*b).to_string()));
            }
        }

        debug!(phrases = phrases.len(), "Bigram detection complete");
        phrases
    }

    /// Detect phrases, then append each phrase occurrence to its document
    /// as an `a_b` compound token. Returns the number of distinct phrases.
    pub fn augment(&self, docs: &mut [Vec<String>]) -> usize {
        let phrases = self.detect(docs);
        if phrases.is_empty() {
            return 0;
        }

        for doc in docs.iter_mut() {
            let compounds: Vec<String> = doc
                .windows(2)
                .filter(|w| phrases.contains(&(w[0].clone(), w[1].clone())))
                .map(|w| format!("{}_{}", w[0], w[1]))
                .collect();
            doc.extend(compounds);
        }

        phrases.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A corpus where "cloud computing" repeats as an adjacent pair and the
    /// filler tokens vary, so the pair scores far above any other.
    fn corpus_with_phrase(repeats: usize) -> Vec<Vec<String>> {
        let mut docs = Vec::new();
        for i in 0..repeats {
            docs.push(vec![
                "cloud".to_string(),
                "computing".to_string(),
                format!("filler{i}"),
            ]);
        }
        docs
    }

    #[test]
    fn frequent_pair_becomes_phrase() {
        // 10 docs: pair count 10, unigram counts 10, vocab 12
        // score = (10 - 3) * 12 / (10 * 10) = 0.84
        let detector = BigramDetector::new(3, 0.5);
        let phrases = detector.detect(&corpus_with_phrase(10));
        assert!(phrases.contains(&("cloud".to_string(), "computing".to_string())));
    }

    #[test]
    fn rare_pair_is_not_a_phrase() {
        // pair count 2 is below min_count
        let detector = BigramDetector::new(3, 0.5);
        let phrases = detector.detect(&corpus_with_phrase(2));
        assert!(phrases.is_empty());
    }

    #[test]
    fn augment_appends_compound_tokens() {
        let detector = BigramDetector::new(3, 0.5);
        let mut docs = corpus_with_phrase(10);
        let count = detector.augment(&mut docs);
        assert_eq!(count, 1);
        for doc in &docs {
            assert_eq!(doc.last().map(String::as_str), Some("cloud_computing"));
            // originals stay in place
            assert_eq!(doc[0], "cloud");
            assert_eq!(doc[1], "computing");
        }
    }

    #[test]
    fn augment_on_phraseless_corpus_is_a_noop() {
        let detector = BigramDetector::default();
        let mut docs = vec![vec!["alpha".to_string(), "beta".to_string()]];
        let before = docs.clone();
        assert_eq!(detector.augment(&mut docs), 0);
        assert_eq!(docs, before);
    }

    #[test]
    fn empty_corpus() {
        let detector = BigramDetector::default();
        assert!(detector.detect(&[]).is_empty());
    }
}
