// Unit tests for the text normalization pipeline.
//
// The normalizer is pure, so these are straight input/output checks: filter
// behavior, lemma+stem composition, and the idempotence property over
// already-normalized token sequences.

use std::collections::HashSet;

use tenk::text::normalize::Normalizer;
use tenk::text::stopwords::filing_stopwords;

// ============================================================
// Filters
// ============================================================

#[test]
fn stopwords_are_removed() {
    let norm = Normalizer::with_default_stopwords();
    let tokens = norm.normalize("The company reported that the business had results");
    assert!(tokens.is_empty(), "All stopwords, got {tokens:?}");
}

#[test]
fn short_tokens_are_removed() {
    let norm = Normalizer::new(HashSet::new());
    let tokens = norm.normalize("gas oil ore tin semiconductor");
    assert_eq!(tokens, vec!["semiconductor".to_string()]);
}

#[test]
fn non_nouns_are_removed() {
    let norm = Normalizer::new(HashSet::new());
    let tokens = norm.normalize("customers rapidly acquired powerful hardware");
    // rapidly: adverb, acquired: verb, powerful: adjective
    assert_eq!(
        tokens,
        vec!["custom".to_string(), "hardwar".to_string()]
    );
}

#[test]
fn punctuation_and_digits_are_stripped() {
    let norm = Normalizer::new(HashSet::new());
    let tokens = norm.normalize("network; (45,000) hardware-platform!");
    assert_eq!(
        tokens,
        vec![
            "network".to_string(),
            "hardwar".to_string(),
            "platform".to_string()
        ]
    );
}

#[test]
fn custom_stopword_set_is_respected() {
    let mut stops = HashSet::new();
    stops.insert("network".to_string());
    let norm = Normalizer::new(stops);
    let tokens = norm.normalize("network hardware");
    assert_eq!(tokens, vec!["hardwar".to_string()]);
}

#[test]
fn stemmed_forms_landing_on_stopwords_are_removed() {
    // "customers" itself is not a stopword, but its stem "custom" is in
    // this set; the post-stem re-check must catch it.
    let mut stops = HashSet::new();
    stops.insert("custom".to_string());
    let norm = Normalizer::new(stops);
    let tokens = norm.normalize("customers semiconductor");
    assert_eq!(tokens, vec!["semiconductor".to_string()]);
}

// ============================================================
// Lemma + stem composition
// ============================================================

#[test]
fn plurals_collapse_with_singulars() {
    let norm = Normalizer::new(HashSet::new());
    let plural = norm.normalize("customers");
    let singular = norm.normalize("customer");
    assert_eq!(plural, singular);
    assert_eq!(plural, vec!["custom".to_string()]);
}

#[test]
fn derived_forms_collapse() {
    let norm = Normalizer::new(HashSet::new());
    let a = norm.normalize("technologies");
    let b = norm.normalize("technology");
    assert_eq!(a, b);
}

// ============================================================
// Idempotence
// ============================================================

#[test]
fn normalization_is_idempotent() {
    let norm = Normalizer::with_default_stopwords();
    let first = norm.normalize(
        "Semiconductor customers order network hardware products worldwide.",
    );
    assert!(!first.is_empty());

    let rejoined = first.join(" ");
    let second = norm.normalize(&rejoined);
    assert_eq!(first, second);
}

#[test]
fn idempotence_on_batch() {
    let norm = Normalizer::with_default_stopwords();
    let texts = vec![
        "Pharmaceutical trials produced novel drug candidates.".to_string(),
        "Cloud software platforms market network hardware.".to_string(),
    ];
    let first = norm.normalize_documents(&texts);

    let rejoined: Vec<String> = first.iter().map(|doc| doc.join(" ")).collect();
    let second = norm.normalize_documents(&rejoined);
    assert_eq!(first, second);
}
