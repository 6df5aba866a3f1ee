// Stopword sets: the standard English list plus filing boilerplate.
//
// 10-K prose is saturated with disclosure vocabulary that carries no topic
// signal: every filer has a fiscal year, reports results, and calls itself
// a company. Those words would otherwise dominate every topic.

use std::collections::HashSet;

use stop_words::{get, LANGUAGE};

/// Filing-domain additions to the standard English stopword list.
const FILING_STOPWORDS: &[&str] = &[
    // Self-reference every filer uses
    "company",
    "companies",
    "corporation",
    "business",
    "businesses",
    "operations",
    "subsidiaries",
    // Filing structure
    "item",
    "part",
    "form",
    "section",
    "page",
    "table",
    "report",
    "reports",
    "note",
    "notes",
    "statement",
    "statements",
    "discussion",
    "reference",
    // Reporting-period boilerplate
    "annual",
    "fiscal",
    "year",
    "years",
    "quarter",
    "period",
    "periods",
    "december",
    "january",
    "june",
    "september",
    // Quantity filler
    "million",
    "billion",
    "thousand",
    "approximately",
    "amount",
    "amounts",
    "number",
    "total",
    "percent",
    // Generic disclosure verbs that survive as nouns after tagging
    "result",
    "results",
    "increase",
    "decrease",
    "change",
    "changes",
];

/// The normalizer's stopword set: standard English words from the
/// `stop-words` crate plus the filing-domain list above, all lowercase.
pub fn filing_stopwords() -> HashSet<String> {
    let mut words: HashSet<String> = get(LANGUAGE::English)
        .into_iter()
        .map(|w| w.to_lowercase())
        .collect();
    for word in FILING_STOPWORDS {
        words.insert((*word).to_string());
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn includes_standard_english() {
        let words = filing_stopwords();
        assert!(words.contains("the"));
        assert!(words.contains("and"));
        assert!(words.contains("of"));
    }

    #[test]
    fn includes_filing_boilerplate() {
        let words = filing_stopwords();
        assert!(words.contains("company"));
        assert!(words.contains("fiscal"));
        assert!(words.contains("million"));
    }

    #[test]
    fn keeps_topic_words() {
        let words = filing_stopwords();
        assert!(!words.contains("semiconductor"));
        assert!(!words.contains("pharmaceutical"));
    }
}
