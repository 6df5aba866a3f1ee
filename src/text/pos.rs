// Coarse part-of-speech heuristics.
//
// The pipeline only needs a noun filter, so a full tagger would be wasted
// here. This is a suffix heuristic over small closed-class lists. Unknown
// shapes default to Noun, the same default the upstream tag mapping used
// for unrecognized tags, and the right bias for filing prose where most
// content words are nouns.

/// The four coarse tags the normalizer distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosTag {
    Noun,
    Verb,
    Adjective,
    Adverb,
}

/// Auxiliaries and high-frequency verbs that carry no noun reading worth
/// keeping. Most are also stopwords; the list keeps the tagger honest when
/// a caller supplies a custom stopword set.
const CLOSED_VERBS: &[&str] = &[
    "be", "is", "are", "was", "were", "been", "being", "have", "has", "had", "do", "does", "did",
    "make", "makes", "made", "include", "includes", "included", "provide", "provides", "provided",
    "continue", "continues", "expect", "expects", "believe", "believes", "require", "requires",
];

/// Nouns that the `-ly` suffix rule would misread as adverbs.
const LY_NOUNS: &[&str] = &["family", "families", "supply", "supplies", "assembly", "monopoly"];

/// Gerunds that read as nouns in filing prose.
const ING_NOUNS: &[&str] = &["marketing", "manufacturing", "engineering", "advertising", "licensing"];

/// Nouns that the adjective suffix rules would misread.
const ADJECTIVE_SUFFIX_NOUNS: &[&str] = &[
    "executive",
    "executives",
    "initiative",
    "initiatives",
    "alternative",
    "alternatives",
    "objective",
    "objectives",
    "representative",
    "representatives",
    "incentive",
    "incentives",
    "cable",
];

const ADJECTIVE_SUFFIXES: &[&str] = &["ous", "ful", "ive", "able", "ible", "less"];

/// Tag a single lowercase token.
pub fn tag(token: &str) -> PosTag {
    if CLOSED_VERBS.contains(&token) {
        return PosTag::Verb;
    }
    if LY_NOUNS.contains(&token) || ING_NOUNS.contains(&token)
        || ADJECTIVE_SUFFIX_NOUNS.contains(&token)
    {
        return PosTag::Noun;
    }

    if token.len() > 4 && token.ends_with("ly") {
        return PosTag::Adverb;
    }
    if token.len() > 5 && token.ends_with("ing") {
        return PosTag::Verb;
    }
    if token.len() > 4 && token.ends_with("ed") && !token.ends_with("eed") {
        return PosTag::Verb;
    }
    if ADJECTIVE_SUFFIXES.iter().any(|s| token.len() > s.len() + 2 && token.ends_with(*s)) {
        return PosTag::Adjective;
    }

    PosTag::Noun
}
