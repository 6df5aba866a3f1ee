// Text normalization: tokenizing, POS filtering, lemmatizing, stemming,
// and corpus-level bigram detection.

pub mod bigrams;
pub mod lemma;
pub mod normalize;
pub mod pos;
pub mod stopwords;
