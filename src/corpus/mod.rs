// Vocabulary and bag-of-words corpus construction.

pub mod dictionary;

pub use dictionary::{build_corpus, BowDocument, Dictionary};
