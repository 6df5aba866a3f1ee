// Token dictionary: string <-> id mapping with document frequencies.
//
// Ids are assigned in first-appearance order over the corpus, so the same
// corpus always yields the same mapping. `filter_extremes` drops rare
// tokens and compacts ids once; after that the mapping is stable for the
// rest of the run.

use std::collections::{HashMap, HashSet};

use tracing::info;

/// Sparse bag-of-words vector: (token id, count) pairs sorted by id.
pub type BowDocument = Vec<(u32, u32)>;

/// Token <-> id mapping over a corpus, with per-token document frequencies.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    token_to_id: HashMap<String, u32>,
    id_to_token: Vec<String>,
    doc_freqs: Vec<u32>,
    num_docs: u32,
}

impl Dictionary {
    /// Build a dictionary from tokenized documents. Ids follow first
    /// appearance; document frequencies count documents, not occurrences.
    pub fn from_documents(docs: &[Vec<String>]) -> Self {
        let mut dict = Dictionary {
            num_docs: docs.len() as u32,
            ..Default::default()
        };

        for doc in docs {
            let mut seen: HashSet<&str> = HashSet::new();
            for token in doc {
                let id = match dict.token_to_id.get(token).copied() {
                    Some(id) => id,
                    None => {
                        let id = dict.id_to_token.len() as u32;
                        dict.token_to_id.insert(token.clone(), id);
                        dict.id_to_token.push(token.clone());
                        dict.doc_freqs.push(0);
                        id
                    }
                };
                if seen.insert(token) {
                    dict.doc_freqs[id as usize] += 1;
                }
            }
        }

        dict
    }

    /// Number of tokens in the vocabulary.
    pub fn len(&self) -> usize {
        self.id_to_token.len()
    }

    pub fn is_empty(&self) -> bool {
        self.id_to_token.is_empty()
    }

    /// Number of documents the dictionary was built from.
    pub fn num_docs(&self) -> u32 {
        self.num_docs
    }

    pub fn id(&self, token: &str) -> Option<u32> {
        self.token_to_id.get(token).copied()
    }

    pub fn token(&self, id: u32) -> Option<&str> {
        self.id_to_token.get(id as usize).map(String::as_str)
    }

    /// Document frequency of a token id.
    pub fn doc_freq(&self, id: u32) -> u32 {
        self.doc_freqs.get(id as usize).copied().unwrap_or(0)
    }

    /// The vocabulary in id order.
    pub fn terms(&self) -> &[String] {
        &self.id_to_token
    }

    /// Drop every token appearing in fewer than `no_below` documents and
    /// compact the surviving ids, preserving their relative order.
    pub fn filter_extremes(&mut self, no_below: u32) {
        let before = self.len();

        let mut id_to_token = Vec::new();
        let mut doc_freqs = Vec::new();
        let mut token_to_id = HashMap::new();

        for (token, &freq) in self.id_to_token.iter().zip(self.doc_freqs.iter()) {
            if freq >= no_below {
                let id = id_to_token.len() as u32;
                token_to_id.insert(token.clone(), id);
                id_to_token.push(token.clone());
                doc_freqs.push(freq);
            }
        }

        self.token_to_id = token_to_id;
        self.id_to_token = id_to_token;
        self.doc_freqs = doc_freqs;

        info!(
            kept = self.len(),
            dropped = before - self.len(),
            no_below = no_below,
            "Vocabulary filtered"
        );
    }

    /// Convert one document into its sparse bag-of-words vector. Tokens
    /// outside the vocabulary are ignored; pairs come back sorted by id.
    pub fn doc2bow(&self, doc: &[String]) -> BowDocument {
        let mut counts: HashMap<u32, u32> = HashMap::new();
        for token in doc {
            if let Some(id) = self.id(token) {
                *counts.entry(id).or_insert(0) += 1;
            }
        }

        let mut bow: BowDocument = counts.into_iter().collect();
        bow.sort_unstable_by_key(|&(id, _)| id);
        bow
    }
}

/// Convert the whole corpus into bag-of-words vectors.
pub fn build_corpus(dict: &Dictionary, docs: &[Vec<String>]) -> Vec<BowDocument> {
    docs.iter().map(|doc| dict.doc2bow(doc)).collect()
}
