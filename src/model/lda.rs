// Latent Dirichlet Allocation over a sparse bag-of-words corpus.
//
// Collapsed Gibbs sampling: every word instance carries a topic assignment,
// and each pass resamples every assignment from the conditional
// P(topic | doc) * P(word | topic) given all the others. The count matrices
// left at the end give the document-topic and topic-word distributions,
// smoothed by the alpha and beta priors.

use ndarray::{Array1, Array2};
use rand::prelude::*;
use thiserror::Error;

use crate::corpus::BowDocument;

/// Errors from model configuration and use.
#[derive(Error, Debug)]
pub enum LdaError {
    #[error("Number of topics must be positive")]
    InvalidTopicCount,

    #[error("Corpus is empty")]
    EmptyCorpus,

    #[error("Model not fitted yet")]
    NotFitted,

    #[error("Invalid hyperparameter: {0}")]
    InvalidParameter(String),
}

/// Model configuration.
#[derive(Debug, Clone)]
pub struct LdaConfig {
    /// Number of topics.
    pub num_topics: usize,
    /// Gibbs sampling passes over the corpus.
    pub passes: usize,
    /// Document-topic prior.
    pub alpha: f64,
    /// Topic-word prior.
    pub beta: f64,
    /// Random seed. Same seed, same corpus, same result.
    pub seed: u64,
}

impl Default for LdaConfig {
    fn default() -> Self {
        Self {
            num_topics: 6,
            passes: 40,
            alpha: 0.1,
            beta: 0.01,
            seed: 42,
        }
    }
}

impl LdaConfig {
    pub fn new(num_topics: usize) -> Self {
        Self {
            num_topics,
            ..Default::default()
        }
    }

    pub fn passes(mut self, passes: usize) -> Self {
        self.passes = passes;
        self
    }

    pub fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// A topic's top terms with their probabilities.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Topic {
    pub id: usize,
    pub terms: Vec<(String, f64)>,
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Topic {}: [", self.id)?;
        for (i, (term, prob)) in self.terms.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{term}: {prob:.3}")?;
        }
        write!(f, "]")
    }
}

/// Collapsed-Gibbs LDA model.
#[derive(Debug)]
pub struct LdaModel {
    config: LdaConfig,
    /// Topic-word counts: num_topics x vocab.
    topic_word: Option<Array2<f64>>,
    /// Document-topic counts: num_docs x num_topics.
    doc_topic: Option<Array2<f64>>,
    /// Per-topic totals (sum over words).
    topic_counts: Option<Array1<f64>>,
    /// Vocabulary in id order, captured at fit time.
    terms: Vec<String>,
}

impl LdaModel {
    pub fn new(config: LdaConfig) -> Result<Self, LdaError> {
        if config.num_topics == 0 {
            return Err(LdaError::InvalidTopicCount);
        }
        if config.alpha <= 0.0 {
            return Err(LdaError::InvalidParameter("alpha must be positive".into()));
        }
        if config.beta <= 0.0 {
            return Err(LdaError::InvalidParameter("beta must be positive".into()));
        }
        if config.passes == 0 {
            return Err(LdaError::InvalidParameter("passes must be positive".into()));
        }

        Ok(Self {
            config,
            topic_word: None,
            doc_topic: None,
            topic_counts: None,
            terms: Vec::new(),
        })
    }

    pub fn config(&self) -> &LdaConfig {
        &self.config
    }

    /// Fit the model on a bag-of-words corpus.
    ///
    /// `terms` is the vocabulary in id order; every id in the corpus must
    /// be below `terms.len()`.
    pub fn fit(&mut self, corpus: &[BowDocument], terms: Vec<String>) -> Result<(), LdaError> {
        let num_docs = corpus.len();
        let vocab = terms.len();
        let num_topics = self.config.num_topics;

        if num_docs == 0 || vocab == 0 {
            return Err(LdaError::EmptyCorpus);
        }

        let mut rng = StdRng::seed_from_u64(self.config.seed);

        // Expand sparse counts to per-instance word lists for sampling.
        let doc_words: Vec<Vec<usize>> = corpus
            .iter()
            .map(|doc| {
                let mut words = Vec::new();
                for &(id, count) in doc {
                    for _ in 0..count {
                        words.push(id as usize);
                    }
                }
                words
            })
            .collect();

        // Random initial topic assignments.
        let mut topic_word = Array2::<f64>::zeros((num_topics, vocab));
        let mut doc_topic = Array2::<f64>::zeros((num_docs, num_topics));
        let mut topic_counts = Array1::<f64>::zeros(num_topics);

        let mut assignments: Vec<Vec<usize>> = Vec::with_capacity(num_docs);
        for (doc_idx, words) in doc_words.iter().enumerate() {
            let mut doc_assignments = Vec::with_capacity(words.len());
            for &word in words {
                let topic = rng.gen_range(0..num_topics);
                doc_assignments.push(topic);

                topic_word[[topic, word]] += 1.0;
                doc_topic[[doc_idx, topic]] += 1.0;
                topic_counts[topic] += 1.0;
            }
            assignments.push(doc_assignments);
        }

        let alpha = self.config.alpha;
        let beta = self.config.beta;
        let beta_sum = beta * vocab as f64;

        for _pass in 0..self.config.passes {
            for (doc_idx, words) in doc_words.iter().enumerate() {
                for (pos, &word) in words.iter().enumerate() {
                    let old_topic = assignments[doc_idx][pos];

                    topic_word[[old_topic, word]] -= 1.0;
                    doc_topic[[doc_idx, old_topic]] -= 1.0;
                    topic_counts[old_topic] -= 1.0;

                    let new_topic = sample_topic(
                        word,
                        doc_idx,
                        num_topics,
                        &topic_word,
                        &doc_topic,
                        &topic_counts,
                        alpha,
                        beta,
                        beta_sum,
                        &mut rng,
                    );

                    topic_word[[new_topic, word]] += 1.0;
                    doc_topic[[doc_idx, new_topic]] += 1.0;
                    topic_counts[new_topic] += 1.0;

                    assignments[doc_idx][pos] = new_topic;
                }
            }
        }

        self.topic_word = Some(topic_word);
        self.doc_topic = Some(doc_topic);
        self.topic_counts = Some(topic_counts);
        self.terms = terms;

        Ok(())
    }

    /// Per-document topic distributions, alpha-smoothed, rows sum to 1.
    pub fn document_topics(&self) -> Result<Array2<f64>, LdaError> {
        let doc_topic = self.doc_topic.as_ref().ok_or(LdaError::NotFitted)?;
        let num_docs = doc_topic.nrows();
        let num_topics = self.config.num_topics;
        let alpha = self.config.alpha;

        let mut out = Array2::zeros((num_docs, num_topics));
        for doc_idx in 0..num_docs {
            let total = doc_topic.row(doc_idx).sum() + num_topics as f64 * alpha;
            for topic in 0..num_topics {
                out[[doc_idx, topic]] = (doc_topic[[doc_idx, topic]] + alpha) / total;
            }
        }

        Ok(out)
    }

    /// Per-topic word distributions, beta-smoothed, rows sum to 1.
    pub fn topic_words(&self) -> Result<Array2<f64>, LdaError> {
        let topic_word = self.topic_word.as_ref().ok_or(LdaError::NotFitted)?;
        let topic_counts = self.topic_counts.as_ref().ok_or(LdaError::NotFitted)?;
        let num_topics = self.config.num_topics;
        let vocab = topic_word.ncols();
        let beta = self.config.beta;
        let beta_sum = beta * vocab as f64;

        let mut out = Array2::zeros((num_topics, vocab));
        for topic in 0..num_topics {
            for word in 0..vocab {
                out[[topic, word]] =
                    (topic_word[[topic, word]] + beta) / (topic_counts[topic] + beta_sum);
            }
        }

        Ok(out)
    }

    /// The top `n` terms of every topic, highest probability first.
    pub fn top_terms(&self, n: usize) -> Result<Vec<Topic>, LdaError> {
        let topic_words = self.topic_words()?;
        let num_topics = self.config.num_topics;

        let mut topics = Vec::with_capacity(num_topics);
        for topic in 0..num_topics {
            let mut weighted: Vec<(usize, f64)> = topic_words
                .row(topic)
                .iter()
                .copied()
                .enumerate()
                .collect();
            weighted.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
            weighted.truncate(n);

            let terms: Vec<(String, f64)> = weighted
                .into_iter()
                .filter_map(|(id, prob)| self.terms.get(id).map(|t| (t.clone(), prob)))
                .collect();

            topics.push(Topic { id: topic, terms });
        }

        Ok(topics)
    }

    /// The dominant topic of every document. Ties go to the first maximum,
    /// i.e. the lowest topic id.
    pub fn dominant_topics(&self) -> Result<Vec<usize>, LdaError> {
        let doc_topics = self.document_topics()?;

        let mut dominant = Vec::with_capacity(doc_topics.nrows());
        for doc_idx in 0..doc_topics.nrows() {
            let mut best_topic = 0;
            let mut best_weight = 0.0;
            for topic in 0..self.config.num_topics {
                if doc_topics[[doc_idx, topic]] > best_weight {
                    best_weight = doc_topics[[doc_idx, topic]];
                    best_topic = topic;
                }
            }
            dominant.push(best_topic);
        }

        Ok(dominant)
    }
}

/// Sample a topic for one word instance from the collapsed conditional.
#[allow(clippy::too_many_arguments)]
fn sample_topic(
    word: usize,
    doc_idx: usize,
    num_topics: usize,
    topic_word: &Array2<f64>,
    doc_topic: &Array2<f64>,
    topic_counts: &Array1<f64>,
    alpha: f64,
    beta: f64,
    beta_sum: f64,
    rng: &mut StdRng,
) -> usize {
    let doc_total = doc_topic.row(doc_idx).sum() + num_topics as f64 * alpha;

    let mut probs = Vec::with_capacity(num_topics);
    let mut total = 0.0;

    for topic in 0..num_topics {
        let doc_part = (doc_topic[[doc_idx, topic]] + alpha) / doc_total;
        let word_part = (topic_word[[topic, word]] + beta) / (topic_counts[topic] + beta_sum);
        let prob = doc_part * word_part;
        total += prob;
        probs.push(prob);
    }

    let threshold = rng.gen::<f64>() * total;
    let mut cumsum = 0.0;
    for (topic, &prob) in probs.iter().enumerate() {
        cumsum += prob;
        if cumsum >= threshold {
            return topic;
        }
    }

    num_topics - 1
}
