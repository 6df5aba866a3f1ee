// Topic model: the LDA engine and its trait seam.
//
// The cluster reporter only needs per-document topic weights, so it talks
// to this trait rather than the concrete sampler. Swapping in a different
// inference engine later means implementing one method.

pub mod lda;

use anyhow::Result;

/// Anything that can report per-document topic-weight distributions.
pub trait TopicInference {
    /// The configured number of topics.
    fn num_topics(&self) -> usize;

    /// One weight vector per document, each summing to 1.
    fn document_topic_weights(&self) -> Result<Vec<Vec<f64>>>;
}

impl TopicInference for lda::LdaModel {
    fn num_topics(&self) -> usize {
        self.config().num_topics
    }

    fn document_topic_weights(&self) -> Result<Vec<Vec<f64>>> {
        let doc_topics = self.document_topics()?;
        Ok(doc_topics
            .rows()
            .into_iter()
            .map(|row| row.to_vec())
            .collect())
    }
}
