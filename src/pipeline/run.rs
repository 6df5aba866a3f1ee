// Batch clustering pipeline: fetch, extract, normalize, model, group.
//
// Sequential and best-effort over a small fixed input set. Companies drop
// out at two points: a failed fetch, or a filing with no recognizable
// Business section. Everything downstream operates on the survivors.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::cluster::{self, TopicClusters};
use crate::corpus::{build_corpus, Dictionary};
use crate::edgar::client::EdgarClient;
use crate::edgar::filings::{self, FilingSource};
use crate::model::lda::{LdaConfig, LdaModel, Topic};
use crate::model::TopicInference;
use crate::text::bigrams::BigramDetector;
use crate::text::normalize::Normalizer;

/// Tunable knobs for one pipeline run. All of them surface as CLI flags.
#[derive(Debug, Clone)]
pub struct RunParams {
    pub num_topics: usize,
    pub passes: usize,
    pub seed: u64,
    /// Tokens must appear in at least this many documents to survive.
    pub min_doc_freq: u32,
    /// Minimum adjacent-pair count for bigram phrases.
    pub bigram_min_count: u32,
    /// Top words to report per topic.
    pub top_terms: usize,
}

impl Default for RunParams {
    fn default() -> Self {
        Self {
            num_topics: 6,
            passes: 40,
            seed: 42,
            min_doc_freq: 5,
            bigram_min_count: 20,
            top_terms: 10,
        }
    }
}

/// Everything the run produced, ready for display or JSON output.
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub retained: usize,
    pub dropped: usize,
    pub topics: Vec<Topic>,
    pub clusters: TopicClusters,
}

/// Run the whole pipeline over a watchlist.
pub async fn run(
    client: &EdgarClient,
    sources: &[FilingSource],
    params: &RunParams,
) -> Result<RunReport> {
    // Step 1: fetch filings and extract Business sections.
    println!("Fetching {} filings from EDGAR...", sources.len());
    let retained = filings::scrape_filings(client, sources).await?;
    let dropped = sources.len() - retained.len();
    if retained.is_empty() {
        anyhow::bail!("No filings survived extraction; nothing to cluster");
    }

    // Step 2: normalize each section into its token sequence.
    println!("Normalizing {} sections...", retained.len());
    let normalizer = Normalizer::with_default_stopwords();
    let mut docs: Vec<Vec<String>> = retained
        .iter()
        .map(|f| normalizer.normalize(&f.text))
        .collect();
    info!(
        documents = docs.len(),
        tokens = docs.iter().map(Vec::len).sum::<usize>(),
        "Normalization complete"
    );

    // Step 3: detect corpus-level bigrams and append compound tokens.
    let detector = BigramDetector {
        min_count: params.bigram_min_count,
        ..Default::default()
    };
    let phrases = detector.augment(&mut docs);
    info!(phrases = phrases, "Bigram augmentation complete");

    // Step 4: vocabulary and bag-of-words corpus.
    let mut dictionary = Dictionary::from_documents(&docs);
    dictionary.filter_extremes(params.min_doc_freq);
    if dictionary.is_empty() {
        anyhow::bail!(
            "Vocabulary is empty after frequency filtering (min document frequency {})",
            params.min_doc_freq
        );
    }
    let corpus = build_corpus(&dictionary, &docs);

    // Step 5: fit the topic model.
    println!(
        "Training LDA: {} topics, {} passes, seed {}...",
        params.num_topics, params.passes, params.seed
    );
    let config = LdaConfig::new(params.num_topics)
        .passes(params.passes)
        .seed(params.seed);
    let mut model = LdaModel::new(config).context("Invalid model configuration")?;
    model
        .fit(&corpus, dictionary.terms().to_vec())
        .context("Model training failed")?;

    // Step 6: group companies by dominant topic.
    let doc_topics = model.document_topic_weights()?;
    let companies: Vec<String> = retained.iter().map(|f| f.company.clone()).collect();
    let clusters = cluster::cluster_by_dominant_topic(&doc_topics, &companies, params.num_topics);

    let topics = model
        .top_terms(params.top_terms)
        .context("Reading topic terms failed")?;

    info!(
        retained = retained.len(),
        dropped = dropped,
        clusters = clusters.non_empty(),
        "Pipeline complete"
    );

    Ok(RunReport {
        retained: retained.len(),
        dropped,
        topics,
        clusters,
    })
}
