// Grouping companies by dominant topic.
//
// Each retained filing has a topic-weight distribution; the company goes
// into the group of its highest-weight topic. Ties go to the first maximum
// (the lowest topic id), so the assignment is a total function: every
// company lands in exactly one group.

use serde::Serialize;

/// One topic's group of companies.
#[derive(Debug, Clone, Serialize)]
pub struct TopicGroup {
    pub topic: usize,
    pub companies: Vec<String>,
}

/// The final artifact: every topic id with the companies assigned to it.
/// Groups exist for all topic ids, including empty ones.
#[derive(Debug, Clone, Serialize)]
pub struct TopicClusters {
    pub groups: Vec<TopicGroup>,
}

impl TopicClusters {
    /// Total companies across all groups.
    pub fn total_companies(&self) -> usize {
        self.groups.iter().map(|g| g.companies.len()).sum()
    }

    /// Number of groups with at least one company.
    pub fn non_empty(&self) -> usize {
        self.groups.iter().filter(|g| !g.companies.is_empty()).count()
    }
}

/// The dominant topic of one weight vector: first maximum wins.
pub fn dominant_topic(weights: &[f64]) -> usize {
    let mut best = 0;
    let mut best_weight = f64::NEG_INFINITY;
    for (topic, &w) in weights.iter().enumerate() {
        if w > best_weight {
            best_weight = w;
            best = topic;
        }
    }
    best
}

/// Group company labels by each document's dominant topic.
///
/// `doc_topics` and `companies` run in parallel; both must have one entry
/// per retained filing.
pub fn cluster_by_dominant_topic(
    doc_topics: &[Vec<f64>],
    companies: &[String],
    num_topics: usize,
) -> TopicClusters {
    let mut groups: Vec<TopicGroup> = (0..num_topics)
        .map(|topic| TopicGroup {
            topic,
            companies: Vec::new(),
        })
        .collect();

    for (weights, company) in doc_topics.iter().zip(companies.iter()) {
        let topic = dominant_topic(weights);
        groups[topic].companies.push(company.clone());
    }

    TopicClusters { groups }
}
