// Colored terminal output for the cluster report.
//
// This module handles all terminal-specific formatting: colors, bars,
// column layout. The main.rs display paths delegate here.

use colored::Colorize;

use crate::cluster::TopicClusters;
use crate::model::lda::Topic;

/// Display the company clusters as a formatted report.
///
/// One block per topic with a share bar sized by the fraction of retained
/// companies in the group. Empty groups are listed briefly at the end so
/// the reader can see how many of the configured topics went unused.
pub fn display_clusters(clusters: &TopicClusters) {
    let total = clusters.total_companies();

    println!(
        "\n{}",
        format!("=== Company Clusters ({total} companies) ===").bold()
    );
    println!();

    if total == 0 {
        println!("  No companies retained; every filing was dropped.");
        return;
    }

    let bar_width: usize = 20;

    for group in &clusters.groups {
        if group.companies.is_empty() {
            continue;
        }

        let share = group.companies.len() as f64 / total as f64;
        let filled = (share * bar_width as f64).round() as usize;
        let bar = format!(
            "[{}{}]",
            "=".repeat(filled),
            " ".repeat(bar_width.saturating_sub(filled))
        );

        let colored_bar = if share >= 0.25 {
            bar.bright_green()
        } else if share >= 0.10 {
            bar.bright_yellow()
        } else {
            bar.bright_blue()
        };

        println!(
            "  Topic {:>2} {} {:>2} {}",
            group.topic,
            colored_bar,
            group.companies.len(),
            if group.companies.len() == 1 {
                "company"
            } else {
                "companies"
            }
        );
        println!("      {}", group.companies.join(", ").dimmed());
        println!();
    }

    let empty = clusters.groups.len() - clusters.non_empty();
    if empty > 0 {
        println!("  {} {empty} topics with no companies", "~".yellow());
    }
}

/// Display each topic's top terms.
pub fn display_topics(topics: &[Topic]) {
    println!("\n{}", "=== Top Words per Topic ===".bold());
    println!();

    for topic in topics {
        let terms: Vec<String> = topic
            .terms
            .iter()
            .map(|(term, prob)| format!("{term} ({prob:.3})"))
            .collect();
        println!("  Topic {:>2}: {}", topic.id, terms.join(", ").dimmed());
    }
    println!();
}
