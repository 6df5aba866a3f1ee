use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use tenk::config::Config;
use tenk::edgar::client::EdgarClient;
use tenk::edgar::extract;
use tenk::edgar::filings::{self, FilingSource, SECTION_START, SECTION_STOP};
use tenk::output::{terminal, truncate_chars};
use tenk::pipeline::run::{self, RunParams};

/// Tenk: topic clustering for SEC 10-K filings.
///
/// Fetches each watchlist company's 10-K, isolates the Business section,
/// and clusters the companies by the topics an LDA model finds in that
/// text.
#[derive(Parser)]
#[command(name = "tenk", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full pipeline: fetch, extract, normalize, model, cluster
    Run {
        /// Number of LDA topics
        #[arg(long, default_value = "6")]
        topics: usize,

        /// Gibbs sampling passes over the corpus
        #[arg(long, default_value = "40")]
        passes: usize,

        /// Random seed (same seed, same clustering)
        #[arg(long, default_value = "42")]
        seed: u64,

        /// Drop tokens appearing in fewer than this many documents
        #[arg(long, default_value = "5")]
        min_doc_freq: u32,

        /// Minimum adjacent-pair count for bigram phrases
        #[arg(long, default_value = "20")]
        bigram_min_count: u32,

        /// Watchlist JSON file (array of {company, url} objects)
        #[arg(long)]
        filings: Option<String>,

        /// Emit the report as JSON instead of the terminal display
        #[arg(long)]
        json: bool,
    },

    /// Fetch one filing and print its extracted Business section
    Extract {
        /// URL of the 10-K HTML document
        url: String,
    },

    /// Show the active watchlist
    List {
        /// Watchlist JSON file (array of {company, url} objects)
        #[arg(long)]
        filings: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("tenk=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            topics,
            passes,
            seed,
            min_doc_freq,
            bigram_min_count,
            filings,
            json,
        } => {
            let config = Config::load()?;
            let sources = resolve_watchlist(&config, filings.as_deref())?;
            let client = EdgarClient::new(&config.user_agent)?;

            let params = RunParams {
                num_topics: topics,
                passes,
                seed,
                min_doc_freq,
                bigram_min_count,
                ..Default::default()
            };

            let report = run::run(&client, &sources, &params).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                terminal::display_topics(&report.topics);
                terminal::display_clusters(&report.clusters);
                if report.dropped > 0 {
                    println!(
                        "{}",
                        format!(
                            "{} of {} filings were dropped (fetch failure or no Business section).",
                            report.dropped,
                            report.retained + report.dropped
                        )
                        .dimmed()
                    );
                }
            }
        }

        Commands::Extract { url } => {
            let config = Config::load()?;
            let client = EdgarClient::new(&config.user_agent)?;

            println!("Fetching {url}...");
            let html = client.fetch_html(&url).await?;

            let Some(section) = extract::extract_section(&html, SECTION_START, SECTION_STOP)
            else {
                anyhow::bail!("No Business section found in {url}");
            };

            info!(
                headers = section.headers.len(),
                chars = section.text.len(),
                "Extraction succeeded"
            );

            println!("\n{}", "=== Section Headers ===".bold());
            for header in &section.headers {
                println!("  {header}");
            }
            println!("\n{}", "=== Section Text (preview) ===".bold());
            println!("{}", truncate_chars(&section.text, 600));
            println!(
                "\n{}",
                format!("{} characters extracted.", section.text.len()).dimmed()
            );
        }

        Commands::List { filings } => {
            let config = Config::load()?;
            let sources = resolve_watchlist(&config, filings.as_deref())?;

            println!("\n{}", format!("=== Watchlist ({}) ===", sources.len()).bold());
            for source in &sources {
                println!(
                    "  {:<20} {}",
                    source.company,
                    truncate_chars(&source.url, 80).dimmed()
                );
            }
        }
    }

    Ok(())
}

/// Pick the watchlist: --filings flag, then TENK_FILINGS, then built-in.
fn resolve_watchlist(config: &Config, flag: Option<&str>) -> Result<Vec<FilingSource>> {
    match flag.or(config.filings_path.as_deref()) {
        Some(path) => filings::load_watchlist(path),
        None => Ok(filings::default_watchlist()),
    }
}
