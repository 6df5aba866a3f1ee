// Filing watchlist and the scrape loop.
//
// The input is a static list of (company, URL) pairs: a built-in watchlist
// of 32 large filers, or a JSON file of the same shape. The scrape loop is
// sequential and best-effort: a failed fetch or an extraction miss drops
// that company from the working set for the rest of the run.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::client::EdgarClient;
use super::extract::{self, ExtractedSection};

/// Section bracket for 10-K filings: record from the Business header until
/// the Risk Factors header.
pub const SECTION_START: &str = "business";
pub const SECTION_STOP: &str = "risk factors";

/// One watchlist entry: a company label and the URL of its 10-K HTML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilingSource {
    pub company: String,
    pub url: String,
}

/// A fetched filing with its extracted Business section. Read-only once
/// built; the rest of the pipeline only derives from it.
#[derive(Debug, Clone)]
pub struct Filing {
    pub company: String,
    pub url: String,
    /// Sub-headers recorded inside the Business section.
    pub headers: Vec<String>,
    /// Extracted section text, whitespace-normalized, never empty.
    pub text: String,
    pub fetched_at: DateTime<Utc>,
}

/// The built-in watchlist: 32 large filers with their 10-K archive URLs.
const WATCHLIST: &[(&str, &str)] = &[
    ("Apple", "https://www.sec.gov/Archives/edgar/data/320193/000032019320000096/aapl-20200926.htm"),
    ("Microsoft", "https://www.sec.gov/Archives/edgar/data/789019/000156459020034944/msft-10k_20200630.htm"),
    ("Amazon", "https://www.sec.gov/Archives/edgar/data/1018724/000101872421000004/amzn-20201231.htm"),
    ("Alphabet", "https://www.sec.gov/Archives/edgar/data/1652044/000165204421000010/goog-20201231.htm"),
    ("Facebook", "https://www.sec.gov/Archives/edgar/data/1326801/000132680121000014/fb-20201231.htm"),
    ("Tesla", "https://www.sec.gov/Archives/edgar/data/1318605/000156459021004599/tsla-10k_20201231.htm"),
    ("Nvidia", "https://www.sec.gov/Archives/edgar/data/1045810/000104581021000010/nvda-20210131.htm"),
    ("Intel", "https://www.sec.gov/Archives/edgar/data/50863/000005086321000010/intc-20201226.htm"),
    ("IBM", "https://www.sec.gov/Archives/edgar/data/51143/000155837021001489/ibm-20201231.htm"),
    ("Oracle", "https://www.sec.gov/Archives/edgar/data/1341439/000156459020030125/orcl-10k_20200531.htm"),
    ("Cisco", "https://www.sec.gov/Archives/edgar/data/858877/000085887720000031/csco-20200725.htm"),
    ("Adobe", "https://www.sec.gov/Archives/edgar/data/796343/000079634321000006/adbe-20201127.htm"),
    ("Salesforce", "https://www.sec.gov/Archives/edgar/data/1108524/000110852421000012/crm-20210131.htm"),
    ("Netflix", "https://www.sec.gov/Archives/edgar/data/1065280/000106528021000040/nflx-20201231.htm"),
    ("PayPal", "https://www.sec.gov/Archives/edgar/data/1633917/000163391721000028/pypl-20201231.htm"),
    ("Qualcomm", "https://www.sec.gov/Archives/edgar/data/804328/000172894920000062/qcom-20200927.htm"),
    ("Texas Instruments", "https://www.sec.gov/Archives/edgar/data/97476/000009747621000010/txn-20201231.htm"),
    ("Broadcom", "https://www.sec.gov/Archives/edgar/data/1730168/000173016820000153/avgo-20201101.htm"),
    ("AMD", "https://www.sec.gov/Archives/edgar/data/2488/000000248821000012/amd-20201226.htm"),
    ("Micron", "https://www.sec.gov/Archives/edgar/data/723125/000072312520000054/mu-20200903.htm"),
    ("Boeing", "https://www.sec.gov/Archives/edgar/data/12927/000001292721000010/ba-20201231.htm"),
    ("Caterpillar", "https://www.sec.gov/Archives/edgar/data/18230/000001823021000074/cat-20201231.htm"),
    ("Coca-Cola", "https://www.sec.gov/Archives/edgar/data/21344/000002134421000008/ko-20201231.htm"),
    ("PepsiCo", "https://www.sec.gov/Archives/edgar/data/77476/000007747621000007/pep-20201226.htm"),
    ("Procter & Gamble", "https://www.sec.gov/Archives/edgar/data/80424/000008042420000059/pg-20200630.htm"),
    ("Johnson & Johnson", "https://www.sec.gov/Archives/edgar/data/200406/000020040621000009/jnj-20210103.htm"),
    ("Pfizer", "https://www.sec.gov/Archives/edgar/data/78003/000007800321000024/pfe-20201231.htm"),
    ("Merck", "https://www.sec.gov/Archives/edgar/data/310158/000031015821000004/mrk-20201231.htm"),
    ("JPMorgan Chase", "https://www.sec.gov/Archives/edgar/data/19617/000001961721000236/jpm-20201231.htm"),
    ("Goldman Sachs", "https://www.sec.gov/Archives/edgar/data/886982/000088698221000008/gs-20201231.htm"),
    ("Walmart", "https://www.sec.gov/Archives/edgar/data/104169/000010416921000033/wmt-20210131.htm"),
    ("Home Depot", "https://www.sec.gov/Archives/edgar/data/354950/000035495021000089/hd-20210131.htm"),
];

/// The built-in (company, URL) watchlist.
pub fn default_watchlist() -> Vec<FilingSource> {
    WATCHLIST
        .iter()
        .map(|(company, url)| FilingSource {
            company: (*company).to_string(),
            url: (*url).to_string(),
        })
        .collect()
}

/// Load a watchlist from a JSON file: an array of {"company", "url"} objects.
pub fn load_watchlist(path: &str) -> Result<Vec<FilingSource>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read watchlist file: {path}"))?;
    let sources: Vec<FilingSource> =
        serde_json::from_str(&raw).with_context(|| format!("Invalid watchlist JSON: {path}"))?;
    if sources.is_empty() {
        anyhow::bail!("Watchlist {path} is empty");
    }
    Ok(sources)
}

/// Fetch every watchlist entry and extract its Business section.
///
/// Sequential, one request at a time. Companies whose fetch fails or whose
/// filing has no recognizable Business section are dropped with a warning;
/// the survivors come back in watchlist order.
pub async fn scrape_filings(client: &EdgarClient, sources: &[FilingSource]) -> Result<Vec<Filing>> {
    let pb = ProgressBar::new(sources.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("  Filings [{bar:30}] {pos}/{len} ({eta})")
            .unwrap(),
    );

    let mut filings = Vec::new();

    for source in sources {
        pb.inc(1);

        let html = match client.fetch_html(&source.url).await {
            Ok(html) => html,
            Err(e) => {
                warn!(company = %source.company, error = %e, "Fetch failed, dropping");
                continue;
            }
        };

        let Some(ExtractedSection { headers, text }) =
            extract::extract_section(&html, SECTION_START, SECTION_STOP)
        else {
            warn!(company = %source.company, "No Business section found, dropping");
            continue;
        };

        filings.push(Filing {
            company: source.company.clone(),
            url: source.url.clone(),
            headers,
            text,
            fetched_at: Utc::now(),
        });
    }

    pb.finish_and_clear();

    info!(
        retained = filings.len(),
        dropped = sources.len() - filings.len(),
        "Scrape complete"
    );

    Ok(filings)
}
