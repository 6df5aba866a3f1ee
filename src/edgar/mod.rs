// SEC EDGAR access: filing fetches and Business-section extraction.

pub mod client;
pub mod extract;
pub mod filings;
