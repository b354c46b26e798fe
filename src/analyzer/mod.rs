//! Analyzer module for page fetching and inspection
//!
//! This module contains the core analysis logic, including:
//! - HTTP fetching with redirect and size limits
//! - DOCTYPE-based HTML version detection
//! - Title, heading and login-form extraction
//! - Link resolution and internal/external classification
//! - Bounded-concurrency link accessibility probing

mod doctype;
mod fetcher;
mod links;
mod page;
mod parser;
mod prober;

pub use doctype::{classify_doctype, detect_html_version, HtmlVersion};
pub use fetcher::{build_http_client, status_message, FetchOutcome, Fetcher};
pub use links::{collect_links, LinkSet};
pub use page::{AnalysisResult, PageAnalyzer};
pub use parser::{count_headings, detect_login_form, extract_title, parse_document};
pub use prober::{HttpLinkChecker, LinkChecker, Prober};

use crate::config::Config;
use crate::url::normalize_input;

/// Runs a complete analysis of one URL
///
/// This is the main entry point. It will:
/// 1. Normalize the URL (trim, assume `https://` when no scheme is given)
/// 2. Fetch the document
/// 3. Analyze the markup against the final URL after redirects
///
/// # Arguments
///
/// * `config` - Fetch and probe limits
/// * `url` - The URL as supplied by the user
///
/// # Returns
///
/// * `Ok(AnalysisResult)` - The page report
/// * `Err(LensError)` - Input, fetch or parse failure; failed link probes never
///   end up here
pub async fn analyze_url(config: &Config, url: &str) -> crate::Result<AnalysisResult> {
    let url = normalize_input(url);

    let fetcher = Fetcher::new(&config.fetcher)?;
    let analyzer = PageAnalyzer::new(&config.prober)?;

    let outcome = fetcher.fetch(&url).await?;
    if outcome.final_url.trim_end_matches('/') != url.trim_end_matches('/') {
        tracing::info!("{} redirected to {}", url, outcome.final_url);
    }

    let result = analyzer.analyze(&outcome.markup, &outcome.final_url).await?;

    tracing::info!(
        "Analyzed {}: {}, {} internal / {} external links, {} inaccessible",
        result.url,
        result.html_version,
        result.internal_links,
        result.external_links,
        result.inaccessible_links
    );

    Ok(result)
}
