//! Page analysis
//!
//! Combines the version detection, metadata extraction and link collection of a
//! document with the accessibility probe of its links.

use crate::analyzer::doctype::{detect_html_version, HtmlVersion};
use crate::analyzer::links::{collect_links, LinkSet};
use crate::analyzer::parser::{count_headings, detect_login_form, extract_title, parse_document};
use crate::analyzer::prober::{HttpLinkChecker, LinkChecker, Prober};
use crate::config::ProberConfig;
use crate::ParseError;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

/// Report produced for one analyzed page
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    /// The URL the markup was served from (after redirects)
    pub url: String,

    pub html_version: HtmlVersion,

    /// Trimmed `<title>` text; empty when the page has none
    pub title: String,

    /// Heading tag ("h1".."h6") to count; tags that never occur are absent
    pub headings: BTreeMap<String, usize>,

    /// Anchors pointing at the page's own host, duplicates included
    pub internal_links: usize,

    /// Anchors pointing at any other host, duplicates included
    pub external_links: usize,

    /// Distinct links that failed their accessibility check
    pub inaccessible_links: usize,

    pub has_login_form: bool,

    pub analyzed_at: DateTime<Utc>,
}

/// Everything that can be read from the document without network access
#[derive(Debug)]
struct PageInspection {
    html_version: HtmlVersion,
    title: String,
    headings: BTreeMap<String, usize>,
    links: LinkSet,
    has_login_form: bool,
}

/// Parses the markup and extracts everything but link accessibility
///
/// The parsed tree is not `Send`, so it never outlives this call.
fn inspect(markup: &str, base_url: &str) -> Result<PageInspection, ParseError> {
    let document = parse_document(markup)?;

    Ok(PageInspection {
        html_version: detect_html_version(markup),
        title: extract_title(&document),
        headings: count_headings(&document),
        links: collect_links(&document, base_url),
        has_login_form: detect_login_form(&document),
    })
}

/// Analyzes fetched markup
pub struct PageAnalyzer<C = HttpLinkChecker> {
    prober: Prober<C>,
}

impl PageAnalyzer<HttpLinkChecker> {
    /// Creates an analyzer that probes links over HTTP
    pub fn new(config: &ProberConfig) -> Result<Self, reqwest::Error> {
        Ok(Self::with_prober(Prober::new(config)?))
    }
}

impl<C: LinkChecker + 'static> PageAnalyzer<C> {
    pub fn with_prober(prober: Prober<C>) -> Self {
        Self { prober }
    }

    /// Analyzes markup served from `final_url`
    ///
    /// # Steps
    ///
    /// 1. Classify the HTML version from the DOCTYPE
    /// 2. Read the title and heading census
    /// 3. Resolve and classify every anchor against `final_url`
    /// 4. Probe the distinct links (no network activity if there are none)
    /// 5. Apply the login-form heuristic
    ///
    /// # Returns
    ///
    /// * `Ok(AnalysisResult)` - The completed report
    /// * `Err(ParseError)` - The markup is not a parseable document
    pub async fn analyze(
        &self,
        markup: &str,
        final_url: &str,
    ) -> Result<AnalysisResult, ParseError> {
        let inspection = inspect(markup, final_url)?;

        tracing::debug!(
            "{}: {} internal, {} external, {} distinct links",
            final_url,
            inspection.links.internal(),
            inspection.links.external(),
            inspection.links.urls().len()
        );

        let inaccessible_links = self.prober.probe(inspection.links.urls()).await;

        Ok(AnalysisResult {
            url: final_url.to_string(),
            html_version: inspection.html_version,
            title: inspection.title,
            headings: inspection.headings,
            internal_links: inspection.links.internal(),
            external_links: inspection.links.external(),
            inaccessible_links,
            has_login_form: inspection.has_login_form,
            analyzed_at: Utc::now(),
        })
    }
}
