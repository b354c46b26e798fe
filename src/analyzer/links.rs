//! Link extraction and internal/external classification

use crate::url::{extract_host, resolve};
use scraper::{Html, Selector};
use std::collections::HashSet;

/// `href` prefixes that never point at another document
const SKIPPED_PREFIXES: [&str; 4] = ["#", "javascript:", "mailto:", "tel:"];

/// Links found on a page
///
/// The counters grow once per anchor, so two anchors pointing at the same URL
/// count twice. The URL list holds each resolved URL once, in the order it was
/// first seen, and is what gets probed.
#[derive(Debug, Clone, Default)]
pub struct LinkSet {
    urls: Vec<String>,
    seen: HashSet<String>,
    internal: usize,
    external: usize,
}

impl LinkSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one anchor pointing at `url`
    pub fn record(&mut self, url: String, internal: bool) {
        if internal {
            self.internal += 1;
        } else {
            self.external += 1;
        }

        if self.seen.insert(url.clone()) {
            self.urls.push(url);
        }
    }

    /// Distinct URLs in first-seen order
    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    pub fn internal(&self) -> usize {
        self.internal
    }

    pub fn external(&self) -> usize {
        self.external
    }
}

/// Returns true for hrefs that are fragments or non-navigational schemes
fn is_skipped(href: &str) -> bool {
    SKIPPED_PREFIXES
        .iter()
        .any(|prefix| href.starts_with(prefix))
}

/// Collects every `<a href>` in the document, resolved against `base_url`
///
/// A link is internal when its host equals the host of `base_url`. Empty hrefs,
/// skipped prefixes and hrefs that cannot be resolved are not counted.
pub fn collect_links(document: &Html, base_url: &str) -> LinkSet {
    let mut links = LinkSet::new();
    let Ok(anchor_selector) = Selector::parse("a[href]") else {
        return links;
    };
    let base_host = extract_host(base_url);

    for anchor in document.select(&anchor_selector) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };

        if href.is_empty() || is_skipped(href) {
            continue;
        }

        let resolved = resolve(base_url, href);
        if resolved.is_empty() {
            tracing::trace!("Could not resolve {} against {}", href, base_url);
            continue;
        }

        let internal = extract_host(&resolved) == base_host;
        links.record(resolved, internal);
    }

    links
}
