//! HTML parser for extracting page metadata
//!
//! This module handles parsing markup into a document tree and reading:
//! - The page title
//! - The heading census (h1..h6)
//! - Signs of a login form

use crate::ParseError;
use scraper::{Html, Selector};
use std::collections::BTreeMap;

const HEADING_TAGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

/// Substrings in a form's attributes that mark it as a login form
const LOGIN_PATTERNS: [&str; 5] = ["login", "signin", "sign-in", "auth", "log-in"];

/// How much of the markup is sniffed for binary content
const BINARY_SNIFF_BYTES: usize = 1024;

/// Parses markup into a traversable document
///
/// The HTML parser itself recovers from any malformed markup, so only input that
/// is not a document at all is rejected: empty or whitespace-only text, and text
/// with a NUL byte among its first 1 KiB (binary content served as a page). A
/// stray NUL further into a real page does not stop it from being analyzed.
pub fn parse_document(markup: &str) -> Result<Html, ParseError> {
    if markup.trim().is_empty() {
        return Err(ParseError::Empty);
    }

    if looks_binary(markup) {
        return Err(ParseError::Binary);
    }

    Ok(Html::parse_document(markup))
}

fn looks_binary(markup: &str) -> bool {
    markup
        .as_bytes()
        .iter()
        .take(BINARY_SNIFF_BYTES)
        .any(|&byte| byte == 0)
}

/// Extracts the trimmed text of the first `<title>`, or an empty string
pub fn extract_title(document: &Html) -> String {
    let Ok(title_selector) = Selector::parse("title") else {
        return String::new();
    };

    document
        .select(&title_selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

/// Counts h1..h6 elements, keeping only tags that occur at least once
pub fn count_headings(document: &Html) -> BTreeMap<String, usize> {
    let mut headings = BTreeMap::new();

    for tag in HEADING_TAGS {
        if let Ok(heading_selector) = Selector::parse(tag) {
            let count = document.select(&heading_selector).count();
            if count > 0 {
                headings.insert(tag.to_string(), count);
            }
        }
    }

    headings
}

/// Detects whether the page appears to contain a login form
///
/// # Detection Rules
///
/// 1. Any `<input type="password">` (type compared case-insensitively)
/// 2. Otherwise, the first `<form>` whose `action`, `id`, `class` or `name`
///    contains `login`, `signin`, `sign-in`, `auth` or `log-in`
pub fn detect_login_form(document: &Html) -> bool {
    if let Ok(input_selector) = Selector::parse("input") {
        let has_password = document.select(&input_selector).any(|input| {
            input
                .value()
                .attr("type")
                .is_some_and(|t| t.eq_ignore_ascii_case("password"))
        });

        if has_password {
            return true;
        }
    }

    let Ok(form_selector) = Selector::parse("form") else {
        return false;
    };

    document.select(&form_selector).any(|form| {
        let element = form.value();
        let attrs = ["action", "id", "class", "name"]
            .iter()
            .map(|name| element.attr(name).unwrap_or_default())
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();

        LOGIN_PATTERNS.iter().any(|pattern| attrs.contains(pattern))
    })
}
