//! HTML version detection from the DOCTYPE declaration

use serde::Serialize;
use std::fmt;

/// HTML version declared by a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum HtmlVersion {
    #[serde(rename = "HTML5")]
    Html5,
    #[serde(rename = "XHTML 1.0 Strict")]
    Xhtml10Strict,
    #[serde(rename = "XHTML 1.0 Transitional")]
    Xhtml10Transitional,
    #[serde(rename = "XHTML 1.1")]
    Xhtml11,
    #[serde(rename = "HTML 4.01 Strict")]
    Html401Strict,
    #[serde(rename = "HTML 4.01 Transitional")]
    Html401Transitional,
    #[serde(rename = "HTML 4.01 Frameset")]
    Html401Frameset,
    #[serde(rename = "HTML 4.01")]
    Html401,
    /// A DOCTYPE was present but matched no known version
    #[serde(rename = "Unknown (DOCTYPE found)")]
    UnknownDoctype,
    /// The document starts without a DOCTYPE
    #[serde(rename = "Unknown (No DOCTYPE)")]
    NoDoctype,
}

impl HtmlVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Html5 => "HTML5",
            Self::Xhtml10Strict => "XHTML 1.0 Strict",
            Self::Xhtml10Transitional => "XHTML 1.0 Transitional",
            Self::Xhtml11 => "XHTML 1.1",
            Self::Html401Strict => "HTML 4.01 Strict",
            Self::Html401Transitional => "HTML 4.01 Transitional",
            Self::Html401Frameset => "HTML 4.01 Frameset",
            Self::Html401 => "HTML 4.01",
            Self::UnknownDoctype => "Unknown (DOCTYPE found)",
            Self::NoDoctype => "Unknown (No DOCTYPE)",
        }
    }
}

impl fmt::Display for HtmlVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Substrings checked in order after the HTML5 test; first match wins
const DOCTYPE_MARKERS: &[(&str, HtmlVersion)] = &[
    ("xhtml 1.0 strict", HtmlVersion::Xhtml10Strict),
    ("xhtml 1.0 transitional", HtmlVersion::Xhtml10Transitional),
    ("xhtml 1.1", HtmlVersion::Xhtml11),
    ("html 4.01 strict", HtmlVersion::Html401Strict),
    ("html 4.01 transitional", HtmlVersion::Html401Transitional),
    ("html 4.01 frameset", HtmlVersion::Html401Frameset),
    ("html 4.01", HtmlVersion::Html401),
];

/// Detects the HTML version of raw markup
///
/// Only the prologue matters: scanning stops at the first DOCTYPE or the first
/// start tag, whichever comes first.
///
/// # Examples
///
/// ```
/// use web_lens::analyzer::{detect_html_version, HtmlVersion};
///
/// assert_eq!(detect_html_version("<!DOCTYPE html><html></html>"), HtmlVersion::Html5);
/// assert_eq!(detect_html_version("<html></html>"), HtmlVersion::NoDoctype);
/// ```
pub fn detect_html_version(markup: &str) -> HtmlVersion {
    match find_doctype(markup) {
        Some(raw) => classify_doctype(raw),
        None => HtmlVersion::NoDoctype,
    }
}

/// Classifies the raw text of a DOCTYPE declaration
pub fn classify_doctype(raw: &str) -> HtmlVersion {
    let doctype = raw.to_lowercase();

    if doctype.contains("html") && !doctype.contains("public") && !doctype.contains("dtd") {
        return HtmlVersion::Html5;
    }

    DOCTYPE_MARKERS
        .iter()
        .find(|(marker, _)| doctype.contains(marker))
        .map(|(_, version)| *version)
        .unwrap_or(HtmlVersion::UnknownDoctype)
}

/// Returns the raw DOCTYPE token if it appears before any start tag
///
/// Text, comments, end tags, processing instructions and other `<!` declarations
/// are skipped. A `<` not followed by a tag name is treated as text.
fn find_doctype(markup: &str) -> Option<&str> {
    let mut rest = markup;

    while let Some(open) = rest.find('<') {
        let token = &rest[open..];
        let after = &token[1..];

        if let Some(comment) = after.strip_prefix("!--") {
            // `<!-->` and `<!--->` are complete (empty) comments
            rest = if let Some(tail) = comment.strip_prefix('>') {
                tail
            } else if let Some(tail) = comment.strip_prefix("->") {
                tail
            } else {
                let end = comment.find("-->")?;
                &comment[end + 3..]
            };
            continue;
        }

        if let Some(declaration) = after.strip_prefix('!') {
            let end = token.find('>');
            let is_doctype = declaration
                .get(..7)
                .is_some_and(|word| word.eq_ignore_ascii_case("doctype"));

            if is_doctype {
                return Some(match end {
                    Some(end) => &token[..=end],
                    None => token,
                });
            }

            rest = &token[end? + 1..];
            continue;
        }

        if after.starts_with('?') || after.starts_with('/') {
            let end = token.find('>')?;
            rest = &token[end + 1..];
            continue;
        }

        if after.starts_with(|c: char| c.is_ascii_alphabetic()) {
            return None;
        }

        rest = after;
    }

    None
}
