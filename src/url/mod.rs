//! URL handling module for Web-Lens
//!
//! This module provides string-level link resolution, host extraction and
//! normalization of user-supplied URLs. Resolution deliberately works on the raw
//! text rather than a parsed URL so that links are reported exactly as written.

mod host;
mod normalize;
mod resolve;

// Re-export main functions
pub use host::extract_host;
pub use normalize::normalize_input;
pub use resolve::resolve;

/// Splits `http://rest` or `https://rest` into the scheme and the remainder
fn split_scheme(url: &str) -> Option<(&str, &str)> {
    if let Some(rest) = url.strip_prefix("https://") {
        Some(("https", rest))
    } else {
        url.strip_prefix("http://").map(|rest| ("http", rest))
    }
}
