use super::split_scheme;

/// Extracts the lowercased host (and port, if any) from a URL
///
/// The host is everything between `scheme://` and the next `/`. No `www.` or
/// public-suffix folding is applied, so two URLs share a host only when these
/// strings are exactly equal.
///
/// # Examples
///
/// ```
/// use web_lens::url::extract_host;
///
/// assert_eq!(extract_host("http://www.test.org:8080/page"), "www.test.org:8080");
/// assert_eq!(extract_host("https://EXAMPLE.com"), "example.com");
/// assert_eq!(extract_host("/relative/path"), "");
/// ```
pub fn extract_host(url: &str) -> String {
    let Some((_, rest)) = split_scheme(url) else {
        return String::new();
    };

    rest.split('/').next().unwrap_or_default().to_lowercase()
}
