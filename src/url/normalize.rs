/// Normalizes a URL typed by a user before it is fetched
///
/// Surrounding whitespace is removed and, when the input carries no `http://` or
/// `https://` scheme, `https://` is assumed. Empty input stays empty so the
/// fetcher can reject it.
///
/// # Examples
///
/// ```
/// use web_lens::url::normalize_input;
///
/// assert_eq!(normalize_input("  example.com "), "https://example.com");
/// assert_eq!(normalize_input("http://example.com"), "http://example.com");
/// assert_eq!(normalize_input("   "), "");
/// ```
pub fn normalize_input(raw: &str) -> String {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return String::new();
    }

    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    }
}
