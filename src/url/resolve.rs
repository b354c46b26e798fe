use super::split_scheme;

/// Resolves a link reference against the URL of the page it appeared on
///
/// # Resolution Rules
///
/// | Reference | Result |
/// |-----------|--------|
/// | `http://…`, `https://…` | returned unchanged |
/// | `//host/path` | scheme of the base + `:` + reference |
/// | `/path` | origin of the base + reference |
/// | `path` | directory of the base + reference |
///
/// The resolution is purely textual: no percent-decoding, no `.`/`..` segment
/// removal and no query or fragment stripping of the reference.
///
/// # Arguments
///
/// * `base_url` - The URL of the page containing the link
/// * `reference` - The raw `href` value
///
/// # Returns
///
/// The fully-qualified URL, or an empty string when the base has no
/// recognizable `http(s)://authority` prefix
///
/// # Examples
///
/// ```
/// use web_lens::url::resolve;
///
/// assert_eq!(
///     resolve("https://example.com/dir/page", "other.html"),
///     "https://example.com/dir/other.html"
/// );
/// assert_eq!(resolve("https://example.com/page", "/other"), "https://example.com/other");
/// assert_eq!(resolve("not a url", "/other"), "");
/// ```
pub fn resolve(base_url: &str, reference: &str) -> String {
    if reference.starts_with("http://") || reference.starts_with("https://") {
        return reference.to_string();
    }

    if reference.starts_with("//") {
        let scheme = if base_url.starts_with("https://") {
            "https"
        } else {
            "http"
        };
        return format!("{}:{}", scheme, reference);
    }

    let Some(origin) = origin(base_url) else {
        return String::new();
    };

    if reference.starts_with('/') {
        return format!("{}{}", origin, reference);
    }

    format!("{}{}", directory(base_url, origin), reference)
}

/// Returns `scheme://authority` of the URL, stopping at the first `/` after the scheme
fn origin(url: &str) -> Option<&str> {
    let (scheme, rest) = split_scheme(url)?;
    let authority_len = rest.find('/').unwrap_or(rest.len());
    if authority_len == 0 {
        return None;
    }
    // scheme plus "://"
    url.get(..scheme.len() + 3 + authority_len)
}

/// Returns the base URL truncated after the last `/` of its path
///
/// The path ends at the first `?` or `#`. When the path holds no slash beyond the
/// one right after the origin, the directory is the origin root.
fn directory(base_url: &str, origin: &str) -> String {
    let path = base_url.get(origin.len()..).unwrap_or_default();
    let path = path.split(['?', '#']).next().unwrap_or_default();

    match path.rfind('/') {
        Some(idx) if idx > 0 => format!("{}{}", origin, &path[..=idx]),
        _ => format!("{}/", origin),
    }
}
