//! HTTP fetcher implementation
//!
//! This module retrieves the document under analysis:
//! - Building the HTTP client from explicit configuration
//! - Rejecting empty or malformed URLs before any network activity
//! - Following a bounded number of redirects
//! - Capping the body size
//! - Classifying failures into [`FetchError`]

use crate::config::FetcherConfig;
use crate::FetchError;
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::{redirect::Policy, Client, Response, StatusCode};
use url::Url;

const ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";
const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.5";

/// A successfully fetched document
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    /// Decoded body, truncated at the configured size cap
    pub markup: String,

    /// HTTP status code of the final response
    pub status_code: u16,

    /// URL of the final response after redirects
    pub final_url: String,
}

/// Fetches documents with the limits from a [`FetcherConfig`]
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    max_redirects: usize,
    max_body_bytes: usize,
}

impl Fetcher {
    /// Creates a fetcher with its own HTTP client
    pub fn new(config: &FetcherConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: build_http_client(config)?,
            max_redirects: config.max_redirects,
            max_body_bytes: config.max_body_bytes,
        })
    }

    /// Fetches a URL
    ///
    /// # Request Flow
    ///
    /// 1. Reject empty input and anything that is not an absolute HTTP(S) URL
    /// 2. Send GET, following at most `max_redirects` redirects
    /// 3. Map status >= 400 to [`FetchError::Status`]
    /// 4. Read the body up to `max_body_bytes`; the rest is dropped
    ///
    /// # Returns
    ///
    /// * `Ok(FetchOutcome)` - Body, status and final URL
    /// * `Err(FetchError)` - Input, local or remote failure
    pub async fn fetch(&self, url: &str) -> Result<FetchOutcome, FetchError> {
        if url.is_empty() {
            return Err(FetchError::EmptyUrl);
        }

        let parsed = Url::parse(url).map_err(|e| FetchError::InvalidUrl(e.to_string()))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(FetchError::InvalidUrl(format!(
                "unsupported scheme '{}'",
                parsed.scheme()
            )));
        }

        tracing::debug!("Fetching {}", parsed);

        let mut response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(|e| classify_error(&e, self.max_redirects))?;

        let status = response.status();
        if status.as_u16() >= 400 {
            tracing::debug!("{} answered with {}", url, status);
            return Err(FetchError::Status {
                status: status.as_u16(),
                message: status_message(status.as_u16()),
            });
        }

        let final_url = response.url().to_string();
        let body = read_capped_body(&mut response, self.max_body_bytes).await?;

        tracing::debug!(
            "Fetched {} bytes from {} (final URL {})",
            body.len(),
            url,
            final_url
        );

        Ok(FetchOutcome {
            markup: String::from_utf8_lossy(&body).into_owned(),
            status_code: status.as_u16(),
            final_url,
        })
    }
}

/// Builds the HTTP client used for document fetches
///
/// # Example
///
/// ```no_run
/// use web_lens::analyzer::build_http_client;
/// use web_lens::config::FetcherConfig;
///
/// let client = build_http_client(&FetcherConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &FetcherConfig) -> Result<Client, reqwest::Error> {
    let mut headers = HeaderMap::new();
    headers.insert(header::ACCEPT, HeaderValue::from_static(ACCEPT));
    headers.insert(
        header::ACCEPT_LANGUAGE,
        HeaderValue::from_static(ACCEPT_LANGUAGE),
    );

    Client::builder()
        .user_agent(config.user_agent.clone())
        .default_headers(headers)
        .timeout(config.timeout())
        .redirect(Policy::limited(config.max_redirects))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Reads the response body, keeping at most `cap` bytes
async fn read_capped_body(response: &mut Response, cap: usize) -> Result<Vec<u8>, FetchError> {
    let mut body = Vec::new();

    while let Some(chunk) = response.chunk().await.map_err(|e| {
        if e.is_timeout() {
            FetchError::Timeout
        } else {
            FetchError::Body(e.to_string())
        }
    })? {
        let remaining = cap.saturating_sub(body.len());
        if chunk.len() >= remaining {
            body.extend_from_slice(&chunk[..remaining]);
            tracing::debug!("Response body truncated at {} bytes", cap);
            break;
        }
        body.extend_from_slice(&chunk);
    }

    Ok(body)
}

/// Maps a transport error to a local [`FetchError`]
fn classify_error(error: &reqwest::Error, max_redirects: usize) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout
    } else if error.is_redirect() {
        FetchError::TooManyRedirects { max: max_redirects }
    } else if error.is_connect() {
        FetchError::Connect(error.to_string())
    } else if error.is_builder() {
        FetchError::InvalidUrl(error.to_string())
    } else {
        FetchError::Network(error.to_string())
    }
}

/// Returns the message shown for a remote error status
///
/// Common statuses get an explanatory sentence; anything else falls back to the
/// canonical reason phrase.
pub fn status_message(code: u16) -> String {
    let message = match code {
        400 => "Bad Request - The server could not understand the request",
        401 => "Unauthorized - Authentication is required",
        403 => "Forbidden - Access to this resource is denied",
        404 => "Not Found - The requested page does not exist",
        405 => "Method Not Allowed - The request method is not supported",
        408 => "Request Timeout - The server timed out waiting for the request",
        429 => "Too Many Requests - Rate limit exceeded",
        500 => "Internal Server Error - The server encountered an error",
        502 => "Bad Gateway - The server received an invalid response",
        503 => "Service Unavailable - The server is temporarily unavailable",
        504 => "Gateway Timeout - The server did not respond in time",
        other => StatusCode::from_u16(other)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or(""),
    };
    message.to_string()
}
