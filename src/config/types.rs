use serde::Deserialize;
use std::time::Duration;

/// Default user agent for document fetches
pub const DEFAULT_FETCH_USER_AGENT: &str = "Mozilla/5.0 (compatible; WebAnalyzer/1.0)";

/// Default user agent for link probes
pub const DEFAULT_PROBE_USER_AGENT: &str = "WebAnalyzer/1.0";

/// Upper bound on redirect hops for both fetches and probes
pub const MAX_REDIRECTS: usize = 10;

/// Upper bound on simultaneous link probes
pub const MAX_CONCURRENT_PROBES: usize = 10;

/// Main configuration structure for Web-Lens
///
/// Every section and key is optional; missing values fall back to the defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub fetcher: FetcherConfig,
    #[serde(default)]
    pub prober: ProberConfig,
}

/// Document fetch configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetcherConfig {
    /// Overall request timeout (seconds)
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// Maximum number of redirect hops to follow
    #[serde(rename = "max-redirects")]
    pub max_redirects: usize,

    /// Bytes of body to keep; anything beyond is discarded
    #[serde(rename = "max-body-bytes")]
    pub max_body_bytes: usize,

    /// User-Agent header sent with the request
    #[serde(rename = "user-agent")]
    pub user_agent: String,
}

impl FetcherConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            max_redirects: MAX_REDIRECTS,
            max_body_bytes: 10 * 1024 * 1024,
            user_agent: DEFAULT_FETCH_USER_AGENT.to_string(),
        }
    }
}

/// Link accessibility probe configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProberConfig {
    /// Per-link timeout (seconds)
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// Maximum number of redirect hops per link
    #[serde(rename = "max-redirects")]
    pub max_redirects: usize,

    /// Maximum number of links checked at the same time
    #[serde(rename = "max-concurrent")]
    pub max_concurrent: usize,

    /// User-Agent header sent with each probe
    #[serde(rename = "user-agent")]
    pub user_agent: String,
}

impl ProberConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ProberConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 5,
            max_redirects: MAX_REDIRECTS,
            max_concurrent: MAX_CONCURRENT_PROBES,
            user_agent: DEFAULT_PROBE_USER_AGENT.to_string(),
        }
    }
}
