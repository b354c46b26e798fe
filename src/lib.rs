//! Web-Lens: a single-page web analyzer
//!
//! This crate fetches one web page and reports on its structure: the HTML version
//! declared by its DOCTYPE, its title and heading census, how many of its links are
//! internal, external or inaccessible, and whether it appears to contain a login form.

pub mod analyzer;
pub mod config;
pub mod output;
pub mod url;

use thiserror::Error;

/// Main error type for Web-Lens operations
#[derive(Debug, Error)]
pub enum LensError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),
}

impl LensError {
    /// The status code returned by the remote server, if the failure came from it
    pub fn remote_status(&self) -> Option<u16> {
        match self {
            Self::Fetch(e) if e.is_remote() => Some(e.status_code()),
            _ => None,
        }
    }
}

/// Errors produced while fetching a document
///
/// Every variant except [`FetchError::Status`] is a local failure and reports a
/// status code of 0.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("URL cannot be empty")]
    EmptyUrl,

    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("request timed out")]
    Timeout,

    #[error("too many redirects (max {max})")]
    TooManyRedirects { max: usize },

    #[error("failed to connect: {0}")]
    Connect(String),

    #[error("failed to fetch URL: {0}")]
    Network(String),

    #[error("failed to read response: {0}")]
    Body(String),

    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },
}

impl FetchError {
    /// Remote status code, or 0 when no response was received
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Status { status, .. } => *status,
            _ => 0,
        }
    }

    /// Returns true if the remote server answered with an error status
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Status { .. })
    }

    /// Returns true if the request was rejected before any network activity
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::EmptyUrl | Self::InvalidUrl(_))
    }

    /// Human-readable message without the status prefix
    pub fn message(&self) -> String {
        match self {
            Self::Status { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

/// Errors produced when markup cannot be turned into a traversable document
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("document is empty")]
    Empty,

    #[error("document contains binary data")]
    Binary,
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for Web-Lens operations
pub type Result<T> = std::result::Result<T, LensError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use analyzer::{
    analyze_url, AnalysisResult, FetchOutcome, Fetcher, HtmlVersion, PageAnalyzer, Prober,
};
pub use config::Config;
pub use crate::url::{extract_host, normalize_input, resolve};
