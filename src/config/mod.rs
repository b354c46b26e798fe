//! Configuration module for Web-Lens
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! A configuration file is optional: [`Config::default`] carries the limits used
//! when none is given.
//!
//! # Example
//!
//! ```no_run
//! use web_lens::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("web-lens.toml")).unwrap();
//! println!("Fetch timeout: {}s", config.fetcher.timeout_secs);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, FetcherConfig, ProberConfig, DEFAULT_FETCH_USER_AGENT, DEFAULT_PROBE_USER_AGENT,
    MAX_CONCURRENT_PROBES, MAX_REDIRECTS,
};

// Re-export parser functions
pub use parser::{load_config, parse_config};
