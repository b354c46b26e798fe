use crate::config::types::{
    Config, FetcherConfig, ProberConfig, MAX_CONCURRENT_PROBES, MAX_REDIRECTS,
};
use crate::ConfigError;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_fetcher_config(&config.fetcher)?;
    validate_prober_config(&config.prober)?;
    Ok(())
}

/// Validates fetcher configuration
fn validate_fetcher_config(config: &FetcherConfig) -> Result<(), ConfigError> {
    if config.timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "fetcher timeout-secs must be >= 1, got {}",
            config.timeout_secs
        )));
    }

    validate_redirects("fetcher", config.max_redirects)?;

    if config.max_body_bytes < 1 {
        return Err(ConfigError::Validation(
            "fetcher max-body-bytes must be >= 1".to_string(),
        ));
    }

    validate_user_agent("fetcher", &config.user_agent)?;

    Ok(())
}

/// Validates prober configuration
fn validate_prober_config(config: &ProberConfig) -> Result<(), ConfigError> {
    if config.timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "prober timeout-secs must be >= 1, got {}",
            config.timeout_secs
        )));
    }

    validate_redirects("prober", config.max_redirects)?;

    if config.max_concurrent < 1 || config.max_concurrent > MAX_CONCURRENT_PROBES {
        return Err(ConfigError::Validation(format!(
            "prober max-concurrent must be between 1 and {}, got {}",
            MAX_CONCURRENT_PROBES, config.max_concurrent
        )));
    }

    validate_user_agent("prober", &config.user_agent)?;

    Ok(())
}

fn validate_redirects(section: &str, max_redirects: usize) -> Result<(), ConfigError> {
    if max_redirects > MAX_REDIRECTS {
        return Err(ConfigError::Validation(format!(
            "{} max-redirects must be <= {}, got {}",
            section, MAX_REDIRECTS, max_redirects
        )));
    }
    Ok(())
}

/// A user agent must be non-empty printable ASCII to be usable as a header value
fn validate_user_agent(section: &str, user_agent: &str) -> Result<(), ConfigError> {
    if user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(format!(
            "{} user-agent cannot be empty",
            section
        )));
    }

    if !user_agent.chars().all(|c| c.is_ascii() && !c.is_ascii_control()) {
        return Err(ConfigError::Validation(format!(
            "{} user-agent must be printable ASCII, got '{}'",
            section, user_agent
        )));
    }

    Ok(())
}
