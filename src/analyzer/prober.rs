//! Link accessibility prober
//!
//! Every extracted link gets one lightweight HEAD request. Checks run as
//! independent tokio tasks gated by a semaphore, so no more than
//! `max_concurrent` are in flight at once; each task reports its own verdict and
//! the prober sums them once all tasks have finished.

use crate::config::{ProberConfig, MAX_CONCURRENT_PROBES};
use async_trait::async_trait;
use reqwest::{redirect::Policy, Client};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// Decides whether a single link is reachable
#[async_trait]
pub trait LinkChecker: Send + Sync {
    /// Returns true if the link answered without an error
    async fn is_accessible(&self, url: &str) -> bool;
}

/// Checks links with HEAD requests
///
/// A link is inaccessible when the request fails locally (timeout, DNS,
/// malformed URL, too many redirects) or the server answers with status >= 400.
#[derive(Debug, Clone)]
pub struct HttpLinkChecker {
    client: Client,
}

impl HttpLinkChecker {
    pub fn new(config: &ProberConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout())
            .redirect(Policy::limited(config.max_redirects))
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl LinkChecker for HttpLinkChecker {
    async fn is_accessible(&self, url: &str) -> bool {
        match self.client.head(url).send().await {
            Ok(response) => {
                let status = response.status();
                if status.as_u16() >= 400 {
                    tracing::debug!("Link {} answered with {}", url, status);
                    false
                } else {
                    true
                }
            }
            Err(e) => {
                tracing::debug!("Link {} failed: {}", url, e);
                false
            }
        }
    }
}

/// Runs link checks with bounded concurrency
pub struct Prober<C = HttpLinkChecker> {
    checker: Arc<C>,
    max_concurrent: usize,
}

impl Prober<HttpLinkChecker> {
    /// Creates a prober that checks links over HTTP
    pub fn new(config: &ProberConfig) -> Result<Self, reqwest::Error> {
        Ok(Self::with_checker(
            HttpLinkChecker::new(config)?,
            config.max_concurrent,
        ))
    }
}

impl<C: LinkChecker + 'static> Prober<C> {
    /// Creates a prober around any checker
    ///
    /// `max_concurrent` is clamped to `1..=MAX_CONCURRENT_PROBES`.
    pub fn with_checker(checker: C, max_concurrent: usize) -> Self {
        Self {
            checker: Arc::new(checker),
            max_concurrent: max_concurrent.clamp(1, MAX_CONCURRENT_PROBES),
        }
    }

    /// Maximum number of checks in flight at once
    pub fn max_concurrent(&self) -> usize {
        self.max_concurrent
    }

    /// Checks every URL and returns how many are inaccessible
    ///
    /// Waits for all checks to finish. One failing or panicking check never
    /// affects the others; a check that cannot complete counts as inaccessible.
    pub async fn probe(&self, urls: &[String]) -> usize {
        if urls.is_empty() {
            return 0;
        }

        tracing::debug!(
            "Probing {} links ({} at a time)",
            urls.len(),
            self.max_concurrent
        );

        let semaphore = Arc::new(Semaphore::new(self.max_concurrent));
        let mut tasks = JoinSet::new();

        for url in urls {
            let semaphore = Arc::clone(&semaphore);
            let checker = Arc::clone(&self.checker);
            let url = url.clone();

            tasks.spawn(async move {
                // The semaphore is never closed
                let Ok(_permit) = semaphore.acquire_owned().await else {
                    return false;
                };
                checker.is_accessible(&url).await
            });
        }

        let mut inaccessible = 0;
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(true) => {}
                Ok(false) => inaccessible += 1,
                Err(e) => {
                    tracing::warn!("Link check task failed: {}", e);
                    inaccessible += 1;
                }
            }
        }

        tracing::debug!("{} of {} links inaccessible", inaccessible, urls.len());

        inaccessible
    }
}
