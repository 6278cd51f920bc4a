use std::time::Duration;

use thiserror::Error;
use url::Url;

use crate::config::{DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT_MS, DEFAULT_USER_AGENT};

/// One outbound page request.
///
/// Everything that varies per call lives here, so a fetcher holds no
/// request-scoped state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub url: Url,
    pub user_agent: String,
    /// Covers connect, redirects and reading the body.
    pub timeout: Duration,
    pub max_redirects: usize,
}

impl FetchRequest {
    pub fn new(url: Url) -> Self {
        Self {
            url,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            max_redirects: DEFAULT_MAX_REDIRECTS,
        }
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_redirects(mut self, max_redirects: usize) -> Self {
        self.max_redirects = max_redirects;
        self
    }
}

/// Why a page could not be fetched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("request timed out")]
    Timeout,
    /// The host name did not resolve.
    #[error("host could not be resolved")]
    NotFound,
    /// Final response (after redirects) was not 2xx.
    #[error("upstream returned status {0}")]
    HttpStatus(u16),
    #[error("fetch failed: {0}")]
    Other(String),
}
