//! Process-wide configuration.
//!
//! Built once at startup (from defaults or the environment) and handed to the
//! pipeline by reference. Nothing in the core reads the environment directly.

use std::fmt;
use std::time::Duration;

use crate::types::Overrides;

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (compatible; MetascraperBot/1.0)";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_MAX_REDIRECTS: usize = 5;
pub const DEFAULT_ENRICHMENT_TIMEOUT_MS: u64 = 30_000;
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-5-nano";

/// Value shipped in `.env.example`; treated the same as no key at all.
pub const PLACEHOLDER_API_KEY: &str = "your_openai_api_key_here";

#[derive(Clone)]
pub struct Config {
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub openai_model: String,
    pub request_timeout_ms: u64,
    pub max_redirects: usize,
    pub user_agent: String,
    pub enrichment_timeout_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            openai_base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            openai_model: DEFAULT_OPENAI_MODEL.to_string(),
            request_timeout_ms: DEFAULT_TIMEOUT_MS,
            max_redirects: DEFAULT_MAX_REDIRECTS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            enrichment_timeout_ms: DEFAULT_ENRICHMENT_TIMEOUT_MS,
        }
    }
}

// Keep the credential out of logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field(
                "openai_api_key",
                &self.enrichment_credential().map(|_| "<redacted>"),
            )
            .field("openai_base_url", &self.openai_base_url)
            .field("openai_model", &self.openai_model)
            .field("request_timeout_ms", &self.request_timeout_ms)
            .field("max_redirects", &self.max_redirects)
            .field("user_agent", &self.user_agent)
            .field("enrichment_timeout_ms", &self.enrichment_timeout_ms)
            .finish()
    }
}

impl Config {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Missing or unparseable values fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let text = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Self {
            openai_api_key: text("OPENAI_API_KEY"),
            openai_base_url: text("OPENAI_BASE_URL").unwrap_or(defaults.openai_base_url),
            openai_model: text("OPENAI_MODEL").unwrap_or(defaults.openai_model),
            request_timeout_ms: text("REQUEST_TIMEOUT_MS")
                .and_then(|v| v.parse::<u64>().ok())
                .filter(|ms| *ms > 0)
                .unwrap_or(defaults.request_timeout_ms),
            max_redirects: text("MAX_REDIRECTS")
                .and_then(|v| v.parse::<usize>().ok())
                .filter(|n| *n > 0)
                .unwrap_or(defaults.max_redirects),
            user_agent: text("USER_AGENT").unwrap_or(defaults.user_agent),
            enrichment_timeout_ms: text("ENRICHMENT_TIMEOUT_MS")
                .and_then(|v| v.parse::<u64>().ok())
                .filter(|ms| *ms > 0)
                .unwrap_or(defaults.enrichment_timeout_ms),
        }
    }

    pub fn with_openai_api_key(mut self, key: impl Into<String>) -> Self {
        self.openai_api_key = Some(key.into());
        self
    }

    pub fn with_openai_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.openai_base_url = base_url.into();
        self
    }

    pub fn with_request_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.request_timeout_ms = timeout_ms;
        self
    }

    pub fn with_max_redirects(mut self, max_redirects: usize) -> Self {
        self.max_redirects = max_redirects;
        self
    }

    pub fn with_enrichment_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.enrichment_timeout_ms = timeout_ms;
        self
    }

    /// The enrichment credential, if one is actually configured.
    pub fn enrichment_credential(&self) -> Option<&str> {
        self.openai_api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty() && *key != PLACEHOLDER_API_KEY)
    }

    /// Fetch deadline for one request; a zero override means "use default".
    pub fn request_timeout(&self, overrides: &Overrides) -> Duration {
        let ms = overrides
            .timeout_ms
            .filter(|ms| *ms > 0)
            .unwrap_or(self.request_timeout_ms);
        Duration::from_millis(ms)
    }

    /// User-Agent for one request; a blank override means "use default".
    pub fn user_agent_for<'a>(&'a self, overrides: &'a Overrides) -> &'a str {
        overrides
            .user_agent
            .as_deref()
            .map(str::trim)
            .filter(|ua| !ua.is_empty())
            .unwrap_or(&self.user_agent)
    }

    pub fn enrichment_timeout(&self) -> Duration {
        Duration::from_millis(self.enrichment_timeout_ms)
    }
}
