use std::time::Instant;

use async_trait::async_trait;
use scraper::Html;
use tracing::{debug, info, warn};
use url::Url;

use crate::config::Config;
use crate::error::*;
use crate::tools::digest::{summarize, TextDigest};
use crate::tools::enrich::{self, gate, EnrichmentError, GateDecision};
use crate::tools::extract::aggregate;
use crate::tools::fetch::{FetchError, FetchRequest};
use crate::tools::scrape::Page;
use crate::types::{MetadataRecord, Overrides};

/// Retrieves raw HTML for one request.
#[async_trait]
pub trait Fetcher: Send + Sync {
    fn name(&self) -> &'static str;
    async fn fetch(&self, request: &FetchRequest) -> std::result::Result<String, FetchError>;
}

/// Turns a prompt into a raw text reply.
#[async_trait]
pub trait EnrichmentBackend: Send + Sync {
    fn name(&self) -> &'static str;
    async fn complete(&self, prompt: &str) -> std::result::Result<String, EnrichmentError>;
}

/// One pass of the pipeline: fetch, extract, maybe enrich, merge.
///
/// Holds only shared read-only collaborators; every request's data lives on
/// the stack of [`Engine::extract`].
pub struct Engine<'a> {
    pub config: &'a Config,
    pub fetcher: &'a dyn Fetcher,
    pub backend: Option<&'a dyn EnrichmentBackend>,
}

impl<'a> Engine<'a> {
    pub fn new(
        config: &'a Config,
        fetcher: &'a dyn Fetcher,
        backend: Option<&'a dyn EnrichmentBackend>,
    ) -> Self {
        Self {
            config,
            fetcher,
            backend,
        }
    }

    /// Enrichment needs both a credential and a backend to send it with.
    pub fn enrichment_configured(&self) -> bool {
        self.backend.is_some() && self.config.enrichment_credential().is_some()
    }

    pub async fn extract(&self, url: &str, overrides: &Overrides) -> Result<MetadataRecord> {
        let start = Instant::now();
        let requested = url.trim();
        let target = parse_target(requested)?;

        let request = FetchRequest {
            url: target.clone(),
            user_agent: self.config.user_agent_for(overrides).to_string(),
            timeout: self.config.request_timeout(overrides),
            max_redirects: self.config.max_redirects,
        };

        debug!(fetcher = self.fetcher.name(), url = %target, timeout_ms = request.timeout.as_millis() as u64, "fetching");
        let html = match self.fetcher.fetch(&request).await {
            Ok(html) => html,
            Err(e) => {
                warn!(url = %target, error = %e, elapsed_ms = start.elapsed().as_millis() as u64, "fetch failed");
                return Err(e.into());
            }
        };
        info!(url = %target, bytes = html.len(), elapsed_ms = start.elapsed().as_millis() as u64, "fetched");

        let configured = self.enrichment_configured();
        let fallback_url = requested.to_string();
        let (record, decision, digest) = tokio::task::spawn_blocking(move || {
            analyze(&html, &target, fallback_url, configured)
        })
        .await
        .map_err(|e| ExtractionError::InternalError(format!("extraction task failed: {e}")))?;

        let record = match (digest, self.backend) {
            (Some(digest), Some(backend)) => {
                let timeout = self.config.enrichment_timeout();
                enrich::enrich(backend, requested, &digest, record, timeout).await
            }
            _ => {
                debug!(url = requested, reason = decision.reason(), "enrichment skipped");
                record
            }
        };

        info!(url = requested, elapsed_ms = start.elapsed().as_millis() as u64, "metadata extracted");
        Ok(record)
    }
}

/// Validate the requested URL before any network activity.
pub fn parse_target(requested: &str) -> Result<Url> {
    let invalid = || ExtractionError::InvalidUrl(requested.to_string());
    let url = Url::parse(requested).map_err(|_| invalid())?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(invalid());
    }
    Ok(url)
}

/// Parse, aggregate and gate in one synchronous pass.
///
/// The digest is only built when the gate lets enrichment proceed.
fn analyze(
    html: &str,
    url: &Url,
    fallback_url: String,
    configured: bool,
) -> (MetadataRecord, GateDecision, Option<TextDigest>) {
    let document = Html::parse_document(html);
    let mut record = aggregate(&Page::new(&document, url));
    if record.url.is_none() {
        record.url = Some(fallback_url);
    }

    let decision = gate(configured, &record);
    let digest = decision.proceeds().then(|| summarize(&document));
    (record, decision, digest)
}
