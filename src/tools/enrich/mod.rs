//! Enrichment Gate, Requester and Merge Policy.
//!
//! Enrichment asks a language model to fill the fields extraction missed.
//! It runs at most once per request, only when a backend is configured and
//! the page has no description, and any failure leaves the record as it was.

mod backend;
mod merge;
mod prompt;
mod types;

pub use backend::OpenAiBackend;
pub use merge::{merge, ENRICHABLE_FIELDS};
pub use prompt::build_prompt;
pub use types::*;

use std::time::Duration;

use tracing::{debug, info, warn};

use crate::engine::EnrichmentBackend;
use crate::tools::digest::TextDigest;
use crate::types::{Field, MetadataRecord};

/// Outcome of the enrichment gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Proceed,
    /// No backend credential (absent or placeholder).
    SkipNotConfigured,
    /// Extraction already found a description.
    SkipHasDescription,
}

impl GateDecision {
    pub fn proceeds(self) -> bool {
        self == GateDecision::Proceed
    }

    pub fn reason(self) -> &'static str {
        match self {
            GateDecision::Proceed => "description missing",
            GateDecision::SkipNotConfigured => "no enrichment backend configured",
            GateDecision::SkipHasDescription => "description already extracted",
        }
    }
}

/// Decide whether enrichment should run for `record`.
pub fn gate(configured: bool, record: &MetadataRecord) -> GateDecision {
    if !configured {
        GateDecision::SkipNotConfigured
    } else if record.has(Field::Description) {
        GateDecision::SkipHasDescription
    } else {
        GateDecision::Proceed
    }
}

/// Ask `backend` once, bounded by `timeout`, and parse its reply.
pub async fn request_enrichment(
    backend: &dyn EnrichmentBackend,
    url: &str,
    digest: &TextDigest,
    record: &MetadataRecord,
    timeout: Duration,
) -> Result<EnrichmentResult, EnrichmentError> {
    let prompt = build_prompt(url, digest, record);
    debug!(backend = backend.name(), prompt_chars = prompt.chars().count(), "requesting enrichment");
    let reply = tokio::time::timeout(timeout, backend.complete(&prompt))
        .await
        .map_err(|_| EnrichmentError::Timeout(timeout))??;
    debug!(backend = backend.name(), reply = %reply, "enrichment reply");
    EnrichmentResult::from_reply(&reply)
}

/// Request enrichment and merge it into `record`.
///
/// Failures, timeouts included, are logged and absorbed: the record comes
/// back unchanged.
pub async fn enrich(
    backend: &dyn EnrichmentBackend,
    url: &str,
    digest: &TextDigest,
    record: MetadataRecord,
    timeout: Duration,
) -> MetadataRecord {
    match request_enrichment(backend, url, digest, &record, timeout).await {
        Ok(result) => {
            let merged = merge(record, &result);
            info!(
                backend = backend.name(),
                url,
                empty = result.is_empty(),
                "enrichment applied"
            );
            merged
        }
        Err(e) => {
            warn!(backend = backend.name(), url, error = %e, "enrichment failed; keeping extracted metadata");
            record
        }
    }
}
