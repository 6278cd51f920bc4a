use tracing::warn;

use crate::config::Config;
use crate::engine::*;
use crate::error::*;
use crate::tools::enrich::OpenAiBackend;
use crate::tools::fetch::ReqwestFetcher;
use crate::types::{MetadataRecord, Overrides};

/* ------------ public facade components ------------ */

/// Configuration plus the collaborators the pipeline calls out to.
///
/// Build once at startup and share across requests.
pub struct Components {
    pub config: Config,
    pub fetcher: Box<dyn Fetcher>,
    pub backend: Option<Box<dyn EnrichmentBackend>>,
}

impl Default for Components {
    fn default() -> Self {
        Self::from_config(Config::default())
    }
}

impl Components {
    /// Reqwest fetcher, plus the OpenAI backend when a credential is configured.
    pub fn from_config(config: Config) -> Self {
        let backend = match OpenAiBackend::from_config(&config) {
            Ok(backend) => backend.map(|b| Box::new(b) as Box<dyn EnrichmentBackend>),
            Err(e) => {
                warn!(error = %e, "enrichment backend unavailable; continuing without it");
                None
            }
        };
        Self {
            config,
            fetcher: Box::new(ReqwestFetcher::new()),
            backend,
        }
    }

    pub fn with_fetcher(mut self, fetcher: impl Fetcher + 'static) -> Self {
        self.fetcher = Box::new(fetcher);
        self
    }

    pub fn with_backend(mut self, backend: impl EnrichmentBackend + 'static) -> Self {
        self.backend = Some(Box::new(backend));
        self
    }

    pub fn without_backend(mut self) -> Self {
        self.backend = None;
        self
    }

    pub fn engine(&self) -> Engine<'_> {
        Engine::new(&self.config, &*self.fetcher, self.backend.as_deref())
    }
}

/* ------------ extraction entrypoints ------------ */

/// Extract metadata for `url`.
///
/// Fetch failures come back as an [`ExtractionError`]; extraction and
/// enrichment problems never do.
///
/// # Examples
/// ```no_run
/// use metascrape::api::{extract_metadata, Components};
/// use metascrape::{Config, Overrides};
///
/// # async fn example() -> metascrape::Result<()> {
/// let components = Components::from_config(Config::from_env());
/// let record = extract_metadata(&components, "https://example.com", &Overrides::new()).await?;
/// println!("{:?}", record.title);
/// # Ok(())
/// # }
/// ```
pub async fn extract_metadata(
    components: &Components,
    url: &str,
    overrides: &Overrides,
) -> Result<MetadataRecord> {
    components.engine().extract(url, overrides).await
}

/// Blocking variant of [`extract_metadata`] on the shared runtime.
///
/// Must not be called from inside an async context.
pub fn extract_metadata_blocking(
    components: &Components,
    url: &str,
    overrides: &Overrides,
) -> Result<MetadataRecord> {
    crate::runtime::block_on(extract_metadata(components, url, overrides))
}
