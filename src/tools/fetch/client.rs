use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;
use once_cell::sync::Lazy;
use reqwest::{redirect, Client};

use super::FetchError;

const POOL_IDLE_TIMEOUT_SEC: u64 = 90;
const POOL_MAX_IDLE_PER_HOST: usize = 32;

// reqwest fixes the redirect policy at build time, so clients are keyed by it.
static CLIENT_CACHE: Lazy<Arc<DashMap<usize, Client>>> = Lazy::new(|| Arc::new(DashMap::new()));

/// Build a client following at most `max_redirects` redirects.
pub(crate) fn build_client(max_redirects: usize) -> Result<Client, FetchError> {
    let policy = if max_redirects == 0 {
        redirect::Policy::none()
    } else {
        redirect::Policy::limited(max_redirects)
    };

    Client::builder()
        .redirect(policy)
        .gzip(true)
        .brotli(true)
        .deflate(true)
        .pool_idle_timeout(Duration::from_secs(POOL_IDLE_TIMEOUT_SEC))
        .pool_max_idle_per_host(POOL_MAX_IDLE_PER_HOST)
        .build()
        .map_err(|e| FetchError::Other(format!("failed to build client: {e}")))
}

/// Cached client for a redirect limit; built on first use.
pub(crate) fn client_for(max_redirects: usize) -> Result<Client, FetchError> {
    if let Some(client) = CLIENT_CACHE.get(&max_redirects) {
        return Ok(client.clone());
    }
    let client = build_client(max_redirects)?;
    CLIENT_CACHE.insert(max_redirects, client.clone());
    Ok(client)
}
