//! HTML Fetcher
//!
//! Retrieves raw HTML for one URL with a bounded timeout, a bounded redirect
//! chain and a configurable User-Agent. Failures are classified into
//! [`FetchError`] so callers can map them onto their own taxonomy.

mod client;
mod headers;
mod utils;

pub mod types;

pub use types::*;

use std::time::Instant;

use async_trait::async_trait;
use tracing::debug;

use crate::engine::Fetcher;
use utils::*;

/// Fetch HTML for `request` with the shared reqwest clients.
///
/// # Examples
/// ```no_run
/// use metascrape::tools::fetch::{fetch_html, FetchRequest};
/// use url::Url;
///
/// # async fn example() -> Result<(), metascrape::tools::fetch::FetchError> {
/// let request = FetchRequest::new(Url::parse("https://example.com").unwrap());
/// let html = fetch_html(&request).await?;
/// # Ok(())
/// # }
/// ```
pub async fn fetch_html(request: &FetchRequest) -> Result<String, FetchError> {
    let client = client::client_for(request.max_redirects)?;
    let start = Instant::now();

    let response = client
        .get(request.url.clone())
        .headers(headers::headers_for_request(&request.user_agent))
        .timeout(request.timeout)
        .send()
        .await
        .map_err(|e| classify_error(&e))?;

    let status = response.status();
    debug!(
        url = %request.url,
        final_url = %response.url(),
        status = status.as_u16(),
        "response received"
    );
    classify_status(status)?;

    let body = response.text().await.map_err(|e| classify_error(&e))?;
    debug!(
        url = %request.url,
        bytes = body.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "body read"
    );
    Ok(body)
}

/// [`Fetcher`] backed by reqwest.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReqwestFetcher;

impl ReqwestFetcher {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Fetcher for ReqwestFetcher {
    fn name(&self) -> &'static str {
        "reqwest"
    }

    async fn fetch(&self, request: &FetchRequest) -> Result<String, FetchError> {
        fetch_html(request).await
    }
}

#[cfg(test)]
mod tests;
