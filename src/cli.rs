use std::io::Write;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use tracing::warn;

use crate::api::{self, Components};
use crate::config::Config;
use crate::types::{ApiResponse, Overrides};

#[derive(Parser, Debug)]
#[command(name = "metascrape", version, about = "Extract page metadata as JSON")]
pub struct Cli {
    /// Page to extract metadata from
    pub url: String,

    /// User-Agent for the page fetch (defaults to USER_AGENT or the built-in agent)
    #[arg(long)]
    pub user_agent: Option<String>,

    /// Fetch timeout in milliseconds; 0 means the configured default
    #[arg(long, value_name = "MS")]
    pub timeout: Option<u64>,

    /// Never call the enrichment backend, even if a key is configured
    #[arg(long)]
    pub no_enrich: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            user_agent: self.user_agent.clone(),
            timeout_ms: self.timeout,
        }
    }
}

/// Run one extraction and print the JSON envelope to stdout.
///
/// Returns whether the extraction succeeded; `Err` only for output failures.
pub async fn run(cli: Cli, config: Config) -> anyhow::Result<bool> {
    let mut components = Components::from_config(config);
    if cli.no_enrich {
        components = components.without_backend();
    }

    let result = api::extract_metadata(&components, &cli.url, &cli.overrides()).await;
    let ok = result.is_ok();
    match result {
        Ok(record) => print_json(&ApiResponse::ok(record), cli.pretty)?,
        Err(e) => {
            warn!(url = %cli.url, status = e.status_code(), error = %e, "extraction failed");
            print_json(&ApiResponse::<()>::err(e.message()), cli.pretty)?
        }
    }
    Ok(ok)
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .context("failed to serialize response")?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}").context("failed to write response")?;
    Ok(())
}
