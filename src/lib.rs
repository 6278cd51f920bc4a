#![doc = include_str!("../README.md")]

pub mod api;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
mod runtime;
mod selectors;
pub mod tools;
pub mod types;

pub use api::{extract_metadata, extract_metadata_blocking, Components};
pub use config::Config;
pub use engine::{EnrichmentBackend, Engine, Fetcher};
pub use error::{ExtractionError, Result};
pub use types::*;
