use std::time::Duration;

use serde_json::{Map, Value};
use thiserror::Error;

use crate::types::Field;

/// Why an enrichment attempt produced nothing.
///
/// Never surfaces to callers of the pipeline; it is logged and dropped.
#[derive(Debug, Error)]
pub enum EnrichmentError {
    #[error("failed to build enrichment client: {0}")]
    ClientBuild(#[source] reqwest::Error),
    #[error("enrichment request failed: {0}")]
    Request(#[source] reqwest::Error),
    #[error("enrichment backend returned status {status}: {body}")]
    Api { status: u16, body: String },
    #[error("enrichment backend did not answer within {0:?}")]
    Timeout(Duration),
    #[error("enrichment backend returned an empty reply")]
    EmptyReply,
    #[error("malformed enrichment reply: {0}")]
    Malformed(String),
}

/// Fields the backend may fill. Anything it could not determine is `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnrichmentResult {
    pub description: Option<String>,
    pub author: Option<String>,
    pub publisher: Option<String>,
    pub lang: Option<String>,
}

impl EnrichmentResult {
    /// Parse a raw backend reply.
    ///
    /// The reply must be a JSON object, optionally wrapped in a markdown code
    /// fence. Non-string values, blanks and the literal text `"null"` all
    /// come out as `None`.
    ///
    /// # Examples
    /// ```
    /// use metascrape::tools::enrich::EnrichmentResult;
    ///
    /// let reply = r#"{"description": "A summary.", "author": "null", "lang": "en"}"#;
    /// let result = EnrichmentResult::from_reply(reply).unwrap();
    /// assert_eq!(result.description.as_deref(), Some("A summary."));
    /// assert_eq!(result.author, None);
    /// assert_eq!(result.publisher, None);
    /// ```
    pub fn from_reply(reply: &str) -> Result<Self, EnrichmentError> {
        let body = strip_code_fence(reply);
        if body.is_empty() {
            return Err(EnrichmentError::EmptyReply);
        }

        let value: Value =
            serde_json::from_str(body).map_err(|e| EnrichmentError::Malformed(e.to_string()))?;
        let Value::Object(obj) = value else {
            return Err(EnrichmentError::Malformed(
                "reply is not a JSON object".to_string(),
            ));
        };

        Ok(Self {
            description: string_field(&obj, "description"),
            author: string_field(&obj, "author"),
            publisher: string_field(&obj, "publisher"),
            lang: string_field(&obj, "lang"),
        })
    }

    /// Value for an enrichable field; other fields are always `None`.
    pub fn get(&self, field: Field) -> Option<&str> {
        let slot = match field {
            Field::Description => &self.description,
            Field::Author => &self.author,
            Field::Publisher => &self.publisher,
            Field::Lang => &self.lang,
            _ => return None,
        };
        slot.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.description.is_none()
            && self.author.is_none()
            && self.publisher.is_none()
            && self.lang.is_none()
    }
}

fn strip_code_fence(reply: &str) -> &str {
    let trimmed = reply.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

fn string_field(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case("null"))
        .map(str::to_string)
}
