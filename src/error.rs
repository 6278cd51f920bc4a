use thiserror::Error;

use crate::tools::fetch::FetchError;

pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Request-level failure of the metadata pipeline.
///
/// Only the fetch stage (and URL validation before it) can produce one of
/// these. Extraction and enrichment problems are absorbed where they happen.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractionError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("request timed out")]
    Timeout,
    #[error("domain not found")]
    DomainNotFound,
    #[error("upstream responded with HTTP {0}")]
    UpstreamHttpError(u16),
    #[error("internal error: {0}")]
    InternalError(String),
}

impl ExtractionError {
    /// HTTP status a caller would typically answer with.
    pub fn status_code(&self) -> u16 {
        match self {
            ExtractionError::InvalidUrl(_) => 400,
            ExtractionError::Timeout => 408,
            ExtractionError::DomainNotFound => 404,
            ExtractionError::UpstreamHttpError(code) => *code,
            ExtractionError::InternalError(_) => 500,
        }
    }

    /// Short caller-facing message (no internal details).
    pub fn message(&self) -> String {
        match self {
            ExtractionError::InvalidUrl(_) => "Invalid URL format".to_string(),
            ExtractionError::Timeout => "Request timeout".to_string(),
            ExtractionError::DomainNotFound => "Domain not found".to_string(),
            ExtractionError::UpstreamHttpError(code) => format!("HTTP {code} error"),
            ExtractionError::InternalError(_) => "Internal server error".to_string(),
        }
    }
}

/* Fetch failures map one-to-one onto the request taxonomy */
impl From<FetchError> for ExtractionError {
    fn from(e: FetchError) -> Self {
        match e {
            FetchError::Timeout => ExtractionError::Timeout,
            FetchError::NotFound => ExtractionError::DomainNotFound,
            FetchError::HttpStatus(code) => ExtractionError::UpstreamHttpError(code),
            FetchError::Other(msg) => ExtractionError::InternalError(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_error_kind() {
        assert_eq!(ExtractionError::InvalidUrl("x".into()).status_code(), 400);
        assert_eq!(ExtractionError::Timeout.status_code(), 408);
        assert_eq!(ExtractionError::DomainNotFound.status_code(), 404);
        assert_eq!(ExtractionError::UpstreamHttpError(503).status_code(), 503);
        assert_eq!(ExtractionError::InternalError("boom".into()).status_code(), 500);
    }

    #[test]
    fn upstream_message_keeps_code() {
        assert_eq!(
            ExtractionError::UpstreamHttpError(403).message(),
            "HTTP 403 error"
        );
        assert_eq!(
            ExtractionError::InternalError("secret detail".into()).message(),
            "Internal server error"
        );
    }

    #[test]
    fn fetch_errors_convert() {
        assert_eq!(ExtractionError::from(FetchError::Timeout), ExtractionError::Timeout);
        assert_eq!(
            ExtractionError::from(FetchError::NotFound),
            ExtractionError::DomainNotFound
        );
        assert_eq!(
            ExtractionError::from(FetchError::HttpStatus(404)),
            ExtractionError::UpstreamHttpError(404)
        );
        assert!(matches!(
            ExtractionError::from(FetchError::Other("reset".into())),
            ExtractionError::InternalError(_)
        ));
    }
}
