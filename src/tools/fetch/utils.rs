use std::error::Error as StdError;

use super::FetchError;

// Resolver messages seen across platforms (getaddrinfo, hickory, Windows).
const DNS_FAILURE_PATTERNS: [&str; 6] = [
    "dns error",
    "failed to lookup address",
    "name or service not known",
    "nodename nor servname provided",
    "no such host",
    "temporary failure in name resolution",
];

/// Classify a transport error; status errors are handled by the caller.
pub(super) fn classify_error(err: &reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::Timeout;
    }
    if is_dns_failure(&error_chain(err)) {
        return FetchError::NotFound;
    }
    if err.is_redirect() {
        return FetchError::Other(format!("too many redirects: {err}"));
    }
    FetchError::Other(error_chain(err))
}

pub(super) fn classify_status(status: reqwest::StatusCode) -> Result<(), FetchError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(FetchError::HttpStatus(status.as_u16()))
    }
}

/// Every message in the source chain joined with ": ".
pub(super) fn error_chain(err: &(dyn StdError + 'static)) -> String {
    let mut parts = vec![err.to_string()];
    let mut source = err.source();
    while let Some(cause) = source {
        parts.push(cause.to_string());
        source = cause.source();
    }
    parts.join(": ")
}

pub(super) fn is_dns_failure(message: &str) -> bool {
    let lower = message.to_ascii_lowercase();
    DNS_FAILURE_PATTERNS
        .iter()
        .any(|pattern| lower.contains(pattern))
}
