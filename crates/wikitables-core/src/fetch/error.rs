//! Fetch failure type and curl error classification.

use std::time::Duration;

/// Why a page could not be fetched. Every variant is terminal for its Target.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The server answered 404.
    #[error("The requested Wikipedia page '{url}' does not exist.")]
    NotFound { url: String },

    /// Any other HTTP error status.
    #[error("Failed to fetch the Wikipedia page '{url}'.\nHTTP {status}")]
    Http { url: String, status: u32 },

    /// The request did not complete within the configured timeout.
    #[error("Failed to fetch the Wikipedia page '{url}'.\nRequest timed out after {}s", .timeout.as_secs())]
    Timeout {
        url: String,
        timeout: Duration,
        #[source]
        source: curl::Error,
    },

    /// The Target could not be parsed as a URL.
    #[error("Failed to fetch the Wikipedia page '{url}'.\n{source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// DNS, connection, TLS or read failure.
    #[error("Failed to fetch the Wikipedia page '{url}'.\n{source}")]
    Transport {
        url: String,
        #[source]
        source: curl::Error,
    },
}

/// Classify a final HTTP status. `None` means the body is usable.
pub(crate) fn classify_status(url: &str, code: u32) -> Option<FetchError> {
    match code {
        404 => Some(FetchError::NotFound {
            url: url.to_string(),
        }),
        400..=599 => Some(FetchError::Http {
            url: url.to_string(),
            status: code,
        }),
        _ => None,
    }
}

/// Classify a curl failure: timeouts are reported separately from other transport errors.
pub(crate) fn classify_curl_error(url: &str, timeout: Duration, e: curl::Error) -> FetchError {
    if e.is_operation_timedout() {
        return FetchError::Timeout {
            url: url.to_string(),
            timeout,
            source: e,
        };
    }
    FetchError::Transport {
        url: url.to_string(),
        source: e,
    }
}
