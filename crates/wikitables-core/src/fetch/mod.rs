//! Page retrieval.
//!
//! Uses the curl crate (libcurl) for a single blocking GET per Target with a
//! fixed whole-request timeout and a caller-supplied `User-Agent`. The URL is
//! normalized by `url` first. Redirects are followed. There are no retries.

mod error;

pub use error::FetchError;

use std::time::Duration;

/// Source of raw page markup. The driver only depends on this trait.
pub trait PageSource {
    fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// Fetches pages over HTTP(S) with libcurl.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    timeout: Duration,
    user_agent: String,
}

impl HttpFetcher {
    pub fn new(timeout: Duration, user_agent: impl Into<String>) -> Self {
        Self {
            timeout,
            user_agent: user_agent.into(),
        }
    }

    fn get(&self, url: &str) -> Result<(u32, Vec<u8>), curl::Error> {
        let mut body = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.get(true)?;
        easy.follow_location(true)?;
        easy.useragent(&self.user_agent)?;
        easy.connect_timeout(self.timeout)?;
        easy.timeout(self.timeout)?;
        // Let libcurl negotiate and decode compressed bodies.
        easy.accept_encoding("")?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        Ok((code, body))
    }
}

impl PageSource for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        // Percent-encode spaces and other characters libcurl refuses in a raw URL.
        let parsed = url::Url::parse(url).map_err(|source| FetchError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;
        tracing::debug!(url = parsed.as_str(), timeout_secs = self.timeout.as_secs(), "GET");
        let (code, body) = self
            .get(parsed.as_str())
            .map_err(|e| error::classify_curl_error(url, self.timeout, e))?;

        if let Some(err) = error::classify_status(url, code) {
            return Err(err);
        }

        tracing::debug!(url, status = code, bytes = body.len(), "page fetched");
        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}
