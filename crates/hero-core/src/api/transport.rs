//! HTTP GET transport.
//!
//! Uses the curl crate (libcurl). Transfers are blocking; the widget runs
//! them on the tokio blocking pool.

use super::error::ApiError;
use std::time::Duration;
use url::Url;

/// Status and body of a completed GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u32,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Blocking GET. Implementations must be shareable across the blocking pool.
pub trait HttpTransport: Send + Sync + 'static {
    fn get(&self, url: &Url) -> Result<HttpResponse, ApiError>;
}

/// libcurl-backed transport. Without explicit timeouts, libcurl defaults apply.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurlTransport {
    connect_timeout: Option<Duration>,
    timeout: Option<Duration>,
}

impl CurlTransport {
    pub fn with_timeouts(connect_timeout: Option<Duration>, timeout: Option<Duration>) -> Self {
        Self {
            connect_timeout,
            timeout,
        }
    }
}

impl HttpTransport for CurlTransport {
    fn get(&self, url: &Url) -> Result<HttpResponse, ApiError> {
        let mut body = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url.as_str())?;
        easy.get(true)?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
        if let Some(t) = self.connect_timeout {
            easy.connect_timeout(t)?;
        }
        if let Some(t) = self.timeout {
            easy.timeout(t)?;
        }

        let mut list = curl::easy::List::new();
        list.append("Accept: application/json")?;
        easy.http_headers(list)?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let status = easy.response_code()?;
        tracing::debug!(%url, status, bytes = body.len(), "GET complete");
        Ok(HttpResponse { status, body })
    }
}
