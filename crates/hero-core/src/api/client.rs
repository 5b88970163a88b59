//! Typed client over an [`HttpTransport`].

use super::endpoint::{parse_base_url, Endpoint};
use super::error::ApiError;
use super::transport::{CurlTransport, HttpResponse, HttpTransport};
use super::types::{HeroId, HeroImage, HeroOccupation, HeroPowerStats, HeroSummary, Validate};
use crate::config::WidgetConfig;
use crate::retry::{run_with_retry, RetryPolicy};
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

/// Plain-text body the upstream server sends (with HTTP 200) when `id` is absent.
const MISSING_ID_BODY: &str = "No Hero ID Parameter Found";

/// Client for the four hero endpoints. All calls block; run them off the
/// async executor.
#[derive(Debug)]
pub struct HeroClient<T> {
    transport: T,
    base: Url,
    retry: RetryPolicy,
}

impl HeroClient<CurlTransport> {
    /// Curl-backed client using base URL, timeouts and retry policy from config.
    pub fn from_config(cfg: &WidgetConfig) -> Result<Self, ApiError> {
        let transport = CurlTransport::with_timeouts(
            cfg.connect_timeout_secs.map(Duration::from_secs),
            cfg.timeout_secs.map(Duration::from_secs),
        );
        let base = parse_base_url(&cfg.base_url)?;
        Ok(Self::new(transport, base).with_retry(RetryPolicy::from_config(cfg.retry.as_ref())))
    }
}

impl<T: HttpTransport> HeroClient<T> {
    pub fn new(transport: T, base: Url) -> Self {
        Self {
            transport,
            base,
            retry: RetryPolicy::default(),
        }
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn list_heroes(&self) -> Result<Vec<HeroSummary>, ApiError> {
        self.fetch(Endpoint::All, None)
    }

    pub fn image(&self, id: &HeroId) -> Result<HeroImage, ApiError> {
        self.fetch(Endpoint::Image, Some(id))
    }

    pub fn occupation(&self, id: &HeroId) -> Result<HeroOccupation, ApiError> {
        self.fetch(Endpoint::Occupation, Some(id))
    }

    pub fn power_stats(&self, id: &HeroId) -> Result<HeroPowerStats, ApiError> {
        self.fetch(Endpoint::PowerStats, Some(id))
    }

    fn fetch<R>(&self, endpoint: Endpoint, id: Option<&HeroId>) -> Result<R, ApiError>
    where
        R: DeserializeOwned + Validate,
    {
        let url = endpoint.url(&self.base, id)?;
        tracing::debug!(%url, "GET");
        let response = run_with_retry(&self.retry, || {
            let response = self.transport.get(&url)?;
            if response.is_success() {
                Ok(response)
            } else {
                Err(ApiError::Http {
                    endpoint,
                    status: response.status,
                })
            }
        })?;
        decode(endpoint, &response)
    }
}

/// Decode a 2xx body into a validated record.
fn decode<R>(endpoint: Endpoint, response: &HttpResponse) -> Result<R, ApiError>
where
    R: DeserializeOwned + Validate,
{
    match serde_json::from_slice::<R>(&response.body) {
        Ok(record) => {
            record
                .validate()
                .map_err(|reason| ApiError::Parse { endpoint, reason })?;
            Ok(record)
        }
        Err(e) => Err(plain_text_error(endpoint, &response.body).unwrap_or(ApiError::Parse {
            endpoint,
            reason: e.to_string(),
        })),
    }
}

/// Recognize the server's plain-text error bodies.
fn plain_text_error(endpoint: Endpoint, body: &[u8]) -> Option<ApiError> {
    let text = std::str::from_utf8(body).ok()?.trim();
    if text == MISSING_ID_BODY {
        return Some(ApiError::MissingId { endpoint });
    }
    let id = text
        .strip_prefix("Hero ID ")?
        .strip_suffix(" Does Not Exist")?;
    Some(ApiError::HeroNotFound { id: id.to_string() })
}
