//! Error type for hero API calls.

use super::endpoint::Endpoint;

/// Failure of a single hero API request.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Curl reported an error (timeout, connection refused, DNS, ...).
    #[error("transport: {0}")]
    Transport(#[from] curl::Error),
    /// Response had a non-2xx status.
    #[error("{endpoint} returned HTTP {status}")]
    Http { endpoint: Endpoint, status: u32 },
    /// The server answered with its plain-text "does not exist" body.
    #[error("hero {id} does not exist")]
    HeroNotFound { id: String },
    /// The server answered with its plain-text "no id parameter" body.
    #[error("{endpoint}: request carried no hero id")]
    MissingId { endpoint: Endpoint },
    /// Body was not the expected JSON shape or failed validation.
    #[error("{endpoint}: malformed response: {reason}")]
    Parse { endpoint: Endpoint, reason: String },
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// The task running the request ended without a result (panicked or was cancelled).
    #[error("{endpoint}: request task ended without a result: {reason}")]
    Interrupted { endpoint: Endpoint, reason: String },
}

impl ApiError {
    /// Short text suitable for an error state inside a view region.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Transport(_) => "hero service unreachable".to_string(),
            ApiError::Http { status, .. } => format!("hero service error (HTTP {status})"),
            ApiError::HeroNotFound { id } => format!("hero {id} not found"),
            ApiError::MissingId { .. } => "no hero selected".to_string(),
            ApiError::Parse { .. } => "unexpected response from hero service".to_string(),
            ApiError::InvalidUrl(_) => "invalid hero service URL".to_string(),
            ApiError::Interrupted { .. } => "hero request failed".to_string(),
        }
    }
}
