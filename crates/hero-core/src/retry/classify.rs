//! Classify HTTP status and curl errors into retry policy error kinds.

use crate::api::ApiError;
use crate::retry::policy::ErrorKind;

/// Classify an HTTP status code for retry decisions.
pub fn classify_http_status(code: u32) -> ErrorKind {
    match code {
        429 | 503 => ErrorKind::Throttled,
        500..=599 => ErrorKind::Http5xx(code as u16),
        _ => ErrorKind::Other,
    }
}

/// Classify a curl error for retry decisions.
pub fn classify_curl_error(e: &curl::Error) -> ErrorKind {
    if e.is_operation_timedout() {
        return ErrorKind::Timeout;
    }
    if e.is_couldnt_connect()
        || e.is_couldnt_resolve_host()
        || e.is_couldnt_resolve_proxy()
        || e.is_read_error()
        || e.is_recv_error()
        || e.is_send_error()
        || e.is_got_nothing()
    {
        return ErrorKind::Connection;
    }
    ErrorKind::Other
}

/// Classify an API error. Parse and not-found failures are never retried.
pub fn classify(e: &ApiError) -> ErrorKind {
    match e {
        ApiError::Transport(ce) => classify_curl_error(ce),
        ApiError::Http { status, .. } => classify_http_status(*status),
        _ => ErrorKind::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Endpoint;

    #[test]
    fn http_429_and_503_throttled() {
        assert_eq!(classify_http_status(429), ErrorKind::Throttled);
        assert_eq!(classify_http_status(503), ErrorKind::Throttled);
    }

    #[test]
    fn http_5xx_retryable() {
        assert!(matches!(classify_http_status(500), ErrorKind::Http5xx(500)));
        assert!(matches!(classify_http_status(502), ErrorKind::Http5xx(502)));
    }

    #[test]
    fn http_4xx_other() {
        assert_eq!(classify_http_status(404), ErrorKind::Other);
        assert_eq!(classify_http_status(403), ErrorKind::Other);
    }

    #[test]
    fn connection_refused_is_connection() {
        // CURLE_COULDNT_CONNECT
        let e = ApiError::Transport(curl::Error::new(7 as _));
        assert_eq!(classify(&e), ErrorKind::Connection);
    }

    #[test]
    fn parse_errors_not_retried() {
        let e = ApiError::Parse {
            endpoint: Endpoint::Image,
            reason: "x".into(),
        };
        assert_eq!(classify(&e), ErrorKind::Other);
        let e = ApiError::HeroNotFound { id: "9".into() };
        assert_eq!(classify(&e), ErrorKind::Other);
    }
}
