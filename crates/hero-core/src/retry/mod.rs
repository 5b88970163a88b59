//! Retry and backoff policy for hero API requests.
//!
//! Errors are classified (timeouts, throttling, connection failures) and an
//! exponential backoff decision is made per attempt. The default policy makes
//! a single attempt, so retries only happen when configured.

mod classify;
mod policy;
mod run;

pub use classify::{classify, classify_curl_error, classify_http_status};
pub use policy::{ErrorKind, RetryDecision, RetryPolicy};
pub use run::run_with_retry;
