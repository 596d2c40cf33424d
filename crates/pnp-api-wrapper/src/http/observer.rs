/*
[INPUT]:  Failed requests (non-2xx responses and transport errors)
[OUTPUT]: Side-effect-only diagnostics (tracing events by default)
[POS]:    HTTP layer - pluggable failure observer
[UPDATE]: When changing what is reported about failed requests
*/

use reqwest::{Method, StatusCode};
use tracing::warn;

/// Description of a request that did not succeed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedRequest {
    pub method: Method,
    /// Base URL plus request path, without query string
    pub url: String,
    /// `None` when no response was received
    pub status: Option<StatusCode>,
    /// Server-provided `error` message, or the transport error text
    pub message: Option<String>,
}

/// Hook invoked once for every failed request, before the error is returned
///
/// Observers must not influence control flow; the error reaches the caller
/// regardless of what the observer does.
pub trait ResponseObserver: Send + Sync {
    fn on_failure(&self, failure: &FailedRequest);
}

impl<F> ResponseObserver for F
where
    F: Fn(&FailedRequest) + Send + Sync,
{
    fn on_failure(&self, failure: &FailedRequest) {
        self(failure)
    }
}

/// Default observer: emits a `tracing` warning per failure
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl ResponseObserver for LogObserver {
    fn on_failure(&self, failure: &FailedRequest) {
        let status = failure
            .status
            .map(|s| s.as_u16().to_string())
            .unwrap_or_else(|| "none".to_string());
        warn!(
            method = %failure.method,
            url = %failure.url,
            status = %status,
            server_message = failure.message.as_deref().unwrap_or("-"),
            "{} request to {} failed with status code: {}",
            failure.method,
            failure.url,
            status
        );
    }
}

/// Observer that drops every report
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ResponseObserver for NoopObserver {
    fn on_failure(&self, _failure: &FailedRequest) {}
}
