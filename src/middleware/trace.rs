//! Per-request tracing.
//!
//! Every request runs inside an `info_span!("request")` carrying its method
//! and path. When the handler finishes, one event records the status and the
//! latency in microseconds. Anything a handler logs inherits the span fields.

use std::future::Future;
use std::time::Instant;

use tracing::{Instrument, info, info_span, warn};

use crate::method::Method;
use crate::response::Response;

/// Runs `fut` inside a request span and logs its outcome.
///
/// Client errors log at `info`, server errors at `warn`.
pub async fn instrument<F>(method: Method, path: &str, fut: F) -> Response
where
    F: Future<Output = Response>,
{
    let span = info_span!("request", method = %method, path = %path);
    async move {
        let started = Instant::now();
        let res = fut.await;
        let status = res.status_code();
        let latency_us = started.elapsed().as_micros() as u64;
        if status >= 500 {
            warn!(status, latency_us, "request failed");
        } else {
            info!(status, latency_us, "request completed");
        }
        res
    }
    .instrument(span)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::Status;

    #[tokio::test]
    async fn passes_the_response_through() {
        let res = instrument(Method::Get, "/healthz", async { Response::status(Status::NoContent) }).await;
        assert_eq!(res.status_code(), 204);
    }
}
