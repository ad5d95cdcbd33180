use std::time::Instant;

use tracing::{debug, warn};

use super::Transport;
use crate::data::{PreparedRequest, Request, Response};
use crate::error::Error;

impl Request {
    /// Prepare the request and run one dispatch attempt over `transport`.
    ///
    /// Never fails: a round trip that could not complete, including one cut
    /// short by the context deadline, comes back as [`Response::Error`].
    pub async fn send_with<T: Transport>(&self, transport: &T) -> Response {
        dispatch(transport, self.prepare()).await
    }

    /// [`Request::send_with`] over a fresh [`ReqwestTransport`](super::ReqwestTransport).
    #[cfg(feature = "reqwest")]
    pub async fn send(&self) -> Response {
        match super::ReqwestTransport::new() {
            Ok(transport) => self.send_with(&transport).await,
            Err(e) => Response::failure(self.prepare(), Error::transport(e)),
        }
    }
}

/// Run `prepared` against `transport`, bounded by its context deadline.
pub(crate) async fn dispatch<T: Transport>(transport: &T, prepared: PreparedRequest) -> Response {
    let started = Instant::now();
    let deadline = tokio::time::Instant::from_std(prepared.context.deadline());
    if prepared.context.is_expired() {
        let timeout = prepared.context.timeout();
        warn!(method = %prepared.method, uri = %prepared.uri, ?timeout, "deadline passed before dispatch");
        return Response::failure(prepared, Error::Timeout(timeout));
    }
    debug!(method = %prepared.method, uri = %prepared.uri, "dispatching request");

    let outcome = tokio::time::timeout_at(deadline, transport.execute(&prepared)).await;
    let elapsed_ms = started.elapsed().as_millis() as u64;

    match outcome {
        Ok(Ok(response)) => {
            debug!(
                method = %prepared.method,
                uri = %prepared.uri,
                status = response.status,
                elapsed_ms,
                "request completed"
            );
            Response::success(prepared, response)
        }
        Ok(Err(e)) => {
            warn!(method = %prepared.method, uri = %prepared.uri, error = %e, elapsed_ms, "request failed");
            Response::failure(prepared, Error::transport(e))
        }
        Err(_) => {
            let timeout = prepared.context.timeout();
            warn!(method = %prepared.method, uri = %prepared.uri, ?timeout, "request timed out");
            Response::failure(prepared, Error::Timeout(timeout))
        }
    }
}
