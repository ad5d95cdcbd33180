use std::future::Future;

use crate::data::{PreparedRequest, TransportResponse};

/// Asynchronous transport abstraction.
///
/// Implementations perform one round trip for a [`PreparedRequest`] and
/// report whatever status the peer answered with. Deadlines are enforced by
/// the caller from [`PreparedRequest::context`]; implementations do not need
/// their own timeout.
///
/// # Implementations
///
/// - [`ReqwestTransport`]: Production implementation using `reqwest`
/// - Mock implementations for testing
pub trait Transport: Send + Sync {
    /// Error type for a failed round trip.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Send the request and read the full response.
    ///
    /// # Errors
    ///
    /// Returns an error when no response could be obtained: DNS failure,
    /// refused connection, an unparseable URI, a broken stream. A response
    /// with a 4xx or 5xx status is not an error.
    fn execute(
        &self,
        request: &PreparedRequest,
    ) -> impl Future<Output = Result<TransportResponse, Self::Error>> + Send;
}

#[cfg(feature = "reqwest")]
mod reqwest_impl {
    use super::*;
    use crate::data::Method;

    /// Production transport using reqwest.
    #[derive(Debug, Clone)]
    pub struct ReqwestTransport {
        client: reqwest::Client,
    }

    impl ReqwestTransport {
        /// Create a transport with default client configuration.
        pub fn new() -> Result<Self, reqwest::Error> {
            let client = reqwest::Client::builder().build()?;
            Ok(Self { client })
        }

        /// Wrap an existing client, keeping its TLS and pooling setup.
        pub fn with_client(client: reqwest::Client) -> Self { Self { client } }
    }

    fn method(method: Method) -> reqwest::Method {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Head => reqwest::Method::HEAD,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
            Method::Options => reqwest::Method::OPTIONS,
            Method::Connect => reqwest::Method::CONNECT,
            Method::Trace => reqwest::Method::TRACE,
        }
    }

    impl Transport for ReqwestTransport {
        type Error = reqwest::Error;

        async fn execute(
            &self,
            request: &PreparedRequest,
        ) -> Result<TransportResponse, Self::Error> {
            let mut builder = self.client.request(method(request.method), request.uri.as_str());

            for (key, value) in &request.headers {
                builder = builder.header(key.as_str(), value.as_str());
            }

            if !request.body.is_empty() {
                builder = builder.body(request.body.clone());
            }

            let response = builder.send().await?;
            let status = response.status().as_u16();
            let headers = response
                .headers()
                .iter()
                .map(|(k, v)| {
                    (k.as_str().to_string(), String::from_utf8_lossy(v.as_bytes()).into_owned())
                })
                .collect();
            let body = response.bytes().await?;

            Ok(TransportResponse { status, headers, body })
        }
    }
}

#[cfg(feature = "reqwest")]
pub use reqwest_impl::ReqwestTransport;
