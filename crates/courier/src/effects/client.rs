use tracing::debug;

use super::Transport;
use super::dispatch::dispatch;
use crate::config::ClientConfig;
use crate::context::TimeoutContext;
use crate::data::{Request, Response};

/// A transport paired with shared defaults.
///
/// [`Client::send`] works on a copy of the request: the configured base URL
/// is merged into its path, default headers are merged into its header set,
/// and the configured timeout is installed when the request has no context
/// builder of its own. The caller's request is left as it was.
pub struct Client<T: Transport> {
    transport: T,
    config:    ClientConfig,
}

impl<T: Transport> Client<T> {
    pub fn new(transport: T, config: ClientConfig) -> Self { Self { transport, config } }

    pub fn config(&self) -> &ClientConfig { &self.config }

    pub fn transport(&self) -> &T { &self.transport }

    /// The request as this client would send it.
    pub fn apply(&self, request: &Request) -> Request {
        let mut request = request.clone();

        if let Some(base_url) = &self.config.base_url {
            request.set_base_url(base_url);
        }

        if !self.config.headers.is_empty() {
            request.merge_header(self.config.header_set());
        }

        if request.context_builder().is_none() {
            request.set_context_builder(TimeoutContext::new(self.config.timeout()));
        }

        request
    }

    pub async fn send(&self, request: &Request) -> Response {
        let request = self.apply(request);
        debug!(path = request.path(), "sending through client");
        dispatch(&self.transport, request.prepare()).await
    }
}

#[cfg(feature = "reqwest")]
impl Client<super::ReqwestTransport> {
    /// A reqwest-backed client for `config`.
    pub fn from_config(config: ClientConfig) -> crate::Result<Self> {
        let transport = super::ReqwestTransport::new().map_err(crate::Error::transport)?;
        Ok(Self::new(transport, config))
    }
}
