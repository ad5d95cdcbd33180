use std::sync::Arc;

use super::{Cookie, HeaderSet, Method, PreparedRequest, QuerySet, RequestOption};
use crate::body::{BodyParser, EmptyBody};
use crate::context::ContextBuilder;

/// Description of one outbound HTTP call.
///
/// Built from a raw path plus a sequence of [`RequestOption`]s. The URI is
/// resolved lazily from the current path and query each time the request is
/// prepared, so a request can be dispatched repeatedly and is never consumed.
///
/// # Examples
///
/// ```
/// use courier::{HeaderSet, Method, QuerySet, Request, with_header, with_method, with_query};
///
/// let mut request = Request::new("/users", [
///     with_method(Method::Delete),
///     with_query([("id", "42")].into_iter().collect::<QuerySet>()),
///     with_header([("Accept", "application/json")].into_iter().collect::<HeaderSet>()),
/// ]);
/// request.set_base_url("https://api.example.com/");
///
/// assert_eq!(request.uri(), "https://api.example.com/users?id=42");
/// ```
#[derive(Debug, Clone)]
pub struct Request {
    pub(crate) path:            String,
    pub method:                 Method,
    pub header:                 Option<HeaderSet>,
    pub query:                  Option<QuerySet>,
    pub body:                   Arc<dyn BodyParser>,
    pub(crate) context_builder: Option<Arc<dyn ContextBuilder>>,
    pub cookies:                Vec<Cookie>,
}

impl Request {
    /// Create a request for `path`, applying `options` in order.
    ///
    /// Without options the request is a `GET` with an empty body and the
    /// default 30 second timeout.
    pub fn new(path: impl Into<String>, options: impl IntoIterator<Item = RequestOption>) -> Self {
        let mut request = Self {
            path:            path.into(),
            method:          Method::Get,
            header:          None,
            query:           None,
            body:            Arc::new(EmptyBody),
            context_builder: None,
            cookies:         Vec::new(),
        };
        for option in options {
            option(&mut request);
        }
        request
    }

    /// The path before query appending.
    pub fn path(&self) -> &str { &self.path }

    pub fn context_builder(&self) -> Option<&Arc<dyn ContextBuilder>> {
        self.context_builder.as_ref()
    }

    /// Prefix the path with `base_url`. Applying the same base twice is a
    /// no-op, whatever the slashes on either side.
    pub fn set_base_url(&mut self, base_url: &str) -> &mut Self {
        self.path = crate::core::merge_base_url(&self.path, base_url);
        self
    }

    /// Adopt `header` when the request has none, merge it in otherwise.
    pub fn merge_header(&mut self, header: HeaderSet) -> &mut Self {
        match &mut self.header {
            Some(existing) => {
                existing.merge(&header);
            }
            None => self.header = Some(header),
        }
        self
    }

    pub fn set_context_builder(&mut self, builder: impl ContextBuilder + 'static) -> &mut Self {
        self.context_builder = Some(Arc::new(builder));
        self
    }

    /// The URI this request would be sent to right now.
    pub fn uri(&self) -> String { crate::core::resolve_uri(&self.path, self.query.as_ref()) }

    /// Assemble the outbound request. A fresh [`Context`](crate::Context)
    /// is built on every call.
    pub fn prepare(&self) -> PreparedRequest { crate::core::prepare(self) }
}
