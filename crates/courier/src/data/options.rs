use std::sync::Arc;

use super::{Cookie, HeaderSet, Method, QuerySet, Request};
use crate::body::BodyParser;
use crate::context::ContextBuilder;

/// A transformation applied to a [`Request`] under construction.
///
/// Options run in the order given to [`Request::new`]; a later option for
/// the same field wins.
pub type RequestOption = Box<dyn FnOnce(&mut Request) + Send>;

pub fn with_method(method: Method) -> RequestOption {
    Box::new(move |request: &mut Request| request.method = method)
}

pub fn with_body(body: impl BodyParser + 'static) -> RequestOption {
    Box::new(move |request: &mut Request| request.body = Arc::new(body))
}

pub fn with_query(query: QuerySet) -> RequestOption {
    Box::new(move |request: &mut Request| request.query = Some(query))
}

/// Replace the header set. Use [`Request::merge_header`] to combine.
pub fn with_header(header: HeaderSet) -> RequestOption {
    Box::new(move |request: &mut Request| request.header = Some(header))
}

pub fn with_context_builder(builder: impl ContextBuilder + 'static) -> RequestOption {
    Box::new(move |request: &mut Request| request.context_builder = Some(Arc::new(builder)))
}

/// Cookies are attached in the order given here.
pub fn with_cookies(cookies: impl IntoIterator<Item = Cookie>) -> RequestOption {
    let cookies: Vec<Cookie> = cookies.into_iter().collect();
    Box::new(move |request: &mut Request| request.cookies = cookies)
}
