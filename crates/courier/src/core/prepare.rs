use crate::context::{ContextBuilder, TimeoutContext};
use crate::data::{PreparedRequest, Request};

const CONTENT_TYPE: &str = "Content-Type";
const COOKIE: &str = "Cookie";

/// Assemble `request` into a [`PreparedRequest`].
///
/// Order is fixed:
/// 1. build the context (the request's builder, or a 30 s default)
/// 2. resolve the URI from path and query
/// 3. bind method, URI, context and body
/// 4. add every header-set entry
/// 5. set the body parser's content-type, if it has one, over any header entry
/// 6. attach cookies in configured order
pub fn prepare(request: &Request) -> PreparedRequest {
    let context = match &request.context_builder {
        Some(builder) => builder.build(),
        None => TimeoutContext::default().build(),
    };

    let mut prepared = PreparedRequest {
        method: request.method,
        path: request.path.clone(),
        uri: request.uri(),
        headers: Vec::new(),
        body: request.body.parse(),
        context,
    };

    if let Some(header) = &request.header {
        for (k, v) in header.properties() {
            prepared.add_header(k, v);
        }
    }

    let content_type = request.body.content_type();
    if !content_type.is_empty() {
        prepared.set_header(CONTENT_TYPE, content_type);
    }

    if !request.cookies.is_empty() {
        let cookies = request
            .cookies
            .iter()
            .map(|c| c.pair())
            .collect::<Vec<_>>()
            .join("; ");
        match prepared.headers.iter_mut().find(|(k, _)| k.eq_ignore_ascii_case(COOKIE)) {
            Some((_, existing)) => {
                existing.push_str("; ");
                existing.push_str(&cookies);
            }
            None => prepared.add_header(COOKIE, cookies),
        }
    }

    prepared
}
