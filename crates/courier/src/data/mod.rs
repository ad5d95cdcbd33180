//! Plain data types: the request under construction, its header and query
//! sets, and the uniform response produced by a dispatch.

mod cookie;
mod header;
mod method;
mod multimap;
mod options;
mod prepared;
mod query;
mod request;
mod response;

pub use cookie::Cookie;
pub use header::HeaderSet;
pub use method::Method;
pub use options::{
    RequestOption, with_body, with_context_builder, with_cookies, with_header, with_method,
    with_query,
};
pub use prepared::PreparedRequest;
pub use query::QuerySet;
pub use request::Request;
pub use response::{ErrorResponse, Response, SuccessResponse, TransportResponse};
