//! Fluent request builder for outbound HTTP calls.
//!
//! # Architecture
//!
//! This crate follows the three-layer pattern:
//! - [`data`] - Request, header/query sets, cookies, responses
//! - [`core`] - Pure transformations: URI resolution and request assembly
//! - [`effects`] - Dispatch against a [`Transport`], behind a trait
//!
//! Body encoding and execution deadlines are pluggable strategies, see
//! [`body::BodyParser`] and [`context::ContextBuilder`].
//!
//! A [`Request`] maps to exactly one dispatch attempt. Transport failures
//! never escape [`Request::send_with`]: they come back as
//! [`Response::Error`], and any received status code, 4xx and 5xx included,
//! comes back as [`Response::Success`].
//!
//! # Example
//!
//! ```no_run
//! use courier::{Method, Request, with_body, with_method};
//! use courier::body::JsonBody;
//!
//! # async fn run() -> Result<(), courier::Error> {
//! let body = JsonBody::new(&serde_json::json!({ "name": "ada" }))?;
//! let mut request = Request::new("users", [with_method(Method::Post), with_body(body)]);
//! request.set_base_url("http://localhost:8080");
//!
//! let response = request.send().await;
//! if let Some(status) = response.status() {
//!     println!("status: {status}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod body;
pub mod config;
pub mod context;
pub mod core;
pub mod data;
pub mod effects;
mod error;

pub use config::ClientConfig;
pub use context::{Context, ContextBuilder, DEFAULT_TIMEOUT, DeadlineContext, TimeoutContext};
pub use data::{
    Cookie, ErrorResponse, HeaderSet, Method, PreparedRequest, QuerySet, Request, RequestOption,
    Response, SuccessResponse, TransportResponse, with_body, with_context_builder, with_cookies,
    with_header, with_method, with_query,
};
pub use effects::{Client, Transport};
pub use error::{BodyError, Error, Result};

#[cfg(feature = "reqwest")]
pub use effects::ReqwestTransport;
