//! Request body strategies.
//!
//! A [`BodyParser`] yields the bytes of an outbound body and the
//! content-type to announce for it. An empty content-type leaves the
//! `Content-Type` header alone.
//!
//! Typed encoders ([`JsonBody`], [`XmlBody`], [`FormBody::from_value`])
//! serialise when constructed, so encoding errors surface there and
//! [`BodyParser::parse`] cannot fail.

mod form;
mod json;
mod multipart;
mod xml;

use std::fmt;

use bytes::Bytes;

pub use form::FormBody;
pub use json::JsonBody;
pub use multipart::{MultipartBody, Part};
pub use xml::XmlBody;

pub const CONTENT_TYPE_FORM: &str = "application/x-www-form-urlencoded";
pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const CONTENT_TYPE_XML: &str = "text/xml";
pub const CONTENT_TYPE_MULTIPART: &str = "multipart/form-data";

/// Strategy producing a request body and its content-type.
pub trait BodyParser: Send + Sync + fmt::Debug {
    /// Body bytes, possibly empty.
    fn parse(&self) -> Bytes;

    /// Content-type to set, or `""` to leave it unset.
    fn content_type(&self) -> &str;
}

/// The default parser: no body, no content-type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmptyBody;

impl BodyParser for EmptyBody {
    fn parse(&self) -> Bytes { Bytes::new() }

    fn content_type(&self) -> &str { "" }
}

/// Caller-supplied bytes sent as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawBody {
    bytes:        Bytes,
    content_type: String,
}

impl RawBody {
    pub fn new(bytes: impl Into<Bytes>) -> Self {
        Self {
            bytes:        bytes.into(),
            content_type: String::new(),
        }
    }

    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }
}

impl BodyParser for RawBody {
    fn parse(&self) -> Bytes { self.bytes.clone() }

    fn content_type(&self) -> &str { &self.content_type }
}
