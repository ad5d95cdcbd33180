use bytes::Bytes;

use super::Method;
use crate::context::Context;

/// A fully assembled outbound request, ready for a [`Transport`](crate::Transport).
///
/// Headers are kept as an ordered list of pairs so repeated names survive.
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    pub method:  Method,
    pub path:    String,
    pub uri:     String,
    pub headers: Vec<(String, String)>,
    pub body:    Bytes,
    pub context: Context,
}

impl PreparedRequest {
    /// First value of header `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn header_all(&self, name: &str) -> Vec<&str> {
        self.headers
            .iter()
            .filter(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
            .collect()
    }

    pub fn add_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.headers.push((name.into(), value.into()));
    }

    /// Drop every value of `name` and store `value` alone.
    pub fn set_header(&mut self, name: &str, value: impl Into<String>) {
        self.headers.retain(|(k, _)| !k.eq_ignore_ascii_case(name));
        self.headers.push((name.to_string(), value.into()));
    }

    pub fn content_type(&self) -> Option<&str> { self.header("Content-Type") }
}
