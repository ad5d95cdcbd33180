use bytes::Bytes;

use super::PreparedRequest;
use crate::error::Error;

/// What a transport hands back for a completed round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status:  u16,
    pub headers: Vec<(String, String)>,
    pub body:    Bytes,
}

/// Outcome of exactly one dispatch.
///
/// Any status code the server returned, 4xx and 5xx included, is a
/// [`Response::Success`]. Only a failed round trip is a [`Response::Error`].
#[derive(Debug)]
pub enum Response {
    Success(SuccessResponse),
    Error(ErrorResponse),
}

#[derive(Debug)]
pub struct SuccessResponse {
    request: PreparedRequest,
    status:  u16,
    headers: Vec<(String, String)>,
    body:    Bytes,
}

#[derive(Debug)]
pub struct ErrorResponse {
    request: PreparedRequest,
    error:   Error,
}

impl Response {
    pub(crate) fn success(request: PreparedRequest, response: TransportResponse) -> Self {
        Response::Success(SuccessResponse {
            request,
            status: response.status,
            headers: response.headers,
            body: response.body,
        })
    }

    pub(crate) fn failure(request: PreparedRequest, error: Error) -> Self {
        Response::Error(ErrorResponse { request, error })
    }

    pub fn is_success(&self) -> bool { matches!(self, Response::Success(_)) }

    pub fn is_error(&self) -> bool { matches!(self, Response::Error(_)) }

    /// The request as it was sent.
    pub fn request(&self) -> &PreparedRequest {
        match self {
            Response::Success(r) => &r.request,
            Response::Error(r) => &r.request,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Response::Success(r) => Some(r.status),
            Response::Error(_) => None,
        }
    }

    pub fn body(&self) -> Option<&Bytes> {
        match self {
            Response::Success(r) => Some(&r.body),
            Response::Error(_) => None,
        }
    }

    pub fn headers(&self) -> Option<&[(String, String)]> {
        match self {
            Response::Success(r) => Some(r.headers()),
            Response::Error(_) => None,
        }
    }

    pub fn text(&self) -> Option<String> {
        match self {
            Response::Success(r) => Some(r.text()),
            Response::Error(_) => None,
        }
    }

    pub fn error(&self) -> Option<&Error> {
        match self {
            Response::Success(_) => None,
            Response::Error(r) => Some(&r.error),
        }
    }

    /// Convert into a `Result`, handing back the error of a failed dispatch.
    pub fn into_result(self) -> Result<SuccessResponse, ErrorResponse> {
        match self {
            Response::Success(r) => Ok(r),
            Response::Error(r) => Err(r),
        }
    }
}

impl SuccessResponse {
    pub fn request(&self) -> &PreparedRequest { &self.request }

    pub fn status(&self) -> u16 { self.status }

    pub fn headers(&self) -> &[(String, String)] { &self.headers }

    /// First value of response header `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn body(&self) -> &Bytes { &self.body }

    /// Body decoded as UTF-8, invalid sequences replaced.
    pub fn text(&self) -> String { String::from_utf8_lossy(&self.body).into_owned() }
}

impl ErrorResponse {
    pub fn request(&self) -> &PreparedRequest { &self.request }

    pub fn error(&self) -> &Error { &self.error }

    pub fn into_error(self) -> Error { self.error }
}
