//! Error types for courier.

use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("body encoding failed: {0}")]
    Body(#[from] BodyError),

    #[error("invalid configuration: {0}")]
    Config(#[from] Box<figment::Error>),
}

impl Error {
    pub(crate) fn transport<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::Transport(Box::new(error))
    }

    /// True when the dispatch was cut short by its context deadline.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Timeout(_))
    }
}

impl From<figment::Error> for Error {
    fn from(e: figment::Error) -> Self { Error::Config(Box::new(e)) }
}

/// Failure to encode typed input into a request body.
#[derive(Debug, Error)]
pub enum BodyError {
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("xml: {0}")]
    Xml(#[from] quick_xml::se::SeError),

    #[error("form: {0}")]
    Form(#[from] serde_urlencoded::ser::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
