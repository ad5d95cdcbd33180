use bytes::Bytes;
use serde::Serialize;

use super::{BodyParser, CONTENT_TYPE_JSON};
use crate::error::BodyError;

/// `application/json` body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonBody {
    bytes: Bytes,
}

impl JsonBody {
    pub fn new<T: Serialize + ?Sized>(value: &T) -> Result<Self, BodyError> {
        let bytes = serde_json::to_vec(value)?;
        Ok(Self { bytes: Bytes::from(bytes) })
    }
}

impl BodyParser for JsonBody {
    fn parse(&self) -> Bytes { self.bytes.clone() }

    fn content_type(&self) -> &str { CONTENT_TYPE_JSON }
}
