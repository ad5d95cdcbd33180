use bytes::Bytes;
use serde::Serialize;
use url::form_urlencoded;

use super::{BodyParser, CONTENT_TYPE_FORM};
use crate::error::BodyError;

/// `application/x-www-form-urlencoded` body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormBody {
    bytes: Bytes,
}

impl FormBody {
    /// Encode fields in the given order.
    pub fn new<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut ser = form_urlencoded::Serializer::new(String::new());
        for (k, v) in fields {
            ser.append_pair(k.as_ref(), v.as_ref());
        }
        Self { bytes: Bytes::from(ser.finish()) }
    }

    /// Encode a flat struct, a map, or a sequence of `(key, value)` pairs.
    ///
    /// Struct fields keep their declared order and `None` fields are skipped.
    /// Nested values are rejected.
    pub fn from_value<T: Serialize + ?Sized>(value: &T) -> Result<Self, BodyError> {
        let encoded = serde_urlencoded::to_string(value)?;
        Ok(Self { bytes: Bytes::from(encoded) })
    }
}

impl BodyParser for FormBody {
    fn parse(&self) -> Bytes { self.bytes.clone() }

    fn content_type(&self) -> &str { CONTENT_TYPE_FORM }
}
