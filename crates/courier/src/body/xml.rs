use bytes::Bytes;
use serde::Serialize;

use super::{BodyParser, CONTENT_TYPE_XML};
use crate::error::BodyError;

/// `text/xml` body. The root element takes the name of the serialised type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlBody {
    bytes: Bytes,
}

impl XmlBody {
    pub fn new<T: Serialize + ?Sized>(value: &T) -> Result<Self, BodyError> {
        let xml = quick_xml::se::to_string(value)?;
        Ok(Self { bytes: Bytes::from(xml) })
    }
}

impl BodyParser for XmlBody {
    fn parse(&self) -> Bytes { self.bytes.clone() }

    fn content_type(&self) -> &str { CONTENT_TYPE_XML }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Order {
        id:   u32,
        item: String,
    }

    #[test]
    fn test_xml_body() {
        let body = XmlBody::new(&Order {
            id:   7,
            item: "tea".to_string(),
        })
        .unwrap();

        assert_eq!(body.parse(), Bytes::from_static(b"<Order><id>7</id><item>tea</item></Order>"));
        assert_eq!(body.content_type(), "text/xml");
    }
}
