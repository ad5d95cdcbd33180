use bytes::{BufMut, Bytes, BytesMut};

use super::{BodyParser, CONTENT_TYPE_MULTIPART};

/// One field of a multipart body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Part {
    name:         String,
    filename:     Option<String>,
    content_type: Option<String>,
    data:         Bytes,
}

impl Part {
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name:         name.into(),
            filename:     None,
            content_type: None,
            data:         Bytes::from(value.into()),
        }
    }

    /// A file field, sent as `application/octet-stream` unless overridden.
    pub fn file(name: impl Into<String>, filename: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            name:         name.into(),
            filename:     Some(filename.into()),
            content_type: Some("application/octet-stream".to_string()),
            data:         data.into(),
        }
    }

    #[must_use]
    pub fn mime(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

/// `multipart/form-data` body (RFC 7578).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultipartBody {
    boundary:     String,
    content_type: String,
    parts:        Vec<Part>,
}

impl Default for MultipartBody {
    fn default() -> Self {
        Self::with_boundary(format!("courier-{}", uuid::Uuid::new_v4().simple()))
    }
}

impl MultipartBody {
    pub fn new() -> Self { Self::default() }

    pub fn with_boundary(boundary: impl Into<String>) -> Self {
        let boundary = boundary.into();
        Self {
            content_type: format!("{CONTENT_TYPE_MULTIPART}; boundary={boundary}"),
            boundary,
            parts: Vec::new(),
        }
    }

    #[must_use]
    pub fn part(mut self, part: Part) -> Self {
        self.parts.push(part);
        self
    }

    #[must_use]
    pub fn text(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.part(Part::text(name, value))
    }

    pub fn boundary(&self) -> &str { &self.boundary }

    pub fn parts(&self) -> &[Part] { &self.parts }
}

impl BodyParser for MultipartBody {
    fn parse(&self) -> Bytes {
        let mut buf = BytesMut::new();
        for part in &self.parts {
            buf.put_slice(format!("--{}\r\n", self.boundary).as_bytes());
            let mut disposition = format!("Content-Disposition: form-data; name=\"{}\"", escape(&part.name));
            if let Some(filename) = &part.filename {
                disposition.push_str(&format!("; filename=\"{}\"", escape(filename)));
            }
            buf.put_slice(disposition.as_bytes());
            buf.put_slice(b"\r\n");
            if let Some(content_type) = &part.content_type {
                buf.put_slice(format!("Content-Type: {content_type}\r\n").as_bytes());
            }
            buf.put_slice(b"\r\n");
            buf.put_slice(&part.data);
            buf.put_slice(b"\r\n");
        }
        buf.put_slice(format!("--{}--\r\n", self.boundary).as_bytes());
        buf.freeze()
    }

    fn content_type(&self) -> &str { &self.content_type }
}

fn escape(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
