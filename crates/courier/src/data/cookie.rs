use std::collections::BTreeMap;
use std::fmt;

/// A cookie to attach to an outbound request.
///
/// Only `name=value` travels in the `Cookie` header; attributes such as
/// `Path` or `Domain` are kept for the caller's bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cookie {
    pub name:       String,
    pub value:      String,
    pub attributes: BTreeMap<String, String>,
}

impl Cookie {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name:       name.into(),
            value:      value.into(),
            attributes: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// The `name=value` pair as sent on the wire.
    pub fn pair(&self) -> String { format!("{}={}", self.name, self.value) }
}

impl fmt::Display for Cookie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)?;
        for (k, v) in &self.attributes {
            if v.is_empty() {
                write!(f, "; {k}")?;
            } else {
                write!(f, "; {k}={v}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_ignores_attributes() {
        let cookie = Cookie::new("session", "abc").attribute("Path", "/");
        assert_eq!(cookie.pair(), "session=abc");
        assert_eq!(cookie.to_string(), "session=abc; Path=/");
    }
}
