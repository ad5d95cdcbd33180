//! Client configuration.
//!
//! Values are layered with figment: built-in defaults, then an optional TOML
//! file, then `COURIER_`-prefixed environment variables.
//!
//! ```toml
//! base_url = "https://api.example.com"
//! timeout_ms = 10000
//!
//! [headers]
//! User-Agent = "courier/0.1"
//! ```

use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use crate::context::DEFAULT_TIMEOUT;
use crate::data::HeaderSet;
use crate::error::Result;

/// Defaults a [`Client`](crate::Client) applies to every request it sends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Prefix merged into each request path.
    pub base_url:   Option<String>,
    /// Timeout for requests without their own context builder.
    pub timeout_ms: u64,
    /// Headers merged into each request.
    pub headers:    BTreeMap<String, String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url:   None,
            timeout_ms: DEFAULT_TIMEOUT.as_millis() as u64,
            headers:    BTreeMap::new(),
        }
    }
}

impl ClientConfig {
    pub const ENV_PREFIX: &'static str = "COURIER_";

    /// Defaults, then `path` if it exists, then the environment.
    pub fn figment(path: impl AsRef<Path>) -> Figment {
        Figment::from(Serialized::defaults(ClientConfig::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed(Self::ENV_PREFIX))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::figment(path).extract()?)
    }

    /// Defaults overlaid with the environment only.
    pub fn from_env() -> Result<Self> {
        let figment = Figment::from(Serialized::defaults(ClientConfig::default()))
            .merge(Env::prefixed(Self::ENV_PREFIX));
        Ok(figment.extract()?)
    }

    pub fn timeout(&self) -> Duration { Duration::from_millis(self.timeout_ms) }

    pub fn header_set(&self) -> HeaderSet { self.headers.iter().collect() }
}
