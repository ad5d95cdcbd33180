//! Pure transformations: URI resolution and request assembly.
//!
//! Nothing here performs I/O; see [`crate::effects`] for dispatch.

mod prepare;
mod uri;

pub use prepare::prepare;
pub use uri::{merge_base_url, resolve_uri};
