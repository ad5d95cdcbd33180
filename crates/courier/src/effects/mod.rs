//! Dispatch of prepared requests.
//!
//! The transport is abstracted behind [`Transport`]. Everything here runs
//! exactly one attempt per request; there is no retry, pooling or batching
//! of our own.

mod client;
mod dispatch;
mod transport;

pub use client::Client;
pub use transport::Transport;

#[cfg(feature = "reqwest")]
pub use transport::ReqwestTransport;
