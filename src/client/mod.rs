//! Client role.
//!
//! Opens one connection per invocation, sends a single request and reads the
//! response until its Content-Length is satisfied, the peer closes, or the
//! stream stays idle for the configured read timeout.

pub mod connector;
pub mod exchange;
pub mod target;
pub mod transcript;

pub use exchange::{ClientResponse, Exchange, HttpClient};
pub use target::{Target, TargetError};
