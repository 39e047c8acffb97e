//! minihttp - single-connection HTTP/1.1 client and server
//!
//! Core library for message framing, request dispatch and static resource
//! resolution over raw TCP streams.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod net;
pub mod server;

pub use error::{Error, Result};
