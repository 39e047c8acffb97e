//! Server role.
//!
//! The listener accepts one connection at a time and drives it through a
//! fixed state machine:
//!
//! ```text
//!   Reading ──request──▶ Dispatching ──response──▶ Writing ──▶ Closed
//!      │                  (GET | HEAD | other)                  ▲
//!      └──── peer closed / malformed request ──────────────────┘
//! ```
//!
//! Dispatch resolves GET and HEAD targets under the document root and answers
//! every other method with 501. Failures inside dispatch become a 500 for
//! that connection only.

pub mod connection;
pub mod content;
pub mod handler;
pub mod listener;
pub mod resolver;

pub use handler::Responder;
pub use listener::Server;
pub use resolver::{DocumentRoot, Resolution};
