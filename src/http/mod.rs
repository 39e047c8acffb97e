//! HTTP/1.1 message vocabulary shared by the client and the server.
//!
//! - **`request`**: methods and the request model
//! - **`response`**: status codes, the response model and its builder
//! - **`headers`**: insertion-ordered header mapping
//! - **`parser`**: recovers request and response heads from raw bytes
//! - **`writer`**: serializes messages and writes them to a stream
//! - **`date`**: RFC 1123 dates for the Date header
//!
//! # Wire format
//!
//! ```text
//! GET /a.html HTTP/1.1\r\n
//! Host: localhost\r\n
//! \r\n
//!
//! HTTP/1.1 200 OK\r\n
//! Host: localhost\r\n
//! Date: Sun, 06 Nov 1994 08:49:37 GMT\r\n
//! Server: minihttp\r\n
//! Content-Length: 5\r\n
//! \r\n
//! hello\r\n
//! \r\n
//! ```
//!
//! Every response ends with an explicit `\r\n\r\n` after the body.

pub mod date;
pub mod headers;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
