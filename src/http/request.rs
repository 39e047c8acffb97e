use std::fmt;

use crate::http::headers::Headers;

pub const HTTP_VERSION: &str = "HTTP/1.1";

/// HTTP request methods.
///
/// Only GET and HEAD are served; every other token is carried verbatim in
/// `Other` so the server can answer it with 501 Not Implemented and the
/// client can still send it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
    /// HEAD - Like GET but without the response body
    HEAD,
    /// Any other method token, e.g. `POST` or `DELETE`
    Other(String),
}

impl Method {
    /// Parses an HTTP method token.
    ///
    /// Matching is case-sensitive: only the exact tokens `GET` and `HEAD`
    /// select their handlers.
    ///
    /// # Example
    ///
    /// ```
    /// # use minihttp::http::request::Method;
    /// assert_eq!(Method::parse("GET"), Method::GET);
    /// assert_eq!(Method::parse("get"), Method::Other("get".into()));
    /// ```
    pub fn parse(s: &str) -> Self {
        match s {
            "GET" => Method::GET,
            "HEAD" => Method::HEAD,
            other => Method::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Method::GET => "GET",
            Method::HEAD => "HEAD",
            Method::Other(s) => s,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request as sent by the client or recovered by the server.
#[derive(Debug, Clone)]
pub struct Request {
    /// The HTTP method
    pub method: Method,
    /// The request target, always starting with "/" when built locally
    pub path: String,
    /// Value of the Host header, empty if the peer did not send one
    pub host: String,
    /// HTTP version token from the request line
    pub version: String,
    /// Request headers in arrival order
    pub headers: Headers,
}

impl Request {
    /// Builds a request, normalizing an empty path to "/".
    pub fn new(method: Method, host: impl Into<String>, path: impl Into<String>) -> Self {
        let path = path.into();
        let path = if path.is_empty() { "/".to_string() } else { path };
        let host = host.into();

        let mut headers = Headers::new();
        headers.insert("Host", host.clone());

        Self {
            method,
            path,
            host,
            version: HTTP_VERSION.to_string(),
            headers,
        }
    }

    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key)
    }
}
