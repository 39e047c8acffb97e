//! Parses the `host[:port][/path]` target the client is pointed at.

use thiserror::Error;
use url::Url;

use crate::http::request::Method;

const DEFAULT_PORT: u16 = 80;

#[derive(Debug, Error)]
pub enum TargetError {
    #[error("no target given")]
    Empty,
    #[error("invalid target {input:?}: {source}")]
    Invalid {
        input: String,
        #[source]
        source: url::ParseError,
    },
    #[error("target {0:?} has no host")]
    MissingHost(String),
}

/// Where and how to send a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub host: String,
    pub port: u16,
    pub path: String,
    pub method: Method,
}

impl Target {
    /// Parses a target string and an optional method.
    ///
    /// A leading `http://` or `https://` is ignored. The port defaults to 80,
    /// the path to "/" and the method to GET. The method is upper-cased; the
    /// path is kept verbatim, without percent-encoding or dot-segment removal.
    ///
    /// ```
    /// # use minihttp::client::target::Target;
    /// let target = Target::parse("localhost:8080/a.html", Some("head")).unwrap();
    /// assert_eq!(target.port, 8080);
    /// assert_eq!(target.path, "/a.html");
    /// assert_eq!(target.method.as_str(), "HEAD");
    /// ```
    pub fn parse(input: &str, method: Option<&str>) -> Result<Self, TargetError> {
        let trimmed = input.trim();
        let rest = trimmed
            .strip_prefix("http://")
            .or_else(|| trimmed.strip_prefix("https://"))
            .unwrap_or(trimmed);

        if rest.is_empty() {
            return Err(TargetError::Empty);
        }

        // Only the authority goes through the URL parser; the path is sent
        // exactly as given.
        let (authority, raw_path) = match rest.find(['/', '?']) {
            Some(i) => rest.split_at(i),
            None => (rest, ""),
        };

        let url = Url::parse(&format!("http://{authority}")).map_err(|source| TargetError::Invalid {
            input: input.to_string(),
            source,
        })?;

        let host = url
            .host_str()
            .filter(|h| !h.is_empty())
            .ok_or_else(|| TargetError::MissingHost(input.to_string()))?;

        let path = match raw_path {
            "" => "/".to_string(),
            p if p.starts_with('?') => format!("/{p}"),
            p => p.to_string(),
        };

        let method = method
            .map(|m| Method::parse(&m.to_ascii_uppercase()))
            .unwrap_or(Method::GET);

        Ok(Self {
            host: host.to_string(),
            port: url.port().unwrap_or(DEFAULT_PORT),
            path,
            method,
        })
    }
}
