use thiserror::Error;

use crate::http::headers::Headers;
use crate::http::request::{HTTP_VERSION, Method, Request};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty message")]
    Empty,
    #[error("request line is missing the method or target")]
    InvalidRequest,
    #[error("malformed status line")]
    InvalidStatusLine,
    #[error("malformed header line")]
    InvalidHeader,
    #[error("message head is not valid UTF-8")]
    InvalidEncoding,
    #[error("message head exceeds {0} bytes")]
    TooLarge(usize),
    #[error("response head never terminated")]
    Incomplete,
    #[error("response body truncated: expected {expected} bytes, got {received}")]
    Truncated { expected: usize, received: usize },
}

/// Head of a response recovered by the client.
#[derive(Debug, Clone)]
pub struct ResponseHead {
    pub version: String,
    pub status: u16,
    pub reason: String,
    pub headers: Headers,
}

/// Position of the `\r\n\r\n` that ends a message head.
pub fn find_headers_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}

/// Parses a request head.
///
/// `buf` holds everything received so far; only the portion up to the first
/// blank line is looked at. The method is the first whitespace-delimited
/// token of the request line and the target the second. A missing version
/// defaults to HTTP/1.1.
pub fn parse_request(buf: &[u8]) -> Result<Request, ParseError> {
    let head = match find_headers_end(buf) {
        Some(end) => &buf[..end],
        None => buf,
    };

    if head.iter().all(u8::is_ascii_whitespace) {
        return Err(ParseError::Empty);
    }

    let head = std::str::from_utf8(head).map_err(|_| ParseError::InvalidEncoding)?;
    let mut lines = head.split("\r\n");

    let request_line = lines.next().ok_or(ParseError::InvalidRequest)?;
    let mut parts = request_line.split_whitespace();

    let method = parts.next().ok_or(ParseError::InvalidRequest)?;
    let path = parts.next().ok_or(ParseError::InvalidRequest)?;
    let version = parts.next().unwrap_or(HTTP_VERSION);

    let headers = parse_headers(lines)?;

    Ok(Request {
        method: Method::parse(method),
        path: path.to_string(),
        host: headers.get("Host").unwrap_or_default().to_string(),
        version: version.to_string(),
        headers,
    })
}

/// Parses a response head, returning it together with the number of bytes
/// it occupies (terminator included).
pub fn parse_response_head(buf: &[u8]) -> Result<(ResponseHead, usize), ParseError> {
    let headers_end = find_headers_end(buf).ok_or(ParseError::Incomplete)?;

    let head = std::str::from_utf8(&buf[..headers_end])
        .map_err(|_| ParseError::InvalidEncoding)?;
    let mut lines = head.split("\r\n");

    let status_line = lines.next().ok_or(ParseError::InvalidStatusLine)?;
    let mut parts = status_line.splitn(3, ' ');

    let version = parts.next().ok_or(ParseError::InvalidStatusLine)?;
    if !version.starts_with("HTTP/") {
        return Err(ParseError::InvalidStatusLine);
    }

    let status = parts
        .next()
        .and_then(|code| code.parse::<u16>().ok())
        .ok_or(ParseError::InvalidStatusLine)?;
    let reason = parts.next().unwrap_or_default();

    let headers = parse_headers(lines)?;

    let parsed = ResponseHead {
        version: version.to_string(),
        status,
        reason: reason.to_string(),
        headers,
    };

    Ok((parsed, headers_end + 4))
}

fn parse_headers<'a>(lines: impl Iterator<Item = &'a str>) -> Result<Headers, ParseError> {
    let mut headers = Headers::new();

    for line in lines {
        if line.is_empty() {
            continue;
        }

        let (key, value) = line.split_once(':').ok_or(ParseError::InvalidHeader)?;
        headers.insert(key.trim(), value.trim());
    }

    Ok(headers)
}
