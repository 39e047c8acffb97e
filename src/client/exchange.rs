//! One request/response exchange over a fresh connection.

use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite};
use tokio::time::timeout;
use tracing::{debug, info, trace};

use crate::client::connector;
use crate::client::target::Target;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::headers::Headers;
use crate::http::parser::{ParseError, find_headers_end, parse_response_head};
use crate::http::request::{Method, Request};
use crate::http::writer::{END_OF_MESSAGE, MessageWriter};
use crate::net;

/// A response as observed by the client.
#[derive(Debug, Clone)]
pub struct ClientResponse {
    pub version: String,
    pub status: u16,
    pub reason: String,
    pub headers: Headers,
    pub body: Vec<u8>,
    /// Every byte received, head included
    pub raw: Vec<u8>,
}

impl ClientResponse {
    /// Recovers a response from the bytes accumulated for `method`.
    ///
    /// The body is bounded by Content-Length when present, empty for HEAD,
    /// and otherwise runs to the end of the data minus the trailing
    /// end-of-message marker.
    pub fn parse(raw: Vec<u8>, method: &Method) -> std::result::Result<Self, ParseError> {
        if raw.is_empty() {
            return Err(ParseError::Empty);
        }

        let (head, head_len) = parse_response_head(&raw)?;
        let rest = &raw[head_len..];

        let body = if *method == Method::HEAD {
            Vec::new()
        } else if let Some(expected) = head.headers.content_length() {
            if rest.len() < expected {
                return Err(ParseError::Truncated {
                    expected,
                    received: rest.len(),
                });
            }
            rest[..expected].to_vec()
        } else {
            rest.strip_suffix(END_OF_MESSAGE).unwrap_or(rest).to_vec()
        };

        Ok(Self {
            version: head.version,
            status: head.status,
            reason: head.reason,
            headers: head.headers,
            body,
            raw,
        })
    }

    pub fn status_line(&self) -> String {
        format!("{} {} {}", self.version, self.status, self.reason)
    }
}

/// Bytes sent and the response recovered for one exchange.
#[derive(Debug, Clone)]
pub struct Exchange {
    pub request: Vec<u8>,
    pub response: ClientResponse,
}

/// How the end of the response is detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Framing {
    /// Head not seen yet
    Pending,
    /// Complete once this many bytes have arrived
    Length(usize),
    /// Complete on close or inactivity timeout
    UntilIdle,
}

pub struct HttpClient {
    config: ClientConfig,
}

impl HttpClient {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Connects, sends one request, reads one response and closes.
    pub async fn request(&self, target: &Target) -> Result<Exchange> {
        let request = Request::new(target.method.clone(), target.host.clone(), target.path.clone());

        debug!(
            host = %target.host,
            port = target.port,
            method = %request.method,
            path = %request.path,
            "Sending request"
        );

        let mut stream = connector::connect(&target.host, target.port, &self.config).await?;
        let outcome = self.exchange(&mut stream, &request).await;

        if let Err(e) = net::close(stream) {
            debug!(error = %e, "Shutdown after exchange failed");
        }

        let (sent, raw) = outcome?;
        let response = ClientResponse::parse(raw, &request.method)?;

        info!(
            host = %target.host,
            method = %request.method,
            path = %request.path,
            status = response.status,
            bytes = response.raw.len(),
            "Received response"
        );

        Ok(Exchange {
            request: sent,
            response,
        })
    }

    /// Writes `request` to `stream` and collects the raw response bytes.
    pub async fn exchange<S>(&self, stream: &mut S, request: &Request) -> Result<(Vec<u8>, Vec<u8>)>
    where
        S: AsyncRead + AsyncWrite + Unpin,
    {
        let mut writer = MessageWriter::for_request(request);
        writer.write_to_stream(stream).await?;
        trace!("Request sent");

        let raw = self.read_response(stream, &request.method).await?;
        Ok((writer.bytes().to_vec(), raw))
    }

    async fn read_response<S>(&self, stream: &mut S, method: &Method) -> Result<Vec<u8>>
    where
        S: AsyncRead + Unpin,
    {
        let mut buffer = BytesMut::with_capacity(self.config.read_chunk_size);
        let mut framing = Framing::Pending;

        loop {
            if framing == Framing::Pending {
                framing = detect_framing(&buffer, method);
            }

            if let Framing::Length(total) = framing {
                if buffer.len() >= total {
                    break;
                }
            }

            buffer.reserve(self.config.read_chunk_size);
            let read = timeout(self.config.read_timeout(), stream.read_buf(&mut buffer)).await;
            match read {
                Err(_) => {
                    trace!(bytes = buffer.len(), "Read went idle, response complete");
                    break;
                }
                Ok(Ok(0)) => {
                    trace!(bytes = buffer.len(), "Peer closed, response complete");
                    break;
                }
                Ok(Ok(_)) => {}
                Ok(Err(e)) => return Err(e.into()),
            }
        }

        Ok(buffer.to_vec())
    }
}

fn detect_framing(buf: &[u8], method: &Method) -> Framing {
    let Some(end) = find_headers_end(buf) else {
        return Framing::Pending;
    };
    let head_len = end + 4;

    if *method == Method::HEAD {
        return Framing::Length(head_len);
    }

    match parse_response_head(buf) {
        Ok((head, _)) => match head.headers.content_length() {
            Some(n) => Framing::Length(head_len + n),
            None => Framing::UntilIdle,
        },
        Err(_) => Framing::UntilIdle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn framing_waits_for_head() {
        assert_eq!(detect_framing(b"HTTP/1.1 200 OK\r\n", &Method::GET), Framing::Pending);
    }

    #[test]
    fn framing_uses_content_length() {
        let buf = b"HTTP/1.1 200 OK\r\nContent-Length: 5\r\n\r\nhe";
        assert_eq!(detect_framing(buf, &Method::GET), Framing::Length(buf.len() - 2 + 5));
    }

    #[test]
    fn head_response_ends_at_head() {
        let buf = b"HTTP/1.1 200 OK\r\nContent-Length: 5\r\n\r\n";
        assert_eq!(detect_framing(buf, &Method::HEAD), Framing::Length(buf.len()));
    }
}
