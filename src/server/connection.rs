use std::net::SocketAddr;

use bytes::BytesMut;
use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::http::parser::{ParseError, find_headers_end, parse_request};
use crate::http::request::Request;
use crate::http::writer::MessageWriter;
use crate::net;
use crate::server::handler::Responder;

/// Read limits for inbound requests.
#[derive(Debug, Clone, Copy)]
pub struct ReadLimits {
    pub chunk_size: usize,
    pub max_request_bytes: usize,
}

/// One accepted connection, serviced for exactly one exchange.
pub struct Connection<'a> {
    stream: TcpStream,
    peer: SocketAddr,
    buffer: BytesMut,
    limits: ReadLimits,
    responder: &'a Responder,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Dispatching(Request),
    Writing(MessageWriter),
    Closed,
}

impl<'a> Connection<'a> {
    pub fn new(stream: TcpStream, peer: SocketAddr, responder: &'a Responder, limits: ReadLimits) -> Self {
        Self {
            stream,
            peer,
            buffer: BytesMut::with_capacity(limits.chunk_size),
            limits,
            responder,
            state: ConnectionState::Reading,
        }
    }

    /// Drives the connection to `Closed`: read one request, respond once,
    /// then shut the stream down.
    pub async fn run(mut self) -> Result<()> {
        let outcome = self.drive().await;

        if let Err(e) = net::close(self.stream) {
            debug!(peer = %self.peer, error = %e, "Shutdown after exchange failed");
        }

        outcome
    }

    async fn drive(&mut self) -> Result<()> {
        loop {
            let state = std::mem::replace(&mut self.state, ConnectionState::Closed);

            self.state = match state {
                ConnectionState::Reading => match self.read_request().await {
                    Ok(Some(req)) => ConnectionState::Dispatching(req),
                    Ok(None) => {
                        debug!(peer = %self.peer, "Peer closed before sending a request");
                        ConnectionState::Closed
                    }
                    Err(Error::Protocol(e)) => {
                        // Malformed requests get no response.
                        warn!(peer = %self.peer, error = %e, "Dropping malformed request");
                        ConnectionState::Closed
                    }
                    Err(e) => return Err(e),
                },

                ConnectionState::Dispatching(req) => {
                    let response = self.responder.respond(&req).await;
                    info!(
                        peer = %self.peer,
                        method = %req.method,
                        path = %req.path,
                        status = response.status.as_u16(),
                        "Responded"
                    );
                    ConnectionState::Writing(MessageWriter::for_response(&response))
                }

                ConnectionState::Writing(mut writer) => {
                    writer.write_to_stream(&mut self.stream).await?;
                    ConnectionState::Closed
                }

                ConnectionState::Closed => break,
            };
        }

        Ok(())
    }

    /// Reads until the blank line ending the request head.
    ///
    /// Returns `None` when the peer closes without sending anything. If the
    /// peer closes mid-head, whatever arrived is parsed as the request.
    pub async fn read_request(&mut self) -> Result<Option<Request>> {
        loop {
            if find_headers_end(&self.buffer).is_some() {
                return Ok(Some(parse_request(&self.buffer)?));
            }

            if self.buffer.len() >= self.limits.max_request_bytes {
                return Err(ParseError::TooLarge(self.limits.max_request_bytes).into());
            }

            self.buffer.reserve(self.limits.chunk_size);
            let n = self.stream.read_buf(&mut self.buffer).await?;

            if n == 0 {
                if self.buffer.is_empty() {
                    return Ok(None);
                }
                return Ok(Some(parse_request(&self.buffer)?));
            }
        }
    }
}
