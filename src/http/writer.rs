use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::headers::Headers;
use crate::http::request::{HTTP_VERSION, Request};
use crate::http::response::Response;

/// Explicit end-of-message marker appended after every response body.
pub const END_OF_MESSAGE: &[u8] = b"\r\n\r\n";

fn write_headers(buf: &mut Vec<u8>, headers: &Headers) {
    for (k, v) in headers.iter() {
        buf.extend_from_slice(k.as_bytes());
        buf.extend_from_slice(b": ");
        buf.extend_from_slice(v.as_bytes());
        buf.extend_from_slice(b"\r\n");
    }
}

/// `METHOD PATH HTTP/1.1\r\nHost: <host>\r\n\r\n`
pub fn serialize_request(req: &Request) -> Vec<u8> {
    let mut buf = Vec::new();

    let path = if req.path.is_empty() { "/" } else { &req.path };
    buf.extend_from_slice(format!("{} {} {}\r\n", req.method, path, req.version).as_bytes());

    write_headers(&mut buf, &req.headers);
    buf.extend_from_slice(b"\r\n");

    buf
}

pub fn serialize_response(resp: &Response) -> Vec<u8> {
    let mut buf = Vec::new();

    // Status line
    let status_line = format!(
        "{} {} {}\r\n",
        HTTP_VERSION,
        resp.status.as_u16(),
        resp.status.reason_phrase()
    );
    buf.extend_from_slice(status_line.as_bytes());

    write_headers(&mut buf, &resp.headers);

    // Header/body separator
    buf.extend_from_slice(b"\r\n");

    if let Some(body) = &resp.body {
        buf.extend_from_slice(body);
    }

    buf.extend_from_slice(END_OF_MESSAGE);

    buf
}

/// A serialized message and how much of it has reached the stream.
pub struct MessageWriter {
    buffer: Vec<u8>,
    written: usize,
}

impl MessageWriter {
    pub fn new(buffer: Vec<u8>) -> Self {
        Self { buffer, written: 0 }
    }

    pub fn for_response(response: &Response) -> Self {
        Self::new(serialize_response(response))
    }

    pub fn for_request(request: &Request) -> Self {
        Self::new(serialize_request(request))
    }

    pub fn bytes(&self) -> &[u8] {
        &self.buffer
    }

    pub async fn write_to_stream<W>(&mut self, stream: &mut W) -> std::io::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        while self.written < self.buffer.len() {
            let n = stream.write(&self.buffer[self.written..]).await?;

            if n == 0 {
                return Err(std::io::Error::new(
                    std::io::ErrorKind::WriteZero,
                    "connection closed while writing",
                ));
            }

            self.written += n;
        }

        stream.flush().await
    }
}
