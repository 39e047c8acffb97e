//! Socket teardown shared by both roles.

use std::net::Shutdown;

use tokio::net::TcpStream;

/// Shuts down both directions of `stream`, then closes it.
pub fn close(stream: TcpStream) -> std::io::Result<()> {
    let stream = stream.into_std()?;
    stream.shutdown(Shutdown::Both)
}
