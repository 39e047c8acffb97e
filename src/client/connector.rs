//! Opens the outgoing connection for one exchange.

use tokio::net::{TcpSocket, TcpStream};
use tokio::time::timeout;
use tracing::{debug, trace};

use crate::config::ClientConfig;
use crate::error::{Error, Result};

/// Resolves `host:port` and connects to the first address that accepts.
pub async fn connect(host: &str, port: u16, cfg: &ClientConfig) -> Result<TcpStream> {
    let addr = format!("{}:{}", host, port);

    let candidates: Vec<_> = tokio::net::lookup_host(&addr)
        .await
        .map_err(|_| Error::Unresolvable(addr.clone()))?
        .collect();

    if candidates.is_empty() {
        return Err(Error::Unresolvable(addr));
    }

    let mut last_error = None;

    for candidate in candidates {
        let socket = if candidate.is_ipv4() {
            TcpSocket::new_v4()?
        } else {
            TcpSocket::new_v6()?
        };
        socket.set_reuseaddr(cfg.reuse_address)?;

        match timeout(cfg.connect_timeout(), socket.connect(candidate)).await {
            Ok(Ok(stream)) => {
                trace!(addr = %candidate, "Connected");
                return Ok(stream);
            }
            Ok(Err(e)) => {
                debug!(addr = %candidate, error = %e, "Connect attempt failed");
                last_error = Some(Error::Connection { addr: candidate.to_string(), source: e });
            }
            Err(_) => {
                debug!(addr = %candidate, "Connect attempt timed out");
                last_error = Some(Error::ConnectTimeout(candidate.to_string()));
            }
        }
    }

    Err(last_error.unwrap_or(Error::Unresolvable(addr)))
}
