use std::net::SocketAddr;

use tokio::net::{TcpListener, TcpSocket};
use tracing::{error, info, warn};

use crate::config::ServerConfig;
use crate::error::{Error, Result};
use crate::server::connection::{Connection, ReadLimits};
use crate::server::handler::Responder;

/// Only one pending connection is admitted while the current one is serviced.
const BACKLOG: u32 = 1;

/// A bound listener that services connections one at a time.
pub struct Server {
    listener: TcpListener,
    responder: Responder,
    limits: ReadLimits,
}

impl Server {
    pub async fn bind(cfg: &ServerConfig) -> Result<Self> {
        let listen_addr = cfg.listen_addr();
        let addr = tokio::net::lookup_host(&listen_addr)
            .await
            .map_err(|source| Error::Connection { addr: listen_addr.clone(), source })?
            .next()
            .ok_or_else(|| Error::Unresolvable(listen_addr.clone()))?;

        let listener = listen(addr)
            .map_err(|source| Error::Connection { addr: addr.to_string(), source })?;

        info!(
            addr = %addr,
            root = %cfg.document_root.display(),
            "Listening"
        );

        Ok(Self {
            listener,
            responder: Responder::from_config(cfg),
            limits: ReadLimits {
                chunk_size: cfg.read_chunk_size,
                max_request_bytes: cfg.max_request_bytes,
            },
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Accepts and fully services one connection before accepting the next.
    /// Per-connection failures are logged; the listener keeps running.
    pub async fn run(self) -> Result<()> {
        loop {
            let (socket, peer) = match self.listener.accept().await {
                Ok(accepted) => accepted,
                Err(e) => {
                    warn!(error = %e, "Accept failed");
                    continue;
                }
            };
            info!("Accepted connection from {}", peer);

            let conn = Connection::new(socket, peer, &self.responder, self.limits);
            if let Err(e) = conn.run().await {
                error!("Connection error from {}: {}", peer, e);
            }
        }
    }
}

fn listen(addr: SocketAddr) -> std::io::Result<TcpListener> {
    let socket = if addr.is_ipv4() {
        TcpSocket::new_v4()?
    } else {
        TcpSocket::new_v6()?
    };
    socket.set_reuseaddr(true)?;
    socket.bind(addr)?;
    socket.listen(BACKLOG)
}

pub async fn run(cfg: &ServerConfig) -> Result<()> {
    Server::bind(cfg).await?.run().await
}
