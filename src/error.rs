//! Error taxonomy shared by the client and server roles.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::http::parser::ParseError;

/// Errors that can occur while exchanging HTTP messages.
#[derive(Debug, Error)]
pub enum Error {
    /// Connecting to or binding an address failed.
    #[error("connection error on {addr}: {source}")]
    Connection {
        addr: String,
        #[source]
        source: io::Error,
    },

    /// Host name lookup produced no usable address.
    #[error("could not resolve {0}")]
    Unresolvable(String),

    /// Connect did not complete within the configured window.
    #[error("timed out connecting to {0}")]
    ConnectTimeout(String),

    /// The peer sent something that is not a usable HTTP message.
    #[error("protocol error: {0}")]
    Protocol(#[from] ParseError),

    /// Looking up or reading a resource under the document root failed.
    #[error("failed to resolve {}: {source}", path.display())]
    Resolution {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An image resource could not be decoded or re-encoded.
    #[error("failed to transcode {}: {source}", path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
