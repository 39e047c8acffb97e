//! Runtime configuration.
//!
//! Both roles read their settings from an explicit [`Config`] value that is
//! handed to the connection layer at construction time. Values come from the
//! defaults below, optionally overlaid by a YAML file:
//!
//! ```yaml
//! server:
//!   host: 0.0.0.0
//!   port: 8080
//!   document_root: ./public
//! client:
//!   read_timeout_ms: 300
//!   transcript_dir: ./log
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub client: ClientConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host name or address to bind; also echoed in the Host response header
    pub host: String,
    pub port: u16,
    /// Directory all request targets are resolved under
    pub document_root: PathBuf,
    /// Value of the Server response header
    pub server_name: String,
    /// Bytes requested from the socket per read
    pub read_chunk_size: usize,
    /// Upper bound on a request head before the connection is dropped
    pub max_request_bytes: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Inactivity window after which a response is considered complete
    pub read_timeout_ms: u64,
    pub connect_timeout_ms: u64,
    pub read_chunk_size: usize,
    /// Set SO_REUSEADDR on the outgoing socket
    pub reuse_address: bool,
    /// Where request/response transcripts are written, if anywhere
    pub transcript_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 8080,
            document_root: PathBuf::from("."),
            server_name: "minihttp".to_string(),
            read_chunk_size: 1024,
            max_request_bytes: 16 * 1024,
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            read_timeout_ms: 300,
            connect_timeout_ms: 5000,
            read_chunk_size: 4096,
            reuse_address: true,
            transcript_dir: None,
        }
    }
}

impl ServerConfig {
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl ClientConfig {
    pub fn read_timeout(&self) -> Duration {
        Duration::from_millis(self.read_timeout_ms)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }
}

impl Config {
    /// Loads configuration from a YAML file, or the defaults when no path is
    /// given.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;

        Self::from_yaml(&text)
            .with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn from_yaml(text: &str) -> anyhow::Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(text)?)
    }
}
