use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::error::Result;

/// Writes `request.log` and `response.log` into a new timestamped folder
/// under `dir` and returns that folder.
pub async fn record(dir: &Path, request: &[u8], response: &[u8]) -> Result<PathBuf> {
    let folder = dir.join(Utc::now().format("%Y%m%dT%H%M%S%.6fZ").to_string());

    tokio::fs::create_dir_all(&folder).await?;
    tokio::fs::write(folder.join("request.log"), request).await?;
    tokio::fs::write(folder.join("response.log"), response).await?;

    tracing::debug!(folder = %folder.display(), "Transcript written");
    Ok(folder)
}
