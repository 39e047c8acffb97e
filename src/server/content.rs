//! Loads response bodies from disk.
//!
//! Images (any extension containing "jpg" or "png", ignoring case) are
//! decoded and re-encoded as PNG rather than sent as stored. Everything else
//! is sent byte for byte.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::ImageFormat;

use crate::error::{Error, Result};

pub fn is_image(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .is_some_and(|ext| ext.contains("jpg") || ext.contains("png"))
}

/// Reads the body for a resolved file.
pub async fn load(path: &Path) -> Result<Vec<u8>> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| Error::Resolution { path: path.to_path_buf(), source })?;

    if !is_image(path) {
        return Ok(bytes);
    }

    let owned: PathBuf = path.to_path_buf();
    tokio::task::spawn_blocking(move || {
        transcode_to_png(&bytes).map_err(|source| Error::Image { path: owned, source })
    })
    .await
    .map_err(|e| Error::Io(std::io::Error::other(e)))?
}

/// Decodes an image in any supported format and encodes it as PNG.
pub fn transcode_to_png(bytes: &[u8]) -> std::result::Result<Vec<u8>, image::ImageError> {
    let img = image::load_from_memory(bytes)?;

    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png)?;

    Ok(out.into_inner())
}
