//! Maps request targets onto files under the document root.

use std::io;
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Outcome of resolving a request target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A regular file inside the document root
    Found(PathBuf),
    /// Nothing servable at the resolved location
    Missing(PathBuf),
    /// The resolved location exists but escapes the document root
    Forbidden(PathBuf),
}

/// The configured document root. Immutable for the life of the server.
#[derive(Debug, Clone)]
pub struct DocumentRoot {
    root: PathBuf,
}

impl DocumentRoot {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Location a target maps to, before any filesystem access.
    ///
    /// "/" becomes "/index.html". The target is appended to the root as a
    /// string; a root ending in "/" followed by a target starting with "/"
    /// collapses to one separator.
    pub fn requested_path(&self, target: &str) -> PathBuf {
        let target = if target == "/" { "/index.html" } else { target };
        let root = self.root.to_string_lossy();

        let joined = match (root.ends_with('/'), target.strip_prefix('/')) {
            (true, Some(rest)) => format!("{root}{rest}"),
            _ => format!("{root}{target}"),
        };

        PathBuf::from(joined)
    }

    /// Resolves a target and checks that it exists inside the root.
    pub async fn resolve(&self, target: &str) -> Result<Resolution> {
        let path = self.requested_path(target);

        let metadata = match tokio::fs::metadata(&path).await {
            Ok(metadata) => metadata,
            Err(e) if is_absent(&e) => return Ok(Resolution::Missing(path)),
            Err(source) => return Err(Error::Resolution { path, source }),
        };

        let canonical_root = tokio::fs::canonicalize(&self.root)
            .await
            .map_err(|source| Error::Resolution { path: self.root.clone(), source })?;
        let canonical = tokio::fs::canonicalize(&path)
            .await
            .map_err(|source| Error::Resolution { path: path.clone(), source })?;

        if !canonical.starts_with(&canonical_root) {
            tracing::warn!(
                path = %path.display(),
                root = %canonical_root.display(),
                "Rejected target outside document root"
            );
            return Ok(Resolution::Forbidden(path));
        }

        if metadata.is_dir() {
            return Ok(Resolution::Missing(path));
        }

        Ok(Resolution::Found(path))
    }
}

/// Lookup failures that mean nothing servable is at the path, e.g. a
/// component that is a regular file rather than a directory.
fn is_absent(e: &io::Error) -> bool {
    matches!(
        e.kind(),
        io::ErrorKind::NotFound | io::ErrorKind::NotADirectory | io::ErrorKind::InvalidInput
    )
}
