//! File-backed store for uploaded cover images
//!
//! Images are kept in a flat directory keyed by the upload's file name.
//! A same-named upload silently overwrites the previous file.

use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Cover image store rooted at a single directory
#[derive(Debug, Clone)]
pub struct ImageStore {
    root: PathBuf,
}

impl ImageStore {
    /// Create a new image store rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory the images live in
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the image directory if it does not exist
    pub async fn ensure_dir(&self) -> Result<()> {
        tokio::fs::create_dir_all(&self.root).await?;
        Ok(())
    }

    /// Persist image bytes under the upload's file name
    ///
    /// Only the final path component of the client-supplied name is used,
    /// so the write cannot escape the image directory. An existing file
    /// with the same name is overwritten. Returns the stored file name.
    pub async fn save(&self, filename: &str, bytes: &[u8]) -> Result<String> {
        let name = Path::new(filename)
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| anyhow::anyhow!("Invalid image file name: {}", filename))?
            .to_string();

        self.ensure_dir().await?;
        tokio::fs::write(self.root.join(&name), bytes).await?;

        info!(name = %name, "Stored cover image");
        Ok(name)
    }

    /// Remove a stored image, best-effort
    pub async fn remove(&self, filename: &str) {
        if let Err(e) = tokio::fs::remove_file(self.root.join(filename)).await {
            warn!(name = %filename, "Failed to remove cover image: {}", e);
        }
    }
}
