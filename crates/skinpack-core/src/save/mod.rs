//! Saving generated archives to user storage.

mod sanitize;

pub use sanitize::sanitize_filename;

use anyhow::{Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Persists bytes under a suggested name and returns where they ended up.
pub trait SaveTarget: Send + Sync {
    fn save(&self, bytes: &[u8], filename: &str) -> Result<PathBuf>;
}

/// Saves into a directory. The data is written to a temp file in the same
/// directory first and renamed into place, so the final name never holds a
/// partial archive. An existing file with the same name is replaced.
#[derive(Debug, Clone)]
pub struct DirectoryTarget {
    dir: PathBuf,
}

impl DirectoryTarget {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl SaveTarget for DirectoryTarget {
    fn save(&self, bytes: &[u8], filename: &str) -> Result<PathBuf> {
        let name = sanitize_filename(filename)
            .with_context(|| format!("unusable file name: {filename:?}"))?;
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("create dir: {}", self.dir.display()))?;

        let final_path = self.dir.join(&name);
        let mut tmp = tempfile::Builder::new()
            .prefix(".skinpack-")
            .suffix(".part")
            .tempfile_in(&self.dir)
            .with_context(|| format!("create temp file in {}", self.dir.display()))?;
        tmp.write_all(bytes).context("write archive")?;
        tmp.flush().context("flush archive")?;
        tmp.persist(&final_path)
            .with_context(|| format!("rename into {}", final_path.display()))?;

        tracing::info!(path = %final_path.display(), bytes = bytes.len(), "archive saved");
        Ok(final_path)
    }
}
