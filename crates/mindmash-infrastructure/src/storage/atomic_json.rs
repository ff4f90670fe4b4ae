//! Atomic JSON file writes.
//!
//! Data is written to a hidden temp file next to the target, flushed to disk,
//! then renamed over the target, so readers never see a half-written file.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use mindmash_core::error::{MindmashError, Result};
use serde::Serialize;
use tokio::fs::{self, File};
use tokio::io::AsyncWriteExt;

/// A handle to a JSON file replaced atomically on save.
#[derive(Debug, Clone)]
pub struct AtomicJsonFile {
    path: PathBuf,
}

impl AtomicJsonFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the raw file content.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(content))`: file exists
    /// - `Ok(None)`: file doesn't exist
    /// - `Err`: any other read failure
    pub async fn read(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Serializes `data` as pretty JSON and replaces the file atomically.
    pub async fn save<T: Serialize + ?Sized>(&self, data: &T) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(data)?;

        let tmp_path = self.temp_path()?;
        let mut tmp_file = File::create(&tmp_path).await?;
        tmp_file.write_all(json.as_bytes()).await?;
        tmp_file.sync_all().await?;
        drop(tmp_file);

        if let Err(e) = fs::rename(&tmp_path, &self.path).await {
            let _ = fs::remove_file(&tmp_path).await;
            return Err(e.into());
        }

        Ok(())
    }

    fn temp_path(&self) -> Result<PathBuf> {
        let file_name = self
            .path
            .file_name()
            .ok_or_else(|| MindmashError::io("Path has no file name"))?;
        let tmp_name = format!(".{}.tmp", file_name.to_string_lossy());
        Ok(self.path.with_file_name(tmp_name))
    }
}
