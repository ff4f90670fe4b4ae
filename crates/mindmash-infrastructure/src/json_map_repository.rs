//! JSON file-backed map repository.

use std::path::PathBuf;

use mindmash_core::error::{MindmashError, Result};
use mindmash_core::map::{MapData, MapRepository};

use crate::paths::MindmashPaths;
use crate::storage::AtomicJsonFile;

/// Stores a collaboration map as a single JSON document.
pub struct JsonMapRepository {
    file: AtomicJsonFile,
}

impl JsonMapRepository {
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            file: AtomicJsonFile::new(path),
        }
    }

    /// Repository for `mindmash-map.json` in the current directory.
    pub fn in_current_dir() -> Self {
        Self::with_path(MindmashPaths::default_map_file())
    }
}

#[async_trait::async_trait]
impl MapRepository for JsonMapRepository {
    async fn load(&self) -> Result<MapData> {
        let path = self.file.path().display().to_string();
        let content = self.file.read().await?.ok_or_else(|| {
            MindmashError::io(format!("Map file not found: {path} (kind: NotFound)"))
        })?;

        let map = MapData::from_json(&content).inspect_err(|e| {
            tracing::warn!(target: "mindmash::map", %path, error = %e, "Rejected map file");
        })?;

        tracing::debug!(target: "mindmash::map", %path, nodes = map.nodes.len(), "Map file parsed");
        Ok(map)
    }

    async fn save(&self, map: &MapData) -> Result<()> {
        self.file.save(map).await?;
        tracing::info!(
            target: "mindmash::map",
            path = %self.file.path().display(),
            "Map saved"
        );
        Ok(())
    }
}
