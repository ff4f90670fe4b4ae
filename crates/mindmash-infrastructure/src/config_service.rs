//! Loads the chat configuration from `config.toml`.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use mindmash_core::config::ChatConfig;
use mindmash_core::error::Result;

use crate::paths::MindmashPaths;

/// Resolves and reads the chat configuration.
///
/// A missing file is not an error: the built-in timings are used instead.
/// A present but invalid file is reported so typos don't go unnoticed.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: Option<PathBuf>,
}

impl ConfigService {
    /// Uses the platform config directory.
    pub fn new() -> Self {
        Self {
            path: MindmashPaths::config_file().ok(),
        }
    }

    /// Uses an explicit file.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn load(&self) -> Result<ChatConfig> {
        let Some(path) = &self.path else {
            tracing::debug!(target: "mindmash::config", "No config directory, using defaults");
            return Ok(ChatConfig::default());
        };

        match std::fs::read_to_string(path) {
            Ok(content) => {
                let config = ChatConfig::from_toml_str(&content)?;
                tracing::info!(target: "mindmash::config", path = %path.display(), "Loaded config");
                Ok(config)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(target: "mindmash::config", path = %path.display(), "Config file not found, using defaults");
                Ok(ChatConfig::default())
            }
            Err(e) => Err(e.into()),
        }
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}
