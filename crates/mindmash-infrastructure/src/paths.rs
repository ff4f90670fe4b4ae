//! Path resolution for MindMash files.
//!
//! ```text
//! ~/.config/mindmash/          # Config directory (platform dependent)
//! └── config.toml              # Chat timing configuration
//! ```

use std::path::PathBuf;

use mindmash_core::error::{MindmashError, Result};
use mindmash_core::map::DEFAULT_MAP_FILE;

const APP_DIR: &str = "mindmash";
const CONFIG_FILE: &str = "config.toml";

pub struct MindmashPaths;

impl MindmashPaths {
    /// Returns the MindMash configuration directory.
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| MindmashError::config("Cannot find config directory"))
    }

    /// Returns the default `config.toml` path.
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Default export location for maps: the current directory.
    pub fn default_map_file() -> PathBuf {
        PathBuf::from(DEFAULT_MAP_FILE)
    }
}
