//! Explorer configuration loader.

use std::path::Path;

use crate::config::ExplorerConfig;
use crate::loaders::{LoadResult, read_file};

/// Loader for explorer configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file. Missing keys take their defaults.
    pub fn load(path: &Path) -> LoadResult<ExplorerConfig> {
        let content = read_file(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> LoadResult<ExplorerConfig> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))
    }
}
