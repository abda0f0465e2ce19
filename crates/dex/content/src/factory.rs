//! Content factory for building explorer inputs from a data directory.

use std::path::{Path, PathBuf};

use dex_core::RecordStore;

use crate::config::ExplorerConfig;
use crate::loaders::{CatalogLoader, ConfigLoader, FilterLoader, FilterPreset, LoadResult};

/// Content factory that loads all explorer content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── explorer.toml      (optional)
/// ├── stats.csv
/// └── filters/
///     ├── fast_fire.toml
///     └── no_legendaries.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const CONFIG_FILE: &'static str = "explorer.toml";
    const PRESET_EXTENSIONS: [&'static str; 2] = ["ron", "toml"];

    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load `explorer.toml`, or the defaults when the file does not exist.
    pub fn load_config(&self) -> LoadResult<ExplorerConfig> {
        let path = self.data_dir.join(Self::CONFIG_FILE);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No explorer config, using defaults");
            return Ok(ExplorerConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load the catalog named by the configuration.
    pub fn load_catalog(&self, config: &ExplorerConfig) -> LoadResult<RecordStore> {
        let path = self.data_dir.join(&config.catalog);
        CatalogLoader::load(&path)
    }

    /// Load a preset by name (file stem), trying `.ron` before `.toml`.
    pub fn load_preset(&self, config: &ExplorerConfig, name: &str) -> LoadResult<FilterPreset> {
        let dir = self.data_dir.join(&config.presets);
        let path = Self::PRESET_EXTENSIONS
            .iter()
            .map(|ext| dir.join(format!("{name}.{ext}")))
            .find(|path| path.is_file())
            .ok_or_else(|| anyhow::anyhow!("No preset named '{}' in {}", name, dir.display()))?;
        FilterLoader::load(&path)
    }

    /// Names of the available presets, sorted. A missing directory has none.
    pub fn list_presets(&self, config: &ExplorerConfig) -> LoadResult<Vec<String>> {
        let dir = self.data_dir.join(&config.presets);
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let entries = std::fs::read_dir(&dir)
            .map_err(|e| anyhow::anyhow!("Failed to read directory {}: {}", dir.display(), e))?;

        let mut names = Vec::new();
        for entry in entries {
            let path = entry
                .map_err(|e| anyhow::anyhow!("Failed to read directory {}: {}", dir.display(), e))?
                .path();
            let known = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| Self::PRESET_EXTENSIONS.contains(&ext));
            if let (true, Some(stem)) = (known, path.file_stem().and_then(|s| s.to_str())) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        names.dedup();
        Ok(names)
    }
}
