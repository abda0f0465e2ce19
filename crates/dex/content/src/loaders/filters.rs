//! Filter preset loader.
//!
//! A preset is a saved [`FilterSpec`]: OR-ed groups of AND-ed rules. Presets
//! are written in RON or TOML; the file extension picks the format.

use std::path::Path;

use dex_core::{FilterSpec, RuleGroup, RuleSpec};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// On-disk shape of a filter preset.
///
/// TOML example:
/// ```toml
/// description = "Fast fire types"
///
/// [[groups]]
/// rules = [
///     { action = "include", field = "Type 1", condition = "equals", value = "Fire" },
///     { action = "include", field = "Speed", condition = "greater_than", value = "80" },
/// ]
/// ```
///
/// RON example:
/// ```ron
/// (
///     description: Some("No legendaries"),
///     groups: [
///         (rules: [(action: Some("exclude"), field: Some("Legendary"),
///                   condition: Some("equals"), value: Some("True"))]),
///     ],
/// )
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterPreset {
    pub description: Option<String>,
    pub groups: Vec<PresetGroup>,
}

/// One AND-group of a preset.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresetGroup {
    pub rules: Vec<RuleSpec>,
}

impl FilterPreset {
    /// Convert into the core filter spec. Incomplete rules are kept; the
    /// filter engine ignores them at evaluation time.
    pub fn into_filter(self) -> FilterSpec {
        self.groups
            .into_iter()
            .map(|group| group.rules.into_iter().collect::<RuleGroup>())
            .collect()
    }
}

/// Loader for filter presets.
pub struct FilterLoader;

impl FilterLoader {
    /// Load a preset from a `.ron` or `.toml` file.
    pub fn load(path: &Path) -> LoadResult<FilterPreset> {
        let content = read_file(path)?;
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let preset = match extension.as_deref() {
            Some("ron") => Self::from_ron(&content),
            Some("toml") => Self::from_toml(&content),
            _ => Err(anyhow::anyhow!(
                "Unsupported preset format (expected .ron or .toml)"
            )),
        }
        .map_err(|e| anyhow::anyhow!("Failed to load preset {}: {}", path.display(), e))?;

        tracing::debug!(
            path = %path.display(),
            groups = preset.groups.len(),
            "Loaded filter preset"
        );
        Ok(preset)
    }

    pub fn from_ron(content: &str) -> LoadResult<FilterPreset> {
        ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse preset RON: {}", e))
    }

    pub fn from_toml(content: &str) -> LoadResult<FilterPreset> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse preset TOML: {}", e))
    }
}
