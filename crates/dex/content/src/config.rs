//! Explorer configuration.

use dex_core::{Field, SortSpec};
use serde::{Deserialize, Serialize};

/// Tunable settings of an explorer session, read from `explorer.toml`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    /// Catalog file name, relative to the data directory.
    pub catalog: String,

    /// Directory holding filter presets, relative to the data directory.
    pub presets: String,

    /// Prefix of the per-record link; the record number is appended.
    pub link_base: String,

    /// Column sorted on start-up. `None` keeps catalog order.
    pub sort: Option<Field>,

    /// Start the sort column descending.
    pub descending: bool,
}

impl ExplorerConfig {
    pub const DEFAULT_CATALOG: &'static str = "stats.csv";
    pub const DEFAULT_PRESETS: &'static str = "filters";
    pub const DEFAULT_LINK_BASE: &'static str = "https://www.fusiondex.org/#/";

    /// Initial sort, if a column is configured.
    pub fn initial_sort(&self) -> Option<SortSpec> {
        self.sort.map(|field| SortSpec {
            field,
            ascending: !self.descending,
        })
    }

    /// External link for a record number (base or fused "head.body").
    pub fn link(&self, number: &str) -> String {
        format!("{}{}", self.link_base, number)
    }
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            catalog: Self::DEFAULT_CATALOG.to_string(),
            presets: Self::DEFAULT_PRESETS.to_string(),
            link_base: Self::DEFAULT_LINK_BASE.to_string(),
            sort: None,
            descending: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_sort_follows_direction_flag() {
        let config = ExplorerConfig {
            sort: Some(Field::Bst),
            descending: true,
            ..ExplorerConfig::default()
        };
        assert_eq!(config.initial_sort(), Some(SortSpec::descending(Field::Bst)));
        assert_eq!(ExplorerConfig::default().initial_sort(), None);
    }

    #[test]
    fn links_append_the_record_number() {
        let config = ExplorerConfig::default();
        assert_eq!(config.link("25.1"), "https://www.fusiondex.org/#/25.1");
    }
}
