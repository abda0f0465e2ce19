//! Client display configuration.
use std::env;

/// Output settings that do not belong to the catalog data directory.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Cells wider than this are cut and end with `…`.
    pub max_cell_width: usize,
    /// Append the external link column to text tables.
    pub show_links: bool,
}

impl ClientConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DEX_MAX_CELL_WIDTH` - Widest cell in text tables (default: 24, minimum: 4)
    /// - `DEX_SHOW_LINKS` - Print the link column (default: true; accepts true/false, 1/0, yes/no, on/off)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(width) = read_env::<usize>("DEX_MAX_CELL_WIDTH") {
            config.max_cell_width = width.max(4);
        }

        if let Some(show) = read_env_bool("DEX_SHOW_LINKS") {
            config.show_links = show;
        }

        config
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            max_cell_width: 24,
            show_links: true,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn read_env_bool(key: &str) -> Option<bool> {
    parse_bool(&env::var(key).ok()?)
}

fn parse_bool(text: &str) -> Option<bool> {
    match text.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
