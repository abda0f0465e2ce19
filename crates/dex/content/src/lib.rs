//! Data-driven catalog content and loaders.
//!
//! This crate turns files into `dex-core` values:
//! - The creature catalog (comma-delimited, one header row)
//! - Filter presets (RON or TOML)
//! - Explorer configuration (TOML)
//!
//! Nothing here is needed by the core itself; front ends use these loaders to
//! build the inputs of [`dex_core::render`].

pub mod config;
pub mod factory;
pub mod loaders;

pub use config::ExplorerConfig;
pub use factory::ContentFactory;
pub use loaders::{CatalogLoader, ConfigLoader, FilterLoader, FilterPreset, LoadResult};
