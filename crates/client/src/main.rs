//! Creature catalog explorer binary.
//!
//! # Examples
//!
//! ```bash
//! # Fire types faster than 80, fastest first
//! dex list -g "include:Type 1:equals:Fire; include:Speed:>:80" --sort Speed --desc
//!
//! # Every creature fused with #25 as the head
//! dex list --fuse 25 --role head --sort BST
//! ```

use anyhow::Result;
use clap::Parser;
use dex_client::{Cli, ClientConfig, app};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ClientConfig::from_env();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    app::run(cli, &config, &mut out)
}
