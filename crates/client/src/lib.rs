//! Command line front end for the creature catalog.
//!
//! The client plays the part of the UI layer around `dex-core`: it turns
//! arguments into rule groups, a fusion request and a sort, asks the core for
//! the rows, and prints them.
//!
//! # Separation of Concerns
//!
//! - **args**: argument grammar, including the compact rule syntax
//! - **app**: loads content and dispatches commands
//! - **table**: text and JSON rendering of rows

pub mod app;
pub mod args;
pub mod config;
pub mod table;

pub use args::{Cli, Command, ListArgs};
pub use config::ClientConfig;
