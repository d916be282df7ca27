//! Library exports for carpark-cli.
//!
//! Exposes the CLI structure, commands and renderers so integration tests and
//! tooling can drive them without spawning the binary.

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;
pub mod utils;

pub use cli::Cli;
