//! Configuration system for carpark.
//!
//! Configuration is merged from several YAML files plus environment
//! variables, and carries the seed data the stores start with.
//!
//! # Configuration Precedence
//!
//! Highest to lowest:
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`CARPARK_*`)
//! 3. An explicit file (via `ConfigBuilder::with_config_file`)
//! 4. Private project config (`carpark.local.yaml`)
//! 5. Project config (`carpark.yaml`)
//! 6. User config (`~/.carpark/config.yaml`)
//! 7. Built-in defaults
//!
//! # Examples
//!
//! Loading from a specific directory:
//!
//! ```no_run
//! use carpark::config::ConfigBuilder;
//!
//! let config = ConfigBuilder::new()
//!     .with_working_dir("/path/to/site")
//!     .build()
//!     .unwrap();
//! ```
//!
//! Seed data in `carpark.yaml`:
//!
//! ```yaml
//! output_format: table
//! seed:
//!   occupancy:
//!     - date: 2023-01-01
//!       reserved: 9
//!   reservations:
//!     - name: Ian Richards
//!       from: 2023-01-01
//!       to: 2023-01-06
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(test)]
mod proptests;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{default_data_dir, ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Config, OutputFormat, SeedConfig, SeedOccupancy, SeedReservation};
pub use validator::ConfigValidator;
