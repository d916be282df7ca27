//! Layered configuration assembly.

use std::env;
use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::{ConfigLoader, ConfigSource};
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::Result;

/// Builds the effective [`Config`] from every enabled source.
///
/// Sources apply lowest to highest: user config, `carpark.yaml`,
/// `carpark.local.yaml`, an explicit file, environment variables, then
/// programmatic overrides. Each file is validated on its own before merging,
/// and the merged result is validated again.
///
/// # Examples
///
/// ```
/// use carpark::config::{Config, ConfigBuilder, OutputFormat};
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config { output_format: Some(OutputFormat::Csv), ..Default::default() })
///     .build()
///     .unwrap();
///
/// assert_eq!(config.output_format, Some(OutputFormat::Csv));
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    working_dir: Option<PathBuf>,
    data_dir: Option<PathBuf>,
    config_file: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Vec<Config>,
}

impl ConfigBuilder {
    /// Creates a builder that loads every source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Skips the discovered user and project files.
    ///
    /// A file given through [`with_config_file`](Self::with_config_file) is
    /// still loaded.
    #[must_use]
    pub const fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Skips `CARPARK_*` environment overrides.
    #[must_use]
    pub const fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Sets the directory project discovery starts from.
    ///
    /// Defaults to the process working directory.
    #[must_use]
    pub fn with_working_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.working_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Sets the directory the user config is read from.
    #[must_use]
    pub fn with_data_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.data_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Adds an explicit configuration file above the discovered ones.
    #[must_use]
    pub fn with_config_file(mut self, path: impl AsRef<Path>) -> Self {
        self.config_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Adds a programmatic override; later overrides win.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides.push(config);
        self
    }

    /// Loads, merges and validates every enabled source.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read or parsed, an environment
    /// variable is malformed, or any layer fails validation.
    pub fn build(self) -> Result<Config> {
        let mut sources: Vec<ConfigSource> = Vec::new();

        if !self.skip_files {
            let working_dir = match self.working_dir {
                Some(dir) => dir,
                None => env::current_dir()?,
            };
            sources.extend(ConfigLoader::load_all(
                &working_dir,
                self.data_dir.as_deref(),
            )?);
        }

        if let Some(ref path) = self.config_file {
            sources.push(ConfigLoader::load_explicit(path)?);
        }

        for source in &sources {
            log::debug!("Loaded configuration from {}", source.path.display());
            ConfigValidator::validate(&source.config)?;
        }

        let mut config = ConfigMerger::merge(sources);

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        for override_config in &self.overrides {
            ConfigMerger::merge_into(&mut config, override_config);
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }
}
