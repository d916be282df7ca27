//! Configuration file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// File name of the project configuration.
pub const PROJECT_CONFIG_FILE: &str = "carpark.yaml";

/// File name of the private, uncommitted project configuration.
pub const LOCAL_CONFIG_FILE: &str = "carpark.local.yaml";

/// Precedence of the user configuration.
pub const USER_PRECEDENCE: u8 = 1;
/// Precedence of `carpark.yaml`.
pub const PROJECT_PRECEDENCE: u8 = 2;
/// Precedence of `carpark.local.yaml`.
pub const LOCAL_PRECEDENCE: u8 = 3;
/// Precedence of a file named explicitly on the command line.
pub const EXPLICIT_PRECEDENCE: u8 = 4;

/// Configuration source with its precedence level.
///
/// Lower precedence values are overridden by higher ones.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Precedence level (higher values take priority).
    pub precedence: u8,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads configuration from the user directory and the project tree.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use carpark::config::ConfigLoader;
///
/// let sources = ConfigLoader::load_all(Path::new("."), None).unwrap();
/// println!("Found {} configuration sources", sources.len());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Discovers and loads all configuration files, lowest precedence first.
    ///
    /// Searches for the user config (`{data_dir}/config.yaml`, defaulting to
    /// `~/.carpark/config.yaml`), then `carpark.yaml` and `carpark.local.yaml`
    /// walking up from `working_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration file exists but cannot be read
    /// or parsed.
    pub fn load_all(working_dir: &Path, data_dir: Option<&Path>) -> Result<Vec<ConfigSource>> {
        let mut sources = Vec::new();

        if let Some(user_config) = Self::load_user_config(data_dir)? {
            sources.push(user_config);
        }
        sources.extend(Self::discover_project_configs(working_dir)?);

        sources.sort_by_key(|s| s.precedence);
        Ok(sources)
    }

    fn load_user_config(data_dir: Option<&Path>) -> Result<Option<ConfigSource>> {
        let config_path = match data_dir {
            Some(dir) => dir.join("config.yaml"),
            None => default_data_dir()?.join("config.yaml"),
        };

        if !config_path.exists() {
            return Ok(None);
        }

        let config = Self::load_file(&config_path)?;
        Ok(Some(ConfigSource {
            path: config_path,
            precedence: USER_PRECEDENCE,
            config,
        }))
    }

    /// Discovers project configurations by walking up directories.
    ///
    /// Stops at the first directory containing either file.
    ///
    /// # Errors
    ///
    /// Returns an error if any discovered file cannot be read or parsed.
    pub fn discover_project_configs(start_dir: &Path) -> Result<Vec<ConfigSource>> {
        let mut configs = Vec::new();
        let mut current = start_dir.to_path_buf();

        loop {
            for (file, precedence) in [
                (PROJECT_CONFIG_FILE, PROJECT_PRECEDENCE),
                (LOCAL_CONFIG_FILE, LOCAL_PRECEDENCE),
            ] {
                let path = current.join(file);
                if path.exists() {
                    let config = Self::load_file(&path)?;
                    configs.push(ConfigSource {
                        path,
                        precedence,
                        config,
                    });
                }
            }

            if !configs.is_empty() || !current.pop() {
                break;
            }
        }

        Ok(configs)
    }

    /// Loads a file named explicitly by the caller.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, unreadable or invalid.
    pub fn load_explicit(path: &Path) -> Result<ConfigSource> {
        Ok(ConfigSource {
            path: path.to_path_buf(),
            precedence: EXPLICIT_PRECEDENCE,
            config: Self::load_file(path)?,
        })
    }

    /// Loads and parses a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path)?;

        serde_yaml::from_str(&contents).map_err(|e| Error::Validation {
            field: path.display().to_string(),
            message: format!("Invalid YAML: {e}"),
        })
    }
}

/// Returns the default user data directory, `~/.carpark`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn default_data_dir() -> Result<PathBuf> {
    home::home_dir()
        .map(|home| home.join(".carpark"))
        .ok_or_else(|| {
            Error::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "could not determine home directory",
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::OutputFormat;
    use tempfile::TempDir;

    #[test]
    fn test_load_nonexistent_file() {
        let err = ConfigLoader::load_file(Path::new("/nonexistent/path/config.yaml")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_load_invalid_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("bad.yaml");
        fs::write(&config_path, "invalid: yaml: syntax:").unwrap();

        let err = ConfigLoader::load_file(&config_path).unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));
    }

    #[test]
    fn test_load_valid_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");
        fs::write(&config_path, "output_format: csv\n").unwrap();

        let config = ConfigLoader::load_file(&config_path).unwrap();
        assert_eq!(config.output_format, Some(OutputFormat::Csv));
    }

    #[test]
    fn test_discover_no_configs() {
        let temp_dir = TempDir::new().unwrap();
        let configs = ConfigLoader::discover_project_configs(temp_dir.path()).unwrap();
        assert!(configs.is_empty());
    }

    #[test]
    fn test_discover_both_files() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(PROJECT_CONFIG_FILE), "output_format: json\n").unwrap();
        fs::write(temp_dir.path().join(LOCAL_CONFIG_FILE), "output_format: csv\n").unwrap();

        let configs = ConfigLoader::discover_project_configs(temp_dir.path()).unwrap();
        assert_eq!(configs.len(), 2);

        let project = configs.iter().find(|c| c.precedence == PROJECT_PRECEDENCE).unwrap();
        let local = configs.iter().find(|c| c.precedence == LOCAL_PRECEDENCE).unwrap();
        assert_eq!(project.config.output_format, Some(OutputFormat::Json));
        assert_eq!(local.config.output_format, Some(OutputFormat::Csv));
    }

    #[test]
    fn test_discover_walks_up() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(temp_dir.path().join(PROJECT_CONFIG_FILE), "output_format: json\n").unwrap();

        let configs = ConfigLoader::discover_project_configs(&nested).unwrap();
        assert_eq!(configs.len(), 1);
        assert_eq!(configs[0].path, temp_dir.path().join(PROJECT_CONFIG_FILE));
    }

    #[test]
    fn test_load_all_with_data_dir() {
        let data_dir = TempDir::new().unwrap();
        let work_dir = TempDir::new().unwrap();
        fs::write(data_dir.path().join("config.yaml"), "output_format: csv\n").unwrap();
        fs::write(work_dir.path().join(PROJECT_CONFIG_FILE), "output_format: json\n").unwrap();

        let sources = ConfigLoader::load_all(work_dir.path(), Some(data_dir.path())).unwrap();
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0].precedence, USER_PRECEDENCE);
        assert_eq!(sources[1].precedence, PROJECT_PRECEDENCE);
    }

    #[test]
    fn test_load_explicit() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("custom.yaml");
        fs::write(&path, "skip_seed: true\n").unwrap();

        let source = ConfigLoader::load_explicit(&path).unwrap();
        assert_eq!(source.precedence, EXPLICIT_PRECEDENCE);
        assert_eq!(source.config.skip_seed, Some(true));
    }
}
