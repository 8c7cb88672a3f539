use super::app_config::{APP_NAME, APP_ORGANIZATION, APP_QUALIFIER, AppConfig};
use directories::ProjectDirs;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to determine config directory")]
    ConfigDirNotFound,
    #[error("config file {0} does not exist")]
    MissingFile(PathBuf),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
    #[error("toml deserialization error: {0}")]
    TomlDe(#[from] toml::de::Error),
}

/// Locates and reads the configuration file.
///
/// The per-user file is created with defaults on first use. A file named
/// explicitly must already exist and is never written.
pub struct StorageManager {
    config_dir: PathBuf,
}

impl StorageManager {
    /// Uses the platform configuration directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration directory cannot be determined.
    pub fn new() -> Result<Self, ConfigError> {
        let config_dir = ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or(ConfigError::ConfigDirNotFound)?;

        Ok(Self { config_dir })
    }

    /// Uses `path` instead of the platform directory.
    #[must_use]
    pub fn with_dir(path: PathBuf) -> Self {
        Self { config_dir: path }
    }

    #[must_use]
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Path of the per-user configuration file.
    #[must_use]
    pub fn default_config_path(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE_NAME)
    }

    /// Loads the configuration from `path_override`, or from the per-user
    /// file. The returned config records the file it came from.
    ///
    /// A file that fails to parse is reported and replaced by defaults.
    ///
    /// # Errors
    ///
    /// Returns `MissingFile` for an override that does not exist, and
    /// `ConfigError` if the per-user default cannot be written.
    pub fn load_config(&self, path_override: Option<&Path>) -> Result<AppConfig, ConfigError> {
        let path = match path_override {
            Some(path) if path.is_file() => path.to_path_buf(),
            Some(path) => return Err(ConfigError::MissingFile(path.to_path_buf())),
            None => {
                let path = self.default_config_path();
                if !path.exists() {
                    return self.write_default(path);
                }
                path
            }
        };

        let content = fs::read_to_string(&path)?;
        let mut config = match toml::from_str::<AppConfig>(&content) {
            Ok(config) => {
                debug!(path = %path.display(), "Loaded config file");
                config
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Invalid config file, using defaults");
                AppConfig::default()
            }
        };
        config.config = Some(path);
        Ok(config)
    }

    fn write_default(&self, path: PathBuf) -> Result<AppConfig, ConfigError> {
        info!(path = %path.display(), "Writing default config file");
        fs::create_dir_all(&self.config_dir)?;

        let mut config = AppConfig::default();
        let content = toml::to_string_pretty(&config)?;
        let mut temp_file = tempfile::NamedTempFile::new_in(&self.config_dir)?;
        temp_file.write_all(content.as_bytes())?;
        temp_file.persist(&path).map_err(|e| e.error)?;

        config.config = Some(path);
        Ok(config)
    }
}
