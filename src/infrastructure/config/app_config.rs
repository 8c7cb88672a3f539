//! Application configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::domain::cdn::{self, ImageFormat};
use crate::domain::errors::ModelError;

pub(super) const APP_NAME: &str = "oxicord-model";
pub(super) const APP_QUALIFIER: &str = "com";
pub(super) const APP_ORGANIZATION: &str = "linuxmobile";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    Info,
    /// Warning level.
    #[default]
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Configuration file contents, overridable from the command line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path. Logs go nowhere unless set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Image URL settings.
    #[serde(default)]
    pub cdn: CdnConfig,
}

/// How CDN image URLs are rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CdnConfig {
    /// Requested edge length in pixels.
    #[serde(default = "default_image_size")]
    pub image_size: u32,

    /// Keep gif for animated assets even when another format is set.
    #[serde(default = "default_true")]
    pub prefer_animated: bool,

    /// Format for static assets. `gif` only applies to animated hashes;
    /// static ones fall back to png.
    #[serde(default)]
    pub image_format: ImageFormat,
}

const fn default_image_size() -> u32 {
    128
}

const fn default_true() -> bool {
    true
}

impl Default for CdnConfig {
    fn default() -> Self {
        Self {
            image_size: default_image_size(),
            prefer_animated: true,
            image_format: ImageFormat::default(),
        }
    }
}

impl CdnConfig {
    /// Checks the configured size.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` unless the size is a power of two in
    /// `16..=4096`.
    pub fn validate(&self) -> Result<(), ModelError> {
        cdn::validate_size(self.image_size)
    }

    /// Applies the configured format and size to a CDN asset URL. Static
    /// assets are never rewritten to gif.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for an invalid configured size.
    pub fn render(&self, url: &str) -> Result<String, ModelError> {
        let animated = url
            .rsplit('/')
            .next()
            .is_some_and(cdn::is_animated_hash);
        let url = if animated && self.prefer_animated {
            url.to_string()
        } else {
            let format = match self.image_format {
                ImageFormat::Gif if !animated => ImageFormat::Png,
                format => format,
            };
            cdn::with_format(url, format)
        };
        cdn::with_size(&url, self.image_size)
    }
}

use super::args::CliArgs;

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: &CliArgs) {
        if let Some(config_path) = &args.config {
            self.config = Some(config_path.clone());
        }
        if let Some(log_path) = &args.log_path {
            self.log_path = Some(log_path.clone());
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(size) = args.image_size {
            self.cdn.image_size = size;
        }
        if let Some(format) = args.image_format {
            self.cdn.image_format = format;
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config: None,
            log_path: None,
            log_level: LogLevel::default(),
            cdn: CdnConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cdn_table() {
        let toml_content = r#"
            log_level = "debug"

            [cdn]
            image_size = 512
            image_format = "webp"
        "#;

        let config: AppConfig = toml::from_str(toml_content).expect("Failed to parse config");

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.cdn.image_size, 512);
        assert_eq!(config.cdn.image_format, ImageFormat::Webp);
        assert!(config.cdn.prefer_animated);
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.cdn.image_size, 128);
        assert_eq!(config.cdn.image_format, ImageFormat::Png);
        assert!(config.cdn.validate().is_ok());
        assert!(config.log_path.is_none());
    }

    #[test]
    fn test_render_keeps_animated_gif() {
        let cdn = CdnConfig {
            image_format: ImageFormat::Webp,
            ..CdnConfig::default()
        };

        assert_eq!(
            cdn.render("https://cdn.discordapp.com/avatars/1/a_abc.gif").unwrap(),
            "https://cdn.discordapp.com/avatars/1/a_abc.gif?size=128"
        );
        assert_eq!(
            cdn.render("https://cdn.discordapp.com/avatars/1/abc.png").unwrap(),
            "https://cdn.discordapp.com/avatars/1/abc.webp?size=128"
        );
    }

    #[test]
    fn test_gif_format_only_applies_to_animated_assets() {
        let cdn = CdnConfig {
            image_format: ImageFormat::Gif,
            prefer_animated: false,
            ..CdnConfig::default()
        };

        assert_eq!(
            cdn.render("https://cdn.discordapp.com/avatars/1/abc.webp").unwrap(),
            "https://cdn.discordapp.com/avatars/1/abc.png?size=128"
        );
        assert_eq!(
            cdn.render("https://cdn.discordapp.com/avatars/1/a_abc.png").unwrap(),
            "https://cdn.discordapp.com/avatars/1/a_abc.gif?size=128"
        );
    }

    #[test]
    fn test_invalid_size_is_reported() {
        let cdn = CdnConfig {
            image_size: 100,
            ..CdnConfig::default()
        };

        assert!(cdn.validate().is_err());
        assert!(cdn.render("https://cdn.discordapp.com/x.png").is_err());
    }
}
