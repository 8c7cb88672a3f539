//! Infrastructure layer: configuration files and command-line parsing.

/// Application configuration.
pub mod config;

pub use config::{AppConfig, CdnConfig, CliArgs, LogLevel, StorageManager};
