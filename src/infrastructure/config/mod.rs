//! Application configuration.

pub mod app_config;
pub mod args;
pub mod storage;

pub use app_config::{AppConfig, CdnConfig, LogLevel};
pub use args::{CliArgs, CodedKind, Command, MentionKind};
pub use storage::StorageManager;
