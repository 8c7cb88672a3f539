//! Domain layer with Discord entities, helpers and port definitions.

/// CDN and link URLs.
pub mod cdn;
/// Integer and string coded enums.
pub mod coded;
/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Mention formatting and parsing.
pub mod mention;
/// Port definitions.
pub mod ports;
/// Serde utilities.
pub mod serde_utils;
/// Domain services.
pub mod services;
/// Snowflake ids and timestamps.
pub mod snowflake;

pub use entities::User;
pub use errors::{ActionError, ModelError};
pub use snowflake::Snowflake;
