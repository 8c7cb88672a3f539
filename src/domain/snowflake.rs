//! Snowflake identifiers.
//!
//! Every Discord entity is keyed by a 64-bit snowflake whose upper 42 bits
//! hold milliseconds since the Discord epoch.

use chrono::{DateTime, Utc};

use crate::domain::errors::ModelError;

/// First millisecond of 2015, the origin of snowflake timestamps.
pub const DISCORD_EPOCH_MS: u64 = 1_420_070_400_000;

const TIMESTAMP_SHIFT: u32 = 22;

/// Anything identified by a snowflake.
pub trait Snowflake {
    /// Returns the raw snowflake value.
    fn snowflake(&self) -> u64;

    /// Returns the snowflake in its decimal wire form.
    fn snowflake_str(&self) -> String {
        self.snowflake().to_string()
    }

    /// Returns the creation time encoded in the snowflake.
    fn time_created(&self) -> DateTime<Utc> {
        timestamp_of(self.snowflake())
    }
}

/// Extracts the creation time from a raw snowflake.
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub fn timestamp_of(id: u64) -> DateTime<Utc> {
    // Shifted value is at most 2^42, so the sum stays well inside i64.
    let millis = (id >> TIMESTAMP_SHIFT) + DISCORD_EPOCH_MS;
    DateTime::from_timestamp_millis(millis as i64).unwrap_or_default()
}

/// Builds the smallest snowflake created at `time`, useful as a pagination
/// bound.
///
/// # Errors
///
/// Returns `InvalidArgument` if `time` predates the Discord epoch.
pub fn snowflake_at(time: DateTime<Utc>) -> Result<u64, ModelError> {
    let millis = u64::try_from(time.timestamp_millis())
        .ok()
        .and_then(|ms| ms.checked_sub(DISCORD_EPOCH_MS))
        .ok_or_else(|| ModelError::invalid_argument("time", "must not predate the Discord epoch"))?;
    Ok(millis << TIMESTAMP_SHIFT)
}

/// Parses a snowflake from its decimal string form.
///
/// A leading `-` is accepted and read as the two's complement bit pattern,
/// which some payloads use for ids above `i64::MAX`.
///
/// # Errors
///
/// Returns `InvalidSnowflake` for empty, non-numeric or out-of-range input.
#[allow(clippy::cast_sign_loss)]
pub fn parse_snowflake(value: &str) -> Result<u64, ModelError> {
    if value.is_empty() {
        return Err(ModelError::invalid_snowflake(value, "empty string"));
    }

    if value.starts_with('+') {
        return Err(ModelError::invalid_snowflake(value, "unexpected sign"));
    }

    if value.starts_with('-') {
        let signed = value
            .parse::<i64>()
            .map_err(|e| ModelError::invalid_snowflake(value, e.to_string()))?;
        return Ok(signed as u64);
    }

    value
        .parse::<u64>()
        .map_err(|e| ModelError::invalid_snowflake(value, e.to_string()))
}

/// Declares a typed snowflake id.
macro_rules! snowflake_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
            serde::Serialize, serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(#[serde(with = "crate::domain::serde_utils::string_to_u64")] pub u64);

        impl $name {
            /// Wraps a raw snowflake.
            #[must_use]
            pub const fn new(value: u64) -> Self {
                Self(value)
            }

            /// Returns the underlying u64 value.
            #[must_use]
            pub const fn as_u64(self) -> u64 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for u64 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::domain::errors::ModelError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                $crate::domain::snowflake::parse_snowflake(value).map(Self)
            }
        }

        impl $crate::domain::snowflake::Snowflake for $name {
            fn snowflake(&self) -> u64 {
                self.0
            }
        }
    };
}

pub(crate) use snowflake_id;
