//! Errors raised by the model layer itself.

use thiserror::Error;

/// Local, synchronous failures: bad caller input or state that is not
/// available yet. Unknown wire codes are never reported here.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum ModelError {
    #[error("invalid snowflake {value:?}: {reason}")]
    InvalidSnowflake { value: String, reason: String },

    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    #[error("invalid state: {message}")]
    InvalidState { message: String },

    #[error("malformed payload: {0}")]
    Json(#[from] serde_json::Error),
}

impl ModelError {
    /// Creates invalid snowflake error.
    #[must_use]
    pub fn invalid_snowflake(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidSnowflake {
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Creates invalid argument error.
    #[must_use]
    pub fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }

    /// Creates invalid state error.
    #[must_use]
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState {
            message: message.into(),
        }
    }

    /// Returns whether the caller passed something it should not have.
    #[must_use]
    pub const fn is_precondition(&self) -> bool {
        matches!(
            self,
            Self::InvalidSnowflake { .. } | Self::InvalidArgument { .. }
        )
    }
}

/// Fails with `InvalidArgument` unless `len` lies in `min..=max`.
pub(crate) fn check_len(
    name: &'static str,
    len: usize,
    min: usize,
    max: usize,
) -> Result<(), ModelError> {
    if (min..=max).contains(&len) {
        Ok(())
    } else {
        Err(ModelError::invalid_argument(
            name,
            format!("length {len} outside {min}..={max}"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = ModelError::invalid_snowflake("abc", "invalid digit found in string");
        assert_eq!(
            err.to_string(),
            "invalid snowflake \"abc\": invalid digit found in string"
        );

        let err = ModelError::invalid_argument("name", "must not be blank");
        assert_eq!(err.to_string(), "invalid argument `name`: must not be blank");
        assert!(err.is_precondition());

        let err = ModelError::invalid_state("webhook token not loaded");
        assert!(!err.is_precondition());
    }

    #[test]
    fn test_check_len() {
        assert!(check_len("name", 1, 1, 100).is_ok());
        assert!(check_len("name", 100, 1, 100).is_ok());
        assert!(check_len("name", 0, 1, 100).is_err());
        assert!(check_len("name", 101, 1, 100).is_err());
    }
}
