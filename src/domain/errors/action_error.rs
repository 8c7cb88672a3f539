//! Failures reported by deferred operations.

use thiserror::Error;

use super::ModelError;

/// Outcome of a delete/edit/create operation that did not succeed.
///
/// Produced by whatever executes the request; this crate only names the
/// cases callers are expected to branch on.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum ActionError {
    #[error("request rejected by Discord ({code}): {message}")]
    Rejected { code: u32, message: String },

    #[error("missing permission: {permission}")]
    MissingPermission { permission: String },

    #[error("unknown {resource}")]
    NotFound { resource: String },

    #[error("network error: {message}")]
    Network { message: String },

    #[error("rate limited by Discord, retry after {retry_after_ms}ms")]
    RateLimited { retry_after_ms: u64 },

    #[error(transparent)]
    Model(#[from] ModelError),
}

impl ActionError {
    /// Creates rejected error.
    #[must_use]
    pub fn rejected(code: u32, message: impl Into<String>) -> Self {
        Self::Rejected {
            code,
            message: message.into(),
        }
    }

    /// Creates missing permission error.
    #[must_use]
    pub fn missing_permission(permission: impl Into<String>) -> Self {
        Self::MissingPermission {
            permission: permission.into(),
        }
    }

    /// Creates not found error.
    #[must_use]
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Creates network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Returns whether retrying the same request may succeed.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Network { .. } | Self::RateLimited { .. })
    }
}
