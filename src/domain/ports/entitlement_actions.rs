//! Deferred entitlement operations.

use async_trait::async_trait;

use crate::domain::entities::{ApplicationId, Entitlement, EntitlementId};
use crate::domain::errors::{ActionError, ModelError};

/// Entitlement operations carried out by the REST layer.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EntitlementActions: Send + Sync {
    /// Marks a one-time purchase as used.
    async fn consume_entitlement(
        &self,
        application_id: ApplicationId,
        entitlement_id: EntitlementId,
    ) -> Result<(), ActionError>;
}

/// Checks locally that consuming `entitlement` can succeed.
///
/// # Errors
///
/// Returns `InvalidState` for deleted or already consumed entitlements.
pub fn ensure_consumable(entitlement: &Entitlement) -> Result<(), ModelError> {
    if entitlement.is_deleted() {
        return Err(ModelError::invalid_state(format!(
            "entitlement {} was deleted",
            entitlement.id()
        )));
    }
    if entitlement.is_consumed() {
        return Err(ModelError::invalid_state(format!(
            "entitlement {} is already consumed",
            entitlement.id()
        )));
    }
    Ok(())
}
