//! Entitlement consumption use case implementation.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::entities::Entitlement;
use crate::domain::errors::ActionError;
use crate::domain::ports::{EntitlementActions, ensure_consumable};

/// Uses up a consumable purchase.
#[derive(Clone)]
pub struct ConsumeEntitlementUseCase {
    entitlement_actions: Arc<dyn EntitlementActions>,
}

impl ConsumeEntitlementUseCase {
    #[must_use]
    pub const fn new(entitlement_actions: Arc<dyn EntitlementActions>) -> Self {
        Self {
            entitlement_actions,
        }
    }

    /// # Errors
    /// Returns `Model(InvalidState)` for deleted or consumed entitlements
    /// without calling the port, otherwise the port's error.
    pub async fn execute(&self, entitlement: &Entitlement) -> Result<(), ActionError> {
        ensure_consumable(entitlement)?;

        debug!(entitlement_id = %entitlement.id(), sku_id = %entitlement.sku_id(), "Consuming entitlement");
        self.entitlement_actions
            .consume_entitlement(entitlement.application_id(), entitlement.id())
            .await?;
        info!(entitlement_id = %entitlement.id(), "Entitlement consumed");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{ApplicationId, EntitlementId};
    use crate::domain::errors::ModelError;
    use crate::domain::ports::mocks::MockEntitlementActions;

    fn entitlement(consumed: bool) -> Entitlement {
        Entitlement::from_json(&format!(
            r#"{{"id": "10", "sku_id": "20", "application_id": "30", "user_id": "40",
                "type": 1, "consumed": {consumed}}}"#
        ))
        .unwrap()
    }

    #[tokio::test]
    async fn test_consumes_through_port() {
        let mut actions = MockEntitlementActions::new();
        actions
            .expect_consume_entitlement()
            .withf(|app, id| *app == ApplicationId(30) && *id == EntitlementId(10))
            .times(1)
            .returning(|_, _| Ok(()));

        let use_case = ConsumeEntitlementUseCase::new(Arc::new(actions));

        use_case.execute(&entitlement(false)).await.unwrap();
    }

    #[test]
    fn test_already_consumed_is_invalid_state() {
        let mut actions = MockEntitlementActions::new();
        actions.expect_consume_entitlement().never();
        let use_case = ConsumeEntitlementUseCase::new(Arc::new(actions));

        let result = tokio_test::block_on(use_case.execute(&entitlement(true)));

        assert!(matches!(
            result,
            Err(ActionError::Model(ModelError::InvalidState { .. }))
        ));
    }
}
