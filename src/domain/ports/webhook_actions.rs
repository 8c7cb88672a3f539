//! Deferred webhook operations.

use async_trait::async_trait;

use crate::domain::entities::{WebhookId, WebhookToken};
use crate::domain::errors::ActionError;

/// Webhook operations carried out by the REST layer.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WebhookActions: Send + Sync {
    /// Deletes a webhook. With a token no bot authorization is needed.
    async fn delete_webhook(
        &self,
        webhook_id: WebhookId,
        token: Option<WebhookToken>,
        reason: Option<String>,
    ) -> Result<(), ActionError>;
}
