//! Bulk ban use case implementation.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::domain::entities::{BulkBanResponse, GuildId, UserId};
use crate::domain::errors::ActionError;
use crate::domain::ports::{BulkBanRequest, GuildActions};

/// Bans a list of members and reports who could not be banned.
#[derive(Clone)]
pub struct BanMembersUseCase {
    guild_actions: Arc<dyn GuildActions>,
}

impl BanMembersUseCase {
    #[must_use]
    pub const fn new(guild_actions: Arc<dyn GuildActions>) -> Self {
        Self { guild_actions }
    }

    /// Validates the request locally, then hands it to the guild port.
    ///
    /// # Errors
    /// Returns `Model` for an invalid user list or delete window, and the
    /// port's error if Discord refuses the ban.
    pub async fn execute(
        &self,
        guild_id: GuildId,
        users: Vec<UserId>,
        delete_window: Duration,
        reason: Option<String>,
    ) -> Result<BulkBanResponse, ActionError> {
        let mut request =
            BulkBanRequest::new(guild_id, users)?.delete_messages_within(delete_window)?;
        if let Some(reason) = reason {
            request = request.with_reason(reason);
        }

        debug!(
            guild_id = %guild_id,
            count = request.user_ids().len(),
            "Sending bulk ban"
        );

        let response = self.guild_actions.ban_users(request).await.map_err(|e| {
            warn!(guild_id = %guild_id, error = %e, "Bulk ban failed");
            e
        })?;

        if response.is_complete() {
            info!(guild_id = %guild_id, banned = response.banned_users().len(), "Bulk ban complete");
        } else {
            warn!(
                guild_id = %guild_id,
                banned = response.banned_users().len(),
                failed = response.failed_users().len(),
                "Bulk ban partially failed"
            );
        }

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::ModelError;
    use crate::domain::ports::mocks::MockGuildActions;

    #[tokio::test]
    async fn test_ban_forwards_validated_request() {
        let mut actions = MockGuildActions::new();
        actions
            .expect_ban_users()
            .withf(|request| {
                request.guild_id == GuildId(7)
                    && request.user_ids() == [UserId(1), UserId(2)]
                    && request.delete_message_seconds() == 60
                    && request.reason.as_deref() == Some("raid")
            })
            .times(1)
            .returning(|_| Ok(BulkBanResponse::new([UserId(1)], [UserId(2)])));

        let use_case = BanMembersUseCase::new(Arc::new(actions));
        let response = use_case
            .execute(
                GuildId(7),
                vec![UserId(1), UserId(2)],
                Duration::from_secs(60),
                Some("raid".into()),
            )
            .await
            .unwrap();

        assert_eq!(response.banned_users(), &[UserId(1)]);
        assert_eq!(response.failed_users(), &[UserId(2)]);
    }

    #[tokio::test]
    async fn test_invalid_request_never_reaches_port() {
        let mut actions = MockGuildActions::new();
        actions.expect_ban_users().never();

        let use_case = BanMembersUseCase::new(Arc::new(actions));
        let result = use_case
            .execute(GuildId(7), Vec::new(), Duration::ZERO, None)
            .await;

        assert!(matches!(
            result,
            Err(ActionError::Model(ModelError::InvalidArgument { name: "user_ids", .. }))
        ));
    }

    #[tokio::test]
    async fn test_port_error_is_returned() {
        let mut actions = MockGuildActions::new();
        actions
            .expect_ban_users()
            .returning(|_| Err(ActionError::missing_permission("BAN_MEMBERS")));

        let use_case = BanMembersUseCase::new(Arc::new(actions));
        let result = use_case
            .execute(GuildId(7), vec![UserId(1)], Duration::ZERO, None)
            .await;

        assert!(matches!(result, Err(ActionError::MissingPermission { .. })));
    }
}
