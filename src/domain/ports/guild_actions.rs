//! Deferred guild operations.

use std::collections::HashSet;
use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::entities::{
    BulkBanResponse, GuildId, Permissions, Role, RoleId, UserId, VanityInvite,
};
use crate::domain::errors::{ActionError, ModelError, check_len};

/// Most users a single bulk ban accepts.
pub const MAX_BULK_BAN: usize = 200;

/// Longest window of messages a ban can delete.
pub const MAX_BAN_DELETE_WINDOW: Duration = Duration::from_secs(7 * 24 * 60 * 60);

/// Bans many users at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BulkBanRequest {
    #[serde(skip)]
    pub guild_id: GuildId,
    user_ids: Vec<UserId>,
    delete_message_seconds: u64,
    #[serde(skip)]
    pub reason: Option<String>,
}

impl BulkBanRequest {
    /// Collects the users to ban. Duplicates are dropped, keeping the first
    /// occurrence.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` unless 1 to [`MAX_BULK_BAN`] distinct users
    /// are given. Input is read no further than the first user over the
    /// limit.
    pub fn new(
        guild_id: GuildId,
        users: impl IntoIterator<Item = UserId>,
    ) -> Result<Self, ModelError> {
        let mut seen = HashSet::new();
        let mut user_ids = Vec::new();
        for user in users {
            if seen.insert(user) {
                user_ids.push(user);
                if user_ids.len() > MAX_BULK_BAN {
                    return Err(ModelError::invalid_argument(
                        "user_ids",
                        format!("more than {MAX_BULK_BAN} distinct users"),
                    ));
                }
            }
        }
        check_len("user_ids", user_ids.len(), 1, MAX_BULK_BAN)?;

        Ok(Self {
            guild_id,
            user_ids,
            delete_message_seconds: 0,
            reason: None,
        })
    }

    /// Also deletes messages the users sent within `window`, rounded down
    /// to whole seconds.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `window` exceeds
    /// [`MAX_BAN_DELETE_WINDOW`].
    pub fn delete_messages_within(mut self, window: Duration) -> Result<Self, ModelError> {
        if window > MAX_BAN_DELETE_WINDOW {
            return Err(ModelError::invalid_argument(
                "delete_message_seconds",
                format!("{}s exceeds 7 days", window.as_secs()),
            ));
        }
        self.delete_message_seconds = window.as_secs();
        Ok(self)
    }

    #[must_use]
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    #[must_use]
    pub fn user_ids(&self) -> &[UserId] {
        &self.user_ids
    }

    #[must_use]
    pub const fn delete_message_seconds(&self) -> u64 {
        self.delete_message_seconds
    }
}

/// Changes to apply to a role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleEdit {
    #[serde(skip)]
    pub guild_id: GuildId,
    #[serde(skip)]
    pub role_id: RoleId,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "crate::domain::serde_utils::bits_string::option::serialize"
    )]
    permissions: Option<Permissions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hoist: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    mentionable: Option<bool>,
    #[serde(skip)]
    pub reason: Option<String>,
}

impl RoleEdit {
    #[must_use]
    pub const fn new(guild_id: GuildId, role_id: RoleId) -> Self {
        Self {
            guild_id,
            role_id,
            name: None,
            permissions: None,
            color: None,
            hoist: None,
            mentionable: None,
            reason: None,
        }
    }

    /// # Errors
    ///
    /// Returns `InvalidArgument` unless the name has 1 to 100 characters.
    pub fn with_name(mut self, name: impl Into<String>) -> Result<Self, ModelError> {
        let name = name.into();
        check_len("name", name.chars().count(), 1, 100)?;
        self.name = Some(name);
        Ok(self)
    }

    #[must_use]
    pub const fn with_permissions(mut self, permissions: Permissions) -> Self {
        self.permissions = Some(permissions);
        self
    }

    /// # Errors
    ///
    /// Returns `InvalidArgument` if `color` does not fit in 24 bits.
    pub fn with_color(mut self, color: u32) -> Result<Self, ModelError> {
        if color > 0x00FF_FFFF {
            return Err(ModelError::invalid_argument(
                "color",
                format!("{color:#x} is not an RGB value"),
            ));
        }
        self.color = Some(color);
        Ok(self)
    }

    #[must_use]
    pub const fn with_hoist(mut self, hoist: bool) -> Self {
        self.hoist = Some(hoist);
        self
    }

    #[must_use]
    pub const fn with_mentionable(mut self, mentionable: bool) -> Self {
        self.mentionable = Some(mentionable);
        self
    }

    #[must_use]
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }
}

/// Guild operations carried out by the REST layer.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GuildActions: Send + Sync {
    /// Bans every user in the request.
    async fn ban_users(&self, request: BulkBanRequest) -> Result<BulkBanResponse, ActionError>;

    /// Fetches the guild's vanity invite. Requires the `VANITY_URL` feature.
    async fn vanity_invite(&self, guild_id: GuildId) -> Result<VanityInvite, ActionError>;

    /// Applies an edit and returns the updated role.
    async fn edit_role(&self, edit: RoleEdit) -> Result<Role, ActionError>;

    async fn delete_role(
        &self,
        guild_id: GuildId,
        role_id: RoleId,
        reason: Option<String>,
    ) -> Result<(), ActionError>;
}
