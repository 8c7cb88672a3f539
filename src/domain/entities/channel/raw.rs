use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ChannelFlags, ChannelType, PermissionOverwrite};
use crate::domain::entities::{
    ChannelId, ForumLayout, ForumSortOrder, ForumTag, ForumTagId, GuildId, MessageId, User, UserId,
};
use crate::domain::errors::ModelError;

/// Archive state of a thread.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ThreadMetadata {
    #[serde(default)]
    pub archived: bool,
    /// Minutes of inactivity before the thread archives.
    #[serde(default)]
    pub auto_archive_duration: u32,
    #[serde(default)]
    pub archive_timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub locked: bool,
    /// Whether non-moderators may add others to a private thread.
    #[serde(default)]
    pub invitable: Option<bool>,
    /// Only present for threads created after 2022-01-09.
    #[serde(default)]
    pub create_timestamp: Option<DateTime<Utc>>,
}

/// Channel object as it appears on the wire, before dispatch by type.
///
/// Every type-specific field is optional here; the concrete channel types
/// enforce which of them must be present.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RawChannel {
    pub(crate) id: ChannelId,
    #[serde(rename = "type")]
    pub(crate) kind: i64,
    #[serde(default)]
    pub(crate) guild_id: Option<GuildId>,
    #[serde(default)]
    pub(crate) position: Option<i32>,
    #[serde(default)]
    pub(crate) permission_overwrites: Vec<PermissionOverwrite>,
    #[serde(default)]
    pub(crate) name: Option<String>,
    #[serde(default)]
    pub(crate) topic: Option<String>,
    #[serde(default)]
    pub(crate) nsfw: bool,
    #[serde(default)]
    pub(crate) last_message_id: Option<MessageId>,
    #[serde(default)]
    pub(crate) bitrate: Option<u32>,
    #[serde(default)]
    pub(crate) user_limit: Option<u32>,
    #[serde(default)]
    pub(crate) rate_limit_per_user: Option<u32>,
    #[serde(default)]
    pub(crate) recipients: Vec<User>,
    #[serde(default)]
    pub(crate) icon: Option<String>,
    #[serde(default)]
    pub(crate) owner_id: Option<UserId>,
    #[serde(default)]
    pub(crate) parent_id: Option<ChannelId>,
    #[serde(default)]
    pub(crate) rtc_region: Option<String>,
    #[serde(default)]
    pub(crate) message_count: Option<u32>,
    #[serde(default)]
    pub(crate) member_count: Option<u32>,
    #[serde(default)]
    pub(crate) thread_metadata: Option<ThreadMetadata>,
    #[serde(default)]
    pub(crate) default_auto_archive_duration: Option<u32>,
    #[serde(default)]
    pub(crate) default_thread_rate_limit_per_user: Option<u32>,
    #[serde(default, with = "crate::domain::serde_utils::bits")]
    pub(crate) flags: ChannelFlags,
    #[serde(default)]
    pub(crate) available_tags: Vec<ForumTag>,
    #[serde(default)]
    pub(crate) applied_tags: Vec<ForumTagId>,
    #[serde(default)]
    pub(crate) default_sort_order: Option<ForumSortOrder>,
    #[serde(default)]
    pub(crate) default_forum_layout: Option<ForumLayout>,
}

impl RawChannel {
    /// Parses a channel object.
    ///
    /// # Errors
    ///
    /// Returns `Json` if the text is not a channel object.
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Fills in the guild for payloads nested inside a guild object, which
    /// omit it.
    #[must_use]
    pub fn with_guild(mut self, guild: GuildId) -> Self {
        if self.guild_id.is_none() {
            self.guild_id = Some(guild);
        }
        self
    }

    #[must_use]
    pub const fn id(&self) -> ChannelId {
        self.id
    }

    /// Type resolved from the wire code.
    #[must_use]
    pub fn channel_type(&self) -> ChannelType {
        ChannelType::from(self.kind)
    }

    pub(super) fn require_guild(&self) -> Result<GuildId, ModelError> {
        self.guild_id.ok_or_else(|| {
            ModelError::invalid_argument(
                "guild_id",
                format!("guild channel {} arrived without its guild", self.id),
            )
        })
    }

    pub(super) fn require_parent(&self) -> Result<ChannelId, ModelError> {
        self.parent_id.ok_or_else(|| {
            ModelError::invalid_argument(
                "parent_id",
                format!("thread {} arrived without its parent channel", self.id),
            )
        })
    }

    pub(super) fn take_name(&mut self) -> Result<String, ModelError> {
        self.name.take().ok_or_else(|| {
            ModelError::invalid_argument(
                "name",
                format!("channel {} arrived without a name", self.id),
            )
        })
    }
}
