use chrono::{DateTime, Utc};

use super::{
    ChannelFlags, ChannelInfo, ChannelType, GuildChannel, MessageChannel, RawChannel,
    SlowmodeChannel, ThreadMetadata,
};
use crate::domain::entities::{ChannelId, ForumTagId, GuildId, MessageId, UserId};
use crate::domain::errors::ModelError;
use crate::domain::mention::{self, Mentionable};
use crate::domain::snowflake::{self, Snowflake};

/// Thread started in a text, announcement or forum channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadChannel {
    id: ChannelId,
    kind: ChannelType,
    guild_id: GuildId,
    parent_id: ChannelId,
    owner_id: Option<UserId>,
    name: String,
    message_count: u32,
    member_count: u32,
    slowmode: u32,
    last_message_id: Option<MessageId>,
    metadata: ThreadMetadata,
    applied_tags: Vec<ForumTagId>,
    flags: ChannelFlags,
}

impl ThreadChannel {
    /// Creates an open public thread.
    #[must_use]
    pub fn new(
        id: impl Into<ChannelId>,
        guild: impl Into<GuildId>,
        parent: impl Into<ChannelId>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind: ChannelType::GuildPublicThread,
            guild_id: guild.into(),
            parent_id: parent.into(),
            owner_id: None,
            name: name.into(),
            message_count: 0,
            member_count: 0,
            slowmode: 0,
            last_message_id: None,
            metadata: ThreadMetadata {
                archived: false,
                auto_archive_duration: 1440,
                archive_timestamp: None,
                locked: false,
                invitable: None,
                create_timestamp: None,
            },
            applied_tags: Vec::new(),
            flags: ChannelFlags::empty(),
        }
    }

    pub(super) fn from_raw(mut raw: RawChannel) -> Result<Self, ModelError> {
        let metadata = raw.thread_metadata.take().ok_or_else(|| {
            ModelError::invalid_argument(
                "thread_metadata",
                format!("thread {} arrived without its metadata", raw.id),
            )
        })?;
        Ok(Self {
            id: raw.id,
            kind: raw.channel_type(),
            guild_id: raw.require_guild()?,
            parent_id: raw.require_parent()?,
            owner_id: raw.owner_id,
            name: raw.take_name()?,
            message_count: raw.message_count.unwrap_or_default(),
            member_count: raw.member_count.unwrap_or_default(),
            slowmode: raw.rate_limit_per_user.unwrap_or_default(),
            last_message_id: raw.last_message_id,
            metadata,
            applied_tags: raw.applied_tags,
            flags: raw.flags,
        })
    }

    #[must_use]
    pub const fn with_owner(mut self, owner: UserId) -> Self {
        self.owner_id = Some(owner);
        self
    }

    #[must_use]
    pub fn with_tags(mut self, tags: Vec<ForumTagId>) -> Self {
        self.applied_tags = tags;
        self
    }

    /// Marks the thread archived at `at`.
    #[must_use]
    pub const fn archived_at(mut self, at: DateTime<Utc>) -> Self {
        self.metadata.archived = true;
        self.metadata.archive_timestamp = Some(at);
        self
    }

    /// Channel the thread was started in.
    #[must_use]
    pub const fn parent(&self) -> ChannelId {
        self.parent_id
    }

    #[must_use]
    pub const fn owner_id(&self) -> Option<UserId> {
        self.owner_id
    }

    #[must_use]
    pub fn is_owner(&self, user: UserId) -> bool {
        self.owner_id == Some(user)
    }

    /// Approximate message count; Discord stops counting at 50 for threads
    /// created before July 2022.
    #[must_use]
    pub const fn message_count(&self) -> u32 {
        self.message_count
    }

    #[must_use]
    pub const fn member_count(&self) -> u32 {
        self.member_count
    }

    #[must_use]
    pub const fn metadata(&self) -> &ThreadMetadata {
        &self.metadata
    }

    #[must_use]
    pub const fn is_archived(&self) -> bool {
        self.metadata.archived
    }

    #[must_use]
    pub const fn is_locked(&self) -> bool {
        self.metadata.locked
    }

    #[must_use]
    pub fn is_public(&self) -> bool {
        self.kind != ChannelType::GuildPrivateThread
    }

    /// Returns true if the thread is pinned in its forum.
    #[must_use]
    pub const fn is_pinned(&self) -> bool {
        self.flags.contains(ChannelFlags::PINNED)
    }

    /// Forum tags applied to the thread.
    #[must_use]
    pub fn applied_tags(&self) -> &[ForumTagId] {
        &self.applied_tags
    }
}

impl Snowflake for ThreadChannel {
    fn snowflake(&self) -> u64 {
        self.id.as_u64()
    }

    /// Threads older than the `create_timestamp` field report the time
    /// encoded in their id.
    fn time_created(&self) -> DateTime<Utc> {
        self.metadata
            .create_timestamp
            .unwrap_or_else(|| snowflake::timestamp_of(self.id.as_u64()))
    }
}

impl Mentionable for ThreadChannel {
    fn as_mention(&self) -> String {
        mention::channel(self.id)
    }
}

impl ChannelInfo for ThreadChannel {
    fn id(&self) -> ChannelId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn channel_type(&self) -> ChannelType {
        self.kind
    }

    fn guild_id(&self) -> Option<GuildId> {
        Some(self.guild_id)
    }
}

impl GuildChannel for ThreadChannel {
    fn guild(&self) -> GuildId {
        self.guild_id
    }

    /// Threads are not listed in the sidebar.
    fn position(&self) -> i32 {
        -1
    }
}

impl MessageChannel for ThreadChannel {
    fn last_message_id(&self) -> Option<MessageId> {
        self.last_message_id
    }
}

impl SlowmodeChannel for ThreadChannel {
    fn slowmode(&self) -> u32 {
        self.slowmode
    }
}
