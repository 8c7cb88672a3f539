use super::base::{ChannelCore, guild_channel};
use super::{
    ChannelType, MessageChannel, NsfwChannel, RawChannel, SlowmodeChannel, ThreadContainer,
};
use crate::domain::entities::{ChannelId, GuildId, MessageId};
use crate::domain::errors::ModelError;

/// Guild text or announcement channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextChannel {
    core: ChannelCore,
    kind: ChannelType,
    topic: Option<String>,
    nsfw: bool,
    slowmode: u32,
    last_message_id: Option<MessageId>,
    default_thread_slowmode: u32,
    default_auto_archive_minutes: Option<u32>,
}

guild_channel!(TextChannel, categorizable);

impl TextChannel {
    /// Creates a plain text channel.
    #[must_use]
    pub fn new(id: impl Into<ChannelId>, guild: impl Into<GuildId>, name: impl Into<String>) -> Self {
        Self {
            core: ChannelCore::new(id.into(), guild.into(), name.into()),
            kind: ChannelType::Text,
            topic: None,
            nsfw: false,
            slowmode: 0,
            last_message_id: None,
            default_thread_slowmode: 0,
            default_auto_archive_minutes: None,
        }
    }

    pub(super) fn from_raw(mut raw: RawChannel) -> Result<Self, ModelError> {
        Ok(Self {
            core: ChannelCore::from_raw(&mut raw)?,
            kind: raw.channel_type(),
            topic: raw.topic,
            nsfw: raw.nsfw,
            slowmode: raw.rate_limit_per_user.unwrap_or_default(),
            last_message_id: raw.last_message_id,
            default_thread_slowmode: raw.default_thread_rate_limit_per_user.unwrap_or_default(),
            default_auto_archive_minutes: raw.default_auto_archive_duration,
        })
    }

    /// Turns the channel into an announcement channel.
    #[must_use]
    pub const fn as_news(mut self) -> Self {
        self.kind = ChannelType::News;
        self
    }

    #[must_use]
    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = Some(topic.into());
        self
    }

    #[must_use]
    pub const fn with_nsfw(mut self, nsfw: bool) -> Self {
        self.nsfw = nsfw;
        self
    }

    #[must_use]
    pub const fn with_slowmode(mut self, seconds: u32) -> Self {
        self.slowmode = seconds;
        self
    }

    #[must_use]
    pub const fn with_last_message(mut self, message: MessageId) -> Self {
        self.last_message_id = Some(message);
        self
    }

    #[must_use]
    pub fn topic(&self) -> Option<&str> {
        self.topic.as_deref()
    }

    /// Returns true for announcement channels.
    #[must_use]
    pub fn is_news(&self) -> bool {
        self.kind == ChannelType::News
    }
}

impl MessageChannel for TextChannel {
    fn last_message_id(&self) -> Option<MessageId> {
        self.last_message_id
    }
}

impl NsfwChannel for TextChannel {
    fn is_nsfw(&self) -> bool {
        self.nsfw
    }
}

impl SlowmodeChannel for TextChannel {
    fn slowmode(&self) -> u32 {
        self.slowmode
    }
}

impl ThreadContainer for TextChannel {
    fn default_thread_slowmode(&self) -> u32 {
        self.default_thread_slowmode
    }

    fn default_auto_archive_minutes(&self) -> Option<u32> {
        self.default_auto_archive_minutes
    }
}
