//! Discord channels.
//!
//! Channel types are modelled by composition: each concrete type implements
//! the capability traits in [`traits`] that apply to it, and [`Channel`]
//! dispatches a raw payload to the right concrete type by its
//! [`ChannelType`] code.

mod base;
mod category;
mod forum;
mod kind;
mod overwrite;
mod private;
mod raw;
mod text;
mod thread;
pub mod traits;
mod voice;

use serde::Deserialize;

pub use category::Category;
pub use forum::ForumChannel;
pub use kind::{ChannelFlags, ChannelType};
pub use overwrite::{OverwriteType, PermissionOverwrite};
pub use private::PrivateChannel;
pub use raw::{RawChannel, ThreadMetadata};
pub use text::TextChannel;
pub use thread::ThreadChannel;
pub use traits::{
    AudioChannel, Categorizable, ChannelInfo, GuildChannel, MAX_SLOWMODE, MessageChannel,
    NsfwChannel, SlowmodeChannel, ThreadContainer,
};
pub use voice::{DEFAULT_BITRATE, VoiceChannel};

use super::{ChannelId, GuildId};
use crate::domain::errors::ModelError;
use crate::domain::mention::{self, Mentionable};
use crate::domain::snowflake::Snowflake;

/// Channel of a type this version does not model. Only the identity fields
/// are kept, alongside the wire code that was received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownChannel {
    id: ChannelId,
    code: i64,
    guild_id: Option<GuildId>,
    name: String,
}

impl UnknownChannel {
    fn from_raw(raw: RawChannel) -> Self {
        Self {
            id: raw.id,
            code: raw.kind,
            guild_id: raw.guild_id,
            name: raw.name.unwrap_or_default(),
        }
    }

    /// The type code as received.
    #[must_use]
    pub const fn raw_type(&self) -> i64 {
        self.code
    }
}

impl Snowflake for UnknownChannel {
    fn snowflake(&self) -> u64 {
        self.id.as_u64()
    }
}

impl Mentionable for UnknownChannel {
    fn as_mention(&self) -> String {
        mention::channel(self.id)
    }
}

impl ChannelInfo for UnknownChannel {
    fn id(&self) -> ChannelId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn channel_type(&self) -> ChannelType {
        ChannelType::Unknown
    }

    fn guild_id(&self) -> Option<GuildId> {
        self.guild_id
    }
}

/// Any channel, dispatched by type.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawChannel")]
pub enum Channel {
    Text(TextChannel),
    Voice(VoiceChannel),
    Category(Category),
    Thread(ThreadChannel),
    Forum(ForumChannel),
    Private(PrivateChannel),
    Unknown(UnknownChannel),
}

impl Channel {
    /// Builds the concrete channel for a raw payload.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` when a field the channel type requires is
    /// missing, such as the guild of a guild channel or the parent of a
    /// thread. Unrecognised type codes are not an error.
    pub fn from_raw(raw: RawChannel) -> Result<Self, ModelError> {
        let channel = match raw.channel_type() {
            ChannelType::Text | ChannelType::News => Self::Text(TextChannel::from_raw(raw)?),
            ChannelType::Voice | ChannelType::Stage => Self::Voice(VoiceChannel::from_raw(raw)?),
            ChannelType::Category => Self::Category(Category::from_raw(raw)?),
            ChannelType::GuildNewsThread
            | ChannelType::GuildPublicThread
            | ChannelType::GuildPrivateThread => Self::Thread(ThreadChannel::from_raw(raw)?),
            ChannelType::Forum | ChannelType::Media => Self::Forum(ForumChannel::from_raw(raw)?),
            ChannelType::Private | ChannelType::Group => {
                Self::Private(PrivateChannel::from_raw(raw))
            }
            ChannelType::Unknown => {
                tracing::debug!(id = %raw.id, code = raw.kind, "keeping channel of unknown type");
                Self::Unknown(UnknownChannel::from_raw(raw))
            }
        };
        Ok(channel)
    }

    /// Parses and dispatches a channel object.
    ///
    /// # Errors
    ///
    /// Returns `Json` for text that is not a channel object, otherwise the
    /// errors of [`Channel::from_raw`].
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        Self::from_raw(RawChannel::from_json(json)?)
    }

    /// Common view of the channel.
    #[must_use]
    pub fn info(&self) -> &dyn ChannelInfo {
        match self {
            Self::Text(c) => c,
            Self::Voice(c) => c,
            Self::Category(c) => c,
            Self::Thread(c) => c,
            Self::Forum(c) => c,
            Self::Private(c) => c,
            Self::Unknown(c) => c,
        }
    }

    #[must_use]
    pub fn id(&self) -> ChannelId {
        self.info().id()
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.info().name()
    }

    #[must_use]
    pub fn channel_type(&self) -> ChannelType {
        self.info().channel_type()
    }

    /// The channel as a guild channel, `None` for private and unknown ones.
    #[must_use]
    pub fn as_guild_channel(&self) -> Option<&dyn GuildChannel> {
        match self {
            Self::Text(c) => Some(c),
            Self::Voice(c) => Some(c),
            Self::Category(c) => Some(c),
            Self::Thread(c) => Some(c),
            Self::Forum(c) => Some(c),
            Self::Private(_) | Self::Unknown(_) => None,
        }
    }

    /// The channel as a message target, if messages can be sent to it.
    #[must_use]
    pub fn as_message_channel(&self) -> Option<&dyn MessageChannel> {
        match self {
            Self::Text(c) => Some(c),
            Self::Voice(c) => Some(c),
            Self::Thread(c) => Some(c),
            Self::Private(c) => Some(c),
            Self::Category(_) | Self::Forum(_) | Self::Unknown(_) => None,
        }
    }

    #[must_use]
    pub fn as_slowmode_channel(&self) -> Option<&dyn SlowmodeChannel> {
        match self {
            Self::Text(c) => Some(c),
            Self::Voice(c) => Some(c),
            Self::Thread(c) => Some(c),
            Self::Forum(c) => Some(c),
            Self::Category(_) | Self::Private(_) | Self::Unknown(_) => None,
        }
    }

    #[must_use]
    pub fn as_categorizable(&self) -> Option<&dyn Categorizable> {
        match self {
            Self::Text(c) => Some(c),
            Self::Voice(c) => Some(c),
            Self::Forum(c) => Some(c),
            _ => None,
        }
    }

    /// Key that orders channels the way a guild sidebar lists them: by type
    /// bucket, then position, then id.
    #[must_use]
    pub fn sort_key(&self) -> (i8, i32, ChannelId) {
        let position = self.as_guild_channel().map_or(0, |c| c.position());
        (self.channel_type().sort_bucket(), position, self.id())
    }
}

impl TryFrom<RawChannel> for Channel {
    type Error = ModelError;

    fn try_from(raw: RawChannel) -> Result<Self, Self::Error> {
        Self::from_raw(raw)
    }
}

impl Snowflake for Channel {
    fn snowflake(&self) -> u64 {
        self.id().as_u64()
    }

    fn time_created(&self) -> chrono::DateTime<chrono::Utc> {
        self.info().time_created()
    }
}

impl Mentionable for Channel {
    fn as_mention(&self) -> String {
        mention::channel(self.id())
    }
}
