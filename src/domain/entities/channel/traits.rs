//! Capabilities a channel may have.
//!
//! Concrete channel types implement the subset that applies to them, so code
//! that only needs, say, a slowmode can accept any `&dyn SlowmodeChannel`.

use super::{ChannelType, PermissionOverwrite};
use crate::domain::cdn;
use crate::domain::entities::{ChannelId, GuildId, MessageId, RoleId, UserId};
use crate::domain::errors::ModelError;
use crate::domain::mention::Mentionable;
use crate::domain::snowflake::Snowflake;

/// Longest slowmode Discord accepts, in seconds.
pub const MAX_SLOWMODE: u32 = 21_600;

/// Properties every channel has.
pub trait ChannelInfo: Snowflake + Mentionable {
    fn id(&self) -> ChannelId;

    fn name(&self) -> &str;

    fn channel_type(&self) -> ChannelType;

    /// Owning guild, `None` for private channels.
    fn guild_id(&self) -> Option<GuildId> {
        None
    }

    /// Link that opens the channel in a client.
    fn jump_url(&self) -> String {
        cdn::channel_jump(self.guild_id(), self.id())
    }
}

/// A channel that belongs to a guild.
pub trait GuildChannel: ChannelInfo {
    fn guild(&self) -> GuildId;

    /// Position in the guild sidebar, within the channel's sort bucket.
    fn position(&self) -> i32;

    /// Channel-level overwrites. Threads inherit from their parent and
    /// carry none.
    fn permission_overwrites(&self) -> &[PermissionOverwrite] {
        &[]
    }

    fn role_overwrite(&self, role: RoleId) -> Option<&PermissionOverwrite> {
        self.permission_overwrites()
            .iter()
            .find(|o| o.targets_role(role))
    }

    fn member_overwrite(&self, user: UserId) -> Option<&PermissionOverwrite> {
        self.permission_overwrites()
            .iter()
            .find(|o| o.targets_member(user))
    }
}

/// A guild channel that can sit inside a category.
pub trait Categorizable: GuildChannel {
    fn parent_category(&self) -> Option<ChannelId>;
}

/// A channel messages can be sent to.
pub trait MessageChannel: ChannelInfo {
    /// Id of the most recent message, as last reported by Discord.
    fn last_message_id(&self) -> Option<MessageId>;

    fn has_latest_message(&self) -> bool {
        self.last_message_id().is_some()
    }

    /// Id of the most recent message.
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` when no message has been tracked for the
    /// channel yet.
    fn latest_message_id(&self) -> Result<MessageId, ModelError> {
        self.last_message_id().ok_or_else(|| {
            ModelError::invalid_state(format!("no message has been tracked in channel {}", self.id()))
        })
    }
}

/// A voice-capable guild channel.
pub trait AudioChannel: GuildChannel {
    /// Bitrate in bits per second.
    fn bitrate(&self) -> u32;

    /// Maximum connected users, `0` for unlimited.
    fn user_limit(&self) -> u32;

    /// Voice region id, `None` for automatic selection.
    fn rtc_region(&self) -> Option<&str>;
}

pub trait NsfwChannel: ChannelInfo {
    fn is_nsfw(&self) -> bool;
}

/// A channel with a per-user rate limit.
pub trait SlowmodeChannel: ChannelInfo {
    /// Seconds a member waits between messages, at most [`MAX_SLOWMODE`].
    fn slowmode(&self) -> u32;
}

/// A guild channel threads can be started in.
pub trait ThreadContainer: GuildChannel {
    /// Slowmode copied onto new threads.
    fn default_thread_slowmode(&self) -> u32;

    /// Minutes of inactivity before new threads archive.
    fn default_auto_archive_minutes(&self) -> Option<u32>;
}
