use super::base::{ChannelCore, guild_channel};
use super::{AudioChannel, ChannelType, MessageChannel, NsfwChannel, RawChannel, SlowmodeChannel};
use crate::domain::entities::{ChannelId, GuildId, MessageId};
use crate::domain::errors::ModelError;

/// Bitrate Discord assigns new voice channels.
pub const DEFAULT_BITRATE: u32 = 64_000;

/// Guild voice or stage channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceChannel {
    core: ChannelCore,
    kind: ChannelType,
    bitrate: u32,
    user_limit: u32,
    rtc_region: Option<String>,
    nsfw: bool,
    slowmode: u32,
    last_message_id: Option<MessageId>,
}

guild_channel!(VoiceChannel, categorizable);

impl VoiceChannel {
    #[must_use]
    pub fn new(id: impl Into<ChannelId>, guild: impl Into<GuildId>, name: impl Into<String>) -> Self {
        Self {
            core: ChannelCore::new(id.into(), guild.into(), name.into()),
            kind: ChannelType::Voice,
            bitrate: DEFAULT_BITRATE,
            user_limit: 0,
            rtc_region: None,
            nsfw: false,
            slowmode: 0,
            last_message_id: None,
        }
    }

    pub(super) fn from_raw(mut raw: RawChannel) -> Result<Self, ModelError> {
        Ok(Self {
            core: ChannelCore::from_raw(&mut raw)?,
            kind: raw.channel_type(),
            bitrate: raw.bitrate.unwrap_or(DEFAULT_BITRATE),
            user_limit: raw.user_limit.unwrap_or_default(),
            rtc_region: raw.rtc_region,
            nsfw: raw.nsfw,
            slowmode: raw.rate_limit_per_user.unwrap_or_default(),
            last_message_id: raw.last_message_id,
        })
    }

    /// Turns the channel into a stage channel.
    #[must_use]
    pub const fn as_stage(mut self) -> Self {
        self.kind = ChannelType::Stage;
        self
    }

    #[must_use]
    pub const fn with_bitrate(mut self, bitrate: u32) -> Self {
        self.bitrate = bitrate;
        self
    }

    #[must_use]
    pub const fn with_user_limit(mut self, limit: u32) -> Self {
        self.user_limit = limit;
        self
    }

    #[must_use]
    pub fn is_stage(&self) -> bool {
        self.kind == ChannelType::Stage
    }

    /// Returns true if `connected` users fill the channel.
    #[must_use]
    pub const fn is_full(&self, connected: u32) -> bool {
        self.user_limit != 0 && connected >= self.user_limit
    }
}

impl AudioChannel for VoiceChannel {
    fn bitrate(&self) -> u32 {
        self.bitrate
    }

    fn user_limit(&self) -> u32 {
        self.user_limit
    }

    fn rtc_region(&self) -> Option<&str> {
        self.rtc_region.as_deref()
    }
}

impl MessageChannel for VoiceChannel {
    fn last_message_id(&self) -> Option<MessageId> {
        self.last_message_id
    }
}

impl NsfwChannel for VoiceChannel {
    fn is_nsfw(&self) -> bool {
        self.nsfw
    }
}

impl SlowmodeChannel for VoiceChannel {
    fn slowmode(&self) -> u32 {
        self.slowmode
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{ChannelInfo, GuildChannel};

    #[test]
    fn test_voice_defaults() {
        let channel = VoiceChannel::new(7_u64, 1_u64, "Lounge");

        assert_eq!(channel.bitrate(), DEFAULT_BITRATE);
        assert_eq!(channel.user_limit(), 0);
        assert_eq!(channel.rtc_region(), None);
        assert!(!channel.is_full(500));
        assert!(channel.channel_type().is_audio());
    }

    #[test]
    fn test_stage_with_limit() {
        let channel = VoiceChannel::new(7_u64, 1_u64, "Town Hall")
            .as_stage()
            .with_user_limit(2)
            .with_position(1);

        assert!(channel.is_stage());
        assert!(channel.is_full(2));
        assert!(!channel.is_full(1));
        assert_eq!(channel.position(), 1);
    }
}
