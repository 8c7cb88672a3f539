use crate::domain::coded::coded_enum;

coded_enum! {
    /// Discord channel type.
    pub enum ChannelType {
        /// Guild text channel.
        Text = 0,
        /// Direct message with one user.
        Private = 1,
        /// Guild voice channel.
        Voice = 2,
        /// Group direct message.
        Group = 3,
        /// Category grouping other guild channels.
        Category = 4,
        /// Announcement channel that members can follow.
        News = 5,
        /// Thread inside an announcement channel.
        GuildNewsThread = 10,
        /// Public thread.
        GuildPublicThread = 11,
        /// Private thread, visible to invited members and moderators.
        GuildPrivateThread = 12,
        /// Stage voice channel.
        Stage = 13,
        /// Forum of thread posts.
        Forum = 15,
        /// Media forum.
        Media = 16,
    }
}

impl ChannelType {
    /// Bucket used when ordering channels in a guild sidebar. Channels with
    /// a lower bucket sort first; `-1` marks types that are never listed
    /// there.
    #[must_use]
    pub const fn sort_bucket(self) -> i8 {
        match self {
            Self::Text | Self::News | Self::Forum | Self::Media => 0,
            Self::Voice | Self::Stage => 1,
            Self::Category => 2,
            Self::Private
            | Self::Group
            | Self::GuildNewsThread
            | Self::GuildPublicThread
            | Self::GuildPrivateThread => -1,
            Self::Unknown => -2,
        }
    }

    /// Returns true for types that only exist inside a guild.
    #[must_use]
    pub const fn is_guild(self) -> bool {
        !matches!(self, Self::Private | Self::Group | Self::Unknown)
    }

    /// Returns true for voice and stage channels.
    #[must_use]
    pub const fn is_audio(self) -> bool {
        matches!(self, Self::Voice | Self::Stage)
    }

    /// Returns true for the three thread types.
    #[must_use]
    pub const fn is_thread(self) -> bool {
        matches!(
            self,
            Self::GuildNewsThread | Self::GuildPublicThread | Self::GuildPrivateThread
        )
    }

    /// Returns true for channels that hold messages directly. Voice and
    /// stage channels carry a text chat; forums only hold threads.
    #[must_use]
    pub const fn is_message(self) -> bool {
        matches!(
            self,
            Self::Text
                | Self::Private
                | Self::Voice
                | Self::Group
                | Self::News
                | Self::Stage
                | Self::GuildNewsThread
                | Self::GuildPublicThread
                | Self::GuildPrivateThread
        )
    }
}

bitflags::bitflags! {
    /// Channel flag bits.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ChannelFlags: u64 {
        /// Thread is pinned to the top of its forum.
        const PINNED = 1 << 1;
        /// Forum posts must carry at least one tag.
        const REQUIRE_TAG = 1 << 4;
        /// Media channel hides the embedded download options.
        const HIDE_MEDIA_DOWNLOAD_OPTIONS = 1 << 15;
    }
}
