use super::base::{ChannelCore, guild_channel};
use super::{Categorizable, ChannelType, RawChannel};
use crate::domain::entities::{ChannelId, GuildId};
use crate::domain::errors::ModelError;

/// Category grouping guild channels in the sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    core: ChannelCore,
    kind: ChannelType,
}

guild_channel!(Category);

impl Category {
    #[must_use]
    pub fn new(id: impl Into<ChannelId>, guild: impl Into<GuildId>, name: impl Into<String>) -> Self {
        Self {
            core: ChannelCore::new(id.into(), guild.into(), name.into()),
            kind: ChannelType::Category,
        }
    }

    pub(super) fn from_raw(mut raw: RawChannel) -> Result<Self, ModelError> {
        let mut core = ChannelCore::from_raw(&mut raw)?;
        // Categories cannot nest.
        core.parent_id = None;
        Ok(Self {
            core,
            kind: ChannelType::Category,
        })
    }

    /// Returns true if `channel` is filed under this category.
    #[must_use]
    pub fn contains(&self, channel: &(impl Categorizable + ?Sized)) -> bool {
        channel.guild() == self.core.guild_id && channel.parent_category() == Some(self.core.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{TextChannel, VoiceChannel};

    #[test]
    fn test_contains_children_of_same_guild() {
        let category = Category::new(10_u64, 1_u64, "Text Channels");
        let inside = TextChannel::new(11_u64, 1_u64, "general").with_parent(ChannelId(10));
        let outside = VoiceChannel::new(12_u64, 1_u64, "Lounge");
        let other_guild = TextChannel::new(13_u64, 2_u64, "general").with_parent(ChannelId(10));

        assert!(category.contains(&inside));
        assert!(!category.contains(&outside));
        assert!(!category.contains(&other_guild));
    }
}
