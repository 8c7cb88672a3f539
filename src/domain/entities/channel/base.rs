use super::{PermissionOverwrite, RawChannel};
use crate::domain::entities::{ChannelId, GuildId};
use crate::domain::errors::ModelError;

/// Fields shared by every sidebar-listed guild channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct ChannelCore {
    pub(super) id: ChannelId,
    pub(super) guild_id: GuildId,
    pub(super) name: String,
    pub(super) position: i32,
    pub(super) parent_id: Option<ChannelId>,
    pub(super) overwrites: Vec<PermissionOverwrite>,
}

impl ChannelCore {
    pub(super) fn new(id: ChannelId, guild_id: GuildId, name: String) -> Self {
        Self {
            id,
            guild_id,
            name,
            position: 0,
            parent_id: None,
            overwrites: Vec::new(),
        }
    }

    pub(super) fn from_raw(raw: &mut RawChannel) -> Result<Self, ModelError> {
        Ok(Self {
            id: raw.id,
            guild_id: raw.require_guild()?,
            name: raw.take_name()?,
            position: raw.position.unwrap_or_default(),
            parent_id: raw.parent_id,
            overwrites: std::mem::take(&mut raw.permission_overwrites),
        })
    }
}

/// Implements the identity traits and the [`GuildChannel`] capability for a
/// struct holding a `core: ChannelCore` and a `kind: ChannelType`, plus the
/// builder methods over the core.
///
/// [`GuildChannel`]: super::GuildChannel
macro_rules! guild_channel {
    ($ty:ident) => {
        impl $ty {
            /// Sets the sidebar position.
            #[must_use]
            pub const fn with_position(mut self, position: i32) -> Self {
                self.core.position = position;
                self
            }

            /// Adds a permission overwrite.
            #[must_use]
            pub fn with_overwrite(mut self, overwrite: $crate::domain::entities::PermissionOverwrite) -> Self {
                self.core.overwrites.push(overwrite);
                self
            }
        }

        impl $crate::domain::snowflake::Snowflake for $ty {
            fn snowflake(&self) -> u64 {
                self.core.id.as_u64()
            }
        }

        impl $crate::domain::mention::Mentionable for $ty {
            fn as_mention(&self) -> String {
                $crate::domain::mention::channel(self.core.id)
            }
        }

        impl $crate::domain::entities::ChannelInfo for $ty {
            fn id(&self) -> $crate::domain::entities::ChannelId {
                self.core.id
            }

            fn name(&self) -> &str {
                &self.core.name
            }

            fn channel_type(&self) -> $crate::domain::entities::ChannelType {
                self.kind
            }

            fn guild_id(&self) -> Option<$crate::domain::entities::GuildId> {
                Some(self.core.guild_id)
            }
        }

        impl $crate::domain::entities::GuildChannel for $ty {
            fn guild(&self) -> $crate::domain::entities::GuildId {
                self.core.guild_id
            }

            fn position(&self) -> i32 {
                self.core.position
            }

            fn permission_overwrites(&self) -> &[$crate::domain::entities::PermissionOverwrite] {
                &self.core.overwrites
            }
        }
    };
    ($ty:ident, categorizable) => {
        $crate::domain::entities::channel::base::guild_channel!($ty);

        impl $ty {
            /// Places the channel inside a category.
            #[must_use]
            pub const fn with_parent(mut self, category: $crate::domain::entities::ChannelId) -> Self {
                self.core.parent_id = Some(category);
                self
            }
        }

        impl $crate::domain::entities::Categorizable for $ty {
            fn parent_category(&self) -> Option<$crate::domain::entities::ChannelId> {
                self.core.parent_id
            }
        }
    };
}

pub(super) use guild_channel;
