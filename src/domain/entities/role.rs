use serde::{Deserialize, Serialize};

use super::{GuildId, Permissions, RoleId};
use crate::domain::cdn;
use crate::domain::mention::{self, Mentionable};
use crate::domain::snowflake::Snowflake;

/// A guild role.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Role {
    pub id: RoleId,
    pub name: String,
    #[serde(default)]
    pub color: u32,
    #[serde(default)]
    pub hoist: bool,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub unicode_emoji: Option<String>,
    #[serde(default)]
    pub position: i32,
    #[serde(with = "crate::domain::serde_utils::bits_string")]
    pub permissions: Permissions,
    #[serde(default)]
    pub managed: bool,
    #[serde(default)]
    pub mentionable: bool,
}

impl Role {
    #[must_use]
    pub fn new(id: impl Into<RoleId>, name: impl Into<String>, permissions: Permissions) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: 0,
            hoist: false,
            icon: None,
            unicode_emoji: None,
            position: 0,
            permissions,
            managed: false,
            mentionable: false,
        }
    }

    #[must_use]
    pub const fn id(&self) -> RoleId {
        self.id
    }

    /// Returns true for the `@everyone` role of `guild`.
    #[must_use]
    pub const fn is_public_role(&self, guild: GuildId) -> bool {
        self.id.as_u64() == guild.as_u64()
    }

    /// Returns the custom icon URL, if the role has one.
    #[must_use]
    pub fn icon_url(&self) -> Option<String> {
        self.icon.as_deref().map(|hash| cdn::role_icon(self.id, hash))
    }

    /// Returns the colour, or `None` when the role uses the default.
    #[must_use]
    pub const fn color(&self) -> Option<u32> {
        if self.color == 0 {
            None
        } else {
            Some(self.color)
        }
    }
}

impl Snowflake for Role {
    fn snowflake(&self) -> u64 {
        self.id.as_u64()
    }
}

impl Mentionable for Role {
    fn as_mention(&self) -> String {
        // `@everyone` is written literally, not as a role mention.
        if self.name == "@everyone" {
            self.name.clone()
        } else {
            mention::role(self.id)
        }
    }
}
