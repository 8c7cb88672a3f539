//! Discord user entity.

use serde::{Deserialize, Serialize};

use super::UserId;
use crate::domain::cdn;
use crate::domain::coded::coded_enum;
use crate::domain::mention::{self, Mentionable};
use crate::domain::snowflake::Snowflake;

bitflags::bitflags! {
    /// Badges and account markers shown on a profile.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct UserFlags: u64 {
        const STAFF = 1 << 0;
        const PARTNER = 1 << 1;
        const HYPESQUAD = 1 << 2;
        const BUG_HUNTER_LEVEL_1 = 1 << 3;
        const HYPESQUAD_BRAVERY = 1 << 6;
        const HYPESQUAD_BRILLIANCE = 1 << 7;
        const HYPESQUAD_BALANCE = 1 << 8;
        const PREMIUM_EARLY_SUPPORTER = 1 << 9;
        const TEAM_PSEUDO_USER = 1 << 10;
        const SYSTEM = 1 << 12;
        const BUG_HUNTER_LEVEL_2 = 1 << 14;
        const VERIFIED_BOT = 1 << 16;
        const VERIFIED_DEVELOPER = 1 << 17;
        const CERTIFIED_MODERATOR = 1 << 18;
        const BOT_HTTP_INTERACTIONS = 1 << 19;
        const ACTIVE_DEVELOPER = 1 << 22;
        const QUARANTINED = 1 << 44;
        const COLLABORATOR = 1 << 50;
    }
}

coded_enum! {
    /// Nitro subscription level of a user.
    pub enum PremiumType {
        /// No subscription.
        None = 0,
        /// Nitro Classic.
        NitroClassic = 1,
        /// Nitro.
        Nitro = 2,
        /// Nitro Basic.
        NitroBasic = 3,
    }
}

impl PremiumType {
    /// Returns true for any paid tier.
    #[must_use]
    pub const fn is_subscribed(self) -> bool {
        matches!(self, Self::NitroClassic | Self::Nitro | Self::NitroBasic)
    }
}

/// A Discord account, human or bot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    id: UserId,
    username: String,
    #[serde(default = "default_discriminator")]
    discriminator: String,
    #[serde(default)]
    global_name: Option<String>,
    #[serde(default)]
    avatar: Option<String>,
    #[serde(default)]
    bot: bool,
    #[serde(default)]
    system: bool,
    #[serde(default)]
    banner: Option<String>,
    #[serde(default)]
    accent_color: Option<u32>,
    #[serde(default, with = "crate::domain::serde_utils::bits")]
    flags: UserFlags,
    #[serde(default, with = "crate::domain::serde_utils::bits")]
    public_flags: UserFlags,
    #[serde(default)]
    premium_type: PremiumType,
}

fn default_discriminator() -> String {
    "0".to_string()
}

impl User {
    #[must_use]
    pub fn new(
        id: impl Into<UserId>,
        username: impl Into<String>,
        discriminator: impl Into<String>,
        avatar: Option<String>,
        bot: bool,
    ) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            discriminator: discriminator.into(),
            global_name: None,
            avatar,
            bot,
            system: false,
            banner: None,
            accent_color: None,
            flags: UserFlags::empty(),
            public_flags: UserFlags::empty(),
            premium_type: PremiumType::None,
        }
    }

    #[must_use]
    pub fn with_global_name(mut self, global_name: impl Into<String>) -> Self {
        self.global_name = Some(global_name.into());
        self
    }

    #[must_use]
    pub fn with_banner(mut self, banner: impl Into<String>) -> Self {
        self.banner = Some(banner.into());
        self
    }

    #[must_use]
    pub const fn with_accent_color(mut self, color: u32) -> Self {
        self.accent_color = Some(color);
        self
    }

    #[must_use]
    pub const fn with_flags(mut self, flags: UserFlags) -> Self {
        self.flags = flags;
        self
    }

    #[must_use]
    pub const fn with_public_flags(mut self, flags: UserFlags) -> Self {
        self.public_flags = flags;
        self
    }

    #[must_use]
    pub const fn with_premium_type(mut self, premium_type: PremiumType) -> Self {
        self.premium_type = premium_type;
        self
    }

    #[must_use]
    pub const fn with_system(mut self, system: bool) -> Self {
        self.system = system;
        self
    }

    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub fn discriminator(&self) -> &str {
        &self.discriminator
    }

    #[must_use]
    pub fn global_name(&self) -> Option<&str> {
        self.global_name.as_deref()
    }

    #[must_use]
    pub fn avatar(&self) -> Option<&str> {
        self.avatar.as_deref()
    }

    #[must_use]
    pub const fn is_bot(&self) -> bool {
        self.bot
    }

    #[must_use]
    pub const fn is_system(&self) -> bool {
        self.system
    }

    #[must_use]
    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    #[must_use]
    pub const fn accent_color(&self) -> Option<u32> {
        self.accent_color
    }

    #[must_use]
    pub const fn flags(&self) -> UserFlags {
        self.flags
    }

    #[must_use]
    pub const fn public_flags(&self) -> UserFlags {
        self.public_flags
    }

    #[must_use]
    pub const fn premium_type(&self) -> PremiumType {
        self.premium_type
    }

    #[must_use]
    pub fn display_name(&self) -> String {
        self.global_name.clone().unwrap_or_else(|| self.tag())
    }

    #[must_use]
    pub fn is_migrated(&self) -> bool {
        self.discriminator == "0"
    }

    /// `username#discriminator`, or the bare username for migrated accounts.
    #[must_use]
    pub fn tag(&self) -> String {
        if self.is_migrated() {
            self.username.clone()
        } else {
            format!("{}#{}", self.username, self.discriminator)
        }
    }

    /// Returns the custom avatar URL, if the user set one.
    #[must_use]
    pub fn avatar_url(&self) -> Option<String> {
        self.avatar
            .as_deref()
            .map(|hash| cdn::user_avatar(self.id, hash))
    }

    /// Returns the built-in avatar Discord assigns this user.
    #[must_use]
    pub fn default_avatar_url(&self) -> String {
        cdn::default_avatar(self.id, &self.discriminator)
    }

    /// Returns the avatar Discord would display: custom if set, default
    /// otherwise.
    #[must_use]
    pub fn effective_avatar_url(&self) -> String {
        self.avatar_url()
            .unwrap_or_else(|| self.default_avatar_url())
    }

    /// Returns the profile banner URL, if set.
    #[must_use]
    pub fn banner_url(&self) -> Option<String> {
        self.banner
            .as_deref()
            .map(|hash| cdn::banner(self.id.as_u64(), hash))
    }
}

impl Snowflake for User {
    fn snowflake(&self) -> u64 {
        self.id.as_u64()
    }
}

impl Mentionable for User {
    fn as_mention(&self) -> String {
        mention::user(self.id)
    }
}
