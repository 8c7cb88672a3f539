//! Discord guild entity.

use serde::{Deserialize, Serialize};

use super::{ChannelId, GuildId, UserId};
use crate::domain::cdn;
use crate::domain::coded::coded_enum;
use crate::domain::snowflake::Snowflake;

coded_enum! {
    /// Requirements a member must meet before talking in the guild.
    pub enum VerificationLevel {
        /// Unrestricted.
        None = 0,
        /// Verified email required.
        Low = 1,
        /// Registered for longer than 5 minutes.
        Medium = 2,
        /// Member of the guild for longer than 10 minutes.
        High = 3,
        /// Verified phone number required.
        VeryHigh = 4,
    }
}

coded_enum! {
    /// Default notification setting for new members.
    pub enum NotificationLevel {
        /// Notify on every message.
        AllMessages = 0,
        /// Notify only on mentions.
        MentionsOnly = 1,
    }
}

coded_enum! {
    /// Which messages the explicit media filter scans.
    pub enum ExplicitContentLevel {
        /// Nothing is scanned.
        Off = 0,
        /// Members without roles are scanned.
        NoRole = 1,
        /// Everyone is scanned.
        All = 2,
    }
}

impl ExplicitContentLevel {
    /// Human readable description of the filter.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Off => "Don't scan any messages.",
            Self::NoRole => "Scan messages from members without a role.",
            Self::All => "Scan messages sent by all members.",
            Self::Unknown => "Unknown filter level!",
        }
    }
}

coded_enum! {
    /// Two-factor requirement for moderation actions.
    pub enum MfaLevel {
        /// No requirement.
        None = 0,
        /// Moderators need 2FA enabled.
        TwoFactorAuth = 1,
    }
}

coded_enum! {
    /// Age rating of a guild.
    pub enum NsfwLevel {
        /// Not rated.
        Default = 0,
        /// Explicit content.
        Explicit = 1,
        /// Safe for everyone.
        Safe = 2,
        /// Age restricted.
        AgeRestricted = 3,
    }
}

coded_enum! {
    /// Server boost level, which raises several per-guild limits.
    pub enum BoostTier {
        /// No level reached.
        None = 0,
        /// Level 1.
        Tier1 = 1,
        /// Level 2.
        Tier2 = 2,
        /// Level 3.
        Tier3 = 3,
    }
}

const MIB: u64 = 1 << 20;

impl BoostTier {
    /// Highest voice bitrate in bits per second. Unknown tiers get the
    /// limits of an unboosted guild.
    #[must_use]
    pub const fn max_bitrate(self) -> u32 {
        match self {
            Self::None | Self::Unknown => 96_000,
            Self::Tier1 => 128_000,
            Self::Tier2 => 256_000,
            Self::Tier3 => 384_000,
        }
    }

    /// Number of custom emoji slots.
    #[must_use]
    pub const fn max_emojis(self) -> u32 {
        match self {
            Self::None | Self::Unknown => 50,
            Self::Tier1 => 100,
            Self::Tier2 => 150,
            Self::Tier3 => 250,
        }
    }

    /// Upload limit in bytes.
    #[must_use]
    pub const fn max_file_size(self) -> u64 {
        match self {
            Self::None | Self::Tier1 | Self::Unknown => 10 * MIB,
            Self::Tier2 => 50 * MIB,
            Self::Tier3 => 100 * MIB,
        }
    }
}

/// Discord guild (server) information.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Guild {
    id: GuildId,
    name: String,
    #[serde(default)]
    icon: Option<String>,
    #[serde(default)]
    splash: Option<String>,
    #[serde(default)]
    banner: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    owner_id: Option<UserId>,
    #[serde(default)]
    afk_channel_id: Option<ChannelId>,
    #[serde(default)]
    afk_timeout: u32,
    #[serde(default)]
    system_channel_id: Option<ChannelId>,
    #[serde(default)]
    features: Vec<String>,
    #[serde(default)]
    vanity_url_code: Option<String>,
    #[serde(default)]
    verification_level: VerificationLevel,
    #[serde(default)]
    default_message_notifications: NotificationLevel,
    #[serde(default)]
    explicit_content_filter: ExplicitContentLevel,
    #[serde(default)]
    mfa_level: MfaLevel,
    #[serde(default)]
    nsfw_level: NsfwLevel,
    #[serde(default)]
    premium_tier: BoostTier,
    #[serde(default)]
    premium_subscription_count: u32,
    #[serde(default)]
    max_members: Option<u32>,
}

impl Guild {
    /// Creates a new guild with the given ID and name.
    #[must_use]
    pub fn new(id: impl Into<GuildId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: None,
            splash: None,
            banner: None,
            description: None,
            owner_id: None,
            afk_channel_id: None,
            afk_timeout: 300,
            system_channel_id: None,
            features: Vec::new(),
            vanity_url_code: None,
            verification_level: VerificationLevel::None,
            default_message_notifications: NotificationLevel::AllMessages,
            explicit_content_filter: ExplicitContentLevel::Off,
            mfa_level: MfaLevel::None,
            nsfw_level: NsfwLevel::Default,
            premium_tier: BoostTier::None,
            premium_subscription_count: 0,
            max_members: None,
        }
    }

    /// Sets the guild icon hash.
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Sets the owner.
    #[must_use]
    pub const fn with_owner(mut self, owner: UserId) -> Self {
        self.owner_id = Some(owner);
        self
    }

    /// Sets the vanity invite code.
    #[must_use]
    pub fn with_vanity_code(mut self, code: impl Into<String>) -> Self {
        self.vanity_url_code = Some(code.into());
        self
    }

    /// Sets the boost tier and boost count.
    #[must_use]
    pub const fn with_boosts(mut self, tier: BoostTier, count: u32) -> Self {
        self.premium_tier = tier;
        self.premium_subscription_count = count;
        self
    }

    /// Returns the guild ID.
    #[must_use]
    pub const fn id(&self) -> GuildId {
        self.id
    }

    /// Returns the guild name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the guild icon hash.
    #[must_use]
    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub const fn owner_id(&self) -> Option<UserId> {
        self.owner_id
    }

    #[must_use]
    pub const fn afk_channel_id(&self) -> Option<ChannelId> {
        self.afk_channel_id
    }

    /// AFK timeout in seconds.
    #[must_use]
    pub const fn afk_timeout(&self) -> u32 {
        self.afk_timeout
    }

    #[must_use]
    pub const fn system_channel_id(&self) -> Option<ChannelId> {
        self.system_channel_id
    }

    #[must_use]
    pub fn features(&self) -> &[String] {
        &self.features
    }

    /// Returns true if the guild has the named feature flag (`"COMMUNITY"`,
    /// `"VANITY_URL"`, ...).
    #[must_use]
    pub fn has_feature(&self, feature: &str) -> bool {
        self.features.iter().any(|f| f == feature)
    }

    #[must_use]
    pub fn vanity_code(&self) -> Option<&str> {
        self.vanity_url_code.as_deref()
    }

    #[must_use]
    pub const fn verification_level(&self) -> VerificationLevel {
        self.verification_level
    }

    #[must_use]
    pub const fn default_notification_level(&self) -> NotificationLevel {
        self.default_message_notifications
    }

    #[must_use]
    pub const fn explicit_content_level(&self) -> ExplicitContentLevel {
        self.explicit_content_filter
    }

    #[must_use]
    pub const fn mfa_level(&self) -> MfaLevel {
        self.mfa_level
    }

    #[must_use]
    pub const fn nsfw_level(&self) -> NsfwLevel {
        self.nsfw_level
    }

    #[must_use]
    pub const fn boost_tier(&self) -> BoostTier {
        self.premium_tier
    }

    #[must_use]
    pub const fn boost_count(&self) -> u32 {
        self.premium_subscription_count
    }

    #[must_use]
    pub const fn max_members(&self) -> Option<u32> {
        self.max_members
    }

    /// Highest bitrate voice channels may use. `VIP_REGIONS` guilds always
    /// get tier 3 quality.
    #[must_use]
    pub fn max_bitrate(&self) -> u32 {
        let tier = self.premium_tier.max_bitrate();
        if self.has_feature("VIP_REGIONS") {
            tier.max(BoostTier::Tier3.max_bitrate())
        } else {
            tier
        }
    }

    #[must_use]
    pub fn icon_url(&self) -> Option<String> {
        self.icon.as_deref().map(|hash| cdn::guild_icon(self.id, hash))
    }

    #[must_use]
    pub fn splash_url(&self) -> Option<String> {
        self.splash
            .as_deref()
            .map(|hash| cdn::guild_splash(self.id, hash))
    }

    #[must_use]
    pub fn banner_url(&self) -> Option<String> {
        self.banner
            .as_deref()
            .map(|hash| cdn::banner(self.id.as_u64(), hash))
    }

    /// Invite link for the vanity code, if the guild has one.
    #[must_use]
    pub fn vanity_url(&self) -> Option<String> {
        self.vanity_url_code.as_deref().map(cdn::invite)
    }

    /// Returns true if `user` owns the guild.
    #[must_use]
    pub fn is_owner(&self, user: UserId) -> bool {
        self.owner_id == Some(user)
    }
}

impl Snowflake for Guild {
    fn snowflake(&self) -> u64 {
        self.id.as_u64()
    }
}
