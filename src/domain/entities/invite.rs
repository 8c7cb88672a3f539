//! Invites.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ChannelId, GuildId, User};
use crate::domain::cdn;
use crate::domain::coded::coded_enum;
use crate::domain::errors::ModelError;

coded_enum! {
    /// What a voice channel invite points at.
    pub enum InviteTargetType {
        /// Plain channel invite.
        None = 0,
        /// A user's stream.
        Stream = 1,
        /// An embedded activity.
        EmbeddedApplication = 2,
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
struct PartialTarget<Id> {
    id: Id,
    #[serde(default)]
    name: Option<String>,
}

/// An invite to a guild channel or group DM.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Invite {
    code: String,
    #[serde(default)]
    guild: Option<PartialTarget<GuildId>>,
    #[serde(default)]
    channel: Option<PartialTarget<ChannelId>>,
    #[serde(default)]
    inviter: Option<User>,
    #[serde(default)]
    target_type: InviteTargetType,
    #[serde(default)]
    uses: Option<u32>,
    #[serde(default)]
    max_uses: Option<u32>,
    #[serde(default)]
    max_age: Option<u32>,
    #[serde(default)]
    temporary: bool,
    #[serde(default)]
    expires_at: Option<DateTime<Utc>>,
}

impl Invite {
    /// Parses an invite object.
    ///
    /// # Errors
    ///
    /// Returns `Json` if the text is not an invite object.
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    #[must_use]
    pub fn url(&self) -> String {
        cdn::invite(&self.code)
    }

    #[must_use]
    pub fn guild_id(&self) -> Option<GuildId> {
        self.guild.as_ref().map(|guild| guild.id)
    }

    #[must_use]
    pub fn guild_name(&self) -> Option<&str> {
        self.guild.as_ref().and_then(|guild| guild.name.as_deref())
    }

    #[must_use]
    pub fn channel_id(&self) -> Option<ChannelId> {
        self.channel.as_ref().map(|channel| channel.id)
    }

    #[must_use]
    pub const fn inviter(&self) -> Option<&User> {
        self.inviter.as_ref()
    }

    #[must_use]
    pub const fn target_type(&self) -> InviteTargetType {
        self.target_type
    }

    /// Use count. Only present on invites fetched with metadata.
    #[must_use]
    pub const fn uses(&self) -> Option<u32> {
        self.uses
    }

    /// Use limit, `0` meaning unlimited.
    #[must_use]
    pub const fn max_uses(&self) -> Option<u32> {
        self.max_uses
    }

    /// Lifetime in seconds, `0` meaning it never expires.
    #[must_use]
    pub const fn max_age(&self) -> Option<u32> {
        self.max_age
    }

    /// Returns true if joining through this invite grants temporary
    /// membership.
    #[must_use]
    pub const fn is_temporary(&self) -> bool {
        self.temporary
    }

    #[must_use]
    pub const fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }

    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|at| at <= now)
    }
}

/// A guild's custom invite code and how many times it was used.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct VanityInvite {
    code: String,
    #[serde(default)]
    uses: u32,
}

impl VanityInvite {
    #[must_use]
    pub fn new(code: impl Into<String>, uses: u32) -> Self {
        Self {
            code: code.into(),
            uses,
        }
    }

    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    #[must_use]
    pub const fn uses(&self) -> u32 {
        self.uses
    }

    /// Shareable link, `https://discord.gg/{code}`.
    #[must_use]
    pub fn url(&self) -> String {
        cdn::invite(&self.code)
    }
}

impl fmt::Display for VanityInvite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_vanity_invite_value_semantics() {
        let invite: VanityInvite = serde_json::from_str(r#"{"code": "rust", "uses": 42}"#).unwrap();

        assert_eq!(invite.code(), "rust");
        assert_eq!(invite.uses(), 42);
        assert_eq!(invite.to_string(), "https://discord.gg/rust");

        let same = VanityInvite::new("rust", 42);
        let more_uses = VanityInvite::new("rust", 43);
        assert_eq!(invite, same);
        assert_ne!(invite, more_uses);

        let set: HashSet<_> = [invite, same, more_uses].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_invite_from_payload() {
        let json = r#"{
            "type": 0,
            "code": "0vCdhLbwjZZTWZLD",
            "guild": {
                "id": "165176875973476352",
                "name": "CS:GO Fraggers Only",
                "splash": null,
                "icon": null
            },
            "channel": {
                "id": "165176875973476352",
                "name": "illuminati",
                "type": 0
            },
            "inviter": {
                "id": "115590097100865541",
                "username": "speed",
                "avatar": "deadbeef",
                "discriminator": "7653",
                "public_flags": 131328
            },
            "target_type": 1,
            "expires_at": "2018-06-10T18:21:51.000000+00:00"
        }"#;
        let invite = Invite::from_json(json).unwrap();

        assert_eq!(invite.url(), "https://discord.gg/0vCdhLbwjZZTWZLD");
        assert_eq!(invite.guild_id(), Some(GuildId(165_176_875_973_476_352)));
        assert_eq!(invite.guild_name(), Some("CS:GO Fraggers Only"));
        assert_eq!(invite.channel_id(), Some(ChannelId(165_176_875_973_476_352)));
        assert_eq!(invite.target_type(), InviteTargetType::Stream);
        assert_eq!(invite.inviter().map(User::username), Some("speed"));
        assert!(invite.is_expired(Utc::now()));
        assert_eq!(invite.uses(), None);
    }

    #[test]
    fn test_target_type_codes() {
        assert_eq!(InviteTargetType::from(1), InviteTargetType::Stream);
        assert_eq!(InviteTargetType::from(7), InviteTargetType::Unknown);
    }
}
