//! Online status.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::UserId;
use crate::domain::coded::KeyedEnum;

/// Status a user shows to others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OnlineStatus {
    Online,
    Idle,
    DoNotDisturb,
    /// Shown to others as offline.
    Invisible,
    Offline,
    /// A status this version of the model does not know about.
    #[default]
    Unknown,
}

impl KeyedEnum for OnlineStatus {
    const UNKNOWN: Self = Self::Unknown;
    const VARIANTS: &'static [Self] = &[
        Self::Online,
        Self::Idle,
        Self::DoNotDisturb,
        Self::Invisible,
        Self::Offline,
        Self::Unknown,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Idle => "idle",
            Self::DoNotDisturb => "dnd",
            Self::Invisible => "invisible",
            Self::Offline => "offline",
            Self::Unknown => "",
        }
    }
}

impl OnlineStatus {
    /// Returns true if others see the user as connected.
    #[must_use]
    pub const fn appears_online(self) -> bool {
        matches!(self, Self::Online | Self::Idle | Self::DoNotDisturb)
    }
}

impl fmt::Display for OnlineStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl Serialize for OnlineStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

impl<'de> Deserialize<'de> for OnlineStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let key = String::deserialize(deserializer)?;
        let status = Self::from_key(&key);
        if status.is_unknown() && !key.is_empty() {
            tracing::debug!(key = %key, "unrecognised online status, using Unknown");
        }
        Ok(status)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
struct PresenceUser {
    id: UserId,
}

/// A user's status as seen in one guild.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Presence {
    user: PresenceUser,
    #[serde(default)]
    status: OnlineStatus,
}

impl Presence {
    #[must_use]
    pub const fn new(user: UserId, status: OnlineStatus) -> Self {
        Self {
            user: PresenceUser { id: user },
            status,
        }
    }

    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user.id
    }

    #[must_use]
    pub const fn status(&self) -> OnlineStatus {
        self.status
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case("online", OnlineStatus::Online, true)]
    #[test_case("idle", OnlineStatus::Idle, true)]
    #[test_case("dnd", OnlineStatus::DoNotDisturb, true)]
    #[test_case("offline", OnlineStatus::Offline, false)]
    #[test_case("streaming", OnlineStatus::Unknown, false)]
    fn test_status_from_payload(key: &str, expected: OnlineStatus, online: bool) {
        let json = format!(r#"{{"user": {{"id": "80351110224678912"}}, "status": "{key}"}}"#);
        let presence: Presence = serde_json::from_str(&json).unwrap();

        assert_eq!(presence.status(), expected);
        assert_eq!(presence.status().appears_online(), online);
        assert_eq!(presence.user_id(), UserId(80_351_110_224_678_912));
    }

    #[test]
    fn test_status_serializes_as_key() {
        let presence = Presence::new(UserId(1), OnlineStatus::DoNotDisturb);
        let json = serde_json::to_value(presence).unwrap();

        assert_eq!(json["status"], "dnd");
        assert_eq!(json["user"]["id"], "1");
        assert_eq!(OnlineStatus::Invisible.to_string(), "invisible");
    }
}
