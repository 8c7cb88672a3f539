use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{GuildId, RoleId, User, UserId};
use crate::domain::cdn;
use crate::domain::errors::ModelError;
use crate::domain::mention::Mentionable;

/// A user's membership in one guild.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Member {
    pub user: Option<User>,
    pub nick: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub roles: Vec<RoleId>,
    #[serde(default)]
    pub joined_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub premium_since: Option<DateTime<Utc>>,
    #[serde(default)]
    pub deaf: bool,
    #[serde(default)]
    pub mute: bool,
    #[serde(default)]
    pub pending: bool,
    #[serde(default)]
    pub communication_disabled_until: Option<DateTime<Utc>>,
}

impl Member {
    #[must_use]
    pub fn new(user: User) -> Self {
        Self {
            user: Some(user),
            nick: None,
            avatar: None,
            roles: Vec::new(),
            joined_at: None,
            premium_since: None,
            deaf: false,
            mute: false,
            pending: false,
            communication_disabled_until: None,
        }
    }

    #[must_use]
    pub fn with_nick(mut self, nick: impl Into<String>) -> Self {
        self.nick = Some(nick.into());
        self
    }

    #[must_use]
    pub fn with_roles(mut self, roles: Vec<RoleId>) -> Self {
        self.roles = roles;
        self
    }

    #[must_use]
    pub const fn with_timeout_until(mut self, until: DateTime<Utc>) -> Self {
        self.communication_disabled_until = Some(until);
        self
    }

    #[must_use]
    pub fn user_id(&self) -> Option<UserId> {
        self.user.as_ref().map(User::id)
    }

    #[must_use]
    pub fn roles(&self) -> &[RoleId] {
        &self.roles
    }

    /// Returns the attached user.
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` for partial members delivered without their
    /// user object (message create events, for instance).
    pub fn require_user(&self) -> Result<&User, ModelError> {
        self.user
            .as_ref()
            .ok_or_else(|| ModelError::invalid_state("member payload did not include a user"))
    }

    /// Nickname if set, otherwise the user's display name.
    #[must_use]
    pub fn effective_name(&self) -> Option<String> {
        self.nick
            .clone()
            .or_else(|| self.user.as_ref().map(User::display_name))
    }

    /// Returns true while a timeout is in effect at `now`.
    #[must_use]
    pub fn is_timed_out(&self, now: DateTime<Utc>) -> bool {
        self.communication_disabled_until
            .is_some_and(|until| until > now)
    }

    /// Returns true if the member currently boosts the guild.
    #[must_use]
    pub const fn is_boosting(&self) -> bool {
        self.premium_since.is_some()
    }

    /// Guild-specific avatar URL, if the member set one.
    #[must_use]
    pub fn avatar_url(&self, guild: GuildId) -> Option<String> {
        let hash = self.avatar.as_deref()?;
        let user = self.user_id()?;
        Some(cdn::member_avatar(guild, user, hash))
    }

    /// Guild avatar if set, otherwise the user's effective avatar.
    #[must_use]
    pub fn effective_avatar_url(&self, guild: GuildId) -> Option<String> {
        self.avatar_url(guild)
            .or_else(|| self.user.as_ref().map(User::effective_avatar_url))
    }

    /// Mention markup for this member.
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` when the payload carried no user.
    pub fn mention(&self) -> Result<String, ModelError> {
        self.require_user().map(Mentionable::as_mention)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    fn member() -> Member {
        Member::new(User::new(10_u64, "handle", "0", None, false))
    }

    #[test]
    fn test_effective_name() {
        assert_eq!(member().effective_name().as_deref(), Some("handle"));
        assert_eq!(
            member().with_nick("nick").effective_name().as_deref(),
            Some("nick")
        );
    }

    #[test]
    fn test_timeout() {
        let now = Utc::now();
        let timed_out = member().with_timeout_until(now + Duration::minutes(5));
        assert!(timed_out.is_timed_out(now));
        assert!(!timed_out.is_timed_out(now + Duration::minutes(10)));
        assert!(!member().is_timed_out(now));
    }

    #[test]
    fn test_partial_member_without_user() {
        let json = r#"{"nick": null, "roles": ["1", "2"], "joined_at": "2015-04-26T06:26:56.936000+00:00"}"#;
        let partial: Member = serde_json::from_str(json).unwrap();

        assert_eq!(partial.roles(), &[RoleId(1), RoleId(2)]);
        assert!(partial.joined_at.is_some());
        assert!(matches!(
            partial.require_user(),
            Err(ModelError::InvalidState { .. })
        ));
        assert_eq!(partial.effective_name(), None);
        assert!(partial.mention().is_err());
    }

    #[test]
    fn test_member_avatar_url() {
        let mut m = member();
        assert_eq!(
            m.effective_avatar_url(GuildId(5)).as_deref(),
            Some("https://cdn.discordapp.com/embed/avatars/0.png")
        );
        m.avatar = Some("abc".into());
        assert_eq!(
            m.avatar_url(GuildId(5)).as_deref(),
            Some("https://cdn.discordapp.com/guilds/5/users/10/avatars/abc.png")
        );
        assert_eq!(m.mention().unwrap(), "<@10>");
    }
}
