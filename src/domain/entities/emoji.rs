use serde::{Deserialize, Serialize};

use super::{EmojiId, RoleId, User};
use crate::domain::cdn;
use crate::domain::errors::ModelError;
use crate::domain::mention::{self, Mentionable};
use crate::domain::snowflake::Snowflake;

/// A guild or application emoji.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomEmoji {
    id: EmojiId,
    name: String,
    #[serde(default)]
    animated: bool,
    #[serde(default)]
    roles: Vec<RoleId>,
    #[serde(default)]
    user: Option<User>,
    #[serde(default = "available")]
    available: bool,
}

const fn available() -> bool {
    true
}

impl CustomEmoji {
    #[must_use]
    pub fn new(id: impl Into<EmojiId>, name: impl Into<String>, animated: bool) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            animated,
            roles: Vec::new(),
            user: None,
            available: true,
        }
    }

    /// Parses an emoji object.
    ///
    /// # Errors
    ///
    /// Returns `Json` if the text is not an emoji object. Unicode emojis,
    /// which carry no id, are rejected.
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn with_roles(mut self, roles: impl IntoIterator<Item = RoleId>) -> Self {
        self.roles = roles.into_iter().collect();
        self
    }

    #[must_use]
    pub const fn id(&self) -> EmojiId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn is_animated(&self) -> bool {
        self.animated
    }

    /// Roles allowed to use the emoji. Empty means everyone.
    #[must_use]
    pub fn roles(&self) -> &[RoleId] {
        &self.roles
    }

    /// Uploader, only present with `MANAGE_GUILD_EXPRESSIONS`.
    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// False when the guild lost the boosts that unlocked this emoji.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.available
    }

    #[must_use]
    pub fn is_usable_by(&self, member_roles: &[RoleId]) -> bool {
        self.available
            && (self.roles.is_empty() || self.roles.iter().any(|r| member_roles.contains(r)))
    }

    #[must_use]
    pub fn image_url(&self) -> String {
        cdn::emoji(self.id, self.animated)
    }
}

impl Snowflake for CustomEmoji {
    fn snowflake(&self) -> u64 {
        self.id.as_u64()
    }
}

impl Mentionable for CustomEmoji {
    fn as_mention(&self) -> String {
        mention::emoji(&self.name, self.id, self.animated)
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case(false, "<:ferris:41771983429993937>", "https://cdn.discordapp.com/emojis/41771983429993937.png" ; "static")]
    #[test_case(true, "<a:ferris:41771983429993937>", "https://cdn.discordapp.com/emojis/41771983429993937.gif" ; "animated")]
    fn test_mention_and_image(animated: bool, mention: &str, url: &str) {
        let emoji = CustomEmoji::new(41_771_983_429_993_937_u64, "ferris", animated);

        assert_eq!(emoji.as_mention(), mention);
        assert_eq!(emoji.image_url(), url);
    }

    #[test]
    fn test_role_restricted_emoji() {
        let json = r#"{
            "id": "41771983429993937",
            "name": "LUL",
            "roles": ["41771983429993000", "41771983429993111"],
            "require_colons": true,
            "managed": false,
            "animated": false
        }"#;
        let emoji = CustomEmoji::from_json(json).unwrap();

        assert!(emoji.is_available());
        assert!(emoji.is_usable_by(&[RoleId(41_771_983_429_993_111)]));
        assert!(!emoji.is_usable_by(&[RoleId(1)]));
        assert!(CustomEmoji::new(1_u64, "open", false).is_usable_by(&[]));
    }

    #[test]
    fn test_unicode_emoji_is_rejected() {
        let result = CustomEmoji::from_json(r#"{"id": null, "name": "🔥"}"#);
        assert!(matches!(result, Err(ModelError::Json(_))));
    }
}
