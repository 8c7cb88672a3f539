//! Webhooks and their execute tokens.

use std::fmt;

use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::{ApplicationId, ChannelId, GuildId, User, UserId, WebhookId};
use crate::domain::cdn;
use crate::domain::coded::coded_enum;
use crate::domain::errors::ModelError;
use crate::domain::snowflake::Snowflake;

coded_enum! {
    /// Kind of webhook.
    pub enum WebhookType {
        /// Posts messages with a token.
        Incoming = 1,
        /// Relays messages from a followed announcement channel.
        Follower = 2,
        /// Used for interactions.
        Application = 3,
    }
}

/// Secret part of a webhook URL. Wiped from memory on drop and masked in
/// debug output.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
#[serde(transparent)]
pub struct WebhookToken(String);

impl WebhookToken {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the token with everything but the last four characters
    /// hidden.
    #[must_use]
    pub fn masked(&self) -> String {
        let chars = self.0.chars().count();
        if chars <= 8 {
            return "*".repeat(chars);
        }
        let suffix: String = self.0.chars().skip(chars - 4).collect();
        format!("...{suffix}")
    }
}

impl fmt::Debug for WebhookToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("WebhookToken").field(&self.masked()).finish()
    }
}

/// Guild or channel a follower webhook relays from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WebhookSource {
    #[serde(with = "crate::domain::serde_utils::string_to_u64")]
    pub id: u64,
    #[serde(default)]
    pub name: String,
}

/// A webhook attached to a channel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Webhook {
    id: WebhookId,
    #[serde(rename = "type")]
    kind: WebhookType,
    #[serde(default)]
    guild_id: Option<GuildId>,
    #[serde(default)]
    channel_id: Option<ChannelId>,
    #[serde(default)]
    user: Option<User>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    token: Option<WebhookToken>,
    #[serde(default)]
    application_id: Option<ApplicationId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    source_guild: Option<WebhookSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    source_channel: Option<WebhookSource>,
}

impl Webhook {
    #[must_use]
    pub const fn new(id: WebhookId, kind: WebhookType, channel: ChannelId) -> Self {
        Self {
            id,
            kind,
            guild_id: None,
            channel_id: Some(channel),
            user: None,
            name: None,
            avatar: None,
            token: None,
            application_id: None,
            source_guild: None,
            source_channel: None,
        }
    }

    /// Parses a webhook object.
    ///
    /// # Errors
    ///
    /// Returns `Json` if the text is not a webhook object.
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn with_token(mut self, token: WebhookToken) -> Self {
        self.token = Some(token);
        self
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub const fn with_guild(mut self, guild: GuildId) -> Self {
        self.guild_id = Some(guild);
        self
    }

    #[must_use]
    pub const fn id(&self) -> WebhookId {
        self.id
    }

    #[must_use]
    pub const fn kind(&self) -> WebhookType {
        self.kind
    }

    #[must_use]
    pub const fn guild_id(&self) -> Option<GuildId> {
        self.guild_id
    }

    #[must_use]
    pub const fn channel_id(&self) -> Option<ChannelId> {
        self.channel_id
    }

    /// Creator of the webhook. Absent when fetched with a token.
    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub const fn token(&self) -> Option<&WebhookToken> {
        self.token.as_ref()
    }

    #[must_use]
    pub const fn application_id(&self) -> Option<ApplicationId> {
        self.application_id
    }

    #[must_use]
    pub const fn source_guild(&self) -> Option<&WebhookSource> {
        self.source_guild.as_ref()
    }

    #[must_use]
    pub const fn source_channel(&self) -> Option<&WebhookSource> {
        self.source_channel.as_ref()
    }

    /// Avatar image. Webhook avatars share the user avatar path.
    #[must_use]
    pub fn avatar_url(&self) -> Option<String> {
        self.avatar
            .as_deref()
            .map(|hash| cdn::user_avatar(UserId(self.id.as_u64()), hash))
    }

    /// Execute URL of the webhook.
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` when the token is unknown, which is the case
    /// for follower webhooks and webhooks owned by another application.
    pub fn url(&self) -> Result<String, ModelError> {
        let token = self.token.as_ref().ok_or_else(|| {
            ModelError::invalid_state(format!("webhook {} has no token", self.id))
        })?;
        Ok(cdn::webhook(self.id, token.as_str()))
    }
}

impl Snowflake for Webhook {
    fn snowflake(&self) -> u64 {
        self.id.as_u64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INCOMING: &str = r#"{
        "name": "test webhook",
        "type": 1,
        "channel_id": "199737254929760256",
        "token": "3d89bb7572e0fb30d8128367b3b1b44fecd1726de135cbe28a41f8b2f777c372ba2939e72279b94526ff5d1bd4358d65cf11",
        "avatar": null,
        "guild_id": "199737254929760256",
        "id": "223704706495545344",
        "application_id": null,
        "user": {
            "username": "test",
            "discriminator": "7479",
            "id": "190320984123768832",
            "avatar": "b004ec1740a63ca06ae2e14c5cee11f3",
            "public_flags": 131328
        }
    }"#;

    #[test]
    fn test_incoming_webhook_url() {
        let webhook = Webhook::from_json(INCOMING).unwrap();

        assert_eq!(webhook.kind(), WebhookType::Incoming);
        assert_eq!(webhook.user().map(User::username), Some("test"));
        assert!(
            webhook
                .url()
                .unwrap()
                .starts_with("https://discord.com/api/v10/webhooks/223704706495545344/3d89bb")
        );
    }

    #[test]
    fn test_follower_without_token_is_invalid_state() {
        let json = r#"{
            "type": 2,
            "id": "752831914402115584",
            "name": "Guildy name",
            "avatar": "bb71f469c158984e265093a81b3397fb",
            "channel_id": "561885260615255432",
            "guild_id": "56188498421443265",
            "application_id": null,
            "source_guild": {
                "id": "56188498421476534",
                "name": "Guildy name",
                "icon": "bb71f469c158984e265093a81b3397fb"
            },
            "source_channel": {
                "id": "5618852344134324",
                "name": "announcements"
            }
        }"#;
        let webhook = Webhook::from_json(json).unwrap();

        assert_eq!(webhook.kind(), WebhookType::Follower);
        assert_eq!(
            webhook.source_channel().map(|c| c.name.as_str()),
            Some("announcements")
        );
        assert!(matches!(
            webhook.url(),
            Err(ModelError::InvalidState { .. })
        ));
        assert_eq!(
            webhook.avatar_url().unwrap(),
            "https://cdn.discordapp.com/avatars/752831914402115584/bb71f469c158984e265093a81b3397fb.png"
        );
    }

    #[test]
    fn test_token_is_masked_in_debug() {
        let webhook = Webhook::new(WebhookId(1), WebhookType::Incoming, ChannelId(2))
            .with_token(WebhookToken::new("supersecrettokenvalue"));
        let debug = format!("{webhook:?}");

        assert!(!debug.contains("supersecret"));
        assert!(debug.contains("...alue"));
        assert_eq!(WebhookToken::new("short").masked(), "*****");
    }
}
