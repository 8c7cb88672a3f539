//! Typed snowflake ids.

use crate::domain::snowflake::snowflake_id;

snowflake_id!(
    /// Unique identifier for a Discord channel or thread.
    ChannelId
);
snowflake_id!(
    /// Unique identifier for a Discord guild (server).
    GuildId
);
snowflake_id!(
    /// Unique identifier for a Discord user.
    UserId
);
snowflake_id!(
    /// Unique identifier for a guild role. The `@everyone` role shares its
    /// guild's id.
    RoleId
);
snowflake_id!(
    /// Unique identifier for a Discord message.
    MessageId
);
snowflake_id!(
    /// Unique identifier for a webhook.
    WebhookId
);
snowflake_id!(
    /// Unique identifier for a custom emoji.
    EmojiId
);
snowflake_id!(
    /// Unique identifier for a premium SKU.
    SkuId
);
snowflake_id!(
    /// Unique identifier for an entitlement.
    EntitlementId
);
snowflake_id!(
    /// Unique identifier for an application.
    ApplicationId
);
snowflake_id!(
    /// Unique identifier for an auto-moderation rule.
    AutoModRuleId
);
snowflake_id!(
    /// Unique identifier for an application command.
    CommandId
);
snowflake_id!(
    /// Unique identifier for a forum tag.
    ForumTagId
);
snowflake_id!(
    /// Unique identifier for a message attachment.
    AttachmentId
);

impl RoleId {
    /// Returns the id of the `@everyone` role of `guild`.
    #[must_use]
    pub const fn everyone(guild: GuildId) -> Self {
        Self(guild.as_u64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::ModelError;
    use crate::domain::snowflake::Snowflake;

    #[test]
    fn test_id_display() {
        let id = GuildId(123_456_789);
        assert_eq!(format!("{id}"), "123456789");
    }

    #[test]
    fn test_id_from_str_is_strict() {
        assert_eq!("123456789".parse::<UserId>().unwrap(), UserId(123_456_789));
        assert!(matches!(
            "not-an-id".parse::<UserId>(),
            Err(ModelError::InvalidSnowflake { .. })
        ));
    }

    #[test]
    fn test_id_serde_accepts_string_and_number() {
        let a: ChannelId = serde_json::from_str("\"41771983423143937\"").unwrap();
        let b: ChannelId = serde_json::from_str("41771983423143937").unwrap();
        assert_eq!(a, b);
        assert_eq!(serde_json::to_string(&a).unwrap(), "\"41771983423143937\"");

        let none: Option<ChannelId> = serde_json::from_str("null").unwrap();
        assert_eq!(none, None);
    }

    #[test]
    fn test_id_time_created() {
        let id = MessageId(175_928_847_299_117_063);
        assert_eq!(id.time_created().timestamp_millis(), 1_462_015_105_796);
    }

    #[test]
    fn test_everyone_role() {
        assert_eq!(RoleId::everyone(GuildId(42)), RoleId(42));
    }
}
