//! Auto-moderation rules.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::{AutoModRuleId, ChannelId, GuildId, RoleId, UserId};
use crate::domain::coded::coded_enum;
use crate::domain::errors::{ModelError, check_len};
use crate::domain::snowflake::Snowflake;

/// Longest timeout an auto-moderation action may apply.
pub const MAX_TIMEOUT: Duration = Duration::from_secs(28 * 24 * 60 * 60);

/// Longest custom message a block action may show.
pub const MAX_CUSTOM_MESSAGE_LEN: usize = 150;

coded_enum! {
    /// What makes a rule fire.
    pub enum AutoModTriggerType {
        /// Content matches a user-defined keyword list.
        Keyword = 1,
        /// Content looks like spam.
        Spam = 3,
        /// Content matches one of Discord's word lists.
        KeywordPreset = 4,
        /// Content mentions too many users or roles.
        MentionSpam = 5,
        /// A member profile matches a keyword list.
        MemberProfileKeywords = 6,
    }
}

impl AutoModTriggerType {
    /// How many rules of this type a guild may have. Unknown triggers allow
    /// none.
    #[must_use]
    pub const fn max_per_guild(self) -> u32 {
        match self {
            Self::Keyword => 6,
            Self::Spam | Self::KeywordPreset | Self::MentionSpam | Self::MemberProfileKeywords => {
                1
            }
            Self::Unknown => 0,
        }
    }

    /// Event that rules with this trigger listen to.
    #[must_use]
    pub const fn event_type(self) -> AutoModEventType {
        match self {
            Self::Keyword | Self::Spam | Self::KeywordPreset | Self::MentionSpam => {
                AutoModEventType::MessageSend
            }
            Self::MemberProfileKeywords => AutoModEventType::MemberUpdate,
            Self::Unknown => AutoModEventType::Unknown,
        }
    }
}

coded_enum! {
    /// When a rule is checked.
    pub enum AutoModEventType {
        /// A member sends or edits a message.
        MessageSend = 1,
        /// A member edits their profile.
        MemberUpdate = 2,
    }
}

coded_enum! {
    /// What a rule does when it fires.
    pub enum AutoModResponseType {
        /// Blocks the message, optionally showing a custom explanation.
        BlockMessage = 1,
        /// Posts an alert to a moderator channel.
        SendAlertMessage = 2,
        /// Times the member out.
        Timeout = 3,
        /// Stops the member from interacting until their profile is fixed.
        BlockMemberInteraction = 4,
    }
}

coded_enum! {
    /// Word lists maintained by Discord.
    pub enum KeywordPreset {
        /// Swearing and cursing.
        Profanity = 1,
        /// Sexually explicit language.
        SexualContent = 2,
        /// Personal insults and hate speech.
        Slurs = 3,
    }
}

/// Trigger configuration. Which fields apply depends on the trigger type.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AutoModTriggerMetadata {
    /// Words and wildcard patterns matched by keyword triggers.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keyword_filter: Vec<String>,
    /// Rust-flavoured regular expressions matched by keyword triggers.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub regex_patterns: Vec<String>,
    /// Discord-maintained word lists for preset triggers.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub presets: Vec<KeywordPreset>,
    /// Substrings that never trigger the rule.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allow_list: Vec<String>,
    /// Unique role and user mentions allowed per message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mention_total_limit: Option<u32>,
    /// Whether mention raids are detected automatically.
    #[serde(default)]
    pub mention_raid_protection_enabled: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
struct ActionMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    channel_id: Option<ChannelId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    duration_seconds: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    custom_message: Option<String>,
}

/// One action of a rule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AutoModResponse {
    #[serde(rename = "type")]
    kind: AutoModResponseType,
    #[serde(default)]
    metadata: ActionMetadata,
}

impl AutoModResponse {
    /// Blocks the message.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `custom_message` is longer than
    /// [`MAX_CUSTOM_MESSAGE_LEN`] characters.
    pub fn block_message(custom_message: Option<String>) -> Result<Self, ModelError> {
        if let Some(message) = &custom_message {
            check_len(
                "custom_message",
                message.chars().count(),
                0,
                MAX_CUSTOM_MESSAGE_LEN,
            )?;
        }
        Ok(Self {
            kind: AutoModResponseType::BlockMessage,
            metadata: ActionMetadata {
                custom_message,
                ..ActionMetadata::default()
            },
        })
    }

    /// Sends an alert to `channel`.
    #[must_use]
    pub fn send_alert(channel: ChannelId) -> Self {
        Self {
            kind: AutoModResponseType::SendAlertMessage,
            metadata: ActionMetadata {
                channel_id: Some(channel),
                ..ActionMetadata::default()
            },
        }
    }

    /// Times the member out for `duration`, rounded down to whole seconds.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` unless `duration` is at least one second
    /// and at most [`MAX_TIMEOUT`].
    pub fn timeout(duration: Duration) -> Result<Self, ModelError> {
        if duration.as_secs() == 0 || duration > MAX_TIMEOUT {
            return Err(ModelError::invalid_argument(
                "duration",
                format!("{duration:?} outside 1s..=28 days"),
            ));
        }
        Ok(Self {
            kind: AutoModResponseType::Timeout,
            metadata: ActionMetadata {
                duration_seconds: Some(duration.as_secs()),
                ..ActionMetadata::default()
            },
        })
    }

    /// Blocks the member from interacting with the guild.
    #[must_use]
    pub fn block_member_interaction() -> Self {
        Self {
            kind: AutoModResponseType::BlockMemberInteraction,
            metadata: ActionMetadata::default(),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> AutoModResponseType {
        self.kind
    }

    /// Channel that receives alerts.
    #[must_use]
    pub const fn alert_channel(&self) -> Option<ChannelId> {
        self.metadata.channel_id
    }

    #[must_use]
    pub fn timeout_duration(&self) -> Option<Duration> {
        self.metadata.duration_seconds.map(Duration::from_secs)
    }

    #[must_use]
    pub fn custom_message(&self) -> Option<&str> {
        self.metadata.custom_message.as_deref()
    }
}

/// Auto-moderation rule of a guild.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AutoModRule {
    id: AutoModRuleId,
    guild_id: GuildId,
    name: String,
    creator_id: UserId,
    event_type: AutoModEventType,
    trigger_type: AutoModTriggerType,
    #[serde(default)]
    trigger_metadata: AutoModTriggerMetadata,
    #[serde(default)]
    actions: Vec<AutoModResponse>,
    #[serde(default)]
    enabled: bool,
    #[serde(default)]
    exempt_roles: Vec<RoleId>,
    #[serde(default)]
    exempt_channels: Vec<ChannelId>,
}

impl AutoModRule {
    /// Parses a rule object.
    ///
    /// # Errors
    ///
    /// Returns `Json` if the text is not a rule object.
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub const fn id(&self) -> AutoModRuleId {
        self.id
    }

    #[must_use]
    pub const fn guild_id(&self) -> GuildId {
        self.guild_id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn creator_id(&self) -> UserId {
        self.creator_id
    }

    #[must_use]
    pub const fn event_type(&self) -> AutoModEventType {
        self.event_type
    }

    #[must_use]
    pub const fn trigger_type(&self) -> AutoModTriggerType {
        self.trigger_type
    }

    #[must_use]
    pub const fn trigger_metadata(&self) -> &AutoModTriggerMetadata {
        &self.trigger_metadata
    }

    #[must_use]
    pub fn actions(&self) -> &[AutoModResponse] {
        &self.actions
    }

    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[must_use]
    pub fn exempt_roles(&self) -> &[RoleId] {
        &self.exempt_roles
    }

    #[must_use]
    pub fn exempt_channels(&self) -> &[ChannelId] {
        &self.exempt_channels
    }

    /// Returns true if a member holding `roles` is exempt from the rule.
    #[must_use]
    pub fn exempts_member(&self, roles: &[RoleId]) -> bool {
        roles.iter().any(|role| self.exempt_roles.contains(role))
    }

    #[must_use]
    pub fn exempts_channel(&self, channel: ChannelId) -> bool {
        self.exempt_channels.contains(&channel)
    }
}

impl Snowflake for AutoModRule {
    fn snowflake(&self) -> u64 {
        self.id.as_u64()
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::domain::coded::CodedEnum;

    #[test_case(1, AutoModTriggerType::Keyword, 6 ; "keyword")]
    #[test_case(3, AutoModTriggerType::Spam, 1 ; "spam")]
    #[test_case(4, AutoModTriggerType::KeywordPreset, 1 ; "preset")]
    #[test_case(5, AutoModTriggerType::MentionSpam, 1 ; "mention spam")]
    #[test_case(6, AutoModTriggerType::MemberProfileKeywords, 1 ; "member profile")]
    #[test_case(2, AutoModTriggerType::Unknown, 0 ; "retired harmful link")]
    #[test_case(99, AutoModTriggerType::Unknown, 0 ; "future")]
    fn test_trigger_max_per_guild(code: i32, kind: AutoModTriggerType, max: u32) {
        let resolved = AutoModTriggerType::from_code(code);
        assert_eq!(resolved, kind);
        assert_eq!(resolved.max_per_guild(), max);
    }

    #[test]
    fn test_trigger_event_pairing() {
        assert_eq!(
            AutoModTriggerType::MemberProfileKeywords.event_type(),
            AutoModEventType::MemberUpdate
        );
        assert_eq!(
            AutoModTriggerType::Spam.event_type(),
            AutoModEventType::MessageSend
        );
    }

    #[test]
    fn test_rule_from_payload() {
        let json = r#"{
            "id": "969707018069872670",
            "guild_id": "613425648685547541",
            "name": "Keyword Filter 1",
            "creator_id": "423457898095789043",
            "trigger_type": 1,
            "event_type": 1,
            "actions": [
                {"type": 1, "metadata": {"custom_message": "Please keep financial discussions limited to the #finance channel"}},
                {"type": 2, "metadata": {"channel_id": "123456789123456789"}},
                {"type": 3, "metadata": {"duration_seconds": 60}},
                {"type": 9}
            ],
            "trigger_metadata": {
                "keyword_filter": ["cat*", "*dog", "*ana*", "i like c++"],
                "regex_patterns": ["(b|c)at", "^(?:[0-9]{1,3}\\.){3}[0-9]{1,3}$"]
            },
            "enabled": true,
            "exempt_roles": ["323456789123456789", "423456789123456789"],
            "exempt_channels": ["523456789123456789"]
        }"#;

        let rule = AutoModRule::from_json(json).unwrap();

        assert_eq!(rule.trigger_type(), AutoModTriggerType::Keyword);
        assert_eq!(rule.trigger_metadata().keyword_filter.len(), 4);
        assert_eq!(rule.actions().len(), 4);
        assert_eq!(rule.actions()[1].alert_channel(), Some(ChannelId(123_456_789_123_456_789)));
        assert_eq!(rule.actions()[2].timeout_duration(), Some(Duration::from_secs(60)));
        assert_eq!(rule.actions()[3].kind(), AutoModResponseType::Unknown);
        assert!(rule.exempts_member(&[RoleId(1), RoleId(423_456_789_123_456_789)]));
        assert!(rule.exempts_channel(ChannelId(523_456_789_123_456_789)));
        assert!(rule.is_enabled());
    }

    #[test]
    fn test_timeout_bounds() {
        assert!(AutoModResponse::timeout(Duration::from_secs(60)).is_ok());
        assert!(AutoModResponse::timeout(MAX_TIMEOUT).is_ok());
        assert!(matches!(
            AutoModResponse::timeout(Duration::from_millis(500)),
            Err(ModelError::InvalidArgument { name: "duration", .. })
        ));
        assert!(AutoModResponse::timeout(MAX_TIMEOUT + Duration::from_secs(1)).is_err());
    }

    #[test]
    fn test_block_message_custom_text_limit() {
        let ok = AutoModResponse::block_message(Some("no".into())).unwrap();
        assert_eq!(ok.custom_message(), Some("no"));
        assert!(AutoModResponse::block_message(Some("x".repeat(151))).is_err());
    }

    #[test]
    fn test_response_serializes_sparse_metadata() {
        let alert = AutoModResponse::send_alert(ChannelId(5));
        let json = serde_json::to_value(&alert).unwrap();
        assert_eq!(json, serde_json::json!({"type": 2, "metadata": {"channel_id": "5"}}));
    }
}
