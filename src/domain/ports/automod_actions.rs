//! Deferred auto-moderation operations.

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::entities::{
    AutoModEventType, AutoModResponse, AutoModRule, AutoModRuleId, AutoModTriggerMetadata,
    AutoModTriggerType, ChannelId, GuildId, RoleId,
};
use crate::domain::errors::{ActionError, ModelError, check_len};

pub const MAX_KEYWORDS: usize = 1000;
pub const MAX_KEYWORD_LEN: usize = 60;
pub const MAX_REGEX_PATTERNS: usize = 10;
pub const MAX_REGEX_LEN: usize = 260;
pub const MAX_EXEMPT_ROLES: usize = 20;
pub const MAX_EXEMPT_CHANNELS: usize = 50;

/// A new auto-moderation rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AutoModRuleRequest {
    #[serde(skip)]
    pub guild_id: GuildId,
    name: String,
    event_type: AutoModEventType,
    trigger_type: AutoModTriggerType,
    trigger_metadata: AutoModTriggerMetadata,
    actions: Vec<AutoModResponse>,
    enabled: bool,
    exempt_roles: Vec<RoleId>,
    exempt_channels: Vec<ChannelId>,
}

impl AutoModRuleRequest {
    /// Starts an enabled rule without actions. The event type follows from
    /// the trigger.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` unless the name has 1 to 100 characters
    /// and the trigger is a known type.
    pub fn new(
        guild_id: GuildId,
        name: impl Into<String>,
        trigger: AutoModTriggerType,
    ) -> Result<Self, ModelError> {
        let name = name.into();
        check_len("name", name.chars().count(), 1, 100)?;
        if trigger == AutoModTriggerType::Unknown {
            return Err(ModelError::invalid_argument(
                "trigger_type",
                "cannot create a rule with an unknown trigger",
            ));
        }

        Ok(Self {
            guild_id,
            name,
            event_type: trigger.event_type(),
            trigger_type: trigger,
            trigger_metadata: AutoModTriggerMetadata::default(),
            actions: Vec::new(),
            enabled: true,
            exempt_roles: Vec::new(),
            exempt_channels: Vec::new(),
        })
    }

    /// Words or wildcard patterns that trigger the rule.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for more than [`MAX_KEYWORDS`] keywords or
    /// a keyword longer than [`MAX_KEYWORD_LEN`] characters.
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Result<Self, ModelError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let keywords = bounded_strings("keyword_filter", keywords, MAX_KEYWORDS, MAX_KEYWORD_LEN)?;
        self.trigger_metadata.keyword_filter = keywords;
        Ok(self)
    }

    /// # Errors
    ///
    /// Returns `InvalidArgument` for more than [`MAX_REGEX_PATTERNS`]
    /// patterns or a pattern longer than [`MAX_REGEX_LEN`] characters.
    pub fn with_regex_patterns<I, S>(mut self, patterns: I) -> Result<Self, ModelError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let patterns =
            bounded_strings("regex_patterns", patterns, MAX_REGEX_PATTERNS, MAX_REGEX_LEN)?;
        self.trigger_metadata.regex_patterns = patterns;
        Ok(self)
    }

    /// Substrings exempt from the rule.
    ///
    /// # Errors
    ///
    /// Same limits as [`Self::with_keywords`].
    pub fn with_allow_list<I, S>(mut self, allowed: I) -> Result<Self, ModelError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let allowed = bounded_strings("allow_list", allowed, MAX_KEYWORDS, MAX_KEYWORD_LEN)?;
        self.trigger_metadata.allow_list = allowed;
        Ok(self)
    }

    /// Replaces the whole trigger metadata.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if any list breaks the limits of
    /// [`Self::with_keywords`], [`Self::with_regex_patterns`] or
    /// [`Self::with_allow_list`].
    pub fn with_metadata(mut self, metadata: AutoModTriggerMetadata) -> Result<Self, ModelError> {
        let AutoModTriggerMetadata {
            keyword_filter,
            regex_patterns,
            allow_list,
            ..
        } = &metadata;
        check_strings("keyword_filter", keyword_filter, MAX_KEYWORDS, MAX_KEYWORD_LEN)?;
        check_strings("regex_patterns", regex_patterns, MAX_REGEX_PATTERNS, MAX_REGEX_LEN)?;
        check_strings("allow_list", allow_list, MAX_KEYWORDS, MAX_KEYWORD_LEN)?;
        self.trigger_metadata = metadata;
        Ok(self)
    }

    #[must_use]
    pub fn with_action(mut self, action: AutoModResponse) -> Self {
        self.actions.push(action);
        self
    }

    #[must_use]
    pub const fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// # Errors
    ///
    /// Returns `InvalidArgument` for more than [`MAX_EXEMPT_ROLES`] roles.
    pub fn exempt_roles(mut self, roles: impl IntoIterator<Item = RoleId>) -> Result<Self, ModelError> {
        let roles: Vec<_> = roles.into_iter().collect();
        check_len("exempt_roles", roles.len(), 0, MAX_EXEMPT_ROLES)?;
        self.exempt_roles = roles;
        Ok(self)
    }

    /// # Errors
    ///
    /// Returns `InvalidArgument` for more than [`MAX_EXEMPT_CHANNELS`]
    /// channels.
    pub fn exempt_channels(
        mut self,
        channels: impl IntoIterator<Item = ChannelId>,
    ) -> Result<Self, ModelError> {
        let channels: Vec<_> = channels.into_iter().collect();
        check_len("exempt_channels", channels.len(), 0, MAX_EXEMPT_CHANNELS)?;
        self.exempt_channels = channels;
        Ok(self)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn trigger_type(&self) -> AutoModTriggerType {
        self.trigger_type
    }

    #[must_use]
    pub const fn event_type(&self) -> AutoModEventType {
        self.event_type
    }

    #[must_use]
    pub fn actions(&self) -> &[AutoModResponse] {
        &self.actions
    }
}

fn bounded_strings<I, S>(
    name: &'static str,
    values: I,
    max_count: usize,
    max_len: usize,
) -> Result<Vec<String>, ModelError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let values: Vec<String> = values.into_iter().map(Into::into).collect();
    check_strings(name, &values, max_count, max_len)?;
    Ok(values)
}

fn check_strings(
    name: &'static str,
    values: &[String],
    max_count: usize,
    max_len: usize,
) -> Result<(), ModelError> {
    check_len(name, values.len(), 0, max_count)?;
    for value in values {
        check_len(name, value.chars().count(), 1, max_len)?;
    }
    Ok(())
}

/// Auto-moderation operations carried out by the REST layer.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AutoModActions: Send + Sync {
    /// Creates a rule and returns it as stored by Discord.
    async fn create_rule(&self, request: AutoModRuleRequest) -> Result<AutoModRule, ActionError>;

    async fn delete_rule(
        &self,
        guild_id: GuildId,
        rule_id: AutoModRuleId,
        reason: Option<String>,
    ) -> Result<(), ActionError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_request_rejects_bad_input() {
        assert!(matches!(
            AutoModRuleRequest::new(GuildId(1), "", AutoModTriggerType::Keyword),
            Err(ModelError::InvalidArgument { name: "name", .. })
        ));
        assert!(matches!(
            AutoModRuleRequest::new(GuildId(1), "rule", AutoModTriggerType::Unknown),
            Err(ModelError::InvalidArgument { name: "trigger_type", .. })
        ));

        let request = AutoModRuleRequest::new(GuildId(1), "rule", AutoModTriggerType::Keyword).unwrap();
        assert!(request.clone().with_keywords(["x".repeat(61)]).is_err());
        assert!(request.clone().with_keywords([""]).is_err());
        assert!(
            request
                .clone()
                .with_keywords((0..1001).map(|i| format!("word{i}")))
                .is_err()
        );
        assert!(request.clone().with_regex_patterns(vec!["a"; 11]).is_err());
        assert!(request.exempt_roles((0..21).map(RoleId)).is_err());
    }

    #[test]
    fn test_rule_request_body() {
        let request = AutoModRuleRequest::new(GuildId(1), "No links", AutoModTriggerType::Keyword)
            .unwrap()
            .with_keywords(["*http*"])
            .unwrap()
            .with_action(AutoModResponse::block_message(None).unwrap());

        assert_eq!(request.event_type(), AutoModEventType::MessageSend);
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["name"], "No links");
        assert_eq!(body["event_type"], 1);
        assert_eq!(body["trigger_type"], 1);
        assert_eq!(body["trigger_metadata"]["keyword_filter"][0], "*http*");
        assert_eq!(body["actions"][0]["type"], 1);
        assert_eq!(body["enabled"], true);
    }

    #[test]
    fn test_metadata_is_held_to_the_same_limits() {
        let request =
            AutoModRuleRequest::new(GuildId(1), "rule", AutoModTriggerType::Keyword).unwrap();

        let too_many_keywords = AutoModTriggerMetadata {
            keyword_filter: vec!["x".repeat(500); 5000],
            ..AutoModTriggerMetadata::default()
        };
        assert!(matches!(
            request.clone().with_metadata(too_many_keywords),
            Err(ModelError::InvalidArgument { name: "keyword_filter", .. })
        ));

        let long_regex = AutoModTriggerMetadata {
            regex_patterns: vec!["y".repeat(MAX_REGEX_LEN + 1)],
            ..AutoModTriggerMetadata::default()
        };
        assert!(matches!(
            request.clone().with_metadata(long_regex),
            Err(ModelError::InvalidArgument { name: "regex_patterns", .. })
        ));

        let empty_allowed = AutoModTriggerMetadata {
            allow_list: vec![String::new()],
            ..AutoModTriggerMetadata::default()
        };
        assert!(request.clone().with_metadata(empty_allowed).is_err());

        let valid = AutoModTriggerMetadata {
            keyword_filter: vec!["spam".into()],
            mention_total_limit: Some(5),
            ..AutoModTriggerMetadata::default()
        };
        let request = request.with_metadata(valid).unwrap();
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["trigger_metadata"]["keyword_filter"][0], "spam");
    }

    #[test]
    fn test_profile_trigger_uses_member_event() {
        let request = AutoModRuleRequest::new(
            GuildId(1),
            "Profiles",
            AutoModTriggerType::MemberProfileKeywords,
        )
        .unwrap();

        assert_eq!(request.event_type(), AutoModEventType::MemberUpdate);
    }

    #[tokio::test]
    async fn test_mocked_delete_rule() {
        let mut actions = MockAutoModActions::new();
        actions
            .expect_delete_rule()
            .withf(|guild, rule, _| *guild == GuildId(1) && *rule == AutoModRuleId(2))
            .returning(|_, _, _| Ok(()));

        actions
            .delete_rule(GuildId(1), AutoModRuleId(2), Some("obsolete".into()))
            .await
            .unwrap();
    }
}
