use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{AttachmentId, ChannelId, GuildId, MessageId, RoleId, User, UserId, WebhookId};
use crate::domain::cdn;
use crate::domain::coded::coded_enum;
use crate::domain::mention::{self, MentionType};
use crate::domain::snowflake::Snowflake;

coded_enum! {
    /// Discord message type.
    #[allow(missing_docs)]
    pub enum MessageType {
        Default = 0,
        RecipientAdd = 1,
        RecipientRemove = 2,
        Call = 3,
        ChannelNameChange = 4,
        ChannelIconChange = 5,
        ChannelPinnedMessage = 6,
        UserJoin = 7,
        GuildBoost = 8,
        GuildBoostTier1 = 9,
        GuildBoostTier2 = 10,
        GuildBoostTier3 = 11,
        ChannelFollowAdd = 12,
        GuildDiscoveryDisqualified = 14,
        GuildDiscoveryRequalified = 15,
        GuildDiscoveryGracePeriodInitialWarning = 16,
        GuildDiscoveryGracePeriodFinalWarning = 17,
        ThreadCreated = 18,
        Reply = 19,
        ChatInputCommand = 20,
        ThreadStarterMessage = 21,
        GuildInviteReminder = 22,
        ContextMenuCommand = 23,
        AutoModerationAction = 24,
        RoleSubscriptionPurchase = 25,
        InteractionPremiumUpsell = 26,
        StageStart = 27,
        StageEnd = 28,
        StageSpeaker = 29,
        StageTopic = 31,
        GuildApplicationPremiumSubscription = 32,
        GuildIncidentAlertModeEnabled = 36,
        GuildIncidentAlertModeDisabled = 37,
        GuildIncidentReportRaid = 38,
        GuildIncidentReportFalseAlarm = 39,
        PurchaseNotification = 44,
        PollResult = 46,
    }
}

impl MessageType {
    /// Returns true for messages Discord generates rather than a user or
    /// application. Unknown types count as system messages.
    #[must_use]
    pub const fn is_system(self) -> bool {
        !matches!(
            self,
            Self::Default
                | Self::Reply
                | Self::ChatInputCommand
                | Self::ThreadStarterMessage
                | Self::ContextMenuCommand
        )
    }

    /// Returns true if messages of this type can be deleted. Unknown types
    /// are reported as not deletable.
    #[must_use]
    pub const fn is_deletable(self) -> bool {
        !matches!(
            self,
            Self::RecipientAdd
                | Self::RecipientRemove
                | Self::Call
                | Self::ChannelNameChange
                | Self::ChannelIconChange
                | Self::ThreadStarterMessage
                | Self::Unknown
        )
    }
}

bitflags::bitflags! {
    /// Message flag bits.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct MessageFlags: u64 {
        const CROSSPOSTED = 1 << 0;
        const IS_CROSSPOST = 1 << 1;
        const SUPPRESS_EMBEDS = 1 << 2;
        const SOURCE_MESSAGE_DELETED = 1 << 3;
        const URGENT = 1 << 4;
        const HAS_THREAD = 1 << 5;
        const EPHEMERAL = 1 << 6;
        const LOADING = 1 << 7;
        const FAILED_TO_MENTION_SOME_ROLES_IN_THREAD = 1 << 8;
        const SUPPRESS_NOTIFICATIONS = 1 << 12;
        const IS_VOICE_MESSAGE = 1 << 13;
    }
}

/// Discord message attachment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Attachment {
    id: AttachmentId,
    filename: String,
    size: u64,
    url: String,
    #[serde(default)]
    proxy_url: Option<String>,
    #[serde(default)]
    content_type: Option<String>,
    #[serde(default)]
    width: Option<u32>,
    #[serde(default)]
    height: Option<u32>,
    #[serde(default)]
    ephemeral: bool,
}

impl Attachment {
    #[must_use]
    pub fn new(
        id: impl Into<AttachmentId>,
        filename: impl Into<String>,
        size: u64,
        url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            filename: filename.into(),
            size,
            url: url.into(),
            proxy_url: None,
            content_type: None,
            width: None,
            height: None,
            ephemeral: false,
        }
    }

    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    #[must_use]
    pub const fn id(&self) -> AttachmentId {
        self.id
    }

    #[must_use]
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Size in bytes.
    #[must_use]
    pub const fn size(&self) -> u64 {
        self.size
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Media proxy URL, falling back to the source URL.
    #[must_use]
    pub fn proxy_url(&self) -> &str {
        self.proxy_url.as_deref().unwrap_or(&self.url)
    }

    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Lower-cased extension of the file name, if any.
    #[must_use]
    pub fn file_extension(&self) -> Option<String> {
        self.filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
    }

    #[must_use]
    pub fn is_image(&self) -> bool {
        self.content_type
            .as_ref()
            .is_some_and(|ct| ct.starts_with("image/"))
    }

    #[must_use]
    pub fn is_video(&self) -> bool {
        self.content_type
            .as_ref()
            .is_some_and(|ct| ct.starts_with("video/"))
    }

    /// Pixel dimensions of image and video attachments.
    #[must_use]
    pub const fn dimensions(&self) -> Option<(u32, u32)> {
        match (self.width, self.height) {
            (Some(w), Some(h)) => Some((w, h)),
            _ => None,
        }
    }

    /// Returns true if the attachment disappears with its ephemeral message.
    #[must_use]
    pub const fn is_ephemeral(&self) -> bool {
        self.ephemeral
    }
}

/// Reference to another message (for replies).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageReference {
    #[serde(default)]
    message_id: Option<MessageId>,
    #[serde(default)]
    channel_id: Option<ChannelId>,
    #[serde(default)]
    guild_id: Option<GuildId>,
}

impl MessageReference {
    #[must_use]
    pub const fn new(message_id: Option<MessageId>, channel_id: Option<ChannelId>) -> Self {
        Self {
            message_id,
            channel_id,
            guild_id: None,
        }
    }

    /// Reference to `message` in `channel`.
    #[must_use]
    pub const fn to(message: MessageId, channel: ChannelId, guild: Option<GuildId>) -> Self {
        Self {
            message_id: Some(message),
            channel_id: Some(channel),
            guild_id: guild,
        }
    }

    #[must_use]
    pub const fn message_id(&self) -> Option<MessageId> {
        self.message_id
    }

    #[must_use]
    pub const fn channel_id(&self) -> Option<ChannelId> {
        self.channel_id
    }

    #[must_use]
    pub const fn guild_id(&self) -> Option<GuildId> {
        self.guild_id
    }

    /// Jump link to the referenced message, when both ids are known.
    #[must_use]
    pub fn jump_url(&self) -> Option<String> {
        Some(cdn::message_jump(
            self.guild_id,
            self.channel_id?,
            self.message_id?,
        ))
    }
}

/// Discord message entity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    id: MessageId,
    channel_id: ChannelId,
    #[serde(default)]
    guild_id: Option<GuildId>,
    author: User,
    #[serde(default)]
    content: String,
    timestamp: DateTime<Utc>,
    #[serde(default)]
    edited_timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    tts: bool,
    #[serde(default)]
    mention_everyone: bool,
    #[serde(default)]
    mentions: Vec<User>,
    #[serde(default)]
    mention_roles: Vec<RoleId>,
    #[serde(default)]
    attachments: Vec<Attachment>,
    #[serde(default)]
    pinned: bool,
    #[serde(rename = "type", default)]
    kind: MessageType,
    #[serde(default)]
    webhook_id: Option<WebhookId>,
    #[serde(default, with = "crate::domain::serde_utils::bits")]
    flags: MessageFlags,
    #[serde(default, rename = "message_reference")]
    reference: Option<MessageReference>,
    #[serde(default, rename = "referenced_message")]
    referenced: Option<Box<Self>>,
}

impl Message {
    #[must_use]
    pub fn new(
        id: impl Into<MessageId>,
        channel_id: impl Into<ChannelId>,
        author: User,
        content: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            channel_id: channel_id.into(),
            guild_id: None,
            author,
            content: content.into(),
            timestamp,
            edited_timestamp: None,
            tts: false,
            mention_everyone: false,
            mentions: Vec::new(),
            mention_roles: Vec::new(),
            attachments: Vec::new(),
            pinned: false,
            kind: MessageType::Default,
            webhook_id: None,
            flags: MessageFlags::empty(),
            reference: None,
            referenced: None,
        }
    }

    /// Parses a message object.
    ///
    /// # Errors
    ///
    /// Returns `Json` if the text is not a message object.
    pub fn from_json(json: &str) -> Result<Self, crate::domain::errors::ModelError> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub const fn with_guild(mut self, guild: GuildId) -> Self {
        self.guild_id = Some(guild);
        self
    }

    #[must_use]
    pub const fn with_kind(mut self, kind: MessageType) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn with_attachments(mut self, attachments: Vec<Attachment>) -> Self {
        self.attachments = attachments;
        self
    }

    #[must_use]
    pub const fn with_reference(mut self, reference: MessageReference) -> Self {
        self.reference = Some(reference);
        self
    }

    #[must_use]
    pub fn with_referenced(mut self, message: Self) -> Self {
        self.referenced = Some(Box::new(message));
        self
    }

    #[must_use]
    pub const fn with_edited_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.edited_timestamp = Some(timestamp);
        self
    }

    #[must_use]
    pub const fn with_pinned(mut self, pinned: bool) -> Self {
        self.pinned = pinned;
        self
    }

    #[must_use]
    pub fn with_mentions(mut self, mentions: Vec<User>) -> Self {
        self.mentions = mentions;
        self
    }

    #[must_use]
    pub const fn id(&self) -> MessageId {
        self.id
    }

    #[must_use]
    pub const fn channel_id(&self) -> ChannelId {
        self.channel_id
    }

    #[must_use]
    pub const fn guild_id(&self) -> Option<GuildId> {
        self.guild_id
    }

    #[must_use]
    pub const fn author(&self) -> &User {
        &self.author
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    #[must_use]
    pub const fn edited_timestamp(&self) -> Option<DateTime<Utc>> {
        self.edited_timestamp
    }

    #[must_use]
    pub const fn kind(&self) -> MessageType {
        self.kind
    }

    #[must_use]
    pub const fn flags(&self) -> MessageFlags {
        self.flags
    }

    #[must_use]
    pub fn attachments(&self) -> &[Attachment] {
        &self.attachments
    }

    #[must_use]
    pub const fn reference(&self) -> Option<&MessageReference> {
        self.reference.as_ref()
    }

    /// The replied-to message, when Discord resolved it.
    #[must_use]
    pub fn referenced(&self) -> Option<&Self> {
        self.referenced.as_deref()
    }

    #[must_use]
    pub const fn is_edited(&self) -> bool {
        self.edited_timestamp.is_some()
    }

    #[must_use]
    pub const fn is_pinned(&self) -> bool {
        self.pinned
    }

    #[must_use]
    pub const fn is_tts(&self) -> bool {
        self.tts
    }

    #[must_use]
    pub fn is_reply(&self) -> bool {
        self.kind == MessageType::Reply
    }

    /// Returns true if a webhook posted the message.
    #[must_use]
    pub const fn is_webhook(&self) -> bool {
        self.webhook_id.is_some()
    }

    #[must_use]
    pub const fn webhook_id(&self) -> Option<WebhookId> {
        self.webhook_id
    }

    #[must_use]
    pub const fn has_attachments(&self) -> bool {
        !self.attachments.is_empty()
    }

    /// Link that opens the message in a client.
    #[must_use]
    pub fn jump_url(&self) -> String {
        cdn::message_jump(self.guild_id, self.channel_id, self.id)
    }

    /// Users the payload lists as mentioned.
    #[must_use]
    pub fn mentions(&self) -> &[User] {
        &self.mentions
    }

    /// Roles the payload lists as mentioned.
    #[must_use]
    pub fn mentioned_roles(&self) -> &[RoleId] {
        &self.mention_roles
    }

    /// Users mentioned in the content, in order of appearance.
    #[must_use]
    pub fn mentioned_user_ids(&self) -> Vec<UserId> {
        mention::parse_mentions(&self.content, MentionType::User)
            .into_iter()
            .map(UserId)
            .collect()
    }

    /// Channels mentioned in the content, in order of appearance.
    #[must_use]
    pub fn mentioned_channel_ids(&self) -> Vec<ChannelId> {
        mention::parse_mentions(&self.content, MentionType::Channel)
            .into_iter()
            .map(ChannelId)
            .collect()
    }

    /// Returns true if the message pings `@everyone` or `@here`.
    #[must_use]
    pub const fn mentions_everyone(&self) -> bool {
        self.mention_everyone
    }

    /// Returns true if `user` was mentioned directly.
    #[must_use]
    pub fn mentions_user(&self, user: UserId) -> bool {
        self.mentions.iter().any(|u| u.id() == user)
    }

    #[must_use]
    pub fn formatted_timestamp(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }

    #[must_use]
    pub fn formatted_date(&self) -> String {
        self.timestamp.format("%Y-%m-%d").to_string()
    }
}

impl Snowflake for Message {
    fn snowflake(&self) -> u64 {
        self.id.as_u64()
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::domain::coded::CodedEnum;

    fn create_test_author() -> User {
        User::new(123_u64, "testuser", "0", None, false)
    }

    #[test]
    fn test_message_creation() {
        let author = create_test_author();
        let timestamp = Utc::now();
        let message = Message::new(1_u64, 100_u64, author, "Hello, world!", timestamp);

        assert_eq!(message.id().as_u64(), 1);
        assert_eq!(message.channel_id().as_u64(), 100);
        assert_eq!(message.content(), "Hello, world!");
        assert_eq!(message.author().username(), "testuser");
        assert!(!message.is_edited());
        assert!(!message.is_reply());
        assert_eq!(message.jump_url(), "https://discord.com/channels/@me/100/1");
    }

    #[test]
    fn test_message_with_reply() {
        let author = create_test_author();
        let timestamp = Utc::now();
        let referenced = Message::new(1_u64, 100_u64, author.clone(), "Original", timestamp);
        let reply = Message::new(2_u64, 100_u64, author, "Reply", timestamp)
            .with_kind(MessageType::Reply)
            .with_reference(MessageReference::to(MessageId(1), ChannelId(100), Some(GuildId(7))))
            .with_referenced(referenced);

        assert!(reply.is_reply());
        assert!(reply.referenced().is_some());
        assert_eq!(
            reply.reference().and_then(MessageReference::jump_url).as_deref(),
            Some("https://discord.com/channels/7/100/1")
        );
    }

    #[test_case(0, false, true ; "default")]
    #[test_case(1, true, false ; "recipient add")]
    #[test_case(7, true, true ; "member join")]
    #[test_case(19, false, true ; "reply")]
    #[test_case(21, false, false ; "thread starter")]
    #[test_case(46, true, true ; "poll result")]
    #[test_case(13, true, false ; "unassigned code")]
    fn test_message_type_attributes(code: i32, system: bool, deletable: bool) {
        let kind = MessageType::from_code(code);
        assert_eq!(kind.is_system(), system);
        assert_eq!(kind.is_deletable(), deletable);
    }

    #[test]
    fn test_attachment_kinds() {
        let image = Attachment::new(1_u64, "photo.JPG", 1000, "https://example.com/photo.jpg")
            .with_content_type("image/jpeg");
        let file = Attachment::new(2_u64, "document.pdf", 2000, "https://example.com/doc.pdf")
            .with_content_type("application/pdf");

        assert!(image.is_image());
        assert!(!image.is_video());
        assert_eq!(image.file_extension().as_deref(), Some("jpg"));
        assert_eq!(image.proxy_url(), "https://example.com/photo.jpg");
        assert!(!file.is_image());
    }

    #[test]
    fn test_message_from_payload() {
        let json = r#"{
            "id": "334385199974967042",
            "channel_id": "290926798999357250",
            "guild_id": "290926798626357999",
            "author": {"id": "53908099506183680", "username": "Mason"},
            "content": "hey <@1> and <@!2>, see <#3>",
            "timestamp": "2017-07-11T17:27:07.299000+00:00",
            "edited_timestamp": null,
            "tts": false,
            "mention_everyone": false,
            "mentions": [{"id": "1", "username": "one"}],
            "mention_roles": ["9"],
            "attachments": [{
                "id": "5",
                "filename": "clip.mp4",
                "size": 4096,
                "url": "https://cdn.discordapp.com/attachments/1/5/clip.mp4",
                "proxy_url": "https://media.discordapp.net/attachments/1/5/clip.mp4",
                "content_type": "video/mp4",
                "width": 640,
                "height": 360
            }],
            "pinned": false,
            "type": 0,
            "flags": 4
        }"#;

        let message = Message::from_json(json).unwrap();

        assert_eq!(message.kind(), MessageType::Default);
        assert!(message.flags().contains(MessageFlags::SUPPRESS_EMBEDS));
        assert_eq!(message.mentioned_user_ids(), vec![UserId(1), UserId(2)]);
        assert_eq!(message.mentioned_channel_ids(), vec![ChannelId(3)]);
        assert_eq!(message.mentioned_roles(), &[RoleId(9)]);
        assert!(message.mentions_user(UserId(1)));
        assert!(!message.mentions_user(UserId(2)));
        assert_eq!(message.attachments()[0].dimensions(), Some((640, 360)));
        assert!(message.attachments()[0].is_video());
        assert_eq!(
            message.jump_url(),
            "https://discord.com/channels/290926798626357999/290926798999357250/334385199974967042"
        );
        assert_eq!(message.formatted_date(), "2017-07-11");
    }

    #[test]
    fn test_future_message_type_is_unknown() {
        let json = r#"{
            "id": "1", "channel_id": "2", "author": {"id": "3", "username": "x"},
            "timestamp": "2024-01-01T00:00:00Z", "type": 250
        }"#;
        let message = Message::from_json(json).unwrap();
        assert_eq!(message.kind(), MessageType::Unknown);
        assert!(!message.kind().is_deletable());
    }
}
