use super::{ChannelInfo, ChannelType, MessageChannel, RawChannel};
use crate::domain::cdn;
use crate::domain::entities::{ChannelId, MessageId, User, UserId};
use crate::domain::errors::ModelError;
use crate::domain::mention::{self, Mentionable};
use crate::domain::snowflake::Snowflake;

/// Direct message or group direct message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrivateChannel {
    id: ChannelId,
    kind: ChannelType,
    name: String,
    recipients: Vec<User>,
    owner_id: Option<UserId>,
    icon: Option<String>,
    last_message_id: Option<MessageId>,
}

impl PrivateChannel {
    /// Creates a direct message channel with `recipient`.
    #[must_use]
    pub fn direct(id: impl Into<ChannelId>, recipient: User) -> Self {
        Self {
            id: id.into(),
            kind: ChannelType::Private,
            name: recipient.username().to_string(),
            recipients: vec![recipient],
            owner_id: None,
            icon: None,
            last_message_id: None,
        }
    }

    pub(super) fn from_raw(raw: RawChannel) -> Self {
        let kind = raw.channel_type();
        // Unnamed channels are labelled by their recipients, like the client does.
        let name = raw.name.filter(|name| !name.is_empty()).unwrap_or_else(|| {
            raw.recipients
                .iter()
                .map(|user| user.username())
                .collect::<Vec<_>>()
                .join(", ")
        });
        Self {
            id: raw.id,
            kind,
            name,
            recipients: raw.recipients,
            owner_id: raw.owner_id,
            icon: raw.icon,
            last_message_id: raw.last_message_id,
        }
    }

    #[must_use]
    pub fn is_group(&self) -> bool {
        self.kind == ChannelType::Group
    }

    #[must_use]
    pub fn recipients(&self) -> &[User] {
        &self.recipients
    }

    /// The other participant of a direct message.
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` for group channels and for channels whose
    /// recipient has not been delivered yet.
    pub fn recipient(&self) -> Result<&User, ModelError> {
        if self.is_group() {
            return Err(ModelError::invalid_state(
                "group channels have no single recipient",
            ));
        }
        self.recipients.first().ok_or_else(|| {
            ModelError::invalid_state(format!(
                "recipient of channel {} is not available yet",
                self.id
            ))
        })
    }

    /// Owner of a group channel.
    #[must_use]
    pub const fn owner_id(&self) -> Option<UserId> {
        self.owner_id
    }

    /// Icon URL of a group channel.
    #[must_use]
    pub fn icon_url(&self) -> Option<String> {
        self.icon
            .as_deref()
            .map(|hash| format!("{}/channel-icons/{}/{hash}.png", cdn::CDN_BASE, self.id))
    }
}

impl Snowflake for PrivateChannel {
    fn snowflake(&self) -> u64 {
        self.id.as_u64()
    }
}

impl Mentionable for PrivateChannel {
    fn as_mention(&self) -> String {
        mention::channel(self.id)
    }
}

impl ChannelInfo for PrivateChannel {
    fn id(&self) -> ChannelId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn channel_type(&self) -> ChannelType {
        self.kind
    }
}

impl MessageChannel for PrivateChannel {
    fn last_message_id(&self) -> Option<MessageId> {
        self.last_message_id
    }
}
