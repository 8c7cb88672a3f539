//! Deferred channel operations.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::entities::{
    Channel, ChannelId, Invite, InviteTargetType, MAX_SLOWMODE, PermissionOverwrite,
};
use crate::domain::errors::{ActionError, ModelError, check_len};

/// Lowest bitrate Discord accepts for an audio channel.
pub const MIN_BITRATE: u32 = 8_000;

/// Longest lifetime an invite can be given.
pub const MAX_INVITE_AGE: Duration = Duration::from_secs(7 * 24 * 60 * 60);

/// Highest use limit an invite can be given.
pub const MAX_INVITE_USES: u32 = 100;

/// Changes to apply to a channel. Fields left unset are not sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChannelEdit {
    #[serde(skip)]
    pub channel_id: ChannelId,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    topic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    position: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    nsfw: Option<bool>,
    #[serde(rename = "rate_limit_per_user", skip_serializing_if = "Option::is_none")]
    slowmode: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bitrate: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    parent_id: Option<ChannelId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    permission_overwrites: Option<Vec<PermissionOverwrite>>,
    #[serde(skip)]
    pub reason: Option<String>,
}

impl ChannelEdit {
    #[must_use]
    pub const fn new(channel_id: ChannelId) -> Self {
        Self {
            channel_id,
            name: None,
            topic: None,
            position: None,
            nsfw: None,
            slowmode: None,
            bitrate: None,
            parent_id: None,
            permission_overwrites: None,
            reason: None,
        }
    }

    /// # Errors
    ///
    /// Returns `InvalidArgument` unless the name has 1 to 100 characters.
    pub fn with_name(mut self, name: impl Into<String>) -> Result<Self, ModelError> {
        let name = name.into();
        check_len("name", name.chars().count(), 1, 100)?;
        self.name = Some(name);
        Ok(self)
    }

    /// # Errors
    ///
    /// Returns `InvalidArgument` if the topic is longer than 1024 characters.
    pub fn with_topic(mut self, topic: impl Into<String>) -> Result<Self, ModelError> {
        let topic = topic.into();
        check_len("topic", topic.chars().count(), 0, 1024)?;
        self.topic = Some(topic);
        Ok(self)
    }

    #[must_use]
    pub const fn with_position(mut self, position: i32) -> Self {
        self.position = Some(position);
        self
    }

    #[must_use]
    pub const fn with_nsfw(mut self, nsfw: bool) -> Self {
        self.nsfw = Some(nsfw);
        self
    }

    /// # Errors
    ///
    /// Returns `InvalidArgument` if `seconds` exceeds [`MAX_SLOWMODE`].
    pub fn with_slowmode(mut self, seconds: u32) -> Result<Self, ModelError> {
        if seconds > MAX_SLOWMODE {
            return Err(ModelError::invalid_argument(
                "slowmode",
                format!("{seconds}s exceeds {MAX_SLOWMODE}s"),
            ));
        }
        self.slowmode = Some(seconds);
        Ok(self)
    }

    /// # Errors
    ///
    /// Returns `InvalidArgument` if `bitrate` is below [`MIN_BITRATE`].
    pub fn with_bitrate(mut self, bitrate: u32) -> Result<Self, ModelError> {
        if bitrate < MIN_BITRATE {
            return Err(ModelError::invalid_argument(
                "bitrate",
                format!("{bitrate} is below {MIN_BITRATE}"),
            ));
        }
        self.bitrate = Some(bitrate);
        Ok(self)
    }

    #[must_use]
    pub const fn with_parent(mut self, category: ChannelId) -> Self {
        self.parent_id = Some(category);
        self
    }

    /// Replaces every overwrite of the channel.
    #[must_use]
    pub fn with_overwrites(mut self, overwrites: Vec<PermissionOverwrite>) -> Self {
        self.permission_overwrites = Some(overwrites);
        self
    }

    #[must_use]
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Returns true if nothing would change.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.topic.is_none()
            && self.position.is_none()
            && self.nsfw.is_none()
            && self.slowmode.is_none()
            && self.bitrate.is_none()
            && self.parent_id.is_none()
            && self.permission_overwrites.is_none()
    }
}

/// Parameters of a new channel invite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InviteRequest {
    #[serde(skip)]
    pub channel_id: ChannelId,
    max_age: u32,
    max_uses: u32,
    temporary: bool,
    unique: bool,
    #[serde(skip_serializing_if = "is_plain_invite")]
    target_type: InviteTargetType,
}

fn is_plain_invite(target: &InviteTargetType) -> bool {
    *target == InviteTargetType::None
}

impl InviteRequest {
    /// Invite with Discord's defaults: valid for one day, unlimited uses.
    #[must_use]
    pub const fn new(channel_id: ChannelId) -> Self {
        Self {
            channel_id,
            max_age: 86_400,
            max_uses: 0,
            temporary: false,
            unique: false,
            target_type: InviteTargetType::None,
        }
    }

    /// Sets the lifetime. [`Duration::ZERO`] means the invite never
    /// expires.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `age` exceeds [`MAX_INVITE_AGE`].
    pub fn with_max_age(mut self, age: Duration) -> Result<Self, ModelError> {
        if age > MAX_INVITE_AGE {
            return Err(ModelError::invalid_argument(
                "max_age",
                format!("{}s exceeds 7 days", age.as_secs()),
            ));
        }
        self.max_age = u32::try_from(age.as_secs()).unwrap_or(u32::MAX);
        Ok(self)
    }

    /// Sets the use limit, `0` meaning unlimited.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `uses` exceeds [`MAX_INVITE_USES`].
    pub fn with_max_uses(mut self, uses: u32) -> Result<Self, ModelError> {
        if uses > MAX_INVITE_USES {
            return Err(ModelError::invalid_argument(
                "max_uses",
                format!("{uses} exceeds {MAX_INVITE_USES}"),
            ));
        }
        self.max_uses = uses;
        Ok(self)
    }

    #[must_use]
    pub const fn temporary(mut self) -> Self {
        self.temporary = true;
        self
    }

    /// Never reuse an existing invite with the same settings.
    #[must_use]
    pub const fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// # Errors
    ///
    /// Returns `InvalidArgument` for [`InviteTargetType::Unknown`].
    pub fn with_target(mut self, target: InviteTargetType) -> Result<Self, ModelError> {
        if target == InviteTargetType::Unknown {
            return Err(ModelError::invalid_argument(
                "target_type",
                "unknown invite target",
            ));
        }
        self.target_type = target;
        Ok(self)
    }

    #[must_use]
    pub const fn max_age(&self) -> u32 {
        self.max_age
    }

    #[must_use]
    pub const fn max_uses(&self) -> u32 {
        self.max_uses
    }
}

/// Channel operations carried out by the REST layer.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChannelActions: Send + Sync {
    /// Deletes a channel, or closes it for DMs.
    async fn delete_channel(
        &self,
        channel_id: ChannelId,
        reason: Option<String>,
    ) -> Result<Channel, ActionError>;

    /// Applies an edit and returns the updated channel.
    async fn edit_channel(&self, edit: ChannelEdit) -> Result<Channel, ActionError>;

    /// Creates an invite to the channel.
    async fn create_invite(&self, request: InviteRequest) -> Result<Invite, ActionError>;
}
