//! Domain entity definitions.

mod automod;
mod ban;
mod channel;
mod emoji;
mod entitlement;
mod forum;
mod guild;
mod ids;
mod invite;
mod member;
mod message;
mod permissions;
mod presence;
mod role;
mod sku;
mod user;
mod webhook;

pub use automod::{
    AutoModEventType, AutoModResponse, AutoModResponseType, AutoModRule, AutoModTriggerMetadata,
    AutoModTriggerType, KeywordPreset, MAX_CUSTOM_MESSAGE_LEN, MAX_TIMEOUT,
};
pub use ban::{Ban, BulkBanResponse};
pub use channel::{
    AudioChannel, Categorizable, Category, Channel, ChannelFlags, ChannelInfo, ChannelType,
    DEFAULT_BITRATE, ForumChannel, GuildChannel, MAX_SLOWMODE, MessageChannel, NsfwChannel,
    OverwriteType, PermissionOverwrite, PrivateChannel, RawChannel, SlowmodeChannel, TextChannel,
    ThreadChannel, ThreadContainer, ThreadMetadata, UnknownChannel, VoiceChannel,
};
pub use emoji::CustomEmoji;
pub use entitlement::{Entitlement, EntitlementOwner, EntitlementType};
pub use forum::{ForumLayout, ForumPost, ForumSortOrder, ForumTag};
pub use guild::{
    BoostTier, ExplicitContentLevel, Guild, MfaLevel, NotificationLevel, NsfwLevel,
    VerificationLevel,
};
pub use ids::{
    ApplicationId, AttachmentId, AutoModRuleId, ChannelId, CommandId, EmojiId, EntitlementId,
    ForumTagId, GuildId, MessageId, RoleId, SkuId, UserId, WebhookId,
};
pub use invite::{Invite, InviteTargetType, VanityInvite};
pub use member::Member;
pub use message::{Attachment, Message, MessageFlags, MessageReference, MessageType};
pub use permissions::Permissions;
pub use presence::{OnlineStatus, Presence};
pub use role::Role;
pub use sku::{Sku, SkuFlags, SkuType};
pub use user::{PremiumType, User, UserFlags};
pub use webhook::{Webhook, WebhookSource, WebhookToken, WebhookType};
