//! Asynchronous contracts for operations executed outside this crate.

mod automod_actions;
mod channel_actions;
mod entitlement_actions;
mod guild_actions;
mod webhook_actions;

pub use automod_actions::{
    AutoModActions, AutoModRuleRequest, MAX_EXEMPT_CHANNELS, MAX_EXEMPT_ROLES, MAX_KEYWORD_LEN,
    MAX_KEYWORDS, MAX_REGEX_LEN, MAX_REGEX_PATTERNS,
};
pub use channel_actions::{
    ChannelActions, ChannelEdit, InviteRequest, MAX_INVITE_AGE, MAX_INVITE_USES, MIN_BITRATE,
};
pub use entitlement_actions::{EntitlementActions, ensure_consumable};
pub use guild_actions::{BulkBanRequest, GuildActions, MAX_BAN_DELETE_WINDOW, MAX_BULK_BAN, RoleEdit};
pub use webhook_actions::WebhookActions;
