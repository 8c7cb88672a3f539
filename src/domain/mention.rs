//! Mention markup.
//!
//! Formatting works on the bare id so any id-bearing value can produce a
//! mention without owning the entity it refers to.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::domain::entities::{ChannelId, CommandId, EmojiId, RoleId, UserId};

/// Something that can be referenced inline in message content.
pub trait Mentionable {
    /// Returns the markup Discord renders as a mention.
    fn as_mention(&self) -> String;
}

/// `<@id>`
#[must_use]
pub fn user(id: UserId) -> String {
    format!("<@{id}>")
}

/// `<@&id>`
#[must_use]
pub fn role(id: RoleId) -> String {
    format!("<@&{id}>")
}

/// `<#id>`
#[must_use]
pub fn channel(id: ChannelId) -> String {
    format!("<#{id}>")
}

/// `<:name:id>`, or `<a:name:id>` for animated emojis.
#[must_use]
pub fn emoji(name: &str, id: EmojiId, animated: bool) -> String {
    let prefix = if animated { "a" } else { "" };
    format!("<{prefix}:{name}:{id}>")
}

/// `</name:id>`. `name` may contain a subcommand path separated by spaces.
#[must_use]
pub fn slash_command(name: &str, id: CommandId) -> String {
    format!("</{name}:{id}>")
}

impl Mentionable for UserId {
    fn as_mention(&self) -> String {
        user(*self)
    }
}

impl Mentionable for RoleId {
    fn as_mention(&self) -> String {
        role(*self)
    }
}

impl Mentionable for ChannelId {
    fn as_mention(&self) -> String {
        channel(*self)
    }
}

/// Kinds of mention that can appear in message content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MentionType {
    /// `<@id>` or the legacy nickname form `<@!id>`.
    User,
    /// `<@&id>`
    Role,
    /// `<#id>`
    Channel,
    /// `<:name:id>` / `<a:name:id>`
    Emoji,
    /// `@here`
    Here,
    /// `@everyone`
    Everyone,
    /// `</name:id>`
    SlashCommand,
}

static USER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<@!?(\d+)>").expect("valid user mention regex"));
static ROLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<@&(\d+)>").expect("valid role mention regex"));
static CHANNEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<#(\d+)>").expect("valid channel mention regex"));
static EMOJI_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<a?:([a-zA-Z0-9_]+):([0-9]+)>").expect("valid emoji mention regex")
});
static HERE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@here").expect("valid here regex"));
static EVERYONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@everyone").expect("valid everyone regex"));
static SLASH_COMMAND_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"</([\w-]+(?: [\w-]+){0,2}):(\d+)>").expect("valid command mention regex")
});

impl MentionType {
    /// Every mention kind.
    pub const ALL: [Self; 7] = [
        Self::User,
        Self::Role,
        Self::Channel,
        Self::Emoji,
        Self::Here,
        Self::Everyone,
        Self::SlashCommand,
    ];

    /// Returns the pattern matching this kind of mention.
    #[must_use]
    pub fn pattern(self) -> &'static Regex {
        match self {
            Self::User => &*USER_RE,
            Self::Role => &*ROLE_RE,
            Self::Channel => &*CHANNEL_RE,
            Self::Emoji => &*EMOJI_RE,
            Self::Here => &*HERE_RE,
            Self::Everyone => &*EVERYONE_RE,
            Self::SlashCommand => &*SLASH_COMMAND_RE,
        }
    }

    /// Capture group holding the id, if this kind carries one.
    const fn id_group(self) -> Option<usize> {
        match self {
            Self::User | Self::Role | Self::Channel => Some(1),
            Self::Emoji | Self::SlashCommand => Some(2),
            Self::Here | Self::Everyone => None,
        }
    }

    /// Returns true if `text` contains at least one mention of this kind.
    #[must_use]
    pub fn is_in(self, text: &str) -> bool {
        self.pattern().is_match(text)
    }
}

/// Extracts the ids referenced by mentions of `kind` in `text`, in order of
/// first appearance and without duplicates.
///
/// Kinds without an id (`@here`, `@everyone`) always yield an empty list.
/// Ids too large for a snowflake are skipped.
#[must_use]
pub fn parse_mentions(text: &str, kind: MentionType) -> Vec<u64> {
    let Some(group) = kind.id_group() else {
        return Vec::new();
    };

    let mut seen = HashSet::new();
    kind.pattern()
        .captures_iter(text)
        .filter_map(|caps| caps.get(group))
        .filter_map(|m| m.as_str().parse::<u64>().ok())
        .filter(|id| seen.insert(*id))
        .collect()
}
