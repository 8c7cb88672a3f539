use super::base::{ChannelCore, guild_channel};
use super::{ChannelFlags, ChannelType, NsfwChannel, RawChannel, SlowmodeChannel, ThreadContainer};
use crate::domain::entities::{
    ChannelId, ForumLayout, ForumSortOrder, ForumTag, ForumTagId, GuildId,
};
use crate::domain::errors::ModelError;

/// Forum or media channel, whose content is a list of thread posts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForumChannel {
    core: ChannelCore,
    kind: ChannelType,
    topic: Option<String>,
    nsfw: bool,
    slowmode: u32,
    last_post_id: Option<ChannelId>,
    available_tags: Vec<ForumTag>,
    default_sort_order: Option<ForumSortOrder>,
    layout: ForumLayout,
    default_thread_slowmode: u32,
    default_auto_archive_minutes: Option<u32>,
    flags: ChannelFlags,
}

guild_channel!(ForumChannel, categorizable);

impl ForumChannel {
    #[must_use]
    pub fn new(id: impl Into<ChannelId>, guild: impl Into<GuildId>, name: impl Into<String>) -> Self {
        Self {
            core: ChannelCore::new(id.into(), guild.into(), name.into()),
            kind: ChannelType::Forum,
            topic: None,
            nsfw: false,
            slowmode: 0,
            last_post_id: None,
            available_tags: Vec::new(),
            default_sort_order: None,
            layout: ForumLayout::DefaultView,
            default_thread_slowmode: 0,
            default_auto_archive_minutes: None,
            flags: ChannelFlags::empty(),
        }
    }

    pub(super) fn from_raw(mut raw: RawChannel) -> Result<Self, ModelError> {
        let core = ChannelCore::from_raw(&mut raw)?;
        // The last message id of a forum is the id of its newest post.
        let last_post_id = raw.last_message_id.map(|id| ChannelId(id.as_u64()));
        Ok(Self {
            core,
            kind: raw.channel_type(),
            topic: raw.topic,
            nsfw: raw.nsfw,
            slowmode: raw.rate_limit_per_user.unwrap_or_default(),
            last_post_id,
            available_tags: raw.available_tags,
            default_sort_order: raw.default_sort_order,
            layout: raw.default_forum_layout.unwrap_or(ForumLayout::DefaultView),
            default_thread_slowmode: raw.default_thread_rate_limit_per_user.unwrap_or_default(),
            default_auto_archive_minutes: raw.default_auto_archive_duration,
            flags: raw.flags,
        })
    }

    #[must_use]
    pub fn with_tag(mut self, tag: ForumTag) -> Self {
        self.available_tags.push(tag);
        self
    }

    #[must_use]
    pub const fn with_layout(mut self, layout: ForumLayout) -> Self {
        self.layout = layout;
        self
    }

    #[must_use]
    pub const fn requiring_tags(mut self) -> Self {
        self.flags = self.flags.union(ChannelFlags::REQUIRE_TAG);
        self
    }

    /// Post guidelines shown above the forum.
    #[must_use]
    pub fn topic(&self) -> Option<&str> {
        self.topic.as_deref()
    }

    #[must_use]
    pub fn is_media(&self) -> bool {
        self.kind == ChannelType::Media
    }

    /// Id of the most recently created post.
    #[must_use]
    pub const fn last_post_id(&self) -> Option<ChannelId> {
        self.last_post_id
    }

    #[must_use]
    pub fn available_tags(&self) -> &[ForumTag] {
        &self.available_tags
    }

    #[must_use]
    pub fn tag(&self, id: ForumTagId) -> Option<&ForumTag> {
        self.available_tags.iter().find(|tag| tag.id == id)
    }

    /// Finds tags by name, ignoring case.
    pub fn tags_by_name<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a ForumTag> {
        self.available_tags
            .iter()
            .filter(move |tag| tag.name.eq_ignore_ascii_case(name))
    }

    /// Sort order clients use by default, `None` when unset.
    #[must_use]
    pub const fn default_sort_order(&self) -> Option<ForumSortOrder> {
        self.default_sort_order
    }

    #[must_use]
    pub const fn layout(&self) -> ForumLayout {
        self.layout
    }

    /// Returns true if new posts must carry at least one tag.
    #[must_use]
    pub const fn requires_tag(&self) -> bool {
        self.flags.contains(ChannelFlags::REQUIRE_TAG)
    }
}

impl NsfwChannel for ForumChannel {
    fn is_nsfw(&self) -> bool {
        self.nsfw
    }
}

impl SlowmodeChannel for ForumChannel {
    /// Delay between posts a member may create.
    fn slowmode(&self) -> u32 {
        self.slowmode
    }
}

impl ThreadContainer for ForumChannel {
    fn default_thread_slowmode(&self) -> u32 {
        self.default_thread_slowmode
    }

    fn default_auto_archive_minutes(&self) -> Option<u32> {
        self.default_auto_archive_minutes
    }
}
