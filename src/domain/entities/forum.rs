//! Forum settings and posts.

use serde::{Deserialize, Serialize};

use super::{ChannelInfo, EmojiId, ForumTagId, Message, ThreadChannel};
use crate::domain::coded::coded_enum;

coded_enum! {
    /// How clients lay out the posts of a forum.
    pub enum ForumLayout {
        /// No default set by moderators.
        DefaultView = 0,
        /// Compact list.
        ListView = 1,
        /// Media gallery.
        GalleryView = 2,
    }
}

coded_enum! {
    /// Default ordering of forum posts.
    pub enum ForumSortOrder {
        /// Most recent activity first.
        RecentActivity = 0,
        /// Newest post first.
        CreationTime = 1,
    }
}

/// Tag a forum post can carry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ForumTag {
    pub id: ForumTagId,
    pub name: String,
    /// Only members with `MANAGE_THREADS` may apply moderated tags.
    #[serde(default)]
    pub moderated: bool,
    #[serde(default)]
    pub emoji_id: Option<EmojiId>,
    #[serde(default)]
    pub emoji_name: Option<String>,
}

impl ForumTag {
    #[must_use]
    pub fn new(id: impl Into<ForumTagId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            moderated: false,
            emoji_id: None,
            emoji_name: None,
        }
    }
}

/// A post in a forum: the thread and the message that started it.
///
/// Both halves are fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForumPost {
    message: Message,
    thread: ThreadChannel,
}

impl ForumPost {
    #[must_use]
    pub const fn new(message: Message, thread: ThreadChannel) -> Self {
        Self { message, thread }
    }

    /// The starter message.
    #[must_use]
    pub const fn message(&self) -> &Message {
        &self.message
    }

    /// The thread holding the conversation.
    #[must_use]
    pub const fn thread(&self) -> &ThreadChannel {
        &self.thread
    }

    /// Post title, which is the thread name.
    #[must_use]
    pub fn title(&self) -> &str {
        self.thread.name()
    }

    /// Splits the post into its parts.
    #[must_use]
    pub fn into_parts(self) -> (Message, ThreadChannel) {
        (self.message, self.thread)
    }
}
