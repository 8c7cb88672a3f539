//! Guild bans.

use serde::{Deserialize, Serialize};

use super::{User, UserId};

/// A ban entry of a guild.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ban {
    user: User,
    #[serde(default)]
    reason: Option<String>,
}

impl Ban {
    #[must_use]
    pub const fn new(user: User, reason: Option<String>) -> Self {
        Self { user, reason }
    }

    #[must_use]
    pub const fn user(&self) -> &User {
        &self.user
    }

    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }
}

/// Outcome of a bulk ban: who was banned and who could not be.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct BulkBanResponse {
    banned_users: Vec<UserId>,
    failed_users: Vec<UserId>,
}

impl BulkBanResponse {
    /// Collects both lists. The response owns its copies, so the sources can
    /// be reused afterwards.
    #[must_use]
    pub fn new(
        banned: impl IntoIterator<Item = UserId>,
        failed: impl IntoIterator<Item = UserId>,
    ) -> Self {
        Self {
            banned_users: banned.into_iter().collect(),
            failed_users: failed.into_iter().collect(),
        }
    }

    /// Users banned, in the order the server reported them.
    #[must_use]
    pub fn banned_users(&self) -> &[UserId] {
        &self.banned_users
    }

    /// Users that were not banned. Already banned users land here too.
    #[must_use]
    pub fn failed_users(&self) -> &[UserId] {
        &self.failed_users
    }

    /// Returns true when every requested user was banned.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failed_users.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_bulk_ban_keeps_lists_in_order() {
        let (a, b, c) = (UserId(1), UserId(2), UserId(3));
        let mut banned = vec![a, b];
        let failed = vec![c];

        let response = BulkBanResponse::new(banned.iter().copied(), failed.iter().copied());
        banned.push(UserId(4));
        banned.reverse();

        assert_eq!(response.banned_users(), &[a, b]);
        assert_eq!(response.failed_users(), &[c]);
        assert!(!response.is_complete());
    }

    #[test]
    fn test_bulk_ban_structural_equality() {
        let first = BulkBanResponse::new([UserId(1)], []);
        let second = BulkBanResponse::new(vec![UserId(1)], Vec::new());
        let swapped = BulkBanResponse::new([], [UserId(1)]);

        assert_eq!(first, second);
        assert_ne!(first, swapped);
        assert!(first.is_complete());

        let set: HashSet<_> = [first, second, swapped].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_bulk_ban_from_payload() {
        let json = r#"{"banned_users": ["10", "11"], "failed_users": []}"#;
        let response: BulkBanResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.banned_users(), &[UserId(10), UserId(11)]);
        assert!(response.is_complete());
    }

    #[test]
    fn test_ban_payload() {
        let json = r#"{"reason": "spam", "user": {"id": "5", "username": "spammer"}}"#;
        let ban: Ban = serde_json::from_str(json).unwrap();

        assert_eq!(ban.reason(), Some("spam"));
        assert_eq!(ban.user().id(), UserId(5));
    }
}
