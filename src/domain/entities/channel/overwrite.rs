use serde::{Deserialize, Serialize};

use crate::domain::coded::coded_enum;
use crate::domain::entities::{Permissions, RoleId, UserId};

coded_enum! {
    /// What a permission overwrite targets.
    pub enum OverwriteType {
        /// A role, including `@everyone`.
        Role = 0,
        /// A single member.
        Member = 1,
    }
}

/// Channel-level adjustment of the permissions a role or member holds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct PermissionOverwrite {
    #[serde(with = "crate::domain::serde_utils::string_to_u64")]
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: OverwriteType,
    #[serde(with = "crate::domain::serde_utils::bits_string")]
    pub allow: Permissions,
    #[serde(with = "crate::domain::serde_utils::bits_string")]
    pub deny: Permissions,
}

impl PermissionOverwrite {
    /// Overwrite targeting a role.
    #[must_use]
    pub const fn role(role: RoleId, allow: Permissions, deny: Permissions) -> Self {
        Self {
            id: role.as_u64(),
            kind: OverwriteType::Role,
            allow,
            deny,
        }
    }

    /// Overwrite targeting a member.
    #[must_use]
    pub const fn member(user: UserId, allow: Permissions, deny: Permissions) -> Self {
        Self {
            id: user.as_u64(),
            kind: OverwriteType::Member,
            allow,
            deny,
        }
    }

    #[must_use]
    pub fn targets_role(&self, role: RoleId) -> bool {
        self.kind == OverwriteType::Role && self.id == role.as_u64()
    }

    #[must_use]
    pub fn targets_member(&self, user: UserId) -> bool {
        self.kind == OverwriteType::Member && self.id == user.as_u64()
    }

    /// Removes denied bits from `base`, then adds allowed ones.
    #[must_use]
    pub fn apply(&self, base: Permissions) -> Permissions {
        (base - self.deny) | self.allow
    }

    /// Permissions neither allowed nor denied by this overwrite.
    #[must_use]
    pub fn inherited(&self) -> Permissions {
        Permissions::all() - self.allow - self.deny
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overwrite_from_payload() {
        let json = r#"{"id": "80351110224678912", "type": 1, "allow": "2048", "deny": "1024"}"#;
        let overwrite: PermissionOverwrite = serde_json::from_str(json).unwrap();

        assert!(overwrite.targets_member(UserId(80_351_110_224_678_912)));
        assert!(!overwrite.targets_role(RoleId(80_351_110_224_678_912)));
        assert_eq!(overwrite.allow, Permissions::SEND_MESSAGES);
        assert_eq!(overwrite.deny, Permissions::VIEW_CHANNEL);
    }

    #[test]
    fn test_apply_deny_then_allow() {
        let overwrite = PermissionOverwrite::role(
            RoleId(1),
            Permissions::SEND_MESSAGES,
            Permissions::SEND_MESSAGES | Permissions::ADD_REACTIONS,
        );
        let result = overwrite.apply(Permissions::ADD_REACTIONS | Permissions::VIEW_CHANNEL);

        assert_eq!(result, Permissions::VIEW_CHANNEL | Permissions::SEND_MESSAGES);
        assert!(!overwrite.inherited().contains(Permissions::ADD_REACTIONS));
        assert!(overwrite.inherited().contains(Permissions::CONNECT));
    }

    #[test]
    fn test_unknown_overwrite_type_is_kept() {
        let json = r#"{"id": "5", "type": 7, "allow": "0", "deny": "0"}"#;
        let overwrite: PermissionOverwrite = serde_json::from_str(json).unwrap();
        assert_eq!(overwrite.kind, OverwriteType::Unknown);
        assert!(!overwrite.targets_role(RoleId(5)));
    }
}
