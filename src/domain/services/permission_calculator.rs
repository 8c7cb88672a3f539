use crate::domain::entities::{GuildChannel, GuildId, Member, Permissions, Role, RoleId};

/// Resolves the effective permissions of a member in a guild channel.
pub struct PermissionCalculator;

impl PermissionCalculator {
    /// Applies, in order: the `@everyone` role, the member's roles, the
    /// administrator shortcut, then the channel's `@everyone` overwrite,
    /// the member's role overwrites as one combined step, and finally the
    /// member-specific overwrite.
    ///
    /// Unknown role ids in `member` are skipped. Losing `VIEW_CHANNEL`
    /// through overwrites hides the channel and yields no permissions.
    #[must_use]
    pub fn compute_permissions(
        guild: GuildId,
        channel: &(impl GuildChannel + ?Sized),
        member: &Member,
        guild_roles: &[Role],
    ) -> Permissions {
        let everyone = RoleId::everyone(guild);
        let base = Self::base_permissions(everyone, member, guild_roles);

        if base.contains(Permissions::ADMINISTRATOR) {
            return Permissions::all();
        }

        let mut permissions = base;

        if let Some(overwrite) = channel.role_overwrite(everyone) {
            permissions = overwrite.apply(permissions);
        }

        let mut role_allow = Permissions::empty();
        let mut role_deny = Permissions::empty();
        for overwrite in member
            .roles()
            .iter()
            .filter(|role| **role != everyone)
            .filter_map(|role| channel.role_overwrite(*role))
        {
            role_allow |= overwrite.allow;
            role_deny |= overwrite.deny;
        }
        permissions = (permissions - role_deny) | role_allow;

        if let Some(user) = member.user_id()
            && let Some(overwrite) = channel.member_overwrite(user)
        {
            permissions = overwrite.apply(permissions);
        }

        if !permissions.contains(Permissions::VIEW_CHANNEL) {
            tracing::trace!(channel = %channel.id(), "channel hidden by overwrites");
            return Permissions::empty();
        }

        permissions
    }

    /// Guild-level permissions before any channel overwrite.
    #[must_use]
    pub fn base_permissions(everyone: RoleId, member: &Member, guild_roles: &[Role]) -> Permissions {
        let mut permissions = guild_roles
            .iter()
            .find(|role| role.id == everyone)
            .map_or_else(Permissions::empty, |role| role.permissions);

        for role_id in member.roles() {
            if let Some(role) = guild_roles.iter().find(|role| role.id == *role_id) {
                permissions |= role.permissions;
            }
        }

        permissions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{PermissionOverwrite, TextChannel, User, UserId};

    const GUILD: GuildId = GuildId(100);
    const MODS: RoleId = RoleId(200);
    const MUTED: RoleId = RoleId(300);
    const USER: UserId = UserId(400);

    fn roles() -> Vec<Role> {
        vec![
            Role::new(
                RoleId::everyone(GUILD),
                "@everyone",
                Permissions::VIEW_CHANNEL | Permissions::SEND_MESSAGES,
            ),
            Role::new(MODS, "mods", Permissions::MANAGE_MESSAGES | Permissions::KICK_MEMBERS),
            Role::new(MUTED, "muted", Permissions::empty()),
        ]
    }

    fn member(roles: Vec<RoleId>) -> Member {
        Member::new(User::new(USER, "member", "0", None, false)).with_roles(roles)
    }

    fn channel() -> TextChannel {
        TextChannel::new(500_u64, GUILD, "general")
    }

    #[test]
    fn test_roles_without_overwrites() {
        let permissions =
            PermissionCalculator::compute_permissions(GUILD, &channel(), &member(vec![MODS]), &roles());

        assert!(permissions.contains(Permissions::SEND_MESSAGES | Permissions::MANAGE_MESSAGES));
        assert!(!permissions.contains(Permissions::BAN_MEMBERS));
    }

    #[test]
    fn test_administrator_ignores_overwrites() {
        let mut roles = roles();
        roles.push(Role::new(RoleId(600), "admin", Permissions::ADMINISTRATOR));
        let channel = channel().with_overwrite(PermissionOverwrite::role(
            RoleId::everyone(GUILD),
            Permissions::empty(),
            Permissions::VIEW_CHANNEL,
        ));

        let permissions = PermissionCalculator::compute_permissions(
            GUILD,
            &channel,
            &member(vec![RoleId(600)]),
            &roles,
        );

        assert_eq!(permissions, Permissions::all());
    }

    #[test]
    fn test_role_allow_beats_role_deny_and_member_overwrite_wins() {
        let channel = channel()
            .with_overwrite(PermissionOverwrite::role(
                MUTED,
                Permissions::empty(),
                Permissions::SEND_MESSAGES,
            ))
            .with_overwrite(PermissionOverwrite::role(
                MODS,
                Permissions::SEND_MESSAGES,
                Permissions::empty(),
            ));

        let both = member(vec![MODS, MUTED]);
        let permissions = PermissionCalculator::compute_permissions(GUILD, &channel, &both, &roles());
        assert!(permissions.contains(Permissions::SEND_MESSAGES));

        let muted = member(vec![MUTED]);
        let permissions = PermissionCalculator::compute_permissions(GUILD, &channel, &muted, &roles());
        assert!(!permissions.contains(Permissions::SEND_MESSAGES));

        let channel = channel.with_overwrite(PermissionOverwrite::member(
            USER,
            Permissions::empty(),
            Permissions::SEND_MESSAGES,
        ));
        let permissions = PermissionCalculator::compute_permissions(GUILD, &channel, &both, &roles());
        assert!(!permissions.contains(Permissions::SEND_MESSAGES));
    }

    #[test]
    fn test_hidden_channel_grants_nothing() {
        let channel = channel().with_overwrite(PermissionOverwrite::role(
            RoleId::everyone(GUILD),
            Permissions::empty(),
            Permissions::VIEW_CHANNEL,
        ));

        let permissions =
            PermissionCalculator::compute_permissions(GUILD, &channel, &member(vec![MODS]), &roles());

        assert_eq!(permissions, Permissions::empty());
    }

    #[test]
    fn test_works_through_trait_object() {
        let channel = channel();
        let dynamic: &dyn GuildChannel = &channel;

        let permissions =
            PermissionCalculator::compute_permissions(GUILD, dynamic, &member(Vec::new()), &roles());

        assert_eq!(permissions, Permissions::VIEW_CHANNEL | Permissions::SEND_MESSAGES);
    }
}
