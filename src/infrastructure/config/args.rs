use super::app_config::LogLevel;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::domain::cdn::ImageFormat;

#[derive(Debug, Parser)]
#[command(
    name = "oxicord-model",
    version,
    about = "Inspect Discord ids, wire codes, mentions and CDN URLs",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH", env = "OXICORD_MODEL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH", env = "OXICORD_MODEL_LOG_PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum, env = "OXICORD_MODEL_LOG_LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Image size for CDN URLs (power of two, 16 to 4096).
    #[arg(long, value_name = "PIXELS")]
    pub image_size: Option<u32>,

    /// Image format for static CDN assets (png, jpg, webp, gif).
    #[arg(long, value_name = "FORMAT")]
    pub image_format: Option<ImageFormat>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve a wire code to its enum variant.
    Resolve {
        /// Enum the code belongs to.
        #[arg(value_enum)]
        kind: CodedKind,
        /// Integer code, or status key for `online-status`.
        code: String,
    },
    /// Print mention markup for an id.
    Mention {
        /// What the id refers to.
        #[arg(value_enum)]
        kind: MentionKind,
        /// Snowflake id in decimal.
        id: String,
    },
    /// Print when a snowflake was created.
    Created {
        /// Snowflake id in decimal.
        id: String,
    },
    /// Print the avatar URL of a user, or the default avatar without a hash.
    Avatar {
        /// User snowflake id in decimal.
        user_id: String,
        /// Avatar hash; `a_` hashes are animated.
        hash: Option<String>,
        /// Legacy discriminator, used for the default avatar.
        #[arg(long, default_value = "0")]
        discriminator: String,
    },
}

/// Enums that `resolve` understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CodedKind {
    /// Channel type codes.
    ChannelType,
    /// Message type codes.
    MessageType,
    /// Auto-moderation trigger types.
    AutomodTrigger,
    /// Auto-moderation event types.
    AutomodEvent,
    /// Auto-moderation action types.
    AutomodResponse,
    /// Auto-moderation keyword presets.
    KeywordPreset,
    /// Entitlement types.
    EntitlementType,
    /// SKU types.
    SkuType,
    /// Webhook types.
    WebhookType,
    /// Guild verification levels.
    VerificationLevel,
    /// Default notification levels.
    NotificationLevel,
    /// Explicit content filter levels.
    ExplicitContent,
    /// Moderator MFA levels.
    MfaLevel,
    /// Guild NSFW levels.
    NsfwLevel,
    /// Server boost tiers.
    BoostTier,
    /// Forum layouts.
    ForumLayout,
    /// Forum sort orders.
    ForumSortOrder,
    /// Invite target types.
    InviteTarget,
    /// Nitro subscription types.
    PremiumType,
    /// Presence status keys (`online`, `dnd`, ...).
    OnlineStatus,
}

/// Targets of the `mention` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MentionKind {
    /// `<@id>`
    User,
    /// `<@&id>`
    Role,
    /// `<#id>`
    Channel,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn test_every_positional_has_help() {
        let cli = CliArgs::command();
        for sub in cli.get_subcommands() {
            for arg in sub.get_positionals() {
                assert!(
                    arg.get_help().is_some(),
                    "{} {} has no help",
                    sub.get_name(),
                    arg.get_id()
                );
            }
        }

        for kind in CodedKind::value_variants() {
            let value = kind.to_possible_value().unwrap();
            assert!(value.get_help().is_some(), "{} has no help", value.get_name());
        }
    }

    #[test]
    fn test_parse_resolve_with_global_flags() {
        let args = CliArgs::try_parse_from([
            "oxicord-model",
            "--image-format",
            "webp",
            "resolve",
            "automod-trigger",
            "4",
        ])
        .unwrap();

        assert_eq!(args.image_format, Some(ImageFormat::Webp));
        assert!(matches!(
            args.command,
            Command::Resolve { kind: CodedKind::AutomodTrigger, ref code } if code == "4"
        ));
    }
}
