use std::fmt::Debug;
use std::num::IntErrorKind;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use oxicord_model::domain::cdn;
use oxicord_model::domain::coded::{CodedEnum, KeyedEnum};
use oxicord_model::domain::entities::{
    AutoModEventType, AutoModResponseType, AutoModTriggerType, BoostTier, ChannelId, ChannelType,
    EntitlementType, ExplicitContentLevel, ForumLayout, ForumSortOrder, InviteTargetType,
    KeywordPreset, MessageType, MfaLevel, NotificationLevel, NsfwLevel, OnlineStatus, PremiumType,
    RoleId, SkuType, UserId, VerificationLevel, WebhookType,
};
use oxicord_model::domain::mention;
use oxicord_model::domain::snowflake::{parse_snowflake, timestamp_of};
use oxicord_model::infrastructure::config::{CodedKind, Command, MentionKind};
use oxicord_model::infrastructure::{AppConfig, CliArgs, StorageManager};

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = &config.log_path {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    Ok(())
}

fn load_config(args: &CliArgs) -> Result<AppConfig> {
    let storage = StorageManager::new()?;
    let mut config = storage.load_config(args.config.as_deref())?;
    config.merge_with_args(args);
    config.cdn.validate().wrap_err("invalid CDN settings")?;
    Ok(config)
}

/// Reads any integer. Values beyond `i64` saturate, which no enum assigns.
fn parse_code(text: &str) -> Result<i64> {
    match text.trim().parse::<i64>() {
        Ok(code) => Ok(code),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Ok(i64::MAX),
        Err(e) if *e.kind() == IntErrorKind::NegOverflow => Ok(i64::MIN),
        Err(e) => Err(e).wrap_err_with(|| format!("`{text}` is not an integer code")),
    }
}

fn describe<T: CodedEnum + Debug + From<i64>>(text: &str, code: i64) -> String {
    let variant = T::from(code);
    if variant.is_unknown() {
        format!("{variant:?} (unrecognised code {})", text.trim())
    } else {
        format!("{variant:?} ({})", variant.code())
    }
}

fn resolve(kind: CodedKind, code: &str) -> Result<String> {
    let coded = |describe: fn(&str, i64) -> String| -> Result<String> {
        Ok(describe(code, parse_code(code)?))
    };

    match kind {
        CodedKind::OnlineStatus => {
            let status = OnlineStatus::from_key(code);
            Ok(format!("{status:?} ({:?})", status.key()))
        }
        CodedKind::ChannelType => coded(describe::<ChannelType>),
        CodedKind::MessageType => coded(describe::<MessageType>),
        CodedKind::AutomodTrigger => coded(describe::<AutoModTriggerType>),
        CodedKind::AutomodEvent => coded(describe::<AutoModEventType>),
        CodedKind::AutomodResponse => coded(describe::<AutoModResponseType>),
        CodedKind::KeywordPreset => coded(describe::<KeywordPreset>),
        CodedKind::EntitlementType => coded(describe::<EntitlementType>),
        CodedKind::SkuType => coded(describe::<SkuType>),
        CodedKind::WebhookType => coded(describe::<WebhookType>),
        CodedKind::VerificationLevel => coded(describe::<VerificationLevel>),
        CodedKind::NotificationLevel => coded(describe::<NotificationLevel>),
        CodedKind::ExplicitContent => coded(describe::<ExplicitContentLevel>),
        CodedKind::MfaLevel => coded(describe::<MfaLevel>),
        CodedKind::NsfwLevel => coded(describe::<NsfwLevel>),
        CodedKind::BoostTier => coded(describe::<BoostTier>),
        CodedKind::ForumLayout => coded(describe::<ForumLayout>),
        CodedKind::ForumSortOrder => coded(describe::<ForumSortOrder>),
        CodedKind::InviteTarget => coded(describe::<InviteTargetType>),
        CodedKind::PremiumType => coded(describe::<PremiumType>),
    }
}

fn run(command: Command, config: &AppConfig) -> Result<String> {
    match command {
        Command::Resolve { kind, code } => resolve(kind, &code),
        Command::Mention { kind, id } => Ok(match kind {
            MentionKind::User => mention::user(id.parse::<UserId>()?),
            MentionKind::Role => mention::role(id.parse::<RoleId>()?),
            MentionKind::Channel => mention::channel(id.parse::<ChannelId>()?),
        }),
        Command::Created { id } => {
            let created = timestamp_of(parse_snowflake(&id)?);
            Ok(created.to_rfc3339())
        }
        Command::Avatar {
            user_id,
            hash,
            discriminator,
        } => {
            let user: UserId = user_id.parse()?;
            let url = match hash.as_deref() {
                Some(hash) => config.cdn.render(&cdn::user_avatar(user, hash))?,
                None => cdn::default_avatar(user, &discriminator),
            };
            Ok(url)
        }
    }
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    color_eyre::install()?;

    let args = CliArgs::parse();
    let config = load_config(&args)?;

    init_logging(&config)?;

    debug!(version = oxicord_model::VERSION, command = ?args.command, "Running");

    let output = run(args.command, &config)?;
    println!("{output}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case(CodedKind::AutomodTrigger, "4", "KeywordPreset (4)" ; "known trigger")]
    #[test_case(CodedKind::AutomodTrigger, "99", "Unknown (unrecognised code 99)" ; "unknown trigger")]
    #[test_case(CodedKind::ChannelType, "-1", "Unknown (unrecognised code -1)" ; "sentinel")]
    #[test_case(CodedKind::ChannelType, "4294967296", "Unknown (unrecognised code 4294967296)" ; "beyond i32")]
    #[test_case(CodedKind::WebhookType, "99999999999999999999999", "Unknown (unrecognised code 99999999999999999999999)" ; "beyond i64")]
    #[test_case(CodedKind::OnlineStatus, "dnd", "DoNotDisturb (\"dnd\")" ; "status key")]
    fn test_resolve(kind: CodedKind, code: &str, expected: &str) {
        assert_eq!(resolve(kind, code).unwrap(), expected);
    }

    #[test]
    fn test_resolve_rejects_non_integer_code() {
        assert!(resolve(CodedKind::ChannelType, "text").is_err());
        assert!(resolve(CodedKind::ChannelType, "").is_err());
    }

    #[test]
    fn test_mention_command() {
        let config = AppConfig::default();
        let command = Command::Mention {
            kind: MentionKind::Role,
            id: "41771983423143936".into(),
        };

        assert_eq!(run(command, &config).unwrap(), "<@&41771983423143936>");
    }

    #[test_case(Command::Mention { kind: MentionKind::User, id: "12ab".into() } ; "mention")]
    #[test_case(Command::Created { id: String::new() } ; "created")]
    #[test_case(Command::Avatar { user_id: "-x".into(), hash: None, discriminator: "0".into() } ; "avatar")]
    fn test_malformed_id_is_an_error(command: Command) {
        assert!(run(command, &AppConfig::default()).is_err());
    }

    #[test]
    fn test_created_command() {
        let command = Command::Created {
            id: "175928847299117063".into(),
        };

        assert_eq!(
            run(command, &AppConfig::default()).unwrap(),
            "2016-04-30T11:18:25.796+00:00"
        );
    }

    #[test]
    fn test_avatar_command_uses_cdn_settings() {
        let mut config = AppConfig::default();
        config.cdn.image_size = 256;

        let with_hash = Command::Avatar {
            user_id: "1".into(),
            hash: Some("abc".into()),
            discriminator: "0".into(),
        };
        assert_eq!(
            run(with_hash, &config).unwrap(),
            "https://cdn.discordapp.com/avatars/1/abc.png?size=256"
        );

        let legacy = Command::Avatar {
            user_id: "1".into(),
            hash: None,
            discriminator: "1234".into(),
        };
        assert_eq!(
            run(legacy, &config).unwrap(),
            "https://cdn.discordapp.com/embed/avatars/4.png"
        );
    }
}
