//! Discord CDN and link URLs.

use crate::domain::entities::{
    ChannelId, EmojiId, GuildId, MessageId, RoleId, UserId, WebhookId,
};
use crate::domain::errors::ModelError;

/// Base of every image asset.
pub const CDN_BASE: &str = "https://cdn.discordapp.com";

/// Base of the versioned REST API.
pub const API_BASE: &str = "https://discord.com/api/v10";

/// Base of short invite links.
pub const INVITE_BASE: &str = "https://discord.gg";

/// Base of channel and message jump links.
pub const JUMP_BASE: &str = "https://discord.com/channels";

/// Smallest image size the CDN serves.
pub const MIN_IMAGE_SIZE: u32 = 16;

/// Largest image size the CDN serves.
pub const MAX_IMAGE_SIZE: u32 = 4096;

/// Number of built-in default avatars.
const DEFAULT_AVATAR_COUNT: u64 = 6;

/// Image file formats the CDN can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    /// PNG (default).
    #[default]
    Png,
    /// JPEG.
    Jpg,
    /// WebP.
    Webp,
    /// GIF, only valid for animated assets.
    Gif,
}

impl ImageFormat {
    /// Returns the file extension used in the URL.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpg => "jpg",
            Self::Webp => "webp",
            Self::Gif => "gif",
        }
    }

    /// Picks gif for animated hashes (prefixed `a_`), png otherwise.
    #[must_use]
    pub fn for_hash(hash: &str) -> Self {
        if is_animated_hash(hash) {
            Self::Gif
        } else {
            Self::Png
        }
    }
}

impl std::str::FromStr for ImageFormat {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "png" => Ok(Self::Png),
            "jpg" | "jpeg" => Ok(Self::Jpg),
            "webp" => Ok(Self::Webp),
            "gif" => Ok(Self::Gif),
            other => Err(ModelError::invalid_argument(
                "format",
                format!("unsupported image format {other:?}"),
            )),
        }
    }
}

impl std::fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

/// Returns true for hashes of animated assets.
#[must_use]
pub fn is_animated_hash(hash: &str) -> bool {
    hash.starts_with("a_")
}

/// `/avatars/{user}/{hash}.{ext}`
#[must_use]
pub fn user_avatar(user: UserId, hash: &str) -> String {
    format!(
        "{CDN_BASE}/avatars/{user}/{hash}.{}",
        ImageFormat::for_hash(hash)
    )
}

/// Per-guild member avatar.
#[must_use]
pub fn member_avatar(guild: GuildId, user: UserId, hash: &str) -> String {
    format!(
        "{CDN_BASE}/guilds/{guild}/users/{user}/avatars/{hash}.{}",
        ImageFormat::for_hash(hash)
    )
}

/// Built-in avatar shown when a user has none.
///
/// Migrated users (discriminator `0`) are bucketed by id, legacy users by
/// discriminator.
#[must_use]
pub fn default_avatar(user: UserId, discriminator: &str) -> String {
    let index = match discriminator.parse::<u64>() {
        Ok(0) | Err(_) => (user.as_u64() >> 22) % DEFAULT_AVATAR_COUNT,
        Ok(discriminator) => discriminator % 5,
    };
    format!("{CDN_BASE}/embed/avatars/{index}.png")
}

/// `/icons/{guild}/{hash}.{ext}`
#[must_use]
pub fn guild_icon(guild: GuildId, hash: &str) -> String {
    format!(
        "{CDN_BASE}/icons/{guild}/{hash}.{}",
        ImageFormat::for_hash(hash)
    )
}

/// `/splashes/{guild}/{hash}.png`
#[must_use]
pub fn guild_splash(guild: GuildId, hash: &str) -> String {
    format!("{CDN_BASE}/splashes/{guild}/{hash}.png")
}

/// `/banners/{id}/{hash}.{ext}`; used for guild and user banners.
#[must_use]
pub fn banner(id: u64, hash: &str) -> String {
    format!(
        "{CDN_BASE}/banners/{id}/{hash}.{}",
        ImageFormat::for_hash(hash)
    )
}

/// `/role-icons/{role}/{hash}.png`
#[must_use]
pub fn role_icon(role: RoleId, hash: &str) -> String {
    format!("{CDN_BASE}/role-icons/{role}/{hash}.png")
}

/// `/emojis/{id}.{png|gif}`
#[must_use]
pub fn emoji(id: EmojiId, animated: bool) -> String {
    let format = if animated {
        ImageFormat::Gif
    } else {
        ImageFormat::Png
    };
    format!("{CDN_BASE}/emojis/{id}.{format}")
}

/// Execute endpoint of a webhook.
#[must_use]
pub fn webhook(id: WebhookId, token: &str) -> String {
    format!("{API_BASE}/webhooks/{id}/{token}")
}

/// Short invite link for `code`.
#[must_use]
pub fn invite(code: &str) -> String {
    format!("{INVITE_BASE}/{code}")
}

/// Jump link to a channel. Channels outside guilds use `@me`.
#[must_use]
pub fn channel_jump(guild: Option<GuildId>, channel: ChannelId) -> String {
    match guild {
        Some(guild) => format!("{JUMP_BASE}/{guild}/{channel}"),
        None => format!("{JUMP_BASE}/@me/{channel}"),
    }
}

/// Jump link to a message.
#[must_use]
pub fn message_jump(guild: Option<GuildId>, channel: ChannelId, message: MessageId) -> String {
    format!("{}/{message}", channel_jump(guild, channel))
}

/// Returns `url` requesting an image of `size` pixels, replacing any size
/// already present and keeping other query parameters.
///
/// # Errors
///
/// Returns `InvalidArgument` unless `size` is a power of two in
/// [`MIN_IMAGE_SIZE`]`..=`[`MAX_IMAGE_SIZE`].
pub fn with_size(url: &str, size: u32) -> Result<String, ModelError> {
    validate_size(size)?;

    let (base_url, existing_params) = match url.split_once('?') {
        Some((base, params)) => (base, Some(params)),
        None => (url, None),
    };

    let mut params = vec![format!("size={size}")];
    if let Some(existing) = existing_params {
        params.extend(
            existing
                .split('&')
                .filter(|param| !param.is_empty())
                .filter(|param| param.split('=').next() != Some("size"))
                .map(ToString::to_string),
        );
    }

    Ok(format!("{base_url}?{}", params.join("&")))
}

/// Checks that `size` is one the CDN accepts.
///
/// # Errors
///
/// Returns `InvalidArgument` for sizes the CDN would reject.
pub fn validate_size(size: u32) -> Result<(), ModelError> {
    if size.is_power_of_two() && (MIN_IMAGE_SIZE..=MAX_IMAGE_SIZE).contains(&size) {
        Ok(())
    } else {
        Err(ModelError::invalid_argument(
            "size",
            format!("{size} is not a power of two between {MIN_IMAGE_SIZE} and {MAX_IMAGE_SIZE}"),
        ))
    }
}

/// Replaces the file extension of a CDN asset URL.
#[must_use]
pub fn with_format(url: &str, format: ImageFormat) -> String {
    let (path, query) = match url.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (url, None),
    };
    let stem = match path.rsplit_once('.') {
        Some((stem, ext)) if !ext.contains('/') => stem,
        _ => path,
    };
    match query {
        Some(query) => format!("{stem}.{format}?{query}"),
        None => format!("{stem}.{format}"),
    }
}

/// Checks if a URL is a Discord CDN URL.
#[must_use]
pub fn is_discord_cdn_url(url: &str) -> bool {
    url.contains("cdn.discordapp.com") || url.contains("media.discordapp.net")
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test]
    fn test_avatar_static_and_animated() {
        assert_eq!(
            user_avatar(UserId(1), "abc"),
            "https://cdn.discordapp.com/avatars/1/abc.png"
        );
        assert_eq!(
            user_avatar(UserId(1), "a_abc"),
            "https://cdn.discordapp.com/avatars/1/a_abc.gif"
        );
    }

    #[test_case(UserId(80_351_110_224_678_912), "1337", 2 ; "legacy discriminator")]
    #[test_case(UserId(80_351_110_224_678_912), "0", 5 ; "migrated user")]
    fn test_default_avatar_index(user: UserId, discriminator: &str, index: u64) {
        assert_eq!(
            default_avatar(user, discriminator),
            format!("https://cdn.discordapp.com/embed/avatars/{index}.png")
        );
    }

    #[test]
    fn test_guild_assets() {
        let guild = GuildId(9);
        assert_eq!(guild_icon(guild, "h"), "https://cdn.discordapp.com/icons/9/h.png");
        assert_eq!(
            guild_splash(guild, "a_h"),
            "https://cdn.discordapp.com/splashes/9/a_h.png"
        );
        assert_eq!(banner(9, "a_h"), "https://cdn.discordapp.com/banners/9/a_h.gif");
    }

    #[test]
    fn test_links() {
        assert_eq!(invite("rust"), "https://discord.gg/rust");
        assert_eq!(
            webhook(WebhookId(5), "tok"),
            "https://discord.com/api/v10/webhooks/5/tok"
        );
        assert_eq!(
            channel_jump(None, ChannelId(3)),
            "https://discord.com/channels/@me/3"
        );
        assert_eq!(
            message_jump(Some(GuildId(1)), ChannelId(2), MessageId(3)),
            "https://discord.com/channels/1/2/3"
        );
    }

    #[test]
    fn test_with_size_replaces_existing() {
        let url = "https://cdn.discordapp.com/avatars/1/abc.png?size=64&ex=1";
        assert_eq!(
            with_size(url, 256).unwrap(),
            "https://cdn.discordapp.com/avatars/1/abc.png?size=256&ex=1"
        );
    }

    #[test_case(0 ; "zero")]
    #[test_case(100 ; "not power of two")]
    #[test_case(8 ; "too small")]
    #[test_case(8192 ; "too large")]
    fn test_with_size_rejects(size: u32) {
        assert!(matches!(
            with_size("https://cdn.discordapp.com/x.png", size),
            Err(ModelError::InvalidArgument { name: "size", .. })
        ));
    }

    #[test]
    fn test_with_format() {
        assert_eq!(
            with_format("https://cdn.discordapp.com/icons/9/h.png?size=64", ImageFormat::Webp),
            "https://cdn.discordapp.com/icons/9/h.webp?size=64"
        );
    }

    #[test_case("png", ImageFormat::Png)]
    #[test_case("JPEG", ImageFormat::Jpg)]
    #[test_case("webp", ImageFormat::Webp)]
    fn test_format_from_str(value: &str, expected: ImageFormat) {
        assert_eq!(value.parse::<ImageFormat>().unwrap(), expected);
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        assert!("bmp".parse::<ImageFormat>().is_err());
    }

    #[test]
    fn test_is_discord_cdn_url() {
        assert!(is_discord_cdn_url(
            "https://cdn.discordapp.com/attachments/1/2/img.png"
        ));
        assert!(is_discord_cdn_url(
            "https://media.discordapp.net/attachments/1/2/img.png"
        ));
        assert!(!is_discord_cdn_url("https://example.com/image.png"));
    }
}
