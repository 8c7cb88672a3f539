//! Wire-code enumerations with a mandatory `Unknown` fallback.
//!
//! Discord adds new integer and string codes over time. Every enum in this
//! crate resolves codes it does not recognise to its `Unknown` variant
//! instead of failing, so older builds keep decoding newer payloads.

/// Code carried by every `Unknown` variant. No server value uses it.
pub const UNKNOWN_CODE: i32 = -1;

/// A closed set of variants, each bound to one integer wire code.
pub trait CodedEnum: Copy + Eq + 'static {
    /// Fallback variant for codes outside [`Self::VARIANTS`].
    const UNKNOWN: Self;

    /// Every variant, `Unknown` included.
    const VARIANTS: &'static [Self];

    /// Returns the wire code of this variant.
    fn code(self) -> i32;

    /// Resolves a wire code. Never fails: unrecognised codes yield
    /// [`Self::UNKNOWN`].
    #[must_use]
    fn from_code(code: i32) -> Self {
        Self::VARIANTS
            .iter()
            .copied()
            .find(|variant| variant.code() == code)
            .unwrap_or(Self::UNKNOWN)
    }

    /// Returns true for the fallback variant.
    #[must_use]
    fn is_unknown(self) -> bool {
        self == Self::UNKNOWN
    }

    /// Iterates over the variants the server actually assigns.
    fn known() -> impl Iterator<Item = Self> {
        Self::VARIANTS
            .iter()
            .copied()
            .filter(|variant| !variant.is_unknown())
    }
}

/// A closed set of variants keyed by a string on the wire.
pub trait KeyedEnum: Copy + Eq + 'static {
    /// Fallback variant for keys outside [`Self::VARIANTS`].
    const UNKNOWN: Self;

    /// Every variant, `Unknown` included.
    const VARIANTS: &'static [Self];

    /// Returns the wire key of this variant.
    fn key(self) -> &'static str;

    /// Resolves a wire key, falling back to [`Self::UNKNOWN`].
    #[must_use]
    fn from_key(key: &str) -> Self {
        Self::VARIANTS
            .iter()
            .copied()
            .find(|variant| variant.key() == key)
            .unwrap_or(Self::UNKNOWN)
    }

    /// Returns true for the fallback variant.
    #[must_use]
    fn is_unknown(self) -> bool {
        self == Self::UNKNOWN
    }
}

/// Resolves a code that arrived in a payload, where numbers are not bounded
/// to `i32`. Out-of-range values are unknown by definition.
pub(crate) fn resolve_wire<T: CodedEnum>(raw: i64) -> T {
    let resolved = i32::try_from(raw).map_or(T::UNKNOWN, T::from_code);
    if resolved.is_unknown() && raw != i64::from(UNKNOWN_CODE) {
        tracing::debug!(
            code = raw,
            kind = std::any::type_name::<T>(),
            "unrecognised wire code, using Unknown"
        );
    }
    resolved
}

/// Declares a [`CodedEnum`] together with its `Unknown` variant, integer
/// conversions and serde support (serialized as the bare code).
macro_rules! coded_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $code:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(from = "i64", into = "i32")]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
            /// A code this version of the model does not know about.
            Unknown,
        }

        impl $crate::domain::coded::CodedEnum for $name {
            const UNKNOWN: Self = Self::Unknown;
            const VARIANTS: &'static [Self] = &[$(Self::$variant,)+ Self::Unknown];

            fn code(self) -> i32 {
                match self {
                    $(Self::$variant => $code,)+
                    Self::Unknown => $crate::domain::coded::UNKNOWN_CODE,
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::Unknown
            }
        }

        impl From<i32> for $name {
            fn from(code: i32) -> Self {
                <Self as $crate::domain::coded::CodedEnum>::from_code(code)
            }
        }

        impl From<i64> for $name {
            fn from(code: i64) -> Self {
                $crate::domain::coded::resolve_wire(code)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                <$name as $crate::domain::coded::CodedEnum>::code(value)
            }
        }
    };
}

pub(crate) use coded_enum;

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::HashSet;
    use std::fmt::Debug;

    use super::*;
    use crate::domain::entities::{
        AutoModEventType, AutoModResponseType, AutoModTriggerType, BoostTier, ChannelType,
        EntitlementType, ExplicitContentLevel, ForumLayout, ForumSortOrder, InviteTargetType,
        KeywordPreset, MessageType, MfaLevel, NotificationLevel, NsfwLevel, OnlineStatus,
        PremiumType, SkuType, VerificationLevel, WebhookType,
    };

    /// Checks the resolver contract for one enum: unique codes, exact
    /// round trips, sentinel idempotence and fallback for foreign codes.
    pub(crate) fn assert_resolver_contract<T: CodedEnum + Debug>() {
        let mut seen = HashSet::new();
        for variant in T::VARIANTS {
            assert!(
                seen.insert(variant.code()),
                "duplicate code {} in {}",
                variant.code(),
                std::any::type_name::<T>()
            );
            assert_eq!(T::from_code(variant.code()), *variant);
        }

        assert!(T::VARIANTS.contains(&T::UNKNOWN));
        assert_eq!(T::UNKNOWN.code(), UNKNOWN_CODE);
        assert_eq!(T::from_code(T::UNKNOWN.code()), T::UNKNOWN);

        for foreign in [i32::MIN, -2, 99, 1000, i32::MAX] {
            if !seen.contains(&foreign) {
                assert_eq!(T::from_code(foreign), T::UNKNOWN, "code {foreign}");
            }
        }
        assert!(T::known().all(|v| !v.is_unknown()));
    }

    #[test]
    fn test_every_enum_honours_resolver_contract() {
        assert_resolver_contract::<ChannelType>();
        assert_resolver_contract::<MessageType>();
        assert_resolver_contract::<AutoModTriggerType>();
        assert_resolver_contract::<AutoModEventType>();
        assert_resolver_contract::<AutoModResponseType>();
        assert_resolver_contract::<KeywordPreset>();
        assert_resolver_contract::<EntitlementType>();
        assert_resolver_contract::<SkuType>();
        assert_resolver_contract::<WebhookType>();
        assert_resolver_contract::<VerificationLevel>();
        assert_resolver_contract::<NotificationLevel>();
        assert_resolver_contract::<ExplicitContentLevel>();
        assert_resolver_contract::<MfaLevel>();
        assert_resolver_contract::<NsfwLevel>();
        assert_resolver_contract::<BoostTier>();
        assert_resolver_contract::<ForumLayout>();
        assert_resolver_contract::<ForumSortOrder>();
        assert_resolver_contract::<InviteTargetType>();
        assert_resolver_contract::<PremiumType>();
    }

    #[test]
    fn test_keyed_enum_fallback() {
        assert_eq!(OnlineStatus::from_key("dnd"), OnlineStatus::DoNotDisturb);
        assert_eq!(OnlineStatus::from_key("streaming"), OnlineStatus::Unknown);
        assert_eq!(
            OnlineStatus::from_key(OnlineStatus::Unknown.key()),
            OnlineStatus::Unknown
        );
        for status in OnlineStatus::VARIANTS {
            assert_eq!(OnlineStatus::from_key(status.key()), *status);
        }
    }

    #[test]
    fn test_out_of_range_wire_code_is_unknown() {
        assert_eq!(
            resolve_wire::<ChannelType>(i64::from(i32::MAX) + 1),
            ChannelType::Unknown
        );
        assert_eq!(resolve_wire::<ChannelType>(0), ChannelType::Text);
    }

    #[test]
    fn test_unknown_code_deserializes() {
        let kind: WebhookType = serde_json::from_str("42").unwrap();
        assert_eq!(kind, WebhookType::Unknown);

        let kind: WebhookType = serde_json::from_str("2").unwrap();
        assert_eq!(kind, WebhookType::Follower);
        assert_eq!(serde_json::to_string(&kind).unwrap(), "2");
    }
}
