//! Premium offerings sold through an application.

use serde::{Deserialize, Serialize};

use super::{ApplicationId, SkuId};
use crate::domain::coded::coded_enum;
use crate::domain::snowflake::Snowflake;

coded_enum! {
    /// Kind of SKU.
    pub enum SkuType {
        /// One-time purchase that stays owned.
        Durable = 2,
        /// One-time purchase that is used up.
        Consumable = 3,
        /// Recurring subscription.
        Subscription = 5,
        /// Generated group that every subscription SKU belongs to.
        SubscriptionGroup = 6,
    }
}

bitflags::bitflags! {
    /// SKU flag bits.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct SkuFlags: u64 {
        /// Available for purchase.
        const AVAILABLE = 1 << 2;
        /// Subscription bought by a user and applied to one guild.
        const GUILD_SUBSCRIPTION = 1 << 7;
        /// Subscription that grants the buying user access everywhere.
        const USER_SUBSCRIPTION = 1 << 8;
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Sku {
    id: SkuId,
    #[serde(rename = "type")]
    kind: SkuType,
    application_id: ApplicationId,
    name: String,
    slug: String,
    #[serde(default, with = "crate::domain::serde_utils::bits")]
    flags: SkuFlags,
}

impl Sku {
    #[must_use]
    pub fn new(
        id: impl Into<SkuId>,
        kind: SkuType,
        application: impl Into<ApplicationId>,
        name: impl Into<String>,
        slug: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            application_id: application.into(),
            name: name.into(),
            slug: slug.into(),
            flags: SkuFlags::empty(),
        }
    }

    #[must_use]
    pub const fn with_flags(mut self, flags: SkuFlags) -> Self {
        self.flags = flags;
        self
    }

    #[must_use]
    pub const fn id(&self) -> SkuId {
        self.id
    }

    #[must_use]
    pub const fn kind(&self) -> SkuType {
        self.kind
    }

    #[must_use]
    pub const fn application_id(&self) -> ApplicationId {
        self.application_id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// System generated URL slug.
    #[must_use]
    pub fn slug(&self) -> &str {
        &self.slug
    }

    #[must_use]
    pub const fn flags(&self) -> SkuFlags {
        self.flags
    }

    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.flags.contains(SkuFlags::AVAILABLE)
    }

    /// Returns true if entitlements to this SKU are consumed when used.
    #[must_use]
    pub fn is_consumable(&self) -> bool {
        self.kind == SkuType::Consumable
    }

    /// Store page of the SKU in the app directory.
    #[must_use]
    pub fn store_url(&self) -> String {
        format!(
            "https://discord.com/application-directory/{}/store/{}",
            self.application_id, self.id
        )
    }
}

impl Snowflake for Sku {
    fn snowflake(&self) -> u64 {
        self.id.as_u64()
    }
}
