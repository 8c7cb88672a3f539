//! Premium entitlements.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ApplicationId, EntitlementId, GuildId, SkuId, UserId};
use crate::domain::coded::coded_enum;
use crate::domain::errors::ModelError;
use crate::domain::snowflake::Snowflake;

coded_enum! {
    /// How an entitlement was obtained.
    pub enum EntitlementType {
        /// Bought directly.
        Purchase = 1,
        /// Granted through Nitro.
        PremiumSubscription = 2,
        /// Gifted by the developer.
        DeveloperGift = 3,
        /// Test purchase by a developer.
        TestModePurchase = 4,
        /// Granted while the SKU was free.
        FreePurchase = 5,
        /// Gifted by another user.
        UserGift = 6,
        /// Claimed with Nitro.
        PremiumPurchase = 7,
        /// Bought as an app subscription.
        ApplicationSubscription = 8,
    }
}

/// Who holds an entitlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntitlementOwner {
    User(UserId),
    Guild(GuildId),
}

/// Access a user or guild holds to a premium SKU.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Entitlement {
    id: EntitlementId,
    sku_id: SkuId,
    application_id: ApplicationId,
    #[serde(default)]
    user_id: Option<UserId>,
    #[serde(default)]
    guild_id: Option<GuildId>,
    #[serde(rename = "type")]
    kind: EntitlementType,
    #[serde(default)]
    deleted: bool,
    #[serde(default)]
    consumed: Option<bool>,
    #[serde(default)]
    starts_at: Option<DateTime<Utc>>,
    #[serde(default)]
    ends_at: Option<DateTime<Utc>>,
}

impl Entitlement {
    /// Parses an entitlement object.
    ///
    /// # Errors
    ///
    /// Returns `Json` if the text is not an entitlement object.
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub const fn id(&self) -> EntitlementId {
        self.id
    }

    #[must_use]
    pub const fn sku_id(&self) -> SkuId {
        self.sku_id
    }

    #[must_use]
    pub const fn application_id(&self) -> ApplicationId {
        self.application_id
    }

    #[must_use]
    pub const fn kind(&self) -> EntitlementType {
        self.kind
    }

    #[must_use]
    pub const fn is_deleted(&self) -> bool {
        self.deleted
    }

    /// Returns true once a consumable entitlement has been used up.
    #[must_use]
    pub fn is_consumed(&self) -> bool {
        self.consumed.unwrap_or(false)
    }

    #[must_use]
    pub const fn starts_at(&self) -> Option<DateTime<Utc>> {
        self.starts_at
    }

    #[must_use]
    pub const fn ends_at(&self) -> Option<DateTime<Utc>> {
        self.ends_at
    }

    /// Holder of the entitlement. Guild entitlements win when a payload
    /// names both.
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` when the payload names neither.
    pub fn owner(&self) -> Result<EntitlementOwner, ModelError> {
        match (self.guild_id, self.user_id) {
            (Some(guild), _) => Ok(EntitlementOwner::Guild(guild)),
            (None, Some(user)) => Ok(EntitlementOwner::User(user)),
            (None, None) => Err(ModelError::invalid_state(format!(
                "entitlement {} has no owner",
                self.id
            ))),
        }
    }

    /// Returns true if the entitlement grants access at `now`: not deleted,
    /// not consumed, and inside its validity window. Missing bounds are
    /// open.
    #[must_use]
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        !self.deleted
            && !self.is_consumed()
            && self.starts_at.is_none_or(|start| start <= now)
            && self.ends_at.is_none_or(|end| now < end)
    }
}

impl Snowflake for Entitlement {
    fn snowflake(&self) -> u64 {
        self.id.as_u64()
    }
}
