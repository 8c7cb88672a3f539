//! Use case implementations.

mod ban_members_use_case;
mod consume_entitlement_use_case;

pub use ban_members_use_case::BanMembersUseCase;
pub use consume_entitlement_use_case::ConsumeEntitlementUseCase;
