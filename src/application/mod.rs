//! Application layer orchestrating the domain ports.

/// Use case implementations.
pub mod use_cases;

pub use use_cases::{BanMembersUseCase, ConsumeEntitlementUseCase};
