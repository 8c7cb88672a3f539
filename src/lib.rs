//! Oxicord model - typed Discord entities for bots and clients.
//!
//! This crate provides the data model of the Discord API: snowflake ids,
//! wire-code enums that tolerate unknown values, channel capability traits,
//! mention and CDN helpers, and async ports for deferred REST actions.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing use cases built on the ports.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing configuration and CLI parsing.
pub mod infrastructure;

/// Current version of the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name.
pub const NAME: &str = "oxicord-model";
