//! Bloo - Discord moderation bot
//!
//! Every slash command passes an admission-control gate before it reaches its
//! handler:
//!
//! 1. Interactions from any guild but the configured one are ignored
//! 2. Administrators skip the remaining checks
//! 3. Per-user command bans
//! 4. Content filtering of string arguments
//!
//! # Cargo Features
//!
//! - `discord` - Discord bot integration (default)
//! - `database` - PostgreSQL moderation store
//!
//! # Architecture
//!
//! Bloo is organized as a workspace with focused crates:
//!
//! - `bloo_error` - Error types
//! - `bloo_core` - Interaction data model
//! - `bloo_interface` - Collaborator traits
//! - `bloo_security` - Gate stages, tier resolver and word filter
//! - `bloo_database` - Moderation record stores
//! - `bloo_social` - Gate side effects and Discord integration
//!
//! This crate wires them together behind [`AppContext`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod context;
mod logging;
mod simulate;

pub use config::{BlooConfig, DatabaseConfig, TOKEN_ENV};
pub use context::AppContext;
pub use logging::init_logging;
pub use simulate::{Simulation, simulate};

pub use bloo_core::{GuildId, Interaction, PermissionTier, RoleId, UserId};
pub use bloo_error::{BlooError, BlooErrorKind, BlooResult};
pub use bloo_security::GateDecision;
pub use bloo_social::{GateOutcome, InteractionGate};
