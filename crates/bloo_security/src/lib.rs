//! Admission control for Bloo slash-command interactions.
//!
//! Every interaction passes through a fixed chain of increasingly expensive
//! checks before it may reach its handler.
//!
//! # Architecture
//!
//! 1. **Scope** - Interactions from any guild other than the configured one are dropped silently
//! 2. **Authority** - Invokers at the administrator tier or above skip every remaining check
//! 3. **Command bans** - Per-user bans keyed by exact command name
//! 4. **Content** - String arguments are joined and scanned by the filter engine
//!
//! [`InteractionGuard`] chains the stages into a single [`GateDecision`].
//! The crate also ships the concrete collaborators the bot runs with: a
//! role-based tier resolver and a word filter.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod authority;
mod ban;
mod content;
mod error;
mod guard;
mod permission;
mod scanner;
mod scope;

pub use authority::{AuthorityGate, ELEVATED_TIER};
pub use ban::CommandBanRegistry;
pub use content::{FilterConfig, FilterPattern, FilterWord, WordFilter};
pub use error::{SecurityError, SecurityErrorKind, SecurityResult};
pub use guard::{GateDecision, InteractionGuard, StageOutcome};
pub use permission::{PermissionConfig, RoleTierResolver, TierRole};
pub use scanner::ArgumentContentScanner;
pub use scope::ScopeFilter;
