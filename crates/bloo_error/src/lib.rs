//! Error types for the Bloo moderation bot.
//!
//! This crate provides the foundation error types used throughout the Bloo workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! Note that a rejected interaction is not an error. Rejections are ordinary
//! gate decisions; these types cover startup, boundary parsing and collaborator
//! failures.
//!
//! # Examples
//!
//! ```
//! use bloo_error::{BlooResult, ConfigError};
//!
//! fn load_guild() -> BlooResult<u64> {
//!     Err(ConfigError::new("guild_id is required"))?
//! }
//!
//! assert!(load_guild().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builder;
mod config;
#[cfg(feature = "database")]
mod database;
#[cfg(feature = "discord")]
mod discord;
mod error;
mod json;
mod permission;

pub use builder::{BuilderError, BuilderErrorKind};
pub use config::ConfigError;
#[cfg(feature = "database")]
pub use database::{DatabaseError, DatabaseErrorKind};
#[cfg(feature = "discord")]
pub use discord::{DiscordError, DiscordErrorKind, DiscordResult};
pub use error::{BlooError, BlooErrorKind, BlooResult};
pub use json::JsonError;
pub use permission::{PermissionError, PermissionErrorKind};
