//! Moderation record storage for Bloo.
//!
//! This crate provides the [`ModerationStore`](bloo_interface::ModerationStore)
//! implementations the bot runs with.
//!
//! # Features
//!
//! - In-memory store, always available, used for tests and offline simulation
//! - Diesel-based PostgreSQL store (requires the `database` feature)
//!
//! # Example
//!
//! ```rust,ignore
//! use bloo_database::{establish_pool, run_migrations, PgModerationStore};
//!
//! let pool = establish_pool(&std::env::var("DATABASE_URL")?)?;
//! run_migrations(&pool)?;
//! let store = PgModerationStore::new(pool);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod memory;

#[cfg(feature = "database")]
mod connection;
#[cfg(feature = "database")]
mod models;
#[cfg(feature = "database")]
mod postgres;
#[cfg(feature = "database")]
pub mod schema;

pub use memory::MemoryModerationStore;

#[cfg(feature = "database")]
pub use connection::{PgPool, establish_pool, run_migrations};
#[cfg(feature = "database")]
pub use models::{CommandBanRow, NewCommandBan, NewModerationUser};
#[cfg(feature = "database")]
pub use postgres::PgModerationStore;

/// Result type for database operations.
#[cfg(feature = "database")]
pub type DatabaseResult<T> = Result<T, bloo_error::DatabaseError>;
