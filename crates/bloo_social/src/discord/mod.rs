//! Discord integration for Bloo.
//!
//! # Architecture
//!
//! ## Boundary
//! - **conversions**: serenity command interactions into [`bloo_core::Interaction`]
//!
//! ## Integration Layer
//! - **client**: Serenity client setup and lifecycle management
//! - **handler**: Event handler routing slash commands through the gate
//! - **response**: Rejection messages and dispatch into the command registry
//!
//! ## Feature Layer
//! - **commands**: Slash-command trait, registry and built-in commands
//! - **extensions**: Startup loading of command extensions by name
//!
//! Available with the `discord` feature.

mod client;
mod commands;
mod conversions;
mod extensions;
mod handler;
mod response;

pub use client::BlooBot;
pub use commands::{CommandRegistry, HelpCommand, PingCommand, ShardManagerContainer, SlashCommand};
pub use conversions::interaction_from_command;
pub use bloo_error::{DiscordError, DiscordErrorKind, DiscordResult};
pub use extensions::{ExtensionFactory, ExtensionLoader};
pub use handler::BlooHandler;
pub use response::{DiscordDispatcher, DiscordResponder, REJECTION_TITLE};
