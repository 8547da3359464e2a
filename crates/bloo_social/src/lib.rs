//! Interaction gating and platform integration for Bloo.
//!
//! [`InteractionGate`] turns a [`GateDecision`](bloo_security::GateDecision)
//! into exactly one side effect: the interaction is dispatched, a single error
//! message is sent, or nothing happens at all.
//!
//! # Platform Support
//!
//! - `discord` - Discord bot integration via serenity (requires `discord` feature)
//!
//! The Discord integration follows a common pattern:
//! - Platform-specific error types
//! - Boundary conversion from platform payloads into [`bloo_core::Interaction`]
//! - Client/handler for platform API interaction
//! - Slash-command registry and extension loader

#![warn(missing_docs)]

mod gate;

#[cfg(feature = "discord")]
mod discord;

pub use gate::{GateOutcome, InteractionGate};

/// Extensions loaded when the configuration names none.
pub const BUILTIN_EXTENSIONS: &[&str] = &["commands.info.ping", "commands.info.help"];

#[cfg(feature = "discord")]
pub use discord::{
    BlooBot, BlooHandler, CommandRegistry, DiscordDispatcher, DiscordError,
    DiscordErrorKind, DiscordResponder, DiscordResult, ExtensionFactory, ExtensionLoader,
    HelpCommand, PingCommand, REJECTION_TITLE, ShardManagerContainer, SlashCommand,
    interaction_from_command,
};
