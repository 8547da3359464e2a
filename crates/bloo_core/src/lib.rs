//! Core data types for the Bloo moderation bot.
//!
//! This crate provides the strongly-typed values that flow through the
//! interaction gate. Raw platform payloads are parsed into these types once,
//! at the boundary, so no later stage re-interprets loosely-typed JSON.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod ids;
mod interaction;
mod moderation;
mod option;
mod outcome;
mod payload;
mod tier;

pub use ids::{GuildId, RoleId, UserId};
pub use interaction::{Interaction, InteractionBuilder, Invoker};
pub use moderation::UserModerationRecord;
pub use option::{CommandOption, OptionValue};
pub use outcome::{FilterVerdict, RejectionOutcome};
pub use payload::{
    CommandDataPayload, InteractionPayload, MemberPayload, OptionPayload, UserPayload,
};
pub use tier::PermissionTier;
