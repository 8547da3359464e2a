//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the bloo binary.

mod check;
mod commands;
#[cfg(feature = "discord")]
mod run;
mod simulate;

pub use check::check_config;
pub use commands::{Cli, Commands};
#[cfg(feature = "discord")]
pub use run::run_bot;
pub use simulate::run_simulation;
