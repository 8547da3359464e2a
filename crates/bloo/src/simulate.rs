//! Offline evaluation of raw interaction payloads.

use crate::{AppContext, BlooConfig};
use bloo_core::Interaction;
use bloo_database::MemoryModerationStore;
use bloo_error::BlooResult;
use bloo_interface::ModerationStore;
use bloo_security::GateDecision;
use std::sync::Arc;
use tracing::{debug, instrument};

/// A payload evaluated against the configured gate.
#[derive(Debug, Clone, PartialEq)]
pub struct Simulation {
    /// The parsed interaction
    pub interaction: Interaction,
    /// What the gate decided
    pub decision: GateDecision,
}

/// Parse `payload` and run it through the gate.
///
/// An in-memory store seeded with `bans` for the invoking user stands in for
/// the configured database.
///
/// # Errors
///
/// Returns an error if the payload does not parse or the context cannot be built.
#[instrument(skip(config, payload), fields(ban_count = bans.len()))]
pub async fn simulate(config: BlooConfig, payload: &str, bans: &[String]) -> BlooResult<Simulation> {
    let interaction = Interaction::from_json(payload)?;

    let store = Arc::new(MemoryModerationStore::new());
    let user = *interaction.invoker().user_id();
    for command in bans {
        debug!(command = %command, "Seeding command ban");
        store.set_command_ban(user, command, true).await?;
    }

    let context = AppContext::with_store(config, store)?;
    let decision = context.evaluate(&interaction).await;

    Ok(Simulation {
        interaction,
        decision,
    })
}
