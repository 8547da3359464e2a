//! Per-user command bans.

use crate::StageOutcome;
use bloo_core::{Interaction, RejectionOutcome, UserModerationRecord};
use bloo_interface::ModerationStore;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Rejects invokers banned from the command they invoked.
#[derive(Clone)]
pub struct CommandBanRegistry {
    store: Arc<dyn ModerationStore>,
}

impl CommandBanRegistry {
    /// Create a registry reading from `store`.
    pub fn new(store: Arc<dyn ModerationStore>) -> Self {
        Self { store }
    }

    /// Look up the invoker's ban for this exact command name.
    ///
    /// A store failure is treated as an empty record.
    #[instrument(
        skip(self, interaction),
        fields(user_id = %interaction.invoker().user_id(), command = %interaction.command_name())
    )]
    pub async fn check(&self, interaction: &Interaction) -> StageOutcome {
        let user = *interaction.invoker().user_id();
        let record = match self.store.get_record(user).await {
            Ok(record) => record,
            Err(e) => {
                warn!(error = %e, "Moderation record lookup failed, assuming no bans");
                UserModerationRecord::new(user)
            }
        };

        if record.is_command_banned(interaction.command_name()) {
            debug!("Invoker is banned from command");
            return StageOutcome::Reject(RejectionOutcome::command_banned());
        }

        StageOutcome::Continue
    }
}
