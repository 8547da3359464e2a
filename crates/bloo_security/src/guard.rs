//! The full admission-control chain.

use crate::{ArgumentContentScanner, AuthorityGate, CommandBanRegistry, ScopeFilter};
use bloo_core::{Interaction, RejectionOutcome};
use tracing::{debug, info, instrument};

/// Result of a single check that may halt the chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageOutcome {
    /// Pass control to the next stage unchanged
    Continue,
    /// Halt with a user-visible rejection
    Reject(RejectionOutcome),
}

/// What should happen to an interaction.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GateDecision {
    /// Hand the interaction to its handler.
    #[display("dispatch (bypassed: {})", bypassed)]
    Dispatch {
        /// Whether the authority bypass skipped the ban and content checks
        bypassed: bool,
    },
    /// Refuse with a user-visible reason.
    #[display("reject: {}", _0)]
    Reject(RejectionOutcome),
    /// Ignore without replying.
    #[display("drop")]
    Drop,
}

/// Chains scope, authority, ban and content checks into one decision.
///
/// Checks run strictly in order and each later check only runs once the
/// earlier ones have passed. The guard performs no writes, so evaluating
/// the same interaction against unchanged collaborators always yields the
/// same decision.
#[derive(Clone)]
pub struct InteractionGuard {
    scope: ScopeFilter,
    authority: AuthorityGate,
    bans: CommandBanRegistry,
    scanner: ArgumentContentScanner,
}

impl InteractionGuard {
    /// Create a guard from its stages.
    pub fn new(
        scope: ScopeFilter,
        authority: AuthorityGate,
        bans: CommandBanRegistry,
        scanner: ArgumentContentScanner,
    ) -> Self {
        Self {
            scope,
            authority,
            bans,
            scanner,
        }
    }

    /// The scope filter.
    pub fn scope(&self) -> &ScopeFilter {
        &self.scope
    }

    /// Decide what should happen to `interaction`.
    #[instrument(
        skip(self, interaction),
        fields(
            user_id = %interaction.invoker().user_id(),
            command = %interaction.command_name(),
            option_count = interaction.options().len()
        )
    )]
    pub async fn evaluate(&self, interaction: &Interaction) -> GateDecision {
        debug!("Stage 1: Checking scope");
        let Some(guild) = self.scope.admit(interaction) else {
            return GateDecision::Drop;
        };

        debug!("Stage 2: Checking authority");
        if self.authority.is_elevated(guild, interaction.invoker()).await {
            info!("Elevated invoker, skipping remaining checks");
            return GateDecision::Dispatch { bypassed: true };
        }

        debug!("Stage 3: Checking command bans");
        if let StageOutcome::Reject(rejection) = self.bans.check(interaction).await {
            info!(reason = %rejection, "Rejected by command ban");
            return GateDecision::Reject(rejection);
        }

        debug!("Stage 4: Scanning arguments");
        if let StageOutcome::Reject(rejection) = self.scanner.check(guild, interaction).await {
            info!(reason = %rejection, "Rejected by content filter");
            return GateDecision::Reject(rejection);
        }

        debug!("All checks passed");
        GateDecision::Dispatch { bypassed: false }
    }
}
