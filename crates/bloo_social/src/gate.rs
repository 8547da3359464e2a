//! Applies gate decisions to the outside world.

use bloo_core::{Interaction, RejectionOutcome};
use bloo_interface::{CommandDispatcher, ResponseChannel};
use bloo_security::{GateDecision, InteractionGuard};
use tracing::{debug, info, instrument};

/// What happened to an interaction after its decision was applied.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GateOutcome {
    /// Forwarded to the command framework.
    #[display("dispatched")]
    Dispatched,
    /// One error message was sent to the invoker.
    #[display("rejected: {}", _0)]
    Rejected(RejectionOutcome),
    /// Ignored without a reply.
    #[display("dropped")]
    Dropped,
}

/// Runs the guard and performs the single resulting side effect.
///
/// Per interaction the gate either dispatches once, sends one error message,
/// or does nothing. It never does more than one of these.
#[derive(Clone, derive_getters::Getters)]
pub struct InteractionGate {
    /// Decides what happens to each interaction
    guard: InteractionGuard,
}

impl InteractionGate {
    /// Create a gate around `guard`.
    pub fn new(guard: InteractionGuard) -> Self {
        Self { guard }
    }

    /// Evaluate `interaction` and apply the decision.
    ///
    /// The interaction is moved into `dispatcher` unchanged when admitted.
    #[instrument(
        skip_all,
        fields(
            user_id = %interaction.invoker().user_id(),
            command = %interaction.command_name()
        )
    )]
    pub async fn process(
        &self,
        interaction: Interaction,
        dispatcher: &dyn CommandDispatcher,
        responder: &dyn ResponseChannel,
    ) -> GateOutcome {
        match self.guard.evaluate(&interaction).await {
            GateDecision::Drop => {
                debug!("Interaction outside configured guild, dropping");
                GateOutcome::Dropped
            }
            GateDecision::Reject(rejection) => {
                info!(reason = %rejection, "Sending rejection");
                responder.send_error(rejection.reason()).await;
                GateOutcome::Rejected(rejection)
            }
            GateDecision::Dispatch { bypassed } => {
                info!(bypassed, "Dispatching interaction");
                dispatcher.dispatch(interaction).await;
                GateOutcome::Dispatched
            }
        }
    }
}
