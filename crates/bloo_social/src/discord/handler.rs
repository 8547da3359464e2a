//! Serenity event handler for the Bloo bot.

use super::{CommandRegistry, DiscordDispatcher, DiscordResponder, interaction_from_command};
use crate::{GateOutcome, InteractionGate};
use serenity::all::{GuildId, Interaction, Ready};
use serenity::async_trait;
use serenity::client::{Context, EventHandler};
use serenity::model::gateway::GatewayIntents;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

const BANNER: &str = r"
  _     _
 | |__ | | ___   ___
 | '_ \| |/ _ \ / _ \
 | |_) | | (_) | (_) |
 |_.__/|_|\___/ \___/
";

/// Version of the serenity library, taken from its HTTP user agent.
pub(crate) fn serenity_version() -> &'static str {
    let agent = serenity::constants::USER_AGENT;
    agent
        .rsplit(", ")
        .next()
        .map(|tail| tail.trim_end_matches(')'))
        .unwrap_or(agent)
}

/// Event handler for the Bloo Discord bot.
///
/// Every slash command passes through the [`InteractionGate`] before it can
/// reach the [`CommandRegistry`].
pub struct BlooHandler {
    gate: InteractionGate,
    registry: Arc<CommandRegistry>,
}

impl BlooHandler {
    /// Create a new handler.
    pub fn new(gate: InteractionGate, registry: Arc<CommandRegistry>) -> Self {
        Self { gate, registry }
    }

    /// Required gateway intents for the bot.
    pub fn intents() -> GatewayIntents {
        GatewayIntents::GUILDS
            | GatewayIntents::GUILD_MEMBERS
            | GatewayIntents::GUILD_MESSAGES
            | GatewayIntents::MESSAGE_CONTENT
            | GatewayIntents::GUILD_PRESENCES
    }

    fn guild_id(&self) -> GuildId {
        GuildId::new(self.gate.guard().scope().guild_id().get())
    }
}

#[async_trait]
impl EventHandler for BlooHandler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!("{}", BANNER);
        info!(
            name = %ready.user.name,
            id = %ready.user.id,
            serenity_version = serenity_version(),
            "Bot connected"
        );

        let guild = self.guild_id();
        match guild
            .set_commands(&ctx.http, self.registry.create_commands())
            .await
        {
            Ok(commands) => info!(guild_id = %guild, count = commands.len(), "Registered slash commands"),
            Err(e) => error!(guild_id = %guild, error = %e, "Failed to register slash commands"),
        }
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Interaction::Command(command) = interaction else {
            debug!("Ignoring non-command interaction");
            return;
        };

        let gated = match interaction_from_command(&command) {
            Ok(gated) => gated,
            Err(e) => {
                warn!(error = %e, "Could not convert interaction");
                return;
            }
        };

        let dispatcher = DiscordDispatcher::new(&ctx, &command, &self.registry);
        let responder = DiscordResponder::new(&ctx, &command);
        let outcome = self.gate.process(gated, &dispatcher, &responder).await;

        if outcome != GateOutcome::Dropped {
            debug!(command = %command.data.name, %outcome, "Interaction handled");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serenity_version_is_library_version() {
        let version = serenity_version();
        assert!(version.starts_with("0.12."), "got {version}");
        assert!(!version.contains(')'));
        assert_ne!(version, env!("CARGO_PKG_VERSION"));
    }
}
