//! Slash-command framework and the built-in commands.
//!
//! # Built-in Commands
//!
//! - `/ping` - Replies with the gateway latency of the current shard
//! - `/help` - Lists every registered command

use super::{DiscordError, DiscordErrorKind, DiscordResult};
use async_trait::async_trait;
use serenity::all::{
    Colour, CommandInteraction, Context, CreateAllowedMentions, CreateCommand, CreateEmbed,
    CreateInteractionResponse, CreateInteractionResponseMessage,
};
use serenity::gateway::ShardManager;
use serenity::prelude::TypeMapKey;
use std::sync::Arc;
use tracing::{debug, error, instrument, warn};

/// Type-map key holding the client's shard manager, used to read latency.
pub struct ShardManagerContainer;

impl TypeMapKey for ShardManagerContainer {
    type Value = Arc<ShardManager>;
}

/// A slash command the bot can register and run.
#[async_trait]
pub trait SlashCommand: Send + Sync {
    /// Command name as typed by users.
    fn name(&self) -> &str;

    /// Short description shown in the Discord client.
    fn description(&self) -> &str;

    /// Registration payload sent to Discord.
    fn create(&self) -> CreateCommand {
        CreateCommand::new(self.name()).description(self.description())
    }

    /// Run the command.
    ///
    /// `registry` is the registry the command was dispatched from.
    async fn run(
        &self,
        ctx: &Context,
        command: &CommandInteraction,
        registry: &CommandRegistry,
    ) -> DiscordResult<()>;
}

/// Registered slash commands, kept in registration order.
#[derive(Default)]
pub struct CommandRegistry {
    commands: Vec<Arc<dyn SlashCommand>>,
}

impl std::fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandRegistry")
            .field("commands", &self.names())
            .finish()
    }
}

impl CommandRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command.
    ///
    /// # Errors
    ///
    /// Returns an error if a command with the same name is already registered.
    pub fn register(&mut self, command: Arc<dyn SlashCommand>) -> DiscordResult<()> {
        if self.get(command.name()).is_some() {
            return Err(DiscordError::new(DiscordErrorKind::DuplicateCommand(
                command.name().to_string(),
            )));
        }
        debug!(command = command.name(), "Registered slash command");
        self.commands.push(command);
        Ok(())
    }

    /// Look up a command by exact name.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn SlashCommand>> {
        self.commands.iter().find(|command| command.name() == name)
    }

    /// Registered command names, in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.commands.iter().map(|command| command.name()).collect()
    }

    /// Iterate over registered commands.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn SlashCommand>> {
        self.commands.iter()
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Registration payloads for every command.
    pub fn create_commands(&self) -> Vec<CreateCommand> {
        self.commands.iter().map(|command| command.create()).collect()
    }

    /// Run the handler for `command`.
    ///
    /// Handler failures are logged here and never returned to the caller.
    #[instrument(skip(self, ctx, command), fields(command = %command.data.name))]
    pub async fn execute(&self, ctx: &Context, command: &CommandInteraction) {
        let Some(handler) = self.get(&command.data.name) else {
            warn!("No handler registered for command");
            return;
        };

        if let Err(e) = handler.run(ctx, command, self).await {
            error!(error = %e, "Command handler failed");
        }
    }
}

/// Plain text reply that may only mention users.
fn reply(content: impl Into<String>) -> CreateInteractionResponse {
    CreateInteractionResponse::Message(
        CreateInteractionResponseMessage::new()
            .content(content)
            .allowed_mentions(CreateAllowedMentions::new().all_users(true)),
    )
}

/// `/ping`: reports gateway latency.
#[derive(Debug, Clone, Copy, Default)]
pub struct PingCommand;

#[async_trait]
impl SlashCommand for PingCommand {
    fn name(&self) -> &str {
        "ping"
    }

    fn description(&self) -> &str {
        "Check the bot's gateway latency"
    }

    async fn run(
        &self,
        ctx: &Context,
        command: &CommandInteraction,
        _registry: &CommandRegistry,
    ) -> DiscordResult<()> {
        let manager = ctx.data.read().await.get::<ShardManagerContainer>().cloned();
        let latency = match manager {
            Some(manager) => manager
                .runners
                .lock()
                .await
                .get(&ctx.shard_id)
                .and_then(|runner| runner.latency),
            None => None,
        };

        let content = match latency {
            Some(latency) => format!("Pong! Gateway latency: {} ms", latency.as_millis()),
            None => "Pong! Gateway latency has not been measured yet.".to_string(),
        };

        command
            .create_response(&ctx.http, reply(content))
            .await
            .map_err(|e| DiscordError::new(DiscordErrorKind::InteractionFailed(e.to_string())))
    }
}

/// `/help`: lists registered commands.
#[derive(Debug, Clone, Copy, Default)]
pub struct HelpCommand;

impl HelpCommand {
    /// Help text for every command in `registry`.
    pub fn listing(registry: &CommandRegistry) -> String {
        registry
            .iter()
            .map(|command| format!("`/{}` - {}", command.name(), command.description()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[async_trait]
impl SlashCommand for HelpCommand {
    fn name(&self) -> &str {
        "help"
    }

    fn description(&self) -> &str {
        "List the available commands"
    }

    async fn run(
        &self,
        ctx: &Context,
        command: &CommandInteraction,
        registry: &CommandRegistry,
    ) -> DiscordResult<()> {
        let embed = CreateEmbed::new()
            .title("Commands")
            .description(Self::listing(registry))
            .colour(Colour::BLUE);

        let response = CreateInteractionResponse::Message(
            CreateInteractionResponseMessage::new()
                .embed(embed)
                .ephemeral(true)
                .allowed_mentions(CreateAllowedMentions::new().all_users(true)),
        );

        command
            .create_response(&ctx.http, response)
            .await
            .map_err(|e| DiscordError::new(DiscordErrorKind::InteractionFailed(e.to_string())))
    }
}
