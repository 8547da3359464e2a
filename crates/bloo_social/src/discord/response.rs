//! Discord implementations of the gate's output collaborators.

use super::CommandRegistry;
use async_trait::async_trait;
use bloo_core::Interaction;
use bloo_interface::{CommandDispatcher, ResponseChannel};
use serenity::all::{
    Colour, CommandInteraction, Context, CreateAllowedMentions, CreateEmbed,
    CreateInteractionResponse, CreateInteractionResponseMessage,
};
use tracing::{debug, error, instrument};

/// Title of every rejection embed.
pub const REJECTION_TITLE: &str = ":(\nYour command ran into a problem";

/// Sends rejections as an ephemeral reply to the original interaction.
pub struct DiscordResponder<'a> {
    ctx: &'a Context,
    command: &'a CommandInteraction,
}

impl<'a> DiscordResponder<'a> {
    /// Bind a responder to one interaction.
    pub fn new(ctx: &'a Context, command: &'a CommandInteraction) -> Self {
        Self { ctx, command }
    }
}

#[async_trait]
impl ResponseChannel for DiscordResponder<'_> {
    #[instrument(skip(self), fields(command = %self.command.data.name))]
    async fn send_error(&self, message: &str) {
        let embed = CreateEmbed::new()
            .title(REJECTION_TITLE)
            .description(message)
            .colour(Colour::RED);

        let response = CreateInteractionResponse::Message(
            CreateInteractionResponseMessage::new()
                .embed(embed)
                .ephemeral(true)
                .allowed_mentions(CreateAllowedMentions::new().all_users(true)),
        );

        match self.command.create_response(&self.ctx.http, response).await {
            Ok(()) => debug!("Sent rejection"),
            Err(e) => error!(error = %e, "Failed to send rejection"),
        }
    }
}

/// Forwards admitted interactions to the slash-command registry.
pub struct DiscordDispatcher<'a> {
    ctx: &'a Context,
    command: &'a CommandInteraction,
    registry: &'a CommandRegistry,
}

impl<'a> DiscordDispatcher<'a> {
    /// Bind a dispatcher to one interaction.
    pub fn new(
        ctx: &'a Context,
        command: &'a CommandInteraction,
        registry: &'a CommandRegistry,
    ) -> Self {
        Self {
            ctx,
            command,
            registry,
        }
    }
}

#[async_trait]
impl CommandDispatcher for DiscordDispatcher<'_> {
    #[instrument(skip_all, fields(command = %interaction.command_name()))]
    async fn dispatch(&self, interaction: Interaction) {
        debug!(options = interaction.options().len(), "Running handler");
        self.registry.execute(self.ctx, self.command).await;
    }
}
