//! Discord bot client setup and lifecycle management.

use super::{BlooHandler, DiscordError, DiscordErrorKind, DiscordResult, ShardManagerContainer};
use serenity::Client;
use serenity::gateway::ShardManager;
use std::sync::Arc;
use tracing::{info, instrument};

/// Main Discord bot client for Bloo.
///
/// Serenity owns the gateway connection and reconnects on its own after
/// transient network loss.
///
/// # Example
/// ```no_run
/// use bloo_social::{BlooBot, BlooHandler};
///
/// # async fn run(handler: BlooHandler) -> Result<(), Box<dyn std::error::Error>> {
/// let token = std::env::var("BLOO_TOKEN")?;
/// let mut bot = BlooBot::new(&token, handler).await?;
/// bot.start().await?;
/// # Ok(())
/// # }
/// ```
pub struct BlooBot {
    client: Client,
}

impl BlooBot {
    /// Create a new bot.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The bot token is empty
    /// - The Serenity client fails to initialize
    #[instrument(skip(token, handler), fields(token_len = token.len()))]
    pub async fn new(token: &str, handler: BlooHandler) -> DiscordResult<Self> {
        if token.trim().is_empty() {
            return Err(DiscordError::new(DiscordErrorKind::InvalidToken));
        }

        let intents = BlooHandler::intents();
        info!("Building Serenity client with intents: {:?}", intents);

        let client = Client::builder(token, intents)
            .event_handler(handler)
            .await
            .map_err(|e| {
                DiscordError::new(DiscordErrorKind::ConnectionFailed(format!(
                    "Failed to build client: {}",
                    e
                )))
            })?;

        client
            .data
            .write()
            .await
            .insert::<ShardManagerContainer>(Arc::clone(&client.shard_manager));

        info!("Serenity client built successfully");
        Ok(Self { client })
    }

    /// Shard manager, for shutting the bot down.
    pub fn shard_manager(&self) -> Arc<ShardManager> {
        Arc::clone(&self.client.shard_manager)
    }

    /// Start the bot.
    ///
    /// Blocks until every shard has shut down.
    ///
    /// # Errors
    /// Returns an error if the client fails to start or encounters a fatal error.
    #[instrument(skip(self))]
    pub async fn start(&mut self) -> DiscordResult<()> {
        info!("Starting Discord bot");

        self.client.start().await.map_err(|e| {
            DiscordError::new(DiscordErrorKind::ConnectionFailed(format!(
                "Client error: {}",
                e
            )))
        })?;

        Ok(())
    }
}
