//! Bot startup command handler.

use bloo::{AppContext, BlooConfig, BlooResult};
use bloo_social::{BlooBot, BlooHandler};
use std::path::Path;
use tracing::{error, info};

/// Start the bot and run until Ctrl+C.
///
/// A missing token, invalid configuration or unreachable database stops the
/// process before it connects.
pub async fn run_bot(config_path: Option<&Path>) -> BlooResult<()> {
    let config = BlooConfig::load(config_path)?;
    let token = BlooConfig::token()?;
    let context = AppContext::initialize(config).await?;

    let handler = BlooHandler::new(context.gate().clone(), context.registry().clone());
    let mut bot = BlooBot::new(&token, handler).await?;

    let shard_manager = bot.shard_manager();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Shutdown requested");
                shard_manager.shutdown_all().await;
            }
            Err(e) => error!(error = %e, "Failed to listen for Ctrl+C"),
        }
    });

    bot.start().await?;

    info!("Bot stopped");
    Ok(())
}
