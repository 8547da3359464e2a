//! Bloo CLI binary.
//!
//! - Run the moderation bot
//! - Validate configuration
//! - Simulate the gate against a saved interaction payload

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, check_config, run_simulation};
    #[cfg(feature = "discord")]
    use cli::run_bot;

    // Load .env before anything reads the environment
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    bloo::init_logging(cli.verbose, cli.json_logs)?;

    let config_path = cli.config.as_deref();
    match cli.command {
        #[cfg(feature = "discord")]
        Commands::Run => {
            run_bot(config_path).await?;
        }

        Commands::CheckConfig => {
            check_config(config_path)?;
        }

        Commands::Simulate { payload, bans } => {
            run_simulation(config_path, &payload, &bans).await?;
        }
    }

    Ok(())
}
