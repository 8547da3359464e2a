//! Configuration check command handler.

use bloo::{AppContext, BlooConfig, BlooResult};
use bloo_database::MemoryModerationStore;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Load configuration, build the context offline and print a summary.
pub fn check_config(config_path: Option<&Path>) -> BlooResult<()> {
    let config = BlooConfig::load(config_path)?;
    let summary = summarize(&config);

    // Validates filter patterns and extensions without touching the database.
    let mut offline = config.clone();
    offline.database = None;
    let context = AppContext::with_store(offline, Arc::new(MemoryModerationStore::new()))?;
    info!(?context, "Configuration is valid");

    println!("{}", summary);
    Ok(())
}

fn summarize(config: &BlooConfig) -> String {
    let mut lines = vec![
        format!("guild_id:    {}", config.guild_id),
        format!(
            "owner_id:    {}",
            config
                .permissions
                .owner_id
                .map(|id| id.to_string())
                .unwrap_or_else(|| "(none)".to_string())
        ),
        format!("tier roles:  {}", config.permissions.roles.len()),
        format!(
            "filter:      {} words, {} patterns",
            config.filter.words.len(),
            config.filter.patterns.len()
        ),
        format!("extensions:  {}", config.extensions.join(", ")),
    ];
    lines.push(format!(
        "database:    {}",
        if config.database.is_some() {
            "postgres"
        } else {
            "in-memory"
        }
    ));
    lines.join("\n")
}
