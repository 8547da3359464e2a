//! Application context with an explicit initialization order.

use crate::BlooConfig;
use bloo_core::Interaction;
use bloo_database::MemoryModerationStore;
use bloo_error::{BlooResult, ConfigError};
use bloo_interface::ModerationStore;
use bloo_security::{
    ArgumentContentScanner, AuthorityGate, CommandBanRegistry, GateDecision, InteractionGuard,
    RoleTierResolver, ScopeFilter, WordFilter,
};
use bloo_social::InteractionGate;
use std::sync::Arc;
use tracing::{info, instrument, warn};

#[cfg(feature = "discord")]
use bloo_social::{CommandRegistry, ExtensionLoader};

/// Everything the bot needs, built once at startup.
///
/// Components are constructed in a fixed order: configuration, moderation
/// store, tier resolver, filter engine, command registry, then the gate that
/// ties them together.
pub struct AppContext {
    config: BlooConfig,
    store: Arc<dyn ModerationStore>,
    resolver: Arc<RoleTierResolver>,
    filter: Arc<WordFilter>,
    #[cfg(feature = "discord")]
    registry: Arc<CommandRegistry>,
    gate: InteractionGate,
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("guild_id", &self.config.guild_id)
            .field("extensions", &self.config.extensions)
            .finish_non_exhaustive()
    }
}

impl AppContext {
    /// Build the context, opening the configured moderation store.
    ///
    /// # Errors
    ///
    /// Returns an error if the database is unreachable, a filter pattern is
    /// invalid, or an extension cannot be loaded.
    #[instrument(skip(config), fields(guild_id = %config.guild_id))]
    pub async fn initialize(config: BlooConfig) -> BlooResult<Self> {
        let store = open_store(&config).await?;
        Self::with_store(config, store)
    }

    /// Build the context around an existing moderation store.
    ///
    /// # Errors
    ///
    /// Returns an error if a filter pattern is invalid or an extension cannot
    /// be loaded.
    pub fn with_store(config: BlooConfig, store: Arc<dyn ModerationStore>) -> BlooResult<Self> {
        let resolver = Arc::new(RoleTierResolver::new(config.permissions.clone()));

        let filter = Arc::new(
            WordFilter::new(config.filter.clone(), resolver.clone())
                .map_err(|e| ConfigError::new(format!("Invalid filter configuration: {}", e)))?,
        );

        #[cfg(feature = "discord")]
        let registry = Arc::new(
            ExtensionLoader::with_builtins()
                .load(&config.extensions)
                .map_err(|e| ConfigError::new(format!("Failed to load extensions: {}", e)))?,
        );

        let guard = InteractionGuard::new(
            ScopeFilter::new(config.guild_id),
            AuthorityGate::new(resolver.clone()),
            CommandBanRegistry::new(store.clone()),
            ArgumentContentScanner::new(filter.clone()),
        );

        info!(
            guild_id = %config.guild_id,
            extensions = config.extensions.len(),
            "Application context initialized"
        );

        Ok(Self {
            config,
            store,
            resolver,
            filter,
            #[cfg(feature = "discord")]
            registry,
            gate: InteractionGate::new(guard),
        })
    }

    /// The loaded configuration.
    pub fn config(&self) -> &BlooConfig {
        &self.config
    }

    /// The moderation store.
    pub fn store(&self) -> &Arc<dyn ModerationStore> {
        &self.store
    }

    /// The tier resolver.
    pub fn resolver(&self) -> &Arc<RoleTierResolver> {
        &self.resolver
    }

    /// The filter engine.
    pub fn filter(&self) -> &Arc<WordFilter> {
        &self.filter
    }

    /// The slash-command registry.
    #[cfg(feature = "discord")]
    pub fn registry(&self) -> &Arc<CommandRegistry> {
        &self.registry
    }

    /// The interaction gate.
    pub fn gate(&self) -> &InteractionGate {
        &self.gate
    }

    /// Decide what would happen to `interaction`, without side effects.
    pub async fn evaluate(&self, interaction: &Interaction) -> GateDecision {
        self.gate.guard().evaluate(interaction).await
    }
}

#[cfg(feature = "database")]
async fn open_store(config: &BlooConfig) -> BlooResult<Arc<dyn ModerationStore>> {
    use bloo_database::{PgModerationStore, establish_pool, run_migrations};

    let Some(database) = &config.database else {
        warn!("No database configured, moderation records will not persist");
        return Ok(Arc::new(MemoryModerationStore::new()));
    };

    let url = database.url.clone();
    let pool = tokio::task::spawn_blocking(move || {
        let pool = establish_pool(&url)?;
        run_migrations(&pool)?;
        Ok::<_, bloo_error::DatabaseError>(pool)
    })
    .await
    .map_err(|e| ConfigError::new(format!("Database setup task failed: {}", e)))??;

    info!("Using PostgreSQL moderation store");
    Ok(Arc::new(PgModerationStore::new(pool)))
}

#[cfg(not(feature = "database"))]
async fn open_store(config: &BlooConfig) -> BlooResult<Arc<dyn ModerationStore>> {
    if config.database.is_some() {
        return Err(ConfigError::new(
            "A database is configured but bloo was built without the `database` feature",
        )
        .into());
    }

    warn!("No database configured, moderation records will not persist");
    Ok(Arc::new(MemoryModerationStore::new()))
}
