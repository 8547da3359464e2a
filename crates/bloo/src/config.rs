//! Bot configuration.

use bloo_core::GuildId;
use bloo_error::{BlooError, BlooResult, ConfigError};
use bloo_security::{FilterConfig, PermissionConfig};
use bloo_social::BUILTIN_EXTENSIONS;
use config::{Config, ConfigBuilder, Environment, File, builder::DefaultState};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, instrument};

/// Environment variable holding the gateway token.
pub const TOKEN_ENV: &str = "BLOO_TOKEN";

/// Database connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL
    pub url: String,
}

/// Top-level bot configuration.
///
/// ```toml
/// guild_id = 349243932447604736
/// extensions = ["commands.info.ping", "commands.info.help"]
///
/// [permissions]
/// owner_id = 109705860275539968
///
/// [[filter.words]]
/// phrase = "badword"
/// bypass = 5
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlooConfig {
    /// The only guild the bot moderates
    pub guild_id: GuildId,

    /// Tier assignments
    #[serde(default)]
    pub permissions: PermissionConfig,

    /// Content filter rules
    #[serde(default)]
    pub filter: FilterConfig,

    /// Extensions to load, in order
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// PostgreSQL settings; the in-memory store is used when absent
    #[serde(default)]
    pub database: Option<DatabaseConfig>,
}

fn default_extensions() -> Vec<String> {
    BUILTIN_EXTENSIONS.iter().map(|name| name.to_string()).collect()
}

fn finish(builder: ConfigBuilder<DefaultState>) -> BlooResult<BlooConfig> {
    builder
        .build()
        .map_err(|e| {
            BlooError::from(ConfigError::new(format!(
                "Failed to build configuration: {}",
                e
            )))
        })?
        .try_deserialize()
        .map_err(|e| {
            BlooError::from(ConfigError::new(format!(
                "Failed to parse configuration: {}",
                e
            )))
        })
}

fn environment() -> Environment {
    Environment::with_prefix("BLOO")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

impl BlooConfig {
    /// Load configuration from a single file, without environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> BlooResult<Self> {
        debug!("Loading configuration from file");
        finish(Config::builder().add_source(File::from(path.as_ref())))
    }

    /// Load configuration with precedence (later sources override earlier):
    ///
    /// 1. User config in home directory (`~/.config/bloo/bloo.toml`)
    /// 2. Config in current directory (`./bloo.toml`)
    /// 3. `explicit` path, which must exist when given
    /// 4. Environment variables prefixed `BLOO__`, e.g. `BLOO__GUILD_ID`
    ///
    /// # Errors
    ///
    /// Returns an error if a required source is missing or `guild_id` is unset.
    #[instrument(skip(explicit))]
    pub fn load(explicit: Option<&Path>) -> BlooResult<Self> {
        debug!("Loading configuration with precedence: env > explicit > current dir > home dir");

        let mut builder = Config::builder();

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/bloo/bloo.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("bloo").required(false));

        if let Some(path) = explicit {
            builder = builder.add_source(File::from(path).required(true));
        }

        finish(builder.add_source(environment()))
    }

    /// Read the gateway token from the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if `BLOO_TOKEN` is unset or empty.
    pub fn token() -> BlooResult<String> {
        match std::env::var(TOKEN_ENV) {
            Ok(token) if !token.trim().is_empty() => Ok(token),
            _ => Err(ConfigError::missing(TOKEN_ENV).into()),
        }
    }
}
