//! Startup loading of command extensions.

use super::{CommandRegistry, DiscordError, DiscordErrorKind, DiscordResult};
use super::{HelpCommand, PingCommand, SlashCommand};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{info, instrument};

/// Produces the commands an extension contributes.
pub type ExtensionFactory = fn() -> Vec<Arc<dyn SlashCommand>>;

fn ping_extension() -> Vec<Arc<dyn SlashCommand>> {
    let ping: Arc<dyn SlashCommand> = Arc::new(PingCommand);
    vec![ping]
}

fn help_extension() -> Vec<Arc<dyn SlashCommand>> {
    let help: Arc<dyn SlashCommand> = Arc::new(HelpCommand);
    vec![help]
}

/// Resolves extension names against a catalog and builds a [`CommandRegistry`].
///
/// # Example
///
/// ```
/// use bloo_social::ExtensionLoader;
///
/// let registry = ExtensionLoader::with_builtins()
///     .load(["commands.info.ping", "commands.info.help"])
///     .unwrap();
/// assert_eq!(registry.names(), vec!["ping", "help"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExtensionLoader {
    catalog: BTreeMap<String, ExtensionFactory>,
}

impl ExtensionLoader {
    /// Create a loader with an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a loader that knows the built-in extensions.
    pub fn with_builtins() -> Self {
        let mut loader = Self::new();
        loader.add("commands.info.ping", ping_extension);
        loader.add("commands.info.help", help_extension);
        loader
    }

    /// Add an extension to the catalog.
    pub fn add(&mut self, name: impl Into<String>, factory: ExtensionFactory) {
        self.catalog.insert(name.into(), factory);
    }

    /// Load `names` in order.
    ///
    /// # Errors
    ///
    /// Returns an error if a name is not in the catalog or two extensions
    /// register the same command.
    #[instrument(skip_all)]
    pub fn load<I, S>(&self, names: I) -> DiscordResult<CommandRegistry>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut registry = CommandRegistry::new();
        for name in names {
            let name = name.as_ref();
            let factory = self.catalog.get(name).ok_or_else(|| {
                DiscordError::new(DiscordErrorKind::UnknownExtension(name.to_string()))
            })?;

            for command in factory() {
                registry.register(command)?;
            }
            info!(extension = name, "Loaded extension");
        }
        Ok(registry)
    }
}
