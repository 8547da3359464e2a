//! Tests for extension loading and the command registry.

#![cfg(feature = "discord")]

use async_trait::async_trait;
use bloo_social::{
    BUILTIN_EXTENSIONS, CommandRegistry, DiscordErrorKind, DiscordResult, ExtensionLoader,
    HelpCommand, PingCommand, SlashCommand,
};
use serenity::all::{CommandInteraction, Context};
use std::sync::Arc;

struct EchoPing;

#[async_trait]
impl SlashCommand for EchoPing {
    fn name(&self) -> &str {
        "ping"
    }

    fn description(&self) -> &str {
        "Another ping"
    }

    async fn run(
        &self,
        _ctx: &Context,
        _command: &CommandInteraction,
        _registry: &CommandRegistry,
    ) -> DiscordResult<()> {
        Ok(())
    }
}

fn echo_extension() -> Vec<Arc<dyn SlashCommand>> {
    let echo: Arc<dyn SlashCommand> = Arc::new(EchoPing);
    vec![echo]
}

#[test]
fn test_builtins_load_in_order() {
    let registry = ExtensionLoader::with_builtins()
        .load(BUILTIN_EXTENSIONS)
        .unwrap();

    assert_eq!(registry.names(), vec!["ping", "help"]);
    assert_eq!(registry.create_commands().len(), 2);
}

#[test]
fn test_unknown_extension_fails() {
    let err = ExtensionLoader::with_builtins()
        .load(["commands.info.ping", "commands.fun.dance"])
        .unwrap_err();

    assert_eq!(
        err.kind(),
        &DiscordErrorKind::UnknownExtension("commands.fun.dance".to_string())
    );
}

#[test]
fn test_duplicate_command_fails() {
    let mut loader = ExtensionLoader::with_builtins();
    loader.add("commands.extra.ping", echo_extension);

    let err = loader
        .load(["commands.info.ping", "commands.extra.ping"])
        .unwrap_err();

    assert_eq!(err.kind(), &DiscordErrorKind::DuplicateCommand("ping".to_string()));
}

#[test]
fn test_empty_extension_list_yields_empty_registry() {
    let registry = ExtensionLoader::with_builtins()
        .load(Vec::<String>::new())
        .unwrap();

    assert!(registry.is_empty());
}

#[test]
fn test_help_lists_registered_commands() {
    let mut registry = CommandRegistry::new();
    registry.register(Arc::new(PingCommand)).unwrap();
    registry.register(Arc::new(HelpCommand)).unwrap();

    let listing = HelpCommand::listing(&registry);
    assert!(listing.contains("`/ping`"));
    assert!(listing.contains("`/help`"));
    assert_eq!(listing.lines().count(), 2);
}
