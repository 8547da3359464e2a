//! Conversions from serenity interaction models into gate types.
//!
//! Serenity payloads are interpreted here, once, so the gate only ever sees
//! the strongly-typed [`Interaction`].

use super::{DiscordError, DiscordErrorKind, DiscordResult};
use bloo_core::{CommandOption, GuildId, Interaction, Invoker, OptionValue, RoleId, UserId};
use serenity::all::{CommandDataOption, CommandDataOptionValue, CommandInteraction};

/// Convert a serenity slash-command interaction into an [`Interaction`].
///
/// # Errors
///
/// Returns an error if the interaction cannot be assembled.
#[track_caller]
pub fn interaction_from_command(command: &CommandInteraction) -> DiscordResult<Interaction> {
    let user_id = UserId::new(command.user.id.get());
    let invoker = match &command.member {
        Some(member) => Invoker::member(
            user_id,
            member.roles.iter().map(|role| RoleId::new(role.get())).collect(),
        ),
        None => Invoker::user(user_id),
    };

    Interaction::builder()
        .guild_id(command.guild_id.map(|id| GuildId::new(id.get())))
        .invoker(invoker)
        .command_name(command.data.name.clone())
        .options(convert_options(&command.data.options))
        .build()
        .map_err(|e| DiscordError::new(DiscordErrorKind::InvalidInteraction(e.to_string())))
}

fn convert_options(options: &[CommandDataOption]) -> Vec<CommandOption> {
    options.iter().map(convert_option).collect()
}

fn convert_option(option: &CommandDataOption) -> CommandOption {
    let value = match &option.value {
        CommandDataOptionValue::String(text) => Some(OptionValue::String(text.clone())),
        CommandDataOptionValue::Autocomplete { value, .. } => {
            Some(OptionValue::String(value.clone()))
        }
        CommandDataOptionValue::Integer(n) => Some(OptionValue::Integer(*n)),
        CommandDataOptionValue::Number(n) => Some(OptionValue::Number(*n)),
        CommandDataOptionValue::Boolean(b) => Some(OptionValue::Boolean(*b)),
        CommandDataOptionValue::User(id) => Some(OptionValue::User(UserId::new(id.get()))),
        CommandDataOptionValue::Channel(id) => Some(OptionValue::Channel(id.get())),
        CommandDataOptionValue::Role(id) => Some(OptionValue::Role(RoleId::new(id.get()))),
        CommandDataOptionValue::Mentionable(id) => Some(OptionValue::Mentionable(id.get())),
        CommandDataOptionValue::Attachment(id) => Some(OptionValue::Attachment(id.get())),
        CommandDataOptionValue::SubCommand(nested)
        | CommandDataOptionValue::SubCommandGroup(nested) => {
            Some(OptionValue::SubCommand(convert_options(nested)))
        }
        _ => None,
    };

    match value {
        Some(value) => CommandOption::new(option.name.clone(), value),
        None => CommandOption::empty(option.name.clone()),
    }
}
