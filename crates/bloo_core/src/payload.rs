//! Raw Discord interaction payloads.
//!
//! These models mirror the JSON the gateway delivers for an application
//! command. They are converted into [`Interaction`] exactly once; nothing past
//! the boundary looks at raw payload shapes.

use crate::{CommandOption, GuildId, Interaction, Invoker, OptionValue, RoleId, UserId};
use bloo_error::{BlooError, BlooResult, JsonError};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use tracing::{debug, instrument};

const SUB_COMMAND: u8 = 1;
const SUB_COMMAND_GROUP: u8 = 2;
const STRING: u8 = 3;
const INTEGER: u8 = 4;
const BOOLEAN: u8 = 5;
const USER: u8 = 6;
const CHANNEL: u8 = 7;
const ROLE: u8 = 8;
const MENTIONABLE: u8 = 9;
const NUMBER: u8 = 10;
const ATTACHMENT: u8 = 11;

/// JSON model for the user object inside an interaction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, derive_getters::Getters)]
pub struct UserPayload {
    /// Snowflake as a string
    id: String,
}

/// JSON model for the guild member that invoked a command.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, derive_getters::Getters)]
pub struct MemberPayload {
    /// The member's user object
    user: UserPayload,
    /// Role snowflakes held by the member
    #[serde(default)]
    roles: Vec<String>,
}

/// JSON model for one application command option.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, derive_getters::Getters)]
pub struct OptionPayload {
    /// Option name
    name: String,
    /// Discord option type number
    #[serde(rename = "type")]
    kind: u8,
    /// Option value (absent for subcommands)
    #[serde(default)]
    value: Option<JsonValue>,
    /// Nested options of a subcommand or group
    #[serde(default)]
    options: Vec<OptionPayload>,
}

/// JSON model for the `data` object of an application command.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, derive_getters::Getters)]
pub struct CommandDataPayload {
    /// Command name
    name: String,
    /// Supplied options
    #[serde(default)]
    options: Vec<OptionPayload>,
}

/// JSON model for an application command interaction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, derive_getters::Getters)]
pub struct InteractionPayload {
    /// Guild snowflake (absent in direct messages)
    #[serde(default)]
    guild_id: Option<String>,
    /// Invoking member (guild interactions)
    #[serde(default)]
    member: Option<MemberPayload>,
    /// Invoking user (direct message interactions)
    #[serde(default)]
    user: Option<UserPayload>,
    /// Command data
    data: CommandDataPayload,
}

#[track_caller]
fn parse_snowflake<T: std::str::FromStr>(field: &str, raw: &str) -> Result<T, JsonError> {
    raw.parse()
        .map_err(|_| JsonError::new(format!("{} is not a valid snowflake: '{}'", field, raw)))
}

fn snowflake_value(field: &str, value: &JsonValue) -> Result<u64, JsonError> {
    match value {
        JsonValue::String(raw) => parse_snowflake(field, raw),
        JsonValue::Number(n) => n
            .as_u64()
            .ok_or_else(|| JsonError::new(format!("{} is not a valid snowflake: {}", field, n))),
        other => Err(JsonError::new(format!(
            "{} must be a snowflake, got {}",
            field, other
        ))),
    }
}

impl TryFrom<&OptionPayload> for CommandOption {
    type Error = JsonError;

    fn try_from(payload: &OptionPayload) -> Result<Self, Self::Error> {
        let name = payload.name.as_str();

        if matches!(payload.kind, SUB_COMMAND | SUB_COMMAND_GROUP) {
            let nested = payload
                .options
                .iter()
                .map(CommandOption::try_from)
                .collect::<Result<Vec<_>, _>>()?;
            return Ok(CommandOption::new(name, OptionValue::SubCommand(nested)));
        }

        let Some(value) = payload.value.as_ref().filter(|v| !v.is_null()) else {
            return Ok(CommandOption::empty(name));
        };

        let mismatch = || {
            JsonError::new(format!(
                "option '{}' of type {} has unexpected value {}",
                name, payload.kind, value
            ))
        };

        let value = match payload.kind {
            STRING => OptionValue::String(value.as_str().ok_or_else(mismatch)?.to_string()),
            INTEGER => OptionValue::Integer(value.as_i64().ok_or_else(mismatch)?),
            BOOLEAN => OptionValue::Boolean(value.as_bool().ok_or_else(mismatch)?),
            NUMBER => OptionValue::Number(value.as_f64().ok_or_else(mismatch)?),
            USER => OptionValue::User(UserId::new(snowflake_value(name, value)?)),
            CHANNEL => OptionValue::Channel(snowflake_value(name, value)?),
            ROLE => OptionValue::Role(RoleId::new(snowflake_value(name, value)?)),
            MENTIONABLE => OptionValue::Mentionable(snowflake_value(name, value)?),
            ATTACHMENT => OptionValue::Attachment(snowflake_value(name, value)?),
            other => {
                return Err(JsonError::new(format!(
                    "option '{}' has unknown type {}",
                    name, other
                )));
            }
        };

        Ok(CommandOption::new(name, value))
    }
}

impl TryFrom<InteractionPayload> for Interaction {
    type Error = BlooError;

    fn try_from(payload: InteractionPayload) -> Result<Self, Self::Error> {
        let guild_id = payload
            .guild_id
            .as_deref()
            .map(|raw| parse_snowflake::<GuildId>("guild_id", raw))
            .transpose()?;

        let invoker = match (&payload.member, &payload.user) {
            (Some(member), _) => {
                let roles = member
                    .roles
                    .iter()
                    .map(|raw| parse_snowflake::<RoleId>("role", raw))
                    .collect::<Result<Vec<_>, _>>()?;
                Invoker::member(parse_snowflake("member.user.id", &member.user.id)?, roles)
            }
            (None, Some(user)) => Invoker::user(parse_snowflake("user.id", &user.id)?),
            (None, None) => {
                return Err(JsonError::new("interaction has neither member nor user").into());
            }
        };

        let options = payload
            .data
            .options
            .iter()
            .map(CommandOption::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Interaction::builder()
            .guild_id(guild_id)
            .invoker(invoker)
            .command_name(payload.data.name)
            .options(options)
            .build()?)
    }
}

impl Interaction {
    /// Parse a raw JSON interaction payload.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed, a snowflake does not parse,
    /// or an option value does not match its declared type.
    #[instrument(skip(json), fields(json_len = json.len()))]
    pub fn from_json(json: &str) -> BlooResult<Self> {
        let payload: InteractionPayload = serde_json::from_str(json)
            .map_err(|e| JsonError::new(format!("Invalid interaction payload: {}", e)))?;
        let interaction = Interaction::try_from(payload)?;
        debug!(
            command = %interaction.command_name(),
            option_count = interaction.options().len(),
            "Parsed interaction payload"
        );
        Ok(interaction)
    }
}
