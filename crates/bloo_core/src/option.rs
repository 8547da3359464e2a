//! Command option values.

use crate::{RoleId, UserId};
use serde::{Deserialize, Serialize};

/// Typed value of a single command option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum OptionValue {
    /// Free text
    String(String),
    /// Whole number
    Integer(i64),
    /// Floating point number
    Number(f64),
    /// True or false
    Boolean(bool),
    /// A user mention
    User(UserId),
    /// A channel reference
    Channel(u64),
    /// A role mention
    Role(RoleId),
    /// A user or role mention
    Mentionable(u64),
    /// An uploaded attachment
    Attachment(u64),
    /// A subcommand or subcommand group with its own options
    SubCommand(Vec<CommandOption>),
}

impl OptionValue {
    /// Text contributed to a content scan.
    ///
    /// Only free text can carry filtered words; every other kind contributes
    /// an empty string.
    pub fn scan_text(&self) -> &str {
        match self {
            OptionValue::String(text) => text,
            _ => "",
        }
    }
}

/// A named option supplied with a command invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct CommandOption {
    name: String,
    #[serde(default)]
    value: Option<OptionValue>,
}

impl CommandOption {
    /// Create an option with a value.
    pub fn new(name: impl Into<String>, value: OptionValue) -> Self {
        Self {
            name: name.into(),
            value: Some(value),
        }
    }

    /// Create an option whose value is absent.
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }

    /// Shorthand for a free text option.
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, OptionValue::String(value.into()))
    }

    /// Text contributed to a content scan; empty when the value is absent.
    pub fn scan_text(&self) -> &str {
        self.value.as_ref().map(OptionValue::scan_text).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_strings_contribute_text() {
        assert_eq!(CommandOption::text("reason", "spam").scan_text(), "spam");
        assert_eq!(
            CommandOption::new("count", OptionValue::Integer(5)).scan_text(),
            ""
        );
        assert_eq!(
            CommandOption::new("user", OptionValue::User(UserId::new(1))).scan_text(),
            ""
        );
        assert_eq!(CommandOption::empty("missing").scan_text(), "");
    }
}
