//! Discord-specific error types.
//!
//! Covers client setup problems, interaction conversion and slash-command
//! registration errors.

/// Discord error variants.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum DiscordErrorKind {
    /// Connection to Discord gateway failed.
    #[display("Connection failed: {_0}")]
    ConnectionFailed(String),

    /// Bot token is missing or empty.
    #[display("Invalid or missing bot token")]
    InvalidToken,

    /// Interaction (slash command) response failed.
    #[display("Interaction failed: {_0}")]
    InteractionFailed(String),

    /// Interaction payload could not be converted.
    #[display("Invalid interaction: {_0}")]
    InvalidInteraction(String),

    /// Extension name is not in the catalog.
    #[display("Unknown extension: {_0}")]
    UnknownExtension(String),

    /// Two commands share a name.
    #[display("Duplicate command: {_0}")]
    DuplicateCommand(String),
}

/// Discord error with source location tracking.
///
/// # Examples
///
/// ```
/// use bloo_error::{DiscordError, DiscordErrorKind};
///
/// let err = DiscordError::new(DiscordErrorKind::InvalidToken);
/// assert_eq!(err.kind(), &DiscordErrorKind::InvalidToken);
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Discord Error: {} at line {} in {}", kind, line, file)]
pub struct DiscordError {
    kind: DiscordErrorKind,
    line: u32,
    file: &'static str,
}

impl DiscordError {
    /// Create a new DiscordError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: DiscordErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &DiscordErrorKind {
        &self.kind
    }

    /// Line where the error was created.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// File where the error was created.
    pub fn file(&self) -> &'static str {
        self.file
    }
}

/// Result type for Discord operations.
pub type DiscordResult<T> = Result<T, DiscordError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BlooError, BlooErrorKind, BlooResult};

    fn start_client(token: &str) -> BlooResult<()> {
        if token.trim().is_empty() {
            Err::<(), _>(DiscordError::new(DiscordErrorKind::InvalidToken))?;
        }
        Ok(())
    }

    #[test]
    fn test_discord_error_propagates_as_discord_kind() {
        let err = start_client("  ").unwrap_err();
        match err.kind() {
            BlooErrorKind::Discord(inner) => {
                assert_eq!(inner.kind(), &DiscordErrorKind::InvalidToken);
                assert!(inner.file().ends_with("discord.rs"));
            }
            other => panic!("expected Discord kind, got {other:?}"),
        }
        assert!(start_client("token").is_ok());
    }

    #[test]
    fn test_discord_error_display_is_not_config() {
        let err: BlooError =
            DiscordError::new(DiscordErrorKind::ConnectionFailed("gateway closed".into())).into();
        let text = err.to_string();
        assert!(text.contains("Discord Error"));
        assert!(text.contains("gateway closed"));
        assert!(!text.contains("Configuration Error"));
    }
}
