//! Top-level error wrapper types.

#[cfg(feature = "database")]
use crate::DatabaseError;
#[cfg(feature = "discord")]
use crate::DiscordError;
use crate::{BuilderError, ConfigError, JsonError, PermissionError};

/// Every error condition a Bloo crate can surface.
///
/// # Examples
///
/// ```
/// use bloo_error::{BlooError, ConfigError};
///
/// let err: BlooError = ConfigError::new("BLOO_TOKEN is not set").into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum BlooErrorKind {
    /// Configuration or startup error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Raw payload could not be parsed
    #[from(JsonError)]
    Json(JsonError),
    /// Builder error
    #[from(BuilderError)]
    Builder(BuilderError),
    /// Permission tier resolution failed
    #[from(PermissionError)]
    Permission(PermissionError),
    /// Database error
    #[cfg(feature = "database")]
    #[from(DatabaseError)]
    Database(DatabaseError),
    /// Discord client or command error
    #[cfg(feature = "discord")]
    #[from(DiscordError)]
    Discord(DiscordError),
}

/// Bloo error with kind discrimination.
///
/// # Examples
///
/// ```
/// use bloo_error::{BlooErrorKind, BlooResult, ConfigError};
///
/// fn might_fail() -> BlooResult<()> {
///     Err(ConfigError::new("guild_id is required"))?
/// }
///
/// let err = might_fail().unwrap_err();
/// assert!(matches!(err.kind(), BlooErrorKind::Config(_)));
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Bloo Error: {}", _0)]
pub struct BlooError(Box<BlooErrorKind>);

impl BlooError {
    /// Create a new error from a kind.
    pub fn new(kind: BlooErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &BlooErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to BlooErrorKind
impl<T> From<T> for BlooError
where
    T: Into<BlooErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Bloo operations.
pub type BlooResult<T> = std::result::Result<T, BlooError>;
