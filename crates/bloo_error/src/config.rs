//! Configuration and startup error types.

/// Startup configuration error with source location.
///
/// Raised for anything that must stop the process before it connects to the
/// gateway: unreadable config files, a missing guild id, a missing token or an
/// unknown extension name.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", message, line, file)]
pub struct ConfigError {
    /// Error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use bloo_error::ConfigError;
    ///
    /// let err = ConfigError::new("Unknown extension 'cogs.nope'");
    /// assert!(err.message.contains("Unknown extension"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }

    /// Error for a required setting that was not supplied.
    #[track_caller]
    pub fn missing(setting: &str) -> Self {
        Self::new(format!("Missing required setting: {}", setting))
    }
}
