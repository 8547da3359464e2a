//! Security error types.

/// Specific security error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum SecurityErrorKind {
    /// A filter pattern failed to compile
    #[display("Invalid filter pattern '{}': {}", pattern, reason)]
    InvalidPattern {
        /// Pattern source text
        pattern: String,
        /// Compiler error
        reason: String,
    },

    /// Configuration error
    #[display("Configuration error: {}", _0)]
    Configuration(String),
}

/// Security error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Security Error: {} at line {} in {}", kind, line, file)]
pub struct SecurityError {
    /// The specific error kind
    pub kind: SecurityErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// File where error occurred
    pub file: &'static str,
}

impl SecurityError {
    /// Create a new security error with location tracking.
    #[track_caller]
    pub fn new(kind: SecurityErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &SecurityErrorKind {
        &self.kind
    }
}

/// Result type for security operations.
pub type SecurityResult<T> = Result<T, SecurityError>;
