//! Permission resolution error types.

/// Reasons a permission tier could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum PermissionErrorKind {
    /// The invoking user has no member data for the guild.
    #[display("User {} is not a member of guild {}", user_id, guild_id)]
    UnknownMember {
        /// Guild the lookup was made against
        guild_id: u64,
        /// User that could not be found
        user_id: u64,
    },
}

/// Permission error with source location tracking.
///
/// # Examples
///
/// ```
/// use bloo_error::{PermissionError, PermissionErrorKind};
///
/// let err = PermissionError::new(PermissionErrorKind::UnknownMember {
///     guild_id: 1,
///     user_id: 2,
/// });
/// assert!(format!("{}", err).contains("not a member"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Permission Error: {} at line {} in {}", kind, line, file)]
pub struct PermissionError {
    /// The kind of error that occurred
    pub kind: PermissionErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl PermissionError {
    /// Create a new PermissionError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: PermissionErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
