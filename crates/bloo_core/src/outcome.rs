//! Filter verdicts and rejection outcomes.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Result of scanning text against filter rules.
///
/// Produced fresh for every scan. An empty set of triggered terms means the
/// text is clean.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterVerdict {
    triggered: BTreeSet<String>,
}

impl FilterVerdict {
    /// A verdict with no triggered terms.
    pub fn clean() -> Self {
        Self::default()
    }

    /// Whether no terms were triggered.
    pub fn is_clean(&self) -> bool {
        self.triggered.is_empty()
    }

    /// The triggered terms, sorted.
    pub fn triggered(&self) -> &BTreeSet<String> {
        &self.triggered
    }

    /// Record a triggered term.
    pub fn insert(&mut self, term: impl Into<String>) {
        self.triggered.insert(term.into());
    }
}

impl<S: Into<String>> FromIterator<S> for FilterVerdict {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            triggered: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// A terminal, user-visible refusal to run a command.
///
/// # Examples
///
/// ```
/// use bloo_core::RejectionOutcome;
///
/// assert_eq!(
///     RejectionOutcome::command_banned().reason(),
///     "You are not allowed to use that command!"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("{}", reason)]
pub struct RejectionOutcome {
    reason: String,
}

impl RejectionOutcome {
    /// Message sent when the invoker is banned from the command.
    pub const COMMAND_BANNED: &'static str = "You are not allowed to use that command!";
    /// Message sent when an argument contains a filtered word.
    pub const FILTERED_CONTENT: &'static str =
        "Your interaction contained a filtered word. Aborting!";

    /// A rejection with a custom reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// Rejection for a command-banned invoker.
    pub fn command_banned() -> Self {
        Self::new(Self::COMMAND_BANNED)
    }

    /// Rejection for filtered argument content.
    pub fn filtered_content() -> Self {
        Self::new(Self::FILTERED_CONTENT)
    }

    /// The user-visible reason.
    pub fn reason(&self) -> &str {
        &self.reason
    }
}
