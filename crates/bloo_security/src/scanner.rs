//! Content scanning of command arguments.

use crate::StageOutcome;
use bloo_core::{CommandOption, GuildId, Interaction, RejectionOutcome};
use bloo_interface::FilterEngine;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Joins every argument value and submits the result to the filter engine.
#[derive(Clone)]
pub struct ArgumentContentScanner {
    engine: Arc<dyn FilterEngine>,
}

impl ArgumentContentScanner {
    /// Create a scanner backed by `engine`.
    pub fn new(engine: Arc<dyn FilterEngine>) -> Self {
        Self { engine }
    }

    /// Build the text submitted to the filter engine.
    ///
    /// Values are joined with a single space in argument order. Absent and
    /// non-string values contribute an empty string, so their separators are
    /// still present.
    ///
    /// # Examples
    ///
    /// ```
    /// use bloo_core::{CommandOption, OptionValue};
    /// use bloo_security::ArgumentContentScanner;
    ///
    /// let options = vec![
    ///     CommandOption::text("a", "hi"),
    ///     CommandOption::new("b", OptionValue::Integer(5)),
    ///     CommandOption::text("c", "there"),
    /// ];
    /// assert_eq!(ArgumentContentScanner::scan_text(&options), "hi  there");
    /// ```
    pub fn scan_text(options: &[CommandOption]) -> String {
        options
            .iter()
            .map(CommandOption::scan_text)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Scan the interaction's arguments.
    ///
    /// Argument-less interactions are not submitted at all. Triggered terms are
    /// logged but never exposed in the rejection.
    #[instrument(
        skip(self, interaction),
        fields(command = %interaction.command_name(), option_count = interaction.options().len())
    )]
    pub async fn check(&self, guild: GuildId, interaction: &Interaction) -> StageOutcome {
        if !interaction.has_options() {
            debug!("No arguments to scan");
            return StageOutcome::Continue;
        }

        let text = Self::scan_text(interaction.options());
        let verdict = self.engine.scan(&text, guild, interaction.invoker()).await;

        if verdict.is_clean() {
            debug!("Arguments passed content filter");
            return StageOutcome::Continue;
        }

        debug!(triggered = ?verdict.triggered(), "Arguments triggered content filter");
        StageOutcome::Reject(RejectionOutcome::filtered_content())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_values_keep_their_separator() {
        let options = vec![
            CommandOption::text("a", "hi"),
            CommandOption::empty("b"),
            CommandOption::empty("c"),
            CommandOption::text("d", "x"),
        ];
        assert_eq!(ArgumentContentScanner::scan_text(&options), "hi   x");
    }

    #[test]
    fn single_value_has_no_separator() {
        let options = vec![CommandOption::text("a", "badword")];
        assert_eq!(ArgumentContentScanner::scan_text(&options), "badword");
    }
}
