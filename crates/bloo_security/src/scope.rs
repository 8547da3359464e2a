//! Guild scope check.

use bloo_core::{GuildId, Interaction};
use tracing::{debug, instrument};

/// Admits only interactions from the single guild the bot moderates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopeFilter {
    guild_id: GuildId,
}

impl ScopeFilter {
    /// Create a scope filter for `guild_id`.
    pub fn new(guild_id: GuildId) -> Self {
        Self { guild_id }
    }

    /// The configured guild.
    pub fn guild_id(&self) -> GuildId {
        self.guild_id
    }

    /// Returns the guild if the interaction belongs to it.
    ///
    /// Interactions from other guilds and direct messages yield `None` and
    /// must be ignored without any reply.
    #[instrument(skip(self, interaction), fields(guild_id = ?interaction.guild_id()))]
    pub fn admit(&self, interaction: &Interaction) -> Option<GuildId> {
        match *interaction.guild_id() {
            Some(guild) if guild == self.guild_id => Some(guild),
            _ => {
                debug!(configured = %self.guild_id, "Interaction outside configured guild");
                None
            }
        }
    }
}
