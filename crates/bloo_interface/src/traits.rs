//! Traits for the collaborators the interaction gate calls into.

use async_trait::async_trait;
use bloo_core::{
    FilterVerdict, GuildId, Interaction, Invoker, PermissionTier, UserId, UserModerationRecord,
};
use bloo_error::BlooResult;

/// Resolves the permission tier a user holds in a guild.
///
/// Implementations must be side-effect free. Callers treat an error as
/// "tier not met".
#[async_trait]
pub trait AuthorityResolver: Send + Sync {
    /// Resolve the invoker's tier in `guild`.
    async fn resolve_tier(&self, guild: GuildId, invoker: &Invoker) -> BlooResult<PermissionTier>;

    /// Whether the invoker holds at least `required` in `guild`.
    async fn has_tier(
        &self,
        guild: GuildId,
        invoker: &Invoker,
        required: PermissionTier,
    ) -> BlooResult<bool> {
        Ok(self.resolve_tier(guild, invoker).await?.meets(required))
    }
}

/// Persistent per-user moderation records.
///
/// Readers always receive a complete snapshot of one record, never a record
/// torn by a concurrent write.
#[async_trait]
pub trait ModerationStore: Send + Sync {
    /// Fetch the record for `user`, creating an empty one if none exists.
    ///
    /// Creation is idempotent: repeated calls for an unknown user yield the
    /// same empty record.
    async fn get_record(&self, user: UserId) -> BlooResult<UserModerationRecord>;

    /// Set or clear a command ban for `user`.
    async fn set_command_ban(&self, user: UserId, command: &str, banned: bool) -> BlooResult<()>;
}

/// Matches free text against prohibited-term rules.
///
/// Scans are stateless and safe to run concurrently. Rules may be scoped by
/// the invoker's tier, which is why the invoker and guild are supplied.
#[async_trait]
pub trait FilterEngine: Send + Sync {
    /// Scan `text` on behalf of `invoker`.
    async fn scan(&self, text: &str, guild: GuildId, invoker: &Invoker) -> FilterVerdict;
}

/// Runs command handlers.
///
/// Handler failures belong to the implementation; nothing is reported back to
/// the gate once an interaction has been handed over.
#[async_trait]
pub trait CommandDispatcher: Send + Sync {
    /// Hand the interaction to its command handler.
    async fn dispatch(&self, interaction: Interaction);
}

/// Delivers user-visible error messages for one interaction.
#[async_trait]
pub trait ResponseChannel: Send + Sync {
    /// Send a single error message to the invoker. Never retried.
    async fn send_error(&self, message: &str);
}
