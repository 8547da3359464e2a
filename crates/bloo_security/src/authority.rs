//! Elevated-permission bypass.

use bloo_core::{GuildId, Invoker, PermissionTier};
use bloo_interface::AuthorityResolver;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Tier at or above which every remaining check is skipped.
pub const ELEVATED_TIER: PermissionTier = PermissionTier::ADMINISTRATOR;

/// Decides whether the invoker is trusted enough to bypass bans and filtering.
#[derive(Clone)]
pub struct AuthorityGate {
    resolver: Arc<dyn AuthorityResolver>,
}

impl AuthorityGate {
    /// Create an authority gate backed by `resolver`.
    pub fn new(resolver: Arc<dyn AuthorityResolver>) -> Self {
        Self { resolver }
    }

    /// Whether the invoker holds [`ELEVATED_TIER`] in `guild`.
    ///
    /// Resolution failures deny the bypass.
    #[instrument(skip(self, invoker), fields(guild_id = %guild, user_id = %invoker.user_id()))]
    pub async fn is_elevated(&self, guild: GuildId, invoker: &Invoker) -> bool {
        match self.resolver.has_tier(guild, invoker, ELEVATED_TIER).await {
            Ok(elevated) => {
                debug!(elevated, "Resolved authority");
                elevated
            }
            Err(e) => {
                warn!(error = %e, "Tier resolution failed, denying bypass");
                false
            }
        }
    }
}
