//! Role-based permission tiers.

use async_trait::async_trait;
use bloo_core::{GuildId, Invoker, PermissionTier, RoleId, UserId};
use bloo_error::{BlooResult, PermissionError, PermissionErrorKind};
use bloo_interface::AuthorityResolver;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A role that grants a permission tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierRole {
    /// Tier granted by holding the role
    pub tier: PermissionTier,
    /// The granting role
    pub role_id: RoleId,
}

/// Permission configuration for the moderated guild.
///
/// ```toml
/// [permissions]
/// owner_id = 109705860275539968
///
/// [[permissions.roles]]
/// tier = 5
/// role_id = 412742574384996352
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PermissionConfig {
    /// Bot owner, always resolved to the highest tier
    #[serde(default)]
    pub owner_id: Option<UserId>,

    /// Guild owner
    #[serde(default)]
    pub guild_owner_id: Option<UserId>,

    /// Roles granting tiers
    #[serde(default)]
    pub roles: Vec<TierRole>,
}

/// Resolves tiers from owner ids and the roles an invoker holds.
#[derive(Debug, Clone)]
pub struct RoleTierResolver {
    config: PermissionConfig,
}

impl RoleTierResolver {
    /// Create a resolver with the given configuration.
    pub fn new(config: PermissionConfig) -> Self {
        Self { config }
    }

    /// Get the permission configuration.
    pub fn config(&self) -> &PermissionConfig {
        &self.config
    }
}

#[async_trait]
impl AuthorityResolver for RoleTierResolver {
    #[instrument(skip(self, invoker), fields(guild_id = %guild, user_id = %invoker.user_id()))]
    async fn resolve_tier(&self, guild: GuildId, invoker: &Invoker) -> BlooResult<PermissionTier> {
        let user = *invoker.user_id();

        if self.config.owner_id == Some(user) {
            debug!("Invoker is the bot owner");
            return Ok(PermissionTier::BOT_OWNER);
        }
        if self.config.guild_owner_id == Some(user) {
            debug!("Invoker is the guild owner");
            return Ok(PermissionTier::GUILD_OWNER);
        }

        if invoker.roles().is_none() {
            return Err(PermissionError::new(PermissionErrorKind::UnknownMember {
                guild_id: guild.get(),
                user_id: user.get(),
            })
            .into());
        }

        let tier = self
            .config
            .roles
            .iter()
            .filter(|granted| invoker.has_role(granted.role_id))
            .map(|granted| granted.tier)
            .max()
            .unwrap_or(PermissionTier::EVERYONE);

        debug!(%tier, "Resolved tier from roles");
        Ok(tier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MOD_ROLE: RoleId = RoleId::new(500);
    const ADMIN_ROLE: RoleId = RoleId::new(600);
    const GUILD: GuildId = GuildId::new(1);

    fn create_test_resolver() -> RoleTierResolver {
        RoleTierResolver::new(PermissionConfig {
            owner_id: Some(UserId::new(9)),
            guild_owner_id: Some(UserId::new(7)),
            roles: vec![
                TierRole {
                    tier: PermissionTier::MODERATOR,
                    role_id: MOD_ROLE,
                },
                TierRole {
                    tier: PermissionTier::ADMINISTRATOR,
                    role_id: ADMIN_ROLE,
                },
            ],
        })
    }

    #[tokio::test]
    async fn test_highest_held_role_wins() {
        let resolver = create_test_resolver();
        let invoker = Invoker::member(UserId::new(100), vec![MOD_ROLE, ADMIN_ROLE]);
        let tier = resolver.resolve_tier(GUILD, &invoker).await.unwrap();
        assert_eq!(tier, PermissionTier::ADMINISTRATOR);
    }

    #[tokio::test]
    async fn test_no_roles_is_everyone() {
        let resolver = create_test_resolver();
        let invoker = Invoker::member(UserId::new(100), vec![RoleId::new(1)]);
        let tier = resolver.resolve_tier(GUILD, &invoker).await.unwrap();
        assert_eq!(tier, PermissionTier::EVERYONE);
    }

    #[tokio::test]
    async fn test_owners() {
        let resolver = create_test_resolver();
        let bot_owner = Invoker::user(UserId::new(9));
        let guild_owner = Invoker::member(UserId::new(7), vec![]);
        assert_eq!(
            resolver.resolve_tier(GUILD, &bot_owner).await.unwrap(),
            PermissionTier::BOT_OWNER
        );
        assert_eq!(
            resolver.resolve_tier(GUILD, &guild_owner).await.unwrap(),
            PermissionTier::GUILD_OWNER
        );
    }

    #[tokio::test]
    async fn test_missing_member_data_is_an_error() {
        let resolver = create_test_resolver();
        let invoker = Invoker::user(UserId::new(100));
        assert!(resolver.resolve_tier(GUILD, &invoker).await.is_err());
        assert!(
            resolver
                .has_tier(GUILD, &invoker, PermissionTier::EVERYONE)
                .await
                .is_err()
        );
    }

    #[test]
    fn test_config_from_toml() {
        let config: PermissionConfig = toml::from_str(
            r#"
            owner_id = 9
            [[roles]]
            tier = 6
            role_id = 600
            "#,
        )
        .unwrap();
        assert_eq!(config.owner_id, Some(UserId::new(9)));
        assert_eq!(config.roles[0].tier, PermissionTier::ADMINISTRATOR);
    }
}
