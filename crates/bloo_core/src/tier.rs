//! Permission tiers.

use serde::{Deserialize, Serialize};

/// Ordinal authority level of a user within a guild.
///
/// Higher values carry more authority. Tiers are computed per check by a
/// resolver and never persisted by the gate.
///
/// # Examples
///
/// ```
/// use bloo_core::PermissionTier;
///
/// assert!(PermissionTier::GUILD_OWNER.meets(PermissionTier::ADMINISTRATOR));
/// assert!(!PermissionTier::MODERATOR.meets(PermissionTier::ADMINISTRATOR));
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
#[display("tier {}", _0)]
pub struct PermissionTier(u8);

impl PermissionTier {
    /// Everyone in the guild.
    pub const EVERYONE: Self = Self(0);
    /// Member plus role.
    pub const MEMBER_PLUS: Self = Self(1);
    /// Member pro role.
    pub const MEMBER_PRO: Self = Self(2);
    /// Member edition role.
    pub const MEMBER_EDITION: Self = Self(3);
    /// Genius role.
    pub const GENIUS: Self = Self(4);
    /// Moderator role.
    pub const MODERATOR: Self = Self(5);
    /// Administrator role, the highest non-owner tier.
    pub const ADMINISTRATOR: Self = Self(6);
    /// Owner of the guild.
    pub const GUILD_OWNER: Self = Self(7);
    /// Owner of the bot.
    pub const BOT_OWNER: Self = Self(9);

    /// Wrap a raw tier level.
    pub const fn new(level: u8) -> Self {
        Self(level)
    }

    /// The raw tier level.
    pub const fn level(self) -> u8 {
        self.0
    }

    /// Whether this tier meets or exceeds `required`.
    pub fn meets(self, required: PermissionTier) -> bool {
        self >= required
    }
}
