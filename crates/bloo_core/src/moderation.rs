//! Persisted per-user moderation state.

use crate::UserId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Moderation state stored for a single user.
///
/// The gate only ever reads this record. Moderation commands own writes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct UserModerationRecord {
    user_id: UserId,
    /// Command name to ban flag. Keys are exact command names.
    #[serde(default)]
    command_bans: HashMap<String, bool>,
}

impl UserModerationRecord {
    /// An empty record for `user_id`.
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            command_bans: HashMap::new(),
        }
    }

    /// Whether `command` is banned for this user.
    ///
    /// An absent entry and an explicit `false` both mean "not banned".
    pub fn is_command_banned(&self, command: &str) -> bool {
        matches!(self.command_bans.get(command), Some(true))
    }

    /// Set or clear the ban flag for `command`.
    pub fn set_command_ban(&mut self, command: impl Into<String>, banned: bool) {
        self.command_bans.insert(command.into(), banned);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bans_are_keyed_by_exact_name() {
        let mut record = UserModerationRecord::new(UserId::new(7));
        record.set_command_ban("kick", true);
        record.set_command_ban("ban", false);

        assert!(record.is_command_banned("kick"));
        assert!(!record.is_command_banned("ban"));
        assert!(!record.is_command_banned("Kick"));
        assert!(!record.is_command_banned("kickall"));
    }
}
