//! In-memory moderation store.

use async_trait::async_trait;
use bloo_core::{UserId, UserModerationRecord};
use bloo_error::BlooResult;
use bloo_interface::ModerationStore;
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::{debug, instrument};

/// Moderation store kept in process memory.
///
/// Readers receive cloned snapshots taken under the lock, so a concurrent
/// write is observed either entirely or not at all.
#[derive(Debug, Default)]
pub struct MemoryModerationStore {
    records: RwLock<HashMap<UserId, UserModerationRecord>>,
}

impl MemoryModerationStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Whether no records are stored.
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

#[async_trait]
impl ModerationStore for MemoryModerationStore {
    #[instrument(skip(self), fields(user_id = %user))]
    async fn get_record(&self, user: UserId) -> BlooResult<UserModerationRecord> {
        if let Some(record) = self.records.read().get(&user) {
            return Ok(record.clone());
        }

        debug!("Creating empty moderation record");
        let mut records = self.records.write();
        Ok(records
            .entry(user)
            .or_insert_with(|| UserModerationRecord::new(user))
            .clone())
    }

    #[instrument(skip(self), fields(user_id = %user))]
    async fn set_command_ban(&self, user: UserId, command: &str, banned: bool) -> BlooResult<()> {
        debug!("Updating command ban");
        self.records
            .write()
            .entry(user)
            .or_insert_with(|| UserModerationRecord::new(user))
            .set_command_ban(command, banned);
        Ok(())
    }
}
