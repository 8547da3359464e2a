//! PostgreSQL moderation store.

use crate::models::{CommandBanRow, NewCommandBan, NewModerationUser};
use crate::schema::{command_bans, moderation_users};
use crate::{DatabaseResult, PgPool};
use async_trait::async_trait;
use bloo_core::{UserId, UserModerationRecord};
use bloo_error::{BlooResult, DatabaseError, DatabaseErrorKind};
use bloo_interface::ModerationStore;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use tracing::{debug, instrument};

/// Moderation store backed by PostgreSQL.
///
/// Diesel is synchronous, so every call runs on the blocking thread pool.
#[derive(Clone)]
pub struct PgModerationStore {
    pool: PgPool,
}

impl std::fmt::Debug for PgModerationStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PgModerationStore")
            .field("state", &self.pool.state())
            .finish()
    }
}

impl PgModerationStore {
    /// Create a store over an existing pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn to_db_id(user: UserId) -> DatabaseResult<i64> {
    i64::try_from(user.get()).map_err(|e| {
        DatabaseError::new(DatabaseErrorKind::Query(format!(
            "user id {user} out of range: {e}"
        )))
    })
}

fn load_record(conn: &mut PgConnection, user: UserId) -> DatabaseResult<UserModerationRecord> {
    let id = to_db_id(user)?;

    conn.transaction::<_, DatabaseError, _>(|conn| {
        diesel::insert_into(moderation_users::table)
            .values(NewModerationUser { user_id: id })
            .on_conflict_do_nothing()
            .execute(conn)?;

        let rows = command_bans::table
            .filter(command_bans::user_id.eq(id))
            .select(CommandBanRow::as_select())
            .load(conn)?;

        let mut record = UserModerationRecord::new(user);
        for row in rows {
            record.set_command_ban(row.command_name, row.banned);
        }
        Ok(record)
    })
}

fn store_ban(
    conn: &mut PgConnection,
    user: UserId,
    command: &str,
    banned: bool,
) -> DatabaseResult<()> {
    let id = to_db_id(user)?;

    conn.transaction::<_, DatabaseError, _>(|conn| {
        diesel::insert_into(moderation_users::table)
            .values(NewModerationUser { user_id: id })
            .on_conflict_do_nothing()
            .execute(conn)?;

        let row = NewCommandBan {
            user_id: id,
            command_name: command,
            banned,
        };
        diesel::insert_into(command_bans::table)
            .values(&row)
            .on_conflict((command_bans::user_id, command_bans::command_name))
            .do_update()
            .set(command_bans::banned.eq(banned))
            .execute(conn)?;
        Ok(())
    })
}

fn task_error(e: tokio::task::JoinError) -> DatabaseError {
    DatabaseError::new(DatabaseErrorKind::Task(e.to_string()))
}

#[async_trait]
impl ModerationStore for PgModerationStore {
    #[instrument(skip(self), fields(user_id = %user))]
    async fn get_record(&self, user: UserId) -> BlooResult<UserModerationRecord> {
        let pool = self.pool.clone();
        let record = tokio::task::spawn_blocking(move || {
            let mut conn = pool.get()?;
            load_record(&mut conn, user)
        })
        .await
        .map_err(task_error)??;

        debug!(bans = record.command_bans().len(), "Loaded moderation record");
        Ok(record)
    }

    #[instrument(skip(self), fields(user_id = %user))]
    async fn set_command_ban(&self, user: UserId, command: &str, banned: bool) -> BlooResult<()> {
        let pool = self.pool.clone();
        let command = command.to_string();
        tokio::task::spawn_blocking(move || {
            let mut conn = pool.get()?;
            store_ban(&mut conn, user, &command, banned)
        })
        .await
        .map_err(task_error)??;

        debug!("Stored command ban");
        Ok(())
    }
}
