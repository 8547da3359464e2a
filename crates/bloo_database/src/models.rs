//! Diesel row types for moderation tables.

use crate::schema::{command_bans, moderation_users};
use diesel::prelude::*;

/// A stored command ban row.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable)]
#[diesel(table_name = command_bans)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CommandBanRow {
    /// Discord user id
    pub user_id: i64,
    /// Exact command name
    pub command_name: String,
    /// Whether the command is banned
    pub banned: bool,
}

/// Insertable command ban row.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = command_bans)]
pub struct NewCommandBan<'a> {
    /// Discord user id
    pub user_id: i64,
    /// Exact command name
    pub command_name: &'a str,
    /// Whether the command is banned
    pub banned: bool,
}

/// Insertable moderation user row.
#[derive(Debug, Clone, Copy, Insertable)]
#[diesel(table_name = moderation_users)]
pub struct NewModerationUser {
    /// Discord user id
    pub user_id: i64,
}
