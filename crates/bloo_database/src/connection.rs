//! Database connection utilities.

use crate::DatabaseResult;
use bloo_error::{DatabaseError, DatabaseErrorKind};
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::{info, instrument};

/// Connection pool shared by the PostgreSQL store.
pub type PgPool = Pool<ConnectionManager<PgConnection>>;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Build a connection pool for `database_url`.
///
/// # Errors
///
/// Returns an error if the pool cannot open its initial connections.
#[instrument(skip(database_url))]
pub fn establish_pool(database_url: &str) -> DatabaseResult<PgPool> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    let pool = Pool::builder()
        .build(manager)
        .map_err(|e| DatabaseError::new(DatabaseErrorKind::Connection(e.to_string())))?;
    info!("Database pool established");
    Ok(pool)
}

/// Apply any pending embedded migrations.
#[instrument(skip(pool))]
pub fn run_migrations(pool: &PgPool) -> DatabaseResult<()> {
    let mut conn = pool.get()?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| DatabaseError::new(DatabaseErrorKind::Query(e.to_string())))?;
    info!(count = applied.len(), "Migrations applied");
    Ok(())
}
