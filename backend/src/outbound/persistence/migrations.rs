//! Embedded schema migrations, applied at startup.
//!
//! `diesel_migrations` only runs against a synchronous connection, so the
//! pending set is applied on a blocking thread with a short-lived dedicated
//! connection before the async pool is built.

use diesel::{Connection, PgConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

/// Migration set compiled into the binary from `backend/migrations`.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Errors raised while applying the embedded migrations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MigrationError {
    /// The dedicated migration connection could not be established.
    #[error("migration connection failed: {message}")]
    Connection { message: String },
    /// A migration failed to apply.
    #[error("migration failed: {message}")]
    Apply { message: String },
}

/// Apply all pending migrations against the given database.
///
/// # Errors
///
/// Returns [`MigrationError::Connection`] when the database is unreachable
/// and [`MigrationError::Apply`] when a migration itself fails.
pub async fn run_pending(database_url: &str) -> Result<(), MigrationError> {
    let database_url = database_url.to_owned();
    tokio::task::spawn_blocking(move || {
        let mut conn = PgConnection::establish(&database_url).map_err(|error| {
            MigrationError::Connection {
                message: error.to_string(),
            }
        })?;
        conn.run_pending_migrations(MIGRATIONS)
            .map(|_| ())
            .map_err(|error| MigrationError::Apply {
                message: error.to_string(),
            })
    })
    .await
    .map_err(|error| MigrationError::Apply {
        message: error.to_string(),
    })?
}
