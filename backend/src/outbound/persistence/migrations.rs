//! Embedded schema migrations applied at startup.

use diesel::Connection;
use diesel_async::AsyncPgConnection;
use diesel_async::async_connection_wrapper::AsyncConnectionWrapper;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;

/// Migrations compiled into the binary from `migrations/`.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Errors raised while applying migrations.
#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    /// A connection for the migration run could not be established.
    #[error("failed to connect for migrations: {0}")]
    Connection(String),
    /// A pending migration failed to apply.
    #[error("failed to apply pending migrations: {0}")]
    Apply(String),
    /// The blocking migration task was cancelled or panicked.
    #[error("migration task failed: {0}")]
    Task(String),
}

/// Apply all pending migrations against the given database.
///
/// Diesel's migration harness is synchronous, so the run happens on a
/// blocking thread over an [`AsyncConnectionWrapper`].
pub async fn run_pending_migrations(database_url: &str) -> Result<(), MigrationError> {
    let url = database_url.to_owned();
    tokio::task::spawn_blocking(move || {
        let mut conn: AsyncConnectionWrapper<AsyncPgConnection> =
            AsyncConnectionWrapper::establish(&url)
                .map_err(|err| MigrationError::Connection(err.to_string()))?;
        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|err| MigrationError::Apply(err.to_string()))?;
        info!(count = applied.len(), "migrations applied");
        Ok(())
    })
    .await
    .map_err(|err| MigrationError::Task(err.to_string()))?
}
