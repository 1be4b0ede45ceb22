//! Database migration command.
//!
//! Migrations live in `crates/web/migrations/` and are embedded at compile
//! time, so the binary can migrate a database without the source tree.
//!
//! ```text
//! migrations/
//! ├── 20260101000001_create_names.sql
//! ├── 20260101000002_create_profiles.sql
//! ├── 20260101000003_create_shortlist_entries.sql
//! └── 20260101000004_create_sessions.sql
//! ```

use thiserror::Error;

use super::{MissingDatabaseUrl, database_url};

#[derive(Debug, Error)]
pub enum MigrationError {
    #[error(transparent)]
    MissingEnvVar(#[from] MissingDatabaseUrl),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Apply all pending migrations.
///
/// # Errors
///
/// Returns an error if the connection string is missing, the database is
/// unreachable, or a migration fails.
pub async fn run() -> Result<(), MigrationError> {
    let database_url = database_url()?;

    tracing::info!("Connecting to database...");
    let pool = namenest_web::db::create_pool(&database_url).await?;

    let migrator = sqlx::migrate!("../web/migrations");
    tracing::info!(available = migrator.iter().count(), "Running migrations...");
    migrator.run(&pool).await?;

    tracing::info!("Migrations complete!");
    Ok(())
}
