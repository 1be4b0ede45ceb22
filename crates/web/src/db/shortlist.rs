//! Shortlist repository: names saved by premium profiles.

use sqlx::PgPool;

use namenest_core::ProfileId;

use super::RepositoryError;

/// Repository for shortlist database operations.
pub struct ShortlistRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ShortlistRepository<'a> {
    /// Create a new shortlist repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Saved names, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self, profile_id: ProfileId) -> Result<Vec<String>, RepositoryError> {
        let rows: Vec<(String,)> = sqlx::query_as(
            r"
            SELECT name
            FROM shortlist_entries
            WHERE profile_id = $1
            ORDER BY created_at ASC, name ASC
            ",
        )
        .bind(profile_id.as_uuid())
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(|(name,)| name).collect())
    }

    /// Save a name. Saving an already saved name is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the statement fails.
    pub async fn add(&self, profile_id: ProfileId, name: &str) -> Result<(), RepositoryError> {
        sqlx::query(
            r"
            INSERT INTO shortlist_entries (profile_id, name)
            VALUES ($1, $2)
            ON CONFLICT (profile_id, name) DO NOTHING
            ",
        )
        .bind(profile_id.as_uuid())
        .bind(name)
        .execute(self.pool)
        .await?;
        Ok(())
    }

    /// Remove a saved name.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the name was not saved.
    /// Returns `RepositoryError::Database` if the statement fails.
    pub async fn remove(&self, profile_id: ProfileId, name: &str) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r"
            DELETE FROM shortlist_entries
            WHERE profile_id = $1 AND name = $2
            ",
        )
        .bind(profile_id.as_uuid())
        .bind(name)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
