//! Profile repository.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use namenest_core::{Email, Profile, ProfileId};

use super::{ProfileStore, RepositoryError};

#[derive(Debug, FromRow)]
struct ProfileRow {
    id: Uuid,
    email: String,
    stripe_customer_id: Option<String>,
    is_premium: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ProfileRow> for Profile {
    type Error = RepositoryError;

    fn try_from(row: ProfileRow) -> Result<Self, Self::Error> {
        let email = Email::parse(&row.email).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid email in database: {e}"))
        })?;

        Ok(Self {
            id: ProfileId::new(row.id),
            email,
            stripe_customer_id: row.stripe_customer_id,
            is_premium: row.is_premium,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Repository for profile database operations.
pub struct ProfileRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProfileRepository<'a> {
    /// Create a new profile repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }
}

impl ProfileStore for ProfileRepository<'_> {
    async fn get_profile(&self, id: ProfileId) -> Result<Option<Profile>, RepositoryError> {
        let row: Option<ProfileRow> = sqlx::query_as(
            r"
            SELECT id, email, stripe_customer_id, is_premium, created_at, updated_at
            FROM profiles
            WHERE id = $1
            ",
        )
        .bind(id.as_uuid())
        .fetch_optional(self.pool)
        .await?;

        row.map(Profile::try_from).transpose()
    }

    async fn set_stripe_customer_id(
        &self,
        id: ProfileId,
        customer_id: &str,
    ) -> Result<String, RepositoryError> {
        let result = sqlx::query(
            r"
            UPDATE profiles
            SET stripe_customer_id = $2, updated_at = now()
            WHERE id = $1 AND stripe_customer_id IS NULL
            ",
        )
        .bind(id.as_uuid())
        .bind(customer_id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 1 {
            return Ok(customer_id.to_string());
        }

        // Either the row is gone or another request provisioned first.
        self.get_profile(id)
            .await?
            .and_then(|profile| profile.stripe_customer_id)
            .ok_or(RepositoryError::NotFound)
    }

    async fn set_premium(
        &self,
        id: ProfileId,
        customer_id: Option<&str>,
    ) -> Result<Option<Profile>, RepositoryError> {
        let row: Option<ProfileRow> = sqlx::query_as(
            r"
            UPDATE profiles
            SET stripe_customer_id = COALESCE(stripe_customer_id, $2),
                is_premium = TRUE,
                updated_at = now()
            WHERE id = $1
            RETURNING id, email, stripe_customer_id, is_premium, created_at, updated_at
            ",
        )
        .bind(id.as_uuid())
        .bind(customer_id)
        .fetch_optional(self.pool)
        .await?;

        row.map(Profile::try_from).transpose()
    }

    async fn upsert_premium(
        &self,
        email: &Email,
        customer_id: Option<&str>,
    ) -> Result<Profile, RepositoryError> {
        let row: ProfileRow = sqlx::query_as(
            r"
            INSERT INTO profiles (email, stripe_customer_id, is_premium)
            VALUES ($1, $2, TRUE)
            ON CONFLICT (email) DO UPDATE
            SET stripe_customer_id = COALESCE(profiles.stripe_customer_id, EXCLUDED.stripe_customer_id),
                is_premium = TRUE,
                updated_at = now()
            RETURNING id, email, stripe_customer_id, is_premium, created_at, updated_at
            ",
        )
        .bind(email)
        .bind(customer_id)
        .fetch_one(self.pool)
        .await?;

        Profile::try_from(row)
    }
}
