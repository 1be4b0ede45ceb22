//! Database operations for the NameNest `PostgreSQL` database.
//!
//! ## Tables
//!
//! - `names` - Read-only reference data behind every listing page
//! - `profiles` - Subscribers, keyed by email, with Stripe customer id and premium flag
//! - `shortlist_entries` - Names saved by premium profiles
//! - `tower_sessions.session` - Tower-sessions storage
//!
//! # Migrations
//!
//! Migrations are stored in `crates/web/migrations/` and run via:
//! ```bash
//! cargo run -p namenest-cli -- migrate
//! ```
//!
//! Queries are built at runtime (`query_as` / `QueryBuilder`) so the crate
//! compiles without a live database.

mod names;
mod profiles;
mod shortlist;

use std::future::Future;
use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

use namenest_core::{Email, NameQuery, NameRecord, Profile, ProfileId};

pub use names::NameRepository;
pub use profiles::ProfileRepository;
pub use shortlist::ShortlistRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., unique email).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Read access to the name catalog.
pub trait NameStore {
    /// Run one filtered, popularity-ordered search.
    fn search(
        &self,
        query: &NameQuery,
    ) -> impl Future<Output = Result<Vec<NameRecord>, RepositoryError>> + Send;
}

/// Profile persistence used by checkout.
pub trait ProfileStore {
    fn get_profile(
        &self,
        id: ProfileId,
    ) -> impl Future<Output = Result<Option<Profile>, RepositoryError>> + Send;

    /// Record the Stripe customer provisioned for a profile.
    ///
    /// The id is written once: if the profile already has a customer, the
    /// stored id is kept and returned instead of `customer_id`.
    fn set_stripe_customer_id(
        &self,
        id: ProfileId,
        customer_id: &str,
    ) -> impl Future<Output = Result<String, RepositoryError>> + Send;

    /// Mark an existing profile premium, filling in the customer id if unset.
    /// Returns `None` when the profile does not exist.
    fn set_premium(
        &self,
        id: ProfileId,
        customer_id: Option<&str>,
    ) -> impl Future<Output = Result<Option<Profile>, RepositoryError>> + Send;

    /// Create or update the profile for `email`, marking it premium.
    fn upsert_premium(
        &self,
        email: &Email,
        customer_id: Option<&str>,
    ) -> impl Future<Output = Result<Profile, RepositoryError>> + Send;
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}

/// Check the database answers a trivial query.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the ping fails.
pub async fn ping(pool: &PgPool) -> Result<(), RepositoryError> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
