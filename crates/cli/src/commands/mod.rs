//! CLI command implementations.

pub mod migrate;
pub mod seed;
pub mod sitemap;

use secrecy::SecretString;

/// Connection string from `NAMENEST_DATABASE_URL`, falling back to `DATABASE_URL`.
pub(crate) fn database_url() -> Result<SecretString, MissingDatabaseUrl> {
    dotenvy::dotenv().ok();

    std::env::var("NAMENEST_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map(SecretString::from)
        .map_err(|_| MissingDatabaseUrl)
}

#[derive(Debug, thiserror::Error)]
#[error("Missing environment variable: NAMENEST_DATABASE_URL (or DATABASE_URL)")]
pub struct MissingDatabaseUrl;
