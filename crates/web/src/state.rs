//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::SiteConfig;
use crate::db::{NameRepository, ProfileRepository, ShortlistRepository};
use crate::services::stripe::{StripeClient, StripeError};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources like database connections and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: SiteConfig,
    pool: PgPool,
    stripe: StripeClient,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Errors
    ///
    /// Returns an error if the Stripe HTTP client cannot be built.
    pub fn new(config: SiteConfig, pool: PgPool) -> Result<Self, StripeError> {
        let stripe = StripeClient::new(&config.stripe)?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                pool,
                stripe,
            }),
        })
    }

    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.inner.config
    }

    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    #[must_use]
    pub fn stripe(&self) -> &StripeClient {
        &self.inner.stripe
    }

    #[must_use]
    pub fn names(&self) -> NameRepository<'_> {
        NameRepository::new(&self.inner.pool)
    }

    #[must_use]
    pub fn profiles(&self) -> ProfileRepository<'_> {
        ProfileRepository::new(&self.inner.pool)
    }

    #[must_use]
    pub fn shortlist(&self) -> ShortlistRepository<'_> {
        ShortlistRepository::new(&self.inner.pool)
    }
}
