//! Session sign-out.

use axum::response::{IntoResponse, Redirect};
use tower_sessions::Session;
use tracing::instrument;

use crate::error::clear_sentry_user;
use crate::middleware::clear_current_user;

/// `POST /auth/logout`: drop the session identity and return home.
#[instrument(skip(session))]
pub async fn logout(session: Session) -> impl IntoResponse {
    if let Err(e) = clear_current_user(&session).await {
        tracing::error!("Failed to clear session: {}", e);
    }

    if let Err(e) = session.flush().await {
        tracing::error!("Failed to flush session: {}", e);
    }

    clear_sentry_user();
    Redirect::to("/")
}
