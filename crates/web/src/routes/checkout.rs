//! Checkout route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use namenest_core::seo::PageMeta;

use crate::error::{AppError, set_sentry_user};
use crate::filters;
use crate::middleware::{OptionalAuth, set_current_user};
use crate::models::CurrentUser;
use crate::services::checkout::{CheckoutRequest, CheckoutService, complete_checkout};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CheckoutResponse {
    pub url: String,
}

/// `POST /api/checkout`
///
/// # Errors
///
/// JSON `{error}` with 400 (bad body or email), 401 (upgrade while signed
/// out), 404 (profile gone) or 500 (Stripe or database failure).
#[instrument(skip(state, user, body))]
pub async fn create(
    State(state): State<AppState>,
    OptionalAuth(user): OptionalAuth,
    body: Result<Json<CheckoutRequest>, JsonRejection>,
) -> Result<Json<CheckoutResponse>, AppError> {
    let Json(request) = body.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let config = state.config();
    let profiles = state.profiles();
    let service = CheckoutService::new(
        state.stripe(),
        &profiles,
        &config.stripe.price_id,
        &config.base_url,
    );

    let url = service
        .create_session(&request, user.map(|u| u.id))
        .await?;

    Ok(Json(CheckoutResponse { url }))
}

#[derive(Debug, Deserialize)]
pub struct SuccessQuery {
    pub session_id: Option<String>,
}

/// What the visitor sees after returning from Stripe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    Confirmed { email: String },
    Pending,
    Failed { message: String },
}

impl CheckoutOutcome {
    #[must_use]
    pub fn confirmed_email(&self) -> Option<&str> {
        match self {
            Self::Confirmed { email } => Some(email),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed { message } => Some(message),
            _ => None,
        }
    }
}

#[derive(Template, WebTemplate)]
#[template(path = "checkout_success.html")]
pub struct CheckoutSuccessTemplate {
    pub meta: PageMeta,
    pub canonical_url: String,
    pub outcome: CheckoutOutcome,
}

/// `GET /checkout/success?session_id=...`
#[instrument(skip(state, session, query))]
pub async fn success(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<SuccessQuery>,
) -> impl IntoResponse {
    let outcome = match query.session_id.as_deref().filter(|id| !id.is_empty()) {
        Some(session_id) => resolve_outcome(&state, &session, session_id).await,
        None => CheckoutOutcome::Failed {
            message: "Missing checkout session.".to_string(),
        },
    };

    let meta = PageMeta::simple(
        "Welcome to NameNest Premium",
        "Your NameNest Premium subscription.",
        "/checkout/success",
    );
    CheckoutSuccessTemplate {
        canonical_url: meta.canonical_url(&state.config().base_url),
        meta,
        outcome,
    }
}

async fn resolve_outcome(state: &AppState, session: &Session, session_id: &str) -> CheckoutOutcome {
    let checkout = match state.stripe().retrieve_checkout_session(session_id).await {
        Ok(checkout) => checkout,
        Err(e) => return failed(&e),
    };

    let profile = match complete_checkout(&state.profiles(), &checkout).await {
        Ok(Some(profile)) => profile,
        Ok(None) => return CheckoutOutcome::Pending,
        Err(e) => return failed(&e),
    };

    let user = CurrentUser {
        id: profile.id,
        email: profile.email,
    };
    if let Err(e) = set_current_user(session, &user).await {
        tracing::error!("Failed to store session identity: {}", e);
    }
    set_sentry_user(&user.id, Some(user.email.as_str()));

    CheckoutOutcome::Confirmed {
        email: user.email.into_inner(),
    }
}

fn failed(error: &(dyn std::error::Error + 'static)) -> CheckoutOutcome {
    let event_id = sentry::capture_error(error);
    tracing::error!(error = %error, sentry_event_id = %event_id, "Checkout completion failed");
    CheckoutOutcome::Failed {
        message: error.to_string(),
    }
}
