//! Shortlist API. Premium profiles only.
//!
//! ```text
//! GET    /api/shortlist         - {"names": [...]}
//! POST   /api/shortlist         - {"name": "..."} -> 201
//! DELETE /api/shortlist/{name}  - 204
//! ```

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use namenest_core::ProfileId;

use crate::db::{ProfileStore, RepositoryError};
use crate::error::AppError;
use crate::middleware::RequireAuth;
use crate::state::AppState;

/// Longest name accepted on a shortlist.
const MAX_NAME_LEN: usize = 64;

#[derive(Debug, Serialize)]
pub struct ShortlistResponse {
    pub names: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct AddRequest {
    #[serde(default)]
    pub name: String,
}

/// Trim and validate a shortlist name.
fn normalize_name(raw: &str) -> Result<&str, AppError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(AppError::BadRequest("Name is required".to_string()));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(AppError::BadRequest(format!(
            "Name must be at most {MAX_NAME_LEN} characters"
        )));
    }
    Ok(name)
}

/// Resolve the signed-in user to a premium profile id.
async fn require_premium<S: ProfileStore>(profiles: &S, id: ProfileId) -> Result<ProfileId, AppError> {
    let profile = profiles
        .get_profile(id)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Profile no longer exists".to_string()))?;

    if !profile.is_premium {
        return Err(AppError::Forbidden("Premium subscription required".to_string()));
    }
    Ok(profile.id)
}

/// `GET /api/shortlist`
#[instrument(skip(state, user))]
pub async fn list(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<Json<ShortlistResponse>, AppError> {
    let profile_id = require_premium(&state.profiles(), user.id).await?;
    let names = state.shortlist().list(profile_id).await?;
    Ok(Json(ShortlistResponse { names }))
}

/// `POST /api/shortlist`
#[instrument(skip(state, user, body))]
pub async fn add(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    body: Result<Json<AddRequest>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let Json(request) = body.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let name = normalize_name(&request.name)?;

    let profile_id = require_premium(&state.profiles(), user.id).await?;
    state.shortlist().add(profile_id, name).await?;
    Ok(StatusCode::CREATED)
}

/// `DELETE /api/shortlist/{name}`
#[instrument(skip(state, user))]
pub async fn remove(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(name): Path<String>,
) -> Result<StatusCode, AppError> {
    let name = normalize_name(&name)?;

    let profile_id = require_premium(&state.profiles(), user.id).await?;
    match state.shortlist().remove(profile_id, name).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(RepositoryError::NotFound) => {
            Err(AppError::NotFound(format!("{name} is not on your shortlist")))
        }
        Err(e) => Err(e.into()),
    }
}
