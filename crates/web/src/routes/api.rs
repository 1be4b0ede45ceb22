//! Diagnostic JSON endpoints.

use axum::{Json, extract::State};
use serde::Serialize;
use tracing::instrument;

use crate::error::AppError;
use crate::state::AppState;

/// Names returned in the `sample` field.
const SAMPLE_SIZE: u32 = 5;

#[derive(Debug, Serialize)]
pub struct TestDbResponse {
    pub ok: bool,
    /// Total rows in `names`.
    pub names: i64,
    pub sample: Vec<String>,
}

/// `GET /api/test-db`: confirm the names table is reachable and populated.
///
/// # Errors
///
/// Returns 500 with the database error message if either query fails.
#[instrument(skip(state))]
pub async fn test_db(State(state): State<AppState>) -> Result<Json<TestDbResponse>, AppError> {
    let repo = state.names();
    let names = repo.count().await?;
    let sample = repo
        .sample(SAMPLE_SIZE)
        .await?
        .into_iter()
        .map(|record| record.name)
        .collect();

    Ok(Json(TestDbResponse {
        ok: true,
        names,
        sample,
    }))
}
