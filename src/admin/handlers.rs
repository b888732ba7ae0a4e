use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::instrument;

use super::types::{UnlockRequest, UnlockResponse};
use crate::shared::{AppError, AppState};

/// HTTP handler for unlocking the admin gate
///
/// POST /admin/unlock
/// Returns a session token to present on privileged routes
#[instrument(name = "admin_unlock", skip(state, payload))]
pub async fn unlock(
    State(state): State<AppState>,
    payload: Result<Json<UnlockRequest>, JsonRejection>,
) -> Result<Json<UnlockResponse>, AppError> {
    let Json(request) = payload?;
    let response = state.admin_gate.unlock(&request.passcode)?;
    Ok(Json(response))
}
