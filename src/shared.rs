use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;

use crate::admin::AdminGate;
use crate::player::{LeaderboardError, LeaderboardService};

/// Shared application state containing all dependencies
#[derive(Clone)]
pub struct AppState {
    pub leaderboard: Arc<LeaderboardService>,
    pub admin_gate: Arc<AdminGate>,
}

impl AppState {
    pub fn new(leaderboard: Arc<LeaderboardService>, admin_gate: Arc<AdminGate>) -> Self {
        Self {
            leaderboard,
            admin_gate,
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("JWT error: {0}")]
    JwtError(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error(transparent)]
    Leaderboard(#[from] LeaderboardError),
}

// Malformed bodies go through the same JSON error shape as validation failures
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Leaderboard(LeaderboardError::Validation(rejection.body_text()))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::JwtError(msg) => (StatusCode::UNAUTHORIZED, msg),
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            AppError::Leaderboard(err) => {
                let status = match &err {
                    LeaderboardError::DuplicateIdentity(_) => StatusCode::CONFLICT,
                    LeaderboardError::NotFound(_) => StatusCode::NOT_FOUND,
                    LeaderboardError::Validation(_) => StatusCode::BAD_REQUEST,
                    LeaderboardError::StorageUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
                };
                (status, err.to_string())
            }
        };

        let body = Json(json!({
            "error": error_message
        }));

        (status, body).into_response()
    }
}
