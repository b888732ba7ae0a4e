use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use tracing::{info, instrument, warn};

use super::gate::GateState;
use crate::shared::{AppError, AppState};

/// Admin middleware - validates the Authorization Bearer token and adds the
/// AdminGrant to the request.
/// Usage: .route_layer(middleware::from_fn_with_state(app_state.clone(), admin::admin_auth))
/// Handlers can then extract Extension(grant): Extension<AdminGrant>.
#[instrument(skip(state, req, next))]
pub async fn admin_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = req
        .headers()
        .get("Authorization")
        .and_then(|header| header.to_str().ok())
        .ok_or_else(|| {
            warn!("Missing Authorization header in admin request");
            AppError::Unauthorized("Missing authorization header".to_string())
        })?
        .strip_prefix("Bearer ")
        .ok_or_else(|| {
            warn!("Invalid Authorization header format (expected Bearer token)");
            AppError::Unauthorized("Invalid authorization header format".to_string())
        })?
        .to_string();

    let grant = match state.admin_gate.state_for(Some(token.as_str())) {
        GateState::Unlocked(grant) => grant,
        GateState::Locked => {
            return Err(AppError::Unauthorized(
                "Admin session is locked".to_string(),
            ))
        }
    };

    info!(
        session_id = %grant.session_id(),
        uri = %req.uri(),
        "Admin request authorized"
    );

    req.extensions_mut().insert(grant);
    Ok(next.run(req).await)
}
