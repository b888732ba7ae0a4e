use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::admin;
use crate::player::handlers;
use crate::shared::AppState;

/// Builds the full HTTP router: public queries, the unlock route and the
/// admin-only commands behind `admin_auth`.
pub fn build_router(state: AppState) -> Router {
    let admin_routes = Router::new()
        .route("/admin/players", post(handlers::add_player))
        .route("/admin/players/:identity", delete(handlers::remove_player))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            admin::admin_auth,
        ));

    Router::new()
        .route("/categories", get(handlers::list_categories))
        .route("/leaderboard", get(handlers::list_all))
        .route("/leaderboard/:category", get(handlers::list_category))
        .route("/rankings", get(handlers::rankings_snapshot))
        .route("/players", get(handlers::search_players))
        .route("/players/:identity", get(handlers::get_player))
        .route(
            "/players/:identity/rank/:category",
            get(handlers::player_rank),
        )
        .route("/stats", get(handlers::stats))
        .route("/admin/unlock", post(admin::unlock))
        .merge(admin_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
