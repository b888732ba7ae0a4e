use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use std::collections::BTreeMap;
use tracing::{info, instrument};

use super::{
    errors::LeaderboardError,
    models::{PlayerRecord, RankedEntry},
    types::{AddPlayerRequest, CategoryResponse, SearchQuery, StatsResponse},
};
use crate::admin::AdminGrant;
use crate::ranking::CategoryKey;
use crate::shared::{AppError, AppState};

fn parse_category(raw: &str) -> Result<CategoryKey, AppError> {
    CategoryKey::try_from(raw)
        .map_err(|raw| AppError::from(LeaderboardError::NotFound(format!("category {raw}"))))
}

/// GET /categories
pub async fn list_categories() -> Json<Vec<CategoryResponse>> {
    Json(
        CategoryKey::all()
            .into_iter()
            .map(|key| CategoryResponse {
                key,
                label: key.label().to_string(),
            })
            .collect(),
    )
}

/// HTTP handler for the overall leaderboard
///
/// GET /leaderboard?q=
#[instrument(name = "list_all", skip(state))]
pub async fn list_all(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Json<Vec<RankedEntry>> {
    let text = query.q.unwrap_or_default();
    Json(
        state
            .leaderboard
            .list_category_filtered(CategoryKey::Overall, &text)
            .await,
    )
}

/// HTTP handler for one category tab
///
/// GET /leaderboard/:category?q=
#[instrument(name = "list_category", skip(state))]
pub async fn list_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<RankedEntry>>, AppError> {
    let category = parse_category(&category)?;
    let text = query.q.unwrap_or_default();
    Ok(Json(
        state
            .leaderboard
            .list_category_filtered(category, &text)
            .await,
    ))
}

/// GET /rankings - every category ranked at one point in time
#[instrument(name = "rankings_snapshot", skip(state))]
pub async fn rankings_snapshot(
    State(state): State<AppState>,
) -> Json<BTreeMap<CategoryKey, Vec<RankedEntry>>> {
    Json(state.leaderboard.snapshot().await)
}

/// GET /players?q=
#[instrument(name = "search_players", skip(state))]
pub async fn search_players(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Json<Vec<PlayerRecord>> {
    let text = query.q.unwrap_or_default();
    Json(state.leaderboard.search(&text).await)
}

/// GET /players/:identity
#[instrument(name = "get_player", skip(state))]
pub async fn get_player(
    State(state): State<AppState>,
    Path(identity): Path<String>,
) -> Result<Json<PlayerRecord>, AppError> {
    Ok(Json(state.leaderboard.get_player(&identity).await?))
}

/// GET /players/:identity/rank/:category
#[instrument(name = "player_rank", skip(state))]
pub async fn player_rank(
    State(state): State<AppState>,
    Path((identity, category)): Path<(String, String)>,
) -> Result<Json<RankedEntry>, AppError> {
    let category = parse_category(&category)?;
    Ok(Json(
        state.leaderboard.player_rank(&identity, category).await?,
    ))
}

/// GET /stats
pub async fn stats(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(state.leaderboard.stats().await)
}

/// HTTP handler for adding a player (admin only)
///
/// POST /admin/players
#[instrument(name = "add_player", skip(state, grant, payload))]
pub async fn add_player(
    State(state): State<AppState>,
    Extension(grant): Extension<AdminGrant>,
    payload: Result<Json<AddPlayerRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<PlayerRecord>), AppError> {
    let Json(request) = payload?;
    info!(identity = %request.identity, "Add player requested");
    let record = state.leaderboard.add_player(&grant, request).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// HTTP handler for removing a player from every category (admin only)
///
/// DELETE /admin/players/:identity
#[instrument(name = "remove_player", skip(state, grant))]
pub async fn remove_player(
    State(state): State<AppState>,
    Extension(grant): Extension<AdminGrant>,
    Path(identity): Path<String>,
) -> Result<StatusCode, AppError> {
    state.leaderboard.remove_player(&grant, &identity).await?;
    Ok(StatusCode::NO_CONTENT)
}
