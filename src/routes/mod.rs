//! Route registration.

use crate::docs;
use crate::handlers::{analytics, bulk, membership, players, scoring};
use crate::state::AppState;
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

/// The full application router: health check at the root, the read-only
/// `/v0/` API, bulk CSV downloads, and the OpenAPI document.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(analytics::health_check))
        .route("/v0/players/", get(players::list_players))
        .route("/v0/players/:player_id", get(players::read_player))
        .route("/v0/performances/", get(scoring::list_performances))
        .route("/v0/leagues/", get(membership::list_leagues))
        .route("/v0/leagues/:league_id", get(membership::read_league))
        .route("/v0/teams/", get(membership::list_teams))
        .route("/v0/counts/", get(analytics::get_counts))
        .route("/v0/bulk/players/", get(bulk::bulk_players))
        .route("/v0/bulk/leagues/", get(bulk::bulk_leagues))
        .route("/v0/bulk/teams/", get(bulk::bulk_teams))
        .route("/v0/bulk/performances/", get(bulk::bulk_performances))
        .route("/v0/bulk/team_players/", get(bulk::bulk_team_players))
        .route("/openapi.json", get(docs::openapi_json))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
