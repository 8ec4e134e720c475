//! Health check and whole-table counts.

use crate::error::ApiError;
use crate::schemas::Counts;
use crate::service::query;
use crate::state::AppState;
use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct HealthMessage {
    pub message: String,
}

/// Check to see if the Gridiron Central API is running.
///
/// Use this endpoint before making other calls to be sure the API is up.
#[utoipa::path(
    get,
    path = "/",
    operation_id = "v0_health_check",
    tag = "analytics",
    responses(
        (status = 200, description = "The API is running", body = HealthMessage)
    )
)]
pub async fn health_check() -> Json<HealthMessage> {
    Json(HealthMessage {
        message: "API health check successful".to_string(),
    })
}

/// Get counts of the leagues, teams, and players in Gridiron Central.
///
/// Use these counts together with `skip` and `limit` on the list endpoints
/// instead of paging through a whole table just to count it. The counts
/// ignore every filter.
#[utoipa::path(
    get,
    path = "/v0/counts/",
    operation_id = "v0_get_counts",
    tag = "analytics",
    responses(
        (status = 200, description = "Row counts per entity", body = Counts)
    )
)]
pub async fn get_counts(State(state): State<AppState>) -> Result<Json<Counts>, ApiError> {
    let counts = Counts {
        league_count: query::get_league_count(&state.pool).await?,
        team_count: query::get_team_count(&state.pool).await?,
        player_count: query::get_player_count(&state.pool).await?,
    };
    Ok(Json(counts))
}
