//! League and team endpoints.

use crate::error::ApiError;
use crate::schemas::{League, Team};
use crate::service::params::{LeagueListParams, TeamListParams};
use crate::service::query;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    Json,
};

/// Get all the fantasy football leagues that match the parameters you send.
///
/// Each league is returned with its teams attached; the nested teams do not
/// carry rosters. League names are not unique, and league IDs are internal
/// and not guaranteed to be sequential.
#[utoipa::path(
    get,
    path = "/v0/leagues/",
    operation_id = "v0_get_leagues",
    tag = "membership",
    params(LeagueListParams),
    responses(
        (status = 200, description = "Leagues with their teams attached", body = [League])
    )
)]
pub async fn list_leagues(
    State(state): State<AppState>,
    Query(params): Query<LeagueListParams>,
) -> Result<Json<Vec<League>>, ApiError> {
    let leagues = query::get_leagues(&state.pool, &params).await?;
    Ok(Json(leagues))
}

/// Get one league by league ID, with its teams attached.
#[utoipa::path(
    get,
    path = "/v0/leagues/{league_id}",
    operation_id = "v0_get_league_by_league_id",
    tag = "membership",
    params(
        ("league_id" = i64, Path, description = "Internal ID of the league to return")
    ),
    responses(
        (status = 200, description = "The requested league with its teams", body = League),
        (status = 404, description = "No league has this ID")
    )
)]
pub async fn read_league(
    State(state): State<AppState>,
    Path(league_id): Path<i64>,
) -> Result<Json<League>, ApiError> {
    let league = query::get_league(&state.pool, league_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("league {league_id}")))?;
    Ok(Json(league))
}

/// Get all the fantasy football teams that match the parameters you send.
///
/// Each team is returned with its player roster attached. Team names are
/// unique within a league but not across leagues. Team IDs match the team
/// IDs returned by other calls, but don't use them for counting or logic.
#[utoipa::path(
    get,
    path = "/v0/teams/",
    operation_id = "v0_get_teams",
    tag = "membership",
    params(TeamListParams),
    responses(
        (status = 200, description = "Teams with their rosters attached", body = [Team])
    )
)]
pub async fn list_teams(
    State(state): State<AppState>,
    Query(params): Query<TeamListParams>,
) -> Result<Json<Vec<Team>>, ApiError> {
    let teams = query::get_teams(&state.pool, &params).await?;
    Ok(Json(teams))
}
