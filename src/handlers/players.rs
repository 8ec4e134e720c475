//! Player endpoints.

use crate::error::ApiError;
use crate::schemas::Player;
use crate::service::params::PlayerListParams;
use crate::service::query;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    Json,
};

/// Get all the players that match the parameters you send.
///
/// Names are not unique, so a name filter may match zero, one, or many
/// players. Use `skip` and `limit` to paginate. Don't use the player ID
/// values for counting; they are not guaranteed to be in order.
#[utoipa::path(
    get,
    path = "/v0/players/",
    operation_id = "v0_get_players",
    tag = "players",
    params(PlayerListParams),
    responses(
        (status = 200, description = "Players matching every filter sent", body = [Player])
    )
)]
pub async fn list_players(
    State(state): State<AppState>,
    Query(params): Query<PlayerListParams>,
) -> Result<Json<Vec<Player>>, ApiError> {
    let players = query::get_players(&state.pool, &params).await?;
    Ok(Json(players))
}

/// Get one player by the player ID, which is internal to Gridiron Central.
///
/// Use a player ID returned by another call such as `v0_get_players`.
#[utoipa::path(
    get,
    path = "/v0/players/{player_id}",
    operation_id = "v0_get_players_by_player_id",
    tag = "players",
    params(
        ("player_id" = i64, Path, description = "Internal ID of the player to return")
    ),
    responses(
        (status = 200, description = "The requested player", body = Player),
        (status = 404, description = "No player has this ID")
    )
)]
pub async fn read_player(
    State(state): State<AppState>,
    Path(player_id): Path<i64>,
) -> Result<Json<Player>, ApiError> {
    let player = query::get_player(&state.pool, player_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("player {player_id}")))?;
    Ok(Json(player))
}
