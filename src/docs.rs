//! OpenAPI document, assembled from the static metadata on each handler.

use axum::Json;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Gridiron Central Fantasy Football API",
        version = "0.1.0",
        description = "This API provides read-only access to Gridiron Central \
fantasy football data. The endpoints are grouped into the following categories:\n\n\
## Analytics\n\
Check the health of the API and get counts of leagues, teams, and players.\n\n\
## Players\n\
Get a list of NFL players, or search for an individual player by player ID.\n\n\
## Scoring\n\
Get a list of weekly player performances, including the fantasy points scored \
under Gridiron Central league scoring.\n\n\
## Membership\n\
Get information about all the fantasy football leagues and the teams in them.\n\n\
## Bulk\n\
Download whole tables as CSV files."
    ),
    paths(
        crate::handlers::analytics::health_check,
        crate::handlers::analytics::get_counts,
        crate::handlers::players::list_players,
        crate::handlers::players::read_player,
        crate::handlers::scoring::list_performances,
        crate::handlers::membership::list_leagues,
        crate::handlers::membership::read_league,
        crate::handlers::membership::list_teams,
        crate::handlers::bulk::bulk_players,
        crate::handlers::bulk::bulk_leagues,
        crate::handlers::bulk::bulk_teams,
        crate::handlers::bulk::bulk_performances,
        crate::handlers::bulk::bulk_team_players,
    ),
    tags(
        (name = "analytics", description = "API health and row counts"),
        (name = "players", description = "NFL players in Gridiron Central"),
        (name = "scoring", description = "Weekly fantasy-point performances"),
        (name = "membership", description = "Leagues and the teams in them"),
        (name = "bulk", description = "Whole-table CSV downloads")
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
