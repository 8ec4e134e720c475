//! Whole-table CSV downloads.
//!
//! Every bulk file contains all rows regardless of filters, with a fixed
//! header line consumers can validate against before parsing.

use crate::error::ApiError;
use crate::schemas::{Performance, Player, TeamBase};
use crate::state::AppState;
use axum::{extract::State, http::header::CONTENT_TYPE, response::IntoResponse};
use chrono::NaiveDate;

fn csv_response(body: String) -> impl IntoResponse {
    ([(CONTENT_TYPE, "text/csv; charset=utf-8")], body)
}

/// Quote a field only when it would otherwise break the row.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Download every player as a CSV file.
#[utoipa::path(
    get,
    path = "/v0/bulk/players/",
    operation_id = "v0_get_bulk_players",
    tag = "bulk",
    responses(
        (status = 200, description = "All player rows as CSV", content_type = "text/csv", body = String)
    )
)]
pub async fn bulk_players(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let rows = sqlx::query_as::<_, Player>(
        "SELECT player_id, gsis_id, first_name, last_name, position, last_changed_date \
         FROM player ORDER BY player_id",
    )
    .fetch_all(&state.pool)
    .await?;

    let mut csv = String::from("player_id,gsis_id,first_name,last_name,position,last_changed_date\n");
    for p in rows {
        csv.push_str(&format!(
            "{},{},{},{},{},{}\n",
            p.player_id,
            csv_field(&p.gsis_id),
            csv_field(&p.first_name),
            csv_field(&p.last_name),
            csv_field(&p.position),
            p.last_changed_date,
        ));
    }
    Ok(csv_response(csv))
}

/// Download every league as a CSV file.
#[utoipa::path(
    get,
    path = "/v0/bulk/leagues/",
    operation_id = "v0_get_bulk_leagues",
    tag = "bulk",
    responses(
        (status = 200, description = "All league rows as CSV", content_type = "text/csv", body = String)
    )
)]
pub async fn bulk_leagues(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let rows = sqlx::query_as::<_, (i64, String, String, NaiveDate)>(
        "SELECT league_id, league_name, scoring_type, last_changed_date \
         FROM league ORDER BY league_id",
    )
    .fetch_all(&state.pool)
    .await?;

    let mut csv = String::from("league_id,league_name,scoring_type,last_changed_date\n");
    for (league_id, league_name, scoring_type, last_changed_date) in rows {
        csv.push_str(&format!(
            "{},{},{},{}\n",
            league_id,
            csv_field(&league_name),
            csv_field(&scoring_type),
            last_changed_date,
        ));
    }
    Ok(csv_response(csv))
}

/// Download every team as a CSV file.
#[utoipa::path(
    get,
    path = "/v0/bulk/teams/",
    operation_id = "v0_get_bulk_teams",
    tag = "bulk",
    responses(
        (status = 200, description = "All team rows as CSV", content_type = "text/csv", body = String)
    )
)]
pub async fn bulk_teams(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let rows = sqlx::query_as::<_, TeamBase>(
        "SELECT team_id, league_id, team_name, last_changed_date FROM team ORDER BY team_id",
    )
    .fetch_all(&state.pool)
    .await?;

    let mut csv = String::from("team_id,league_id,team_name,last_changed_date\n");
    for t in rows {
        csv.push_str(&format!(
            "{},{},{},{}\n",
            t.team_id,
            t.league_id,
            csv_field(&t.team_name),
            t.last_changed_date,
        ));
    }
    Ok(csv_response(csv))
}

/// Download every weekly performance as a CSV file.
#[utoipa::path(
    get,
    path = "/v0/bulk/performances/",
    operation_id = "v0_get_bulk_performances",
    tag = "bulk",
    responses(
        (status = 200, description = "All performance rows as CSV", content_type = "text/csv", body = String)
    )
)]
pub async fn bulk_performances(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let rows = sqlx::query_as::<_, Performance>(
        "SELECT performance_id, player_id, week_number, fantasy_points, last_changed_date \
         FROM performance ORDER BY performance_id",
    )
    .fetch_all(&state.pool)
    .await?;

    let mut csv =
        String::from("performance_id,player_id,week_number,fantasy_points,last_changed_date\n");
    for p in rows {
        csv.push_str(&format!(
            "{},{},{},{},{}\n",
            p.performance_id,
            p.player_id,
            csv_field(&p.week_number),
            p.fantasy_points,
            p.last_changed_date,
        ));
    }
    Ok(csv_response(csv))
}

/// Download every roster membership as a CSV file.
#[utoipa::path(
    get,
    path = "/v0/bulk/team_players/",
    operation_id = "v0_get_bulk_team_players",
    tag = "bulk",
    responses(
        (status = 200, description = "All roster membership rows as CSV", content_type = "text/csv", body = String)
    )
)]
pub async fn bulk_team_players(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let rows = sqlx::query_as::<_, (i64, i64, NaiveDate)>(
        "SELECT team_id, player_id, last_changed_date FROM team_player \
         ORDER BY team_id, player_id",
    )
    .fetch_all(&state.pool)
    .await?;

    let mut csv = String::from("team_id,player_id,last_changed_date\n");
    for (team_id, player_id, last_changed_date) in rows {
        csv.push_str(&format!("{},{},{}\n", team_id, player_id, last_changed_date));
    }
    Ok(csv_response(csv))
}

#[cfg(test)]
mod tests {
    use super::csv_field;

    #[test]
    fn csv_field_quotes_only_when_needed() {
        assert_eq!(csv_field("Young"), "Young");
        assert_eq!(csv_field("Smith, Jr."), "\"Smith, Jr.\"");
        assert_eq!(csv_field("The \"Hammer\""), "\"The \"\"Hammer\"\"\"");
    }
}
