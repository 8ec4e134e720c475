//! Wire records served by the API.
//!
//! List endpoints return these shapes directly (no envelope). The nested
//! collections mirror what each fetch hydrates: a `League` carries its
//! `teams`, a `Team` carries its player roster, and a `Player` is always
//! flat. Weekly performances are their own endpoint.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Player {
    pub player_id: i64,
    /// Opaque identifier from the upstream statistics feed. Empty when the
    /// player has not been matched to the feed yet.
    pub gsis_id: String,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub last_changed_date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Performance {
    pub performance_id: i64,
    pub player_id: i64,
    /// Week label, not guaranteed to sort numerically.
    pub week_number: String,
    pub fantasy_points: f64,
    pub last_changed_date: NaiveDate,
}

/// A team without its roster, as nested under a league.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct TeamBase {
    pub team_id: i64,
    pub league_id: i64,
    pub team_name: String,
    pub last_changed_date: NaiveDate,
}

/// A team with its player roster hydrated.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Team {
    pub team_id: i64,
    pub league_id: i64,
    pub team_name: String,
    pub last_changed_date: NaiveDate,
    pub players: Vec<Player>,
}

/// A league with its teams hydrated. The nested teams do not carry rosters.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct League {
    pub league_id: i64,
    pub league_name: String,
    pub scoring_type: String,
    pub last_changed_date: NaiveDate,
    pub teams: Vec<TeamBase>,
}

/// Whole-table row counts. These ignore every filter and stay consistent
/// with listing at an unbounded limit.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Counts {
    pub league_count: i64,
    pub team_count: i64,
    pub player_count: i64,
}
