//! Typed records returned by the API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthMessage {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub player_id: i64,
    pub gsis_id: String,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub last_changed_date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Performance {
    pub performance_id: i64,
    pub player_id: i64,
    pub week_number: String,
    pub fantasy_points: f64,
    pub last_changed_date: NaiveDate,
}

/// A team as nested under a league, without its roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamBase {
    pub team_id: i64,
    pub league_id: i64,
    pub team_name: String,
    pub last_changed_date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub team_id: i64,
    pub league_id: i64,
    pub team_name: String,
    pub last_changed_date: NaiveDate,
    pub players: Vec<Player>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct League {
    pub league_id: i64,
    pub league_name: String,
    pub scoring_type: String,
    pub last_changed_date: NaiveDate,
    pub teams: Vec<TeamBase>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Counts {
    pub league_count: i64,
    pub team_count: i64,
    pub player_count: i64,
}
