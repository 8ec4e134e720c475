//! Option structs for the list endpoints.
//!
//! Every optional filter is an explicit `Option` field; an absent field means
//! "no constraint". For string filters an empty value also means no
//! constraint, which the query layer enforces in one place.

use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PlayerListParams {
    /// The number of matching rows to skip at the beginning of the result.
    pub skip: Option<u32>,
    /// The maximum number of rows to return after the skipped rows.
    pub limit: Option<u32>,
    /// Return only rows changed on or after this date.
    pub minimum_last_changed_date: Option<NaiveDate>,
    /// Exact first name of the players to return.
    pub first_name: Option<String>,
    /// Exact last name of the players to return.
    pub last_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PerformanceListParams {
    /// The number of matching rows to skip at the beginning of the result.
    pub skip: Option<u32>,
    /// The maximum number of rows to return after the skipped rows.
    pub limit: Option<u32>,
    /// Return only rows changed on or after this date.
    pub minimum_last_changed_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LeagueListParams {
    /// The number of matching rows to skip at the beginning of the result.
    pub skip: Option<u32>,
    /// The maximum number of rows to return after the skipped rows.
    pub limit: Option<u32>,
    /// Return only rows changed on or after this date.
    pub minimum_last_changed_date: Option<NaiveDate>,
    /// Exact league name to match. League names are not unique.
    pub league_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TeamListParams {
    /// The number of matching rows to skip at the beginning of the result.
    pub skip: Option<u32>,
    /// The maximum number of rows to return after the skipped rows.
    pub limit: Option<u32>,
    /// Return only rows changed on or after this date.
    pub minimum_last_changed_date: Option<NaiveDate>,
    /// Exact team name to match. Unique within a league, not across leagues.
    pub team_name: Option<String>,
    /// Return only teams belonging to this league.
    pub league_id: Option<i64>,
}
