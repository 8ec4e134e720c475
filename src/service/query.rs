//! Explicit data-access functions over the entity store.
//!
//! Each fetch states exactly which related collections it hydrates:
//! `get_leagues`/`get_league` attach each league's teams (without rosters),
//! `get_teams` attaches each team's player roster, and player fetches stay
//! flat; performances are listed through their own fetch. Related rows are
//! batch-loaded with a single `IN` query per page, never per row.
//!
//! Ordering is by primary key so that offset pagination is stable for a
//! fixed underlying state; callers must not rely on any particular order.

use crate::error::ApiError;
use crate::schemas::{League, Performance, Player, Team, TeamBase};
use crate::service::params::{
    LeagueListParams, PerformanceListParams, PlayerListParams, TeamListParams,
};
use chrono::NaiveDate;
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};
use std::collections::HashMap;

const DEFAULT_LIMIT: u32 = 100;

const PLAYER_COLUMNS: &str =
    "player_id, gsis_id, first_name, last_name, position, last_changed_date";
const PERFORMANCE_COLUMNS: &str =
    "performance_id, player_id, week_number, fantasy_points, last_changed_date";
const TEAM_COLUMNS: &str = "team_id, league_id, team_name, last_changed_date";
const LEAGUE_COLUMNS: &str = "league_id, league_name, scoring_type, last_changed_date";

/// A league row before its teams are attached.
#[derive(FromRow)]
struct LeagueRow {
    league_id: i64,
    league_name: String,
    scoring_type: String,
    last_changed_date: NaiveDate,
}

/// One roster membership row joined with the player it points at.
#[derive(FromRow)]
struct RosterRow {
    team_id: i64,
    player_id: i64,
    gsis_id: String,
    first_name: String,
    last_name: String,
    position: String,
    last_changed_date: NaiveDate,
}

/// A string filter counts only when the caller supplied a non-empty value.
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn page(skip: Option<u32>, limit: Option<u32>) -> (i64, i64) {
    (
        i64::from(skip.unwrap_or(0)),
        i64::from(limit.unwrap_or(DEFAULT_LIMIT)),
    )
}

/// Closed lower bound on the change watermark: `last_changed_date >= date`.
fn push_watermark(q: &mut QueryBuilder<'_, Sqlite>, date: Option<NaiveDate>) {
    if let Some(date) = date {
        q.push(" AND last_changed_date >= ").push_bind(date);
    }
}

fn push_page(q: &mut QueryBuilder<'_, Sqlite>, order_column: &str, skip: i64, limit: i64) {
    q.push(" ORDER BY ")
        .push(order_column)
        .push(" LIMIT ")
        .push_bind(limit)
        .push(" OFFSET ")
        .push_bind(skip);
}

pub async fn get_player(pool: &SqlitePool, player_id: i64) -> Result<Option<Player>, ApiError> {
    let player = sqlx::query_as::<_, Player>(&format!(
        "SELECT {PLAYER_COLUMNS} FROM player WHERE player_id = ?"
    ))
    .bind(player_id)
    .fetch_optional(pool)
    .await?;
    Ok(player)
}

pub async fn get_players(
    pool: &SqlitePool,
    params: &PlayerListParams,
) -> Result<Vec<Player>, ApiError> {
    let (skip, limit) = page(params.skip, params.limit);
    let mut q = QueryBuilder::<Sqlite>::new(format!(
        "SELECT {PLAYER_COLUMNS} FROM player WHERE 1 = 1"
    ));
    push_watermark(&mut q, params.minimum_last_changed_date);
    if let Some(first_name) = non_empty(params.first_name.as_deref()) {
        q.push(" AND first_name = ").push_bind(first_name);
    }
    if let Some(last_name) = non_empty(params.last_name.as_deref()) {
        q.push(" AND last_name = ").push_bind(last_name);
    }
    push_page(&mut q, "player_id", skip, limit);
    tracing::debug!(sql = q.sql(), "get_players");

    let players = q.build_query_as::<Player>().fetch_all(pool).await?;
    Ok(players)
}

pub async fn get_performances(
    pool: &SqlitePool,
    params: &PerformanceListParams,
) -> Result<Vec<Performance>, ApiError> {
    let (skip, limit) = page(params.skip, params.limit);
    let mut q = QueryBuilder::<Sqlite>::new(format!(
        "SELECT {PERFORMANCE_COLUMNS} FROM performance WHERE 1 = 1"
    ));
    push_watermark(&mut q, params.minimum_last_changed_date);
    push_page(&mut q, "performance_id", skip, limit);
    tracing::debug!(sql = q.sql(), "get_performances");

    let performances = q.build_query_as::<Performance>().fetch_all(pool).await?;
    Ok(performances)
}

pub async fn get_league(pool: &SqlitePool, league_id: i64) -> Result<Option<League>, ApiError> {
    let row = sqlx::query_as::<_, LeagueRow>(&format!(
        "SELECT {LEAGUE_COLUMNS} FROM league WHERE league_id = ?"
    ))
    .bind(league_id)
    .fetch_optional(pool)
    .await?;

    let Some(row) = row else {
        return Ok(None);
    };
    let mut teams = load_league_teams(pool, &[row.league_id]).await?;
    Ok(Some(into_league(row, &mut teams)))
}

pub async fn get_leagues(
    pool: &SqlitePool,
    params: &LeagueListParams,
) -> Result<Vec<League>, ApiError> {
    let (skip, limit) = page(params.skip, params.limit);
    let mut q = QueryBuilder::<Sqlite>::new(format!(
        "SELECT {LEAGUE_COLUMNS} FROM league WHERE 1 = 1"
    ));
    push_watermark(&mut q, params.minimum_last_changed_date);
    if let Some(league_name) = non_empty(params.league_name.as_deref()) {
        q.push(" AND league_name = ").push_bind(league_name);
    }
    push_page(&mut q, "league_id", skip, limit);
    tracing::debug!(sql = q.sql(), "get_leagues");

    let rows = q.build_query_as::<LeagueRow>().fetch_all(pool).await?;
    let league_ids: Vec<i64> = rows.iter().map(|r| r.league_id).collect();
    let mut teams = load_league_teams(pool, &league_ids).await?;
    Ok(rows
        .into_iter()
        .map(|row| into_league(row, &mut teams))
        .collect())
}

pub async fn get_teams(pool: &SqlitePool, params: &TeamListParams) -> Result<Vec<Team>, ApiError> {
    let (skip, limit) = page(params.skip, params.limit);
    let mut q = QueryBuilder::<Sqlite>::new(format!(
        "SELECT {TEAM_COLUMNS} FROM team WHERE 1 = 1"
    ));
    push_watermark(&mut q, params.minimum_last_changed_date);
    if let Some(team_name) = non_empty(params.team_name.as_deref()) {
        q.push(" AND team_name = ").push_bind(team_name);
    }
    if let Some(league_id) = params.league_id {
        q.push(" AND league_id = ").push_bind(league_id);
    }
    push_page(&mut q, "team_id", skip, limit);
    tracing::debug!(sql = q.sql(), "get_teams");

    let bases = q.build_query_as::<TeamBase>().fetch_all(pool).await?;
    let team_ids: Vec<i64> = bases.iter().map(|t| t.team_id).collect();
    let mut rosters = load_rosters(pool, &team_ids).await?;
    Ok(bases
        .into_iter()
        .map(|base| Team {
            team_id: base.team_id,
            league_id: base.league_id,
            team_name: base.team_name,
            last_changed_date: base.last_changed_date,
            players: rosters.remove(&base.team_id).unwrap_or_default(),
        })
        .collect())
}

pub async fn get_player_count(pool: &SqlitePool) -> Result<i64, ApiError> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM player")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

pub async fn get_team_count(pool: &SqlitePool) -> Result<i64, ApiError> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM team")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

pub async fn get_league_count(pool: &SqlitePool) -> Result<i64, ApiError> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM league")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

fn into_league(row: LeagueRow, teams: &mut HashMap<i64, Vec<TeamBase>>) -> League {
    League {
        league_id: row.league_id,
        league_name: row.league_name,
        scoring_type: row.scoring_type,
        last_changed_date: row.last_changed_date,
        teams: teams.remove(&row.league_id).unwrap_or_default(),
    }
}

/// Batch-load the teams of every listed league in one query.
async fn load_league_teams(
    pool: &SqlitePool,
    league_ids: &[i64],
) -> Result<HashMap<i64, Vec<TeamBase>>, ApiError> {
    if league_ids.is_empty() {
        return Ok(HashMap::new());
    }
    let mut q = QueryBuilder::<Sqlite>::new(format!(
        "SELECT {TEAM_COLUMNS} FROM team WHERE league_id IN ("
    ));
    let mut ids = q.separated(", ");
    for league_id in league_ids {
        ids.push_bind(*league_id);
    }
    q.push(") ORDER BY team_id");

    let rows = q.build_query_as::<TeamBase>().fetch_all(pool).await?;
    let mut by_league: HashMap<i64, Vec<TeamBase>> = HashMap::new();
    for team in rows {
        by_league.entry(team.league_id).or_default().push(team);
    }
    Ok(by_league)
}

/// Batch-load the player roster of every listed team in one query.
async fn load_rosters(
    pool: &SqlitePool,
    team_ids: &[i64],
) -> Result<HashMap<i64, Vec<Player>>, ApiError> {
    if team_ids.is_empty() {
        return Ok(HashMap::new());
    }
    let mut q = QueryBuilder::<Sqlite>::new(
        "SELECT tp.team_id, p.player_id, p.gsis_id, p.first_name, p.last_name, \
         p.position, p.last_changed_date \
         FROM team_player tp JOIN player p ON p.player_id = tp.player_id \
         WHERE tp.team_id IN (",
    );
    let mut ids = q.separated(", ");
    for team_id in team_ids {
        ids.push_bind(*team_id);
    }
    q.push(") ORDER BY p.player_id");

    let rows = q.build_query_as::<RosterRow>().fetch_all(pool).await?;
    let mut by_team: HashMap<i64, Vec<Player>> = HashMap::new();
    for row in rows {
        by_team.entry(row.team_id).or_default().push(Player {
            player_id: row.player_id,
            gsis_id: row.gsis_id,
            first_name: row.first_name,
            last_name: row.last_name,
            position: row.position,
            last_changed_date: row.last_changed_date,
        });
    }
    Ok(by_team)
}
