//! SQLite pool construction and table DDL.

use crate::error::ApiError;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

/// DDL for the entity tables, applied idempotently at startup. Dates are
/// ISO-8601 TEXT so the watermark comparison is a plain `>=`.
const TABLE_DDL: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS league (
        league_id INTEGER PRIMARY KEY,
        league_name TEXT NOT NULL,
        scoring_type TEXT NOT NULL,
        last_changed_date TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS team (
        team_id INTEGER PRIMARY KEY,
        league_id INTEGER NOT NULL REFERENCES league (league_id),
        team_name TEXT NOT NULL,
        last_changed_date TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS player (
        player_id INTEGER PRIMARY KEY,
        gsis_id TEXT NOT NULL DEFAULT '',
        first_name TEXT NOT NULL,
        last_name TEXT NOT NULL,
        position TEXT NOT NULL,
        last_changed_date TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS performance (
        performance_id INTEGER PRIMARY KEY,
        player_id INTEGER NOT NULL REFERENCES player (player_id),
        week_number TEXT NOT NULL,
        fantasy_points REAL NOT NULL,
        last_changed_date TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS team_player (
        team_id INTEGER NOT NULL REFERENCES team (team_id),
        player_id INTEGER NOT NULL REFERENCES player (player_id),
        last_changed_date TEXT NOT NULL,
        PRIMARY KEY (team_id, player_id)
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_team_league_id ON team (league_id)",
    "CREATE INDEX IF NOT EXISTS idx_performance_player_id ON performance (player_id)",
    "CREATE INDEX IF NOT EXISTS idx_player_last_name ON player (last_name)",
];

/// Open a pooled connection to a SQLite database, creating the file if it
/// does not exist yet. Foreign keys are enforced on every connection.
pub async fn connect(url: &str) -> Result<SqlitePool, ApiError> {
    let options = SqliteConnectOptions::from_str(url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;
    Ok(pool)
}

/// In-memory database on a single pinned connection. A SQLite `:memory:`
/// database is per-connection, so the pool must never open a second one.
pub async fn connect_memory() -> Result<SqlitePool, ApiError> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;
    Ok(pool)
}

/// Create the entity tables and indexes if they are missing.
pub async fn ensure_tables(pool: &SqlitePool) -> Result<(), ApiError> {
    for ddl in TABLE_DDL {
        sqlx::query(ddl).execute(pool).await?;
    }
    Ok(())
}
