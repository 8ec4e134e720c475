//! Deterministic reference dataset.
//!
//! Seeds the demo universe used by the test suites and by
//! `GRIDIRON_SEED_DEMO=1` local runs: 5 leagues, 20 teams (league 5001 owns
//! 8 of them), 550 players, 1100 weekly performances, and a 7-player roster
//! per team. Every league, team, and player carries a change date on or
//! after 2024-04-01; performances are split evenly across the watermark so
//! date-filtered listings return exactly half the table.

use crate::error::ApiError;
use chrono::{Days, NaiveDate};
use sqlx::SqlitePool;

pub const LEAGUE_COUNT: i64 = 5;
pub const TEAM_COUNT: i64 = 20;
pub const PLAYER_COUNT: i64 = 550;
pub const PERFORMANCE_COUNT: i64 = 1100;
pub const ROSTER_SIZE: usize = 7;

const FIRST_NAMES: &[&str] = &[
    "Marcus", "DeShawn", "Tyler", "Jordan", "Caleb", "Andre", "Malik", "Trevor", "Dominic",
    "Isaiah",
];
const LAST_NAMES: &[&str] = &[
    "Hargrove",
    "Whitfield",
    "Castillo",
    "Okafor",
    "Brennan",
    "Delacroix",
    "Summers",
    "Pittman",
    "Varga",
    "Lockhart",
    "McAllister",
];
const POSITIONS: &[&str] = &["QB", "RB", "WR", "TE", "K"];

const LEAGUE_NAMES: &[&str] = &[
    "Backyard Blitz League",
    "Corner Office League",
    "End Zone Elite",
    "Monday Knights",
    "Prime Time Pigskin",
];
const SCORING_TYPES: &[&str] = &["PPR", "Standard", "Half-PPR", "PPR", "Standard"];

const TEAM_ADJECTIVES: &[&str] = &["Roaring", "Iron", "Crimson", "Golden", "Midnight"];
const TEAM_NOUNS: &[&str] = &["Stallions", "Gridlocks", "Mustangs", "Renegades"];

fn demo_date(year: i32, month: u32, day_of_month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day_of_month).expect("valid calendar date")
}

fn day(base: NaiveDate, offset: usize) -> NaiveDate {
    base + Days::new(offset as u64)
}

/// League 5001 owns 8 teams; the remaining leagues own 3 each.
fn league_for_team(team_index: usize) -> i64 {
    if team_index < 8 {
        5001
    } else {
        5002 + ((team_index - 8) / 3) as i64
    }
}

/// Load the reference dataset. Does nothing when the store already holds
/// players, so repeated startups stay idempotent.
pub async fn seed_demo_data(pool: &SqlitePool) -> Result<(), ApiError> {
    let existing = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM player")
        .fetch_one(pool)
        .await?;
    if existing > 0 {
        return Ok(());
    }

    let watermark = demo_date(2024, 4, 1);
    let pre_watermark = demo_date(2024, 3, 1);
    let mut tx = pool.begin().await?;

    for i in 0..LEAGUE_COUNT as usize {
        sqlx::query(
            "INSERT INTO league (league_id, league_name, scoring_type, last_changed_date) \
             VALUES (?, ?, ?, ?)",
        )
        .bind(5001 + i as i64)
        .bind(LEAGUE_NAMES[i])
        .bind(SCORING_TYPES[i])
        .bind(day(watermark, i))
        .execute(&mut *tx)
        .await?;
    }

    for k in 0..TEAM_COUNT as usize {
        let team_name = format!("{} {}", TEAM_ADJECTIVES[k % 5], TEAM_NOUNS[k / 5]);
        sqlx::query(
            "INSERT INTO team (team_id, league_id, team_name, last_changed_date) \
             VALUES (?, ?, ?, ?)",
        )
        .bind(2001 + k as i64)
        .bind(league_for_team(k))
        .bind(team_name)
        .bind(day(demo_date(2024, 4, 2), k % 20))
        .execute(&mut *tx)
        .await?;
    }

    for i in 0..PLAYER_COUNT as usize {
        // Player 102 is the one fixed, searchable name in the dataset.
        let (first_name, last_name, position) = if i == 1 {
            ("Bryce", "Young", "QB")
        } else {
            (
                FIRST_NAMES[i % FIRST_NAMES.len()],
                LAST_NAMES[(i / FIRST_NAMES.len()) % LAST_NAMES.len()],
                POSITIONS[i % POSITIONS.len()],
            )
        };
        sqlx::query(
            "INSERT INTO player \
             (player_id, gsis_id, first_name, last_name, position, last_changed_date) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(101 + i as i64)
        .bind(format!("00-00{:05}", 30000 + i))
        .bind(first_name)
        .bind(last_name)
        .bind(position)
        .bind(day(watermark, i % 30))
        .execute(&mut *tx)
        .await?;
    }

    // Two performances per player: week "1" predates the watermark, week "2"
    // does not, which puts exactly half the table on each side.
    for i in 0..PLAYER_COUNT as usize {
        let player_id = 101 + i as i64;
        sqlx::query(
            "INSERT INTO performance \
             (performance_id, player_id, week_number, fantasy_points, last_changed_date) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(10_000 + 2 * i as i64)
        .bind(player_id)
        .bind("1")
        .bind(((i * 3) % 250) as f64 / 10.0)
        .bind(day(pre_watermark, i % 30))
        .execute(&mut *tx)
        .await?;
        sqlx::query(
            "INSERT INTO performance \
             (performance_id, player_id, week_number, fantasy_points, last_changed_date) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(10_001 + 2 * i as i64)
        .bind(player_id)
        .bind("2")
        .bind(((i * 7) % 300) as f64 / 10.0)
        .bind(day(watermark, i % 30))
        .execute(&mut *tx)
        .await?;
    }

    for k in 0..TEAM_COUNT as usize {
        let team_id = 2001 + k as i64;
        for slot in 0..ROSTER_SIZE {
            sqlx::query(
                "INSERT INTO team_player (team_id, player_id, last_changed_date) \
                 VALUES (?, ?, ?)",
            )
            .bind(team_id)
            .bind(101 + (k * ROSTER_SIZE + slot) as i64)
            .bind(day(demo_date(2024, 4, 5), k))
            .execute(&mut *tx)
            .await?;
        }
    }

    tx.commit().await?;
    tracing::info!(
        leagues = LEAGUE_COUNT,
        teams = TEAM_COUNT,
        players = PLAYER_COUNT,
        performances = PERFORMANCE_COUNT,
        "seeded reference dataset"
    );
    Ok(())
}
