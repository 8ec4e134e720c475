//! Query-layer tests against the seeded reference dataset.

use chrono::NaiveDate;
use gridiron_api::service::query;
use gridiron_api::{
    fixtures, LeagueListParams, PerformanceListParams, PlayerListParams, TeamListParams,
};
use sqlx::SqlitePool;

fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()
}

async fn seeded_pool() -> SqlitePool {
    let pool = gridiron_api::connect_memory().await.unwrap();
    gridiron_api::ensure_tables(&pool).await.unwrap();
    fixtures::seed_demo_data(&pool).await.unwrap();
    pool
}

#[tokio::test]
async fn get_player_by_id() {
    let pool = seeded_pool().await;
    let player = query::get_player(&pool, 101).await.unwrap().unwrap();
    assert_eq!(player.player_id, 101);
}

#[tokio::test]
async fn get_player_missing_id_is_none() {
    let pool = seeded_pool().await;
    assert!(query::get_player(&pool, 99999).await.unwrap().is_none());
}

#[tokio::test]
async fn get_players_with_watermark() {
    let pool = seeded_pool().await;
    let params = PlayerListParams {
        limit: Some(10000),
        minimum_last_changed_date: Some(test_date()),
        ..Default::default()
    };
    let players = query::get_players(&pool, &params).await.unwrap();
    assert_eq!(players.len(), 550);
}

#[tokio::test]
async fn get_players_by_name() {
    let pool = seeded_pool().await;
    let params = PlayerListParams {
        first_name: Some("Bryce".to_string()),
        last_name: Some("Young".to_string()),
        ..Default::default()
    };
    let players = query::get_players(&pool, &params).await.unwrap();
    assert_eq!(players.len(), 1);
    assert_eq!(players[0].player_id, 102);
}

#[tokio::test]
async fn empty_string_name_filter_matches_everything() {
    let pool = seeded_pool().await;
    let params = PlayerListParams {
        limit: Some(10000),
        first_name: Some(String::new()),
        last_name: Some(String::new()),
        ..Default::default()
    };
    let players = query::get_players(&pool, &params).await.unwrap();
    assert_eq!(players.len(), 550);
}

#[tokio::test]
async fn get_all_performances() {
    let pool = seeded_pool().await;
    let params = PerformanceListParams {
        limit: Some(10000),
        ..Default::default()
    };
    let performances = query::get_performances(&pool, &params).await.unwrap();
    assert_eq!(performances.len(), 1100);
}

#[tokio::test]
async fn performance_watermark_keeps_half_the_table() {
    let pool = seeded_pool().await;
    let params = PerformanceListParams {
        limit: Some(10000),
        minimum_last_changed_date: Some(test_date()),
        ..Default::default()
    };
    let filtered = query::get_performances(&pool, &params).await.unwrap();
    assert_eq!(filtered.len(), 550);
    for performance in &filtered {
        assert!(performance.last_changed_date >= test_date());
    }
}

#[tokio::test]
async fn watermark_is_monotonic() {
    let pool = seeded_pool().await;
    let mut previous = usize::MAX;
    for day in [1, 10, 20] {
        let params = PerformanceListParams {
            limit: Some(10000),
            minimum_last_changed_date: NaiveDate::from_ymd_opt(2024, 4, day),
            ..Default::default()
        };
        let count = query::get_performances(&pool, &params).await.unwrap().len();
        assert!(count <= previous);
        previous = count;
    }
}

#[tokio::test]
async fn get_leagues_hydrates_teams() {
    let pool = seeded_pool().await;
    let params = LeagueListParams {
        limit: Some(10000),
        minimum_last_changed_date: Some(test_date()),
        ..Default::default()
    };
    let leagues = query::get_leagues(&pool, &params).await.unwrap();
    assert_eq!(leagues.len(), 5);
    let team_total: usize = leagues.iter().map(|l| l.teams.len()).sum();
    assert_eq!(team_total, 20);
}

#[tokio::test]
async fn get_league_by_id_with_teams() {
    let pool = seeded_pool().await;
    let league = query::get_league(&pool, 5001).await.unwrap().unwrap();
    assert_eq!(league.league_id, 5001);
    assert_eq!(league.teams.len(), 8);
    assert!(query::get_league(&pool, 9999).await.unwrap().is_none());
}

#[tokio::test]
async fn get_teams_hydrates_rosters() {
    let pool = seeded_pool().await;
    let params = TeamListParams {
        limit: Some(10000),
        minimum_last_changed_date: Some(test_date()),
        ..Default::default()
    };
    let teams = query::get_teams(&pool, &params).await.unwrap();
    assert_eq!(teams.len(), 20);
    for team in &teams {
        assert_eq!(team.players.len(), 7);
    }
}

#[tokio::test]
async fn get_teams_filtered_by_league() {
    let pool = seeded_pool().await;
    let params = TeamListParams {
        limit: Some(10000),
        league_id: Some(5001),
        ..Default::default()
    };
    let teams = query::get_teams(&pool, &params).await.unwrap();
    assert_eq!(teams.len(), 8);
    for team in &teams {
        assert_eq!(team.league_id, 5001);
    }
}

#[tokio::test]
async fn get_teams_filtered_by_name() {
    let pool = seeded_pool().await;
    let all = query::get_teams(
        &pool,
        &TeamListParams {
            limit: Some(10000),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    let wanted = all[0].team_name.clone();

    let params = TeamListParams {
        team_name: Some(wanted.clone()),
        ..Default::default()
    };
    let teams = query::get_teams(&pool, &params).await.unwrap();
    assert_eq!(teams.len(), 1);
    assert_eq!(teams[0].team_name, wanted);
}

#[tokio::test]
async fn pagination_partitions_without_gaps_or_overlaps() {
    let pool = seeded_pool().await;
    let first = query::get_players(
        &pool,
        &PlayerListParams {
            skip: Some(0),
            limit: Some(10),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    let second = query::get_players(
        &pool,
        &PlayerListParams {
            skip: Some(10),
            limit: Some(10),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    let both = query::get_players(
        &pool,
        &PlayerListParams {
            skip: Some(0),
            limit: Some(20),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let paged: Vec<i64> = first
        .iter()
        .chain(second.iter())
        .map(|p| p.player_id)
        .collect();
    let whole: Vec<i64> = both.iter().map(|p| p.player_id).collect();
    assert_eq!(paged, whole);
    assert_eq!(paged.len(), 20);
}

#[tokio::test]
async fn skip_past_the_end_is_empty() {
    let pool = seeded_pool().await;
    let params = PlayerListParams {
        skip: Some(100000),
        limit: Some(10),
        ..Default::default()
    };
    let players = query::get_players(&pool, &params).await.unwrap();
    assert!(players.is_empty());
}

#[tokio::test]
async fn counts_ignore_filters_and_match_unbounded_listing() {
    let pool = seeded_pool().await;
    assert_eq!(query::get_player_count(&pool).await.unwrap(), 550);
    assert_eq!(query::get_team_count(&pool).await.unwrap(), 20);
    assert_eq!(query::get_league_count(&pool).await.unwrap(), 5);

    let everyone = query::get_players(
        &pool,
        &PlayerListParams {
            limit: Some(1000000),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(everyone.len() as i64, query::get_player_count(&pool).await.unwrap());
}
