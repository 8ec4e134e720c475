//! HTTP-level tests: the full router driven in-process.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use gridiron_api::{fixtures, AppState};
use serde_json::Value;
use tower::ServiceExt;

async fn test_app() -> Router {
    let pool = gridiron_api::connect_memory().await.unwrap();
    gridiron_api::ensure_tables(&pool).await.unwrap();
    fixtures::seed_demo_data(&pool).await.unwrap();
    gridiron_api::app_router(AppState { pool })
}

async fn get_raw(app: &Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, bytes.to_vec())
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let (status, bytes) = get_raw(app, uri).await;
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn health_check() {
    let app = test_app().await;
    let (status, body) = get_json(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!({"message": "API health check successful"}));
}

#[tokio::test]
async fn read_players() {
    let app = test_app().await;
    let (status, body) = get_json(&app, "/v0/players/?skip=0&limit=10000").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 550);
}

#[tokio::test]
async fn read_players_by_name() {
    let app = test_app().await;
    let (status, body) = get_json(&app, "/v0/players/?first_name=Bryce&last_name=Young").await;
    assert_eq!(status, StatusCode::OK);
    let players = body.as_array().unwrap();
    assert_eq!(players.len(), 1);
    assert_eq!(players[0]["player_id"], 102);
}

#[tokio::test]
async fn read_player_by_id() {
    let app = test_app().await;
    let (status, body) = get_json(&app, "/v0/players/101").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["player_id"], 101);
}

#[tokio::test]
async fn read_missing_player_is_404() {
    let app = test_app().await;
    let (status, body) = get_json(&app, "/v0/players/99999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "not_found");
}

#[tokio::test]
async fn read_performances() {
    let app = test_app().await;
    let (status, body) = get_json(&app, "/v0/performances/?skip=0&limit=10000").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1100);
}

#[tokio::test]
async fn read_performances_by_date() {
    let app = test_app().await;
    let (status, body) = get_json(
        &app,
        "/v0/performances/?skip=0&limit=10000&minimum_last_changed_date=2024-04-01",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 550);
}

#[tokio::test]
async fn read_leagues() {
    let app = test_app().await;
    let (status, body) = get_json(&app, "/v0/leagues/?skip=0&limit=500").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn read_league_by_id_includes_teams() {
    let app = test_app().await;
    let (status, body) = get_json(&app, "/v0/leagues/5001").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["league_id"], 5001);
    assert_eq!(body["teams"].as_array().unwrap().len(), 8);
}

#[tokio::test]
async fn read_missing_league_is_404() {
    let app = test_app().await;
    let (status, _) = get_json(&app, "/v0/leagues/9999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn read_teams_includes_rosters() {
    let app = test_app().await;
    let (status, body) = get_json(&app, "/v0/teams/?skip=0&limit=500").await;
    assert_eq!(status, StatusCode::OK);
    let teams = body.as_array().unwrap();
    assert_eq!(teams.len(), 20);
    for team in teams {
        assert_eq!(team["players"].as_array().unwrap().len(), 7);
    }
}

#[tokio::test]
async fn read_teams_filtered_by_league_id() {
    let app = test_app().await;
    let (status, body) = get_json(&app, "/v0/teams/?league_id=5001&limit=500").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 8);
}

#[tokio::test]
async fn counts() {
    let app = test_app().await;
    let (status, body) = get_json(&app, "/v0/counts/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["league_count"], 5);
    assert_eq!(body["team_count"], 20);
    assert_eq!(body["player_count"], 550);
}

#[tokio::test]
async fn pagination_pages_partition_the_listing() {
    let app = test_app().await;
    let (_, first) = get_json(&app, "/v0/players/?skip=0&limit=10").await;
    let (_, second) = get_json(&app, "/v0/players/?skip=10&limit=10").await;
    let (_, both) = get_json(&app, "/v0/players/?skip=0&limit=20").await;

    let mut paged = first.as_array().unwrap().clone();
    paged.extend(second.as_array().unwrap().clone());
    assert_eq!(&paged, both.as_array().unwrap());
}

#[tokio::test]
async fn malformed_parameters_are_rejected() {
    let app = test_app().await;
    let (status, _) = get_json(&app, "/v0/players/?limit=-1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = get_json(&app, "/v0/players/?minimum_last_changed_date=notadate").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn bulk_player_file() {
    let app = test_app().await;
    let (status, bytes) = get_raw(&app, "/v0/bulk/players/").await;
    assert_eq!(status, StatusCode::OK);

    let text = String::from_utf8(bytes).unwrap();
    let rows: Vec<&str> = text.lines().collect();
    assert_eq!(rows.len(), 551);
    assert_eq!(
        rows[0],
        "player_id,gsis_id,first_name,last_name,position,last_changed_date"
    );
}

#[tokio::test]
async fn bulk_league_file() {
    let app = test_app().await;
    let (status, bytes) = get_raw(&app, "/v0/bulk/leagues/").await;
    assert_eq!(status, StatusCode::OK);

    let text = String::from_utf8(bytes).unwrap();
    let rows: Vec<&str> = text.lines().collect();
    assert_eq!(rows.len(), 6);
    assert_eq!(rows[0], "league_id,league_name,scoring_type,last_changed_date");
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = test_app().await;
    let (status, body) = get_json(&app, "/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["openapi"].is_string());
    assert!(body["paths"]["/v0/players/"].is_object());
}
