//! The API client.

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::params::{
    LeagueListParams, PerformanceListParams, PlayerListParams, TeamListParams,
};
use crate::retry::{retryable_status, RetryPolicy};
use crate::schemas::{Counts, HealthMessage, League, Performance, Player, Team};
use reqwest::Response;
use serde::Serialize;
use std::time::Instant;

const HEALTH_CHECK_ENDPOINT: &str = "/";
const GET_PLAYERS_ENDPOINT: &str = "/v0/players/";
const GET_PERFORMANCES_ENDPOINT: &str = "/v0/performances/";
const GET_LEAGUES_ENDPOINT: &str = "/v0/leagues/";
const GET_TEAMS_ENDPOINT: &str = "/v0/teams/";
const GET_COUNTS_ENDPOINT: &str = "/v0/counts/";
const BULK_PLAYERS_ENDPOINT: &str = "/v0/bulk/players/";
const BULK_LEAGUES_ENDPOINT: &str = "/v0/bulk/leagues/";
const BULK_TEAMS_ENDPOINT: &str = "/v0/bulk/teams/";
const BULK_PERFORMANCES_ENDPOINT: &str = "/v0/bulk/performances/";
const BULK_TEAM_PLAYERS_ENDPOINT: &str = "/v0/bulk/team_players/";

pub struct Client {
    http: reqwest::Client,
    base_url: String,
    retry: RetryPolicy,
}

impl Client {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        let retry = if config.backoff {
            RetryPolicy::bounded_by(config.backoff_max_time)
        } else {
            RetryPolicy::disabled()
        };
        Ok(Client {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            retry,
        })
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Issues a GET, retrying transient failures (network errors, 429, 5xx)
    /// within the policy's elapsed-time budget. Non-transient statuses and
    /// exhausted budgets surface the last outcome as a typed error.
    async fn get<Q>(&self, url: &str, query: Option<&Q>) -> Result<Response>
    where
        Q: Serialize + ?Sized,
    {
        let started = Instant::now();
        let mut attempt: u32 = 0;
        loop {
            let mut request = self.http.get(url);
            if let Some(query) = query {
                request = request.query(query);
            }
            let outcome = request.send().await;

            let transient = match &outcome {
                Ok(response) => retryable_status(response.status()),
                Err(_) => true,
            };
            if !transient || !self.retry.enabled {
                return finish(outcome).await;
            }

            let delay = self.retry.delay_for_attempt(attempt);
            if started.elapsed() + delay > self.retry.max_elapsed {
                return finish(outcome).await;
            }
            tracing::debug!(
                url,
                attempt,
                delay_ms = delay.as_millis() as u64,
                "retrying transient failure"
            );
            tokio::time::sleep(delay).await;
            attempt += 1;
        }
    }

    async fn get_bytes(&self, endpoint: &str) -> Result<Vec<u8>> {
        let response = self.get(&self.url(endpoint), None::<&()>).await?;
        Ok(response.bytes().await?.to_vec())
    }

    pub async fn health_check(&self) -> Result<HealthMessage> {
        tracing::debug!("entered health check");
        let response = self.get(&self.url(HEALTH_CHECK_ENDPOINT), None::<&()>).await?;
        Ok(response.json().await?)
    }

    pub async fn get_players(&self, params: &PlayerListParams) -> Result<Vec<Player>> {
        tracing::debug!("entered get players");
        let response = self
            .get(&self.url(GET_PLAYERS_ENDPOINT), Some(params))
            .await?;
        Ok(response.json().await?)
    }

    pub async fn get_player(&self, player_id: i64) -> Result<Player> {
        tracing::debug!(player_id, "entered get player");
        let url = format!("{}{}", self.url(GET_PLAYERS_ENDPOINT), player_id);
        let response = self.get(&url, None::<&()>).await?;
        Ok(response.json().await?)
    }

    pub async fn get_performances(
        &self,
        params: &PerformanceListParams,
    ) -> Result<Vec<Performance>> {
        tracing::debug!("entered get performances");
        let response = self
            .get(&self.url(GET_PERFORMANCES_ENDPOINT), Some(params))
            .await?;
        Ok(response.json().await?)
    }

    pub async fn get_leagues(&self, params: &LeagueListParams) -> Result<Vec<League>> {
        tracing::debug!("entered get leagues");
        let response = self
            .get(&self.url(GET_LEAGUES_ENDPOINT), Some(params))
            .await?;
        Ok(response.json().await?)
    }

    pub async fn get_league(&self, league_id: i64) -> Result<League> {
        tracing::debug!(league_id, "entered get league");
        let url = format!("{}{}", self.url(GET_LEAGUES_ENDPOINT), league_id);
        let response = self.get(&url, None::<&()>).await?;
        Ok(response.json().await?)
    }

    pub async fn get_teams(&self, params: &TeamListParams) -> Result<Vec<Team>> {
        tracing::debug!("entered get teams");
        let response = self.get(&self.url(GET_TEAMS_ENDPOINT), Some(params)).await?;
        Ok(response.json().await?)
    }

    pub async fn get_counts(&self) -> Result<Counts> {
        tracing::debug!("entered get counts");
        let response = self.get(&self.url(GET_COUNTS_ENDPOINT), None::<&()>).await?;
        Ok(response.json().await?)
    }

    pub async fn get_bulk_player_file(&self) -> Result<Vec<u8>> {
        tracing::debug!("entered get bulk player file");
        self.get_bytes(BULK_PLAYERS_ENDPOINT).await
    }

    pub async fn get_bulk_league_file(&self) -> Result<Vec<u8>> {
        tracing::debug!("entered get bulk league file");
        self.get_bytes(BULK_LEAGUES_ENDPOINT).await
    }

    pub async fn get_bulk_team_file(&self) -> Result<Vec<u8>> {
        tracing::debug!("entered get bulk team file");
        self.get_bytes(BULK_TEAMS_ENDPOINT).await
    }

    pub async fn get_bulk_performance_file(&self) -> Result<Vec<u8>> {
        tracing::debug!("entered get bulk performance file");
        self.get_bytes(BULK_PERFORMANCES_ENDPOINT).await
    }

    pub async fn get_bulk_team_player_file(&self) -> Result<Vec<u8>> {
        tracing::debug!("entered get bulk team player file");
        self.get_bytes(BULK_TEAM_PLAYERS_ENDPOINT).await
    }
}

/// Maps the final outcome of a call: network errors and non-success
/// statuses (including anything outside the recognized ranges) become
/// typed errors; only 2xx passes through.
async fn finish(outcome: reqwest::Result<Response>) -> Result<Response> {
    let response = outcome?;
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ClientError::Api {
        status: status.as_u16(),
        body,
    })
}
