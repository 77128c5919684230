//! MLB Stats API REST client.
//!
//! Read-only access to four endpoints:
//! - `/teams` for team lookup
//! - `/teams/{id}/roster` for the active roster
//! - `/schedule` for the games in a date range
//! - `/game/{pk}/boxscore` for pitch counts
//!
//! Requests are made one at a time with no retry; a failed request fails the
//! table build.

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client as HttpClient;
use tracing::{debug, info, warn};

use super::dto::{BoxscoreResponse, RosterResponse, ScheduleResponse, TeamsResponse};
use super::matching::match_teams;
use crate::domain::{Game, GameId, PitchAppearance, RosterEntry, TeamCandidate, TeamId};
use crate::error::{Error, Result};
use crate::infrastructure::config::provider::ProviderConfig;
use crate::port::StatsProvider;

/// HTTP client for the MLB Stats API.
pub struct MlbStatsClient {
    http: HttpClient,
    base_url: String,
}

impl MlbStatsClient {
    /// Create a client against `base_url` with default HTTP settings.
    ///
    /// # Arguments
    ///
    /// * `base_url` - API root including the version segment
    ///   (e.g., `https://statsapi.mlb.com/api/v1`)
    #[must_use]
    pub fn new(base_url: String) -> Self {
        Self {
            http: HttpClient::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    #[must_use]
    pub fn from_config(config: &ProviderConfig) -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .user_agent(concat!("bullpen/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|err| {
                warn!(error = %err, "Failed to build HTTP client, using defaults");
                HttpClient::new()
            });

        Self {
            http,
            base_url: config.api_url.trim_end_matches('/').to_string(),
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T>(&self, url: &str) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self.http.get(url).send().await?.error_for_status()?;
        Ok(response.json::<T>().await?)
    }

    fn teams_url(&self, league: u32, season: i32) -> String {
        format!(
            "{}/teams?sportIds={league}&season={season}&activeStatus=Y",
            self.base_url
        )
    }

    fn roster_url(&self, team: TeamId) -> String {
        format!("{}/teams/{team}/roster", self.base_url)
    }

    fn schedule_url(&self, team: TeamId, league: u32, start: NaiveDate, end: NaiveDate) -> String {
        format!(
            "{}/schedule?sportId={league}&teamId={team}&startDate={}&endDate={}",
            self.base_url,
            start.format("%Y-%m-%d"),
            end.format("%Y-%m-%d"),
        )
    }

    fn boxscore_url(&self, game: GameId) -> String {
        format!("{}/game/{game}/boxscore", self.base_url)
    }
}

#[async_trait]
impl StatsProvider for MlbStatsClient {
    async fn lookup_teams(
        &self,
        query: &str,
        league: u32,
        season: i32,
    ) -> Result<Vec<TeamCandidate>> {
        let url = self.teams_url(league, season);
        info!(url = %url, query, "Looking up team");

        let response: TeamsResponse = self.get_json(&url).await?;
        let candidates = match_teams(&response.teams, query);
        debug!(
            teams = response.teams.len(),
            matches = candidates.len(),
            "Matched teams"
        );

        Ok(candidates)
    }

    async fn fetch_roster(&self, team: TeamId) -> Result<Vec<RosterEntry>> {
        let url = self.roster_url(team);
        info!(url = %url, "Fetching roster");

        let response: RosterResponse = self.get_json(&url).await?;
        debug!(count = response.roster.len(), "Fetched roster");

        Ok(response.roster.into_iter().map(RosterEntry::from).collect())
    }

    async fn fetch_games(
        &self,
        team: TeamId,
        league: u32,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Game>> {
        let url = self.schedule_url(team, league, start, end);
        info!(url = %url, "Fetching schedule");

        let response: ScheduleResponse = self.get_json(&url).await?;
        let games = response.into_games();
        debug!(count = games.len(), "Fetched games");

        Ok(games)
    }

    async fn fetch_appearances(
        &self,
        game: GameId,
        team: TeamId,
    ) -> Result<Vec<PitchAppearance>> {
        let url = self.boxscore_url(game);
        info!(url = %url, "Fetching box score");

        let response: BoxscoreResponse = self.get_json(&url).await?;
        let side = response.side_for(team).ok_or(Error::DataConsistency {
            game_id: game,
            team_id: team,
        })?;
        let appearances = side.appearances(game);
        debug!(game_id = %game, count = appearances.len(), "Fetched pitching lines");

        Ok(appearances)
    }

    fn provider_name(&self) -> &'static str {
        "MLB Stats API"
    }
}
