//! The bullpen usage table build.
//!
//! Fetches everything up front (team, roster, schedule, every box score),
//! then runs the pure domain pipeline: timelines, calendar alignment,
//! ordering and trailing sums. Any failure aborts the whole build.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;
use tracing::{debug, info};

use crate::domain::game::{dedupe_by_id, sort_chronologically};
use crate::domain::team::players_at_position;
use crate::domain::timeline::build_timelines;
use crate::domain::{
    Calendar, GameId, PitchAppearance, PlayerId, TeamId, TeamLookup, UsageTable,
};
use crate::error::{Error, Result};
use crate::infrastructure::config::table::TableConfig;
use crate::port::StatsProvider;

/// What to build a table for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageRequest {
    /// Team name, city, abbreviation or code.
    pub team: String,
    /// Provider league (sport) id; 1 is MLB.
    pub league: u32,
    /// Last day of the table. Also picks the season for team lookup.
    pub today: NaiveDate,
}

/// A built table plus the context it was built for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UsageReport {
    pub team_id: TeamId,
    pub league: u32,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub table: UsageTable,
}

/// Builds usage tables against a statistics provider.
pub struct UsageService {
    provider: Arc<dyn StatsProvider>,
    config: TableConfig,
}

impl UsageService {
    #[must_use]
    pub fn new(provider: Arc<dyn StatsProvider>, config: TableConfig) -> Self {
        Self { provider, config }
    }

    /// Resolve a team query to a single team id.
    ///
    /// # Errors
    ///
    /// [`Error::TeamNotFound`] when nothing matches and
    /// [`Error::AmbiguousTeam`] (carrying every candidate) when several do.
    /// No candidate is ever picked on the caller's behalf.
    pub async fn resolve_team(&self, query: &str, league: u32, season: i32) -> Result<TeamId> {
        let candidates = self.provider.lookup_teams(query, league, season).await?;
        match TeamLookup::from_candidates(candidates) {
            TeamLookup::Resolved(team_id) => Ok(team_id),
            TeamLookup::Ambiguous(candidates) => Err(Error::AmbiguousTeam {
                query: query.to_string(),
                candidates,
            }),
            TeamLookup::NotFound => Err(Error::TeamNotFound {
                query: query.to_string(),
            }),
        }
    }

    /// Build the usage table for `request`.
    ///
    /// # Errors
    ///
    /// Propagates lookup and provider errors, [`Error::DataConsistency`] for
    /// a box score missing the team, and [`Error::Usage`] when a trailing
    /// window is longer than the calendar.
    pub async fn build(&self, request: &UsageRequest) -> Result<UsageReport> {
        let team_id = self
            .resolve_team(&request.team, request.league, request.today.year())
            .await?;
        info!(
            provider = self.provider.provider_name(),
            team_id = %team_id,
            query = %request.team,
            "Resolved team"
        );

        let roster = self.provider.fetch_roster(team_id).await?;
        let tracked = players_at_position(&roster, &self.config.position_code);
        let pitcher_ids: Vec<PlayerId> = tracked.iter().map(|entry| entry.player_id).collect();
        let names: HashMap<PlayerId, String> = tracked
            .iter()
            .map(|entry| (entry.player_id, entry.full_name.clone()))
            .collect();
        debug!(pitchers = pitcher_ids.len(), "Tracking roster pitchers");

        let end = request.today;
        let start = end
            .checked_sub_days(Days::new(u64::from(self.config.num_days)))
            .unwrap_or(NaiveDate::MIN);
        let games = self
            .provider
            .fetch_games(team_id, request.league, start, end)
            .await?;
        let fetched = games.len();
        let mut games = dedupe_by_id(games);
        games.retain(|game| game.status.is_countable(self.config.include_in_progress));
        sort_chronologically(&mut games);
        debug!(fetched, kept = games.len(), "Filtered games by status");

        let mut per_game: Vec<(GameId, Vec<PitchAppearance>)> = Vec::with_capacity(games.len());
        for game in &games {
            let appearances = self.provider.fetch_appearances(game.id, team_id).await?;
            per_game.push((game.id, appearances));
        }

        let mut timelines = build_timelines(&pitcher_ids, &per_game);
        let calendar = Calendar::align(&games, &mut timelines)?;
        info!(
            games = games.len(),
            columns = calendar.len(),
            pitchers = timelines.len(),
            "Aligned pitcher timelines"
        );

        let table = UsageTable::assemble(calendar, timelines, &names, self.config.windows())?;

        Ok(UsageReport {
            team_id,
            league: request.league,
            start,
            end,
            table,
        })
    }
}
