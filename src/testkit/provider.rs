//! Fixture-backed statistics provider.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::{
    Game, GameId, PitchAppearance, PlayerId, RosterEntry, TeamCandidate, TeamId,
};
use crate::error::{Error, Result};
use crate::port::StatsProvider;

/// In-memory [`StatsProvider`] for tests.
///
/// Team lookup is a case-insensitive substring match on name and
/// abbreviation. A scheduled game without recorded lines for the queried
/// team answers [`Error::DataConsistency`], like a box score that lists
/// neither side as that team.
#[derive(Debug, Default)]
pub struct FixtureProvider {
    teams: Vec<TeamCandidate>,
    rosters: HashMap<TeamId, Vec<RosterEntry>>,
    schedules: HashMap<TeamId, Vec<Game>>,
    lines: HashMap<(GameId, TeamId), Vec<PitchAppearance>>,
}

impl FixtureProvider {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_team(mut self, id: u32, name: &str, abbreviation: &str) -> Self {
        self.teams.push(TeamCandidate {
            id: TeamId::new(id),
            name: name.to_string(),
            abbreviation: abbreviation.to_string(),
        });
        self
    }

    /// Add a rostered player at `position_code`.
    #[must_use]
    pub fn with_player(mut self, team: u32, id: u32, name: &str, position_code: &str) -> Self {
        self.rosters
            .entry(TeamId::new(team))
            .or_default()
            .push(RosterEntry {
                player_id: PlayerId::new(id),
                full_name: name.to_string(),
                position_code: position_code.to_string(),
            });
        self
    }

    /// Add a rostered pitcher (position code `1`).
    #[must_use]
    pub fn with_pitcher(self, team: u32, id: u32, name: &str) -> Self {
        self.with_player(team, id, name, "1")
    }

    /// Schedule `game` for `team` with its pitching lines.
    #[must_use]
    pub fn with_game(mut self, team: u32, game: Game, lines: Vec<PitchAppearance>) -> Self {
        let team = TeamId::new(team);
        self.lines.insert((game.id, team), lines);
        self.schedules.entry(team).or_default().push(game);
        self
    }

    /// Schedule `game` for `team` without any box score side for it.
    #[must_use]
    pub fn with_unplayed_box_score(mut self, team: u32, game: Game) -> Self {
        self.schedules
            .entry(TeamId::new(team))
            .or_default()
            .push(game);
        self
    }
}

#[async_trait]
impl StatsProvider for FixtureProvider {
    async fn lookup_teams(
        &self,
        query: &str,
        _league: u32,
        _season: i32,
    ) -> Result<Vec<TeamCandidate>> {
        let needle = query.to_lowercase();
        Ok(self
            .teams
            .iter()
            .filter(|team| {
                team.name.to_lowercase().contains(&needle)
                    || team.abbreviation.to_lowercase() == needle
            })
            .cloned()
            .collect())
    }

    async fn fetch_roster(&self, team: TeamId) -> Result<Vec<RosterEntry>> {
        Ok(self.rosters.get(&team).cloned().unwrap_or_default())
    }

    async fn fetch_games(
        &self,
        team: TeamId,
        _league: u32,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Game>> {
        Ok(self
            .schedules
            .get(&team)
            .map(|games| {
                games
                    .iter()
                    .filter(|game| game.date >= start && game.date <= end)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn fetch_appearances(
        &self,
        game: GameId,
        team: TeamId,
    ) -> Result<Vec<PitchAppearance>> {
        self.lines
            .get(&(game, team))
            .cloned()
            .ok_or(Error::DataConsistency {
                game_id: game,
                team_id: team,
            })
    }

    fn provider_name(&self) -> &'static str {
        "fixture"
    }
}
