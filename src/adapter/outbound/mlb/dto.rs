//! MLB Stats API response types.
//!
//! Only the fields the usage table needs are modelled; everything else in the
//! payloads is ignored by serde.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::domain::{
    Game, GameId, GameStatus, PitchAppearance, PlayerId, RosterEntry, TeamCandidate, TeamId,
};

/// `GET /teams` response.
#[derive(Debug, Deserialize)]
pub struct TeamsResponse {
    #[serde(default)]
    pub teams: Vec<TeamDto>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamDto {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub team_name: String,
    #[serde(default)]
    pub location_name: String,
    #[serde(default)]
    pub short_name: String,
    #[serde(default)]
    pub abbreviation: String,
    #[serde(default)]
    pub file_code: String,
    #[serde(default)]
    pub team_code: String,
}

impl From<&TeamDto> for TeamCandidate {
    fn from(team: &TeamDto) -> Self {
        Self {
            id: TeamId::new(team.id),
            name: team.name.clone(),
            abbreviation: team.abbreviation.clone(),
        }
    }
}

/// `GET /teams/{id}/roster` response.
#[derive(Debug, Deserialize)]
pub struct RosterResponse {
    #[serde(default)]
    pub roster: Vec<RosterEntryDto>,
}

#[derive(Debug, Deserialize)]
pub struct RosterEntryDto {
    pub person: PersonDto,
    pub position: PositionDto,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonDto {
    pub id: u32,
    #[serde(default)]
    pub full_name: String,
}

#[derive(Debug, Deserialize)]
pub struct PositionDto {
    pub code: String,
}

impl From<RosterEntryDto> for RosterEntry {
    fn from(entry: RosterEntryDto) -> Self {
        Self {
            player_id: PlayerId::new(entry.person.id),
            full_name: entry.person.full_name,
            position_code: entry.position.code,
        }
    }
}

/// `GET /schedule` response: games grouped by date.
#[derive(Debug, Deserialize)]
pub struct ScheduleResponse {
    #[serde(default)]
    pub dates: Vec<ScheduleDateDto>,
}

#[derive(Debug, Deserialize)]
pub struct ScheduleDateDto {
    pub date: NaiveDate,
    #[serde(default)]
    pub games: Vec<ScheduleGameDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleGameDto {
    pub game_pk: u64,
    #[serde(default = "default_game_number")]
    pub game_number: u8,
    pub status: GameStatusDto,
}

const fn default_game_number() -> u8 {
    1
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStatusDto {
    pub abstract_game_state: String,
    #[serde(default)]
    pub detailed_state: String,
}

impl From<&GameStatusDto> for GameStatus {
    fn from(status: &GameStatusDto) -> Self {
        let detailed = status.detailed_state.as_str();
        match status.abstract_game_state.as_str() {
            "Final" if detailed.starts_with("Postponed") || detailed.starts_with("Cancelled") => {
                Self::Other(detailed.to_string())
            }
            "Final" => Self::Final,
            "Live" => Self::InProgress,
            _ => Self::Other(detailed.to_string()),
        }
    }
}

impl ScheduleResponse {
    /// Flatten the date groups into games, keeping schedule order.
    #[must_use]
    pub fn into_games(self) -> Vec<Game> {
        self.dates
            .into_iter()
            .flat_map(|day| {
                let date = day.date;
                day.games.into_iter().map(move |game| {
                    Game::new(
                        GameId::new(game.game_pk),
                        date,
                        game.game_number,
                        GameStatus::from(&game.status),
                    )
                })
            })
            .collect()
    }
}

/// `GET /game/{pk}/boxscore` response.
#[derive(Debug, Deserialize)]
pub struct BoxscoreResponse {
    pub teams: BoxscoreTeamsDto,
}

#[derive(Debug, Deserialize)]
pub struct BoxscoreTeamsDto {
    pub away: BoxscoreTeamDto,
    pub home: BoxscoreTeamDto,
}

#[derive(Debug, Deserialize)]
pub struct BoxscoreTeamDto {
    pub team: TeamRefDto,
    /// Pitcher ids in the order they entered the game.
    #[serde(default)]
    pub pitchers: Vec<u32>,
    /// Keyed `ID{player_id}`.
    #[serde(default)]
    pub players: HashMap<String, BoxscorePlayerDto>,
}

#[derive(Debug, Deserialize)]
pub struct TeamRefDto {
    pub id: u32,
}

#[derive(Debug, Default, Deserialize)]
pub struct BoxscorePlayerDto {
    #[serde(default)]
    pub stats: PlayerStatsDto,
}

#[derive(Debug, Default, Deserialize)]
pub struct PlayerStatsDto {
    #[serde(default)]
    pub pitching: PitchingStatsDto,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PitchingStatsDto {
    #[serde(alias = "pitchesThrown")]
    pub number_of_pitches: Option<u32>,
}

impl BoxscoreResponse {
    /// The side of the box score belonging to `team`, if it played.
    #[must_use]
    pub fn side_for(&self, team: TeamId) -> Option<&BoxscoreTeamDto> {
        if self.teams.away.team.id == team.get() {
            Some(&self.teams.away)
        } else if self.teams.home.team.id == team.get() {
            Some(&self.teams.home)
        } else {
            None
        }
    }
}

impl BoxscoreTeamDto {
    /// Pitching lines in listed order; a missing pitch count reads as 0.
    #[must_use]
    pub fn appearances(&self, game: GameId) -> Vec<PitchAppearance> {
        self.pitchers
            .iter()
            .enumerate()
            .map(|(position, &id)| {
                let pitches = self
                    .players
                    .get(&format!("ID{id}"))
                    .and_then(|player| player.stats.pitching.number_of_pitches)
                    .unwrap_or(0);
                PitchAppearance::new(PlayerId::new(id), game, pitches, position)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEDULE: &str = r#"{
        "totalGames": 4,
        "dates": [
            {"date": "2024-06-01", "games": [
                {"gamePk": 745001, "gameNumber": 1, "doubleHeader": "N",
                 "status": {"abstractGameState": "Final", "detailedState": "Final"}}
            ]},
            {"date": "2024-06-02", "games": [
                {"gamePk": 745002, "gameNumber": 1, "doubleHeader": "S",
                 "status": {"abstractGameState": "Final", "detailedState": "Final"}},
                {"gamePk": 745003, "gameNumber": 2, "doubleHeader": "S",
                 "status": {"abstractGameState": "Live", "detailedState": "In Progress"}}
            ]},
            {"date": "2024-06-03", "games": [
                {"gamePk": 745004,
                 "status": {"abstractGameState": "Final", "detailedState": "Postponed"}}
            ]}
        ]
    }"#;

    #[test]
    fn schedule_flattens_in_order() {
        let response: ScheduleResponse = serde_json::from_str(SCHEDULE).unwrap();
        let games = response.into_games();
        let ids: Vec<u64> = games.iter().map(|g| g.id.get()).collect();
        assert_eq!(ids, vec![745_001, 745_002, 745_003, 745_004]);
        assert_eq!(games[2].game_number, 2);
        assert_eq!(games[3].game_number, 1);
        assert_eq!(games[1].date, games[2].date);
    }

    #[test]
    fn schedule_status_mapping() {
        let response: ScheduleResponse = serde_json::from_str(SCHEDULE).unwrap();
        let games = response.into_games();
        assert_eq!(games[0].status, GameStatus::Final);
        assert_eq!(games[2].status, GameStatus::InProgress);
        assert_eq!(games[3].status, GameStatus::Other("Postponed".into()));
    }

    #[test]
    fn preview_games_are_other() {
        let status = GameStatusDto {
            abstract_game_state: "Preview".into(),
            detailed_state: "Scheduled".into(),
        };
        assert_eq!(GameStatus::from(&status), GameStatus::Other("Scheduled".into()));
    }

    #[test]
    fn empty_schedule_has_no_games() {
        let response: ScheduleResponse = serde_json::from_str(r#"{"totalGames": 0}"#).unwrap();
        assert!(response.into_games().is_empty());
    }

    #[test]
    fn roster_entries_convert() {
        let response: RosterResponse = serde_json::from_str(
            r#"{"roster": [
                {"person": {"id": 543037, "fullName": "Gerrit Cole"},
                 "jerseyNumber": "45",
                 "position": {"code": "1", "name": "Pitcher", "abbreviation": "P"}},
                {"person": {"id": 592450, "fullName": "Aaron Judge"},
                 "position": {"code": "9", "name": "Outfielder", "abbreviation": "RF"}}
            ]}"#,
        )
        .unwrap();
        let roster: Vec<RosterEntry> = response.roster.into_iter().map(Into::into).collect();
        assert_eq!(roster[0].player_id, PlayerId::new(543_037));
        assert_eq!(roster[0].full_name, "Gerrit Cole");
        assert_eq!(roster[1].position_code, "9");
    }

    const BOXSCORE: &str = r#"{
        "teams": {
            "away": {
                "team": {"id": 111, "name": "Boston Red Sox"},
                "pitchers": [1001, 1002],
                "players": {
                    "ID1001": {"stats": {"pitching": {"numberOfPitches": 97}}},
                    "ID1002": {"stats": {"pitching": {"pitchesThrown": 14}}}
                }
            },
            "home": {
                "team": {"id": 147, "name": "New York Yankees"},
                "pitchers": [2001, 2002, 2003],
                "players": {
                    "ID2001": {"stats": {"pitching": {"numberOfPitches": 88}}},
                    "ID2002": {"stats": {"pitching": {}}},
                    "ID2003": {"stats": {"pitching": {"numberOfPitches": 0}}}
                }
            }
        }
    }"#;

    #[test]
    fn boxscore_finds_home_side() {
        let box_score: BoxscoreResponse = serde_json::from_str(BOXSCORE).unwrap();
        let side = box_score.side_for(TeamId::new(147)).unwrap();
        let appearances = side.appearances(GameId::new(9));
        let summary: Vec<(u32, u32, usize)> = appearances
            .iter()
            .map(|a| (a.pitcher_id.get(), a.pitches, a.lineup_position))
            .collect();
        assert_eq!(summary, vec![(2001, 88, 0), (2002, 0, 1), (2003, 0, 2)]);
    }

    #[test]
    fn boxscore_reads_pitches_thrown_alias() {
        let box_score: BoxscoreResponse = serde_json::from_str(BOXSCORE).unwrap();
        let side = box_score.side_for(TeamId::new(111)).unwrap();
        let appearances = side.appearances(GameId::new(9));
        assert_eq!(appearances[1].pitches, 14);
    }

    #[test]
    fn boxscore_without_team_has_no_side() {
        let box_score: BoxscoreResponse = serde_json::from_str(BOXSCORE).unwrap();
        assert!(box_score.side_for(TeamId::new(121)).is_none());
    }
}
