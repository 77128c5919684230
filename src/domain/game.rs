//! Games and the pitching appearances recorded in them.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;

use super::id::{GameId, PlayerId};

/// Progress state of a scheduled game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum GameStatus {
    /// The game is over and its box score is settled.
    Final,
    /// The game is being played; pitch counts may still change.
    InProgress,
    /// Scheduled, postponed, cancelled or otherwise not counted.
    Other(String),
}

impl GameStatus {
    /// Whether a game in this state belongs in the usage table.
    #[must_use]
    pub fn is_countable(&self, include_in_progress: bool) -> bool {
        match self {
            Self::Final => true,
            Self::InProgress => include_in_progress,
            Self::Other(_) => false,
        }
    }
}

/// A single game played by the team of interest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Game {
    pub id: GameId,
    pub date: NaiveDate,
    /// 1 for a normal day; 1 or 2 on a doubleheader date.
    pub game_number: u8,
    pub status: GameStatus,
}

impl Game {
    #[must_use]
    pub fn new(id: GameId, date: NaiveDate, game_number: u8, status: GameStatus) -> Self {
        Self {
            id,
            date,
            game_number,
            status,
        }
    }
}

/// Sort games chronologically, doubleheader games by game number.
///
/// The sort is stable so games the provider already ordered keep their order.
pub fn sort_chronologically(games: &mut [Game]) {
    games.sort_by_key(|game| (game.date, game.game_number));
}

/// Collapse repeated schedule entries to one game per id.
///
/// A suspended game resumed on a later day is listed under both dates with
/// the same id; the later listing wins. First-seen order is kept otherwise.
#[must_use]
pub fn dedupe_by_id(games: Vec<Game>) -> Vec<Game> {
    let mut index: HashMap<GameId, usize> = HashMap::with_capacity(games.len());
    let mut unique: Vec<Game> = Vec::with_capacity(games.len());
    for game in games {
        match index.get(&game.id) {
            Some(&slot) => {
                if game.date >= unique[slot].date {
                    unique[slot] = game;
                }
            }
            None => {
                index.insert(game.id, unique.len());
                unique.push(game);
            }
        }
    }
    unique
}

/// One pitcher's line in one game's box score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PitchAppearance {
    pub pitcher_id: PlayerId,
    pub game_id: GameId,
    pub pitches: u32,
    /// Order in which the pitcher is listed for the team; 0 started the game.
    pub lineup_position: usize,
}

impl PitchAppearance {
    #[must_use]
    pub const fn new(
        pitcher_id: PlayerId,
        game_id: GameId,
        pitches: u32,
        lineup_position: usize,
    ) -> Self {
        Self {
            pitcher_id,
            game_id,
            pitches,
            lineup_position,
        }
    }
}

/// Drop placeholder entries and order the rest by lineup position.
///
/// After this the first appearance, if any, is the game's starter.
#[must_use]
pub fn normalize_appearances(mut appearances: Vec<PitchAppearance>) -> Vec<PitchAppearance> {
    appearances.retain(|appearance| !appearance.pitcher_id.is_reserved());
    appearances.sort_by_key(|appearance| appearance.lineup_position);
    appearances
}
