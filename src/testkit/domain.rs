//! Builders for domain primitives used across tests.

use chrono::NaiveDate;

use crate::domain::{Game, GameId, GameStatus, PitchAppearance, PlayerId};

/// A date in June 2024, the month every fixture lives in.
///
/// # Panics
///
/// Panics if `d` is not a valid day of June.
pub fn june(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, d).expect("valid June date")
}

/// A final game on `date`.
pub fn final_game(id: u64, date: NaiveDate, game_number: u8) -> Game {
    Game::new(GameId::new(id), date, game_number, GameStatus::Final)
}

/// A game still being played on `date`.
pub fn live_game(id: u64, date: NaiveDate) -> Game {
    Game::new(GameId::new(id), date, 1, GameStatus::InProgress)
}

/// Appearances for `game` from `(pitcher, pitches)` pairs in listed order.
pub fn lines(game: u64, pitchers: &[(u32, u32)]) -> Vec<PitchAppearance> {
    pitchers
        .iter()
        .enumerate()
        .map(|(position, &(pitcher, pitches))| {
            PitchAppearance::new(PlayerId::new(pitcher), GameId::new(game), pitches, position)
        })
        .collect()
}
