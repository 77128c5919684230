//! Per-pitcher pitch count timelines.
//!
//! A timeline holds one [`PitchCell`] per game (and, after alignment, per
//! calendar slot). Every timeline built together grows in lock-step, so the
//! same index always refers to the same game across all pitchers.

use std::collections::HashMap;

use serde::Serialize;
use tracing::warn;

use super::game::{normalize_appearances, PitchAppearance};
use super::id::{GameId, PlayerId};

/// One entry of a pitcher timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "Option<u32>")]
pub enum PitchCell {
    /// Pitches thrown in the game, possibly zero.
    Pitches(u32),
    /// The pitcher did not appear (or there was no game).
    NoPitches,
}

impl PitchCell {
    /// Pitch count, or `None` for the sentinel.
    #[must_use]
    pub const fn pitches(self) -> Option<u32> {
        match self {
            Self::Pitches(n) => Some(n),
            Self::NoPitches => None,
        }
    }
}

impl From<PitchCell> for Option<u32> {
    fn from(cell: PitchCell) -> Self {
        cell.pitches()
    }
}

/// The pitch counts of one tracked pitcher across the queried games.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PitcherTimeline {
    pitcher_id: PlayerId,
    cells: Vec<PitchCell>,
    starts: u32,
}

impl PitcherTimeline {
    #[must_use]
    pub fn new(pitcher_id: PlayerId) -> Self {
        Self {
            pitcher_id,
            cells: Vec::new(),
            starts: 0,
        }
    }

    #[must_use]
    pub const fn pitcher_id(&self) -> PlayerId {
        self.pitcher_id
    }

    #[must_use]
    pub fn cells(&self) -> &[PitchCell] {
        &self.cells
    }

    /// Games started in the queried window. Only used for ordering.
    #[must_use]
    pub const fn starts(&self) -> u32 {
        self.starts
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Insert a sentinel at `index`, shifting later cells right.
    pub(crate) fn insert_gap(&mut self, index: usize) {
        self.cells.insert(index, PitchCell::NoPitches);
    }

    fn record(&mut self, pitches: u32, started: bool) {
        self.cells.push(PitchCell::Pitches(pitches));
        if started {
            self.starts += 1;
        }
    }

    fn pad_to(&mut self, len: usize) {
        while self.cells.len() < len {
            self.cells.push(PitchCell::NoPitches);
        }
    }
}

/// Build one timeline per tracked pitcher from per-game appearances.
///
/// `games` must be in the same order the calendar is built from. Each game
/// adds exactly one cell to every timeline: the pitch count for pitchers who
/// appeared, the sentinel for everyone else. Untracked pitchers are skipped
/// but still occupy their lineup position, so a game started by someone off
/// the roster credits no start. Timelines come back in `pitchers` order with
/// duplicate ids collapsed.
#[must_use]
pub fn build_timelines(
    pitchers: &[PlayerId],
    games: &[(GameId, Vec<PitchAppearance>)],
) -> Vec<PitcherTimeline> {
    let mut timelines: Vec<PitcherTimeline> = Vec::with_capacity(pitchers.len());
    let mut index: HashMap<PlayerId, usize> = HashMap::with_capacity(pitchers.len());
    for &pitcher in pitchers {
        if index.contains_key(&pitcher) {
            continue;
        }
        index.insert(pitcher, timelines.len());
        timelines.push(PitcherTimeline::new(pitcher));
    }

    for (game_index, (game_id, appearances)) in games.iter().enumerate() {
        let appearances = normalize_appearances(appearances.clone());
        for (rank, appearance) in appearances.iter().enumerate() {
            let Some(&slot) = index.get(&appearance.pitcher_id) else {
                continue;
            };
            let timeline = &mut timelines[slot];
            if timeline.len() > game_index {
                warn!(
                    game_id = %game_id,
                    pitcher_id = %appearance.pitcher_id,
                    "Pitcher listed twice in one game, keeping first line"
                );
                continue;
            }
            timeline.record(appearance.pitches, rank == 0);
        }

        for timeline in &mut timelines {
            timeline.pad_to(game_index + 1);
        }
    }

    timelines
}
