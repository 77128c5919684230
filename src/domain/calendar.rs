//! The dense calendar axis shared by every timeline.
//!
//! Games are laid out in chronological order and any interior day without a
//! game gets a synthetic [`CalendarSlot::Gap`]. The same pass inserts a
//! sentinel cell into every pitcher timeline at the gap's index, so the
//! calendar and all timelines stay index-aligned after each insertion.

use chrono::NaiveDate;
use serde::Serialize;

use super::error::AlignmentError;
use super::game::Game;
use super::id::GameId;
use super::timeline::PitcherTimeline;

/// One column of the usage table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CalendarSlot {
    /// A game that was played.
    Game {
        game_id: GameId,
        date: NaiveDate,
        game_number: u8,
    },
    /// A day with no game.
    Gap { date: NaiveDate },
}

impl CalendarSlot {
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        match self {
            Self::Game { date, .. } | Self::Gap { date } => *date,
        }
    }

    #[must_use]
    pub const fn is_gap(&self) -> bool {
        matches!(self, Self::Gap { .. })
    }
}

impl From<&Game> for CalendarSlot {
    fn from(game: &Game) -> Self {
        Self::Game {
            game_id: game.id,
            date: game.date,
            game_number: game.game_number,
        }
    }
}

/// Ordered, gap-filled sequence of calendar slots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Calendar {
    slots: Vec<CalendarSlot>,
}

impl Calendar {
    /// Build the calendar for `games` without any timelines attached.
    ///
    /// `games` should already be chronological (see
    /// [`sort_chronologically`](super::game::sort_chronologically)).
    #[must_use]
    pub fn build(games: &[Game]) -> Self {
        let mut slots: Vec<CalendarSlot> = games.iter().map(CalendarSlot::from).collect();
        fill_gaps(&mut slots, &mut []);
        Self { slots }
    }

    /// Build the calendar for `games` and pad every timeline to match it.
    ///
    /// Each timeline must hold exactly one cell per game, in `games` order.
    ///
    /// # Errors
    ///
    /// Returns [`AlignmentError`] if a timeline's length differs from the
    /// number of games; no timeline is modified in that case.
    pub fn align(games: &[Game], timelines: &mut [PitcherTimeline]) -> Result<Self, AlignmentError> {
        if let Some(bad) = timelines.iter().find(|t| t.len() != games.len()) {
            return Err(AlignmentError {
                pitcher: bad.pitcher_id(),
                expected: games.len(),
                found: bad.len(),
            });
        }

        let mut slots: Vec<CalendarSlot> = games.iter().map(CalendarSlot::from).collect();
        fill_gaps(&mut slots, timelines);
        Ok(Self { slots })
    }

    #[must_use]
    pub fn slots(&self) -> &[CalendarSlot] {
        &self.slots
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Column labels: `MM-DD`, with `(1)`, `(2)`, ... appended when several
    /// slots share a date.
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        let mut labels = Vec::with_capacity(self.slots.len());
        let mut run_start = 0;
        while run_start < self.slots.len() {
            let date = self.slots[run_start].date();
            let run_len = self.slots[run_start..]
                .iter()
                .take_while(|slot| slot.date() == date)
                .count();
            let base = date.format("%m-%d").to_string();
            if run_len == 1 {
                labels.push(base);
            } else {
                labels.extend((1..=run_len).map(|k| format!("{base}({k})")));
            }
            run_start += run_len;
        }
        labels
    }
}

/// Insert one gap slot per missing day between consecutive distinct dates.
///
/// After inserting at `i + 1` the walk moves onto the new slot, so the next
/// comparison is between the gap day and the following game. A gap of `d`
/// missing days therefore takes `d` iterations, one day each.
fn fill_gaps(slots: &mut Vec<CalendarSlot>, timelines: &mut [PitcherTimeline]) {
    let mut i = 0;
    while i + 1 < slots.len() {
        let current = slots[i].date();
        let days_between = (slots[i + 1].date() - current).num_days();
        if days_between > 1 {
            let Some(next_day) = current.succ_opt() else {
                break;
            };
            slots.insert(i + 1, CalendarSlot::Gap { date: next_day });
            for timeline in timelines.iter_mut() {
                timeline.insert_gap(i + 1);
            }
        }
        i += 1;
    }
}
