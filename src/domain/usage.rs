//! Ordering and trailing-window aggregation of aligned timelines.

use std::collections::HashMap;

use serde::Serialize;

use super::calendar::Calendar;
use super::error::UsageError;
use super::id::PlayerId;
use super::timeline::{PitchCell, PitcherTimeline};

/// Sum of pitch counts over the last `window` cells.
///
/// Sentinel cells count as nothing; they neither add pitches nor change which
/// cells fall inside the window.
///
/// # Errors
///
/// Returns [`UsageError::EmptyWindow`] for a zero window and
/// [`UsageError::WindowExceedsTimeline`] when `window > cells.len()`.
pub fn trailing_sum(cells: &[PitchCell], window: usize) -> Result<u32, UsageError> {
    if window == 0 {
        return Err(UsageError::EmptyWindow);
    }
    if window > cells.len() {
        return Err(UsageError::WindowExceedsTimeline {
            window,
            len: cells.len(),
        });
    }
    Ok(cells[cells.len() - window..]
        .iter()
        .filter_map(|cell| cell.pitches())
        .sum())
}

/// Order timelines by start count, relievers first.
///
/// The sort is stable: pitchers with equal start counts keep roster order.
pub fn sort_by_starts(timelines: &mut [PitcherTimeline]) {
    timelines.sort_by_key(PitcherTimeline::starts);
}

/// The short and long trailing windows summed for every pitcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UsageWindows {
    pub short: usize,
    pub long: usize,
}

/// One pitcher's row in the finished table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UsageRow {
    pub pitcher_id: PlayerId,
    pub name: String,
    pub cells: Vec<PitchCell>,
    /// Sort key only.
    #[serde(skip)]
    pub starts: u32,
    pub last_short: u32,
    pub last_long: u32,
}

impl UsageRow {
    /// Whether the pitcher started any game in the window.
    #[must_use]
    pub const fn is_starter(&self) -> bool {
        self.starts > 0
    }
}

/// A complete bullpen usage table: calendar columns and sorted pitcher rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UsageTable {
    pub calendar: Calendar,
    pub labels: Vec<String>,
    pub windows: UsageWindows,
    pub rows: Vec<UsageRow>,
}

impl UsageTable {
    /// Sort aligned timelines and compute both trailing sums.
    ///
    /// Pitchers missing from `names` are labelled with their id.
    ///
    /// # Errors
    ///
    /// Returns a [`UsageError`] if either window does not fit the calendar.
    /// An empty calendar (no games in range) is not an error: every row gets
    /// no cells and zero sums.
    pub fn assemble(
        calendar: Calendar,
        mut timelines: Vec<PitcherTimeline>,
        names: &HashMap<PlayerId, String>,
        windows: UsageWindows,
    ) -> Result<Self, UsageError> {
        sort_by_starts(&mut timelines);

        let rows = timelines
            .into_iter()
            .map(|timeline| {
                let (last_short, last_long) = if timeline.is_empty() {
                    (0, 0)
                } else {
                    (
                        trailing_sum(timeline.cells(), windows.short)?,
                        trailing_sum(timeline.cells(), windows.long)?,
                    )
                };
                let pitcher_id = timeline.pitcher_id();
                Ok(UsageRow {
                    pitcher_id,
                    name: names
                        .get(&pitcher_id)
                        .cloned()
                        .unwrap_or_else(|| pitcher_id.to_string()),
                    cells: timeline.cells().to_vec(),
                    starts: timeline.starts(),
                    last_short,
                    last_long,
                })
            })
            .collect::<Result<Vec<_>, UsageError>>()?;

        Ok(Self {
            labels: calendar.labels(),
            calendar,
            windows,
            rows,
        })
    }

    /// Index of the first row with at least one start, if any.
    #[must_use]
    pub fn first_starter(&self) -> Option<usize> {
        self.rows.iter().position(UsageRow::is_starter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::game::PitchAppearance;
    use crate::domain::id::GameId;
    use crate::domain::timeline::build_timelines;

    use crate::domain::timeline::PitchCell::{NoPitches, Pitches};

    #[test]
    fn trailing_sum_skips_sentinels() {
        let cells = [Pitches(20), NoPitches, Pitches(15), Pitches(9)];
        assert_eq!(trailing_sum(&cells, 3), Ok(24));
        assert_eq!(trailing_sum(&cells, 4), Ok(44));
        assert_eq!(trailing_sum(&cells, 1), Ok(9));
    }

    #[test]
    fn sentinels_sum_like_zeroes() {
        let cells = [NoPitches, Pitches(30), NoPitches, NoPitches, Pitches(12)];
        let zeroed: Vec<PitchCell> = cells
            .iter()
            .map(|c| Pitches(c.pitches().unwrap_or(0)))
            .collect();
        for window in 1..=cells.len() {
            assert_eq!(trailing_sum(&cells, window), trailing_sum(&zeroed, window));
        }
    }

    #[test]
    fn all_sentinel_window_sums_to_zero() {
        assert_eq!(trailing_sum(&[NoPitches, NoPitches], 2), Ok(0));
    }

    #[test]
    fn oversized_window_is_rejected() {
        let cells = [Pitches(1), Pitches(2)];
        for window in 3..10 {
            assert_eq!(
                trailing_sum(&cells, window),
                Err(UsageError::WindowExceedsTimeline { window, len: 2 })
            );
        }
    }

    #[test]
    fn zero_window_is_rejected() {
        assert_eq!(trailing_sum(&[Pitches(1)], 0), Err(UsageError::EmptyWindow));
    }

    fn timelines_with_starts(starts: &[(u32, u32)]) -> Vec<PitcherTimeline> {
        // one game per start; each listed pitcher starts `n` of them
        let mut games = Vec::new();
        for &(pitcher, n) in starts {
            for _ in 0..n {
                let game = GameId::new(games.len() as u64 + 1);
                games.push((
                    game,
                    vec![PitchAppearance::new(PlayerId::new(pitcher), game, 90, 0)],
                ));
            }
        }
        let ids: Vec<PlayerId> = starts.iter().map(|&(p, _)| PlayerId::new(p)).collect();
        build_timelines(&ids, &games)
    }

    fn order(timelines: &[PitcherTimeline]) -> Vec<u32> {
        timelines.iter().map(|t| t.pitcher_id().get()).collect()
    }

    #[test]
    fn relievers_sort_before_starters_in_roster_order() {
        let mut timelines = timelines_with_starts(&[(1, 2), (2, 0), (3, 1), (4, 0), (5, 1)]);
        sort_by_starts(&mut timelines);
        assert_eq!(order(&timelines), vec![2, 4, 3, 5, 1]);
    }

    #[test]
    fn sorting_is_idempotent() {
        let mut timelines = timelines_with_starts(&[(1, 1), (2, 0), (3, 2), (4, 0)]);
        sort_by_starts(&mut timelines);
        let once = order(&timelines);
        sort_by_starts(&mut timelines);
        assert_eq!(order(&timelines), once);
        let starts: Vec<u32> = timelines.iter().map(PitcherTimeline::starts).collect();
        assert!(starts.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn assemble_reports_window_too_large() {
        let timelines = timelines_with_starts(&[(1, 1), (2, 1)]);
        let calendar = Calendar::default();
        let result = UsageTable::assemble(
            calendar,
            timelines,
            &HashMap::new(),
            UsageWindows { short: 3, long: 5 },
        );
        assert_eq!(
            result,
            Err(UsageError::WindowExceedsTimeline { window: 3, len: 2 })
        );
    }

    #[test]
    fn assemble_falls_back_to_id_for_unnamed_pitchers() {
        let timelines = timelines_with_starts(&[(1, 1), (2, 1), (3, 0)]);
        let names = HashMap::from([(PlayerId::new(1), "Gerrit Cole".to_string())]);
        let table = UsageTable::assemble(
            Calendar::default(),
            timelines,
            &names,
            UsageWindows { short: 1, long: 2 },
        )
        .unwrap();
        let labels: Vec<&str> = table.rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(labels, vec!["3", "Gerrit Cole", "2"]);
        assert_eq!(table.first_starter(), Some(1));
    }

    #[test]
    fn assemble_with_no_games_gives_zero_sums() {
        let timelines = vec![PitcherTimeline::new(PlayerId::new(9))];
        let table = UsageTable::assemble(
            Calendar::default(),
            timelines,
            &HashMap::new(),
            UsageWindows { short: 3, long: 5 },
        )
        .unwrap();
        assert!(table.labels.is_empty());
        assert_eq!(table.rows[0].last_short, 0);
        assert_eq!(table.rows[0].last_long, 0);
        assert_eq!(table.first_starter(), None);
    }
}
