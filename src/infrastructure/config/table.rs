//! Usage table settings passed explicitly into every table build.

use serde::Deserialize;

use crate::domain::usage::UsageWindows;

/// Shape of the usage table.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TableConfig {
    /// Days looked back from today when fetching the schedule.
    pub num_days: u32,
    /// Short trailing-sum window, in calendar slots.
    pub last_short: usize,
    /// Long trailing-sum window, in calendar slots.
    pub last_long: usize,
    /// Shown for days without pitches and for zero sums.
    pub no_pitches: String,
    /// Count games that are still being played.
    pub include_in_progress: bool,
    /// Roster position code of the players to track.
    pub position_code: String,
}

impl TableConfig {
    #[must_use]
    pub const fn windows(&self) -> UsageWindows {
        UsageWindows {
            short: self.last_short,
            long: self.last_long,
        }
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            num_days: 7,
            last_short: 3,
            last_long: 5,
            no_pitches: "-".into(),
            include_in_progress: true,
            position_code: "1".into(),
        }
    }
}
