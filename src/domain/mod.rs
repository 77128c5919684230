//! I/O-free core: calendar alignment, pitcher timelines and usage sums.
//!
//! Nothing in here performs I/O. Games and appearances come in through the
//! [`port`](crate::port) layer and a finished [`usage::UsageTable`] goes out
//! to whichever adapter renders it.

pub mod calendar;
pub mod error;
pub mod game;
pub mod id;
pub mod team;
pub mod timeline;
pub mod usage;

pub use calendar::{Calendar, CalendarSlot};
pub use game::{Game, GameStatus, PitchAppearance};
pub use id::{GameId, PlayerId, TeamId};
pub use team::{RosterEntry, TeamCandidate, TeamLookup};
pub use timeline::{PitchCell, PitcherTimeline};
pub use usage::{UsageRow, UsageTable, UsageWindows};
