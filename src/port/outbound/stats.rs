//! Statistics provider port.
//!
//! Defines the interface for the external service that knows teams, rosters,
//! schedules and box scores.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::{Game, GameId, PitchAppearance, RosterEntry, TeamCandidate, TeamId};
use crate::error::Result;

/// Port for reading baseball data from an external statistics provider.
///
/// Implementations are plain request/response lookups: no caching, no
/// retries. Every failure propagates to the caller.
#[async_trait]
pub trait StatsProvider: Send + Sync {
    /// Teams in `league` for `season` whose name or code matches `query`.
    ///
    /// An empty list means no match; more than one is ambiguous.
    async fn lookup_teams(
        &self,
        query: &str,
        league: u32,
        season: i32,
    ) -> Result<Vec<TeamCandidate>>;

    /// The team's current roster, in the provider's order.
    async fn fetch_roster(&self, team: TeamId) -> Result<Vec<RosterEntry>>;

    /// Every game `team` has scheduled between `start` and `end` inclusive,
    /// in any status.
    async fn fetch_games(
        &self,
        team: TeamId,
        league: u32,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Game>>;

    /// Pitching lines for `team` in `game`, in listed order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DataConsistency`](crate::error::Error::DataConsistency)
    /// when `team` did not play in `game`.
    async fn fetch_appearances(&self, game: GameId, team: TeamId)
        -> Result<Vec<PitchAppearance>>;

    /// Human-readable provider name for logs.
    fn provider_name(&self) -> &'static str;
}
