//! Bullpen - recent pitcher workload as a calendar-aligned usage table.
//!
//! Turns a team's recent box scores into one row per rostered pitcher and one
//! column per calendar day, with pitch counts, rest days, doubleheaders and
//! trailing-window totals. Relievers are listed before starters.
//!
//! # Architecture
//!
//! - [`domain`] - Pure pipeline: calendar gap filling, timeline alignment,
//!   start-count ordering and trailing sums
//! - [`port`] - The [`StatsProvider`](port::StatsProvider) trait the pipeline
//!   reads games and box scores through
//! - [`adapter`] - MLB Stats API client (outbound) and the CLI (inbound)
//! - [`application`] - The table build use case
//! - [`infrastructure`] - Configuration loading and logging
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```
//! use bullpen::domain::timeline::PitchCell;
//! use bullpen::domain::usage::trailing_sum;
//!
//! let cells = [PitchCell::Pitches(20), PitchCell::NoPitches, PitchCell::Pitches(15)];
//! assert_eq!(trailing_sum(&cells, 2), Ok(15));
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
