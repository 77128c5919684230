//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`provider`] - In-memory [`StatsProvider`](crate::port::StatsProvider)
//!   backed by fixtures: `FixtureProvider`.
//! - [`domain`] - Builders for domain primitives: dates, games, appearances.

pub mod domain;
pub mod provider;
