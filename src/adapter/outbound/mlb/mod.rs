//! MLB Stats API implementation of the statistics provider port.

pub mod client;
pub mod dto;
pub mod matching;

pub use client::MlbStatsClient;
