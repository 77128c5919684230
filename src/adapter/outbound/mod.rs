//! Outbound adapters (driven side).

pub mod mlb;
