//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!   ┌───────────┐      ┌──────────────────────┐      ┌─────────────────┐
//!   │ CLI       │ ───▶ │ application::usage   │ ───▶ │ StatsProvider   │
//!   │ (inbound) │      │ domain pipeline      │      │ (MLB Stats API) │
//!   └───────────┘      └──────────────────────┘      └─────────────────┘
//! ```

pub mod outbound;

pub use outbound::stats::StatsProvider;
