//! Application services (use cases).
//!
//! These services orchestrate domain logic and coordinate adapters
//! to implement the application's use cases.

pub mod usage;
