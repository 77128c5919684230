//! Infrastructure: configuration and logging.

pub mod config;
