use thiserror::Error;

use crate::domain::error::{AlignmentError, UsageError};
use crate::domain::id::{GameId, TeamId};
use crate::domain::team::TeamCandidate;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Usage(#[from] UsageError),

    #[error(transparent)]
    Alignment(#[from] AlignmentError),

    #[error("no team matches '{query}'")]
    TeamNotFound { query: String },

    #[error("'{query}' matches {} teams: {}", candidates.len(), list_candidates(candidates))]
    AmbiguousTeam {
        query: String,
        candidates: Vec<TeamCandidate>,
    },

    #[error("team {team_id} is neither home nor away in game {game_id}")]
    DataConsistency { game_id: GameId, team_id: TeamId },

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

fn list_candidates(candidates: &[TeamCandidate]) -> String {
    candidates
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
