//! Domain identifier types with proper encapsulation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Team identifier - newtype for type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamId(u32);

impl TeamId {
    /// Create a new `TeamId` from the provider's numeric id.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw numeric id.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for TeamId {
    fn from(id: u32) -> Self {
        Self::new(id)
    }
}

/// Player identifier.
///
/// Id `0` is reserved by the provider for unfilled slots and never names a
/// real player; see [`PlayerId::is_reserved`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(u32);

impl PlayerId {
    /// The reserved "no pitcher" id.
    pub const RESERVED: Self = Self(0);

    /// Create a new `PlayerId` from the provider's numeric id.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw numeric id.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// True for the reserved placeholder id.
    #[must_use]
    pub const fn is_reserved(self) -> bool {
        self.0 == Self::RESERVED.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for PlayerId {
    fn from(id: u32) -> Self {
        Self::new(id)
    }
}

/// Game identifier (the provider's game primary key).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GameId(u64);

impl GameId {
    /// Create a new `GameId`.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw numeric id.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for GameId {
    fn from(id: u64) -> Self {
        Self::new(id)
    }
}
