//! Errors raised when the usage pipeline is asked to break its invariants.
//!
//! # Examples
//!
//! ```
//! use bullpen::domain::error::UsageError;
//! use bullpen::domain::timeline::PitchCell;
//! use bullpen::domain::usage::trailing_sum;
//!
//! let cells = [PitchCell::Pitches(20), PitchCell::NoPitches];
//! let result = trailing_sum(&cells, 3);
//!
//! assert!(matches!(
//!     result,
//!     Err(UsageError::WindowExceedsTimeline { window: 3, len: 2 })
//! ));
//! ```

use thiserror::Error;

use super::id::PlayerId;

/// A trailing-window request that cannot be satisfied.
///
/// These signal a misconfigured window size, never a transient fault.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UsageError {
    /// Windows must cover at least one entry.
    #[error("trailing window must be at least 1 entry")]
    EmptyWindow,

    /// The window is longer than the timeline it sums over.
    #[error("cannot sum the last {window} entries of a {len}-entry timeline")]
    WindowExceedsTimeline {
        /// Requested window size.
        window: usize,
        /// Available timeline length.
        len: usize,
    },
}

/// A pitcher timeline that does not line up with the game list.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("timeline for pitcher {pitcher} has {found} entries, expected {expected}")]
pub struct AlignmentError {
    pub pitcher: PlayerId,
    pub expected: usize,
    pub found: usize,
}
