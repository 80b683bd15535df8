//! Error types for section diffing.

use core::fmt;

use thiserror::Error;

/// Which input sequence a window refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The first (old) sequence.
    Old,
    /// The second (new) sequence.
    New,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Old => write!(f, "old"),
            Self::New => write!(f, "new"),
        }
    }
}

/// Errors reported by the diff engine and the edit-script utilities.
///
/// All of these are raised before any section is produced.
#[derive(Debug, Error)]
pub enum DiffError {
    /// A window is reversed or reaches past the end of its sequence.
    #[error("Invalid {side} window {start}..{end} for sequence of length {len}")]
    InvalidRange {
        /// The sequence the window belongs to.
        side: Side,
        /// Requested start index.
        start: usize,
        /// Requested end index (exclusive).
        end: usize,
        /// Length of the sequence.
        len: usize,
    },

    /// The window pair is larger than the configured search limit.
    #[error("Window too large: {cells} comparison cells (limit {limit})")]
    WindowTooLarge {
        /// Product of both window lengths.
        cells: usize,
        /// Configured maximum.
        limit: usize,
    },

    /// An edit script does not describe the given inputs.
    #[error("Edit script does not match inputs: {0}")]
    ScriptMismatch(String),

    /// Settings could not be loaded.
    #[error("Failed to load diff settings: {0}")]
    Settings(#[from] config::ConfigError),
}
