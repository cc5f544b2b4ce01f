//! Error type for the prayer_compass crate.

use crate::prayer::Prayer;

/// Error type for all fallible operations in the crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Reference data the crate was handed cannot be used, e.g. an empty zone table.
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration {
        /// What is wrong with the configuration.
        reason: String,
    },

    /// Text that is neither a 24-hour nor a 12-hour clock time.
    #[error("unrecognized time format: {input:?}")]
    InvalidTimeFormat {
        /// The offending input.
        input: String,
    },

    /// Hour or minute out of range.
    #[error("invalid time of day {hour}:{minute:02}")]
    InvalidTime { hour: u32, minute: u32 },

    /// The astronomical calculation produced no time for this prayer.
    #[error("no computable time for {prayer}")]
    UnresolvedTime {
        /// Prayer that could not be resolved.
        prayer: Prayer,
    },
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
