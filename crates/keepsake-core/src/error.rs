//! Error types for Keepsake

use thiserror::Error;

/// Main error type for Keepsake operations
#[derive(Error, Debug)]
pub enum KeepsakeError {
    /// Month/day pair that exists in no calendar year
    #[error("Invalid calendar date: month {month}, day {day}")]
    InvalidDate { month: u32, day: u32 },

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
