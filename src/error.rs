//! Error handling for wavetrack
//!
//! One error type covers the library surface. Note that
//! [`Track::delete_range`](crate::track::Track::delete_range) deliberately
//! does *not* use this type: an out-of-bounds delete is a routine condition
//! reported as `false`, not an error.

use thiserror::Error;

/// Result type alias for wavetrack operations
pub type Result<T> = std::result::Result<T, TrackError>;

/// Main error type for wavetrack operations
#[derive(Error, Debug)]
pub enum TrackError {
    // File Errors
    #[error("File not found: {path}")]
    FileNotFound {
        path: String,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("Invalid audio file: {reason}")]
    InvalidAudio {
        reason: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Unsupported audio format: {format}")]
    UnsupportedFormat { format: String },

    // Edit Errors
    #[error("Insert position {position} is beyond track length {length}")]
    PositionOutOfBounds { position: usize, length: usize },

    // Detection Errors
    #[error("Pattern is empty: an empty pattern would match at every position")]
    EmptyPattern,

    // I/O Errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TrackError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            TrackError::FileNotFound { .. } => "FILE_NOT_FOUND",
            TrackError::InvalidAudio { .. } => "INVALID_AUDIO",
            TrackError::UnsupportedFormat { .. } => "UNSUPPORTED_FORMAT",
            TrackError::PositionOutOfBounds { .. } => "POSITION_OUT_OF_BOUNDS",
            TrackError::EmptyPattern => "EMPTY_PATTERN",
            TrackError::Io(_) => "IO_ERROR",
        }
    }
}
