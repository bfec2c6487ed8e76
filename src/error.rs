//! Error types for Seimei
//!
//! Uses `thiserror` for library errors. Unresolved characters are not errors:
//! they are reported on the analysis itself.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::FeedbackError;

/// Result type alias for Seimei operations
pub type SeimeiResult<T> = Result<T, SeimeiError>;

/// Coarse error taxonomy for callers that only need to branch on the class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Caller input is malformed and should be corrected
    Validation,
    /// Input is well-formed but absent from every supported table
    Lookup,
    /// A built-in or supplied table violates its totality invariant
    DataIntegrity,
    /// Configuration, storage or filesystem failure
    Io,
}

/// Main error type for Seimei operations
#[derive(Error, Debug)]
pub enum SeimeiError {
    /// Surname or given name is empty after trimming
    #[error("{segment} must not be empty")]
    EmptySegment { segment: &'static str },

    /// Name segment exceeds the configured maximum length
    #[error("{segment} '{value}' has {len} characters (maximum {max})")]
    SegmentTooLong {
        segment: &'static str,
        value: String,
        len: usize,
        max: usize,
    },

    /// Whitespace or control character inside a name segment
    #[error("{segment} '{value}' contains invalid character {character:?}")]
    InvalidCharacter {
        segment: &'static str,
        value: String,
        character: char,
    },

    /// Iteration mark with nothing to repeat
    #[error("{segment} '{value}' starts with an iteration mark")]
    LeadingIterationMark { segment: &'static str, value: String },

    /// Birthdate is not a valid calendar date
    #[error("invalid birthdate '{input}': {reason}")]
    InvalidBirthdate { input: String, reason: String },

    /// Stroke count supplied by a caller or data file is out of range
    #[error("invalid stroke count {count} for '{character}'")]
    InvalidStrokeCount { character: char, count: u32 },

    /// Fortune lookup for a zero stroke count
    #[error("stroke count must be at least 1")]
    ZeroStrokeCount,

    /// No destiny number for the requested month
    #[error("no destiny number for {year}-{month:02} in the calendar table")]
    DestinyNumberNotFound { year: i32, month: u32 },

    /// Fortune table does not cover every number it claims to
    #[error("fortune table incomplete: {message}")]
    FortuneTableIncomplete { message: String },

    /// Destiny calendar data is malformed
    #[error("destiny calendar {source_name} is invalid: {message}")]
    CalendarIntegrity {
        source_name: String,
        message: String,
    },

    /// Stroke data (built-in or curated override file) is malformed
    #[error("stroke data {source_name} is invalid: {message}")]
    StrokeDataIntegrity {
        source_name: String,
        message: String,
    },

    /// Invalid configuration file
    #[error("invalid config in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// Feedback store failure
    #[error(transparent)]
    Feedback(#[from] FeedbackError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SeimeiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SeimeiError::EmptySegment { .. }
            | SeimeiError::SegmentTooLong { .. }
            | SeimeiError::InvalidCharacter { .. }
            | SeimeiError::LeadingIterationMark { .. }
            | SeimeiError::InvalidBirthdate { .. }
            | SeimeiError::InvalidStrokeCount { .. }
            | SeimeiError::ZeroStrokeCount => ErrorKind::Validation,
            SeimeiError::DestinyNumberNotFound { .. } => ErrorKind::Lookup,
            SeimeiError::FortuneTableIncomplete { .. }
            | SeimeiError::CalendarIntegrity { .. }
            | SeimeiError::StrokeDataIntegrity { .. } => ErrorKind::DataIntegrity,
            SeimeiError::Config { .. } | SeimeiError::Feedback(_) | SeimeiError::Io(_) => {
                ErrorKind::Io
            }
        }
    }

    pub fn is_validation(&self) -> bool {
        self.kind() == ErrorKind::Validation
    }
}
