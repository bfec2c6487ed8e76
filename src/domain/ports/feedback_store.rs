//! FeedbackStore port
//!
//! Record / query capability for community kanji corrections. The domain only
//! depends on this trait; infrastructure provides in-memory and TOML stores.
//!
//! Implementations must serialize concurrent `record` calls so no update is
//! lost. Reads may lag behind in-flight writes.

use std::path::PathBuf;

use crate::domain::entities::KanjiFeedback;

pub trait FeedbackStore: Send + Sync {
    /// Append one correction
    fn record(&self, feedback: KanjiFeedback) -> Result<(), FeedbackError>;

    /// Every correction recorded for `character`, oldest first
    fn entries_for(&self, character: char) -> Result<Vec<KanjiFeedback>, FeedbackError>;

    /// Number of corrections per character
    fn submission_counts(&self) -> Result<Vec<(char, usize)>, FeedbackError>;
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FeedbackError {
    #[error("Failed to access feedback store: {message}")]
    AccessError { message: String },

    #[error("Failed to serialize feedback: {message}")]
    SerializationError { message: String },

    #[error(
        "feedback file corrupted: {path}\n  → Fix: Move the file aside and re-record\n  → Details: {message}"
    )]
    Corrupted { path: PathBuf, message: String },

    #[error("feedback store lock poisoned")]
    Poisoned,
}
