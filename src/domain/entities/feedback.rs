//! Kanji feedback entities - community corrections and their aggregate

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user's correction for one character. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KanjiCorrection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strokes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reading: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_form: Option<bool>,
}

impl KanjiCorrection {
    pub fn strokes(count: u32) -> Self {
        Self {
            strokes: Some(count),
            ..Self::default()
        }
    }

    pub fn with_reading(mut self, reading: impl Into<String>) -> Self {
        self.reading = Some(reading.into());
        self
    }

    pub fn with_old_form(mut self, old_form: bool) -> Self {
        self.old_form = Some(old_form);
        self
    }
}

/// A recorded correction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KanjiFeedback {
    pub character: char,
    #[serde(flatten)]
    pub correction: KanjiCorrection,
    pub recorded_at: DateTime<Utc>,
}

impl KanjiFeedback {
    pub fn new(character: char, correction: KanjiCorrection) -> Self {
        Self {
            character,
            correction,
            recorded_at: Utc::now(),
        }
    }
}

/// Aggregated view of every correction for one character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackSummary {
    pub character: char,
    pub submissions: usize,
    /// Most common suggested stroke count (ties: smaller count)
    pub suggested_strokes: Option<u32>,
    /// Most common suggested reading (ties: lexicographically first)
    pub suggested_reading: Option<String>,
    pub old_form_votes: usize,
    /// Share of old-form votes among submissions that voted at all
    pub old_form_ratio: f64,
}

/// Character that the stroke table does not know, with its report count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnsupportedCharacter {
    pub character: char,
    pub submissions: usize,
}
