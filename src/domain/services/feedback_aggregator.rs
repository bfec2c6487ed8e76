//! Feedback aggregation
//!
//! Pure functions over recorded corrections. Storage is behind the
//! `FeedbackStore` port.

use std::collections::BTreeMap;

use crate::domain::entities::{FeedbackSummary, KanjiFeedback, UnsupportedCharacter};
use crate::domain::services::StrokeTable;

/// Summarize every correction for one character. `None` when nothing was recorded.
pub fn summarize(character: char, entries: &[KanjiFeedback]) -> Option<FeedbackSummary> {
    if entries.is_empty() {
        return None;
    }

    let suggested_strokes = most_common(entries.iter().filter_map(|e| e.correction.strokes));
    let suggested_reading = most_common(
        entries
            .iter()
            .filter_map(|e| e.correction.reading.as_deref())
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .map(str::to_string),
    );

    let votes: Vec<bool> = entries.iter().filter_map(|e| e.correction.old_form).collect();
    let old_form_votes = votes.iter().filter(|v| **v).count();
    let old_form_ratio = if votes.is_empty() {
        0.0
    } else {
        old_form_votes as f64 / votes.len() as f64
    };

    Some(FeedbackSummary {
        character,
        submissions: entries.len(),
        suggested_strokes,
        suggested_reading,
        old_form_votes,
        old_form_ratio,
    })
}

/// Characters missing from `table` with at least `threshold` reports,
/// most reported first (ties by code point)
pub fn frequent_unsupported(
    table: &StrokeTable,
    counts: &[(char, usize)],
    threshold: usize,
) -> Vec<UnsupportedCharacter> {
    let mut found: Vec<UnsupportedCharacter> = counts
        .iter()
        .filter(|(c, n)| *n >= threshold.max(1) && !table.contains(*c))
        .map(|&(character, submissions)| UnsupportedCharacter {
            character,
            submissions,
        })
        .collect();
    found.sort_by(|a, b| {
        b.submissions
            .cmp(&a.submissions)
            .then(a.character.cmp(&b.character))
    });
    found
}

/// Most frequent value; ties go to the smallest
fn most_common<T: Ord>(values: impl Iterator<Item = T>) -> Option<T> {
    let mut counts: BTreeMap<T, usize> = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_default() += 1;
    }
    let best = counts.values().copied().max()?;
    counts.into_iter().find(|(_, n)| *n == best).map(|(v, _)| v)
}
