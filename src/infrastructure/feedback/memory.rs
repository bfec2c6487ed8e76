//! In-memory FeedbackStore

use std::collections::BTreeMap;
use std::sync::Mutex;

use crate::domain::entities::KanjiFeedback;
use crate::domain::ports::{FeedbackError, FeedbackStore};

#[derive(Debug, Default)]
pub struct InMemoryFeedbackStore {
    entries: Mutex<Vec<KanjiFeedback>>,
}

impl InMemoryFeedbackStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FeedbackStore for InMemoryFeedbackStore {
    fn record(&self, feedback: KanjiFeedback) -> Result<(), FeedbackError> {
        let mut entries = self.entries.lock().map_err(|_| FeedbackError::Poisoned)?;
        entries.push(feedback);
        Ok(())
    }

    fn entries_for(&self, character: char) -> Result<Vec<KanjiFeedback>, FeedbackError> {
        let entries = self.entries.lock().map_err(|_| FeedbackError::Poisoned)?;
        Ok(entries
            .iter()
            .filter(|e| e.character == character)
            .cloned()
            .collect())
    }

    fn submission_counts(&self) -> Result<Vec<(char, usize)>, FeedbackError> {
        let entries = self.entries.lock().map_err(|_| FeedbackError::Poisoned)?;
        let mut counts: BTreeMap<char, usize> = BTreeMap::new();
        for entry in entries.iter() {
            *counts.entry(entry.character).or_default() += 1;
        }
        Ok(counts.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::KanjiCorrection;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn record_and_query() {
        let store = InMemoryFeedbackStore::new();
        store
            .record(KanjiFeedback::new('髙', KanjiCorrection::strokes(11)))
            .unwrap();
        store
            .record(KanjiFeedback::new('燚', KanjiCorrection::strokes(16)))
            .unwrap();
        store
            .record(KanjiFeedback::new('髙', KanjiCorrection::strokes(10)))
            .unwrap();

        let taka = store.entries_for('髙').unwrap();
        assert_eq!(taka.len(), 2);
        assert_eq!(taka[0].correction.strokes, Some(11));
        assert_eq!(store.submission_counts().unwrap(), vec![('燚', 1), ('髙', 2)]);
    }

    #[test]
    fn concurrent_records_are_not_lost() {
        let store = Arc::new(InMemoryFeedbackStore::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for _ in 0..50 {
                        store
                            .record(KanjiFeedback::new('燚', KanjiCorrection::strokes(i + 1)))
                            .unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(store.len(), 400);
    }
}
