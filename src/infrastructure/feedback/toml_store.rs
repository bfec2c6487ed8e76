//! TOML Feedback Store
//!
//! Persists kanji corrections at `$XDG_DATA_HOME/seimei/feedback.toml` by
//! default. Writers take a process-local mutex and an exclusive lock on a
//! sibling `.lock` file around each read-modify-write. The file is replaced
//! by renaming a sibling temp file, so readers never see a partial write.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use fs2::FileExt;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{KanjiCorrection, KanjiFeedback};
use crate::domain::ports::{FeedbackError, FeedbackStore};

const FILE_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TomlFeedbackEntry {
    character: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    strokes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    reading: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    old_form: Option<bool>,
    recorded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TomlFeedbackFile {
    version: u32,
    #[serde(default)]
    feedback: Vec<TomlFeedbackEntry>,
}

impl Default for TomlFeedbackFile {
    fn default() -> Self {
        Self {
            version: FILE_VERSION,
            feedback: Vec::new(),
        }
    }
}

pub struct TomlFeedbackStore {
    path: PathBuf,
    write_guard: Mutex<()>,
}

impl TomlFeedbackStore {
    pub fn new() -> Self {
        Self::with_path(default_feedback_path())
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self {
            path,
            write_guard: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock_path(&self) -> PathBuf {
        self.path.with_extension("lock")
    }

    fn load_from_disk(&self) -> Result<Vec<KanjiFeedback>, FeedbackError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| FeedbackError::AccessError {
            message: e.to_string(),
        })?;

        let file: TomlFeedbackFile =
            toml::from_str(&content).map_err(|e| FeedbackError::Corrupted {
                path: self.path.clone(),
                message: e.to_string(),
            })?;

        file.feedback
            .into_iter()
            .map(|entry| from_toml(entry, &self.path))
            .collect()
    }

    fn save_to_disk(&self, entries: &[KanjiFeedback]) -> Result<(), FeedbackError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| FeedbackError::AccessError {
                message: e.to_string(),
            })?;
        }

        let file = TomlFeedbackFile {
            version: FILE_VERSION,
            feedback: entries.iter().map(to_toml).collect(),
        };
        let content =
            toml::to_string_pretty(&file).map_err(|e| FeedbackError::SerializationError {
                message: e.to_string(),
            })?;

        write_atomic(&self.path, &content)
    }
}

impl Default for TomlFeedbackStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedbackStore for TomlFeedbackStore {
    fn record(&self, feedback: KanjiFeedback) -> Result<(), FeedbackError> {
        let _guard = self.write_guard.lock().map_err(|_| FeedbackError::Poisoned)?;

        let lock_path = self.lock_path();
        if let Some(parent) = lock_path.parent() {
            fs::create_dir_all(parent).map_err(|e| FeedbackError::AccessError {
                message: e.to_string(),
            })?;
        }

        let lock_file = fs::File::create(&lock_path).map_err(|e| FeedbackError::AccessError {
            message: e.to_string(),
        })?;
        lock_file
            .lock_exclusive()
            .map_err(|e| FeedbackError::AccessError {
                message: e.to_string(),
            })?;

        let result = self.load_from_disk().and_then(|mut entries| {
            entries.push(feedback);
            self.save_to_disk(&entries)
        });

        let _ = lock_file.unlock();
        result
    }

    fn entries_for(&self, character: char) -> Result<Vec<KanjiFeedback>, FeedbackError> {
        Ok(self
            .load_from_disk()?
            .into_iter()
            .filter(|e| e.character == character)
            .collect())
    }

    fn submission_counts(&self) -> Result<Vec<(char, usize)>, FeedbackError> {
        let mut counts: BTreeMap<char, usize> = BTreeMap::new();
        for entry in self.load_from_disk()? {
            *counts.entry(entry.character).or_default() += 1;
        }
        Ok(counts.into_iter().collect())
    }
}

/// Write `content` to a temp file next to `path`, then rename it over `path`
fn write_atomic(path: &Path, content: &str) -> Result<(), FeedbackError> {
    let access = |e: std::io::Error| FeedbackError::AccessError {
        message: e.to_string(),
    };
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(access)?;
    tmp.write_all(content.as_bytes()).map_err(access)?;
    tmp.as_file().sync_all().map_err(access)?;
    tmp.persist(path).map_err(|e| access(e.error))?;
    Ok(())
}

/// Default location of the feedback file
///
/// `SEIMEI_FEEDBACK_PATH` is applied by the config loader, not here.
pub fn default_feedback_path() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("seimei/feedback.toml"))
        .unwrap_or_else(|| PathBuf::from("seimei-feedback.toml"))
}

fn from_toml(entry: TomlFeedbackEntry, path: &Path) -> Result<KanjiFeedback, FeedbackError> {
    let mut chars = entry.character.chars();
    let character = match (chars.next(), chars.next()) {
        (Some(c), None) => c,
        _ => {
            return Err(FeedbackError::Corrupted {
                path: path.to_path_buf(),
                message: format!("'{}' is not a single character", entry.character),
            })
        }
    };

    Ok(KanjiFeedback {
        character,
        correction: KanjiCorrection {
            strokes: entry.strokes,
            reading: entry.reading,
            old_form: entry.old_form,
        },
        recorded_at: entry.recorded_at,
    })
}

fn to_toml(feedback: &KanjiFeedback) -> TomlFeedbackEntry {
    TomlFeedbackEntry {
        character: feedback.character.to_string(),
        strokes: feedback.correction.strokes,
        reading: feedback.correction.reading.clone(),
        old_form: feedback.correction.old_form,
        recorded_at: feedback.recorded_at,
    }
}
