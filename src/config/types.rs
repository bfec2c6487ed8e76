//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::entities::DEFAULT_MAX_SEGMENT_LEN;
use crate::domain::services::DEFAULT_STROKE_COUNT;
use crate::error::SeimeiResult;

use super::loader::{self, ConfigWarning};

/// Reports needed before an unknown character shows up in `feedback unsupported`
pub const DEFAULT_UNSUPPORTED_THRESHOLD: usize = 3;

/// Stroke resolution configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrokesConfig {
    /// Count used for characters missing from every layer
    #[serde(default = "default_stroke_count")]
    pub default_count: u32,

    #[serde(default = "default_max_segment_len")]
    pub max_segment_len: usize,

    /// Curated override file, merged on top of the bundled data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overrides: Option<PathBuf>,
}

impl Default for StrokesConfig {
    fn default() -> Self {
        Self {
            default_count: default_stroke_count(),
            max_segment_len: default_max_segment_len(),
            overrides: None,
        }
    }
}

fn default_stroke_count() -> u32 {
    DEFAULT_STROKE_COUNT
}

fn default_max_segment_len() -> usize {
    DEFAULT_MAX_SEGMENT_LEN
}

/// Destiny calendar configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarConfig {
    /// External calendar file; the bundled table is used when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Where kanji feedback is kept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackStoreKind {
    /// Lost when the process exits
    #[default]
    Memory,
    /// Persisted to `feedback.path`
    Toml,
}

/// Feedback configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackConfig {
    #[serde(default)]
    pub store: FeedbackStoreKind,

    /// File for the TOML store (defaults to the user data directory)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    #[serde(default = "default_unsupported_threshold")]
    pub unsupported_threshold: usize,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            store: FeedbackStoreKind::default(),
            path: None,
            unsupported_threshold: default_unsupported_threshold(),
        }
    }
}

fn default_unsupported_threshold() -> usize {
    DEFAULT_UNSUPPORTED_THRESHOLD
}

/// Output configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// `tracing` filter directive for this level
    pub fn filter(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Verbose => "info",
            Verbosity::Debug => "debug",
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub strokes: StrokesConfig,

    #[serde(default)]
    pub calendar: CalendarConfig,

    #[serde(default)]
    pub feedback: FeedbackConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> SeimeiResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> SeimeiResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Explicit file if given, else the user config, else defaults; env on top
    pub fn load_or_default(explicit: Option<&Path>) -> SeimeiResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(explicit)
    }

    /// Apply environment variable overrides (SEIMEI_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
