//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{SeimeiError, SeimeiResult};

use super::env_validator::{levenshtein, EnvVarValidator};
use super::types::{Config, FeedbackStoreKind, Verbosity};

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{line}")?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{suggestion}'?)")?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
///
/// Relative paths inside the file are resolved against its directory.
pub fn load_with_warnings(path: &Path) -> SeimeiResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let mut config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| SeimeiError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    if let Some(base) = path.parent() {
        resolve_relative_paths(&mut config, base);
    }

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Explicit config file, else user config, else defaults; env overrides last.
///
/// A missing or broken explicit file is an error; a broken user config is
/// skipped with a warning so the CLI still works.
pub fn load_or_default(explicit: Option<&Path>) -> SeimeiResult<(Config, Vec<ConfigWarning>)> {
    if let Some(path) = explicit {
        let (config, warnings) = load_with_warnings(path)?;
        return Ok((with_env_overrides(config), warnings));
    }

    if let Some(user_config) = user_config_path() {
        if user_config.exists() {
            match load_with_warnings(&user_config) {
                Ok((config, warnings)) => return Ok((with_env_overrides(config), warnings)),
                Err(e) => tracing::warn!(error = %e, "ignoring user config"),
            }
        }
    }

    Ok((with_env_overrides(Config::default()), Vec::new()))
}

/// `$XDG_CONFIG_HOME/seimei/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs_config_dir().map(|dir| dir.join("seimei/config.toml"))
}

/// Apply environment variable overrides (SEIMEI_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_env(config, |name| std::env::var(name).ok())
}

/// Env overrides with an injectable lookup. Invalid values keep the current
/// setting and log a warning.
pub(crate) fn apply_env(mut config: Config, var: impl Fn(&str) -> Option<String>) -> Config {
    if let Some(value) = var("SEIMEI_DEFAULT_STROKES") {
        match value.trim().parse::<u32>() {
            Ok(n) if n > 0 => config.strokes.default_count = n,
            _ => tracing::warn!(
                value = %value,
                "SEIMEI_DEFAULT_STROKES must be a positive integer, keeping {}",
                config.strokes.default_count
            ),
        }
    }

    if let Some(path) = var("SEIMEI_CALENDAR_PATH").filter(|p| !p.trim().is_empty()) {
        config.calendar.path = Some(PathBuf::from(path));
    }

    if let Some(value) = var("SEIMEI_FEEDBACK_STORE") {
        let validator = EnvVarValidator::new("SEIMEI_FEEDBACK_STORE", &["memory", "toml"]);
        config.feedback.store = validator.parse(&value, parse_store_kind, config.feedback.store);
    }

    if let Some(path) = var("SEIMEI_FEEDBACK_PATH").filter(|p| !p.trim().is_empty()) {
        config.feedback.path = Some(PathBuf::from(path));
    }

    if let Some(value) = var("SEIMEI_VERBOSITY") {
        let validator = EnvVarValidator::new(
            "SEIMEI_VERBOSITY",
            &["quiet", "normal", "verbose", "debug"],
        );
        config.output.verbosity = validator.parse(&value, parse_verbosity, config.output.verbosity);
    }

    config
}

fn parse_store_kind(value: &str) -> Option<FeedbackStoreKind> {
    match value.trim().to_lowercase().as_str() {
        "memory" => Some(FeedbackStoreKind::Memory),
        "toml" | "file" => Some(FeedbackStoreKind::Toml),
        _ => None,
    }
}

fn parse_verbosity(value: &str) -> Option<Verbosity> {
    match value.trim().to_lowercase().as_str() {
        "quiet" => Some(Verbosity::Quiet),
        "normal" => Some(Verbosity::Normal),
        "verbose" => Some(Verbosity::Verbose),
        "debug" => Some(Verbosity::Debug),
        _ => None,
    }
}

fn resolve_relative_paths(config: &mut Config, base: &Path) {
    let resolve = |p: &mut Option<PathBuf>| {
        if let Some(path) = p.as_mut() {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    };
    resolve(&mut config.strokes.overrides);
    resolve(&mut config.calendar.path);
    resolve(&mut config.feedback.path);
}

/// Get XDG config directory
fn dirs_config_dir() -> Option<PathBuf> {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "strokes",
        "default_count",
        "max_segment_len",
        "overrides",
        "calendar",
        "path",
        "feedback",
        "store",
        "unsupported_threshold",
        "output",
        "verbosity",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}
