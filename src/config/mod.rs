//! Configuration module for Seimei
//!
//! Configuration hierarchy:
//! 1. Environment variables (SEIMEI_*) (highest priority)
//! 2. Explicit `--config` file
//! 3. User config ($XDG_CONFIG_HOME/seimei/config.toml)
//! 4. Built-in defaults (lowest priority)
//!
//! An explicit file replaces the user config rather than merging with it.

mod env_validator;
mod loader;
mod types;

pub use env_validator::{levenshtein, EnvVarValidator, InvalidEnvValue};
pub use loader::{user_config_path, ConfigWarning};
pub use types::{
    CalendarConfig, Config, FeedbackConfig, FeedbackStoreKind, OutputConfig, StrokesConfig,
    Verbosity, DEFAULT_UNSUPPORTED_THRESHOLD,
};
