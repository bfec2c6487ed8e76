//! Seimei - Japanese name-fortune (姓名判断) engine
//!
//! Resolves kanji stroke counts through layered tables, derives the five
//! grids (五格) and their fortunes, and adds five-elements, six-star and
//! compatibility readings on top. A small feedback loop collects community
//! corrections for characters the tables do not know.
//!
//! ```no_run
//! use seimei::{FortuneEngine, Gender};
//!
//! let engine = FortuneEngine::new()?;
//! let analysis = engine.compute_name_fortune("佐々木", "健人", Gender::Male)?;
//! println!("{}", analysis.total_score);
//! # Ok::<(), seimei::SeimeiError>(())
//! ```

pub mod application;
pub mod config;
pub mod data;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::FortuneEngine;
pub use config::{Config, ConfigWarning, Verbosity};
pub use domain::entities::{
    CompatibilityResult, ElementProfile, FeedbackSummary, KanjiCorrection, NameAnalysis, SixStar,
    StrokeLookup, UnsupportedCharacter,
};
pub use domain::value_objects::{Birthdate, Element, FortuneTier, Gender, RelationshipType};
pub use error::{ErrorKind, SeimeiError, SeimeiResult};
