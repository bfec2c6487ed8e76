//! Infrastructure Layer
//!
//! Concrete implementations of domain ports and file loaders.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `feedback/` - FeedbackStore implementations (in-memory, TOML file)
//! - `tables/` - Destiny calendar and curated stroke override files

pub mod feedback;
pub mod tables;

// Re-export for convenience
pub use feedback::{InMemoryFeedbackStore, TomlFeedbackStore};
pub use tables::{load_calendar, load_curated_layer};
