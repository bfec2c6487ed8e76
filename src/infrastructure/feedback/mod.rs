//! Feedback store adapters
//!
//! - `InMemoryFeedbackStore` - process-local, used by default and in tests
//! - `TomlFeedbackStore` - persisted at a configurable path with a file lock

mod memory;
mod toml_store;

pub use memory::InMemoryFeedbackStore;
pub use toml_store::{default_feedback_path, TomlFeedbackStore};
