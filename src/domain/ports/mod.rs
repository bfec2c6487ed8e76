//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod feedback_store;

pub use feedback_store::{FeedbackError, FeedbackStore};
