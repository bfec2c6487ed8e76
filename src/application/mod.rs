//! Application Layer
//!
//! Orchestrates the domain services for callers.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Wires Infrastructure (data files, feedback stores) into Domain
//!
//! ## Services
//!
//! - `FortuneEngine` - the library entry point: name fortune, five elements,
//!   six-star, compatibility, stroke lookup and the kanji feedback loop

pub mod engine;

pub use engine::FortuneEngine;
