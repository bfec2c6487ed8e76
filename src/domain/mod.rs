//! Domain Layer
//!
//! Pure name-fortune logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Names, stroke entries, analyses and derived readings
//! - `value_objects/` - Small immutable types (Element, FortuneTier, Birthdate)
//! - `services/` - Stroke resolution, grids, fortune table, elements, six-star, compatibility
//! - `ports/` - Interface for the kanji feedback store
//!
//! ## Design Principles
//!
//! 1. **No I/O** - Data tables are handed in already parsed
//! 2. **Pure Functions** - Every result is recomputed per call
//! 3. **Ports & Adapters** - Feedback persistence goes through a trait

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
