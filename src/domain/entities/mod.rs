//! Domain Entities
//!
//! - `StrokeEntry` / `StrokeLayer` - stroke data and its source layer
//! - `PersonName` - validated surname + given name
//! - `NameAnalysis` - grids, fortunes and per-character strokes
//! - `ElementProfile`, `SixStar`, `CompatibilityResult` - derived readings
//! - `KanjiFeedback` - community corrections

mod analysis;
mod compatibility;
mod element_profile;
mod feedback;
mod name;
mod six_star;
mod stroke_entry;

pub use analysis::{CharacterStroke, GridFortune, GridFortunes, GridKind, Grids, NameAnalysis};
pub use compatibility::{CategoryScores, CompatibilityLabel, CompatibilityResult};
pub use element_profile::{ElementProfile, ElementScore, Sansai};
pub use feedback::{FeedbackSummary, KanjiCorrection, KanjiFeedback, UnsupportedCharacter};
pub use name::{NameSegment, PersonName, SegmentKind, DEFAULT_MAX_SEGMENT_LEN, ITERATION_MARK};
pub use six_star::SixStar;
pub use stroke_entry::{StrokeEntry, StrokeLayer, StrokeLayerKind, StrokeLookup};
