//! Domain Services
//!
//! Pure computations over domain entities. Nothing here touches the file
//! system; tables are built once and passed in by reference.

pub mod compatibility;
pub mod destiny_calendar;
pub mod feedback_aggregator;
pub mod five_elements;
pub mod five_grid;
pub mod fortune_table;
pub mod six_star;
pub mod stroke_resolver;
pub mod stroke_table;

pub use compatibility::{compute_compatibility, CategoryWeights};
pub use destiny_calendar::DestinyCalendar;
pub use five_elements::analyze_elements;
pub use five_grid::{compute_grids, REISUU};
pub use fortune_table::{headline_score, FortuneEntry, FortuneTable};
pub use six_star::compute_six_star;
pub use stroke_resolver::{StrokeResolver, DEFAULT_STROKE_COUNT};
pub use stroke_table::{StrokeOverride, StrokeTable, MAX_STROKES};
