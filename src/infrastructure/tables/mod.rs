//! Loaders for externally supplied data tables
//!
//! Both read a whole TOML file and hand the parsed table to the domain; any
//! malformed content is a data-integrity error naming the file.

mod calendar_file;
mod curated_file;

pub use calendar_file::load_calendar;
pub use curated_file::{load_curated_layer, parse_curated_layer};
