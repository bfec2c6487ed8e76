//! Destiny calendar from a TOML file

use std::fs;
use std::path::Path;

use crate::domain::services::DestinyCalendar;
use crate::error::SeimeiResult;

pub fn load_calendar(path: &Path) -> SeimeiResult<DestinyCalendar> {
    let content = fs::read_to_string(path)?;
    let calendar = DestinyCalendar::from_toml_str(&path.display().to_string(), &content)?;
    tracing::debug!(
        path = %path.display(),
        years = calendar.len(),
        "loaded destiny calendar"
    );
    Ok(calendar)
}
