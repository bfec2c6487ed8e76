//! Destiny calendar (運命数表)
//!
//! Maps (year, month) to the destiny number of that month. Values come from
//! ground-truth data only; missing months are lookup errors, never guesses.
//!
//! Format (TOML):
//!
//! ```toml
//! [years]
//! 2000 = [55, 26, 55, 26, 56, 27, 57, 28, 59, 29, 60, 30]
//! ```

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::{SeimeiError, SeimeiResult};

pub const CYCLE: u32 = 60;
const MONTHS: usize = 12;

#[derive(Debug, Deserialize)]
struct CalendarFile {
    #[serde(default)]
    years: BTreeMap<String, Vec<u32>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DestinyCalendar {
    source_name: String,
    years: BTreeMap<i32, [u32; MONTHS]>,
}

impl DestinyCalendar {
    /// Table bundled with the crate (1900-2099)
    pub fn builtin() -> SeimeiResult<Self> {
        Self::from_toml_str("builtin", crate::data::DESTINY_NUMBERS_TOML)
    }

    pub fn from_toml_str(source_name: &str, content: &str) -> SeimeiResult<Self> {
        let integrity = |message: String| SeimeiError::CalendarIntegrity {
            source_name: source_name.to_string(),
            message,
        };

        let file: CalendarFile = toml::from_str(content).map_err(|e| integrity(e.to_string()))?;

        let mut years = BTreeMap::new();
        for (key, row) in file.years {
            let year: i32 = key
                .trim()
                .parse()
                .map_err(|_| integrity(format!("'{key}' is not a year")))?;

            let months: [u32; MONTHS] = row.as_slice().try_into().map_err(|_| {
                integrity(format!(
                    "{year} has {} entries (expected {MONTHS})",
                    row.len()
                ))
            })?;

            if let Some((idx, bad)) = months
                .iter()
                .enumerate()
                .find(|(_, n)| !(1..=CYCLE).contains(*n))
            {
                return Err(integrity(format!(
                    "{year}-{:02} has destiny number {bad} (expected 1..={CYCLE})",
                    idx + 1
                )));
            }

            years.insert(year, months);
        }

        if years.is_empty() {
            return Err(integrity("no years defined".to_string()));
        }

        Ok(Self {
            source_name: source_name.to_string(),
            years,
        })
    }

    pub fn get(&self, year: i32, month: u32) -> SeimeiResult<u32> {
        let not_found = || SeimeiError::DestinyNumberNotFound { year, month };
        if !(1..=12).contains(&month) {
            return Err(not_found());
        }
        self.years
            .get(&year)
            .map(|row| row[month as usize - 1])
            .ok_or_else(not_found)
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    /// Inclusive range of covered years
    pub fn year_range(&self) -> Option<(i32, i32)> {
        let first = self.years.keys().next()?;
        let last = self.years.keys().next_back()?;
        Some((*first, *last))
    }

    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }
}
