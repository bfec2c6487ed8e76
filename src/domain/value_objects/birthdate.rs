//! Birthdate value object
//!
//! Always a valid Gregorian date; construction goes through `chrono`.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Element;
use crate::error::{SeimeiError, SeimeiResult};

/// The twelve earthly branches 子丑寅卯辰巳午未申酉戌亥
pub const EARTHLY_BRANCHES: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Birthdate(NaiveDate);

impl Birthdate {
    pub fn from_ymd(year: i32, month: u32, day: u32) -> SeimeiResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| SeimeiError::InvalidBirthdate {
                input: format!("{year:04}-{month:02}-{day:02}"),
                reason: "not a calendar date".to_string(),
            })
    }

    /// Parse `YYYY-MM-DD` (also accepts `YYYY/MM/DD`)
    pub fn parse(input: &str) -> SeimeiResult<Self> {
        let trimmed = input.trim();
        let normalized = trimmed.replace('/', "-");
        NaiveDate::parse_from_str(&normalized, "%Y-%m-%d")
            .map(Self)
            .map_err(|e| SeimeiError::InvalidBirthdate {
                input: trimmed.to_string(),
                reason: e.to_string(),
            })
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Index into [`EARTHLY_BRANCHES`] for the birth year (子 = 0)
    pub fn year_branch(&self) -> usize {
        (self.year() - 4).rem_euclid(12) as usize
    }

    /// Seasonal element of the birth month. The 土用 interregnum is not modeled.
    pub fn seasonal_element(&self) -> Element {
        match self.month() {
            2..=4 => Element::Wood,
            5..=7 => Element::Fire,
            8..=10 => Element::Metal,
            _ => Element::Water,
        }
    }
}

impl std::fmt::Display for Birthdate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl std::str::FromStr for Birthdate {
    type Err = SeimeiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
