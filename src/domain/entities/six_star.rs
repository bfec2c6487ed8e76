//! Six-star (六星占術) result

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Birthdate, StarFamily, StarPolarity};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SixStar {
    pub birthdate: Birthdate,
    /// 運命数 for the birth month (1..=60)
    pub destiny_number: u32,
    /// 星数, always within 1..=60
    pub star_number: u32,
    pub family: StarFamily,
    pub polarity: StarPolarity,
}

impl SixStar {
    /// e.g. "金星人(+)"
    pub fn label(&self) -> String {
        format!("{}人({})", self.family.kanji(), self.polarity.symbol())
    }
}
