//! Six-star families (六星占術) and their polarity

use serde::{Deserialize, Serialize};

/// Star family, one per 10-wide band of the 60-number cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StarFamily {
    /// 土星 (1–10)
    Saturn,
    /// 金星 (11–20)
    Venus,
    /// 火星 (21–30)
    Mars,
    /// 天王星 (31–40)
    Uranus,
    /// 木星 (41–50)
    Jupiter,
    /// 水星 (51–60)
    Mercury,
}

impl StarFamily {
    /// Families in band order
    pub const BANDS: [StarFamily; 6] = [
        StarFamily::Saturn,
        StarFamily::Venus,
        StarFamily::Mars,
        StarFamily::Uranus,
        StarFamily::Jupiter,
        StarFamily::Mercury,
    ];

    /// Family for a star number. Returns `None` outside 1..=60.
    pub fn from_star_number(star: u32) -> Option<Self> {
        if !(1..=60).contains(&star) {
            return None;
        }
        Some(Self::BANDS[((star - 1) / 10) as usize])
    }

    /// Inclusive star-number band
    pub fn band(&self) -> (u32, u32) {
        let idx = Self::BANDS
            .iter()
            .position(|f| f == self)
            .unwrap_or_default() as u32;
        (idx * 10 + 1, idx * 10 + 10)
    }

    pub fn kanji(&self) -> &'static str {
        match self {
            StarFamily::Saturn => "土星",
            StarFamily::Venus => "金星",
            StarFamily::Mars => "火星",
            StarFamily::Uranus => "天王星",
            StarFamily::Jupiter => "木星",
            StarFamily::Mercury => "水星",
        }
    }
}

impl std::fmt::Display for StarFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kanji())
    }
}

/// + (陽) or − (陰), decided by the birth-year branch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StarPolarity {
    Plus,
    Minus,
}

impl StarPolarity {
    /// Branch index → polarity (子 = 0). Even branches are +.
    pub const BY_BRANCH: [StarPolarity; 12] = [
        StarPolarity::Plus,  // 子
        StarPolarity::Minus, // 丑
        StarPolarity::Plus,  // 寅
        StarPolarity::Minus, // 卯
        StarPolarity::Plus,  // 辰
        StarPolarity::Minus, // 巳
        StarPolarity::Plus,  // 午
        StarPolarity::Minus, // 未
        StarPolarity::Plus,  // 申
        StarPolarity::Minus, // 酉
        StarPolarity::Plus,  // 戌
        StarPolarity::Minus, // 亥
    ];

    pub fn symbol(&self) -> char {
        match self {
            StarPolarity::Plus => '+',
            StarPolarity::Minus => '-',
        }
    }
}
