//! Compatibility result between two analysed names

use serde::{Deserialize, Serialize};

use crate::domain::entities::PersonName;
use crate::domain::value_objects::RelationshipType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompatibilityLabel {
    /// 最高 (90+)
    Excellent,
    /// 良好 (75+)
    Good,
    /// 普通 (60+)
    Fair,
    /// 要努力 (45+)
    Challenging,
    /// 試練
    Difficult,
}

impl CompatibilityLabel {
    pub fn from_score(score: u32) -> Self {
        match score {
            90.. => CompatibilityLabel::Excellent,
            75..=89 => CompatibilityLabel::Good,
            60..=74 => CompatibilityLabel::Fair,
            45..=59 => CompatibilityLabel::Challenging,
            _ => CompatibilityLabel::Difficult,
        }
    }

    pub fn kanji(&self) -> &'static str {
        match self {
            CompatibilityLabel::Excellent => "最高",
            CompatibilityLabel::Good => "良好",
            CompatibilityLabel::Fair => "普通",
            CompatibilityLabel::Challenging => "要努力",
            CompatibilityLabel::Difficult => "試練",
        }
    }
}

/// Per-category scores (0-100)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScores {
    /// Symmetric
    pub element_affinity: u32,
    /// Symmetric
    pub grid_harmony: u32,
    /// Symmetric
    pub tier_interaction: u32,
    /// Business only; asymmetric on purpose (first party is senior)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directional_fit: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityResult {
    pub first: PersonName,
    pub second: PersonName,
    pub relationship: RelationshipType,
    pub categories: CategoryScores,
    pub overall: u32,
    pub label: CompatibilityLabel,
}
