//! Name analysis entities - grids, per-grid fortunes and the full analysis

use serde::{Deserialize, Serialize};

use crate::domain::entities::{PersonName, SegmentKind, StrokeLookup};
use crate::domain::value_objects::{FortuneTier, Gender};

/// The five grids (五格)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridKind {
    /// 天格
    Heaven,
    /// 人格
    Person,
    /// 地格
    Earth,
    /// 外格
    Outer,
    /// 総格
    Total,
}

impl GridKind {
    pub const ALL: [GridKind; 5] = [
        GridKind::Heaven,
        GridKind::Person,
        GridKind::Earth,
        GridKind::Outer,
        GridKind::Total,
    ];

    /// Weight in the headline score. Person and Total count double.
    pub fn weight(&self) -> u32 {
        match self {
            GridKind::Person | GridKind::Total => 2,
            GridKind::Heaven | GridKind::Earth | GridKind::Outer => 1,
        }
    }

    pub fn kanji(&self) -> &'static str {
        match self {
            GridKind::Heaven => "天格",
            GridKind::Person => "人格",
            GridKind::Earth => "地格",
            GridKind::Outer => "外格",
            GridKind::Total => "総格",
        }
    }
}

/// Grid values plus the 霊数 applied on each side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grids {
    pub heaven: u32,
    pub person: u32,
    pub earth: u32,
    pub outer: u32,
    pub total: u32,
    pub surname_reisuu: u32,
    pub given_reisuu: u32,
}

impl Grids {
    pub fn value(&self, kind: GridKind) -> u32 {
        match kind {
            GridKind::Heaven => self.heaven,
            GridKind::Person => self.person,
            GridKind::Earth => self.earth,
            GridKind::Outer => self.outer,
            GridKind::Total => self.total,
        }
    }

    /// Net 霊数 adjustment (0, 1 or 2)
    pub fn reisuu(&self) -> u32 {
        self.surname_reisuu + self.given_reisuu
    }
}

/// Fortune of a single grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridFortune {
    pub kind: GridKind,
    pub value: u32,
    /// Row of the fortune table used (differs from `value` above 81)
    pub table_number: u32,
    pub tier: FortuneTier,
    pub score: u32,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caution: Option<String>,
}

/// One fortune per grid, named explicitly
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridFortunes {
    pub heaven: GridFortune,
    pub person: GridFortune,
    pub earth: GridFortune,
    pub outer: GridFortune,
    pub total: GridFortune,
}

impl GridFortunes {
    pub fn get(&self, kind: GridKind) -> &GridFortune {
        match kind {
            GridKind::Heaven => &self.heaven,
            GridKind::Person => &self.person,
            GridKind::Earth => &self.earth,
            GridKind::Outer => &self.outer,
            GridKind::Total => &self.total,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &GridFortune> {
        GridKind::ALL.into_iter().map(move |k| self.get(k))
    }
}

/// A resolved character tagged with its segment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterStroke {
    pub segment: SegmentKind,
    #[serde(flatten)]
    pub lookup: StrokeLookup,
}

/// Result of `compute_name_fortune`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameAnalysis {
    pub name: PersonName,
    pub gender: Gender,
    pub characters: Vec<CharacterStroke>,
    pub grids: Grids,
    pub fortunes: GridFortunes,
    /// Weighted headline score (0-100)
    pub total_score: u32,
    /// Characters that fell back to the default stroke count, in order of appearance
    pub unresolved: Vec<char>,
}

impl NameAnalysis {
    pub fn is_fully_resolved(&self) -> bool {
        self.unresolved.is_empty()
    }

    pub fn strokes_of(&self, segment: SegmentKind) -> Vec<u32> {
        self.characters
            .iter()
            .filter(|c| c.segment == segment)
            .map(|c| c.lookup.strokes)
            .collect()
    }
}
