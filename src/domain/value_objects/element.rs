//! Element value object - 陰陽五行 (five elements and yin/yang)
//!
//! - 相生 (generating): 木 → 火 → 土 → 金 → 水 → 木
//! - 相剋 (overcoming): 木 → 土 → 水 → 火 → 金 → 木

use serde::{Deserialize, Serialize};

/// One of the five elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    /// 木
    Wood,
    /// 火
    Fire,
    /// 土
    Earth,
    /// 金
    Metal,
    /// 水
    Water,
}

impl Element {
    /// Canonical order 木火土金水, also the generating cycle
    pub const ALL: [Element; 5] = [
        Element::Wood,
        Element::Fire,
        Element::Earth,
        Element::Metal,
        Element::Water,
    ];

    /// Element for the last digit of a grid value.
    ///
    /// 1,2 → 木; 3,4 → 火; 5,6 → 土; 7,8 → 金; 9,0 → 水
    pub fn from_grid_value(value: u32) -> Self {
        match value % 10 {
            1 | 2 => Element::Wood,
            3 | 4 => Element::Fire,
            5 | 6 => Element::Earth,
            7 | 8 => Element::Metal,
            _ => Element::Water,
        }
    }

    pub fn kanji(&self) -> &'static str {
        match self {
            Element::Wood => "木",
            Element::Fire => "火",
            Element::Earth => "土",
            Element::Metal => "金",
            Element::Water => "水",
        }
    }

    /// The element this one generates (相生)
    pub fn generates(&self) -> Element {
        match self {
            Element::Wood => Element::Fire,
            Element::Fire => Element::Earth,
            Element::Earth => Element::Metal,
            Element::Metal => Element::Water,
            Element::Water => Element::Wood,
        }
    }

    /// The element this one overcomes (相剋)
    pub fn overcomes(&self) -> Element {
        match self {
            Element::Wood => Element::Earth,
            Element::Earth => Element::Water,
            Element::Water => Element::Fire,
            Element::Fire => Element::Metal,
            Element::Metal => Element::Wood,
        }
    }

    /// Relation seen from `self` towards `other`
    pub fn relation_to(&self, other: Element) -> ElementRelation {
        if *self == other {
            ElementRelation::Same
        } else if self.generates() == other {
            ElementRelation::Generates
        } else if other.generates() == *self {
            ElementRelation::GeneratedBy
        } else if self.overcomes() == other {
            ElementRelation::Overcomes
        } else {
            ElementRelation::OvercomeBy
        }
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kanji())
    }
}

/// Directed relation between two elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ElementRelation {
    /// 比和
    Same,
    /// 相生 (self feeds other)
    Generates,
    /// 相生 (other feeds self)
    GeneratedBy,
    /// 相剋 (self restrains other)
    Overcomes,
    /// 相剋 (other restrains self)
    OvercomeBy,
}

impl ElementRelation {
    pub fn is_generating(&self) -> bool {
        matches!(self, ElementRelation::Generates | ElementRelation::GeneratedBy)
    }

    pub fn is_overcoming(&self) -> bool {
        matches!(self, ElementRelation::Overcomes | ElementRelation::OvercomeBy)
    }

    pub fn kanji(&self) -> &'static str {
        match self {
            ElementRelation::Same => "比和",
            ElementRelation::Generates | ElementRelation::GeneratedBy => "相生",
            ElementRelation::Overcomes | ElementRelation::OvercomeBy => "相剋",
        }
    }
}

/// 陰 / 陽
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    /// 陽 (odd)
    Yang,
    /// 陰 (even)
    Yin,
}

impl Polarity {
    pub fn from_value(value: u32) -> Self {
        if value % 2 == 1 {
            Polarity::Yang
        } else {
            Polarity::Yin
        }
    }

    pub fn kanji(&self) -> &'static str {
        match self {
            Polarity::Yang => "陽",
            Polarity::Yin => "陰",
        }
    }
}
