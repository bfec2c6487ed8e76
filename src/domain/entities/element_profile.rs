//! Five-elements profile of a name

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Element, ElementRelation, Polarity};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementScore {
    pub element: Element,
    pub score: u32,
}

/// 三才配置: elements of heaven, person and earth and how they flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sansai {
    pub heaven: Element,
    pub person: Element,
    pub earth: Element,
    pub heaven_to_person: ElementRelation,
    pub person_to_earth: ElementRelation,
}

impl Sansai {
    /// No 相剋 link anywhere in the chain
    pub fn is_harmonious(&self) -> bool {
        !self.heaven_to_person.is_overcoming() && !self.person_to_earth.is_overcoming()
    }
}

/// Result of `compute_five_elements`. `dominant != weak` always holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementProfile {
    pub dominant: Element,
    pub weak: Element,
    pub polarity: Polarity,
    /// Score per element in 木火土金水 order
    pub scores: Vec<ElementScore>,
    pub sansai: Sansai,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seasonal: Option<Element>,
}

impl ElementProfile {
    pub fn score_of(&self, element: Element) -> u32 {
        self.scores
            .iter()
            .find(|s| s.element == element)
            .map(|s| s.score)
            .unwrap_or(0)
    }
}
