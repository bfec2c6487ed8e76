//! Relationship type value object - selects compatibility weighting

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RelationshipType {
    Romance,
    /// First party is treated as the senior side
    Business,
    Friendship,
    Family,
}

impl RelationshipType {
    pub const ALL: [RelationshipType; 4] = [
        RelationshipType::Romance,
        RelationshipType::Business,
        RelationshipType::Friendship,
        RelationshipType::Family,
    ];

    /// Whether the overall score depends on argument order
    pub fn is_directional(&self) -> bool {
        matches!(self, RelationshipType::Business)
    }
}

impl std::fmt::Display for RelationshipType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RelationshipType::Romance => write!(f, "romance"),
            RelationshipType::Business => write!(f, "business"),
            RelationshipType::Friendship => write!(f, "friendship"),
            RelationshipType::Family => write!(f, "family"),
        }
    }
}
