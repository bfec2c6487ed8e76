//! Compatibility engine (相性)
//!
//! Symmetric categories:
//! - element affinity of the two 人格 elements
//! - grid harmony: fortune of the combined 人格 and combined 総格
//! - tier interaction: mean headline score minus a quarter of the gap
//!
//! Business adds `directional_fit`, which is asymmetric: the first person is
//! the senior party and it matters who generates or overcomes whom.

use crate::domain::entities::{CategoryScores, CompatibilityLabel, CompatibilityResult, NameAnalysis};
use crate::domain::services::FortuneTable;
use crate::domain::value_objects::{Element, ElementRelation, RelationshipType};

/// Category weights in percent; each row sums to 100
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryWeights {
    pub element_affinity: u32,
    pub grid_harmony: u32,
    pub tier_interaction: u32,
    pub directional_fit: u32,
}

impl CategoryWeights {
    pub const fn for_relationship(relationship: RelationshipType) -> Self {
        let (element_affinity, grid_harmony, tier_interaction, directional_fit) = match relationship {
            RelationshipType::Romance => (40, 30, 30, 0),
            RelationshipType::Business => (20, 20, 30, 30),
            RelationshipType::Friendship => (30, 30, 40, 0),
            RelationshipType::Family => (35, 35, 30, 0),
        };
        Self {
            element_affinity,
            grid_harmony,
            tier_interaction,
            directional_fit,
        }
    }

    pub fn total(&self) -> u32 {
        self.element_affinity + self.grid_harmony + self.tier_interaction + self.directional_fit
    }
}

pub fn element_affinity(a: Element, b: Element) -> u32 {
    match a.relation_to(b) {
        ElementRelation::Same => 70,
        ElementRelation::Generates | ElementRelation::GeneratedBy => 90,
        ElementRelation::Overcomes | ElementRelation::OvercomeBy => 40,
    }
}

/// Fit of `senior` leading `junior`
pub fn directional_fit(senior: Element, junior: Element) -> u32 {
    match senior.relation_to(junior) {
        ElementRelation::Generates => 90,
        ElementRelation::GeneratedBy => 70,
        ElementRelation::Same => 60,
        ElementRelation::Overcomes => 60,
        ElementRelation::OvercomeBy => 30,
    }
}

pub fn grid_harmony(table: &FortuneTable, a: &NameAnalysis, b: &NameAnalysis) -> u32 {
    // grid values are at least 1, so neither sum is ever 0
    let score_of = |sum: u32| table.lookup(sum).map_or(0, |entry| entry.tier.score());
    let person = score_of(a.grids.person + b.grids.person);
    let total = score_of(a.grids.total + b.grids.total);
    (person + total) / 2
}

pub fn tier_interaction(a: u32, b: u32) -> u32 {
    let mean = (a + b) / 2;
    mean.saturating_sub(a.abs_diff(b) / 4)
}

pub fn compute_compatibility(
    table: &FortuneTable,
    first: &NameAnalysis,
    second: &NameAnalysis,
    relationship: RelationshipType,
) -> CompatibilityResult {
    let element_a = Element::from_grid_value(first.grids.person);
    let element_b = Element::from_grid_value(second.grids.person);

    let categories = CategoryScores {
        element_affinity: element_affinity(element_a, element_b),
        grid_harmony: grid_harmony(table, first, second),
        tier_interaction: tier_interaction(first.total_score, second.total_score),
        directional_fit: relationship
            .is_directional()
            .then(|| directional_fit(element_a, element_b)),
    };

    let overall = overall_score(&categories, CategoryWeights::for_relationship(relationship));

    CompatibilityResult {
        first: first.name.clone(),
        second: second.name.clone(),
        relationship,
        categories,
        overall,
        label: CompatibilityLabel::from_score(overall),
    }
}

/// Weighted mean, rounded half up
fn overall_score(categories: &CategoryScores, weights: CategoryWeights) -> u32 {
    let weighted = categories.element_affinity * weights.element_affinity
        + categories.grid_harmony * weights.grid_harmony
        + categories.tier_interaction * weights.tier_interaction
        + categories.directional_fit.unwrap_or(0) * weights.directional_fit;
    let total = weights.total();
    (weighted * 2 + total) / (total * 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_sum_to_one_hundred() {
        for relationship in RelationshipType::ALL {
            let weights = CategoryWeights::for_relationship(relationship);
            assert_eq!(weights.total(), 100, "{relationship:?}");
            assert_eq!(weights.directional_fit > 0, relationship.is_directional());
        }
    }

    #[test]
    fn element_affinity_is_symmetric() {
        for a in Element::ALL {
            for b in Element::ALL {
                assert_eq!(element_affinity(a, b), element_affinity(b, a));
            }
        }
        assert_eq!(element_affinity(Element::Wood, Element::Wood), 70);
        assert_eq!(element_affinity(Element::Wood, Element::Fire), 90);
        assert_eq!(element_affinity(Element::Wood, Element::Earth), 40);
    }

    #[test]
    fn directional_fit_depends_on_order() {
        // 木生火
        assert_eq!(directional_fit(Element::Wood, Element::Fire), 90);
        assert_eq!(directional_fit(Element::Fire, Element::Wood), 70);
        // 木剋土
        assert_eq!(directional_fit(Element::Wood, Element::Earth), 60);
        assert_eq!(directional_fit(Element::Earth, Element::Wood), 30);
        assert_eq!(directional_fit(Element::Metal, Element::Metal), 60);
    }

    #[test]
    fn tier_interaction_penalizes_gap() {
        assert_eq!(tier_interaction(80, 80), 80);
        assert_eq!(tier_interaction(100, 60), 70);
        assert_eq!(tier_interaction(60, 100), 70);
        assert_eq!(tier_interaction(0, 100), 25);
    }

    #[test]
    fn overall_rounds_half_up() {
        let categories = CategoryScores {
            element_affinity: 90,
            grid_harmony: 75,
            tier_interaction: 81,
            directional_fit: None,
        };
        // romance: (3600 + 2250 + 2430) / 100 = 82.8
        let overall = overall_score(&categories, CategoryWeights::for_relationship(RelationshipType::Romance));
        assert_eq!(overall, 83);
    }
}
