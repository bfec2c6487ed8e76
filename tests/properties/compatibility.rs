//! Property tests for compatibility scoring.

use std::sync::OnceLock;

use proptest::prelude::*;

use seimei::{FortuneEngine, Gender, NameAnalysis, RelationshipType};

const KANJI: &[char] = &['佐', '木', '健', '人', '林', '太', '山', '田', '中', '高', '橋', '美', '子', '一', '郎'];

fn engine() -> &'static FortuneEngine {
    static ENGINE: OnceLock<FortuneEngine> = OnceLock::new();
    ENGINE.get_or_init(|| FortuneEngine::new().unwrap())
}

fn segment() -> impl Strategy<Value = String> {
    proptest::collection::vec(proptest::sample::select(KANJI), 1..=3)
        .prop_map(|chars| chars.into_iter().collect())
}

fn analysis(surname: &str, given: &str) -> NameAnalysis {
    engine()
        .compute_name_fortune(surname, given, Gender::Unspecified)
        .unwrap()
}

fn relationship() -> impl Strategy<Value = RelationshipType> {
    proptest::sample::select(RelationshipType::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every category and the overall score stay within 0..=100.
    #[test]
    fn property_scores_in_range(
        a in (segment(), segment()),
        b in (segment(), segment()),
        relationship in relationship(),
    ) {
        let first = analysis(&a.0, &a.1);
        let second = analysis(&b.0, &b.1);
        let result = engine().compute_compatibility(&first, &second, relationship);

        let c = result.categories;
        for score in [c.element_affinity, c.grid_harmony, c.tier_interaction, result.overall] {
            prop_assert!(score <= 100);
        }
        prop_assert_eq!(c.directional_fit.is_some(), relationship.is_directional());
    }

    /// PROPERTY: only business depends on argument order.
    #[test]
    fn property_symmetric_unless_directional(
        a in (segment(), segment()),
        b in (segment(), segment()),
        relationship in relationship(),
    ) {
        prop_assume!(!relationship.is_directional());
        let first = analysis(&a.0, &a.1);
        let second = analysis(&b.0, &b.1);

        let forward = engine().compute_compatibility(&first, &second, relationship);
        let backward = engine().compute_compatibility(&second, &first, relationship);
        prop_assert_eq!(forward.overall, backward.overall);
        prop_assert_eq!(forward.categories, backward.categories);
    }

    /// PROPERTY: for business only the directional fit and overall may change on swap.
    #[test]
    fn property_business_shared_categories_symmetric(
        a in (segment(), segment()),
        b in (segment(), segment()),
    ) {
        let first = analysis(&a.0, &a.1);
        let second = analysis(&b.0, &b.1);

        let forward = engine().compute_compatibility(&first, &second, RelationshipType::Business);
        let backward = engine().compute_compatibility(&second, &first, RelationshipType::Business);
        let (f, r) = (forward.categories, backward.categories);
        prop_assert_eq!(f.element_affinity, r.element_affinity);
        prop_assert_eq!(f.grid_harmony, r.grid_harmony);
        prop_assert_eq!(f.tier_interaction, r.tier_interaction);
        prop_assert!(f.directional_fit.is_some() && r.directional_fit.is_some());
    }

    /// PROPERTY: a name paired with itself never scores as overcoming.
    #[test]
    fn property_self_pairing_is_same_element(a in (segment(), segment())) {
        let name = analysis(&a.0, &a.1);
        let result = engine().compute_compatibility(&name, &name, RelationshipType::Business);
        prop_assert_eq!(result.categories.element_affinity, 70);
        prop_assert_eq!(result.categories.directional_fit, Some(60));
    }
}
