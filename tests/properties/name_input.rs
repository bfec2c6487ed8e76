//! Property tests for name input handling.

use std::sync::OnceLock;

use proptest::prelude::*;

use seimei::{FortuneEngine, Gender};

fn engine() -> &'static FortuneEngine {
    static ENGINE: OnceLock<FortuneEngine> = OnceLock::new();
    ENGINE.get_or_init(|| FortuneEngine::new().unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: arbitrary input never panics; accepted names always carry
    /// one stroke entry per character.
    #[test]
    fn property_analysis_never_panics(surname in "\\PC{0,6}", given in "\\PC{0,6}") {
        if let Ok(analysis) = engine().compute_name_fortune(&surname, &given, Gender::Unspecified) {
            let expected = analysis.name.surname.text.chars().count()
                + analysis.name.given.text.chars().count();
            prop_assert_eq!(analysis.characters.len(), expected);
            prop_assert!(analysis.total_score <= 100);
        }
    }

    /// PROPERTY: surrounding whitespace does not change the result.
    #[test]
    fn property_trimming_is_transparent(pad in "[ \\t\u{3000}]{0,3}") {
        let plain = engine()
            .compute_name_fortune("佐々木", "健人", Gender::Male)
            .unwrap();
        let padded = engine()
            .compute_name_fortune(&format!("{pad}佐々木{pad}"), &format!("{pad}健人"), Gender::Male)
            .unwrap();
        prop_assert_eq!(plain, padded);
    }
}
