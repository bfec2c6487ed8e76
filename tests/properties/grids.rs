//! Property tests for the five-grid calculator and headline score.

use proptest::prelude::*;

use seimei::domain::services::{compute_grids, headline_score, FortuneTable, MAX_STROKES};
use seimei::Gender;

fn strokes() -> impl Strategy<Value = Vec<u32>> {
    proptest::collection::vec(1..=MAX_STROKES, 1..=5)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: 総格 is the raw stroke sum and 外格 closes the identity
    /// 天 + 地 = 人 + 外.
    #[test]
    fn property_grid_identities(surname in strokes(), given in strokes()) {
        let grids = compute_grids(&surname, &given).unwrap();

        let sum: u32 = surname.iter().chain(given.iter()).sum();
        prop_assert_eq!(grids.total, sum);
        prop_assert_eq!(grids.heaven + grids.earth, grids.person + grids.outer);
        prop_assert_eq!(grids.heaven + grids.earth, grids.total + grids.reisuu());
        prop_assert!(grids.outer >= 2);
        prop_assert_eq!(grids.surname_reisuu == 1, surname.len() == 1);
        prop_assert_eq!(grids.given_reisuu == 1, given.len() == 1);
    }

    /// PROPERTY: the headline score lies between the lowest and highest grid
    /// score, whatever the gender.
    #[test]
    fn property_headline_is_bounded(
        surname in strokes(),
        given in strokes(),
        female in any::<bool>(),
    ) {
        let table = FortuneTable::builtin().unwrap();
        let grids = compute_grids(&surname, &given).unwrap();
        let gender = if female { Gender::Female } else { Gender::Male };
        let fortunes = table.grid_fortunes(&grids, gender).unwrap();

        let scores: Vec<u32> = fortunes.iter().map(|f| f.score).collect();
        let score = headline_score(&fortunes);
        prop_assert!(score <= 100);
        prop_assert!(score >= *scores.iter().min().unwrap());
        prop_assert!(score <= *scores.iter().max().unwrap());
    }

    /// PROPERTY: every positive count has a fortune, and counts past the
    /// table wrap onto an existing row.
    #[test]
    fn property_fortune_lookup_is_total(count in 1u32..=1000) {
        let table = FortuneTable::builtin().unwrap();
        let entry = table.lookup(count).unwrap();
        prop_assert!((1..=81).contains(&entry.number));
        if count <= 81 {
            prop_assert_eq!(entry.number, count);
        }
    }
}
