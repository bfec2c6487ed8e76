//! Property tests for the six-star calculator.

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;

use seimei::domain::services::six_star::normalize_star;
use seimei::domain::services::{compute_six_star, DestinyCalendar};
use seimei::Birthdate;

fn date() -> impl Strategy<Value = NaiveDate> {
    // 1900-01-01 .. 2099-12-30, leaving room for the following day
    (0i64..73_047).prop_map(|offset| {
        NaiveDate::from_ymd_opt(1900, 1, 1).unwrap() + Duration::days(offset)
    })
}

fn birthdate(date: NaiveDate) -> Birthdate {
    use chrono::Datelike;
    Birthdate::from_ymd(date.year(), date.month(), date.day()).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: normalization always lands in 1..=60 and keeps the residue.
    #[test]
    fn property_normalize_in_cycle(raw in 1u32..=1000) {
        let star = normalize_star(raw);
        prop_assert!((1..=60).contains(&star));
        prop_assert_eq!(star % 60, raw % 60);
    }

    /// PROPERTY: consecutive days advance the star by one, wrapping 60 → 1,
    /// including across month and year boundaries.
    #[test]
    fn property_consecutive_days_advance(day in date()) {
        let calendar = DestinyCalendar::builtin().unwrap();
        let today = compute_six_star(&calendar, birthdate(day)).unwrap();
        let tomorrow = compute_six_star(&calendar, birthdate(day + Duration::days(1))).unwrap();

        prop_assert!((1..=60).contains(&today.star_number));
        prop_assert_eq!(tomorrow.star_number, today.star_number % 60 + 1);
    }
}
