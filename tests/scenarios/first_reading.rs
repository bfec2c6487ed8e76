//! Scenario: a new user reads their own name, then checks a partner.

use crate::common::TestEnv;
use crate::{assert_output_contains, assert_success};

#[test]
fn analyze_reports_grids_and_score() {
    let env = TestEnv::new();

    let result = env.run(&["analyze", "佐々木", "健人", "--gender", "male"]);
    assert_success!(result);
    assert!(result.stdout.starts_with("佐々木 健人 (male)"));
    assert_output_contains!(result, "  々  7  inherited");
    assert_output_contains!(result, "Score 97");
    assert!(!result.stdout.contains("Unresolved"));
}

#[test]
fn analyze_json_is_machine_readable() {
    let env = TestEnv::new();

    let result = env.run(&["--json", "analyze", "林", "健太"]);
    assert_success!(result);
    let json = result.json();
    assert_eq!(json["grids"]["heaven"], 9);
    assert_eq!(json["grids"]["person"], 19);
    assert_eq!(json["grids"]["total"], 23);
    assert_eq!(json["total_score"], 74);
    assert_eq!(json["gender"], "unspecified");
}

#[test]
fn unknown_character_is_flagged_not_fatal() {
    let env = TestEnv::new();

    let result = env.run(&["analyze", "山", "燚"]);
    assert_success!(result);
    assert_output_contains!(result, "燚 10  unresolved");
    assert_output_contains!(result, "Unresolved: 燚");
    assert_output_contains!(result, "some characters are not in the stroke table");
}

#[test]
fn invalid_names_fail_with_message() {
    let env = TestEnv::new();

    let result = env.run(&["analyze", "々木", "健人"]);
    assert!(!result.success);
    assert_output_contains!(result, "々");

    let result = env.run(&["analyze", " ", "健人"]);
    assert!(!result.success);
    assert_output_contains!(result, "surname");
}

#[test]
fn elements_and_six_star() {
    let env = TestEnv::new();

    let result = env.run(&["elements", "佐々木", "健人", "--birthdate", "1990-12-01"]);
    assert_success!(result);
    assert_output_contains!(result, "Dominant 土");
    assert_output_contains!(result, "Season   水");

    let result = env.run(&["six-star", "2000-11-14"]);
    assert_success!(result);
    assert_eq!(result.stdout.trim_end(), "2000-11-14  運命数 60  星数 13  金星人(+)");

    let result = env.run(&["six-star", "2000-13-01"]);
    assert!(!result.success);
}

#[test]
fn compatibility_between_two_names() {
    let env = TestEnv::new();

    let result = env.run(&["compat", "佐々木 健人", "林 健太"]);
    assert_success!(result);
    assert_output_contains!(result, "佐々木 健人 × 林 健太 (romance)");
    assert_output_contains!(result, "overall            46");

    let business = env.run(&["--json", "compat", "佐々木 健人", "林 健太", "-r", "business"]);
    let swapped = env.run(&["--json", "compat", "林 健太", "佐々木 健人", "-r", "business"]);
    assert_success!(business);
    assert_success!(swapped);
    assert_eq!(business.json()["overall"], 54);
    assert_eq!(swapped.json()["overall"], 45);

    let result = env.run(&["compat", "佐々木健人", "林 健太"]);
    assert!(!result.success);
    assert_output_contains!(result, "surname given");
}

#[test]
fn strokes_lookup_matches_analysis_for_iteration_mark() {
    let env = TestEnv::new();

    let result = env.run(&["strokes", "佐々木"]);
    assert_success!(result);
    assert_output_contains!(result, "々  7  inherited");
    assert!(!result.stdout.contains("unresolved"));

    let result = env.run(&["strokes", "々"]);
    assert!(!result.success);
    assert_eq!(result.exit_code, 1);
}
