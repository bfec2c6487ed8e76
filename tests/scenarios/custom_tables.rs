//! Scenario: a school ships its own stroke overrides and calendar.

use crate::common::TestEnv;
use crate::{assert_output_contains, assert_success};

#[test]
fn curated_overrides_from_config() {
    let env = TestEnv::new();
    env.write_file(
        "tables/curated.toml",
        "[[override]]\ncharacter = \"燚\"\nstrokes = 16\n",
    );
    let config = env.write_file(
        "seimei.toml",
        "[strokes]\noverrides = \"tables/curated.toml\"\n",
    );

    let result = env.run(&["--config", config.to_str().unwrap(), "strokes", "燚"]);
    assert_success!(result);
    assert_output_contains!(result, "燚 16  [curated]");
}

#[test]
fn default_stroke_count_from_environment() {
    let env = TestEnv::new().with_env("SEIMEI_DEFAULT_STROKES", "6");

    let result = env.run(&["--json", "strokes", "燚"]);
    assert_success!(result);
    assert_eq!(result.json()[0]["strokes"], 6);
}

#[test]
fn invalid_environment_value_warns_and_falls_back() {
    let env = TestEnv::new().with_env("SEIMEI_FEEDBACK_STORE", "tmol");

    let result = env.run(&["feedback", "show", "燚"]);
    assert_success!(result);
    assert_output_contains!(result, "SEIMEI_FEEDBACK_STORE");
    assert_output_contains!(result, "toml");
}

#[test]
fn external_calendar_limits_years() {
    let env = TestEnv::new();
    let calendar = env.write_file(
        "calendar.toml",
        "[years]\n2000 = [55, 26, 55, 26, 56, 27, 57, 28, 59, 29, 60, 30]\n",
    );
    let env = env.with_env("SEIMEI_CALENDAR_PATH", &calendar);

    let result = env.run(&["six-star", "2000-11-14"]);
    assert_success!(result);

    let result = env.run(&["six-star", "1999-11-14"]);
    assert!(!result.success);
    assert_output_contains!(result, "1999");
}

#[test]
fn unknown_user_config_key_is_a_warning() {
    let env = TestEnv::new().with_user_config("[strokes]\ndefault_cuont = 6\n");

    let result = env.run(&["strokes", "山"]);
    assert_success!(result);
    assert_output_contains!(result, "unknown config key 'default_cuont'");
    assert_output_contains!(result, "default_count");
}

#[test]
fn broken_explicit_config_is_an_error() {
    let env = TestEnv::new();
    let config = env.write_file("broken.toml", "[strokes\n");

    let result = env.run(&["--config", config.to_str().unwrap(), "strokes", "山"]);
    assert!(!result.success);
}
