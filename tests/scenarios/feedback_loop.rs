//! Scenario: users report a character the tables do not know, and the
//! maintainer reviews the most requested ones.

use crate::common::TestEnv;
use crate::{assert_output_contains, assert_success};

fn persistent_env() -> TestEnv {
    TestEnv::new().with_user_config("[feedback]\nstore = \"toml\"\n")
}

#[test]
fn reports_persist_across_runs() {
    let env = persistent_env();

    for _ in 0..3 {
        let result = env.run(&["feedback", "record", "燚", "--strokes", "16", "--reading", "えん"]);
        assert_success!(result);
    }
    let result = env.run(&["feedback", "record", "丂", "--strokes", "2"]);
    assert_success!(result);

    assert!(env.data_home().join("seimei/feedback.toml").exists());

    let result = env.run(&["feedback", "unsupported"]);
    assert_success!(result);
    assert_eq!(result.stdout.trim_end(), "燚    3");

    let result = env.run(&["feedback", "unsupported", "--threshold", "1"]);
    assert_success!(result);
    assert_eq!(result.stdout.lines().count(), 2);

    let result = env.run(&["--json", "feedback", "show", "燚"]);
    assert_success!(result);
    let json = result.json();
    assert_eq!(json["submissions"], 3);
    assert_eq!(json["suggested_strokes"], 16);
    assert_eq!(json["suggested_reading"], "えん");
}

#[test]
fn memory_store_forgets_between_runs() {
    let env = TestEnv::new();

    let result = env.run(&["feedback", "record", "燚", "--strokes", "16"]);
    assert_success!(result);
    assert_output_contains!(result, "燚 (1 submissions)");

    let result = env.run(&["feedback", "show", "燚"]);
    assert_success!(result);
    assert_output_contains!(result, "no feedback recorded");
}

#[test]
fn out_of_range_stroke_count_is_rejected() {
    let env = persistent_env();

    let result = env.run(&["feedback", "record", "燚", "--strokes", "0"]);
    assert!(!result.success);
    assert!(!env.data_home().join("seimei/feedback.toml").exists());
}

#[test]
fn feedback_path_from_environment() {
    let env = TestEnv::new();
    let path = env.path("elsewhere/feedback.toml");
    let env = env
        .with_env("SEIMEI_FEEDBACK_STORE", "toml")
        .with_env("SEIMEI_FEEDBACK_PATH", &path);

    let result = env.run(&["feedback", "record", "丂", "--old-form", "true"]);
    assert_success!(result);
    assert!(path.exists());
}
