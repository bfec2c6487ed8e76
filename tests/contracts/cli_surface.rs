//! CONTRACT: subcommands and failure exit codes.

use crate::common::TestEnv;
use crate::{assert_output_contains, assert_success};

#[test]
fn contract_help_lists_subcommands() {
    let env = TestEnv::new();
    let result = env.run(&["--help"]);
    assert_success!(result);
    for command in ["analyze", "elements", "six-star", "compat", "strokes", "feedback"] {
        assert_output_contains!(result, command);
    }
}

#[test]
fn contract_version() {
    let env = TestEnv::new();
    let result = env.run(&["--version"]);
    assert_success!(result);
    assert_output_contains!(result, env!("CARGO_PKG_VERSION"));
}

#[test]
fn contract_usage_errors_exit_two() {
    let env = TestEnv::new();
    let result = env.run(&["analyze", "佐々木"]);
    assert_eq!(result.exit_code, 2);

    let result = env.run(&["compat", "a b", "c d", "-r", "rivals"]);
    assert_eq!(result.exit_code, 2);
}

#[test]
fn contract_domain_errors_exit_one() {
    let env = TestEnv::new();
    let result = env.run(&["six-star", "not-a-date"]);
    assert_eq!(result.exit_code, 1);
    assert_output_contains!(result, "invalid birthdate 'not-a-date'");
}
