//! CONTRACT: `--json` output is a single pretty-printed document on stdout
//! with stable field names.

use crate::assert_success;
use crate::common::TestEnv;

#[test]
fn contract_analysis_fields() {
    let env = TestEnv::new();
    let result = env.run(&["--json", "analyze", "佐々木", "健人", "-g", "female"]);
    assert_success!(result);

    let json = result.json();
    for key in ["name", "gender", "characters", "grids", "fortunes", "total_score", "unresolved"] {
        assert!(json.get(key).is_some(), "missing '{key}' in {json}");
    }
    assert_eq!(json["name"]["surname"]["text"], "佐々木");
    assert_eq!(json["characters"].as_array().unwrap().len(), 5);
    assert_eq!(json["characters"][1]["lookup"]["inherited"], true);
    assert_eq!(json["fortunes"]["total"]["value"], 31);
    assert!(result.stderr.is_empty(), "unexpected stderr: {}", result.stderr);
}

#[test]
fn contract_compat_directional_fit_only_for_business() {
    let env = TestEnv::new();

    let romance = env.run(&["--json", "compat", "佐々木 健人", "林 健太", "-r", "friendship"]);
    assert_success!(romance);
    assert!(romance.json()["categories"].get("directional_fit").is_none());

    let business = env.run(&["--json", "compat", "佐々木 健人", "林 健太", "-r", "business"]);
    assert_success!(business);
    assert_eq!(business.json()["categories"]["directional_fit"], 60);
    assert_eq!(business.json()["relationship"], "business");
}

#[test]
fn contract_six_star_fields() {
    let env = TestEnv::new();
    let result = env.run(&["--json", "six-star", "2000-11-14"]);
    assert_success!(result);

    let json = result.json();
    assert_eq!(json["birthdate"], "2000-11-14");
    assert_eq!(json["destiny_number"], 60);
    assert_eq!(json["star_number"], 13);
}

#[test]
fn contract_feedback_show_is_null_when_empty() {
    let env = TestEnv::new();
    let result = env.run(&["--json", "feedback", "show", "燚"]);
    assert_success!(result);
    assert!(result.json().is_null());
}
