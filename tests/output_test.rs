mod common;

use ai_readability::{analyze, AnalysisResult};
use serde_json::Value;

#[test]
fn json_output_uses_camel_case_and_kebab_case_names() {
    let result = analyze("");
    let json: Value = serde_json::from_str(&result.to_json().expect("serializes")).expect("valid JSON");

    assert!(json["overallScore"].is_u64());
    for key in [
        "answerPlacement",
        "factDensity",
        "headingStructure",
        "eeat",
        "snippability",
        "schema",
    ] {
        assert!(json["breakdown"][key].is_u64(), "missing breakdown.{key}");
    }

    let first = &json["issues"][0];
    assert_eq!(first["type"], "answer-placement");
    assert_eq!(first["severity"], "high");
    assert!(first["message"].is_string());
    assert!(first["fix"].is_string());
    assert!(json["recommendations"].is_array());
}

#[test]
fn pretty_output_parses_back_to_the_same_result() {
    let result = analyze(common::WELL_OPTIMIZED_PAGE);
    let pretty = result.to_json_pretty().expect("serializes");

    assert!(pretty.contains('\n'));
    let parsed: AnalysisResult = serde_json::from_str(&pretty).expect("deserializes");
    assert_eq!(parsed, result);
}
