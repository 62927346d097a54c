use super::*;
use crate::eval::resolver::InputValues;
use crate::foundation::error::VisifError;
use crate::foundation::value::InputValue;

fn snapshot(pairs: &[(&str, InputValue)]) -> InputValues {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

#[test]
fn compile_then_ask_for_visibility() {
    let expr = VisibleIf::compile("input[\"blend_mode\"] == 2 && !advanced").unwrap();
    assert!(
        expr.is_visible(&snapshot(&[
            ("blend_mode", 2.0.into()),
            ("advanced", false.into()),
        ]))
        .unwrap()
    );
    assert!(
        !expr
            .is_visible(&snapshot(&[
                ("blend_mode", 1.0.into()),
                ("advanced", false.into()),
            ]))
            .unwrap()
    );
}

#[test]
fn float_results_coerce_via_non_zero() {
    let expr = VisibleIf::compile("2 + 3").unwrap();
    assert_eq!(expr.evaluate(&InputValues::new()).unwrap(), EvalValue::Float(5.0));
    assert!(expr.is_visible(&InputValues::new()).unwrap());
    assert!(
        !VisibleIf::compile("0")
            .unwrap()
            .is_visible(&InputValues::new())
            .unwrap()
    );
}

#[test]
fn compile_rejects_malformed_sources() {
    let err = VisibleIf::compile("(a + 1").unwrap_err();
    assert!(matches!(err, VisifError::Syntax(_)));
    assert!(VisibleIf::compile("").is_err());
}

#[test]
fn custom_depth_limit_is_honored() {
    assert!(VisibleIf::compile_with_max_depth("!!a", 3).is_ok());
    assert!(VisibleIf::compile_with_max_depth("!!a", 2).is_err());
}

#[test]
fn fallback_covers_evaluation_failures_only() {
    let expr = VisibleIf::compile("missing == 1").unwrap();
    assert!(expr.is_visible_or(&InputValues::new(), true));
    assert!(!expr.is_visible_or(&InputValues::new(), false));
    // A resolvable expression ignores the fallback.
    let expr = VisibleIf::compile("true").unwrap();
    assert!(expr.is_visible_or(&InputValues::new(), false));
}

#[test]
fn referenced_inputs_come_from_the_tree() {
    let expr = VisibleIf::compile("a > 1 && input[\"b\"] == a").unwrap();
    assert_eq!(expr.referenced_inputs(), vec!["a", "b"]);
}

#[test]
fn display_and_source_echo_the_input() {
    let expr = VisibleIf::compile("a > 1").unwrap();
    assert_eq!(expr.source(), "a > 1");
    assert_eq!(expr.to_string(), "a > 1");
}

#[test]
fn serializes_as_the_source_string() {
    let expr = VisibleIf::compile("a > 5 && b == 1").unwrap();
    let json = serde_json::to_string(&expr).unwrap();
    assert_eq!(json, "\"a > 5 && b == 1\"");

    let back: VisibleIf = serde_json::from_str(&json).unwrap();
    assert_eq!(back, expr);
    assert!(
        back.is_visible(&snapshot(&[("a", 6.0.into()), ("b", 1.0.into())]))
            .unwrap()
    );
}

#[test]
fn deserializing_a_malformed_expression_fails() {
    let result: Result<VisibleIf, _> = serde_json::from_str("\"a ++\"");
    assert!(result.is_err());
}
