use super::*;
use crate::eval::resolver::{InputValues, ResolverFn};
use crate::expr::build::build;
use crate::expr::token::tokenize;

fn compile(source: &str) -> Node {
    build(&tokenize(source).unwrap()).unwrap()
}

fn values(pairs: &[(&str, InputValue)]) -> InputValues {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

fn eval(source: &str, pairs: &[(&str, InputValue)]) -> VisifResult<EvalValue> {
    evaluate(&compile(source), &values(pairs))
}

#[test]
fn precedence_decides_arithmetic_results() {
    assert_eq!(eval("1 + 2 * 3", &[]).unwrap(), EvalValue::Float(7.0));
    assert_eq!(eval("(1 + 2) * 3", &[]).unwrap(), EvalValue::Float(9.0));
}

#[test]
fn reparsing_the_same_source_is_deterministic() {
    let source = "a > 5 && (b + 1) * 2 == 8";
    let snapshot = values(&[("a", 10.0.into()), ("b", 3.0.into())]);
    let first = compile(source);
    let second = compile(source);
    assert_eq!(first, second);
    assert_eq!(
        evaluate(&first, &snapshot).unwrap(),
        evaluate(&second, &snapshot).unwrap()
    );
}

#[test]
fn comparison_and_conjunction() {
    let expr = "a > 5 && b == 1";
    assert_eq!(
        eval(expr, &[("a", 10.0.into()), ("b", 1.0.into())]).unwrap(),
        EvalValue::Bool(true)
    );
    assert_eq!(
        eval(expr, &[("a", 3.0.into()), ("b", 1.0.into())]).unwrap(),
        EvalValue::Bool(false)
    );
}

#[test]
fn unary_minus_in_arithmetic() {
    assert_eq!(
        eval("-a + 3", &[("a", 2.0.into())]).unwrap(),
        EvalValue::Float(1.0)
    );
    assert_eq!(
        eval("a - -3", &[("a", 2.0.into())]).unwrap(),
        EvalValue::Float(5.0)
    );
}

#[test]
fn unresolved_input_is_an_evaluation_error() {
    let err = eval("unknownInput == 1", &[]).unwrap_err();
    assert!(matches!(err, VisifError::Evaluation(_)));
    assert!(err.to_string().contains("unknownInput"));
}

#[test]
fn division_by_zero_is_an_evaluation_error() {
    let err = eval("a / 0", &[("a", 4.0.into())]).unwrap_err();
    assert!(err.to_string().contains("division by zero"));
    assert_eq!(
        eval("a / 2", &[("a", 4.0.into())]).unwrap(),
        EvalValue::Float(2.0)
    );
}

#[test]
fn arithmetic_rejects_booleans() {
    let err = eval("true + 1", &[]).unwrap_err();
    assert!(matches!(err, VisifError::Evaluation(_)));
    assert!(err.to_string().contains("'+'"));
}

#[test]
fn component_accessors_narrow_vectors() {
    let v: &[(&str, InputValue)] = &[("v", vec![1.0, 2.0, 3.0].into())];
    assert_eq!(eval("v.y", v).unwrap(), EvalValue::Float(2.0));
    assert_eq!(eval("v.x + v.z", v).unwrap(), EvalValue::Float(4.0));
    assert!(eval("v.w", v).is_err());
}

#[test]
fn first_component_of_a_scalar_is_the_scalar() {
    let s: &[(&str, InputValue)] = &[("s", 7.0.into())];
    assert_eq!(eval("s.x", s).unwrap(), EvalValue::Float(7.0));
    assert!(eval("s.y", s).is_err());
}

#[test]
fn bare_vector_result_is_an_evaluation_error() {
    let err = eval("v", &[("v", vec![1.0, 2.0].into())]).unwrap_err();
    assert!(err.to_string().contains("component accessor"));
}

#[test]
fn equality_works_on_both_scalar_kinds() {
    assert_eq!(eval("true == true", &[]).unwrap(), EvalValue::Bool(true));
    assert_eq!(eval("true != false", &[]).unwrap(), EvalValue::Bool(true));
    assert_eq!(eval("1 == 2", &[]).unwrap(), EvalValue::Bool(false));
    assert!(eval("true == 1", &[]).is_err());
}

#[test]
fn ordering_is_float_only() {
    assert_eq!(eval("1 < 2", &[]).unwrap(), EvalValue::Bool(true));
    assert!(eval("true < false", &[]).is_err());
}

#[test]
fn logical_operators_evaluate_both_branches() {
    // `a` alone decides the result, yet the broken branch still errors.
    assert!(eval("a || missing == 1", &[("a", true.into())]).is_err());
    assert!(eval("a && missing == 1", &[("a", false.into())]).is_err());
}

#[test]
fn logical_operators_reject_floats() {
    assert!(eval("1 && true", &[]).is_err());
    assert!(eval("true || 0", &[]).is_err());
}

#[test]
fn not_requires_a_bool() {
    assert_eq!(eval("!false", &[]).unwrap(), EvalValue::Bool(true));
    assert!(eval("!1", &[]).is_err());
}

#[test]
fn evaluation_is_idempotent() {
    let node = compile("(a + 1) * 2 > 5");
    let snapshot = values(&[("a", 3.0.into())]);
    let first = evaluate(&node, &snapshot).unwrap();
    let second = evaluate(&node, &snapshot).unwrap();
    assert_eq!(first, second);
    assert_eq!(first, EvalValue::Bool(true));
}

#[test]
fn closure_resolvers_work_through_the_adapter() {
    let resolver = ResolverFn(|id: &str| match id {
        "a" => Some(InputValue::Float(10.0)),
        _ => None,
    });
    let node = compile("a > 5");
    assert_eq!(evaluate(&node, &resolver).unwrap(), EvalValue::Bool(true));
}

#[test]
fn malformed_trees_report_arity_mismatches() {
    // Trees can arrive via deserialization, not only from the builder.
    let bad = Node::Operator(OperatorType::Plus, vec![Node::FloatValue(1.0)]);
    let err = evaluate(&bad, &InputValues::new()).unwrap_err();
    assert!(err.to_string().contains("expected 2"));
}
