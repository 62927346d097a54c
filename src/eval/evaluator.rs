use crate::{
    eval::resolver::ResolveInput,
    expr::node::Node,
    expr::op::OperatorType,
    foundation::error::{VisifError, VisifResult},
    foundation::value::{EvalValue, InputValue},
};

/// Evaluate a built expression against a resolver.
///
/// Pure post-order reduction: children first, then the operator. Logical
/// operators evaluate both children eagerly, so a resolution failure in
/// either branch always surfaces, whatever the other branch is worth. The
/// final value must be a scalar; a vector reaching the top level is an
/// evaluation error (narrow it with `.x`/`.y`/`.z`/`.w` in the expression).
pub fn evaluate<R: ResolveInput>(node: &Node, resolver: &R) -> VisifResult<EvalValue> {
    match eval_node(node, resolver)? {
        InputValue::Bool(b) => Ok(EvalValue::Bool(b)),
        InputValue::Float(v) => Ok(EvalValue::Float(v)),
        InputValue::Vector(_) => Err(VisifError::evaluation(
            "expression evaluates to a vector; apply a component accessor",
        )),
    }
}

fn eval_node<R: ResolveInput>(node: &Node, resolver: &R) -> VisifResult<InputValue> {
    match node {
        Node::BoolValue(b) => Ok(InputValue::Bool(*b)),
        Node::FloatValue(v) => Ok(InputValue::Float(*v)),
        Node::InputReference(id) => resolver
            .resolve(id)
            .ok_or_else(|| VisifError::evaluation(format!("unresolved input '{id}'"))),
        // The builder guarantees the arity invariant, but trees can also
        // arrive via deserialization, so slice patterns keep this total.
        Node::Operator(op, children) => match children.as_slice() {
            [operand] if op.arity() == 1 => {
                let value = eval_node(operand, resolver)?;
                apply_unary(*op, value)
            }
            [lhs, rhs] if op.arity() == 2 => {
                let lhs = eval_node(lhs, resolver)?;
                let rhs = eval_node(rhs, resolver)?;
                apply_binary(*op, lhs, rhs)
            }
            _ => Err(VisifError::evaluation(format!(
                "operator '{}' has {} operand(s), expected {}",
                op.symbol(),
                children.len(),
                op.arity()
            ))),
        },
    }
}

fn apply_unary(op: OperatorType, value: InputValue) -> VisifResult<InputValue> {
    match op {
        OperatorType::UnaryMinus => match value {
            InputValue::Float(v) => Ok(InputValue::Float(-v)),
            other => Err(type_mismatch_unary(op, &other, "a float")),
        },
        OperatorType::UnaryPlus => match value {
            InputValue::Float(v) => Ok(InputValue::Float(v)),
            other => Err(type_mismatch_unary(op, &other, "a float")),
        },
        OperatorType::Not => match value {
            InputValue::Bool(b) => Ok(InputValue::Bool(!b)),
            other => Err(type_mismatch_unary(op, &other, "a bool")),
        },
        OperatorType::GetComp1 => value.component(1).map(InputValue::Float),
        OperatorType::GetComp2 => value.component(2).map(InputValue::Float),
        OperatorType::GetComp3 => value.component(3).map(InputValue::Float),
        OperatorType::GetComp4 => value.component(4).map(InputValue::Float),
        other => Err(VisifError::evaluation(format!(
            "operator '{}' is not unary",
            other.symbol()
        ))),
    }
}

fn apply_binary(op: OperatorType, lhs: InputValue, rhs: InputValue) -> VisifResult<InputValue> {
    use InputValue::{Bool, Float};

    match op {
        OperatorType::Or => match (lhs, rhs) {
            (Bool(a), Bool(b)) => Ok(Bool(a || b)),
            (lhs, rhs) => Err(type_mismatch_binary(op, &lhs, &rhs, "bool")),
        },
        OperatorType::And => match (lhs, rhs) {
            (Bool(a), Bool(b)) => Ok(Bool(a && b)),
            (lhs, rhs) => Err(type_mismatch_binary(op, &lhs, &rhs, "bool")),
        },
        // Equality accepts either scalar kind, as long as both sides agree.
        OperatorType::CompEq => match (lhs, rhs) {
            (Float(a), Float(b)) => Ok(Bool(a == b)),
            (Bool(a), Bool(b)) => Ok(Bool(a == b)),
            (lhs, rhs) => Err(type_mismatch_binary(op, &lhs, &rhs, "matching scalar")),
        },
        OperatorType::CompNeq => match (lhs, rhs) {
            (Float(a), Float(b)) => Ok(Bool(a != b)),
            (Bool(a), Bool(b)) => Ok(Bool(a != b)),
            (lhs, rhs) => Err(type_mismatch_binary(op, &lhs, &rhs, "matching scalar")),
        },
        OperatorType::CompGt => ordered(op, lhs, rhs, |a, b| a > b),
        OperatorType::CompGe => ordered(op, lhs, rhs, |a, b| a >= b),
        OperatorType::CompLt => ordered(op, lhs, rhs, |a, b| a < b),
        OperatorType::CompLe => ordered(op, lhs, rhs, |a, b| a <= b),
        OperatorType::Plus => arithmetic(op, lhs, rhs, |a, b| a + b),
        OperatorType::Minus => arithmetic(op, lhs, rhs, |a, b| a - b),
        OperatorType::Mul => arithmetic(op, lhs, rhs, |a, b| a * b),
        OperatorType::Div => match (lhs, rhs) {
            (Float(_), Float(b)) if b == 0.0 => {
                Err(VisifError::evaluation("division by zero"))
            }
            (Float(a), Float(b)) => Ok(Float(a / b)),
            (lhs, rhs) => Err(type_mismatch_binary(op, &lhs, &rhs, "float")),
        },
        other => Err(VisifError::evaluation(format!(
            "operator '{}' is not binary",
            other.symbol()
        ))),
    }
}

/// Numeric ordering comparison; IEEE semantics via plain float comparison.
fn ordered(
    op: OperatorType,
    lhs: InputValue,
    rhs: InputValue,
    cmp: fn(f64, f64) -> bool,
) -> VisifResult<InputValue> {
    match (lhs, rhs) {
        (InputValue::Float(a), InputValue::Float(b)) => Ok(InputValue::Bool(cmp(a, b))),
        (lhs, rhs) => Err(type_mismatch_binary(op, &lhs, &rhs, "float")),
    }
}

fn arithmetic(
    op: OperatorType,
    lhs: InputValue,
    rhs: InputValue,
    apply: fn(f64, f64) -> f64,
) -> VisifResult<InputValue> {
    match (lhs, rhs) {
        (InputValue::Float(a), InputValue::Float(b)) => Ok(InputValue::Float(apply(a, b))),
        (lhs, rhs) => Err(type_mismatch_binary(op, &lhs, &rhs, "float")),
    }
}

fn type_mismatch_unary(op: OperatorType, value: &InputValue, expected: &str) -> VisifError {
    VisifError::evaluation(format!(
        "operator '{}' expects {expected} operand, got {}",
        op.symbol(),
        value.kind_name()
    ))
}

fn type_mismatch_binary(
    op: OperatorType,
    lhs: &InputValue,
    rhs: &InputValue,
    expected: &str,
) -> VisifError {
    VisifError::evaluation(format!(
        "operator '{}' expects {expected} operands, got {} and {}",
        op.symbol(),
        lhs.kind_name(),
        rhs.kind_name()
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/eval/evaluator.rs"]
mod tests;
