use crate::expr::node::Node;
use crate::expr::op::OperatorType;
use crate::expr::token::{Token, TokenKind};
use crate::foundation::error::{VisifError, VisifResult};

/// Default cap on built-tree depth. Tree depth bounds every recursive walk
/// over the tree (evaluation, input collection, serialization, drop), so the
/// cap keeps stack usage bounded whatever shape the source takes.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Entries on the operator stack. `Paren` is the reduction barrier pushed
/// for `(` and discarded by its matching `)`.
#[derive(Clone, Copy, Debug)]
enum StackOp {
    Op(OperatorType),
    Paren,
}

/// Build an expression tree from a token stream with the default depth
/// limit.
pub fn build(tokens: &[Token]) -> VisifResult<Node> {
    build_with_max_depth(tokens, DEFAULT_MAX_DEPTH)
}

/// Build an expression tree from a token stream (shunting-yard).
///
/// Two stacks: pending operators, and already-built subtrees in output
/// order. Each operator pops every stacked operator that binds at least as
/// tightly (strictly tighter for the right-associative prefix operators)
/// before going onto the stack itself; popping an operator reduces it
/// against the output stack. Exactly one tree must remain at the end.
///
/// The output stack carries each subtree's depth so every reduction can
/// enforce `max_depth` before the tree grows past it. Parentheses do not
/// count: they group, but only operators add levels, and a paren-free
/// operator chain deepens the tree just as fast as nested groups.
pub fn build_with_max_depth(tokens: &[Token], max_depth: usize) -> VisifResult<Node> {
    let mut output: Vec<(Node, usize)> = Vec::new();
    let mut ops: Vec<StackOp> = Vec::new();
    // True when the previous token completed an operand; drives the
    // unary/binary reading of `+`/`-`.
    let mut have_operand = false;

    for token in tokens {
        match &token.kind {
            TokenKind::Bool(b) => {
                push_leaf(Node::BoolValue(*b), &mut output, max_depth)?;
                have_operand = true;
            }
            TokenKind::Float(v) => {
                push_leaf(Node::FloatValue(*v), &mut output, max_depth)?;
                have_operand = true;
            }
            TokenKind::Ident(id) => {
                push_leaf(Node::InputReference(id.clone()), &mut output, max_depth)?;
                have_operand = true;
            }
            TokenKind::LeftParen => {
                ops.push(StackOp::Paren);
                have_operand = false;
            }
            TokenKind::RightParen => {
                loop {
                    match ops.pop() {
                        Some(StackOp::Paren) => break,
                        Some(StackOp::Op(op)) => reduce(op, &mut output, max_depth)?,
                        None => {
                            return Err(VisifError::syntax(format!(
                                "unmatched ')' at offset {}",
                                token.offset
                            )));
                        }
                    }
                }
                have_operand = true;
            }
            TokenKind::Op(op) => {
                let op = match op {
                    OperatorType::Minus if !have_operand => OperatorType::UnaryMinus,
                    OperatorType::Plus if !have_operand => OperatorType::UnaryPlus,
                    other => *other,
                };

                if op.is_postfix() {
                    // Component accessors bind tightest and always apply to
                    // the operand just finished, so they reduce on the spot.
                    if !have_operand {
                        return Err(VisifError::syntax(format!(
                            "component accessor '{}' without a value at offset {}",
                            op.symbol(),
                            token.offset
                        )));
                    }
                    reduce(op, &mut output, max_depth)?;
                    continue;
                }

                loop {
                    let Some(&StackOp::Op(top)) = ops.last() else {
                        break;
                    };
                    let pops = if op.is_right_associative() {
                        top.precedence() > op.precedence()
                    } else {
                        top.precedence() >= op.precedence()
                    };
                    if !pops {
                        break;
                    }
                    ops.pop();
                    reduce(top, &mut output, max_depth)?;
                }
                ops.push(StackOp::Op(op));
                have_operand = false;
            }
        }
    }

    while let Some(entry) = ops.pop() {
        match entry {
            StackOp::Paren => return Err(VisifError::syntax("unmatched '('")),
            StackOp::Op(op) => reduce(op, &mut output, max_depth)?,
        }
    }

    let root = output.pop();
    match (root, output.len()) {
        (Some((root, _)), 0) => Ok(root),
        (None, _) => Err(VisifError::syntax("empty expression")),
        (Some(_), rest) => Err(VisifError::syntax(format!(
            "missing operator between operands ({} values left)",
            rest + 1
        ))),
    }
}

/// Push a leaf subtree; a leaf has depth 1.
fn push_leaf(node: Node, output: &mut Vec<(Node, usize)>, max_depth: usize) -> VisifResult<()> {
    if max_depth < 1 {
        return Err(depth_exceeded(max_depth));
    }
    output.push((node, 1));
    Ok(())
}

/// Pop the operator's operands off the output stack, in left-to-right
/// order, and push the built node back with its depth. Errors before the
/// tree can grow past `max_depth`.
fn reduce(
    op: OperatorType,
    output: &mut Vec<(Node, usize)>,
    max_depth: usize,
) -> VisifResult<()> {
    let arity = op.arity();
    if output.len() < arity {
        return Err(VisifError::syntax(format!(
            "operator '{}' is missing an operand",
            op.symbol()
        )));
    }
    let children = output.split_off(output.len() - arity);
    let depth = 1 + children.iter().map(|(_, d)| *d).max().unwrap_or(0);
    if depth > max_depth {
        return Err(depth_exceeded(max_depth));
    }
    let children = children.into_iter().map(|(node, _)| node).collect();
    output.push((Node::Operator(op, children), depth));
    Ok(())
}

fn depth_exceeded(max_depth: usize) -> VisifError {
    VisifError::syntax(format!(
        "expression depth exceeds the limit of {max_depth}"
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/expr/build.rs"]
mod tests;
