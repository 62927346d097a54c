use crate::expr::op::OperatorType;

/// One node of a built expression tree.
///
/// The tree is immutable once built and carries no graph state, so a single
/// tree can be evaluated concurrently against many graph instances.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Node {
    /// Literal boolean.
    BoolValue(bool),
    /// Literal numeric constant.
    FloatValue(f64),
    /// Symbolic reference to a sibling input, resolved at evaluation time.
    InputReference(String),
    /// Operator application; children are in left-to-right evaluation order
    /// and their count always equals the operator's arity.
    Operator(OperatorType, Vec<Node>),
}

impl Node {
    /// Depth of the tree; a leaf has depth 1.
    pub fn depth(&self) -> usize {
        match self {
            Self::BoolValue(_) | Self::FloatValue(_) | Self::InputReference(_) => 1,
            Self::Operator(_, children) => {
                1 + children.iter().map(Node::depth).max().unwrap_or(0)
            }
        }
    }

    /// Identifiers referenced anywhere in the tree, in first-occurrence
    /// order, without duplicates.
    pub fn referenced_inputs(&self) -> Vec<&str> {
        fn walk<'a>(node: &'a Node, out: &mut Vec<&'a str>) {
            match node {
                Node::InputReference(id) => {
                    if !out.contains(&id.as_str()) {
                        out.push(id);
                    }
                }
                Node::Operator(_, children) => {
                    for child in children {
                        walk(child, out);
                    }
                }
                Node::BoolValue(_) | Node::FloatValue(_) => {}
            }
        }

        let mut out = Vec::new();
        walk(self, &mut out);
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/expr/node.rs"]
mod tests;
