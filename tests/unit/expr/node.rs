use super::*;

fn sample_tree() -> Node {
    // a > 5 && a == b
    Node::Operator(
        OperatorType::And,
        vec![
            Node::Operator(
                OperatorType::CompGt,
                vec![
                    Node::InputReference("a".to_string()),
                    Node::FloatValue(5.0),
                ],
            ),
            Node::Operator(
                OperatorType::CompEq,
                vec![
                    Node::InputReference("a".to_string()),
                    Node::InputReference("b".to_string()),
                ],
            ),
        ],
    )
}

#[test]
fn leaf_depth_is_one() {
    assert_eq!(Node::BoolValue(true).depth(), 1);
    assert_eq!(Node::FloatValue(0.0).depth(), 1);
    assert_eq!(Node::InputReference("a".to_string()).depth(), 1);
}

#[test]
fn depth_follows_the_deepest_child() {
    assert_eq!(sample_tree().depth(), 3);
    let nested = Node::Operator(
        OperatorType::Not,
        vec![Node::Operator(
            OperatorType::Not,
            vec![Node::BoolValue(true)],
        )],
    );
    assert_eq!(nested.depth(), 3);
}

#[test]
fn referenced_inputs_dedupe_in_first_occurrence_order() {
    assert_eq!(sample_tree().referenced_inputs(), vec!["a", "b"]);
    assert!(Node::FloatValue(1.0).referenced_inputs().is_empty());
}

#[test]
fn trees_round_trip_through_json() {
    let tree = sample_tree();
    let json = serde_json::to_string(&tree).unwrap();
    let back: Node = serde_json::from_str(&json).unwrap();
    assert_eq!(back, tree);
}
