use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        VisifError::syntax("x")
            .to_string()
            .contains("syntax error:")
    );
    assert!(
        VisifError::evaluation("x")
            .to_string()
            .contains("evaluation error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = VisifError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn constructor_helpers_pick_the_right_variant() {
    assert!(matches!(VisifError::syntax("x"), VisifError::Syntax(_)));
    assert!(matches!(
        VisifError::evaluation("x"),
        VisifError::Evaluation(_)
    ));
}
