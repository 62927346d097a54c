/// Convenience result type used across visif.
pub type VisifResult<T> = Result<T, VisifError>;

/// Top-level error taxonomy used by the expression engine.
///
/// `Syntax` covers everything that can go wrong while tokenizing or building
/// an expression string; such an error is fatal for that expression. The
/// string indicates a malformed graph description and should be surfaced to
/// the graph author. `Evaluation` covers per-call failures (unresolved input,
/// type mismatch, division by zero, component out of range); the parsed
/// expression stays valid and may succeed on the next call.
#[derive(thiserror::Error, Debug)]
pub enum VisifError {
    /// Malformed expression source: unrecognized character, bad literal,
    /// unbalanced parentheses, missing operand or operator, depth exceeded.
    #[error("syntax error: {0}")]
    Syntax(String),

    /// Errors while evaluating a built expression against input values.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl VisifError {
    /// Build a [`VisifError::Syntax`] value.
    pub fn syntax(msg: impl Into<String>) -> Self {
        Self::Syntax(msg.into())
    }

    /// Build a [`VisifError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
