use crate::foundation::error::{VisifError, VisifResult};

/// Current value of a graph input, as surfaced by a resolver.
///
/// Numeric inputs of the surrounding framework come in scalar and
/// multi-component flavors (float2/3/4, int2/3/4); integers are widened to
/// `f64` before they reach the expression engine. `Vector` carries the
/// components in declaration order and is only consumable through the
/// `.x`/`.y`/`.z`/`.w` accessors.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum InputValue {
    /// Boolean input (toggles).
    Bool(bool),
    /// Scalar numeric input.
    Float(f64),
    /// Multi-component numeric input, components in declaration order.
    Vector(Vec<f64>),
}

impl InputValue {
    /// Extract the 1-based `component` as a float.
    ///
    /// A scalar behaves as an arity-1 vector, so component 1 of a `Float` is
    /// the value itself. Booleans have no components.
    pub fn component(&self, component: usize) -> VisifResult<f64> {
        debug_assert!((1..=4).contains(&component));
        match self {
            Self::Float(v) if component == 1 => Ok(*v),
            Self::Float(_) => Err(VisifError::evaluation(format!(
                "component {component} requested on a scalar value"
            ))),
            Self::Vector(comps) => comps.get(component - 1).copied().ok_or_else(|| {
                VisifError::evaluation(format!(
                    "component {component} requested on a {}-component value",
                    comps.len()
                ))
            }),
            Self::Bool(_) => Err(VisifError::evaluation(
                "component access on a boolean value",
            )),
        }
    }

    /// Short kind name used in type-mismatch messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Float(_) => "float",
            Self::Vector(_) => "vector",
        }
    }
}

impl From<bool> for InputValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<f64> for InputValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<Vec<f64>> for InputValue {
    fn from(v: Vec<f64>) -> Self {
        Self::Vector(v)
    }
}

/// Result of evaluating an expression.
///
/// Only scalars survive a full evaluation; vectors must be narrowed by a
/// component accessor inside the expression.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum EvalValue {
    /// Boolean result.
    Bool(bool),
    /// Numeric result.
    Float(f64),
}

impl EvalValue {
    /// Coerce to the visibility decision: booleans as-is, floats via the
    /// non-zero test.
    pub fn as_bool(self) -> bool {
        match self {
            Self::Bool(b) => b,
            Self::Float(v) => v != 0.0,
        }
    }
}

impl std::fmt::Display for EvalValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Float(v) => write!(f, "{v}"),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/value.rs"]
mod tests;
