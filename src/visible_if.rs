use crate::{
    eval::evaluator::evaluate,
    eval::resolver::ResolveInput,
    expr::build::{DEFAULT_MAX_DEPTH, build_with_max_depth},
    expr::node::Node,
    expr::token::tokenize,
    foundation::error::VisifResult,
    foundation::value::EvalValue,
};

/// A compiled conditional-visibility expression.
///
/// Built once from the source string stored in the graph description, owned
/// by the input descriptor it conditions, and evaluated any number of times
/// against fresh resolver snapshots. The value is immutable after
/// compilation and holds no reference to any graph instance, so one
/// `VisibleIf` serves every instance of the same graph, from any thread.
///
/// An input with no visibleif condition is unconditionally visible; hosts
/// model that as `Option<VisibleIf>` in their descriptors.
#[derive(Clone, Debug, PartialEq)]
pub struct VisibleIf {
    source: String,
    root: Node,
}

impl VisibleIf {
    /// Tokenize and build `source` with the default depth limit.
    #[tracing::instrument]
    pub fn compile(source: &str) -> VisifResult<Self> {
        Self::compile_with_max_depth(source, DEFAULT_MAX_DEPTH)
    }

    /// Tokenize and build `source`, capping the built tree's depth at
    /// `max_depth`. The cap bounds every later recursive walk over the
    /// tree, including evaluation.
    pub fn compile_with_max_depth(source: &str, max_depth: usize) -> VisifResult<Self> {
        let tokens = tokenize(source)?;
        let root = build_with_max_depth(&tokens, max_depth)?;
        Ok(Self {
            source: source.to_string(),
            root,
        })
    }

    /// The raw expression string this value was compiled from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The built expression tree.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Identifiers of every sibling input the expression reads.
    pub fn referenced_inputs(&self) -> Vec<&str> {
        self.root.referenced_inputs()
    }

    /// Evaluate against the given resolver and return the raw result.
    pub fn evaluate<R: ResolveInput>(&self, resolver: &R) -> VisifResult<EvalValue> {
        evaluate(&self.root, resolver)
    }

    /// Evaluate and coerce to the visibility decision (floats via the
    /// non-zero test).
    pub fn is_visible<R: ResolveInput>(&self, resolver: &R) -> VisifResult<bool> {
        Ok(self.evaluate(resolver)?.as_bool())
    }

    /// Evaluate, falling back to `default` on any evaluation error.
    ///
    /// A failed evaluation is a per-call condition (a referenced sibling may
    /// transiently have no value); it is logged and answered with the
    /// caller's fallback policy instead of propagating.
    pub fn is_visible_or<R: ResolveInput>(&self, resolver: &R, default: bool) -> bool {
        match self.is_visible(resolver) {
            Ok(visible) => visible,
            Err(err) => {
                tracing::warn!(
                    source = %self.source,
                    error = %err,
                    fallback = default,
                    "visibleif evaluation failed; using fallback visibility"
                );
                default
            }
        }
    }
}

impl std::fmt::Display for VisibleIf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.source)
    }
}

// The raw expression string is the only persisted artifact, so a
// `VisibleIf` serializes as that string and deserializes by compiling one.
impl serde::Serialize for VisibleIf {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.source)
    }
}

impl<'de> serde::Deserialize<'de> for VisibleIf {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let source = String::deserialize(deserializer)?;
        Self::compile(&source).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "../tests/unit/visible_if.rs"]
mod tests;
