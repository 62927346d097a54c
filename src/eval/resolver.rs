use std::collections::BTreeMap;

use crate::foundation::value::InputValue;

/// Value-resolution capability supplied by the graph-instance layer.
///
/// A resolver maps an input identifier to that input's current value, or
/// `None` when the identifier names no live input (or its value cannot be
/// produced right now). Resolvers are passed fresh on every evaluation; a
/// compiled expression never stores one.
pub trait ResolveInput {
    /// Look up the current value of the input named `identifier`.
    fn resolve(&self, identifier: &str) -> Option<InputValue>;
}

/// Plain snapshot of input values keyed by identifier. Convenient for
/// tests, tools, and hosts that mirror graph state into a map.
pub type InputValues = BTreeMap<String, InputValue>;

impl ResolveInput for InputValues {
    fn resolve(&self, identifier: &str) -> Option<InputValue> {
        self.get(identifier).cloned()
    }
}

/// Adapter turning a closure into a resolver.
pub struct ResolverFn<F>(pub F);

impl<F> ResolveInput for ResolverFn<F>
where
    F: Fn(&str) -> Option<InputValue>,
{
    fn resolve(&self, identifier: &str) -> Option<InputValue> {
        (self.0)(identifier)
    }
}
