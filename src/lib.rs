//! Visif is the conditional-visibility expression engine of a procedural
//! texture SDK.
//!
//! A texture graph exposes named input parameters; an input may carry a
//! `visibleif` expression deciding whether authoring tools should show its
//! control, based on the current values of sibling inputs — for example
//! `input["blend_mode"] == 2 && !advanced`. This crate owns exactly that
//! decision: it turns the expression string into an immutable tree once, and
//! reduces the tree to a boolean as often as the host asks.
//!
//! # Pipeline overview
//!
//! 1. **Tokenize**: `&str -> Vec<Token>` (literals, identifiers, operators,
//!    parentheses)
//! 2. **Build**: `Vec<Token> -> Node` (shunting-yard; precedence-correct,
//!    paren-free tree)
//! 3. **Evaluate**: `Node + resolver -> EvalValue` (pure post-order
//!    reduction; the resolver maps identifiers to current input values)
//!
//! [`VisibleIf`] packages the three stages behind a compile-once,
//! evaluate-many value type.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Stateless evaluation**: a compiled expression holds no graph state;
//!   the resolver snapshot is passed in fresh on every call, so one parsed
//!   expression serves every instance of the same graph, concurrently.
//! - **No IO**: tokenizing, building, and evaluating are synchronous,
//!   bounded computations over the expression itself.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod eval;
mod expr;
mod foundation;
mod visible_if;

pub use eval::evaluator::evaluate;
pub use eval::resolver::{InputValues, ResolveInput, ResolverFn};
pub use expr::build::{DEFAULT_MAX_DEPTH, build, build_with_max_depth};
pub use expr::node::Node;
pub use expr::op::OperatorType;
pub use expr::token::{Token, TokenKind, tokenize};
pub use foundation::error::{VisifError, VisifResult};
pub use foundation::value::{EvalValue, InputValue};
pub use visible_if::VisibleIf;
