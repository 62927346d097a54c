pub mod evaluator;
pub mod resolver;
