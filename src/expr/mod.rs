pub mod build;
pub mod node;
pub mod op;
pub mod token;
