pub mod builtins;
pub mod environment;
pub mod error;
pub mod evaluator;
