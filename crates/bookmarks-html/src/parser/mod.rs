//! Parser module for tree construction.

/// Sets of acceptable tokens reported in parse errors.
pub mod expected;
/// Recursive-descent grammar.
pub mod grammar;

pub use expected::Expected;
pub use grammar::{ParseIssue, Parser};
