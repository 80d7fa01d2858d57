//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the
//! flowdown crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use flowdown::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let source = std::fs::read_to_string("path/to/node.json")?;
//! let node = NodeInterpreter::new("start", &source).interpret()?;
//!
//! for question in node.questions() {
//!     println!("asks for {}", question.identifier());
//! }
//! # Ok(())
//! # }
//! ```

// Entry point and pipeline
pub use crate::interpreter::{NodeInterpreter, interpret};
pub use crate::parser::{DocumentParser, JsonTreeParser};
pub use crate::transform::{Context, Pattern, RuleRegistry, Transformed, Transformer};
pub use crate::tree::TreeNode;

// Domain model
pub use crate::model::{
    Comparison, ComparisonOperator, Conditional, Element, FrontMatter, NestedRule, NextNodeRules,
    Node, Predicate, PredicateResolver, Question, RoutingRule, Rule,
};

// Persistence
pub use crate::artifact::CompiledNode;

// Error types
pub use crate::error::{ArtifactError, InterpretError, ParseError, RegistryError, TransformError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
