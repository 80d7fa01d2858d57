//! # Flowdown - Flow Node Compiler
//!
//! **Flowdown** turns the parsed form of an interview-flow node document into a
//! strongly typed model: ordered content elements, question prompts,
//! conditional content and the routing rules that pick the next node from the
//! answers collected so far.
//!
//! ## Core Workflow
//!
//! 1.  **Parse**: A grammar parser turns document text into a generic
//!     [`TreeNode`](tree::TreeNode) of leaves, sequences and tagged groups. The
//!     parser is pluggable through [`DocumentParser`](parser::DocumentParser);
//!     [`JsonTreeParser`](parser::JsonTreeParser) reads a serialised tree.
//! 2.  **Transform**: A [`Transformer`](transform::Transformer) rewrites the
//!     tree bottom-up. Each group is matched against the ordered rules of a
//!     [`RuleRegistry`](transform::RuleRegistry) and the first matching rule
//!     builds the domain object that replaces it.
//! 3.  **Use the model**: The result is a [`Node`](model::Node). Leaf text is
//!     kept verbatim, so a comparison against `"18"` stores `"18"`; numeric
//!     interpretation belongs to whoever evaluates predicates.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use flowdown::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let source = r#"{
//!         "front_matter": [{"name": "satisfies_need", "value": "101"}],
//!         "body": [
//!             {"h1": "How old are you?"},
//!             {"multiple_choice": {
//!                 "identifier": "age_range",
//!                 "options": [{"value": "young", "label": "Under 30"}]
//!             }}
//!         ]
//!     }"#;
//!
//!     let node = NodeInterpreter::new("age_question", source).interpret()?;
//!     println!("{}: {:?}", node.name, node.title());
//!     println!("{}", node.to_json()?);
//!     Ok(())
//! }
//! ```

pub mod artifact;
pub mod error;
pub mod interpreter;
pub mod model;
pub mod parser;
pub mod prelude;
pub mod transform;
pub mod tree;
