use crate::error::TransformError;
use crate::model::Node;
use crate::tree::TreeNode;
use tracing::{debug, trace, warn};

pub mod pattern;
pub mod registry;
mod rules;
pub mod value;

pub use pattern::{Captures, Pattern};
pub use registry::{BuildFn, RegistryBuilder, RuleRegistry, TransformRule};
pub use value::{DomainObject, Transformed};

/// Deepest tree nesting a transformer descends into before giving up.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Ambient values available to every rule builder during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    pub node_name: String,
}

impl Context {
    pub fn new(node_name: impl Into<String>) -> Self {
        Self {
            node_name: node_name.into(),
        }
    }
}

/// Rewrites a generic tree bottom-up using a rule registry.
///
/// Every child is transformed before its parent is matched, so a parent
/// pattern always sees fully built objects in its subtree slots. The first
/// matching rule replaces the node; a node no rule matches is passed up
/// unchanged for its parent's patterns to capture.
#[derive(Debug, Clone, Copy)]
pub struct Transformer<'r> {
    registry: &'r RuleRegistry,
    max_depth: usize,
}

impl<'r> Transformer<'r> {
    pub fn new(registry: &'r RuleRegistry) -> Self {
        Self {
            registry,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Transforms `tree`, returning whatever the root rewrites to.
    pub fn apply(&self, tree: &TreeNode, context: &Context) -> Result<Transformed, TransformError> {
        self.apply_at(tree, context, 1)
    }

    /// Transforms `tree` and requires the result to be a complete node.
    pub fn transform_node(&self, tree: &TreeNode, context: &Context) -> Result<Node, TransformError> {
        debug!(node = %context.node_name, "transforming node");
        let result = self
            .apply(tree, context)
            .and_then(|transformed| transformed.into_node(&context.node_name));
        match &result {
            Ok(node) => debug!(node = %node.name, elements = node.body.len(), "node transformed"),
            Err(e) => warn!(node = %context.node_name, error = %e, "node transformation failed"),
        }
        result
    }

    fn apply_at(
        &self,
        tree: &TreeNode,
        context: &Context,
        depth: usize,
    ) -> Result<Transformed, TransformError> {
        if depth > self.max_depth {
            return Err(TransformError::DepthExceeded {
                limit: self.max_depth,
            });
        }

        let node = match tree {
            TreeNode::Leaf(text) => return Ok(Transformed::Leaf(text.clone())),
            TreeNode::Sequence(items) => Transformed::Sequence(
                items
                    .iter()
                    .map(|item| self.apply_at(item, context, depth + 1))
                    .collect::<Result<_, _>>()?,
            ),
            TreeNode::Group(entries) => Transformed::Group(
                entries
                    .iter()
                    .map(|(key, value)| Ok((key.clone(), self.apply_at(value, context, depth + 1)?)))
                    .collect::<Result<_, TransformError>>()?,
            ),
        };

        match self.registry.find(&node) {
            Some((rule, captures)) => {
                trace!(rule = rule.name, depth, "rule applied");
                rule.build(captures, context)
            }
            None => Ok(node),
        }
    }
}
