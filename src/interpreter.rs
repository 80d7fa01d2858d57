use crate::error::InterpretError;
use crate::model::Node;
use crate::parser::{DocumentParser, JsonTreeParser};
use crate::transform::{Context, DEFAULT_MAX_DEPTH, RuleRegistry, Transformer};
use tracing::debug;

/// Compiles the source of one flow node into a [`Node`].
///
/// Defaults to [`JsonTreeParser`] and the standard rule registry; both can be
/// swapped for composition or testing.
pub struct NodeInterpreter<'a> {
    name: String,
    source: &'a str,
    parser: Box<dyn DocumentParser + 'a>,
    registry: Option<&'a RuleRegistry>,
    max_depth: usize,
}

impl<'a> NodeInterpreter<'a> {
    pub fn new(name: impl Into<String>, source: &'a str) -> Self {
        Self {
            name: name.into(),
            source,
            parser: Box::new(JsonTreeParser),
            registry: None,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_parser(mut self, parser: impl DocumentParser + 'a) -> Self {
        self.parser = Box::new(parser);
        self
    }

    pub fn with_registry(mut self, registry: &'a RuleRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parses the source and transforms it into a node.
    pub fn interpret(&self) -> Result<Node, InterpretError> {
        let registry = match self.registry {
            Some(registry) => registry,
            None => RuleRegistry::standard()?,
        };
        let tree = self.parser.parse(self.source)?;
        debug!(node = %self.name, depth = tree.depth(), "parsed node source");

        let node = Transformer::new(registry)
            .with_max_depth(self.max_depth)
            .transform_node(&tree, &Context::new(self.name.clone()))?;
        Ok(node)
    }
}

/// Interprets `source` as the node `name` with the default parser and rules.
pub fn interpret(name: &str, source: &str) -> Result<Node, InterpretError> {
    NodeInterpreter::new(name, source).interpret()
}
