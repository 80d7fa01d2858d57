use crate::error::TransformError;
use crate::model::{Element, FrontMatter, Node, Predicate, RoutingRule};
use indexmap::IndexMap;
use itertools::Itertools;
use std::fmt;

/// A tree part-way through rewriting: raw structure whose subtrees may
/// already have been replaced by domain objects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transformed {
    Leaf(String),
    Sequence(Vec<Transformed>),
    Group(IndexMap<String, Transformed>),
    Object(DomainObject),
}

/// Everything a rule builder can produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainObject {
    Node(Node),
    FrontMatter(FrontMatter),
    Element(Element),
    Predicate(Predicate),
    Rule(RoutingRule),
    /// Intermediate key/value production (attributes, options, links).
    Pair(String, String),
}

impl DomainObject {
    fn kind(&self) -> &'static str {
        match self {
            DomainObject::Node(_) => "Node",
            DomainObject::FrontMatter(_) => "FrontMatter",
            DomainObject::Element(_) => "Element",
            DomainObject::Predicate(_) => "Predicate",
            DomainObject::Rule(_) => "Rule",
            DomainObject::Pair(..) => "Pair",
        }
    }
}

impl Transformed {
    pub fn element(element: impl Into<Element>) -> Self {
        Transformed::Object(DomainObject::Element(element.into()))
    }

    pub fn predicate(predicate: Predicate) -> Self {
        Transformed::Object(DomainObject::Predicate(predicate))
    }

    pub fn rule(rule: impl Into<RoutingRule>) -> Self {
        Transformed::Object(DomainObject::Rule(rule.into()))
    }

    pub fn pair(key: String, value: String) -> Self {
        Transformed::Object(DomainObject::Pair(key, value))
    }

    fn mismatch(&self, expected: &str) -> TransformError {
        TransformError::ShapeMismatch {
            expected: expected.to_string(),
            found: self.to_string(),
        }
    }

    pub fn into_text(self) -> Result<String, TransformError> {
        match self {
            Transformed::Leaf(text) => Ok(text),
            other => Err(other.mismatch("a leaf")),
        }
    }

    /// Treats the value as a list. An empty leaf stands for an empty
    /// repetition and any other single value becomes a one-item list.
    pub fn into_sequence(self) -> Vec<Transformed> {
        match self {
            Transformed::Sequence(items) => items,
            Transformed::Leaf(text) if text.is_empty() => Vec::new(),
            other => vec![other],
        }
    }

    pub fn into_predicate(self) -> Result<Predicate, TransformError> {
        match self {
            Transformed::Object(DomainObject::Predicate(predicate)) => Ok(predicate),
            other => Err(other.mismatch("a predicate")),
        }
    }

    pub fn into_element(self) -> Result<Element, TransformError> {
        match self {
            Transformed::Object(DomainObject::Element(element)) => Ok(element),
            other => Err(other.mismatch("an element")),
        }
    }

    pub fn into_routing_rule(self) -> Result<RoutingRule, TransformError> {
        match self {
            Transformed::Object(DomainObject::Rule(rule)) => Ok(rule),
            other => Err(other.mismatch("a rule or nested rule")),
        }
    }

    pub fn into_pair(self) -> Result<(String, String), TransformError> {
        match self {
            Transformed::Object(DomainObject::Pair(key, value)) => Ok((key, value)),
            other => Err(other.mismatch("a key/value pair")),
        }
    }

    /// Unwraps the final result of a run into the node it describes.
    ///
    /// A document holding only front matter reduces to `[FrontMatter]`,
    /// which is accepted as a node with an empty body.
    pub fn into_node(self, node_name: &str) -> Result<Node, TransformError> {
        match self {
            Transformed::Object(DomainObject::Node(node)) => Ok(node),
            Transformed::Sequence(items) => {
                if let [Transformed::Object(DomainObject::FrontMatter(front_matter))] =
                    items.as_slice()
                {
                    return Ok(Node::new(node_name, Vec::new(), front_matter.clone()));
                }
                Err(Transformed::Sequence(items).mismatch("a node"))
            }
            other => Err(other.mismatch("a node")),
        }
    }
}

/// Structural signature for diagnostics; built objects show as `<Kind>`.
impl fmt::Display for Transformed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transformed::Leaf(text) => write!(f, "{:?}", text),
            Transformed::Sequence(items) => write!(f, "[{}]", items.iter().join(", ")),
            Transformed::Group(entries) => write!(
                f,
                "{{{}}}",
                entries
                    .iter()
                    .map(|(k, v)| format!("{}: {}", k, v))
                    .join(", ")
            ),
            Transformed::Object(object) => write!(f, "<{}>", object.kind()),
        }
    }
}
