use crate::error::ParseError;
use crate::tree::TreeNode;
use serde_json::Value;

/// Turns document source into the generic tree the transformer consumes.
///
/// Grammar parsers live outside this crate and plug in through this trait.
pub trait DocumentParser: Send + Sync {
    fn parse(&self, source: &str) -> Result<TreeNode, ParseError>;
}

/// Reads a tree that a grammar parser has already serialised to JSON.
///
/// Strings, numbers and booleans become leaves holding their text, arrays
/// become sequences and objects become groups in key order. `null` has no
/// tree counterpart and is rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonTreeParser;

impl JsonTreeParser {
    pub fn tree_from_value(value: Value) -> Result<TreeNode, ParseError> {
        match value {
            Value::String(text) => Ok(TreeNode::Leaf(text)),
            Value::Number(n) => Ok(TreeNode::Leaf(n.to_string())),
            Value::Bool(b) => Ok(TreeNode::Leaf(b.to_string())),
            Value::Array(items) => items
                .into_iter()
                .map(Self::tree_from_value)
                .collect::<Result<Vec<_>, _>>()
                .map(TreeNode::Sequence),
            Value::Object(entries) => entries
                .into_iter()
                .map(|(key, value)| Ok((key, Self::tree_from_value(value)?)))
                .collect::<Result<_, ParseError>>()
                .map(TreeNode::Group),
            Value::Null => Err(ParseError::UnsupportedValue("null".to_string())),
        }
    }
}

impl DocumentParser for JsonTreeParser {
    fn parse(&self, source: &str) -> Result<TreeNode, ParseError> {
        let value: Value =
            serde_json::from_str(source).map_err(|e| ParseError::Json(e.to_string()))?;
        Self::tree_from_value(value)
    }
}
