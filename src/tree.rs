use indexmap::IndexMap;
use itertools::Itertools;
use std::fmt;

/// The generic syntax tree handed over by a grammar parser.
///
/// Leaves carry raw token text, sequences keep document order and groups map
/// unique tags to subtrees in insertion order. The transformer only reads a
/// tree; it never rewrites one in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    Leaf(String),
    Sequence(Vec<TreeNode>),
    Group(IndexMap<String, TreeNode>),
}

impl TreeNode {
    pub fn leaf(text: impl Into<String>) -> Self {
        TreeNode::Leaf(text.into())
    }

    pub fn sequence(items: impl IntoIterator<Item = TreeNode>) -> Self {
        TreeNode::Sequence(items.into_iter().collect())
    }

    /// Builds a group from `(tag, subtree)` pairs, keeping the given order.
    pub fn group<K: Into<String>>(entries: impl IntoIterator<Item = (K, TreeNode)>) -> Self {
        TreeNode::Group(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Nesting depth of the tree; a leaf has depth 1.
    pub fn depth(&self) -> usize {
        match self {
            TreeNode::Leaf(_) => 1,
            TreeNode::Sequence(items) => 1 + items.iter().map(TreeNode::depth).max().unwrap_or(0),
            TreeNode::Group(entries) => {
                1 + entries.values().map(TreeNode::depth).max().unwrap_or(0)
            }
        }
    }
}

/// Structural rendering used in diagnostics, e.g.
/// `{h1: "Welcome"}` or `[{p: "a"}, {p: "b"}]`.
impl fmt::Display for TreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeNode::Leaf(text) => write!(f, "{:?}", text),
            TreeNode::Sequence(items) => write!(f, "[{}]", items.iter().join(", ")),
            TreeNode::Group(entries) => write!(
                f,
                "{{{}}}",
                entries
                    .iter()
                    .map(|(k, v)| format!("{}: {}", k, v))
                    .join(", ")
            ),
        }
    }
}
