use super::value::Transformed;
use crate::error::TransformError;
use crate::model::{Element, Predicate, RoutingRule};
use ahash::AHashMap;
use indexmap::IndexMap;
use std::fmt;

/// A structural template a rule matches against.
///
/// Sequences have no template of their own; a rule that needs one captures
/// it whole through a `Subtree` slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    /// Matches a group with exactly these keys, each matching its sub-pattern.
    Group(IndexMap<&'static str, Pattern>),
    /// Captures a single leaf.
    Simple(&'static str),
    /// Captures any value.
    Subtree(&'static str),
}

impl Pattern {
    pub fn group(entries: impl IntoIterator<Item = (&'static str, Pattern)>) -> Self {
        Pattern::Group(entries.into_iter().collect())
    }

    pub fn simple(name: &'static str) -> Self {
        Pattern::Simple(name)
    }

    pub fn subtree(name: &'static str) -> Self {
        Pattern::Subtree(name)
    }

    /// Tests `value` against this pattern, returning the captured bindings.
    /// Matching never consumes or alters `value`.
    pub fn matches(&self, value: &Transformed) -> Option<Captures> {
        let mut captures = Captures::default();
        if self.match_inner(value, &mut captures) {
            Some(captures)
        } else {
            None
        }
    }

    fn match_inner(&self, value: &Transformed, captures: &mut Captures) -> bool {
        match (self, value) {
            (Pattern::Simple(name), Transformed::Leaf(_)) => {
                captures.values.insert(*name, value.clone());
                true
            }
            (Pattern::Simple(_), _) => false,
            (Pattern::Subtree(name), _) => {
                captures.values.insert(*name, value.clone());
                true
            }
            (Pattern::Group(expected), Transformed::Group(actual)) => {
                expected.len() == actual.len()
                    && expected.iter().all(|(key, sub_pattern)| {
                        actual
                            .get(*key)
                            .is_some_and(|sub_value| sub_pattern.match_inner(sub_value, captures))
                    })
            }
            (Pattern::Group(_), _) => false,
        }
    }

    /// Whether some value could satisfy both patterns.
    pub fn overlaps(&self, other: &Pattern) -> bool {
        match (self, other) {
            (Pattern::Subtree(_), _) | (_, Pattern::Subtree(_)) => true,
            (Pattern::Simple(_), Pattern::Simple(_)) => true,
            (Pattern::Group(a), Pattern::Group(b)) => {
                a.len() == b.len()
                    && a.iter()
                        .all(|(key, pa)| b.get(key).is_some_and(|pb| pa.overlaps(pb)))
            }
            _ => false,
        }
    }

    /// Total number of keys across all nested groups.
    pub fn specificity(&self) -> usize {
        match self {
            Pattern::Group(entries) => {
                entries.len() + entries.values().map(Pattern::specificity).sum::<usize>()
            }
            Pattern::Simple(_) | Pattern::Subtree(_) => 0,
        }
    }

    /// The first top-level key, naming the shape family a pattern belongs to.
    pub fn family(&self) -> Option<&'static str> {
        match self {
            Pattern::Group(entries) => entries.keys().next().copied(),
            Pattern::Simple(_) | Pattern::Subtree(_) => None,
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Group(entries) => {
                write!(f, "{{")?;
                for (i, (key, pattern)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", key, pattern)?;
                }
                write!(f, "}}")
            }
            Pattern::Simple(name) => write!(f, "simple({})", name),
            Pattern::Subtree(name) => write!(f, "subtree({})", name),
        }
    }
}

/// Values bound by a successful match, keyed by slot name.
#[derive(Debug, Clone, Default)]
pub struct Captures {
    values: AHashMap<&'static str, Transformed>,
}

impl Captures {
    pub fn get(&self, name: &str) -> Option<&Transformed> {
        self.values.get(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Removes a slot's value. A missing slot means the builder and its
    /// pattern disagree, which is reported as a shape mismatch.
    pub fn take(&mut self, name: &str) -> Result<Transformed, TransformError> {
        self.values
            .remove(name)
            .ok_or_else(|| TransformError::ShapeMismatch {
                expected: format!("a capture named '{}'", name),
                found: "no such capture".to_string(),
            })
    }

    pub fn text(&mut self, name: &str) -> Result<String, TransformError> {
        self.take(name)?.into_text()
    }

    pub fn predicate(&mut self, name: &str) -> Result<Predicate, TransformError> {
        self.take(name)?.into_predicate()
    }

    pub fn texts(&mut self, name: &str) -> Result<Vec<String>, TransformError> {
        self.take(name)?
            .into_sequence()
            .into_iter()
            .map(Transformed::into_text)
            .collect()
    }

    pub fn predicates(&mut self, name: &str) -> Result<Vec<Predicate>, TransformError> {
        self.take(name)?
            .into_sequence()
            .into_iter()
            .map(Transformed::into_predicate)
            .collect()
    }

    pub fn elements(&mut self, name: &str) -> Result<Vec<Element>, TransformError> {
        self.take(name)?
            .into_sequence()
            .into_iter()
            .map(Transformed::into_element)
            .collect()
    }

    pub fn routing_rules(&mut self, name: &str) -> Result<Vec<RoutingRule>, TransformError> {
        self.take(name)?
            .into_sequence()
            .into_iter()
            .map(Transformed::into_routing_rule)
            .collect()
    }

    pub fn pairs(&mut self, name: &str) -> Result<Vec<(String, String)>, TransformError> {
        self.take(name)?
            .into_sequence()
            .into_iter()
            .map(Transformed::into_pair)
            .collect()
    }
}
