use super::{Element, NextNodeRules, Predicate, PredicateResolver, Question};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Key/value metadata declared ahead of a node's body.
///
/// Attributes are kept sorted so that serialized nodes are byte-stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrontMatter {
    attributes: BTreeMap<String, String>,
}

impl FrontMatter {
    pub fn new(attributes: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            attributes: attributes.into_iter().collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    pub fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

/// One step of a flow: its content and the rules choosing what comes next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub name: String,
    pub body: Vec<Element>,
    pub front_matter: FrontMatter,
}

impl Node {
    pub fn new(name: impl Into<String>, body: Vec<Element>, front_matter: FrontMatter) -> Self {
        Self {
            name: name.into(),
            body,
            front_matter,
        }
    }

    /// Text of the first top-level heading.
    pub fn title(&self) -> Option<&str> {
        self.body.iter().find_map(|element| match element {
            Element::MarkdownHeading(content) => Some(content.as_str()),
            _ => None,
        })
    }

    /// Every question in the body, including those inside conditional branches.
    pub fn questions(&self) -> Vec<&Question> {
        let mut questions = Vec::new();
        for element in &self.body {
            element.visit(&mut |e| {
                if let Element::Question(q) = e {
                    questions.push(q);
                }
            });
        }
        questions
    }

    pub fn next_node_rules(&self) -> Option<&NextNodeRules> {
        self.body.iter().find_map(|element| match element {
            Element::NextNodeRules(rules) => Some(rules),
            _ => None,
        })
    }

    /// Transition targets of the routing tree, in declaration order.
    pub fn outcomes(&self) -> Vec<&str> {
        self.next_node_rules()
            .map(NextNodeRules::outcomes)
            .unwrap_or_default()
    }

    /// Every predicate guarding content or routing, in document order.
    pub fn predicates(&self) -> Vec<&Predicate> {
        let mut predicates = Vec::new();
        for element in &self.body {
            element.visit(&mut |e| match e {
                Element::Conditional(c) => predicates.push(&c.predicate),
                Element::NextNodeRules(rules) => predicates.extend(rules.predicates()),
                _ => {}
            });
        }
        predicates
    }

    /// Names referenced through `Named` predicates that `resolver` cannot bind.
    pub fn unresolved_predicates(&self, resolver: &impl PredicateResolver) -> Vec<String> {
        let mut names = IndexSet::new();
        for predicate in self.predicates() {
            predicate.collect_named(&mut names);
        }
        names
            .into_iter()
            .filter(|name| resolver.resolve(name).is_none())
            .collect()
    }

    /// Canonical pretty-printed JSON, suitable for golden files.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
