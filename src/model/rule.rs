use super::Predicate;
use serde::{Deserialize, Serialize};

/// A direct transition: when `predicate` holds, go to `outcome`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub predicate: Predicate,
    pub outcome: String,
}

/// A guard over further rules, which are only considered when `predicate` holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NestedRule {
    pub predicate: Predicate,
    pub child_rules: Vec<RoutingRule>,
}

/// One entry in a routing tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoutingRule {
    Rule(Rule),
    Nested(NestedRule),
}

impl RoutingRule {
    pub fn predicate(&self) -> &Predicate {
        match self {
            RoutingRule::Rule(rule) => &rule.predicate,
            RoutingRule::Nested(nested) => &nested.predicate,
        }
    }

    fn visit<'a>(&'a self, f: &mut impl FnMut(&'a RoutingRule)) {
        f(self);
        if let RoutingRule::Nested(nested) = self {
            for child in &nested.child_rules {
                child.visit(f);
            }
        }
    }
}

impl From<Rule> for RoutingRule {
    fn from(rule: Rule) -> Self {
        RoutingRule::Rule(rule)
    }
}

impl From<NestedRule> for RoutingRule {
    fn from(nested: NestedRule) -> Self {
        RoutingRule::Nested(nested)
    }
}

/// The outgoing decision tree of a node. Rules are tried in order and the
/// first whose predicate chain holds decides the next node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextNodeRules {
    pub rules: Vec<RoutingRule>,
}

impl NextNodeRules {
    pub fn new(rules: Vec<RoutingRule>) -> Self {
        Self { rules }
    }

    /// Every transition target, depth first in declaration order. A node
    /// reachable through several rules is listed once per rule.
    pub fn outcomes(&self) -> Vec<&str> {
        let mut outcomes = Vec::new();
        for rule in &self.rules {
            rule.visit(&mut |r| {
                if let RoutingRule::Rule(rule) = r {
                    outcomes.push(rule.outcome.as_str());
                }
            });
        }
        outcomes
    }

    /// Every guard and rule predicate, depth first in declaration order.
    pub fn predicates(&self) -> Vec<&Predicate> {
        let mut predicates = Vec::new();
        for rule in &self.rules {
            rule.visit(&mut |r| predicates.push(r.predicate()));
        }
        predicates
    }
}
