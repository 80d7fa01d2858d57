use crate::error::TransformError;
use ahash::AHashMap;
use indexmap::IndexSet;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A boolean condition over previously collected answers.
///
/// Operands stay as the text the author wrote. Interpreting `"18"` as a number
/// is left to whatever evaluates the predicate against an answer set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Predicate {
    Equality {
        varname: String,
        expected_value: String,
    },
    SetMembership {
        varname: String,
        values: IndexSet<String>,
    },
    /// A reference to a predicate bound outside the document.
    Named(String),
    /// Holds when no earlier sibling predicate held.
    Otherwise,
    /// Logical AND of every member. Never empty when built through
    /// [`Predicate::combined`].
    Combined(Vec<Predicate>),
    Function {
        name: String,
        arguments: Vec<String>,
    },
    Comparison(Comparison),
}

impl Predicate {
    /// Joins `members` into a conjunction, rejecting an empty list.
    pub fn combined(members: Vec<Predicate>) -> Result<Predicate, TransformError> {
        if members.is_empty() {
            return Err(TransformError::MalformedCombination);
        }
        Ok(Predicate::Combined(members))
    }

    /// Collects every `Named` reference reachable from this predicate.
    pub fn collect_named(&self, names: &mut IndexSet<String>) {
        match self {
            Predicate::Named(name) => {
                names.insert(name.clone());
            }
            Predicate::Combined(members) => {
                for member in members {
                    member.collect_named(names);
                }
            }
            Predicate::Equality { .. }
            | Predicate::SetMembership { .. }
            | Predicate::Otherwise
            | Predicate::Function { .. }
            | Predicate::Comparison(_) => {}
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::Equality {
                varname,
                expected_value,
            } => write!(f, "{} is {}", varname, expected_value),
            Predicate::SetMembership { varname, values } => {
                write!(f, "{} in {{{}}}", varname, values.iter().join(" "))
            }
            Predicate::Named(name) => write!(f, "{}?", name),
            Predicate::Otherwise => write!(f, "otherwise"),
            Predicate::Combined(members) => write!(f, "{}", members.iter().join(" AND ")),
            Predicate::Function { name, arguments } => {
                write!(f, "{}({})", name, arguments.iter().join(", "))
            }
            Predicate::Comparison(c) => write!(f, "{}", c),
        }
    }
}

/// The four ordering operators a comparison may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComparisonOperator {
    Less,
    LessOrEqual,
    Greater,
    GreaterOrEqual,
}

impl ComparisonOperator {
    pub fn symbol(&self) -> &'static str {
        match self {
            ComparisonOperator::Less => "<",
            ComparisonOperator::LessOrEqual => "<=",
            ComparisonOperator::Greater => ">",
            ComparisonOperator::GreaterOrEqual => ">=",
        }
    }
}

impl FromStr for ComparisonOperator {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "<=" => Ok(ComparisonOperator::LessOrEqual),
            "<" => Ok(ComparisonOperator::Less),
            ">=" => Ok(ComparisonOperator::GreaterOrEqual),
            ">" => Ok(ComparisonOperator::Greater),
            other => Err(TransformError::InvalidOperator(other.to_string())),
        }
    }
}

/// `varname <op> value`, with `value` kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparison {
    pub operator: ComparisonOperator,
    pub varname: String,
    pub value: String,
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.varname, self.operator.symbol(), self.value)
    }
}

/// Looks up the definition behind a `Named` predicate.
///
/// Bindings live outside the document (typically a table assembled by the
/// caller for the whole flow), so resolution is delegated to this trait.
pub trait PredicateResolver {
    fn resolve(&self, name: &str) -> Option<&Predicate>;
}

impl PredicateResolver for AHashMap<String, Predicate> {
    fn resolve(&self, name: &str) -> Option<&Predicate> {
        self.get(name)
    }
}
