use super::Context;
use super::pattern::{Captures, Pattern};
use super::rules::register_standard_rules;
use super::value::Transformed;
use crate::error::{RegistryError, TransformError};
use ahash::AHashMap;
use once_cell::sync::Lazy;
use std::fmt;

/// Turns the captures of a matched pattern into the value replacing the match.
pub type BuildFn =
    Box<dyn Fn(Captures, &Context) -> Result<Transformed, TransformError> + Send + Sync>;

/// A named `(pattern, builder)` entry.
pub struct TransformRule {
    pub name: &'static str,
    pub pattern: Pattern,
    build: BuildFn,
}

impl TransformRule {
    pub fn build(&self, captures: Captures, context: &Context) -> Result<Transformed, TransformError> {
        (self.build)(captures, context)
    }
}

impl fmt::Debug for TransformRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransformRule")
            .field("name", &self.name)
            .field("pattern", &format_args!("{}", self.pattern))
            .finish()
    }
}

/// An ordered, validated list of transform rules. Earlier rules win.
#[derive(Debug)]
pub struct RuleRegistry {
    rules: Vec<TransformRule>,
}

static STANDARD: Lazy<Result<RuleRegistry, RegistryError>> =
    Lazy::new(|| RuleRegistry::standard_builder().build());

impl RuleRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder { rules: Vec::new() }
    }

    /// A builder pre-loaded with the flow document rules, for extension.
    pub fn standard_builder() -> RegistryBuilder {
        register_standard_rules(Self::builder())
    }

    /// The shared flow document registry, built and validated on first use.
    pub fn standard() -> Result<&'static RuleRegistry, RegistryError> {
        STANDARD.as_ref().map_err(Clone::clone)
    }

    pub fn rules(&self) -> &[TransformRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// The first rule whose pattern matches `value`, with its captures.
    pub fn find(&self, value: &Transformed) -> Option<(&TransformRule, Captures)> {
        self.rules
            .iter()
            .find_map(|rule| rule.pattern.matches(value).map(|captures| (rule, captures)))
    }
}

pub struct RegistryBuilder {
    rules: Vec<TransformRule>,
}

impl RegistryBuilder {
    pub fn rule<F>(mut self, name: &'static str, pattern: Pattern, build: F) -> Self
    where
        F: Fn(Captures, &Context) -> Result<Transformed, TransformError> + Send + Sync + 'static,
    {
        self.rules.push(TransformRule {
            name,
            pattern,
            build: Box::new(build),
        });
        self
    }

    /// Validates precedence and freezes the registry.
    ///
    /// Two rules that could match the same shape are rejected outright.
    /// Within a family (patterns sharing their first key) rules must run from
    /// most to least specific, or the broader one would shadow the narrower.
    pub fn build(self) -> Result<RuleRegistry, RegistryError> {
        validate(&self.rules)?;
        Ok(RuleRegistry { rules: self.rules })
    }
}

fn validate(rules: &[TransformRule]) -> Result<(), RegistryError> {
    for (i, earlier) in rules.iter().enumerate() {
        for later in &rules[i + 1..] {
            if earlier.pattern.overlaps(&later.pattern) {
                return Err(RegistryError::AmbiguousPattern {
                    first: earlier.name.to_string(),
                    second: later.name.to_string(),
                });
            }
        }
    }

    let mut families: AHashMap<&'static str, &TransformRule> = AHashMap::new();
    for rule in rules {
        let Some(family) = rule.pattern.family() else {
            continue;
        };
        if let Some(previous) = families.get(family) {
            if rule.pattern.specificity() > previous.pattern.specificity() {
                return Err(RegistryError::PrecedenceOrder {
                    family: family.to_string(),
                    earlier: previous.name.to_string(),
                    later: rule.name.to_string(),
                });
            }
        }
        families.insert(family, rule);
    }
    Ok(())
}
