use super::{NextNodeRules, Predicate, Question};
use serde::{Deserialize, Serialize};

/// A piece of node content, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Element {
    MarkdownHeading(String),
    MarkdownParagraph(String),
    /// Button leading to the named first node of the flow.
    StartButton(String),
    NextSteps(String),
    Conditional(Conditional),
    Question(Question),
    NextNodeRules(NextNodeRules),
}

impl Element {
    /// Calls `f` on this element and, for conditionals, on every element of
    /// both branches, depth first.
    pub fn visit<'a>(&'a self, f: &mut impl FnMut(&'a Element)) {
        f(self);
        if let Element::Conditional(conditional) = self {
            for element in conditional
                .true_case
                .iter()
                .chain(conditional.false_case.iter())
            {
                element.visit(f);
            }
        }
    }
}

/// Content shown only when `predicate` holds (`true_case`) or does not
/// (`false_case`). Either branch may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conditional {
    pub predicate: Predicate,
    pub true_case: Vec<Element>,
    pub false_case: Vec<Element>,
}

impl Conditional {
    pub fn new(predicate: Predicate) -> Self {
        Self {
            predicate,
            true_case: Vec::new(),
            false_case: Vec::new(),
        }
    }

    pub fn with_true_case(mut self, elements: Vec<Element>) -> Self {
        self.true_case = elements;
        self
    }

    pub fn with_false_case(mut self, elements: Vec<Element>) -> Self {
        self.false_case = elements;
        self
    }
}

impl From<Conditional> for Element {
    fn from(conditional: Conditional) -> Self {
        Element::Conditional(conditional)
    }
}

impl From<Question> for Element {
    fn from(question: Question) -> Self {
        Element::Question(question)
    }
}

impl From<NextNodeRules> for Element {
    fn from(rules: NextNodeRules) -> Self {
        Element::NextNodeRules(rules)
    }
}
