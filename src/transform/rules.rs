use super::Context;
use super::pattern::Pattern;
use super::registry::RegistryBuilder;
use super::value::{DomainObject, Transformed};
use crate::model::{
    Comparison, ComparisonOperator, Conditional, Element, FrontMatter, NestedRule, NextNodeRules,
    Node, Predicate, Question, Rule,
};

/// Registers rules of the form `{tag: simple(slot)}` that wrap the leaf text
/// in an element.
macro_rules! define_text_rules {
    ( $registry:expr; $( ($rule_name:expr, $tag:expr, $slot:expr, $ctor:expr) ),* $(,)? ) => {
        $registry
        $(
            .rule($rule_name, Pattern::group([($tag, Pattern::simple($slot))]), |mut c, _| {
                Ok(Transformed::element($ctor(c.text($slot)?)))
            })
        )*
    };
}

/// Registers single-identifier questions, `{tag: {identifier: simple}}`.
macro_rules! define_identifier_questions {
    ( $registry:expr; $( ($rule_name:expr, $tag:expr, $variant:ident) ),* $(,)? ) => {
        $registry
        $(
            .rule(
                $rule_name,
                Pattern::group([($tag, Pattern::group([("identifier", Pattern::simple("identifier"))]))]),
                |mut c, _| {
                    Ok(Transformed::element(Question::$variant {
                        identifier: c.text("identifier")?,
                    }))
                },
            )
        )*
    };
}

/// Loads the flow document rules into `registry`.
///
/// Rules sharing a leading key are listed from most to least specific.
pub(super) fn register_standard_rules(registry: RegistryBuilder) -> RegistryBuilder {
    let registry = registry
        // Node and front matter
        .rule(
            "node_with_front_matter",
            Pattern::group([
                ("front_matter", Pattern::subtree("attrs")),
                ("body", Pattern::subtree("body")),
            ]),
            |mut c, context: &Context| {
                let front_matter = FrontMatter::new(c.pairs("attrs")?);
                Ok(Transformed::Object(DomainObject::Node(Node::new(
                    context.node_name.clone(),
                    c.elements("body")?,
                    front_matter,
                ))))
            },
        )
        .rule(
            "front_matter",
            Pattern::group([("front_matter", Pattern::subtree("attrs"))]),
            |mut c, _| {
                let front_matter = FrontMatter::new(c.pairs("attrs")?);
                Ok(Transformed::Sequence(vec![Transformed::Object(
                    DomainObject::FrontMatter(front_matter),
                )]))
            },
        )
        .rule(
            "node",
            Pattern::group([("body", Pattern::subtree("body"))]),
            |mut c, context: &Context| {
                Ok(Transformed::Object(DomainObject::Node(Node::new(
                    context.node_name.clone(),
                    c.elements("body")?,
                    FrontMatter::default(),
                ))))
            },
        );

    let registry = define_text_rules! { registry;
        ("markdown_heading", "h1", "content", Element::MarkdownHeading),
        ("markdown_paragraph", "p", "content", Element::MarkdownParagraph),
        ("start_button", "start_button", "start_node", Element::StartButton),
    };

    let registry = registry
        // Key/value productions
        .rule(
            "front_matter_attribute",
            Pattern::group([("name", Pattern::simple("name")), ("value", Pattern::simple("value"))]),
            |mut c, _| Ok(Transformed::pair(c.text("name")?, c.text("value")?)),
        )
        .rule(
            "choice_option",
            Pattern::group([("value", Pattern::simple("value")), ("label", Pattern::simple("label"))]),
            |mut c, _| Ok(Transformed::pair(c.text("value")?, c.text("label")?)),
        )
        .rule(
            "link",
            Pattern::group([("url", Pattern::simple("url")), ("label", Pattern::simple("label"))]),
            |mut c, _| Ok(Transformed::pair(c.text("url")?, c.text("label")?)),
        )
        // Questions
        .rule(
            "multiple_choice",
            Pattern::group([(
                "multiple_choice",
                Pattern::group([
                    ("identifier", Pattern::simple("identifier")),
                    ("options", Pattern::subtree("choices")),
                ]),
            )]),
            |mut c, _| {
                Ok(Transformed::element(Question::MultipleChoice {
                    identifier: c.text("identifier")?,
                    options: c.pairs("choices")?.into_iter().collect(),
                }))
            },
        );

    let registry = define_identifier_questions! { registry;
        ("date_question", "date", Date),
        ("salary_question", "salary", Salary),
        ("text_question", "text", Text),
    };

    registry
        .rule(
            "next_steps",
            Pattern::group([("next_steps", Pattern::group([("content", Pattern::simple("content"))]))]),
            |mut c, _| Ok(Transformed::element(Element::NextSteps(c.text("content")?))),
        )
        // Conditionals
        .rule(
            "conditional_with_both_cases",
            Pattern::group([(
                "conditional",
                Pattern::group([
                    ("predicate", Pattern::subtree("predicate")),
                    ("true_case", Pattern::subtree("true_case")),
                    ("false_case", Pattern::subtree("false_case")),
                ]),
            )]),
            |mut c, _| {
                let conditional = Conditional::new(c.predicate("predicate")?)
                    .with_true_case(c.elements("true_case")?)
                    .with_false_case(c.elements("false_case")?);
                Ok(Transformed::element(conditional))
            },
        )
        .rule(
            "conditional_with_true_case",
            Pattern::group([(
                "conditional",
                Pattern::group([
                    ("predicate", Pattern::subtree("predicate")),
                    ("true_case", Pattern::subtree("true_case")),
                ]),
            )]),
            |mut c, _| {
                let conditional = Conditional::new(c.predicate("predicate")?)
                    .with_true_case(c.elements("true_case")?);
                Ok(Transformed::element(conditional))
            },
        )
        .rule(
            "conditional",
            Pattern::group([(
                "conditional",
                Pattern::group([("predicate", Pattern::subtree("predicate"))]),
            )]),
            |mut c, _| Ok(Transformed::element(Conditional::new(c.predicate("predicate")?))),
        )
        // Predicates
        .rule(
            "equality_predicate",
            Pattern::group([(
                "equality_predicate",
                Pattern::group([
                    ("varname", Pattern::simple("varname")),
                    ("expected_value", Pattern::simple("expected_value")),
                ]),
            )]),
            |mut c, _| {
                Ok(Transformed::predicate(Predicate::Equality {
                    varname: c.text("varname")?,
                    expected_value: c.text("expected_value")?,
                }))
            },
        )
        .rule(
            "set_value",
            Pattern::group([("set_value", Pattern::simple("value"))]),
            |mut c, _| Ok(Transformed::Leaf(c.text("value")?)),
        )
        .rule(
            "set_membership_predicate",
            Pattern::group([(
                "set_membership_predicate",
                Pattern::group([
                    ("varname", Pattern::simple("varname")),
                    ("values", Pattern::subtree("values")),
                ]),
            )]),
            |mut c, _| {
                Ok(Transformed::predicate(Predicate::SetMembership {
                    varname: c.text("varname")?,
                    values: c.texts("values")?.into_iter().collect(),
                }))
            },
        )
        .rule(
            "named_predicate",
            Pattern::group([("named_predicate", Pattern::simple("name"))]),
            |mut c, _| Ok(Transformed::predicate(Predicate::Named(c.text("name")?))),
        )
        .rule(
            "otherwise_predicate",
            Pattern::group([("otherwise_predicate", Pattern::simple("name"))]),
            |_, _| Ok(Transformed::predicate(Predicate::Otherwise)),
        )
        .rule(
            "combined_predicate",
            Pattern::group([(
                "combined_predicate",
                Pattern::group([
                    ("first_predicate", Pattern::subtree("first_predicate")),
                    ("and_predicates", Pattern::subtree("and_predicates")),
                ]),
            )]),
            |mut c, _| {
                let mut members = vec![c.predicate("first_predicate")?];
                members.extend(c.predicates("and_predicates")?);
                Ok(Transformed::predicate(Predicate::combined(members)?))
            },
        )
        .rule(
            "function_argument",
            Pattern::group([("function_argument", Pattern::simple("argument"))]),
            |mut c, _| Ok(Transformed::Leaf(c.text("argument")?)),
        )
        .rule(
            "function_predicate_with_arguments",
            Pattern::group([(
                "function_predicate",
                Pattern::group([
                    ("name", Pattern::simple("name")),
                    ("arguments", Pattern::subtree("arguments")),
                ]),
            )]),
            |mut c, _| {
                Ok(Transformed::predicate(Predicate::Function {
                    name: c.text("name")?,
                    arguments: c.texts("arguments")?,
                }))
            },
        )
        .rule(
            "function_predicate",
            Pattern::group([(
                "function_predicate",
                Pattern::group([("name", Pattern::simple("name"))]),
            )]),
            |mut c, _| {
                Ok(Transformed::predicate(Predicate::Function {
                    name: c.text("name")?,
                    arguments: Vec::new(),
                }))
            },
        )
        .rule(
            "comparison_predicate",
            Pattern::group([(
                "comparison_predicate",
                Pattern::group([
                    ("varname", Pattern::simple("varname")),
                    ("value", Pattern::simple("value")),
                    ("operator", Pattern::simple("operator")),
                ]),
            )]),
            |mut c, _| {
                let operator: ComparisonOperator = c.text("operator")?.parse()?;
                Ok(Transformed::predicate(Predicate::Comparison(Comparison {
                    operator,
                    varname: c.text("varname")?,
                    value: c.text("value")?,
                })))
            },
        )
        // Routing
        .rule(
            "rule",
            Pattern::group([(
                "rule",
                Pattern::group([
                    ("predicate", Pattern::subtree("predicate")),
                    ("outcome", Pattern::simple("outcome_name")),
                ]),
            )]),
            |mut c, _| {
                Ok(Transformed::rule(Rule {
                    predicate: c.predicate("predicate")?,
                    outcome: c.text("outcome_name")?,
                }))
            },
        )
        .rule(
            "nested_rule",
            Pattern::group([(
                "nested_rule",
                Pattern::group([
                    ("predicate", Pattern::subtree("predicate")),
                    ("child_rules", Pattern::subtree("child_rules")),
                ]),
            )]),
            |mut c, _| {
                Ok(Transformed::rule(NestedRule {
                    predicate: c.predicate("predicate")?,
                    child_rules: c.routing_rules("child_rules")?,
                }))
            },
        )
        .rule(
            "next_node_rules",
            Pattern::group([("next_node_rules", Pattern::subtree("rules"))]),
            |mut c, _| {
                Ok(Transformed::element(NextNodeRules::new(
                    c.routing_rules("rules")?,
                )))
            },
        )
}
