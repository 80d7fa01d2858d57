//! Common test utilities for building parsed trees.
use flowdown::prelude::*;

#[allow(dead_code)]
pub fn leaf(text: &str) -> TreeNode {
    TreeNode::leaf(text)
}

#[allow(dead_code)]
pub fn seq(items: Vec<TreeNode>) -> TreeNode {
    TreeNode::sequence(items)
}

/// A group with a single tag.
#[allow(dead_code)]
pub fn tagged(tag: &str, value: TreeNode) -> TreeNode {
    TreeNode::group([(tag, value)])
}

#[allow(dead_code)]
pub fn named(name: &str) -> TreeNode {
    tagged("named_predicate", leaf(name))
}

#[allow(dead_code)]
pub fn paragraph(text: &str) -> TreeNode {
    tagged("p", leaf(text))
}

#[allow(dead_code)]
pub fn rule(predicate: TreeNode, outcome: &str) -> TreeNode {
    tagged(
        "rule",
        TreeNode::group([("predicate", predicate), ("outcome", leaf(outcome))]),
    )
}

#[allow(dead_code)]
pub fn comparison(varname: &str, operator: &str, value: &str) -> TreeNode {
    tagged(
        "comparison_predicate",
        TreeNode::group([
            ("varname", leaf(varname)),
            ("value", leaf(value)),
            ("operator", leaf(operator)),
        ]),
    )
}

#[allow(dead_code)]
pub fn body(elements: Vec<TreeNode>) -> TreeNode {
    tagged("body", seq(elements))
}

/// Transforms `tree` as node `name` with the standard registry.
#[allow(dead_code)]
pub fn transform(name: &str, tree: &TreeNode) -> std::result::Result<Node, TransformError> {
    let registry = RuleRegistry::standard().expect("standard registry is valid");
    Transformer::new(registry).transform_node(tree, &Context::new(name))
}

/// Transforms a single body element and returns the element it became.
#[allow(dead_code)]
pub fn transform_element(tree: TreeNode) -> std::result::Result<Element, TransformError> {
    let mut node = transform("test", &body(vec![tree]))?;
    assert_eq!(node.body.len(), 1, "expected exactly one element");
    Ok(node.body.remove(0))
}

/// Transforms a predicate by placing it in a conditional.
#[allow(dead_code)]
pub fn transform_predicate(tree: TreeNode) -> std::result::Result<Predicate, TransformError> {
    let conditional = tagged("conditional", TreeNode::group([("predicate", tree)]));
    match transform_element(conditional)? {
        Element::Conditional(c) => Ok(c.predicate),
        other => panic!("Expected a conditional, got {:?}", other),
    }
}

/// JSON for a node exercising every element, question and predicate kind.
#[allow(dead_code)]
pub const FULL_NODE_JSON: &str = r#"{
    "front_matter": [
        {"name": "satisfies_need", "value": "101"},
        {"name": "meta_description", "value": "Check your pension"}
    ],
    "body": [
        {"h1": "Your pension"},
        {"p": "Answer a few questions."},
        {"start_button": "date_of_birth"},
        {"date": {"identifier": "date_of_birth"}},
        {"salary": {"identifier": "annual_salary"}},
        {"text": {"identifier": "employer"}},
        {"multiple_choice": {
            "identifier": "employment",
            "options": [
                {"value": "employed", "label": "Employed"},
                {"value": "self_employed", "label": "Self-employed"}
            ]
        }},
        {"conditional": {
            "predicate": {"named_predicate": "is_retired"},
            "true_case": [
                {"p": "You are retired."},
                {"conditional": {
                    "predicate": {"set_membership_predicate": {
                        "varname": "country",
                        "values": [{"set_value": "england"}, {"set_value": "wales"}]
                    }},
                    "true_case": [{"p": "English or Welsh rules apply."}]
                }}
            ],
            "false_case": [{"p": "You are still working."}]
        }},
        {"next_steps": {"content": "Read the guide."}},
        {"next_node_rules": [
            {"rule": {
                "predicate": {"combined_predicate": {
                    "first_predicate": {"equality_predicate": {"varname": "employment", "expected_value": "employed"}},
                    "and_predicates": [{"comparison_predicate": {"varname": "age", "value": "66", "operator": ">="}}]
                }},
                "outcome": "state_pension"
            }},
            {"nested_rule": {
                "predicate": {"function_predicate": {"name": "is_eligible", "arguments": [{"function_argument": "age"}, {"function_argument": "employment"}]}},
                "child_rules": [
                    {"rule": {"predicate": {"named_predicate": "has_private_pension"}, "outcome": "private_pension"}},
                    {"rule": {"predicate": {"otherwise_predicate": "otherwise"}, "outcome": "no_pension"}}
                ]
            }},
            {"rule": {"predicate": {"otherwise_predicate": "otherwise"}, "outcome": "outcome_unknown"}}
        ]}
    ]
}"#;
