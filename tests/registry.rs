//! Tests for shape matching and rule registry validation.
mod common;
use common::*;
use flowdown::prelude::*;

fn leaf_value(text: &str) -> Transformed {
    Transformed::Leaf(text.to_string())
}

fn group_value(entries: Vec<(&str, Transformed)>) -> Transformed {
    Transformed::Group(
        entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect(),
    )
}

#[test]
fn test_group_pattern_requires_exact_key_set() {
    let pattern = Pattern::group([
        ("predicate", Pattern::subtree("predicate")),
        ("outcome", Pattern::simple("outcome")),
    ]);

    let exact = group_value(vec![
        ("predicate", leaf_value("p")),
        ("outcome", leaf_value("next")),
    ]);
    let captures = pattern.matches(&exact).expect("exact key set should match");
    assert_eq!(captures.len(), 2);
    assert_eq!(captures.get("outcome"), Some(&leaf_value("next")));

    let missing = group_value(vec![("predicate", leaf_value("p"))]);
    assert!(pattern.matches(&missing).is_none());

    let extra = group_value(vec![
        ("predicate", leaf_value("p")),
        ("outcome", leaf_value("next")),
        ("note", leaf_value("x")),
    ]);
    assert!(pattern.matches(&extra).is_none());
}

#[test]
fn test_simple_slot_only_binds_leaves() {
    let pattern = Pattern::group([("h1", Pattern::simple("content"))]);

    assert!(pattern
        .matches(&group_value(vec![("h1", leaf_value("Title"))]))
        .is_some());
    assert!(pattern
        .matches(&group_value(vec![(
            "h1",
            Transformed::Sequence(vec![leaf_value("Title")])
        )]))
        .is_none());
    assert!(pattern
        .matches(&group_value(vec![("h1", group_value(vec![("x", leaf_value("y"))]))]))
        .is_none());
}

#[test]
fn test_subtree_slot_binds_anything() {
    let pattern = Pattern::group([("body", Pattern::subtree("body"))]);
    let value = group_value(vec![(
        "body",
        Transformed::Sequence(vec![group_value(vec![("p", leaf_value("a"))])]),
    )]);

    let captures = pattern.matches(&value).unwrap();
    assert!(matches!(captures.get("body"), Some(Transformed::Sequence(items)) if items.len() == 1));
}

#[test]
fn test_pattern_never_matches_non_group_with_group_template() {
    let pattern = Pattern::group([("p", Pattern::simple("content"))]);
    assert!(pattern.matches(&leaf_value("p")).is_none());
    assert!(pattern.matches(&Transformed::Sequence(vec![])).is_none());
}

#[test]
fn test_standard_registry_is_valid() {
    let registry = RuleRegistry::standard().expect("standard registry should validate");
    assert!(!registry.is_empty());

    let names: Vec<_> = registry.rules().iter().map(|r| r.name).collect();
    let position = |name: &str| names.iter().position(|n| *n == name).unwrap();
    assert!(position("conditional_with_both_cases") < position("conditional_with_true_case"));
    assert!(position("conditional_with_true_case") < position("conditional"));
    assert!(position("node_with_front_matter") < position("front_matter"));
    assert!(
        position("function_predicate_with_arguments") < position("function_predicate")
    );
}

#[test]
fn test_standard_registry_is_shared() {
    let first = RuleRegistry::standard().unwrap();
    let second = RuleRegistry::standard().unwrap();
    assert!(std::ptr::eq(first, second));
}

#[test]
fn test_less_specific_rule_first_is_rejected() {
    let result = RuleRegistry::builder()
        .rule(
            "short",
            Pattern::group([("conditional", Pattern::group([("predicate", Pattern::subtree("p"))]))]),
            |_, _| Ok(Transformed::Leaf(String::new())),
        )
        .rule(
            "long",
            Pattern::group([(
                "conditional",
                Pattern::group([
                    ("predicate", Pattern::subtree("p")),
                    ("true_case", Pattern::subtree("t")),
                ]),
            )]),
            |_, _| Ok(Transformed::Leaf(String::new())),
        )
        .build();

    match result {
        Err(RegistryError::PrecedenceOrder {
            family,
            earlier,
            later,
        }) => {
            assert_eq!(family, "conditional");
            assert_eq!(earlier, "short");
            assert_eq!(later, "long");
        }
        other => panic!("Expected PrecedenceOrder, got {:?}", other),
    }
}

#[test]
fn test_overlapping_patterns_are_rejected() {
    let result = RuleRegistry::builder()
        .rule(
            "heading",
            Pattern::group([("h1", Pattern::simple("content"))]),
            |_, _| Ok(Transformed::Leaf(String::new())),
        )
        .rule(
            "any_heading",
            Pattern::group([("h1", Pattern::subtree("content"))]),
            |_, _| Ok(Transformed::Leaf(String::new())),
        )
        .build();

    match result {
        Err(RegistryError::AmbiguousPattern { first, second }) => {
            assert_eq!(first, "heading");
            assert_eq!(second, "any_heading");
        }
        other => panic!("Expected AmbiguousPattern, got {:?}", other),
    }
}

#[test]
fn test_standard_registry_can_be_extended() {
    let registry = RuleRegistry::standard_builder()
        .rule(
            "subheading",
            Pattern::group([("h2", Pattern::simple("content"))]),
            |mut c, _| Ok(Transformed::element(Element::MarkdownHeading(c.text("content")?))),
        )
        .build()
        .unwrap();

    let tree = body(vec![tagged("h2", leaf("Details"))]);
    let node = Transformer::new(&registry)
        .transform_node(&tree, &Context::new("custom"))
        .unwrap();
    assert_eq!(node.title(), Some("Details"));
}

#[test]
fn test_duplicate_standard_shape_is_rejected() {
    let result = RuleRegistry::standard_builder()
        .rule(
            "another_paragraph",
            Pattern::group([("p", Pattern::simple("text"))]),
            |_, _| Ok(Transformed::Leaf(String::new())),
        )
        .build();
    assert!(matches!(
        result,
        Err(RegistryError::AmbiguousPattern { ref second, .. }) if second == "another_paragraph"
    ));
}

#[test]
fn test_registry_find_returns_first_match() {
    let registry = RuleRegistry::standard().unwrap();
    let value = group_value(vec![("p", leaf_value("Hello"))]);
    let (rule, captures) = registry.find(&value).unwrap();
    assert_eq!(rule.name, "markdown_paragraph");
    assert_eq!(captures.get("content"), Some(&leaf_value("Hello")));
}

#[test]
fn test_pattern_specificity_and_family() {
    let pattern = Pattern::group([(
        "conditional",
        Pattern::group([
            ("predicate", Pattern::subtree("p")),
            ("true_case", Pattern::subtree("t")),
        ]),
    )]);
    assert_eq!(pattern.specificity(), 3);
    assert_eq!(pattern.family(), Some("conditional"));
    assert_eq!(Pattern::simple("x").family(), None);
    assert_eq!(
        pattern.to_string(),
        "{conditional: {predicate: subtree(p), true_case: subtree(t)}}"
    );
}
