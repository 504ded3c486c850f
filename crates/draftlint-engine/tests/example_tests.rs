//! Regression tests mined from the rule catalog's own examples.
//!
//! Every rule may carry Good/Bad usage examples as structured metadata.
//! Each example is run through a fresh validator and the owning rule
//! must fire on exactly the Bad ones. Adding an example to a rule adds
//! a regression test for free.

use draftlint_engine::Validator;
use draftlint_rules::{ExampleKind, Registry};

fn rule_fires(registry: &Registry, rule_id: u32, line: &str) -> bool {
    let mut validator = Validator::new(registry);
    validator
        .validate(line)
        .iter()
        .any(|v| v.rule.id() == rule_id)
}

#[test]
fn examples_behave_as_documented() {
    let registry = Registry::with_default_rules().expect("default registry");
    let mut checked = 0;

    for rule in registry.iter() {
        for example in rule.examples() {
            let expected = example.kind == ExampleKind::Bad;
            assert_eq!(
                rule_fires(&registry, rule.id(), example.text),
                expected,
                "rule {:03} ({}) disagreed with its {:?} example: {:?}",
                rule.id(),
                rule.brief(),
                example.kind,
                example.text,
            );
            checked += 1;
        }
    }

    // Guard against the catalog silently losing its examples.
    assert!(checked >= 30, "only {checked} examples were exercised");
}
