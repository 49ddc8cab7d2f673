//! Parsing tests: spans, lookups, determinism

use super::helpers::{context, lenient, strict};
use super::*;

#[test]
fn test_spans_in_text_order() {
    let (subst, _) = strict();
    let template = subst.parse("<@x:@y>").unwrap();
    let spans: Vec<Span> = template.substitutions().collect();
    assert_eq!(
        spans,
        vec![
            Span {
                begin: 1,
                end: 3,
                variable: Some("x")
            },
            Span {
                begin: 4,
                end: 6,
                variable: Some("y")
            },
        ]
    );
}

#[test]
fn test_braced_reference_span() {
    let (subst, _) = strict();
    let template = subst.parse("@{label}!").unwrap();
    let spans: Vec<Span> = template.substitutions().collect();
    assert_eq!(
        spans,
        vec![Span {
            begin: 0,
            end: 8,
            variable: Some("label")
        }]
    );
}

#[test]
fn test_escape_span_has_no_variable() {
    let (subst, _) = strict();
    let template = subst.parse("a@@b").unwrap();
    let spans: Vec<Span> = template.substitutions().collect();
    assert_eq!(
        spans,
        vec![Span {
            begin: 1,
            end: 3,
            variable: None
        }]
    );
}

#[test]
fn test_compact_and_braced_forms_are_equivalent() {
    let (subst, _) = strict();
    let ctx = context(3, 9);
    let compact = subst.parse("@x-@y").unwrap();
    let braced = subst.parse("@{x}-@{y}").unwrap();
    assert_eq!(
        compact.expand_to_string(&ctx).unwrap(),
        braced.expand_to_string(&ctx).unwrap()
    );
}

#[test]
fn test_parse_is_deterministic() {
    let (subst, _) = strict();
    let text = "@{label}: x=@x y=@y (@@ @{version})";
    let first = subst.parse(text).unwrap();
    let second = subst.parse(text).unwrap();

    assert_eq!(
        first.substitutions().collect::<Vec<_>>(),
        second.substitutions().collect::<Vec<_>>()
    );
    let ctx = context(1, 2);
    assert_eq!(
        first.expand_to_string(&ctx).unwrap(),
        second.expand_to_string(&ctx).unwrap()
    );
}

#[test]
fn test_refers_to() {
    let (subst, _) = strict();
    let template = subst.parse("x is @x, literal @@y").unwrap();
    assert!(template.refers_to("x"));
    assert!(!template.refers_to("y"));
    assert!(!template.refers_to("@"));
    assert!(!template.refers_to("label"));
}

#[test]
fn test_refers_to_skips_undefined_in_lenient_mode() {
    let (subst, _) = lenient();
    let template = subst.parse("@{ghost} @{label}").unwrap();
    assert!(!template.refers_to("ghost"));
    assert!(template.refers_to("label"));
}

#[test]
fn test_template_keeps_source_text() {
    let (subst, _) = strict();
    let text = "value: @x";
    let template = subst.parse(text).unwrap();
    assert_eq!(template.text(), text);
}

#[test]
fn test_strict_template_has_no_diagnostics() {
    let (subst, logger) = strict();
    let template = subst.parse("@x @y").unwrap();
    assert!(template.diagnostics().is_empty());
    assert!(logger.is_empty());
}

#[test]
fn test_variable_table_queries() {
    let (subst, _) = strict();
    assert!(subst.is_defined("x"));
    assert!(!subst.is_defined("z"));
    assert_eq!(
        subst.variable_names(),
        vec!["label", "ratio", "version", "x", "y"]
    );
    assert!(!subst.is_lenient());
    assert_eq!(subst.marker().as_char(), '@');
}

#[test]
fn test_custom_marker() {
    let config = crate::SubstConfig::default().with_marker(crate::Marker::new('$').unwrap());
    let mut subst: Substituter<(i32,)> = Substituter::new(config);
    subst.define("n", Binding::field(|n: &i32| n)).unwrap();

    let template = subst.parse("cost: $$$n, mail: a@b").unwrap();
    assert_eq!(
        template.expand_to_string(&(12,)).unwrap(),
        "cost: $12, mail: a@b"
    );
}
