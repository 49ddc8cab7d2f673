//! Rendering tests for the escaped marker

use super::helpers::{context, lenient, strict};
use super::*;

#[test]
fn test_escape_yields_single_marker() {
    let (subst, logger) = strict();
    let template = subst.parse("100% @@ done").unwrap();

    assert!(template.substitutions().all(|s| s.variable.is_none()));
    assert_eq!(
        template.expand_to_string(&context(0, 0)).unwrap(),
        "100% @ done"
    );
    assert!(logger.is_empty());
}

#[test]
fn test_escape_followed_by_reference() {
    let (subst, _) = strict();
    let template = subst.parse("@@@x").unwrap();
    assert_eq!(template.expand_to_string(&context(0, 5)).unwrap(), "@5");
}

#[test]
fn test_double_escape() {
    let (subst, _) = strict();
    let template = subst.parse("@@@@").unwrap();
    assert_eq!(template.expand_to_string(&context(0, 0)).unwrap(), "@@");
}

#[test]
fn test_escape_before_brace_is_not_a_reference() {
    let (subst, _) = strict();
    let template = subst.parse("@@{x}").unwrap();
    assert!(!template.refers_to("x"));
    assert_eq!(template.expand_to_string(&context(0, 5)).unwrap(), "@{x}");
}

#[test]
fn test_escape_in_lenient_mode() {
    let (subst, logger) = lenient();
    let template = subst.parse("user@@host").unwrap();
    assert_eq!(
        template.expand_to_string(&context(0, 0)).unwrap(),
        "user@host"
    );
    assert!(logger.is_empty());
    assert!(template.diagnostics().is_empty());
}

#[test]
fn test_escape_with_custom_marker() {
    let config = crate::SubstConfig::default().with_marker(crate::Marker::new('$').unwrap());
    let subst: Substituter<()> = Substituter::new(config);
    let template = subst.parse("price: 5$$ (@@ stays doubled)").unwrap();
    assert_eq!(
        template.expand_to_string(&()).unwrap(),
        "price: 5$ (@@ stays doubled)"
    );
}
