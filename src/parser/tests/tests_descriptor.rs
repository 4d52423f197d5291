#![allow(clippy::unwrap_used)]

use crate::base::MalformedKind;
use crate::parser::{ReferenceDescriptor, is_identifier};
use rstest::rstest;

#[test]
fn test_binary_name_splits_package_from_enclosing_types() {
    let d = ReferenceDescriptor::parse("a.b.c.MyClass$InnerClass$SecondInner").unwrap();
    assert_eq!(d.package_name(), Some("a.b.c"));
    assert_eq!(d.qualifier(), Some("a.b.c.MyClass.InnerClass"));
    assert_eq!(d.simple_name(), "SecondInner");
    assert_eq!(d.qualified_name(), "a.b.c.MyClass.InnerClass.SecondInner");
    assert!(!d.is_base_type());
}

#[test]
fn test_dotted_name_reports_package_and_qualifier_identically() {
    let d = ReferenceDescriptor::parse("a.b.c.MyClass.InnerClass.SecondInner").unwrap();
    assert_eq!(d.package_name(), Some("a.b.c.MyClass.InnerClass"));
    assert_eq!(d.qualifier(), Some("a.b.c.MyClass.InnerClass"));
    assert_eq!(d.simple_name(), "SecondInner");
    assert_eq!(d.qualified_name(), "a.b.c.MyClass.InnerClass.SecondInner");
}

#[test]
fn test_mixed_separators_use_first_dollar_for_package() {
    let d = ReferenceDescriptor::parse("a.b.Outer$Middle.Inner").unwrap();
    assert_eq!(d.package_name(), Some("a.b"));
    assert_eq!(d.qualifier(), Some("a.b.Outer.Middle"));
    assert_eq!(d.qualified_name(), "a.b.Outer.Middle.Inner");
}

#[test]
fn test_binary_name_without_package() {
    let d = ReferenceDescriptor::parse("Outer$Inner").unwrap();
    assert_eq!(d.package_name(), None);
    assert_eq!(d.qualifier(), Some("Outer"));
    assert_eq!(d.simple_name(), "Inner");
}

#[test]
fn test_simple_name_has_no_package_or_qualifier() {
    let d = ReferenceDescriptor::parse("T").unwrap();
    assert_eq!(d.package_name(), None);
    assert_eq!(d.qualifier(), None);
    assert_eq!(d.qualified_name(), "T");
    assert!(!d.is_qualified());
}

#[rstest]
#[case("boolean")]
#[case("byte")]
#[case("char")]
#[case("short")]
#[case("int")]
#[case("long")]
#[case("float")]
#[case("double")]
#[case("void")]
fn test_base_types(#[case] keyword: &str) {
    let d = ReferenceDescriptor::parse(keyword).unwrap();
    assert!(d.is_base_type());
    assert_eq!(d.simple_name(), keyword);
    assert_eq!(d.qualified_name(), keyword);
    assert_eq!(d.package_name(), None);
    assert_eq!(d.qualifier(), None);
}

#[test]
fn test_equality_is_textual() {
    let binary = ReferenceDescriptor::parse("a.B$C").unwrap();
    let dotted = ReferenceDescriptor::parse("a.B.C").unwrap();
    assert_eq!(binary.qualified_name(), dotted.qualified_name());
    assert_ne!(binary, dotted);
    assert_eq!(dotted, ReferenceDescriptor::parse("a.B.C").unwrap());
}

#[test]
fn test_top_level_membership_uses_qualifier() {
    let top = ReferenceDescriptor::parse("a.b.C").unwrap();
    let nested = ReferenceDescriptor::parse("a.b.C$D").unwrap();
    assert!(top.is_top_level_in("a.b"));
    assert!(!nested.is_top_level_in("a.b"));
}

#[rstest]
#[case("", MalformedKind::Empty)]
#[case("   ", MalformedKind::Empty)]
#[case("a..B", MalformedKind::MissingIdentifier)]
#[case("a.B.", MalformedKind::MissingIdentifier)]
#[case("$B", MalformedKind::MissingIdentifier)]
#[case("a.B<C>", MalformedKind::InvalidCharacter)]
#[case("1a.B", MalformedKind::InvalidCharacter)]
fn test_malformed_tokens(#[case] token: &str, #[case] kind: MalformedKind) {
    let err = ReferenceDescriptor::parse(token).unwrap_err();
    assert_eq!(err.malformed_kind(), Some(kind));
}

#[test]
fn test_surrounding_whitespace_is_ignored() {
    let d = ReferenceDescriptor::parse("  java.util.List ").unwrap();
    assert_eq!(d.qualified_name(), "java.util.List");
}

#[test]
fn test_is_identifier() {
    assert!(is_identifier("_private"));
    assert!(is_identifier("Straße"));
    assert!(!is_identifier("a$b"));
    assert!(!is_identifier("9lives"));
    assert!(!is_identifier(""));
}
