#![allow(clippy::unwrap_used)]

use jimports::{
    CompilationUnitScope, ImportError, ImportRegistry, MalformedKind, ScopeChain, resolve,
};
use rstest::rstest;

fn chain() -> ScopeChain {
    ScopeChain::new(CompilationUnitScope::new("my.pkg"))
}

#[rstest]
#[case(
    "java.util.Set<? extends java.util.List<java.lang.CharSequence[]>[]>[]",
    "Set<? extends List<CharSequence[]>[]>[]",
    &["java.util.Set", "java.util.List"]
)]
#[case(
    "d.e.f.MyClassOne<java.lang.Long>.InnerClass.SecondInner",
    "MyClassOne<Long>.InnerClass.SecondInner",
    &["d.e.f.MyClassOne"]
)]
#[case("my.pkg.Sibling[]", "Sibling[]", &[])]
#[case("my.pkg.sub.Child", "Child", &["my.pkg.sub.Child"])]
#[case("java.lang.reflect.Method", "Method", &["java.lang.reflect.Method"])]
#[case("? super java.lang.Number", "? super Number", &[])]
#[case("java.util.Map<?,? extends a.b.C$D>", "Map<?,? extends D>", &["java.util.Map", "a.b.C.D"])]
fn test_single_reference(#[case] raw: &str, #[case] rendered: &str, #[case] imports: &[&str]) {
    let chain = chain();
    let mut registry = ImportRegistry::new();
    assert_eq!(resolve(raw, &chain, &mut registry).unwrap(), rendered);
    assert_eq!(registry.imports().collect::<Vec<_>>(), imports);
}

#[rstest]
#[case("java.util.List<java.util.Map<a.K,b.V>>")]
#[case("x.Y$Z[][]")]
#[case("? extends java.lang.Comparable<? super T>")]
fn test_resolution_is_idempotent(#[case] raw: &str) {
    let chain = chain();
    let mut registry = ImportRegistry::new();
    let first = resolve(raw, &chain, &mut registry).unwrap();
    let imports: Vec<String> = registry.imports().map(str::to_string).collect();
    let second = resolve(raw, &chain, &mut registry).unwrap();
    assert_eq!(first, second);
    assert_eq!(registry.imports().collect::<Vec<_>>(), imports);
}

#[rstest]
#[case("pkg1.X", "pkg2.X")]
#[case("java.lang.Override", "my.annotations.Override")]
#[case("my.pkg.Thing", "other.Thing")]
fn test_first_use_wins(#[case] first: &str, #[case] second: &str) {
    let chain = chain();
    let mut registry = ImportRegistry::new();
    let simple = first.rsplit('.').next().unwrap();
    assert_eq!(resolve(first, &chain, &mut registry).unwrap(), simple);
    assert_eq!(resolve(second, &chain, &mut registry).unwrap(), second);
    assert_eq!(resolve(first, &chain, &mut registry).unwrap(), simple);
    assert_eq!(registry.lookup(simple), Some(first));
}

#[rstest]
#[case("", MalformedKind::Empty)]
#[case("java.util.List<a.B", MalformedKind::UnbalancedAngleBrackets)]
#[case("a.B>", MalformedKind::UnbalancedAngleBrackets)]
#[case("a.B[", MalformedKind::UnbalancedSquareBrackets)]
#[case("a.B]", MalformedKind::UnbalancedSquareBrackets)]
fn test_malformed_references_fail_the_call(#[case] raw: &str, #[case] kind: MalformedKind) {
    let chain = chain();
    let mut registry = ImportRegistry::new();
    let err = resolve(raw, &chain, &mut registry).unwrap_err();
    assert!(matches!(err, ImportError::MalformedReference { .. }));
    assert_eq!(err.malformed_kind(), Some(kind));
    assert!(registry.is_empty());
}

#[test]
fn test_deeply_nested_reference_fails_the_call() {
    let chain = chain();
    let mut registry = ImportRegistry::new();
    let raw = format!("{}a.B{}", "java.util.List<".repeat(2000), ">".repeat(2000));
    let err = resolve(&raw, &chain, &mut registry).unwrap_err();
    assert_eq!(err.malformed_kind(), Some(MalformedKind::NestingTooDeep));
    assert!(registry.is_empty());

    // The registry stays usable afterwards
    assert_eq!(resolve("java.util.List<a.B>", &chain, &mut registry).unwrap(), "List<B>");
}
