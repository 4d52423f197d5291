#![allow(clippy::unwrap_used)]

use crate::helpers::unit_fixtures::{UnitFixture, type_scope};

#[test]
fn test_dto_generation_pass() {
    let mut unit = UnitFixture::new("com.acme.dto", "OrderDto");

    // Fields
    assert_eq!(unit.resolve("java.lang.String"), "String");
    assert_eq!(unit.resolve("java.util.List<com.acme.dto.LineDto>"), "List<LineDto>");
    assert_eq!(
        unit.resolve("java.util.Map<java.lang.String,java.math.BigDecimal[]>"),
        "Map<String,BigDecimal[]>"
    );
    // Same simple name from a different library
    assert_eq!(unit.resolve("java.awt.List"), "java.awt.List");
    // The unit's own type name belongs to the unit
    assert_eq!(unit.resolve("com.other.OrderDto"), "com.other.OrderDto");
    assert_eq!(unit.resolve("com.acme.dto.OrderDto"), "OrderDto");

    assert_eq!(
        unit.imports(),
        vec!["java.util.List", "java.util.Map", "java.math.BigDecimal"]
    );
}

#[test]
fn test_nested_types_stack_scopes() {
    let mut unit = UnitFixture::new("com.acme", "Outer");
    let outer = type_scope("com.acme.Outer", &["Builder", "Node"]);
    let mut builder = type_scope("com.acme.Outer$Builder", &[]);
    builder.add_type_parameter("B").unwrap();

    assert_eq!(unit.resolve_in(&outer, "com.acme.Outer.Node"), "Node");
    assert_eq!(unit.resolve_in(&outer, "org.graph.Node"), "org.graph.Node");

    let nested = unit.chain.enclose(outer.clone()).enclose(builder);
    let rendered = jimports::resolve(
        "java.util.function.Function<B,com.acme.Outer.Node>",
        &nested,
        &mut unit.registry,
    )
    .unwrap();
    assert_eq!(rendered, "Function<B,Node>");

    // Outside the nested types, Node is free to be imported
    assert_eq!(unit.resolve("org.graph.Node"), "Node");
    assert_eq!(
        unit.imports(),
        vec!["java.util.function.Function", "org.graph.Node"]
    );
}

#[test]
fn test_supertype_nested_types_visible_in_subclass() {
    let mut unit = UnitFixture::new("com.acme", "Registry");
    let mut registry_type = type_scope("com.acme.Registry", &[]);
    registry_type.add_inherited_type("java.util.Map$Entry").unwrap();

    assert_eq!(
        unit.resolve_in(&registry_type, "java.util.Set<java.util.Map$Entry<K,V>>"),
        "Set<Entry<K,V>>"
    );
    assert_eq!(unit.imports(), vec!["java.util.Set"]);
}

#[test]
fn test_forced_and_static_imports_alongside_resolution() {
    let mut unit = UnitFixture::new("com.acme", "Service");
    unit.registry.add_import("org.slf4j.Logger").unwrap();
    unit.registry
        .add_static_import("java.util.Objects.requireNonNull")
        .unwrap();

    assert_eq!(unit.resolve("org.slf4j.Logger"), "Logger");
    assert_eq!(unit.resolve("java.util.logging.Logger"), "java.util.logging.Logger");
    assert_eq!(
        unit.emit(),
        vec![
            "import static java.util.Objects.requireNonNull;",
            "",
            "import org.slf4j.Logger;",
        ]
    );
}

#[test]
fn test_existing_imports_are_respected() {
    let mut unit = UnitFixture::new("com.acme", "Legacy");
    let seeded = unit
        .registry
        .seed_from_declarations(["import java.util.Date;", "import static org.junit.Assert.*;"])
        .unwrap();
    assert_eq!(seeded, 1);
    assert_eq!(unit.resolve("java.sql.Date"), "java.sql.Date");
    assert_eq!(unit.resolve("java.util.Date"), "Date");
    assert_eq!(unit.imports(), vec!["java.util.Date"]);
}
