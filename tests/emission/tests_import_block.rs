#![allow(clippy::unwrap_used)]

use jimports::{
    CompilationUnitScope, GroupOrder, ImportBlock, ImportLayout, ImportRegistry, ScopeChain,
    emit, resolve,
};
use rstest::rstest;

fn scenario_registry() -> ImportRegistry {
    let chain = ScopeChain::new(CompilationUnitScope::new("com.generated"));
    let mut registry = ImportRegistry::new();
    for raw in [
        "org.test.bla.Clazz1",
        "org.test.bla.Clazz2",
        "net.application.whatever.Clazz4",
        "net.application.whatever.Clazz5",
        "net.application.whatever.Clazz6",
        "javax.test.Clazz7",
    ] {
        resolve(raw, &chain, &mut registry).unwrap();
    }
    registry
        .add_static_import("org.test.bla.Clazz1.myMethod")
        .unwrap();
    registry
}

#[test]
fn test_scenario_default_layout() {
    assert_eq!(
        emit(&scenario_registry(), &ImportLayout::default()),
        vec![
            "import static org.test.bla.Clazz1.myMethod;",
            "",
            "import javax.test.Clazz7;",
            "",
            "import net.application.whatever.Clazz4;",
            "import net.application.whatever.Clazz5;",
            "import net.application.whatever.Clazz6;",
            "",
            "import org.test.bla.Clazz1;",
            "import org.test.bla.Clazz2;",
        ]
    );
}

#[rstest]
#[case(GroupOrder::Lexicographic, &["javax", "net", "org"])]
#[case(GroupOrder::FirstSeen, &["org", "net", "javax"])]
#[case(GroupOrder::Pinned(vec!["net".to_string()]), &["net", "javax", "org"])]
fn test_scenario_group_orders(#[case] order: GroupOrder, #[case] expected: &[&str]) {
    let layout = ImportLayout::new().with_group_order(order);
    let block = ImportBlock::build(&scenario_registry(), &layout);

    let mut groups: Vec<String> = Vec::new();
    for declaration in block.declarations().filter(|d| !d.is_static()) {
        let key = layout.group_key(declaration.name()).to_string();
        if groups.last() != Some(&key) {
            groups.push(key);
        }
    }
    assert_eq!(groups, expected);
}

#[test]
fn test_emitted_block_parses_back_into_a_registry() {
    let original = scenario_registry();
    let text = ImportBlock::build(&original, &ImportLayout::default()).to_string();

    let mut reloaded = ImportRegistry::new();
    let seeded = reloaded.seed_from_declarations(text.lines()).unwrap();
    assert_eq!(seeded, 7);
    assert_eq!(
        emit(&reloaded, &ImportLayout::default()),
        emit(&original, &ImportLayout::default())
    );
}
