use std::collections::HashMap;
use std::fs;

use inventory_content::{ConfigLoader, ContentFactory, ItemLoader};
use inventory_core::{
    Env, InventoryKind, InventoryStore, ItemDefId, ItemDefinition, ItemOracle, SlotOracle,
    check_invariants,
};

struct Catalog(HashMap<ItemDefId, ItemDefinition>);

impl ItemOracle for Catalog {
    fn definition(&self, id: ItemDefId) -> Option<ItemDefinition> {
        self.0.get(&id).cloned()
    }

    fn all_definitions(&self) -> Vec<ItemDefinition> {
        self.0.values().cloned().collect()
    }
}

#[test]
fn bundled_content_loads() {
    let factory = ContentFactory::bundled();

    let items = factory.load_items().unwrap();
    assert_eq!(items.len(), 11);
    assert!(items.iter().any(|item| item.name == "Hiking backpack" && item.is_container()));

    let slots = factory.load_slots().unwrap();
    assert_eq!(slots.slots().len(), 8);

    assert!(factory.load_config().unwrap().verify_invariants);

    let inventories = factory.load_inventories().unwrap();
    let kinds: Vec<_> = inventories.iter().map(|inventory| inventory.kind).collect();
    assert_eq!(
        kinds,
        vec![InventoryKind::Vicinity, InventoryKind::Hand, InventoryKind::Player]
    );
}

#[test]
fn bundled_starting_state_is_consistent() {
    let factory = ContentFactory::bundled();
    let catalog = Catalog(
        factory
            .load_items()
            .unwrap()
            .into_iter()
            .map(|item| (item.id, item))
            .collect(),
    );
    let slots = factory.load_slots().unwrap();
    let store = InventoryStore::new(factory.load_inventories().unwrap());

    let env = Env::with_all(&catalog, &slots).into_inventory_env();
    assert_eq!(check_invariants(&store, &env), Ok(()));
}

#[test]
fn config_keys_are_optional() {
    let dir = tempfile::tempdir().unwrap();

    let path = dir.path().join("config.toml");
    fs::write(&path, "verify_invariants = false\n").unwrap();
    assert!(!ConfigLoader::load(&path).unwrap().verify_invariants);

    fs::write(&path, "").unwrap();
    assert!(ConfigLoader::load(&path).unwrap().verify_invariants);
}

#[test]
fn factory_reads_custom_directory() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("items.ron"),
        r#"#![enable(unwrap_newtypes)]
        (items: [(
            id: 1, name: "Bandage", image: "bandage",
            width: 2, height: 1, weight: 50, limit: 5, kind: General,
        )])"#,
    )
    .unwrap();

    let factory = ContentFactory::new(dir.path());
    let items = factory.load_items().unwrap();
    assert_eq!(items[0].limit, 5);

    let err = factory.load_slots().unwrap_err();
    assert!(err.to_string().contains("slots.ron"));
}

#[test]
fn malformed_catalog_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("items.ron");
    fs::write(&path, "(items: [(id: 1)])").unwrap();

    let err = ItemLoader::load(&path).unwrap_err();
    assert!(err.to_string().contains("item catalog"));
}
