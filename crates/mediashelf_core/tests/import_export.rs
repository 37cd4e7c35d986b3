use mediashelf_core::{
    export_shelf_items, import_items, ImportError, Item, MediaStore, MemoryStorage, Shelf,
    ShelfIcon,
};
use std::collections::HashSet;

fn store_with_shelf(shelf_id: &str) -> MediaStore<MemoryStorage> {
    let mut store = MediaStore::load(MemoryStorage::new()).unwrap();
    store
        .add_shelf(Shelf::with_id(
            shelf_id.to_string(),
            "Books",
            ShelfIcon::new(0xe02f, None),
        ))
        .unwrap();
    store
}

#[test]
fn import_skips_malformed_elements_and_assigns_identity() {
    let mut store = store_with_shelf("s1");
    let payload = r#"[
        {"title": "A"},
        {"bad": 1},
        {"title": "B", "author": "X"}
    ]"#;

    let outcome = import_items(&mut store, &"s1".to_string(), payload).unwrap();
    assert_eq!(outcome.imported, 2);
    assert_eq!(outcome.skipped, 1);

    let imported = store.items_for_shelf("s1");
    assert_eq!(imported.len(), 2);

    let mut ids = HashSet::new();
    for item in &imported {
        assert_eq!(item.shelf_id, "s1");
        assert!(!item.id.is_empty());
        assert!(ids.insert(item.id.clone()));
    }
    assert_eq!(imported[0].title, "A");
    assert_eq!(imported[1].author.as_deref(), Some("X"));
}

#[test]
fn import_skips_blank_titles() {
    let mut store = store_with_shelf("s1");
    let payload = r#"[{"title": "   "}, {"title": "Kept"}]"#;

    let outcome = import_items(&mut store, &"s1".to_string(), payload).unwrap();
    assert_eq!(outcome.imported, 1);
    assert_eq!(outcome.skipped, 1);
}

#[test]
fn import_rejects_non_array_payload() {
    let mut store = store_with_shelf("s1");

    let err = import_items(&mut store, &"s1".to_string(), r#"{"title": "A"}"#).unwrap_err();
    assert!(matches!(err, ImportError::InvalidPayload(_)));
    assert!(store.items().is_empty());
}

#[test]
fn import_ignores_payload_ids_and_shelf_references() {
    let mut store = store_with_shelf("s1");
    let payload = r#"[{"id": "stolen", "title": "A", "mediaTypeId": "elsewhere"}]"#;

    import_items(&mut store, &"s1".to_string(), payload).unwrap();

    let imported = &store.items_for_shelf("s1")[0];
    assert_ne!(imported.id, "stolen");
    assert_eq!(imported.shelf_id, "s1");
}

#[test]
fn export_produces_wire_shape_for_one_shelf_only() {
    let mut store = store_with_shelf("s1");
    store
        .add_shelf(Shelf::with_id(
            "s2".to_string(),
            "Films",
            ShelfIcon::new(0xe02c, None),
        ))
        .unwrap();

    let mut dune = Item::with_id("i1".to_string(), "s1".to_string(), "Dune");
    dune.release_year = Some(1965);
    store.add_item(dune).unwrap();
    store
        .add_item(Item::with_id("i2".to_string(), "s2".to_string(), "Alien"))
        .unwrap();

    let exported = export_shelf_items(&store, "s1").unwrap();
    let parsed: Vec<serde_json::Value> = serde_json::from_str(&exported).unwrap();
    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed[0]["title"], "Dune");
    assert_eq!(parsed[0]["mediaTypeId"], "s1");
    assert_eq!(parsed[0]["releaseYear"], 1965);
}

#[test]
fn export_then_import_copies_items_into_target_shelf() {
    let mut store = store_with_shelf("s1");
    store
        .add_shelf(Shelf::with_id(
            "s2".to_string(),
            "Backlog",
            ShelfIcon::new(0xe02c, None),
        ))
        .unwrap();
    let mut item = Item::with_id("i1".to_string(), "s1".to_string(), "Dune");
    item.notes = Some("paperback".to_string());
    store.add_item(item).unwrap();

    let exported = export_shelf_items(&store, "s1").unwrap();
    let outcome = import_items(&mut store, &"s2".to_string(), &exported).unwrap();

    assert_eq!(outcome.imported, 1);
    let copied = &store.items_for_shelf("s2")[0];
    assert_eq!(copied.title, "Dune");
    assert_eq!(copied.notes.as_deref(), Some("paperback"));
}
