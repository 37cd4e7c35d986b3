use mediashelf_core::{MediaStore, MemoryStorage, Shelf, ShelfIcon};

fn empty_store() -> MediaStore<MemoryStorage> {
    MediaStore::load(MemoryStorage::new()).unwrap()
}

fn shelf(id: &str, name: &str) -> Shelf {
    Shelf::with_id(id.to_string(), name, ShelfIcon::new(0xe02f, None))
}

fn shelf_names(store: &MediaStore<MemoryStorage>) -> Vec<String> {
    store.shelves().iter().map(|s| s.name.clone()).collect()
}

#[test]
fn add_and_get_shelf() {
    let mut store = empty_store();
    store.add_shelf(shelf("1", "Books")).unwrap();

    let loaded = store.shelf("1").unwrap();
    assert_eq!(loaded.name, "Books");
    assert!(store.shelf("2").is_none());
}

#[test]
fn update_shelf_replaces_matching_id() {
    let mut store = empty_store();
    store.add_shelf(shelf("1", "Books")).unwrap();

    let mut renamed = shelf("1", "Novels");
    renamed.icon = ShelfIcon::new(0xe90a, Some("MaterialIcons".to_string()));
    store.update_shelf(renamed).unwrap();

    let loaded = store.shelf("1").unwrap();
    assert_eq!(loaded.name, "Novels");
    assert_eq!(loaded.icon.code_point, 0xe90a);
}

#[test]
fn update_unknown_shelf_is_a_noop() {
    let mut store = empty_store();
    store.add_shelf(shelf("1", "Books")).unwrap();

    store.update_shelf(shelf("ghost", "Ghost")).unwrap();

    assert_eq!(store.shelves().len(), 1);
    assert_eq!(store.shelf("1").unwrap().name, "Books");
}

#[test]
fn store_itself_permits_duplicate_names() {
    // Name uniqueness belongs to the command boundary; the store takes
    // whatever it is given.
    let mut store = empty_store();
    store.add_shelf(shelf("1", "Books")).unwrap();
    store.add_shelf(shelf("2", "books")).unwrap();
    assert_eq!(store.shelves().len(), 2);
}

#[test]
fn delete_shelf_cascades_only_to_its_items() {
    use mediashelf_core::Item;

    let mut store = empty_store();
    store.add_shelf(shelf("s1", "Books")).unwrap();
    store.add_shelf(shelf("s2", "Films")).unwrap();
    store
        .add_items(vec![
            Item::with_id("i1".to_string(), "s1".to_string(), "Dune"),
            Item::with_id("i2".to_string(), "s1".to_string(), "Foundation"),
            Item::with_id("i3".to_string(), "s2".to_string(), "Alien"),
        ])
        .unwrap();

    store.delete_shelf(&"s1".to_string()).unwrap();

    assert!(store.shelf("s1").is_none());
    assert!(store.items_for_shelf("s1").is_empty());
    let survivors: Vec<_> = store.items().iter().map(|i| i.id.as_str()).collect();
    assert_eq!(survivors, vec!["i3"]);
}

#[test]
fn reorder_moves_first_to_end() {
    let mut store = empty_store();
    for (id, name) in [("1", "A"), ("2", "B"), ("3", "C")] {
        store.add_shelf(shelf(id, name)).unwrap();
    }

    store.reorder_shelf(0, 2).unwrap();
    assert_eq!(shelf_names(&store), vec!["B", "C", "A"]);
}

#[test]
fn reorder_moves_last_to_front() {
    let mut store = empty_store();
    for (id, name) in [("1", "A"), ("2", "B"), ("3", "C")] {
        store.add_shelf(shelf(id, name)).unwrap();
    }

    store.reorder_shelf(2, 0).unwrap();
    assert_eq!(shelf_names(&store), vec!["C", "A", "B"]);
}

#[test]
fn reorder_to_one_past_end_appends() {
    let mut store = empty_store();
    for (id, name) in [("1", "A"), ("2", "B"), ("3", "C")] {
        store.add_shelf(shelf(id, name)).unwrap();
    }

    store.reorder_shelf(0, 3).unwrap();
    assert_eq!(shelf_names(&store), vec!["B", "C", "A"]);
}

#[test]
fn reorder_adjacent_forward_moves_one_slot() {
    let mut store = empty_store();
    for (id, name) in [("1", "A"), ("2", "B"), ("3", "C")] {
        store.add_shelf(shelf(id, name)).unwrap();
    }

    store.reorder_shelf(0, 1).unwrap();
    assert_eq!(shelf_names(&store), vec!["B", "A", "C"]);
}

#[test]
fn reorder_to_same_position_is_a_noop() {
    let mut store = empty_store();
    for (id, name) in [("1", "A"), ("2", "B"), ("3", "C")] {
        store.add_shelf(shelf(id, name)).unwrap();
    }

    store.reorder_shelf(1, 1).unwrap();
    assert_eq!(shelf_names(&store), vec!["A", "B", "C"]);
}

#[test]
fn reorder_out_of_bounds_is_a_noop() {
    let mut store = empty_store();
    for (id, name) in [("1", "A"), ("2", "B"), ("3", "C")] {
        store.add_shelf(shelf(id, name)).unwrap();
    }

    store.reorder_shelf(3, 0).unwrap();
    store.reorder_shelf(0, 4).unwrap();
    assert_eq!(shelf_names(&store), vec!["A", "B", "C"]);
}
