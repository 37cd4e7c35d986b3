use mediashelf_core::{
    CatalogService, CommandError, Item, ItemDraft, ItemValidationError, MediaStore, MemoryStorage,
    ShelfIcon, ShelfValidationError,
};

fn service() -> CatalogService<MemoryStorage> {
    CatalogService::new(MediaStore::load(MemoryStorage::new()).unwrap())
}

fn icon() -> ShelfIcon {
    ShelfIcon::new(0xe02f, None)
}

#[test]
fn create_shelf_trims_and_stores_name() {
    let mut service = service();
    let id = service.create_shelf("  Books  ", icon()).unwrap();

    let shelf = service.store().shelf(&id).unwrap();
    assert_eq!(shelf.name, "Books");
}

#[test]
fn create_shelf_rejects_blank_name() {
    let mut service = service();
    let err = service.create_shelf("   ", icon()).unwrap_err();
    assert!(matches!(
        err,
        CommandError::Shelf(ShelfValidationError::EmptyName)
    ));
}

#[test]
fn duplicate_shelf_names_are_rejected_case_insensitively() {
    let mut service = service();
    service.create_shelf("Books", icon()).unwrap();

    let err = service.create_shelf("  BOOKS ", icon()).unwrap_err();
    assert!(matches!(err, CommandError::DuplicateShelfName(_)));
    assert_eq!(service.store().shelves().len(), 1);
}

#[test]
fn rename_to_own_name_is_allowed() {
    let mut service = service();
    let id = service.create_shelf("Books", icon()).unwrap();

    service.update_shelf(&id, "books", icon()).unwrap();
    assert_eq!(service.store().shelf(&id).unwrap().name, "books");
}

#[test]
fn rename_to_another_shelfs_name_is_rejected() {
    let mut service = service();
    let books = service.create_shelf("Books", icon()).unwrap();
    service.create_shelf("Films", icon()).unwrap();

    let err = service.update_shelf(&books, "films", icon()).unwrap_err();
    assert!(matches!(err, CommandError::DuplicateShelfName(_)));
}

#[test]
fn create_item_validates_title_and_year() {
    let mut service = service();
    let shelf = service.create_shelf("Books", icon()).unwrap();

    let blank = ItemDraft::new(shelf.clone(), "   ");
    let err = service.create_item(blank).unwrap_err();
    assert!(matches!(
        err,
        CommandError::Item(ItemValidationError::EmptyTitle)
    ));

    let mut future = ItemDraft::new(shelf.clone(), "Dune");
    future.release_year = Some(12000);
    let err = service.create_item(future).unwrap_err();
    assert!(matches!(
        err,
        CommandError::Item(ItemValidationError::ReleaseYearOutOfRange(12000))
    ));

    let mut ok = ItemDraft::new(shelf.clone(), "  Dune  ");
    ok.release_year = Some(1965);
    let id = service.create_item(ok).unwrap();
    let stored = service
        .store()
        .items()
        .iter()
        .find(|item| item.id == id)
        .unwrap();
    assert_eq!(stored.title, "Dune");
    assert_eq!(stored.shelf_id, shelf);
}

#[test]
fn update_item_validates_before_store_mutation() {
    let mut service = service();
    let shelf = service.create_shelf("Books", icon()).unwrap();
    let id = service
        .create_item(ItemDraft::new(shelf.clone(), "Dune"))
        .unwrap();

    let mut bad = Item::with_id(id.clone(), shelf, "");
    bad.release_year = Some(1965);
    assert!(service.update_item(bad).is_err());

    let stored = service
        .store()
        .items()
        .iter()
        .find(|item| item.id == id)
        .unwrap();
    assert_eq!(stored.title, "Dune");
}

#[test]
fn delete_shelf_through_service_cascades() {
    let mut service = service();
    let shelf = service.create_shelf("Books", icon()).unwrap();
    service
        .create_item(ItemDraft::new(shelf.clone(), "Dune"))
        .unwrap();

    service.delete_shelf(&shelf).unwrap();
    assert!(service.store().shelves().is_empty());
    assert!(service.store().items().is_empty());
}

#[test]
fn service_commands_notify_subscribers() {
    use mediashelf_core::ChangeEvent;
    use std::cell::RefCell;
    use std::rc::Rc;

    let mut service = service();
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    service.subscribe(move |event| sink.borrow_mut().push(event));

    let shelf = service.create_shelf("Books", icon()).unwrap();
    service
        .create_item(ItemDraft::new(shelf.clone(), "Dune"))
        .unwrap();
    service.delete_shelf(&shelf).unwrap();

    assert_eq!(
        events.borrow().as_slice(),
        &[ChangeEvent::Shelves, ChangeEvent::Items, ChangeEvent::All]
    );
}
