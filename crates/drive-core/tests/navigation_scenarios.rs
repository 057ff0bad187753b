//! End-to-end navigation over the sample drive: clicks on folder rows and
//! breadcrumbs, followed by the listing the file panel would render.

use drive_core::listing::resolve;
use drive_core::{Breadcrumb, Entity, FileKind, ItemKind, ItemStore, Navigator};

fn setup() -> (ItemStore, Navigator) {
    let store = ItemStore::sample().expect("sample manifest should load");
    let nav = Navigator::for_store(&store);
    (store, nav)
}

fn trail_ids(nav: &Navigator) -> Vec<&str> {
    nav.trail().iter().map(|c| c.id.as_str()).collect()
}

/// Click a folder row the way the file list does.
fn open(nav: &mut Navigator, entity: &Entity) {
    nav.navigate(entity.id(), entity.name());
}

#[test]
fn test_root_lists_five_children() {
    let (store, nav) = setup();
    let listing = resolve(&store, nav.current_folder());

    let ids: Vec<_> = listing.iter().map(|e| e.id()).collect();
    assert_eq!(ids, vec!["folder1", "folder2", "file1", "file2", "file3"]);
    assert!(listing[0].is_folder());
    assert_eq!(listing[3].kind(), ItemKind::File(FileKind::Spreadsheet));
}

#[test]
fn test_descend_to_work_folder() {
    let (store, mut nav) = setup();

    let documents = store.lookup("folder1").unwrap().clone();
    open(&mut nav, &documents);
    assert_eq!(trail_ids(&nav), vec!["root", "folder1"]);

    nav.navigate("folder3", "Work");
    assert_eq!(trail_ids(&nav), vec!["root", "folder1", "folder3"]);
    assert_eq!(nav.current_folder(), "folder3");

    let listing = resolve(&store, nav.current_folder());
    assert_eq!(listing.len(), 1);

    let report = listing[0].as_file().expect("file8 is a file");
    assert_eq!(report.id, "file8");
    assert_eq!(report.name, "Report.pdf");
    assert_eq!(report.kind, FileKind::Pdf);
    assert_eq!(report.size, "3.5 MB");
}

#[test]
fn test_breadcrumb_click_jumps_back() {
    let (store, mut nav) = setup();
    nav.navigate("folder1", "Documents");
    nav.navigate("folder3", "Work");

    // Clicking a breadcrumb replays its own id and name.
    let root = nav.trail()[0].clone();
    nav.navigate(&root.id, &root.name);

    assert_eq!(nav.trail(), &[Breadcrumb::new("root", "My Drive")]);
    assert_eq!(resolve(&store, nav.current_folder()).len(), 5);
}

#[test]
fn test_reclick_current_breadcrumb_keeps_trail() {
    let (_, mut nav) = setup();
    nav.navigate("folder1", "Documents");

    let current = nav.trail().last().unwrap().clone();
    nav.navigate(&current.id, &current.name);

    assert_eq!(trail_ids(&nav), vec!["root", "folder1"]);
}

#[test]
fn test_opening_file_id_shows_empty_listing() {
    let (store, mut nav) = setup();
    nav.navigate("file1", "Project Proposal.docx");

    assert_eq!(nav.current_folder(), "file1");
    assert!(resolve(&store, nav.current_folder()).is_empty());

    // The session stays usable afterwards.
    nav.navigate("root", "My Drive");
    assert_eq!(resolve(&store, nav.current_folder()).len(), 5);
}

#[test]
fn test_every_folder_listing_is_order_preserving_subset() {
    let (store, _) = setup();

    for entity in store.iter() {
        let Some(folder) = entity.as_folder() else {
            continue;
        };
        let listing = resolve(&store, &folder.id);
        assert!(listing.len() <= folder.children.len());

        let mut cursor = folder.children.iter();
        for item in listing {
            assert!(
                cursor.any(|child| child == item.id()),
                "{} out of order in {}",
                item.id(),
                folder.id
            );
        }
    }
}
