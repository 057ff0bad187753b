//! Folder listing.
//!
//! Resolves a folder's child ids against the store. Children that do not
//! resolve are dropped without error, so a listing is never longer than
//! the folder's child list and keeps its order.

use crate::model::Entity;
use crate::store::ItemStore;

/// Resolve the entities shown for a folder, in stored child order.
///
/// Returns an empty listing when `folder_id` is unknown or names a file.
/// Nothing is cached; callers re-run this after every navigation.
pub fn resolve<'a>(store: &'a ItemStore, folder_id: &str) -> Vec<&'a Entity> {
    let Some(folder) = store.folder(folder_id) else {
        return Vec::new();
    };

    folder
        .children
        .iter()
        .filter_map(|child| store.lookup(child))
        .collect()
}

/// Owned copy of [`resolve`], for callers that outlive the store borrow.
pub fn resolve_owned(store: &ItemStore, folder_id: &str) -> Vec<Entity> {
    resolve(store, folder_id).into_iter().cloned().collect()
}
