//! Folder navigation and the breadcrumb trail.
//!
//! The trail is a click history, not a path recomputed from the store:
//! opening a folder that is not on the trail appends it, and opening one
//! that is already on the trail cuts everything after it. One operation,
//! [`Navigator::navigate`], serves both the folder rows and the breadcrumbs.

use crate::store::ItemStore;

/// One folder on the breadcrumb trail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Breadcrumb {
    pub id: String,
    pub name: String,
}

impl Breadcrumb {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Navigation session: the open folder plus the trail that led to it.
///
/// # Invariants
///
/// - The trail is never empty and starts with the root entry.
/// - The last trail entry always has id `current_folder`.
///
/// `navigate` accepts any id. Opening a file id or an unknown id is valid
/// and shows an empty listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Navigator {
    current_folder: String,
    trail: Vec<Breadcrumb>,
}

impl Navigator {
    /// Start a session at the given root folder.
    pub fn new(root_id: impl Into<String>, root_name: impl Into<String>) -> Self {
        let root = Breadcrumb::new(root_id, root_name);
        Self {
            current_folder: root.id.clone(),
            trail: vec![root],
        }
    }

    /// Start a session at the root of a store.
    pub fn for_store(store: &ItemStore) -> Self {
        Self::new(store.root_id(), store.root_name())
    }

    /// Open a folder.
    ///
    /// If `target_id` is already on the trail, the trail is truncated right
    /// after that entry and its recorded name is kept (`target_name` is
    /// ignored). Otherwise `{target_id, target_name}` is appended. Either
    /// way the target becomes the current folder.
    pub fn navigate(&mut self, target_id: &str, target_name: &str) {
        match self.position(target_id) {
            Some(index) => self.trail.truncate(index + 1),
            None => self.trail.push(Breadcrumb::new(target_id, target_name)),
        }
        self.current_folder = target_id.to_string();
    }

    /// Jump back to the first trail entry.
    pub fn go_root(&mut self) {
        let root = self.trail[0].clone();
        self.navigate(&root.id, &root.name);
    }

    /// Jump back one entry. Returns `false` when already at the root.
    pub fn go_up(&mut self) -> bool {
        match self.parent().cloned() {
            Some(parent) => {
                self.navigate(&parent.id, &parent.name);
                true
            }
            None => false,
        }
    }

    /// Identifier of the open folder.
    pub fn current_folder(&self) -> &str {
        &self.current_folder
    }

    /// Display name of the open folder, as recorded on the trail.
    pub fn current_name(&self) -> &str {
        self.trail
            .last()
            .map(|crumb| crumb.name.as_str())
            .unwrap_or(self.current_folder.as_str())
    }

    /// Breadcrumbs from the root to the open folder.
    pub fn trail(&self) -> &[Breadcrumb] {
        &self.trail
    }

    /// Entry just before the open folder, if any.
    pub fn parent(&self) -> Option<&Breadcrumb> {
        self.trail.len().checked_sub(2).map(|i| &self.trail[i])
    }

    /// Number of entries below the root.
    pub fn depth(&self) -> usize {
        self.trail.len() - 1
    }

    pub fn is_at_root(&self) -> bool {
        self.trail.len() == 1
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.trail.iter().position(|crumb| crumb.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(nav: &Navigator) -> Vec<&str> {
        nav.trail().iter().map(|c| c.id.as_str()).collect()
    }

    fn fresh() -> Navigator {
        Navigator::new("root", "My Drive")
    }

    #[test]
    fn test_initial_state() {
        let nav = fresh();
        assert_eq!(nav.current_folder(), "root");
        assert_eq!(nav.current_name(), "My Drive");
        assert_eq!(nav.trail(), &[Breadcrumb::new("root", "My Drive")]);
        assert!(nav.is_at_root());
        assert_eq!(nav.depth(), 0);
        assert!(nav.parent().is_none());
    }

    #[test]
    fn test_navigate_appends() {
        let mut nav = fresh();
        nav.navigate("folder1", "Documents");

        assert_eq!(ids(&nav), vec!["root", "folder1"]);
        assert_eq!(nav.current_folder(), "folder1");
        assert_eq!(nav.current_name(), "Documents");
        assert_eq!(nav.parent(), Some(&Breadcrumb::new("root", "My Drive")));
    }

    #[test]
    fn test_navigate_back_to_root_truncates() {
        let mut nav = fresh();
        nav.navigate("A", "A");
        nav.navigate("B", "B");
        nav.navigate("root", "My Drive");

        assert_eq!(ids(&nav), vec!["root"]);
        assert_eq!(nav.current_folder(), "root");
    }

    #[test]
    fn test_navigate_to_middle_entry() {
        let mut nav = fresh();
        nav.navigate("folder1", "Documents");
        nav.navigate("folder3", "Work");
        nav.navigate("folder1", "Documents");

        assert_eq!(ids(&nav), vec!["root", "folder1"]);
        assert_eq!(nav.current_folder(), "folder1");
    }

    #[test]
    fn test_navigate_to_current_is_noop() {
        let mut nav = fresh();
        nav.navigate("folder1", "Documents");
        let before = nav.clone();

        nav.navigate("folder1", "Documents");
        assert_eq!(nav, before);
    }

    #[test]
    fn test_rematch_keeps_recorded_name() {
        let mut nav = fresh();
        nav.navigate("folder1", "Documents");
        nav.navigate("folder1", "Renamed");

        assert_eq!(nav.current_name(), "Documents");
        assert_eq!(nav.trail()[1].name, "Documents");
    }

    #[test]
    fn test_navigate_sibling_appends() {
        // Trail records clicks, not ancestry: a sibling is appended after
        // the folder it was reached from.
        let mut nav = fresh();
        nav.navigate("folder1", "Documents");
        nav.navigate("folder2", "Images");

        assert_eq!(ids(&nav), vec!["root", "folder1", "folder2"]);
    }

    #[test]
    fn test_navigate_accepts_any_id() {
        let mut nav = fresh();
        nav.navigate("file1", "Project Proposal.docx");
        nav.navigate("does-not-exist", "Ghost");

        assert_eq!(ids(&nav), vec!["root", "file1", "does-not-exist"]);
        assert_eq!(nav.current_folder(), "does-not-exist");
    }

    #[test]
    fn test_go_up_and_go_root() {
        let mut nav = fresh();
        assert!(!nav.go_up());

        nav.navigate("folder1", "Documents");
        nav.navigate("folder3", "Work");
        assert!(nav.go_up());
        assert_eq!(ids(&nav), vec!["root", "folder1"]);
        assert_eq!(nav.depth(), 1);

        nav.navigate("folder3", "Work");
        nav.go_root();
        assert_eq!(ids(&nav), vec!["root"]);
        assert_eq!(nav.current_folder(), "root");
    }

    #[test]
    fn test_for_store() {
        let store = ItemStore::sample().unwrap();
        let nav = Navigator::for_store(&store);
        assert_eq!(nav.trail(), &[Breadcrumb::new("root", "My Drive")]);

        let nav = Navigator::for_store(&ItemStore::empty());
        assert_eq!(nav.current_folder(), "root");
        assert_eq!(nav.current_name(), "root");
    }
}
