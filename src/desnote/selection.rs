//! # Selection Subsystem
//!
//! Tracks which entities are selected while the UI is in bulk mode. Notes
//! and folders share one selection set, but entries are tagged by kind so
//! that legality checks never have to cross-reference the folder list.

use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SelectedId {
    Note(String),
    Folder(String),
}

#[derive(Debug, Clone, Default)]
pub struct Selection {
    items: HashSet<SelectedId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the entry if absent, removes it if present. Returns true when
    /// the entry is selected after the call.
    pub fn toggle(&mut self, entry: SelectedId) -> bool {
        if self.items.remove(&entry) {
            false
        } else {
            self.items.insert(entry);
            true
        }
    }

    /// Empties the set; invoked on selection-mode exit and after bulk ops.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn contains_note(&self, id: &str) -> bool {
        self.items.contains(&SelectedId::Note(id.to_string()))
    }

    pub fn contains_folder(&self, id: &str) -> bool {
        self.items.contains(&SelectedId::Folder(id.to_string()))
    }

    pub fn folder_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.items.iter().filter_map(|entry| match entry {
            SelectedId::Folder(id) => Some(id.as_str()),
            SelectedId::Note(_) => None,
        })
    }

    /// A bulk move is legal iff something is selected and none of it is a
    /// folder. Folders are never movable as a unit.
    pub fn can_bulk_move(&self) -> bool {
        !self.items.is_empty() && self.folder_ids().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_then_removes() {
        let mut sel = Selection::new();
        assert!(sel.toggle(SelectedId::Note("a".into())));
        assert!(sel.contains_note("a"));
        assert!(!sel.toggle(SelectedId::Note("a".into())));
        assert!(sel.is_empty());
    }

    #[test]
    fn note_and_folder_with_same_id_are_distinct() {
        let mut sel = Selection::new();
        sel.toggle(SelectedId::Note("x".into()));
        sel.toggle(SelectedId::Folder("x".into()));
        assert_eq!(sel.len(), 2);
        assert!(sel.contains_note("x"));
        assert!(sel.contains_folder("x"));
    }

    #[test]
    fn can_bulk_move_requires_nonempty_note_only_selection() {
        let mut sel = Selection::new();
        assert!(!sel.can_bulk_move());

        sel.toggle(SelectedId::Note("n1".into()));
        sel.toggle(SelectedId::Note("n2".into()));
        assert!(sel.can_bulk_move());

        sel.toggle(SelectedId::Folder("f1".into()));
        assert!(!sel.can_bulk_move());

        // Removing the folder makes it legal again.
        sel.toggle(SelectedId::Folder("f1".into()));
        assert!(sel.can_bulk_move());
    }

    #[test]
    fn clear_empties_the_set() {
        let mut sel = Selection::new();
        sel.toggle(SelectedId::Note("n1".into()));
        sel.toggle(SelectedId::Folder("f1".into()));
        sel.clear();
        assert!(sel.is_empty());
        assert!(!sel.can_bulk_move());
    }
}
