//! The workspace state container.
//!
//! All user-visible state lives in one [`Workspace`]: the folder collection
//! and the root-level notes. Every mutation goes through `commands/*`, which
//! take `&mut Workspace`; nothing else writes to these collections. The UI
//! side (CLI or otherwise) only ever reads.

use crate::error::{DesnoteError, Result};
use crate::model::{Folder, Location, Note};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Workspace {
    pub folders: Vec<Folder>,
    pub root_notes: Vec<Note>,
}

impl Workspace {
    pub fn new(folders: Vec<Folder>, root_notes: Vec<Note>) -> Self {
        Self {
            folders,
            root_notes,
        }
    }

    pub fn folder(&self, id: &str) -> Option<&Folder> {
        self.folders.iter().find(|f| f.id == id)
    }

    pub fn folder_mut(&mut self, id: &str) -> Option<&mut Folder> {
        self.folders.iter_mut().find(|f| f.id == id)
    }

    pub fn has_folder(&self, id: &str) -> bool {
        self.folder(id).is_some()
    }

    /// Errors with `FolderNotFound` unless `location` refers to the root or
    /// an existing folder. Used to validate destinations before a mutation
    /// removes anything.
    pub fn ensure_location(&self, location: &Location) -> Result<()> {
        match location {
            Location::Root => Ok(()),
            Location::InFolder(id) if self.has_folder(id) => Ok(()),
            Location::InFolder(id) => Err(DesnoteError::FolderNotFound(id.clone())),
        }
    }

    /// The note sequence for a container, or None if the folder is gone.
    pub fn notes_in(&self, location: &Location) -> Option<&Vec<Note>> {
        match location {
            Location::Root => Some(&self.root_notes),
            Location::InFolder(id) => self.folder(id).map(|f| &f.notes),
        }
    }

    pub fn notes_in_mut(&mut self, location: &Location) -> Option<&mut Vec<Note>> {
        match location {
            Location::Root => Some(&mut self.root_notes),
            Location::InFolder(id) => self.folder_mut(id).map(|f| &mut f.notes),
        }
    }

    /// Looks a note up across every container.
    pub fn find_note(&self, note_id: &str) -> Option<(Location, &Note)> {
        if let Some(note) = self.root_notes.iter().find(|n| n.id == note_id) {
            return Some((Location::Root, note));
        }
        for folder in &self.folders {
            if let Some(note) = folder.notes.iter().find(|n| n.id == note_id) {
                return Some((Location::InFolder(folder.id.clone()), note));
            }
        }
        None
    }

    /// Total note count across root and all folders.
    pub fn note_count(&self) -> usize {
        self.root_notes.len() + self.folders.iter().map(|f| f.notes.len()).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Workspace {
        let mut folder = Folder::new("work".into());
        folder.notes.push(Note::new("inside".into()));
        Workspace::new(vec![folder], vec![Note::new("loose".into())])
    }

    #[test]
    fn find_note_reports_container() {
        let ws = sample();
        let folder_id = ws.folders[0].id.clone();
        let inside_id = ws.folders[0].notes[0].id.clone();
        let loose_id = ws.root_notes[0].id.clone();

        let (loc, note) = ws.find_note(&inside_id).unwrap();
        assert_eq!(loc, Location::InFolder(folder_id));
        assert_eq!(note.title, "inside");

        let (loc, _) = ws.find_note(&loose_id).unwrap();
        assert_eq!(loc, Location::Root);

        assert!(ws.find_note("missing").is_none());
    }

    #[test]
    fn ensure_location_rejects_unknown_folder() {
        let ws = sample();
        assert!(ws.ensure_location(&Location::Root).is_ok());
        let err = ws
            .ensure_location(&Location::InFolder("nope".into()))
            .unwrap_err();
        assert!(matches!(err, DesnoteError::FolderNotFound(_)));
    }

    #[test]
    fn note_count_spans_all_containers() {
        assert_eq!(sample().note_count(), 2);
    }
}
